//! Product and stay types.

use crate::catalog::{Review, ReviewBreakdown};
use crate::ids::{ProductId, SellerId};
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Top-level category (e.g., "Eletrônicos").
    pub category: String,
    /// Subcategory within the category (e.g., "Smartphones").
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Current price.
    #[serde(with = "money::brl")]
    pub price: Money,
    /// Price before the current discount.
    #[serde(default, with = "money::brl_opt")]
    pub original_price: Option<Money>,
    /// Discount advertised by the seller, in percent.
    #[serde(default)]
    pub discount_percentage: Option<u8>,
    /// Average rating on a 0-5 scale.
    pub rating: f64,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub review_count: u32,
    /// Merchandising badge (e.g., "Oferta").
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub storage: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Free-form location label.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Seller offering the product. A back-reference only.
    #[serde(default)]
    pub seller_id: Option<SellerId>,
    /// Units sold, as displayed on the detail page.
    #[serde(default)]
    pub sold: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Static star-count breakdown shown next to the reviews.
    #[serde(default)]
    pub review_breakdown: Option<ReviewBreakdown>,
    /// Accommodation details, present on stays only.
    #[serde(default)]
    pub stay_details: Option<StayDetails>,
}

impl Product {
    /// Create a product with the required fields; everything else is empty.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        rating: f64,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category: category.into(),
            subcategory: None,
            price,
            original_price: None,
            discount_percentage: None,
            rating,
            review_count: 0,
            badge: None,
            brand: None,
            condition: None,
            storage: None,
            color: None,
            location: None,
            tags: Vec::new(),
            seller_id: None,
            sold: None,
            description: None,
            key_features: Vec::new(),
            reviews: Vec::new(),
            review_breakdown: None,
            stay_details: None,
        }
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the seller back-reference.
    pub fn with_seller(mut self, seller_id: impl Into<SellerId>) -> Self {
        self.seller_id = Some(seller_id.into());
        self
    }

    /// Set the review count.
    pub fn with_review_count(mut self, count: u32) -> Self {
        self.review_count = count;
        self
    }

    /// Set the subcategory.
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Set the original (pre-discount) price.
    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    /// Whether the product is currently discounted.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Discount in percent, as advertised or derived from the original price.
    pub fn discount_percentage(&self) -> Option<u8> {
        if self.discount_percentage.is_some() {
            return self.discount_percentage;
        }
        let original = self.original_price?;
        if !self.is_on_sale() || original.amount_cents <= 0 {
            return None;
        }
        let saved = (original.amount_cents - self.price.amount_cents) as f64;
        Some((saved / original.amount_cents as f64 * 100.0).round() as u8)
    }

    /// Breadcrumb trail: category, subcategory, name.
    pub fn breadcrumbs(&self) -> Vec<&str> {
        let mut crumbs = vec![self.category.as_str()];
        if let Some(sub) = &self.subcategory {
            crumbs.push(sub);
        }
        crumbs.push(&self.name);
        crumbs
    }
}

/// Accommodation details for stay listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StayDetails {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub amenities: StayAmenities,
}

/// Amenities bag of a stay.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StayAmenities {
    pub beds: Option<u8>,
    pub baths: Option<u8>,
    pub guests: Option<u8>,
    pub sqft: Option<u32>,
    #[serde(default)]
    pub breakfast: bool,
    #[serde(default)]
    pub wifi: bool,
    #[serde(default)]
    pub pool: bool,
    #[serde(default)]
    pub gym: bool,
    #[serde(default)]
    pub park: bool,
    #[serde(default)]
    pub studio: bool,
}

/// A stay listing: a product with accommodation details.
///
/// Stays reuse the product record but are browsed with their own filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Stay(pub Product);

impl Stay {
    /// The underlying product record.
    pub fn product(&self) -> &Product {
        &self.0
    }

    /// Amenities, or an empty bag when the record has no stay details.
    pub fn amenities(&self) -> StayAmenities {
        self.0
            .stay_details
            .as_ref()
            .map(|d| d.amenities.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_sale_and_derived_discount() {
        let fold = Product::new(1, "Galaxy Z Fold 5", "Eletrônicos", Money::brl(807499), 4.9)
            .with_original_price(Money::brl(849999));
        assert!(fold.is_on_sale());
        assert_eq!(fold.discount_percentage(), Some(5));
    }

    #[test]
    fn test_not_on_sale_without_original_price() {
        let bread = Product::new(3, "Pão", "Comida & Bebida", Money::brl(2500), 4.9);
        assert!(!bread.is_on_sale());
        assert_eq!(bread.discount_percentage(), None);
    }

    #[test]
    fn test_advertised_discount_wins() {
        let mut p = Product::new(9, "Fone", "Eletrônicos", Money::brl(10000), 4.0)
            .with_original_price(Money::brl(20000));
        p.discount_percentage = Some(40);
        assert_eq!(p.discount_percentage(), Some(40));
    }

    #[test]
    fn test_breadcrumbs() {
        let p = Product::new(1, "Galaxy", "Eletrônicos", Money::brl(1), 4.0)
            .with_subcategory("Smartphones");
        assert_eq!(p.breadcrumbs(), vec!["Eletrônicos", "Smartphones", "Galaxy"]);
    }

    #[test]
    fn test_stay_deserializes_transparently() {
        let stay: Stay = serde_json::from_str(
            r#"{"id": 101, "name": "Rutherbrook", "category": "Chalé", "price": 1050000,
                "rating": 4.8, "review_count": 235,
                "stay_details": {"tags": ["Superhost"], "amenities": {"beds": 4, "wifi": true}}}"#,
        )
        .unwrap();
        assert_eq!(stay.product().name, "Rutherbrook");
        assert!(stay.amenities().wifi);
        assert!(!stay.amenities().pool);
    }
}
