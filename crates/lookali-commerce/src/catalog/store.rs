//! In-memory catalog store.

use crate::catalog::{Product, Seller, Service, Stay, Taxonomy};
use crate::error::CommerceError;
use crate::ids::{ProductId, SellerId, ServiceId};
use serde::{Deserialize, Serialize};

const DEMO_CATALOG: &str = include_str!("../../data/catalog.json");

/// The static marketplace catalog.
///
/// Loaded once and never mutated; every browse operation reads from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub stays: Vec<Stay>,
    #[serde(default)]
    pub taxonomy: Taxonomy,
}

impl Catalog {
    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        tracing::debug!(
            products = catalog.products.len(),
            services = catalog.services.len(),
            sellers = catalog.sellers.len(),
            stays = catalog.stays.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The bundled demo catalog.
    pub fn demo() -> Result<Self, CommerceError> {
        Self::from_json(DEMO_CATALOG)
    }

    /// Check record invariants: non-negative prices, ratings within 0-5.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let products = self
            .products
            .iter()
            .chain(self.stays.iter().map(Stay::product));
        for p in products {
            check_price(&p.name, p.price.amount_cents)?;
            check_rating(&p.name, p.rating)?;
        }
        for s in &self.services {
            if let Some(amount) = s.pricing.amount() {
                check_price(&s.name, amount.amount_cents)?;
            }
            check_rating(&s.name, s.rating)?;
        }
        for s in &self.sellers {
            check_rating(&s.name, s.rating())?;
        }
        Ok(())
    }

    /// Look up a product, including stays.
    pub fn product(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .chain(self.stays.iter().map(Stay::product))
            .find(|p| p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn service(&self, id: ServiceId) -> Result<&Service, CommerceError> {
        self.services
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CommerceError::ServiceNotFound(id.to_string()))
    }

    pub fn seller(&self, id: &SellerId) -> Result<&Seller, CommerceError> {
        self.sellers
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| CommerceError::SellerNotFound(id.to_string()))
    }

    /// Seller referenced by a product, if it exists in the catalog.
    pub fn seller_for_product(&self, product: &Product) -> Option<&Seller> {
        let id = product.seller_id.as_ref()?;
        self.sellers.iter().find(|s| &s.id == id)
    }

    /// Seller referenced by a service, if it exists in the catalog.
    pub fn seller_for_service(&self, service: &Service) -> Option<&Seller> {
        let id = service.seller_id.as_ref()?;
        self.sellers.iter().find(|s| &s.id == id)
    }

    /// Distinct product categories in catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for p in &self.products {
            if !out.contains(&p.category.as_str()) {
                out.push(&p.category);
            }
        }
        out
    }

    /// Products browsed under a category display name, after alias resolution.
    pub fn products_in(&self, name: &str) -> Vec<&Product> {
        let targets = self.taxonomy.resolve(name);
        self.products
            .iter()
            .filter(|p| targets.contains(&p.category.as_str()))
            .collect()
    }
}

fn check_price(item: &str, amount_cents: i64) -> Result<(), CommerceError> {
    if amount_cents < 0 {
        return Err(CommerceError::InvalidPrice {
            item: item.to_string(),
            amount_cents,
        });
    }
    Ok(())
}

fn check_rating(item: &str, rating: f64) -> Result<(), CommerceError> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(CommerceError::InvalidRating {
            item: item.to_string(),
            rating,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_demo_catalog_loads() {
        let catalog = Catalog::demo().unwrap();
        assert!(!catalog.products.is_empty());
        assert!(!catalog.services.is_empty());
        assert!(!catalog.sellers.is_empty());
        assert!(!catalog.stays.is_empty());
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::demo().unwrap();
        let fold = catalog.product(ProductId::new(1)).unwrap();
        assert_eq!(fold.price, Money::brl(807499));

        let seller = catalog.seller_for_product(fold).unwrap();
        assert_eq!(seller.id, SellerId::new("thomas_schmidt"));

        assert!(catalog.product(ProductId::new(101)).is_ok());
        assert!(matches!(
            catalog.product(ProductId::new(9999)),
            Err(CommerceError::ProductNotFound(_))
        ));
        assert!(matches!(
            catalog.seller(&SellerId::new("nobody")),
            Err(CommerceError::SellerNotFound(_))
        ));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let catalog = Catalog {
            products: vec![Product::new(1, "Bad", "X", Money::brl(-1), 4.0)],
            ..Default::default()
        };
        assert!(matches!(
            catalog.validate(),
            Err(CommerceError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_rating_out_of_scale() {
        let catalog = Catalog {
            products: vec![Product::new(1, "Bad", "X", Money::brl(100), 5.5)],
            ..Default::default()
        };
        assert!(matches!(
            catalog.validate(),
            Err(CommerceError::InvalidRating { .. })
        ));
    }

    #[test]
    fn test_categories_are_distinct_in_order() {
        let catalog = Catalog::demo().unwrap();
        let cats = catalog.categories();
        assert_eq!(cats[0], "Eletrônicos");
        let mut dedup = cats.clone();
        dedup.dedup();
        assert_eq!(cats.len(), dedup.len());
    }

    #[test]
    fn test_products_in_alias() {
        let catalog = Catalog::demo().unwrap();
        let tech = catalog.products_in("Tech");
        assert!(!tech.is_empty());
        assert!(tech.iter().all(|p| p.category == "Eletrônicos"));
        assert!(catalog.products_in("Books").is_empty());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CommerceError::Serialization(_))
        ));
    }
}
