//! Seller profiles.

use crate::catalog::{Product, Review, Service};
use crate::ids::SellerId;
use crate::search::matches_text;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a seller offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SellerType {
    #[default]
    Products,
    Services,
    Both,
}

/// Payment methods a seller accepts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    #[default]
    Pix,
    Boleto,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Pix => "pix",
            PaymentMethod::Boleto => "boleto",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "card" | "cartao" | "cartão" => Some(PaymentMethod::Card),
            "pix" => Some(PaymentMethod::Pix),
            "boleto" => Some(PaymentMethod::Boleto),
            _ => None,
        }
    }

    /// Label shown in the payment picker.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Cartão",
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Boleto => "Boleto",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Aggregated seller statistics.
///
/// These are static figures from the catalog; nothing recomputes them from
/// the seller's products or reviews.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerStats {
    #[serde(default)]
    pub reviews: u32,
    pub products: Option<u32>,
    pub services: Option<u32>,
    pub followers: Option<String>,
    pub rating: Option<f64>,
    pub total_sales: Option<String>,
}

/// Opening hours line (e.g., "Sábado", "10:00 - 14:00").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub day: String,
    pub time: String,
}

/// Denormalized snapshot shown on the seller profile page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerShowcase {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A seller on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategories: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stats: SellerStats,
    /// Distance from the shopper, in kilometres.
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub member_since: Option<u16>,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub delivers: bool,
    #[serde(default)]
    pub allows_pickup: bool,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
    #[serde(default)]
    pub seller_type: SellerType,
    #[serde(default)]
    pub opening_hours: Vec<OpeningHours>,
    #[serde(default)]
    pub showcase: Option<SellerShowcase>,
}

impl Seller {
    /// Create a seller with the required fields.
    pub fn new(id: impl Into<SellerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            subcategories: Vec::new(),
            description: None,
            stats: SellerStats::default(),
            distance_km: None,
            location: None,
            address: None,
            phone: None,
            is_verified: false,
            member_since: None,
            is_open: false,
            delivers: false,
            allows_pickup: false,
            payment_methods: Vec::new(),
            seller_type: SellerType::default(),
            opening_hours: Vec::new(),
            showcase: None,
        }
    }

    /// Rating used for filtering and sorting; sellers without one count as 0.
    pub fn rating(&self) -> f64 {
        self.stats.rating.unwrap_or(0.0)
    }

    /// Payment method preselected in the contact form.
    pub fn preferred_payment(&self) -> PaymentMethod {
        self.payment_methods.first().copied().unwrap_or_default()
    }

    /// Products in the profile snapshot.
    pub fn showcase_products(&self) -> &[Product] {
        self.showcase
            .as_ref()
            .map(|s| s.products.as_slice())
            .unwrap_or(&[])
    }

    /// Services in the profile snapshot.
    pub fn showcase_services(&self) -> &[Service] {
        self.showcase
            .as_ref()
            .map(|s| s.services.as_slice())
            .unwrap_or(&[])
    }

    /// Reviews in the profile snapshot.
    pub fn showcase_reviews(&self) -> &[Review] {
        self.showcase
            .as_ref()
            .map(|s| s.reviews.as_slice())
            .unwrap_or(&[])
    }

    /// Search the profile snapshot by name. Blank text returns everything.
    pub fn search_showcase(&self, text: &str) -> (Vec<&Product>, Vec<&Service>) {
        let needle = text.trim().to_lowercase();
        let needle = (!needle.is_empty()).then_some(needle.as_str());
        let products = self
            .showcase_products()
            .iter()
            .filter(|p| matches_text(*p, needle))
            .collect();
        let services = self
            .showcase_services()
            .iter()
            .filter(|s| matches_text(*s, needle))
            .collect();
        (products, services)
    }
}
