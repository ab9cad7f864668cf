//! Service listings and their pricing models.

use crate::ids::{SellerId, ServiceId};
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a service is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum Pricing {
    /// A fixed price for the whole job.
    Fixed {
        #[serde(with = "money::brl")]
        amount: Money,
    },
    /// Charged per hour.
    Hourly {
        #[serde(with = "money::brl")]
        amount: Money,
    },
    /// Price is agreed with the seller.
    Quote,
}

impl Pricing {
    /// The pricing model without its amount.
    pub fn model(&self) -> PricingModel {
        match self {
            Pricing::Fixed { .. } => PricingModel::Fixed,
            Pricing::Hourly { .. } => PricingModel::Hourly,
            Pricing::Quote => PricingModel::Quote,
        }
    }

    /// The listed amount; quotes have none.
    pub fn amount(&self) -> Option<Money> {
        match self {
            Pricing::Fixed { amount } | Pricing::Hourly { amount } => Some(*amount),
            Pricing::Quote => None,
        }
    }

    /// Card-style price label ("R$ 350,00", "R$ 90,00/h", "Consultar").
    pub fn display(&self) -> String {
        match self {
            Pricing::Fixed { amount } => amount.display(),
            Pricing::Hourly { amount } => format!("{}/h", amount.display()),
            Pricing::Quote => "Consultar".to_string(),
        }
    }
}

/// Pricing model discriminant, used by service filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingModel {
    Fixed,
    Hourly,
    Quote,
}

impl PricingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingModel::Fixed => "fixed",
            PricingModel::Hourly => "hourly",
            PricingModel::Quote => "quote",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fixed" => Some(PricingModel::Fixed),
            "hourly" => Some(PricingModel::Hourly),
            "quote" => Some(PricingModel::Quote),
            _ => None,
        }
    }

    /// Label shown in the filter modal.
    pub fn label(&self) -> &'static str {
        match self {
            PricingModel::Fixed => "Preço Fixo",
            PricingModel::Hourly => "Por Hora",
            PricingModel::Quote => "Sob Orçamento",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A service offered by a seller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    /// Category the service is listed under (e.g., "Encanamento").
    pub service_category: String,
    /// Seller providing the service. A back-reference only.
    #[serde(default)]
    pub seller_id: Option<SellerId>,
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    pub pricing: Pricing,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Service {
    /// Create a service with the required fields.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        service_category: impl Into<String>,
        pricing: Pricing,
        rating: f64,
    ) -> Self {
        Self {
            id: ServiceId::new(id),
            name: name.into(),
            service_category: service_category.into(),
            seller_id: None,
            rating,
            review_count: 0,
            pricing,
            description: None,
            key_features: Vec::new(),
            availability: None,
            tags: Vec::new(),
        }
    }

    /// Set the review count.
    pub fn with_review_count(mut self, count: u32) -> Self {
        self.review_count = count;
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_display() {
        assert_eq!(Pricing::Fixed { amount: Money::brl(35000) }.display(), "R$ 350,00");
        assert_eq!(Pricing::Hourly { amount: Money::brl(9000) }.display(), "R$ 90,00/h");
        assert_eq!(Pricing::Quote.display(), "Consultar");
    }

    #[test]
    fn test_pricing_serde_is_tagged_by_model() {
        let hourly: Pricing = serde_json::from_str(r#"{"model": "hourly", "amount": 90}"#).unwrap();
        assert_eq!(hourly, Pricing::Hourly { amount: Money::brl(9000) });

        let quote: Pricing = serde_json::from_str(r#"{"model": "quote"}"#).unwrap();
        assert_eq!(quote.model(), PricingModel::Quote);
        assert_eq!(quote.amount(), None);
    }

    #[test]
    fn test_pricing_model_parse() {
        assert_eq!(PricingModel::from_str("Quote"), Some(PricingModel::Quote));
        assert_eq!(PricingModel::from_str("monthly"), None);
    }
}
