//! Filter descriptors for each listing page.
//!
//! A descriptor is a plain bag of attribute constraints. Every descriptor
//! resets to "no constraint" through `Default`, and an empty allowed-value
//! set is the same as not constraining the attribute at all.

use crate::catalog::PricingModel;
use crate::money::Money;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// Allowed values for one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T: Ord> {
    /// No restriction.
    Any,
    /// Only these values; never empty.
    OneOf(BTreeSet<T>),
}

impl<T: Ord> Selection<T> {
    /// Build a selection from values; no values means `Any`.
    pub fn of(values: impl IntoIterator<Item = T>) -> Self {
        let set: BTreeSet<T> = values.into_iter().collect();
        if set.is_empty() {
            Selection::Any
        } else {
            Selection::OneOf(set)
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        match self {
            Selection::Any => 0,
            Selection::OneOf(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, value: &T) -> bool {
        match self {
            Selection::Any => false,
            Selection::OneOf(set) => set.contains(value),
        }
    }

    /// Whether an item attribute passes. A missing attribute only passes `Any`.
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Selection::Any => true,
            Selection::OneOf(set) => value.is_some_and(|v| set.contains(v)),
        }
    }

    /// Select the value if absent, deselect it otherwise.
    pub fn toggle(&mut self, value: T) {
        let mut set = match std::mem::take(self) {
            Selection::Any => BTreeSet::new(),
            Selection::OneOf(set) => set,
        };
        if !set.remove(&value) {
            set.insert(value);
        }
        *self = Selection::of(set);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let set = match self {
            Selection::Any => None,
            Selection::OneOf(set) => Some(set),
        };
        set.into_iter().flatten()
    }
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Selection::Any
    }
}

impl<T: Ord + Serialize> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Ord + Deserialize<'de>> Deserialize<'de> for Selection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Selection::of(BTreeSet::<T>::deserialize(deserializer)?))
    }
}

/// Inclusive price range; a missing bound is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<Money>,
    pub max: Option<Money>,
}

impl PriceRange {
    pub fn new(min: Option<Money>, max: Option<Money>) -> Self {
        Self { min, max }
    }

    pub fn between(min: Money, max: Money) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, price: Money) -> bool {
        self.min.map_or(true, |min| price.amount_cents >= min.amount_cents)
            && self.max.map_or(true, |max| price.amount_cents <= max.amount_cents)
    }
}

/// Product listing filters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFilters {
    pub price: PriceRange,
    /// Inclusive lower bound; 0 means any rating.
    pub min_rating: f64,
    pub brands: Selection<String>,
    pub conditions: Selection<String>,
    pub storage: Selection<String>,
    pub colors: Selection<String>,
    /// Only discounted products (the "oferta" quick filter).
    pub on_sale_only: bool,
}

impl ProductFilters {
    /// Count shown on the filter button.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.price.is_unbounded() {
            count += 1;
        }
        if self.min_rating > 0.0 {
            count += 1;
        }
        count + self.brands.len() + self.conditions.len() + self.storage.len() + self.colors.len()
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.toggle(brand.into());
        self
    }
}

/// Service listing filters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceFilters {
    pub min_rating: f64,
    pub pricing_models: Selection<PricingModel>,
}

impl ServiceFilters {
    pub fn active_count(&self) -> usize {
        usize::from(self.min_rating > 0.0) + self.pricing_models.len()
    }
}

/// Seller amenity pills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellerAmenity {
    OpenNow,
    Delivers,
    Pickup,
}

impl SellerAmenity {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open_now" | "open" => Some(SellerAmenity::OpenNow),
            "delivers" | "delivery" => Some(SellerAmenity::Delivers),
            "pickup" => Some(SellerAmenity::Pickup),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SellerAmenity::OpenNow => "Abertos agora",
            SellerAmenity::Delivers => "Faz Entrega",
            SellerAmenity::Pickup => "Permite Retirada",
        }
    }
}

/// Distance dropdown bands, in kilometres. Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistanceBand {
    #[default]
    #[serde(rename = "any")]
    Any,
    #[serde(rename = "1km")]
    UpTo1,
    #[serde(rename = "3km")]
    From1To3,
    #[serde(rename = "5km")]
    From3To5,
    #[serde(rename = "10km")]
    From5To10,
    #[serde(rename = "10km+")]
    Over10,
}

impl DistanceBand {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "any" => Some(DistanceBand::Any),
            "1km" => Some(DistanceBand::UpTo1),
            "3km" => Some(DistanceBand::From1To3),
            "5km" => Some(DistanceBand::From3To5),
            "10km" => Some(DistanceBand::From5To10),
            "10km+" => Some(DistanceBand::Over10),
            _ => None,
        }
    }

    /// `(min, max)` kilometres; `None` for `Any`.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            DistanceBand::Any => None,
            DistanceBand::UpTo1 => Some((0.0, 1.0)),
            DistanceBand::From1To3 => Some((1.0, 3.0)),
            DistanceBand::From3To5 => Some((3.0, 5.0)),
            DistanceBand::From5To10 => Some((5.0, 10.0)),
            DistanceBand::Over10 => Some((10.0, 999.0)),
        }
    }

    /// `Any` admits every seller, including those without a distance.
    pub fn admits(&self, distance_km: Option<f64>) -> bool {
        match self.bounds() {
            None => true,
            Some((min, max)) => distance_km.is_some_and(|d| d >= min && d <= max),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DistanceBand::Any => "Qualquer distância",
            DistanceBand::UpTo1 => "Até 1 km",
            DistanceBand::From1To3 => "1-3 km",
            DistanceBand::From3To5 => "3-5 km",
            DistanceBand::From5To10 => "5-10 km",
            DistanceBand::Over10 => "Mais de 10 km",
        }
    }
}

/// Seller listing filters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerFilters {
    pub min_rating: f64,
    pub categories: Selection<String>,
    /// Every selected amenity is required.
    pub amenities: BTreeSet<SellerAmenity>,
    pub distance: DistanceBand,
}

impl SellerFilters {
    pub fn active_count(&self) -> usize {
        usize::from(self.min_rating > 0.0)
            + usize::from(!self.categories.is_any())
            + usize::from(!self.amenities.is_empty())
            + usize::from(self.distance != DistanceBand::Any)
    }
}

/// Stay amenity pills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StayAmenity {
    Wifi,
    Pool,
    Gym,
}

impl StayAmenity {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "wifi" => Some(StayAmenity::Wifi),
            "pool" => Some(StayAmenity::Pool),
            "gym" => Some(StayAmenity::Gym),
            _ => None,
        }
    }
}

/// Stay listing filters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StayFilters {
    pub price: PriceRange,
    pub amenities: BTreeSet<StayAmenity>,
    /// Stay types, matched against the stay's category.
    pub types: Selection<String>,
}

impl StayFilters {
    pub fn active_count(&self) -> usize {
        usize::from(!self.price.is_unbounded()) + self.amenities.len() + self.types.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_is_any() {
        let s: Selection<String> = Selection::of(Vec::new());
        assert!(s.is_any());
        assert!(s.admits(None));
    }

    #[test]
    fn test_selection_rejects_missing_attribute() {
        let s = Selection::of(["Samsung".to_string()]);
        assert!(s.admits(Some(&"Samsung".to_string())));
        assert!(!s.admits(Some(&"Apple".to_string())));
        assert!(!s.admits(None));
    }

    #[test]
    fn test_toggle_back_to_any() {
        let mut s = Selection::default();
        s.toggle("Novo".to_string());
        assert_eq!(s.len(), 1);
        s.toggle("Novo".to_string());
        assert!(s.is_any());
    }

    #[test]
    fn test_selection_serde() {
        let s: Selection<String> = serde_json::from_str("[]").unwrap();
        assert!(s.is_any());
        let s: Selection<PricingModel> = serde_json::from_str(r#"["quote"]"#).unwrap();
        assert!(s.contains(&PricingModel::Quote));
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"["quote"]"#);
    }

    #[test]
    fn test_price_range_inclusive() {
        let r = PriceRange::between(Money::brl(0), Money::brl(5000));
        assert!(r.contains(Money::brl(0)));
        assert!(r.contains(Money::brl(5000)));
        assert!(!r.contains(Money::brl(5001)));
        assert!(PriceRange::default().contains(Money::brl(i64::MAX)));
    }

    #[test]
    fn test_distance_bands() {
        assert!(DistanceBand::Any.admits(None));
        assert!(DistanceBand::UpTo1.admits(Some(1.0)));
        assert!(DistanceBand::From1To3.admits(Some(1.0)));
        assert!(!DistanceBand::From1To3.admits(None));
        assert_eq!(DistanceBand::parse("10km+"), Some(DistanceBand::Over10));
    }

    #[test]
    fn test_product_active_count() {
        let mut f = ProductFilters::default();
        assert_eq!(f.active_count(), 0);
        f.min_rating = 4.0;
        f.price.max = Some(Money::brl(5000));
        f.brands = Selection::of(["Samsung".to_string(), "Apple".to_string()]);
        assert_eq!(f.active_count(), 4);
    }

    #[test]
    fn test_seller_active_count() {
        let mut f = SellerFilters::default();
        f.amenities.insert(SellerAmenity::Delivers);
        f.amenities.insert(SellerAmenity::Pickup);
        f.distance = DistanceBand::UpTo1;
        assert_eq!(f.active_count(), 2);
    }
}
