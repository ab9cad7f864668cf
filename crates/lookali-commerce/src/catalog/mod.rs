//! Marketplace catalog module.
//!
//! Contains the catalog records (products, stays, services, sellers,
//! reviews), the category taxonomy and the in-memory store.

mod product;
mod review;
mod seller;
mod service;
mod store;
mod taxonomy;

pub use product::{Product, Stay, StayAmenities, StayDetails};
pub use review::{
    star_fill, BreakdownRow, Review, ReviewBreakdown, ReviewDraft, ReviewQuery, ReviewSort,
    REVIEW_INCOMPLETE_MESSAGE, REVIEW_THANKS_MESSAGE,
};
pub use seller::{
    GeoPoint, OpeningHours, PaymentMethod, Seller, SellerShowcase, SellerStats, SellerType,
};
pub use service::{Pricing, PricingModel, Service};
pub use store::Catalog;
pub use taxonomy::Taxonomy;
