//! Domain types and logic for the Lookali marketplace.
//!
//! This crate holds everything the marketplace app computes, free of any UI:
//!
//! - **Catalog**: Products, stays, services, sellers, reviews, taxonomy
//! - **Search**: The catalog query evaluator, filters, facets, autocomplete
//! - **Cart**: The session cart ledger, grouped by seller
//! - **Contact**: WhatsApp deep-link messages and share links
//! - **Session**: Application state and the reducer that updates it
//!
//! # Example
//!
//! ```rust
//! use lookali_commerce::prelude::*;
//!
//! let catalog = Catalog::demo().unwrap();
//!
//! let mut filters = ProductFilters::default();
//! filters.price = PriceRange::between(Money::brl(0), Money::brl(5000));
//! let query = CatalogQuery::new()
//!     .with_filters(filters)
//!     .with_sort(SortKey::PriceAsc);
//!
//! let cheap = evaluate(&catalog.products, &query);
//! assert!(cheap.iter().all(|p| p.price <= Money::brl(5000)));
//!
//! let mut cart = CartLedger::new();
//! let notice = cart.add(cheap[0].clone(), 2).unwrap();
//! println!("{notice}");
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod notice;

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod search;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use notice::{Notice, NoticeLevel};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::notice::{Notice, NoticeLevel};

    // Catalog
    pub use crate::catalog::{
        Catalog, PaymentMethod, Pricing, PricingModel, Product, Review, ReviewBreakdown,
        ReviewDraft, ReviewQuery, ReviewSort, Seller, Service, Stay, Taxonomy,
    };

    // Search
    pub use crate::search::{
        evaluate, headline, search, suggest, CatalogQuery, DistanceBand, Facet, Pagination,
        PriceRange, ProductFilters, SearchResults, Searchable, Selection, SellerAmenity,
        SellerFilters, ServiceFilters, SortKey, StayAmenity, StayFilters,
    };

    // Cart
    pub use crate::cart::{CartItem, CartLedger, SellerGroup, SellerKey};

    // Contact
    pub use crate::contact::{
        cart_checkout, contact_phone, product_inquiry, whatsapp_link, ContactPreferences,
        DeliveryOption, ShareTarget,
    };

    // Session
    pub use crate::session::{reduce, Action, AppMode, AppState, Transition, View};
}
