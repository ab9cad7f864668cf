//! Search module.
//!
//! Contains the catalog query evaluator, the per-page filter descriptors,
//! sort keys, paginated results with facets, and autocomplete.

mod evaluate;
mod filter;
mod query;
mod results;
mod suggest;

pub use evaluate::{collation_key, evaluate, headline, matches_text, search, Searchable};
pub use filter::{
    DistanceBand, PriceRange, ProductFilters, SellerAmenity, SellerFilters, Selection,
    ServiceFilters, StayAmenity, StayFilters,
};
pub use query::{CatalogQuery, SortKey, DEFAULT_PAGE_SIZE};
pub use results::{product_facets, service_facets, Facet, FacetValue, Pagination, SearchResults};
pub use suggest::{suggest, MAX_SUGGESTIONS, MIN_SUGGESTION_CHARS};
