//! Catalog query descriptor and sort keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of items per results page (one "load more" step).
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Sort keys for listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most reviewed first.
    #[default]
    Popular,
    /// Highest rated first.
    RatingDesc,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Name A-Z, ignoring case and accents.
    AlphaAsc,
}

impl SortKey {
    /// Parse a sort key. Unknown keys fall back to `Popular`.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "rating_desc" => SortKey::RatingDesc,
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            "alpha_asc" => SortKey::AlphaAsc,
            _ => SortKey::Popular,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::RatingDesc => "rating_desc",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::AlphaAsc => "alpha_asc",
        }
    }

    /// Label shown in the sort dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Popular => "Populares",
            SortKey::RatingDesc => "Melhor Avaliação",
            SortKey::PriceAsc => "Menor Preço",
            SortKey::PriceDesc => "Maior Preço",
            SortKey::AlphaAsc => "A-Z",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A listing query: text, category scope, filters and sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery<F> {
    /// Name search text. Blank text means no text filter.
    pub text: Option<String>,
    /// Exact category, or a display name resolved into `category_targets`.
    pub category: Option<String>,
    /// Catalog categories browsed under `category` when it is an alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_targets: Option<Vec<String>>,
    /// Subcategory (product subcategory, service tag, seller subcategory).
    pub subcategory: Option<String>,
    pub filters: F,
    pub sort: SortKey,
    /// Current page (1-indexed).
    pub page: usize,
    pub per_page: usize,
}

impl<F: Default> Default for CatalogQuery<F> {
    fn default() -> Self {
        Self {
            text: None,
            category: None,
            category_targets: None,
            subcategory: None,
            filters: F::default(),
            sort: SortKey::Popular,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<F: Default> CatalogQuery<F> {
    /// Create an empty query: everything, most popular first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the filters to their defaults, keeping text, scope and sort.
    pub fn clear_filters(&mut self) {
        self.filters = F::default();
    }
}

impl<F> CatalogQuery<F> {
    /// Set the search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Browse these catalog categories under the current category name.
    pub fn with_category_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_targets = Some(targets.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_filters(mut self, filters: F) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination. Page is at least 1, page size between 1 and 100.
    pub fn with_pagination(mut self, page: usize, per_page: usize) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Lowercased search text, or `None` when blank.
    pub fn needle(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether an item of `category` is in the query's category scope.
    pub fn in_category(&self, category: Option<&str>) -> bool {
        match (&self.category_targets, self.category.as_deref()) {
            (Some(targets), _) => category.is_some_and(|c| targets.iter().any(|t| t == c)),
            (None, Some(name)) => category == Some(name),
            (None, None) => true,
        }
    }

    /// Offset of the first item of the current page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}
