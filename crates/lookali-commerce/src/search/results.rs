//! Search results, pagination and facets.

use crate::catalog::{Product, Service};
use crate::search::{ProductFilters, Selection, ServiceFilters};
use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of matching items.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item of the page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }

    /// Start item number (1-indexed), 0 when there are no items.
    pub fn start_item(&self) -> usize {
        if self.total == 0 || self.offset() >= self.total {
            0
        } else {
            self.offset() + 1
        }
    }

    /// End item number.
    pub fn end_item(&self) -> usize {
        self.page.saturating_mul(self.per_page).min(self.total)
    }
}

/// Search results container.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T> {
    /// The items of the current page.
    pub items: Vec<T>,
    pub pagination: Pagination,
    /// Dynamic filter options for the listing.
    pub facets: Vec<Facet>,
}

impl<T> SearchResults<T> {
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self {
            items,
            pagination,
            facets: Vec::new(),
        }
    }

    pub fn with_facets(mut self, facets: Vec<Facet>) -> Self {
        self.facets = facets;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Facet by field name.
    pub fn facet(&self, field: &str) -> Option<&Facet> {
        self.facets.iter().find(|f| f.field == field)
    }
}

/// A terms facet: the distinct values of one attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Display name (e.g., "Marca").
    pub name: String,
    /// Attribute this facet filters on.
    pub field: String,
    pub values: Vec<FacetValue>,
}

impl Facet {
    pub fn terms(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            values: Vec::new(),
        }
    }

    /// Count one occurrence of `value`, keeping first-seen order.
    pub fn observe(&mut self, value: &str, selected: bool) {
        match self.values.iter_mut().find(|v| v.value == value) {
            Some(v) => v.count += 1,
            None => self.values.push(FacetValue {
                value: value.to_string(),
                count: 1,
                selected,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    pub value: String,
    /// Number of items with this value.
    pub count: usize,
    /// Whether the value is currently selected.
    pub selected: bool,
}

fn string_facet<'a, T: 'a>(
    name: &str,
    field: &str,
    items: impl IntoIterator<Item = &'a T>,
    attr: impl Fn(&'a T) -> Option<&'a String>,
    selection: &Selection<String>,
) -> Facet {
    let mut facet = Facet::terms(name, field);
    for value in items.into_iter().filter_map(attr) {
        facet.observe(value, selection.contains(value));
    }
    facet
}

/// Brand, condition, storage and color facets over category-scoped products.
pub fn product_facets<'a>(
    items: impl IntoIterator<Item = &'a Product> + Clone,
    filters: &ProductFilters,
) -> Vec<Facet> {
    vec![
        string_facet("Marca", "brand", items.clone(), |p| p.brand.as_ref(), &filters.brands),
        string_facet(
            "Condição",
            "condition",
            items.clone(),
            |p| p.condition.as_ref(),
            &filters.conditions,
        ),
        string_facet(
            "Armazenamento",
            "storage",
            items.clone(),
            |p| p.storage.as_ref(),
            &filters.storage,
        ),
        string_facet("Cor", "color", items, |p| p.color.as_ref(), &filters.colors),
    ]
}

/// Pricing model and tag facets over category-scoped services.
pub fn service_facets<'a>(
    items: impl IntoIterator<Item = &'a Service> + Clone,
    filters: &ServiceFilters,
) -> Vec<Facet> {
    let mut models = Facet::terms("Modelo de Preço", "pricing_model");
    let mut tags = Facet::terms("Tags", "tag");
    for service in items {
        let model = service.pricing.model();
        models.observe(model.as_str(), filters.pricing_models.contains(&model));
        for tag in &service.tags {
            tags.observe(tag, false);
        }
    }
    vec![models, tags]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Pricing;
    use crate::money::Money;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(5, 10, 45);
        assert!(!p.has_next);
        assert_eq!(p.start_item(), 41);
        assert_eq!(p.end_item(), 45);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, 12, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_pagination_huge_page_is_empty() {
        let p = Pagination::new(usize::MAX, 12, 45);
        assert_eq!(p.offset(), usize::MAX);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 45);
        assert!(!p.has_next);
    }

    #[test]
    fn test_product_facets_first_seen_order() {
        let products = vec![
            Product::new(1, "A", "Eletrônicos", Money::brl(100), 4.0).with_brand("Samsung"),
            Product::new(2, "B", "Eletrônicos", Money::brl(100), 4.0).with_brand("Apple"),
            Product::new(3, "C", "Eletrônicos", Money::brl(100), 4.0).with_brand("Samsung"),
            Product::new(4, "D", "Eletrônicos", Money::brl(100), 4.0),
        ];
        let filters = ProductFilters::default().with_brand("Apple");
        let facets = product_facets(products.iter(), &filters);

        let brand = &facets[0];
        assert_eq!(brand.field, "brand");
        assert_eq!(brand.values.len(), 2);
        assert_eq!(brand.values[0].value, "Samsung");
        assert_eq!(brand.values[0].count, 2);
        assert!(!brand.values[0].selected);
        assert!(brand.values[1].selected);
        assert!(facets[3].is_empty());
    }

    #[test]
    fn test_service_facets() {
        let services = vec![
            Service::new(
                1,
                "Reparo",
                "Encanamento",
                Pricing::Hourly { amount: Money::brl(9000) },
                4.9,
            )
            .with_tag("Urgente"),
            Service::new(2, "Site", "Web", Pricing::Quote, 5.0),
        ];
        let facets = service_facets(services.iter(), &ServiceFilters::default());
        assert_eq!(facets[0].values.len(), 2);
        assert_eq!(facets[0].values[0].value, "hourly");
        assert_eq!(facets[1].values[0].value, "Urgente");
    }
}
