//! The catalog query evaluator.
//!
//! One generic pipeline serves every listing page:
//! text match, then category and subcategory scope, then the attribute
//! constraints of the page's filter descriptor, then a stable sort.
//! The input slice is never reordered.

use crate::catalog::{Product, Seller, Service, Stay};
use crate::money::Money;
use crate::search::results::{product_facets, service_facets};
use crate::search::{
    CatalogQuery, Facet, Pagination, ProductFilters, SearchResults, SellerAmenity, SellerFilters,
    ServiceFilters, SortKey, StayAmenity, StayFilters,
};
use tracing::debug;

/// A record that can be listed, filtered and sorted.
pub trait Searchable {
    /// Filter descriptor of the listing page.
    type Filters: Default;

    /// Plural noun used in result headlines (e.g., "Produtos").
    const NOUN: &'static str;

    fn name(&self) -> &str;

    fn category(&self) -> Option<&str>;

    fn in_subcategory(&self, subcategory: &str) -> bool;

    fn rating(&self) -> f64;

    /// Key of the `popular` sort.
    fn popularity(&self) -> u32;

    /// Key of the price sorts. Records without a price sort as zero.
    fn sort_price(&self) -> Money;

    /// Whether every constraint of `filters` holds.
    fn satisfies(&self, filters: &Self::Filters) -> bool;

    /// Dynamic filter options over the scoped items.
    fn facets(_scoped: &[&Self], _filters: &Self::Filters) -> Vec<Facet> {
        Vec::new()
    }

    /// Filter value worth naming in the headline, if any.
    fn highlight(_filters: &Self::Filters) -> Option<&str> {
        None
    }
}

fn meets_rating(rating: f64, min_rating: f64) -> bool {
    min_rating <= 0.0 || rating >= min_rating
}

impl Searchable for Product {
    type Filters = ProductFilters;
    const NOUN: &'static str = "Produtos";

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn in_subcategory(&self, subcategory: &str) -> bool {
        self.subcategory.as_deref() == Some(subcategory)
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn popularity(&self) -> u32 {
        self.review_count
    }

    fn sort_price(&self) -> Money {
        self.price
    }

    fn satisfies(&self, f: &ProductFilters) -> bool {
        f.price.contains(self.price)
            && meets_rating(self.rating, f.min_rating)
            && f.brands.admits(self.brand.as_ref())
            && f.conditions.admits(self.condition.as_ref())
            && f.storage.admits(self.storage.as_ref())
            && f.colors.admits(self.color.as_ref())
            && (!f.on_sale_only || self.is_on_sale())
    }

    fn facets(scoped: &[&Self], filters: &ProductFilters) -> Vec<Facet> {
        product_facets(scoped.iter().copied(), filters)
    }

    fn highlight(filters: &ProductFilters) -> Option<&str> {
        if filters.brands.len() == 1 {
            filters.brands.iter().next().map(String::as_str)
        } else {
            None
        }
    }
}

impl Searchable for Service {
    type Filters = ServiceFilters;
    const NOUN: &'static str = "Serviços";

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        Some(&self.service_category)
    }

    fn in_subcategory(&self, subcategory: &str) -> bool {
        self.tags.iter().any(|t| t == subcategory)
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn popularity(&self) -> u32 {
        self.review_count
    }

    fn sort_price(&self) -> Money {
        self.pricing.amount().unwrap_or_default()
    }

    fn satisfies(&self, f: &ServiceFilters) -> bool {
        meets_rating(self.rating, f.min_rating)
            && f.pricing_models.admits(Some(&self.pricing.model()))
    }

    fn facets(scoped: &[&Self], filters: &ServiceFilters) -> Vec<Facet> {
        service_facets(scoped.iter().copied(), filters)
    }
}

impl Searchable for Seller {
    type Filters = SellerFilters;
    const NOUN: &'static str = "Vendedores";

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn in_subcategory(&self, subcategory: &str) -> bool {
        self.subcategories.iter().any(|s| s == subcategory)
    }

    fn rating(&self) -> f64 {
        Seller::rating(self)
    }

    fn popularity(&self) -> u32 {
        self.stats.reviews
    }

    fn sort_price(&self) -> Money {
        Money::default()
    }

    fn satisfies(&self, f: &SellerFilters) -> bool {
        let amenities = f.amenities.iter().all(|a| match a {
            SellerAmenity::OpenNow => self.is_open,
            SellerAmenity::Delivers => self.delivers,
            SellerAmenity::Pickup => self.allows_pickup,
        });
        meets_rating(Seller::rating(self), f.min_rating)
            && f.categories.admits(self.category.as_ref())
            && amenities
            && f.distance.admits(self.distance_km)
    }
}

impl Searchable for Stay {
    type Filters = StayFilters;
    const NOUN: &'static str = "Estadias";

    fn name(&self) -> &str {
        &self.0.name
    }

    fn category(&self) -> Option<&str> {
        Some(&self.0.category)
    }

    fn in_subcategory(&self, subcategory: &str) -> bool {
        self.0.subcategory.as_deref() == Some(subcategory)
    }

    fn rating(&self) -> f64 {
        self.0.rating
    }

    fn popularity(&self) -> u32 {
        self.0.review_count
    }

    fn sort_price(&self) -> Money {
        self.0.price
    }

    fn satisfies(&self, f: &StayFilters) -> bool {
        let bag = self.amenities();
        let amenities = f.amenities.iter().all(|a| match a {
            StayAmenity::Wifi => bag.wifi,
            StayAmenity::Pool => bag.pool,
            StayAmenity::Gym => bag.gym,
        });
        f.price.contains(self.0.price) && amenities && f.types.admits(Some(&self.0.category))
    }
}

/// Run a query over a collection and return the matching items in order.
pub fn evaluate<'a, T: Searchable>(items: &'a [T], query: &CatalogQuery<T::Filters>) -> Vec<&'a T> {
    let needle = query.needle();
    let mut out: Vec<&T> = items
        .iter()
        .filter(|item| matches_text(*item, needle.as_deref()))
        .filter(|item| matches_scope(*item, query))
        .filter(|item| item.satisfies(&query.filters))
        .collect();

    sort_items(&mut out, query.sort);
    debug!(
        total = items.len(),
        matched = out.len(),
        sort = %query.sort,
        "evaluated catalog query"
    );
    out
}

/// Evaluate a query and return one page of results with facets.
///
/// Facets are computed over the items in the query's category scope, or
/// over the whole collection when the query has search text.
pub fn search<'a, T: Searchable>(
    items: &'a [T],
    query: &CatalogQuery<T::Filters>,
) -> SearchResults<&'a T> {
    let matched = evaluate(items, query);
    let pagination = Pagination::new(query.page, query.per_page, matched.len());
    let page: Vec<&T> = matched
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.per_page)
        .collect();

    let scoped: Vec<&T> = if query.needle().is_some() {
        items.iter().collect()
    } else {
        items
            .iter()
            .filter(|item| query.in_category(item.category()))
            .collect()
    };

    SearchResults::new(page, pagination).with_facets(T::facets(&scoped, &query.filters))
}

/// Listing headline (e.g., `3 Produtos em Eletrônicos`).
pub fn headline<T: Searchable>(query: &CatalogQuery<T::Filters>, count: usize) -> String {
    let noun = T::NOUN;
    if let Some(text) = query.text.as_deref().filter(|t| !t.trim().is_empty()) {
        return format!("{count} {noun} encontrados para \"{text}\"");
    }
    if let Some(value) = T::highlight(&query.filters) {
        return format!("{count} {noun} encontrados para \"{value}\"");
    }
    if let Some(sub) = query.subcategory.as_deref() {
        return format!("{count} {noun} em {sub}");
    }
    if let Some(category) = query.category.as_deref() {
        return format!("{count} {noun} em {category}");
    }
    format!("{count} {noun} Encontrados")
}

/// Name-substring match. `None` matches everything.
pub fn matches_text<T: Searchable + ?Sized>(item: &T, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => item.name().to_lowercase().contains(needle),
        None => true,
    }
}

fn matches_scope<T: Searchable, F>(item: &T, query: &CatalogQuery<F>) -> bool {
    let category = query.in_category(item.category());
    let subcategory = query
        .subcategory
        .as_deref()
        .map_or(true, |s| item.in_subcategory(s));
    category && subcategory
}

fn sort_items<T: Searchable>(items: &mut [&T], key: SortKey) {
    match key {
        SortKey::Popular => items.sort_by(|a, b| b.popularity().cmp(&a.popularity())),
        SortKey::RatingDesc => items.sort_by(|a, b| b.rating().total_cmp(&a.rating())),
        SortKey::PriceAsc => items.sort_by_key(|i| i.sort_price().amount_cents),
        SortKey::PriceDesc => {
            items.sort_by(|a, b| b.sort_price().amount_cents.cmp(&a.sort_price().amount_cents))
        }
        SortKey::AlphaAsc => items.sort_by_cached_key(|i| collation_key(i.name())),
    }
}

/// Case- and accent-insensitive sort key for names.
///
/// Ties on the folded form fall back to the lowercased original, so
/// "Café" sorts right after "Cafe".
pub fn collation_key(name: &str) -> (String, String) {
    let lower = name.to_lowercase();
    let folded = lower.chars().map(fold_accent).collect();
    (folded, lower)
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Pricing, PricingModel};
    use crate::search::{DistanceBand, PriceRange, Selection};

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Pão Artesanal", "Comida & Bebida", Money::brl(2500), 4.9)
                .with_seller("padaria")
                .with_review_count(150)
                .with_subcategory("Pães"),
            Product::new(2, "Vaso de Cerâmica", "Casa & Jardim", Money::brl(8900), 4.8)
                .with_seller("atelie")
                .with_review_count(320),
            Product::new(3, "Galaxy Z Fold 5", "Eletrônicos", Money::brl(807499), 4.9)
                .with_brand("Samsung")
                .with_original_price(Money::brl(849999))
                .with_review_count(230),
            Product::new(4, "Câmera Wi-Fi", "Eletrônicos", Money::brl(25000), 4.6)
                .with_brand("Intelbras")
                .with_review_count(88),
        ]
    }

    fn ids(items: &[&Product]) -> Vec<u64> {
        items.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_default_query_is_popular_order() {
        let items = products();
        let out = evaluate(&items, &CatalogQuery::new());
        assert_eq!(ids(&out), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_text_is_case_insensitive_substring_on_name() {
        let items = products();
        let out = evaluate(&items, &CatalogQuery::new().with_text("GALAXY"));
        assert_eq!(ids(&out), vec![3]);

        let out = evaluate(&items, &CatalogQuery::new().with_text("eletrônicos"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_blank_text_is_no_filter() {
        let items = products();
        let out = evaluate(&items, &CatalogQuery::new().with_text("  "));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_category_and_subcategory() {
        let items = products();
        let out = evaluate(&items, &CatalogQuery::new().with_category("Eletrônicos"));
        assert_eq!(ids(&out), vec![3, 4]);

        let out = evaluate(
            &items,
            &CatalogQuery::new()
                .with_category("Comida & Bebida")
                .with_subcategory("Pães"),
        );
        assert_eq!(ids(&out), vec![1]);
    }

    #[test]
    fn test_brand_filter_excludes_missing_brand() {
        let items = products();
        let filters = ProductFilters::default().with_brand("Samsung");
        let out = evaluate(&items, &CatalogQuery::new().with_filters(filters));
        assert_eq!(ids(&out), vec![3]);
    }

    #[test]
    fn test_on_sale_only() {
        let items = products();
        let filters = ProductFilters {
            on_sale_only: true,
            ..Default::default()
        };
        let out = evaluate(&items, &CatalogQuery::new().with_filters(filters));
        assert_eq!(ids(&out), vec![3]);
    }

    #[test]
    fn test_price_sorts() {
        let items = products();
        let asc = evaluate(&items, &CatalogQuery::new().with_sort(SortKey::PriceAsc));
        assert_eq!(ids(&asc), vec![1, 2, 4, 3]);
        let desc = evaluate(&items, &CatalogQuery::new().with_sort(SortKey::PriceDesc));
        assert_eq!(ids(&desc), vec![3, 4, 2, 1]);
    }

    #[test]
    fn test_rating_sort_is_stable() {
        let items = products();
        let out = evaluate(&items, &CatalogQuery::new().with_sort(SortKey::RatingDesc));
        assert_eq!(ids(&out), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_alpha_sort_folds_accents_and_case() {
        let items = vec![
            Product::new(1, "vaso", "X", Money::brl(1), 4.0),
            Product::new(2, "Câmera", "X", Money::brl(1), 4.0),
            Product::new(3, "Cafe", "X", Money::brl(1), 4.0),
            Product::new(4, "bolsa", "X", Money::brl(1), 4.0),
        ];
        let out = evaluate(&items, &CatalogQuery::new().with_sort(SortKey::AlphaAsc));
        assert_eq!(ids(&out), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<Product> = Vec::new();
        assert!(evaluate(&items, &CatalogQuery::new()).is_empty());
    }

    #[test]
    fn test_service_quote_sorts_as_zero() {
        let services = vec![
            Service::new(
                1,
                "Reparo",
                "Encanamento",
                Pricing::Hourly { amount: Money::brl(9000) },
                4.9,
            )
            .with_review_count(150),
            Service::new(2, "Website", "Web", Pricing::Quote, 5.0).with_review_count(85),
            Service::new(3, "Ar", "Clima", Pricing::Fixed { amount: Money::brl(35000) }, 4.8)
                .with_review_count(95),
        ];
        let out = evaluate(&services, &CatalogQuery::new().with_sort(SortKey::PriceAsc));
        let ids: Vec<u64> = out.iter().map(|s| s.id.get()).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        let filters = ServiceFilters {
            pricing_models: Selection::of([PricingModel::Quote]),
            ..Default::default()
        };
        let out = evaluate(&services, &CatalogQuery::new().with_filters(filters));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_service_subcategory_matches_tags() {
        let services = vec![
            Service::new(1, "Reparo", "Encanamento", Pricing::Quote, 4.9).with_tag("Urgente"),
            Service::new(2, "Outro", "Encanamento", Pricing::Quote, 4.9),
        ];
        let out = evaluate(&services, &CatalogQuery::new().with_subcategory("Urgente"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id.get(), 1);
    }

    #[test]
    fn test_seller_filters() {
        let mut near = Seller::new("padaria", "Padaria");
        near.distance_km = Some(0.5);
        near.delivers = true;
        near.stats.rating = Some(4.9);
        near.stats.reviews = 320;
        let mut far = Seller::new("pete", "Pete");
        far.distance_km = Some(2.5);
        far.stats.reviews = 150;
        let nowhere = Seller::new("bazar", "Bazar");
        let sellers = vec![near, far, nowhere];

        let out = evaluate(&sellers, &CatalogQuery::new());
        assert_eq!(out.len(), 3);

        let mut filters = SellerFilters::default();
        filters.distance = DistanceBand::UpTo1;
        let out = evaluate(&sellers, &CatalogQuery::new().with_filters(filters));
        assert_eq!(out[0].id.as_str(), "padaria");
        assert_eq!(out.len(), 1);

        let mut filters = SellerFilters::default();
        filters.amenities.insert(SellerAmenity::Delivers);
        filters.min_rating = 4.5;
        let out = evaluate(&sellers, &CatalogQuery::new().with_filters(filters));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_search_paginates_and_builds_facets() {
        let items = products();
        let query = CatalogQuery::new()
            .with_category("Eletrônicos")
            .with_pagination(1, 1);
        let results = search(&items, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results.pagination.total, 2);
        assert!(results.pagination.has_next);

        let brands = results.facet("brand").unwrap();
        assert_eq!(brands.values.len(), 2);
    }

    #[test]
    fn test_headline() {
        let q = CatalogQuery::<ProductFilters>::new().with_text("pão");
        assert_eq!(headline::<Product>(&q, 1), "1 Produtos encontrados para \"pão\"");

        let q = CatalogQuery::<ProductFilters>::new()
            .with_filters(ProductFilters::default().with_brand("Samsung"));
        assert_eq!(headline::<Product>(&q, 1), "1 Produtos encontrados para \"Samsung\"");

        let q = CatalogQuery::<ServiceFilters>::new().with_category("Encanamento");
        assert_eq!(headline::<Service>(&q, 2), "2 Serviços em Encanamento");

        let q = CatalogQuery::<StayFilters>::new();
        assert_eq!(headline::<Stay>(&q, 0), "0 Estadias Encontrados");
    }

    #[test]
    fn test_stay_filters() {
        let mut villa = Product::new(1, "Villa", "Villa", Money::brl(100_000), 4.9);
        villa.stay_details = Some(crate::catalog::StayDetails {
            tags: vec![],
            amenities: crate::catalog::StayAmenities {
                pool: true,
                wifi: true,
                ..Default::default()
            },
        });
        let hotel = Product::new(2, "Hotel", "Hotel", Money::brl(50_000), 4.5);
        let stays = vec![Stay(villa), Stay(hotel)];

        let mut filters = StayFilters::default();
        filters.amenities.insert(StayAmenity::Pool);
        let out = evaluate(&stays, &CatalogQuery::new().with_filters(filters));
        assert_eq!(out.len(), 1);

        let filters = StayFilters {
            price: PriceRange::new(None, Some(Money::brl(60_000))),
            types: Selection::of(["Hotel".to_string()]),
            ..Default::default()
        };
        let out = evaluate(&stays, &CatalogQuery::new().with_filters(filters));
        assert_eq!(out[0].0.id.get(), 2);
    }
}
