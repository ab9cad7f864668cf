//! Listing and autocomplete commands.

use anyhow::{bail, Result};
use lookali_commerce::catalog::{PricingModel, Product, Seller, Service, Stay};
use lookali_commerce::search::{
    headline, search, suggest, CatalogQuery, DistanceBand, PriceRange, ProductFilters,
    SearchResults, Searchable, Selection, SellerAmenity, SellerFilters, ServiceFilters, SortKey,
    StayAmenity, StayFilters,
};
use lookali_commerce::{Currency, Money};
use serde::Serialize;

use super::{ListingArgs, ProductsArgs, SellersArgs, ServicesArgs, StaysArgs, SuggestArgs};
use crate::context::Context;
use crate::output::format_rating;

/// Run the products command.
pub fn products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let filters = ProductFilters {
        price: price_range(args.min_price, args.max_price)?,
        min_rating: args.min_rating,
        brands: Selection::of(args.brand),
        conditions: Selection::of(args.condition),
        storage: Selection::of(args.storage),
        colors: Selection::of(args.color),
        on_sale_only: args.on_sale,
    };
    let taxonomy = &ctx.catalog.taxonomy;
    let query = taxonomy.scope(build_query(&args.listing, filters, ctx));

    list(&ctx.catalog.products, &query, args.listing.facets, ctx, |p: &Product| {
        let mut price = p.price.display();
        if let Some(discount) = p.discount_percentage() {
            price = format!("{} (-{}%)", price, discount);
        }
        vec![
            p.id.to_string(),
            p.name.clone(),
            price,
            format_rating(p.rating),
            p.brand.clone().unwrap_or_default(),
        ]
    })?;

    if let Some(name) = args.listing.category.as_deref() {
        let subcategories = taxonomy.subcategories_for(name);
        if !subcategories.is_empty() && !ctx.output.is_json() {
            ctx.output.kv("Subcategorias", &subcategories.join(", "));
        }
    }
    Ok(())
}

/// Run the services command.
pub fn services(args: ServicesArgs, ctx: &Context) -> Result<()> {
    let mut models = Vec::new();
    for raw in &args.pricing {
        match PricingModel::from_str(raw) {
            Some(model) => models.push(model),
            None => bail!("Unknown pricing model: {} (expected fixed, hourly or quote)", raw),
        }
    }
    let filters = ServiceFilters {
        min_rating: args.min_rating,
        pricing_models: Selection::of(models),
    };
    let query = build_query(&args.listing, filters, ctx);

    list(&ctx.catalog.services, &query, args.listing.facets, ctx, |s: &Service| {
        vec![
            s.id.to_string(),
            s.name.clone(),
            s.pricing.display(),
            format_rating(s.rating),
            s.service_category.clone(),
        ]
    })
}

/// Run the sellers command.
pub fn sellers(args: SellersArgs, ctx: &Context) -> Result<()> {
    let mut amenities = std::collections::BTreeSet::new();
    for raw in &args.amenity {
        match SellerAmenity::parse(raw) {
            Some(amenity) => {
                amenities.insert(amenity);
            }
            None => bail!("Unknown amenity: {} (expected open_now, delivers or pickup)", raw),
        }
    }
    let Some(distance) = DistanceBand::parse(&args.distance) else {
        bail!("Unknown distance band: {}", args.distance);
    };
    let filters = SellerFilters {
        min_rating: args.min_rating,
        categories: Selection::of(args.seller_category),
        amenities,
        distance,
    };
    let query = build_query(&args.listing, filters, ctx);

    list(&ctx.catalog.sellers, &query, false, ctx, |s: &Seller| {
        vec![
            s.id.to_string(),
            s.name.clone(),
            s.distance_km
                .map(|d| format!("{:.1} km", d))
                .unwrap_or_else(|| "-".to_string()),
            format_rating(s.rating()),
            if s.is_open { "Aberto" } else { "Fechado" }.to_string(),
        ]
    })
}

/// Run the stays command.
pub fn stays(args: StaysArgs, ctx: &Context) -> Result<()> {
    let mut amenities = std::collections::BTreeSet::new();
    for raw in &args.amenity {
        match StayAmenity::parse(raw) {
            Some(amenity) => {
                amenities.insert(amenity);
            }
            None => bail!("Unknown amenity: {} (expected wifi, pool or gym)", raw),
        }
    }
    let filters = StayFilters {
        price: price_range(args.min_price, args.max_price)?,
        amenities,
        types: Selection::of(args.stay_type),
    };
    let query = build_query(&args.listing, filters, ctx);

    list(&ctx.catalog.stays, &query, false, ctx, |s: &Stay| {
        let p = s.product();
        vec![
            p.id.to_string(),
            p.name.clone(),
            format!("{}/noite", p.price.display()),
            format_rating(p.rating),
            p.location.clone().unwrap_or_default(),
        ]
    })
}

/// Run the suggest command.
pub fn suggestions(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let found = suggest(&ctx.catalog.products, &args.input, args.limit);

    if ctx.output.is_json() {
        ctx.output.json(&found);
        return Ok(());
    }

    if found.is_empty() {
        ctx.output.info("Nenhuma sugestão.");
        return Ok(());
    }
    for product in found {
        ctx.output
            .list_item(&format!("{} ({})", product.name, product.price.display()));
    }
    Ok(())
}

fn build_query<F: Default>(listing: &ListingArgs, filters: F, ctx: &Context) -> CatalogQuery<F> {
    let sort = listing
        .sort
        .as_deref()
        .map(SortKey::parse)
        .unwrap_or_else(|| ctx.config.default_sort());

    let mut query = CatalogQuery::new()
        .with_filters(filters)
        .with_sort(sort)
        .with_pagination(listing.page, ctx.page_size(listing.per_page));
    query.text = listing.query.clone();
    query.category = listing.category.clone();
    query.subcategory = listing.subcategory.clone();
    query
}

fn price_range(min: Option<f64>, max: Option<f64>) -> Result<PriceRange> {
    let to_money = |reais: f64| Money::from_decimal(reais, Currency::BRL);
    let range = PriceRange::new(min.map(to_money), max.map(to_money));
    if let (Some(min), Some(max)) = (range.min, range.max) {
        if min > max {
            bail!("--min-price must not exceed --max-price");
        }
    }
    Ok(range)
}

#[derive(Serialize)]
struct Listing<'a, T> {
    headline: String,
    #[serde(flatten)]
    results: SearchResults<&'a T>,
}

fn list<T, F>(
    items: &[T],
    query: &CatalogQuery<T::Filters>,
    show_facets: bool,
    ctx: &Context,
    row: F,
) -> Result<()>
where
    T: Searchable + Serialize,
    F: Fn(&T) -> Vec<String>,
{
    let results = search(items, query);
    let title = headline::<T>(query, results.pagination.total);

    if ctx.output.is_json() {
        ctx.output.json(&Listing {
            headline: title,
            results,
        });
        return Ok(());
    }

    ctx.output.header(&title);
    if results.is_empty() {
        ctx.output.info("Nenhum resultado. Tente ajustar os filtros.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = results.items.iter().map(|item| row(item)).collect();
    let columns = rows.first().map_or(0, Vec::len);
    let widths: Vec<usize> = (0..columns)
        .map(|c| rows.iter().map(|r| r[c].chars().count()).max().unwrap_or(0))
        .collect();
    for r in &rows {
        let cols: Vec<&str> = r.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &widths);
    }

    let page = &results.pagination;
    ctx.output.info(&format!(
        "Mostrando {}-{} de {} (página {}/{}, ordem: {})",
        page.start_item(),
        page.end_item(),
        page.total,
        page.page,
        page.total_pages,
        query.sort.label()
    ));

    if show_facets {
        for facet in results.facets.iter().filter(|f| !f.is_empty()) {
            ctx.output.header(&facet.name);
            for value in &facet.values {
                let mark = if value.selected { "[x]" } else { "[ ]" };
                ctx.output
                    .list_item(&format!("{} {} ({})", mark, value.value, value.count));
            }
        }
    }
    Ok(())
}
