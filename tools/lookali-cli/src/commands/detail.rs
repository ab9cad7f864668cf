//! Product, service and seller detail pages.

use anyhow::Result;
use lookali_commerce::catalog::{Review, ReviewBreakdown, ReviewQuery, ReviewSort};
use lookali_commerce::{ProductId, SellerId, ServiceId};
use serde_json::json;

use super::{ProductArgs, ReviewArgs, SellerArgs, ServiceArgs};
use crate::context::Context;
use crate::output::{format_rating, percent_bar, star_bar};

/// Run the product command.
pub fn product(args: ProductArgs, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.product(ProductId::new(args.id))?;
    let seller = ctx.catalog.seller_for_product(product);
    let reviews = review_query(&args.reviews).apply(&product.reviews);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "seller": seller.map(|s| &s.name),
            "discount_percentage": product.discount_percentage(),
            "breakdown": product.review_breakdown.as_ref().map(ReviewBreakdown::rows),
            "reviews": reviews,
        }));
        return Ok(());
    }

    ctx.output.text(&product.breadcrumbs().join(" > "));
    ctx.output.header(&product.name);
    ctx.output.kv(
        "Avaliação",
        &format!(
            "{} {:.1} ({} avaliações)",
            star_bar(product.rating),
            product.rating,
            product.review_count
        ),
    );
    ctx.output.kv("Preço", &product.price.display());
    if let Some(original) = product.original_price.filter(|_| product.is_on_sale()) {
        let discount = product
            .discount_percentage()
            .map(|d| format!(" ({}% OFF)", d))
            .unwrap_or_default();
        ctx.output
            .kv("De", &format!("{}{}", original.display(), discount));
    }
    for (label, value) in [
        ("Marca", &product.brand),
        ("Condição", &product.condition),
        ("Armazenamento", &product.storage),
        ("Cor", &product.color),
    ] {
        if let Some(value) = value {
            ctx.output.kv(label, value);
        }
    }
    if let Some(seller) = seller {
        ctx.output.kv("Vendedor", &seller.name);
    }
    if let Some(details) = &product.stay_details {
        let a = &details.amenities;
        let mut perks: Vec<&str> = Vec::new();
        for (on, label) in [
            (a.wifi, "Wi-Fi"),
            (a.pool, "Piscina"),
            (a.gym, "Academia"),
            (a.breakfast, "Café da manhã"),
        ] {
            if on {
                perks.push(label);
            }
        }
        if !perks.is_empty() {
            ctx.output.kv("Comodidades", &perks.join(", "));
        }
    }
    if let Some(description) = &product.description {
        ctx.output.text("");
        ctx.output.text(description);
    }

    if let Some(breakdown) = &product.review_breakdown {
        print_breakdown(breakdown, ctx);
    }
    print_reviews(&reviews, ctx);
    Ok(())
}

/// Run the service command.
pub fn service(args: ServiceArgs, ctx: &Context) -> Result<()> {
    let service = ctx.catalog.service(ServiceId::new(args.id))?;
    let seller = ctx.catalog.seller_for_service(service);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "service": service,
            "seller": seller.map(|s| &s.name),
            "price": service.pricing.display(),
        }));
        return Ok(());
    }

    ctx.output.header(&service.name);
    ctx.output.kv("Categoria", &service.service_category);
    ctx.output.kv("Preço", &service.pricing.display());
    ctx.output.kv(
        "Avaliação",
        &format!("{} ({} avaliações)", format_rating(service.rating), service.review_count),
    );
    if let Some(availability) = &service.availability {
        ctx.output.kv("Disponibilidade", availability);
    }
    if let Some(seller) = seller {
        ctx.output.kv("Profissional", &seller.name);
    }
    if !service.tags.is_empty() {
        ctx.output.kv("Tags", &service.tags.join(", "));
    }
    for feature in &service.key_features {
        ctx.output.list_item(feature);
    }
    Ok(())
}

/// Run the seller command.
pub fn seller(args: SellerArgs, ctx: &Context) -> Result<()> {
    let seller = ctx.catalog.seller(&SellerId::new(args.id))?;
    let (products, services) = seller.search_showcase(args.query.as_deref().unwrap_or(""));
    let reviews = review_query(&args.reviews).apply(seller.showcase_reviews());

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "seller": seller,
            "products": products,
            "services": services,
            "reviews": reviews,
        }));
        return Ok(());
    }

    ctx.output.header(&seller.name);
    if let Some(category) = &seller.category {
        ctx.output.kv("Categoria", category);
    }
    ctx.output.kv(
        "Avaliação",
        &format!("{} ({} avaliações)", format_rating(seller.rating()), seller.stats.reviews),
    );
    if let Some(distance) = seller.distance_km {
        ctx.output.kv("Distância", &format!("{:.1} km", distance));
    }
    if let Some(address) = &seller.address {
        ctx.output.kv("Endereço", address);
    }
    ctx.output
        .kv("Status", if seller.is_open { "Aberto agora" } else { "Fechado" });
    if !seller.payment_methods.is_empty() {
        let methods: Vec<&str> = seller.payment_methods.iter().map(|m| m.label()).collect();
        ctx.output.kv("Pagamento", &methods.join(", "));
    }
    for hours in &seller.opening_hours {
        ctx.output.kv(&hours.day, &hours.time);
    }

    if !products.is_empty() {
        ctx.output.header("Produtos");
        for p in &products {
            ctx.output
                .list_item(&format!("{} - {}", p.name, p.price.display()));
        }
    }
    if !services.is_empty() {
        ctx.output.header("Serviços");
        for s in &services {
            ctx.output
                .list_item(&format!("{} - {}", s.name, s.pricing.display()));
        }
    }
    if args.query.is_some() && products.is_empty() && services.is_empty() {
        ctx.output.info("Nenhum item encontrado para a busca.");
    }

    print_reviews(&reviews, ctx);
    Ok(())
}

fn review_query(args: &ReviewArgs) -> ReviewQuery {
    let mut query = ReviewQuery::new()
        .sorted_by(ReviewSort::parse(&args.review_sort))
        .with_stars(args.stars);
    if args.with_photos {
        query = query.with_photos_only();
    }
    query
}

fn print_breakdown(breakdown: &ReviewBreakdown, ctx: &Context) {
    ctx.output.header("Avaliações");
    for row in breakdown.rows() {
        ctx.output.text(&format!(
            "  {} ★ {} {:>3}%",
            row.star,
            percent_bar(row.percentage, 20),
            row.rounded
        ));
    }
}

fn print_reviews(reviews: &[&Review], ctx: &Context) {
    if reviews.is_empty() {
        return;
    }
    ctx.output.header(&format!("{} comentários", reviews.len()));
    for review in reviews {
        let photos = if review.has_photos() { " 📷" } else { "" };
        ctx.output.text(&format!(
            "  {} {} - {}{}",
            star_bar(review.rating),
            review.author,
            review.date.format("%d/%m/%Y"),
            photos
        ));
        ctx.output.text(&format!("    {}", review.text));
    }
}
