//! End-to-end flows over the library: browse, cart, contact.

use lookali_commerce::catalog::ReviewBreakdown;
use lookali_commerce::contact::{cart_checkout, contact_phone, whatsapp_link, FALLBACK_PHONE};
use lookali_commerce::prelude::*;

fn product(id: u64, name: &str, price_cents: i64, seller: &str, rating: f64) -> Product {
    Product::new(id, name, "Mercado", Money::brl(price_cents), rating).with_seller(seller)
}

#[test]
fn test_price_range_keeps_only_cheap_bread() {
    let items = vec![
        product(1, "Pão", 2500, "X", 4.9),
        product(2, "Vaso", 8900, "Y", 4.8),
    ];
    let mut filters = ProductFilters::default();
    filters.price = PriceRange::between(Money::brl(0), Money::brl(5000));
    let query = CatalogQuery::new().with_filters(filters);

    let ids: Vec<u64> = evaluate(&items, &query).iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_duplicate_add_keeps_first_quantity() {
    let bread = product(7, "Pão", 2500, "X", 4.9);
    let mut cart = CartLedger::new();

    cart.add(bread.clone(), 2).unwrap();
    let notice = cart.add(bread, 5).unwrap();

    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].quantity, 2);
}

#[test]
fn test_group_by_seller_first_seen_order() {
    let mut cart = CartLedger::new();
    cart.add(product(1, "Um", 100, "A", 4.0), 1).unwrap();
    cart.add(product(2, "Dois", 100, "B", 4.0), 1).unwrap();
    cart.add(product(3, "Três", 100, "A", 4.0), 1).unwrap();

    let groups = cart.group_by_seller();
    let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["A", "B"]);

    let a_ids: Vec<u64> = groups[0].items.iter().map(|i| i.product.id.get()).collect();
    assert_eq!(a_ids, vec![1, 3]);
}

#[test]
fn test_breakdown_without_one_star_reviews() {
    let breakdown = ReviewBreakdown::from_counts([(5, 90), (4, 60), (3, 40), (2, 30), (1, 0)]);

    let sum: f64 = (1..=5).map(|s| breakdown.percentage(s)).sum();
    assert!((sum - 100.0).abs() < 1e-9);
    assert_eq!(breakdown.percentage(1), 0.0);
    assert_eq!(breakdown.rows()[0].star, 5);
}

#[test]
fn test_demo_catalog_browse_by_category() {
    let catalog = Catalog::demo().unwrap();
    let query = CatalogQuery::new()
        .with_category("Eletrônicos")
        .with_sort(SortKey::PriceAsc);

    let results = search(&catalog.products, &query);
    let prices: Vec<i64> = results.items.iter().map(|p| p.price.amount_cents).collect();
    let mut sorted = prices.clone();
    sorted.sort();
    assert_eq!(prices, sorted);
    assert!(results.items.iter().all(|p| p.category == "Eletrônicos"));
    assert!(results.facet("brand").is_some_and(|f| !f.is_empty()));
    assert_eq!(
        headline::<Product>(&query, results.pagination.total),
        format!("{} Produtos em Eletrônicos", results.pagination.total)
    );
}

#[test]
fn test_demo_catalog_browse_by_alias() {
    let catalog = Catalog::demo().unwrap();
    let query = catalog
        .taxonomy
        .scope(CatalogQuery::<ProductFilters>::new().with_category("Tech"));

    let results = search(&catalog.products, &query);
    assert_eq!(results.pagination.total, catalog.products_in("Tech").len());
    assert!(results.pagination.total > 0);
    assert!(results.items.iter().all(|p| p.category == "Eletrônicos"));
    assert!(results.facet("brand").is_some_and(|f| !f.is_empty()));
    assert_eq!(
        headline::<Product>(&query, results.pagination.total),
        format!("{} Produtos em Tech", results.pagination.total)
    );

    let books = catalog
        .taxonomy
        .scope(CatalogQuery::<ProductFilters>::new().with_category("Books"));
    assert!(search(&catalog.products, &books).is_empty());
}

#[test]
fn test_huge_page_is_empty_not_a_panic() {
    let catalog = Catalog::demo().unwrap();
    let mut query = CatalogQuery::<ProductFilters>::new();
    query.page = usize::MAX;

    let results = search(&catalog.products, &query);
    assert!(results.is_empty());
    assert_eq!(results.pagination.total, catalog.products.len());
    assert!(!results.pagination.has_next);
}

#[test]
fn test_demo_catalog_suggestions() {
    let catalog = Catalog::demo().unwrap();
    assert!(suggest(&catalog.products, "p", 5).is_empty());

    let names: Vec<&str> = suggest(&catalog.products, "pão", 5)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Pão Artesanal de Fermentação Natural"]);
}

#[test]
fn test_session_cart_checkout_per_seller() {
    let catalog = Catalog::demo().unwrap();
    let mut state = AppState::new();
    for (id, qty) in [(3, 2), (1, 1), (7, 1)] {
        let product = catalog.product(ProductId::new(id)).unwrap().clone();
        state = reduce(
            state,
            Action::AddToCart {
                product,
                quantity: qty,
            },
        )
        .state;
    }

    let groups = state.cart.group_by_seller();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key.as_str(), "padaria_do_bairro");
    assert_eq!(groups[0].subtotal(), Money::brl(9500));

    let seller = groups[0]
        .key
        .seller_id()
        .and_then(|id| catalog.seller(id).ok());
    let prefs = ContactPreferences::for_seller(seller);
    let message = cart_checkout("Padaria do Bairro", &groups[0].items, &prefs);
    assert!(message.contains("- 2x Pão Artesanal de Fermentação Natural\n"));
    assert!(message.contains("\n- 1x Café Especial em Grãos 250g"));
    assert!(message.contains("*Total:* R$ 95,00"));
    assert!(message.contains("*Pagamento:* Pagamento via cartão."));

    let phone = contact_phone(seller, FALLBACK_PHONE);
    assert_eq!(phone, "5511999999999");
    assert!(whatsapp_link(&phone, &message)
        .starts_with("https://wa.me/5511999999999?text=Ol%C3%A1%2C%20"));
}

#[test]
fn test_product_inquiry_uses_seller_phone() {
    let catalog = Catalog::demo().unwrap();
    let fold = catalog.product(ProductId::new(1)).unwrap();
    let seller = catalog.seller_for_product(fold);

    assert_eq!(contact_phone(seller, FALLBACK_PHONE), "5511987654321");
    let message = product_inquiry(
        "Bazar do Bairro",
        fold,
        &ContactPreferences::for_seller(seller).with_delivery(DeliveryOption::Delivery),
    );
    assert!(message.contains("*Preço:* R$ 8074,99"));
    assert!(message.contains("Gostaria de saber mais sobre a entrega."));
}
