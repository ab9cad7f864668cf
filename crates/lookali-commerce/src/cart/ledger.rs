//! Cart ledger: the session's shopping basket.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{ProductId, SellerId};
use crate::money::Money;
use crate::notice::Notice;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

/// Group key used for items whose product has no seller.
pub const UNKNOWN_SELLER: &str = "unknown";

/// A product in the cart with the quantity chosen when it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(i64::from(self.quantity))
    }
}

/// Ordered list of cart items, at most one per product.
///
/// There is no quantity edit: the quantity is fixed when the product is
/// added, and adding the same product again is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartLedger {
    items: Vec<CartItem>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product.
    ///
    /// Returns a success notice when the product was appended, or a warning
    /// notice (and no change) when it is already in the cart.
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<Notice, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if self.contains(product.id) {
            warn!(product_id = %product.id, "product already in cart");
            return Ok(Notice::warning(format!("{} já está na cesta!", product.name)));
        }

        let notice = Notice::success(format!(
            "{}x {} adicionado(s) à cesta!",
            quantity, product.name
        ));
        info!(product_id = %product.id, quantity, "added to cart");
        self.items.push(CartItem { product, quantity });
        Ok(notice)
    }

    /// Remove a product. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        self.items.len() < len_before
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|i| i.product.id == product_id)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line totals.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::default(), |acc, item| acc + item.line_total())
    }

    /// Bucket the items by seller.
    ///
    /// Buckets appear in the order their first item was added; items keep
    /// their cart order inside a bucket.
    pub fn group_by_seller(&self) -> Vec<SellerGroup<'_>> {
        let mut groups: Vec<SellerGroup<'_>> = Vec::new();
        for item in &self.items {
            let key = SellerKey::of(&item.product);
            match groups.iter_mut().find(|g| g.key == key) {
                Some(group) => group.items.push(item),
                None => groups.push(SellerGroup {
                    key,
                    items: vec![item],
                }),
            }
        }
        groups
    }
}

/// Seller bucket key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SellerKey {
    Known(SellerId),
    /// Products without a seller.
    Unknown,
}

impl SellerKey {
    fn of(product: &Product) -> Self {
        match &product.seller_id {
            Some(id) => SellerKey::Known(id.clone()),
            None => SellerKey::Unknown,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SellerKey::Known(id) => id.as_str(),
            SellerKey::Unknown => UNKNOWN_SELLER,
        }
    }

    pub fn seller_id(&self) -> Option<&SellerId> {
        match self {
            SellerKey::Known(id) => Some(id),
            SellerKey::Unknown => None,
        }
    }
}

impl fmt::Display for SellerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cart items sold by one seller.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerGroup<'a> {
    pub key: SellerKey,
    pub items: Vec<&'a CartItem>,
}

impl SellerGroup<'_> {
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::default(), |acc, item| acc + item.line_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    fn product(id: u64, name: &str, cents: i64, seller: Option<&str>) -> Product {
        let p = Product::new(id, name, "Comida & Bebida", Money::brl(cents), 4.9);
        match seller {
            Some(s) => p.with_seller(s),
            None => p,
        }
    }

    #[test]
    fn test_add_appends_with_notice() {
        let mut cart = CartLedger::new();
        let notice = cart.add(product(7, "Café", 4500, Some("padaria")), 2).unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "2x Café adicionado(s) à cesta!");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_duplicate_add_is_rejected_not_merged() {
        let mut cart = CartLedger::new();
        cart.add(product(7, "Café", 4500, Some("padaria")), 2).unwrap();
        let notice = cart.add(product(7, "Café", 4500, Some("padaria")), 5).unwrap();

        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "Café já está na cesta!");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_zero_quantity_is_error() {
        let mut cart = CartLedger::new();
        assert!(matches!(
            cart.add(product(1, "Pão", 2500, None), 0),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut cart = CartLedger::new();
        cart.add(product(1, "Pão", 2500, None), 1).unwrap();
        assert!(!cart.remove(ProductId::new(99)));
        assert!(cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total() {
        let mut cart = CartLedger::new();
        cart.add(product(3, "Pão", 2500, Some("padaria")), 2).unwrap();
        cart.add(product(7, "Café", 4500, Some("padaria")), 1).unwrap();
        assert_eq!(cart.total(), Money::brl(9500));
    }

    #[test]
    fn test_group_by_seller_first_seen_order() {
        let mut cart = CartLedger::new();
        cart.add(product(1, "A1", 100, Some("a")), 1).unwrap();
        cart.add(product(2, "B1", 200, Some("b")), 1).unwrap();
        cart.add(product(3, "A2", 300, Some("a")), 3).unwrap();
        cart.add(product(4, "N1", 400, None), 1).unwrap();

        let groups = cart.group_by_seller();
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "unknown"]);

        let a_items: Vec<u64> = groups[0].items.iter().map(|i| i.product.id.get()).collect();
        assert_eq!(a_items, vec![1, 3]);
        assert_eq!(groups[0].subtotal(), Money::brl(1000));
        assert_eq!(groups[2].key.seller_id(), None);
    }
}
