//! Shopping cart module.

mod ledger;

pub use ledger::{CartItem, CartLedger, SellerGroup, SellerKey, UNKNOWN_SELLER};
