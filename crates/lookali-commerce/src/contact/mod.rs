//! Seller contact module.
//!
//! Builds the pre-filled WhatsApp messages of the contact and checkout
//! forms, their deep links, and the share-dialog links.

mod link;
mod message;

pub use link::{
    contact_phone, encode_component, product_share_text, seller_share_text, whatsapp_link,
    ShareTarget, FALLBACK_PHONE,
};
pub use message::{
    cart_checkout, payment_line, product_inquiry, ContactPreferences, DeliveryOption,
};
