//! WhatsApp deep links and social share links.

use crate::catalog::Seller;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Phone used when the seller has none.
pub const FALLBACK_PHONE: &str = "5511999999999";

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URL component.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Digits of the seller's phone, or `fallback` when there are none.
pub fn contact_phone(seller: Option<&Seller>, fallback: &str) -> String {
    let digits: String = seller
        .and_then(|s| s.phone.as_deref())
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        fallback.chars().filter(char::is_ascii_digit).collect()
    } else {
        digits
    }
}

/// `https://wa.me/<phone>?text=<message>`.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, encode_component(message))
}

/// Share text for a product page.
pub fn product_share_text(name: &str) -> String {
    format!("Confira este produto: {name}!")
}

/// Share text for a seller profile.
pub fn seller_share_text(name: &str) -> String {
    format!("Confira o perfil deste vendedor: {name}!")
}

/// Social networks offered in the share dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareTarget {
    Twitter,
    Facebook,
    WhatsApp,
    Reddit,
    Email,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 5] = [
        ShareTarget::Twitter,
        ShareTarget::Facebook,
        ShareTarget::WhatsApp,
        ShareTarget::Reddit,
        ShareTarget::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::Twitter => "X (Twitter)",
            ShareTarget::Facebook => "Facebook",
            ShareTarget::WhatsApp => "WhatsApp",
            ShareTarget::Reddit => "Reddit",
            ShareTarget::Email => "Email",
        }
    }

    /// Share link for `text` and `url`.
    ///
    /// The email body carries the raw url.
    pub fn link(&self, text: &str, url: &str) -> String {
        let t = encode_component(text);
        let u = encode_component(url);
        match self {
            ShareTarget::Twitter => format!("https://twitter.com/intent/tweet?text={t}&url={u}"),
            ShareTarget::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={u}"),
            ShareTarget::WhatsApp => format!("https://wa.me/?text={t}%20{u}"),
            ShareTarget::Reddit => format!("https://www.reddit.com/submit?url={u}&title={t}"),
            ShareTarget::Email => format!("mailto:?subject={t}&body={url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_uri_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("Olá!"), "Ol%C3%A1!");
        assert_eq!(encode_component("*x*\n"), "*x*%0A");
        assert_eq!(encode_component("R$ 25,00"), "R%24%2025%2C00");
        assert_eq!(encode_component("(it's)~"), "(it's)~");
    }

    #[test]
    fn test_contact_phone_digits_only() {
        let mut seller = Seller::new("bazar", "Bazar");
        assert_eq!(contact_phone(Some(&seller), FALLBACK_PHONE), "5511999999999");

        seller.phone = Some("+55 11 98765-4321".to_string());
        assert_eq!(contact_phone(Some(&seller), FALLBACK_PHONE), "5511987654321");
        assert_eq!(contact_phone(None, FALLBACK_PHONE), "5511999999999");
    }

    #[test]
    fn test_whatsapp_link() {
        let link = whatsapp_link("5511987654321", "Olá, Bazar!\nOi");
        assert_eq!(link, "https://wa.me/5511987654321?text=Ol%C3%A1%2C%20Bazar!%0AOi");
    }

    #[test]
    fn test_share_links() {
        let text = product_share_text("Vaso");
        let url = "https://lookali.app/products/4";
        assert_eq!(
            ShareTarget::Twitter.link(&text, url),
            "https://twitter.com/intent/tweet?text=Confira%20este%20produto%3A%20Vaso!&url=https%3A%2F%2Flookali.app%2Fproducts%2F4"
        );
        assert_eq!(
            ShareTarget::Email.link(&text, url),
            "mailto:?subject=Confira%20este%20produto%3A%20Vaso!&body=https://lookali.app/products/4"
        );
        assert!(ShareTarget::WhatsApp.link(&text, url).contains("!%20https%3A"));
    }

    #[test]
    fn test_seller_share_text() {
        assert_eq!(
            seller_share_text("Ateliê Local"),
            "Confira o perfil deste vendedor: Ateliê Local!"
        );
    }
}
