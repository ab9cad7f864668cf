//! WhatsApp contact, cart checkout and share commands.

use anyhow::{anyhow, bail, Context as _, Result};
use lookali_commerce::catalog::{PaymentMethod, Seller};
use lookali_commerce::contact::{
    cart_checkout, contact_phone, product_inquiry, product_share_text, seller_share_text,
    whatsapp_link, DeliveryOption, ShareTarget,
};
use lookali_commerce::session::{reduce, Action, AppState};
use lookali_commerce::{ProductId, SellerId};
use serde::Serialize;
use tracing::debug;

use super::{CheckoutArgs, ContactArgs, ShareArgs, ShareCommand};
use crate::context::Context;

/// Name used in greetings when a product has no seller on record.
const UNNAMED_SELLER: &str = "Vendedor";

#[derive(Serialize)]
struct Outgoing {
    seller: String,
    phone: String,
    message: String,
    link: String,
}

/// Run the contact command.
pub fn contact(args: ContactArgs, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.product(ProductId::new(args.id))?;
    let seller = ctx.catalog.seller_for_product(product);

    let mut prefs = ctx.preferences_for(seller);
    if let Some(raw) = args.delivery.as_deref() {
        prefs = prefs.with_delivery(parse_delivery(raw)?);
    }
    if let Some(raw) = args.payment.as_deref() {
        let payment = PaymentMethod::from_str(raw).ok_or_else(|| {
            anyhow!("Unknown payment method: {} (expected card, pix or boleto)", raw)
        })?;
        prefs = prefs.with_payment(payment);
    }

    let name = seller.map_or(UNNAMED_SELLER, |s| s.name.as_str());
    let message = product_inquiry(name, product, &prefs);
    print_outgoing(outgoing(name, seller, message, ctx), ctx);
    Ok(())
}

/// Run the checkout command.
///
/// Builds the cart through the session reducer, then writes one message
/// per seller.
pub fn checkout(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let delivery = args.delivery.as_deref().map(parse_delivery).transpose()?;

    let mut state = AppState::new();
    state.location = ctx.config.location.clone();
    for entry in &args.items {
        let (id, quantity) = parse_cart_entry(entry)?;
        let product = ctx
            .catalog
            .product(ProductId::new(id))
            .with_context(|| format!("Cannot add {} to the cart", entry))?
            .clone();
        let transition = reduce(state, Action::AddToCart { product, quantity });
        if let Some(notice) = &transition.notice {
            ctx.output.notice(notice);
        }
        state = transition.state;
    }
    debug!(items = state.cart.len(), "cart built");

    let mut outgoing_messages = Vec::new();
    for group in state.cart.group_by_seller() {
        let Some(seller) = group.key.seller_id().and_then(|id| ctx.catalog.seller(id).ok()) else {
            let names: Vec<&str> = group.items.iter().map(|i| i.product.name.as_str()).collect();
            ctx.output.warn(&format!(
                "Sem vendedor para contato: {}",
                names.join(", ")
            ));
            continue;
        };

        let mut prefs = ctx.preferences_for(Some(seller));
        if let Some(delivery) = delivery {
            prefs = prefs.with_delivery(delivery);
        }
        let message = cart_checkout(&seller.name, &group.items, &prefs);
        outgoing_messages.push(outgoing(&seller.name, Some(seller), message, ctx));
    }

    if ctx.output.is_json() {
        ctx.output.json(&outgoing_messages);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Minha Cesta: {} itens, {}",
        state.cart.len(),
        state.cart.total().display()
    ));
    for message in outgoing_messages {
        print_outgoing(message, ctx);
    }
    Ok(())
}

/// Run the share command.
pub fn share(args: ShareArgs, ctx: &Context) -> Result<()> {
    let (text, url) = match args.command {
        ShareCommand::Product { id } => {
            let product = ctx.catalog.product(ProductId::new(id))?;
            (
                product_share_text(&product.name),
                ctx.page_url(&format!("produto/{}", product.id)),
            )
        }
        ShareCommand::Seller { id } => {
            let seller = ctx.catalog.seller(&SellerId::new(id))?;
            (
                seller_share_text(&seller.name),
                ctx.page_url(&format!("vendedor/{}", seller.id)),
            )
        }
    };

    let links: Vec<(&str, String)> = ShareTarget::ALL
        .iter()
        .map(|target| (target.label(), target.link(&text, &url)))
        .collect();

    if ctx.output.is_json() {
        let links: serde_json::Map<String, serde_json::Value> = links
            .into_iter()
            .map(|(label, link)| (label.to_string(), link.into()))
            .collect();
        ctx.output
            .json(&serde_json::json!({ "text": text, "url": url, "links": links }));
        return Ok(());
    }

    ctx.output.header(&text);
    ctx.output.kv("URL", &url);
    for (label, link) in &links {
        ctx.output.kv(label, link);
    }
    Ok(())
}

fn outgoing(name: &str, seller: Option<&Seller>, message: String, ctx: &Context) -> Outgoing {
    let phone = contact_phone(seller, &ctx.config.contact.fallback_phone);
    let link = whatsapp_link(&phone, &message);
    Outgoing {
        seller: name.to_string(),
        phone,
        message,
        link,
    }
}

fn print_outgoing(out: Outgoing, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&out);
        return;
    }
    ctx.output.header(&format!("Mensagem para {}", out.seller));
    ctx.output.text(&out.message);
    ctx.output.text("");
    ctx.output.kv("WhatsApp", &out.link);
}

fn parse_delivery(raw: &str) -> Result<DeliveryOption> {
    DeliveryOption::parse(raw)
        .ok_or_else(|| anyhow!("Unknown delivery option: {} (expected pickup or delivery)", raw))
}

/// Parse `id` or `id:quantity`.
fn parse_cart_entry(entry: &str) -> Result<(u64, u32)> {
    let (id, quantity) = match entry.split_once(':') {
        Some((id, quantity)) => (id, Some(quantity)),
        None => (entry, None),
    };
    let id = id
        .trim()
        .parse()
        .with_context(|| format!("Invalid product id in '{}'", entry))?;
    let quantity = match quantity {
        Some(q) => q
            .trim()
            .parse()
            .with_context(|| format!("Invalid quantity in '{}'", entry))?,
        None => 1,
    };
    if quantity == 0 {
        bail!("Quantity must be at least 1 in '{}'", entry);
    }
    Ok((id, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cart_entry() {
        assert_eq!(parse_cart_entry("7").unwrap(), (7, 1));
        assert_eq!(parse_cart_entry("7:2").unwrap(), (7, 2));
        assert!(parse_cart_entry("7:0").is_err());
        assert!(parse_cart_entry("abc").is_err());
        assert!(parse_cart_entry("7:x").is_err());
    }

    #[test]
    fn test_parse_delivery() {
        assert_eq!(parse_delivery("delivery").unwrap(), DeliveryOption::Delivery);
        assert!(parse_delivery("drone").is_err());
    }
}
