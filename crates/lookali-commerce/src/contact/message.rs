//! Pre-filled WhatsApp messages for contacting a seller.

use crate::cart::CartItem;
use crate::catalog::{PaymentMethod, Product, Seller};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// How the shopper wants to receive the goods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    #[default]
    Pickup,
    Delivery,
}

impl DeliveryOption {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pickup" | "retirada" => Some(DeliveryOption::Pickup),
            "delivery" | "entrega" => Some(DeliveryOption::Delivery),
            _ => None,
        }
    }

    /// Line used in a single-product inquiry.
    pub fn product_line(&self) -> &'static str {
        match self {
            DeliveryOption::Pickup => "Gostaria de combinar a retirada do produto.",
            DeliveryOption::Delivery => "Gostaria de saber mais sobre a entrega.",
        }
    }

    /// Line used in a cart checkout message.
    pub fn cart_line(&self) -> &'static str {
        match self {
            DeliveryOption::Pickup => "Gostaria de combinar a retirada do(s) produto(s).",
            DeliveryOption::Delivery => "Gostaria de saber mais sobre a entrega.",
        }
    }
}

/// Payment preference line.
pub fn payment_line(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Card => "Pagamento via cartão.",
        PaymentMethod::Pix => "Pagamento via Pix.",
        PaymentMethod::Boleto => "Pagamento via boleto.",
    }
}

/// Delivery and payment choices of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactPreferences {
    pub delivery: DeliveryOption,
    pub payment: PaymentMethod,
}

impl ContactPreferences {
    /// Form defaults for a seller: pickup, and the seller's first payment method.
    pub fn for_seller(seller: Option<&Seller>) -> Self {
        Self {
            delivery: DeliveryOption::Pickup,
            payment: seller.map(Seller::preferred_payment).unwrap_or_default(),
        }
    }

    pub fn with_delivery(mut self, delivery: DeliveryOption) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn with_payment(mut self, payment: PaymentMethod) -> Self {
        self.payment = payment;
        self
    }
}

/// Message asking a seller about one product.
pub fn product_inquiry(seller_name: &str, product: &Product, prefs: &ContactPreferences) -> String {
    format!(
        "Olá, {seller}! Vi o anúncio de \"{name}\" e tenho interesse.\n\
         \n\
         *Produto:* {name}\n\
         *Preço:* {price}\n\
         *Quantidade:* 1\n\
         \n\
         {delivery}\n\
         {payment}\n\
         \n\
         Aguardo seu retorno. Obrigado!",
        seller = seller_name,
        name = product.name,
        price = product.price.display_plain(),
        delivery = prefs.delivery.product_line(),
        payment = payment_line(prefs.payment),
    )
}

/// Message ordering a seller's share of the cart.
pub fn cart_checkout(seller_name: &str, items: &[&CartItem], prefs: &ContactPreferences) -> String {
    let lines: Vec<String> = items
        .iter()
        .map(|i| format!("- {}x {}", i.quantity, i.product.name))
        .collect();
    let total = items
        .iter()
        .fold(Money::default(), |acc, i| acc + i.line_total());

    format!(
        "Olá, {seller}! Tenho interesse em comprar os seguintes itens:\n\
         \n\
         {lines}\n\
         \n\
         *Total:* {total}\n\
         \n\
         *Entrega:* {delivery}\n\
         *Pagamento:* {payment}\n\
         \n\
         Aguardo seu retorno. Obrigado!",
        seller = seller_name,
        lines = lines.join("\n"),
        total = total.display_plain(),
        delivery = prefs.delivery.cart_line(),
        payment = payment_line(prefs.payment),
    )
}
