//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod contact;
pub mod detail;

use clap::{Args, Subcommand};

/// Options shared by every listing command.
#[derive(Args, Debug)]
pub struct ListingArgs {
    /// Name search text.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Exact category (products also accept aliases such as "Tech").
    #[arg(long)]
    pub category: Option<String>,

    /// Subcategory (product subcategory, service tag, seller subcategory).
    #[arg(long)]
    pub subcategory: Option<String>,

    /// Sort key: popular, rating_desc, price_asc, price_desc, alpha_asc.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Page number (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Items per page (default: from config).
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Show facet counts.
    #[arg(long)]
    pub facets: bool,
}

/// Arguments for the products command.
#[derive(Args, Debug)]
pub struct ProductsArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    /// Minimum price in reais.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price in reais.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Minimum rating (0-5).
    #[arg(long, default_value = "0")]
    pub min_rating: f64,

    /// Allowed brands (repeatable).
    #[arg(long)]
    pub brand: Vec<String>,

    /// Allowed conditions (repeatable).
    #[arg(long)]
    pub condition: Vec<String>,

    /// Allowed storage sizes (repeatable).
    #[arg(long)]
    pub storage: Vec<String>,

    /// Allowed colors (repeatable).
    #[arg(long)]
    pub color: Vec<String>,

    /// Only discounted products.
    #[arg(long)]
    pub on_sale: bool,
}

/// Arguments for the services command.
#[derive(Args, Debug)]
pub struct ServicesArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    /// Minimum rating (0-5).
    #[arg(long, default_value = "0")]
    pub min_rating: f64,

    /// Allowed pricing models: fixed, hourly, quote (repeatable).
    #[arg(long)]
    pub pricing: Vec<String>,
}

/// Arguments for the sellers command.
#[derive(Args, Debug)]
pub struct SellersArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    /// Minimum rating (0-5).
    #[arg(long, default_value = "0")]
    pub min_rating: f64,

    /// Allowed seller categories (repeatable).
    #[arg(long)]
    pub seller_category: Vec<String>,

    /// Required amenities: open_now, delivers, pickup (repeatable).
    #[arg(long)]
    pub amenity: Vec<String>,

    /// Distance band: any, 1km, 3km, 5km, 10km, 10km+.
    #[arg(long, default_value = "any")]
    pub distance: String,
}

/// Arguments for the stays command.
#[derive(Args, Debug)]
pub struct StaysArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    /// Minimum nightly price in reais.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum nightly price in reais.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Required amenities: wifi, pool, gym (repeatable).
    #[arg(long)]
    pub amenity: Vec<String>,

    /// Allowed stay types (repeatable).
    #[arg(long = "type")]
    pub stay_type: Vec<String>,
}

/// Arguments for the suggest command.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// What the shopper has typed so far.
    pub input: String,

    /// Maximum suggestions.
    #[arg(short, long, default_value = "5")]
    pub limit: usize,
}

/// Arguments for the product command.
#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Product or stay id.
    pub id: u64,

    #[command(flatten)]
    pub reviews: ReviewArgs,
}

/// Arguments for the service command.
#[derive(Args, Debug)]
pub struct ServiceArgs {
    /// Service id.
    pub id: u64,
}

/// Arguments for the seller command.
#[derive(Args, Debug)]
pub struct SellerArgs {
    /// Seller id.
    pub id: String,

    /// Search the seller's products and services by name.
    #[arg(short, long)]
    pub query: Option<String>,

    #[command(flatten)]
    pub reviews: ReviewArgs,
}

/// Review listing options.
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Review order: recent, highest, lowest.
    #[arg(long, default_value = "recent")]
    pub review_sort: String,

    /// Only reviews with this many stars (0 for all).
    #[arg(long, default_value = "0")]
    pub stars: u8,

    /// Only reviews with photos.
    #[arg(long)]
    pub with_photos: bool,
}

/// Arguments for the contact command.
#[derive(Args, Debug)]
pub struct ContactArgs {
    /// Product id.
    pub id: u64,

    /// Delivery preference: pickup or delivery.
    #[arg(long)]
    pub delivery: Option<String>,

    /// Payment preference: card, pix or boleto.
    #[arg(long)]
    pub payment: Option<String>,
}

/// Arguments for the checkout command.
#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// Cart entries as `id` or `id:quantity` (repeatable).
    #[arg(short, long = "add", required = true)]
    pub items: Vec<String>,

    /// Delivery preference: pickup or delivery.
    #[arg(long)]
    pub delivery: Option<String>,
}

/// Arguments for the share command.
#[derive(Args, Debug)]
pub struct ShareArgs {
    #[command(subcommand)]
    pub command: ShareCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShareCommand {
    /// Share a product.
    Product {
        /// Product id.
        id: u64,
    },
    /// Share a seller profile.
    Seller {
        /// Seller id.
        id: String,
    },
}

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
