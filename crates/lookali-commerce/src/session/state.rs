//! Application state owned by the session.

use crate::cart::CartLedger;
use crate::ids::{ProductId, SellerId, ServiceId};
use crate::search::{CatalogQuery, ProductFilters};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Location shown before the shopper picks one.
pub const DEFAULT_LOCATION: &str = "Bali, Indonésia";

/// Screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    #[default]
    Home,
    Search,
    ProductDetail,
    SellerProfile,
    Products,
    AllCategories,
    Sellers,
    Services,
    ServiceDetail,
    Profile,
    Explore,
    Cart,
    Help,
    About,
    Terms,
    Privacy,
}

impl View {
    /// Views reachable from the main navigation bar.
    pub const TOP_LEVEL: [View; 7] = [
        View::Home,
        View::Products,
        View::Services,
        View::Sellers,
        View::Profile,
        View::Explore,
        View::Cart,
    ];

    pub fn is_top_level(&self) -> bool {
        Self::TOP_LEVEL.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Search => "search",
            View::ProductDetail => "productDetail",
            View::SellerProfile => "sellerProfile",
            View::Products => "products",
            View::AllCategories => "allCategories",
            View::Sellers => "sellers",
            View::Services => "services",
            View::ServiceDetail => "serviceDetail",
            View::Profile => "profile",
            View::Explore => "explore",
            View::Cart => "cart",
            View::Help => "help",
            View::About => "about",
            View::Terms => "terms",
            View::Privacy => "privacy",
        }
    }

    /// Header title for a view opened with a back button.
    ///
    /// Detail pages manage their own title, so they get an empty one here.
    pub fn title(&self, filters: Option<&ProductFilters>) -> String {
        match self {
            View::AllCategories => "Categorias".to_string(),
            View::Products => filters
                .and_then(|f| f.brands.iter().next().cloned())
                .unwrap_or_else(|| "Produtos Filtrados".to_string()),
            View::Help => "Central de Ajuda".to_string(),
            View::About => "Sobre a Lookali".to_string(),
            View::Terms => "Termos de Serviço".to_string(),
            View::Privacy => "Política de Privacidade".to_string(),
            _ => String::new(),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which catalog the main navigation is browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    Stays,
    #[default]
    Products,
    Services,
    Sellers,
    None,
}

/// Header bar configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderConfig {
    pub title: String,
    pub show_back: bool,
    /// Where the back button leads.
    pub previous_view: Option<View>,
}

impl HeaderConfig {
    /// Plain header of a top-level view.
    pub fn main() -> Self {
        Self::default()
    }

    /// Header with a back button to `previous`.
    pub fn with_back(title: impl Into<String>, previous: View) -> Self {
        Self {
            title: title.into(),
            show_back: true,
            previous_view: Some(previous),
        }
    }
}

/// Search text, category scope and filters of the products listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
    pub category: Option<String>,
    pub filters: ProductFilters,
}

impl SearchState {
    /// The evaluator query for the products listing.
    ///
    /// Search text takes over the whole catalog, so the category scope
    /// only applies when the text is blank.
    pub fn to_query(&self) -> CatalogQuery<ProductFilters> {
        let query = CatalogQuery::new().with_filters(self.filters.clone());
        if !self.query.trim().is_empty() {
            return query.with_text(self.query.clone());
        }
        match &self.category {
            Some(category) => query.with_category(category.clone()),
            None => query,
        }
    }
}

/// Everything the session knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub view: View,
    pub mode: AppMode,
    pub header: HeaderConfig,
    pub search: SearchState,
    pub selected_product: Option<ProductId>,
    pub selected_service: Option<ServiceId>,
    pub selected_seller: Option<SellerId>,
    pub location: String,
    pub cart: CartLedger,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::Home,
            mode: AppMode::Products,
            header: HeaderConfig::main(),
            search: SearchState::default(),
            selected_product: None,
            selected_service: None,
            selected_seller: None,
            location: DEFAULT_LOCATION.to_string(),
            cart: CartLedger::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
