//! CLI configuration.

use anyhow::{Context, Result};
use lookali_commerce::contact::{DeliveryOption, FALLBACK_PHONE};
use lookali_commerce::search::{SortKey, DEFAULT_PAGE_SIZE};
use lookali_commerce::session::DEFAULT_LOCATION;
use serde::{Deserialize, Serialize};

/// Config file names searched from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["lookali.toml", ".lookali.toml", "lookali.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookaliConfig {
    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Listing defaults.
    #[serde(default)]
    pub browse: BrowseConfig,

    /// Contact and share defaults.
    #[serde(default)]
    pub contact: ContactConfig,

    /// Shopper location shown in the header.
    #[serde(default = "default_location")]
    pub location: String,
}

impl Default for LookaliConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            browse: BrowseConfig::default(),
            contact: ContactConfig::default(),
            location: default_location(),
        }
    }
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

impl LookaliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Sort used when a listing command gets no `--sort`.
    pub fn default_sort(&self) -> SortKey {
        SortKey::parse(&self.browse.default_sort)
    }

    /// Delivery preselected in contact messages.
    pub fn default_delivery(&self) -> DeliveryOption {
        DeliveryOption::parse(&self.contact.default_delivery).unwrap_or_default()
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog JSON file; the bundled demo catalog when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Listing defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Items per page (default: 12).
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Sort key (default: popular).
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_sort() -> String {
    SortKey::Popular.as_str().to_string()
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_sort: default_sort(),
        }
    }
}

/// Contact and share defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Phone used when a seller has none.
    #[serde(default = "default_fallback_phone")]
    pub fallback_phone: String,

    /// `pickup` or `delivery`.
    #[serde(default = "default_delivery")]
    pub default_delivery: String,

    /// Base of the page URLs put in share links.
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
}

fn default_fallback_phone() -> String {
    FALLBACK_PHONE.to_string()
}

fn default_delivery() -> String {
    "pickup".to_string()
}

fn default_share_base_url() -> String {
    "https://lookali.app".to_string()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            fallback_phone: default_fallback_phone(),
            default_delivery: default_delivery(),
            share_base_url: default_share_base_url(),
        }
    }
}

/// Generate a default lookali.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Lookali CLI configuration

location = "{location}"

[catalog]
# path = "catalog.json"

[browse]
page_size = {page_size}
default_sort = "popular"

[contact]
fallback_phone = "{phone}"
default_delivery = "pickup"
share_base_url = "https://lookali.app"
"#,
        location = DEFAULT_LOCATION,
        page_size = DEFAULT_PAGE_SIZE,
        phone = FALLBACK_PHONE,
    )
}
