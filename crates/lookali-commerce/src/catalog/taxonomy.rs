//! Category taxonomy: subcategory lists and display-name aliases.

use crate::search::CatalogQuery;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category tree used by the category browsing pages.
///
/// `aliases` maps a display name (e.g., "Tech") to the catalog categories it
/// browses. A name with no alias entry browses the category of the same
/// name; an alias with an empty list browses nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub subcategories: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub aliases: BTreeMap<String, Vec<String>>,
}

impl Taxonomy {
    /// Register the subcategories of a category.
    pub fn with_subcategories<I, S>(mut self, category: impl Into<String>, subs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subcategories
            .insert(category.into(), subs.into_iter().map(Into::into).collect());
        self
    }

    /// Register a display-name alias.
    pub fn with_alias<I, S>(mut self, name: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases
            .insert(name.into(), targets.into_iter().map(Into::into).collect());
        self
    }

    /// Catalog categories browsed under a display name.
    pub fn resolve<'a>(&'a self, name: &'a str) -> Vec<&'a str> {
        match self.aliases.get(name) {
            Some(targets) => targets.iter().map(String::as_str).collect(),
            None => vec![name],
        }
    }

    /// Resolve the query's category name through the aliases.
    ///
    /// Names without an alias entry keep the exact category match.
    pub fn scope<F>(&self, query: CatalogQuery<F>) -> CatalogQuery<F> {
        let targets = query
            .category
            .as_deref()
            .and_then(|name| self.aliases.get(name))
            .cloned();
        match targets {
            Some(targets) => query.with_category_targets(targets),
            None => query,
        }
    }

    /// Category whose subcategories are offered under a display name.
    pub fn primary<'a>(&'a self, name: &'a str) -> &'a str {
        self.resolve(name).first().copied().unwrap_or(name)
    }

    /// Subcategories offered under a display name; empty when unknown.
    pub fn subcategories_for(&self, name: &str) -> &[String] {
        self.subcategories
            .get(self.primary(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ProductFilters;

    fn taxonomy() -> Taxonomy {
        Taxonomy::default()
            .with_subcategories("Eletrônicos", ["Smartphones", "Acessórios"])
            .with_alias("Tech", ["Eletrônicos"])
            .with_alias("Books", Vec::<String>::new())
    }

    #[test]
    fn test_resolve_alias_and_identity() {
        let t = taxonomy();
        assert_eq!(t.resolve("Tech"), vec!["Eletrônicos"]);
        assert_eq!(t.resolve("Casa & Jardim"), vec!["Casa & Jardim"]);
        assert!(t.resolve("Books").is_empty());
    }

    #[test]
    fn test_scope_resolves_alias_only() {
        let t = taxonomy();
        let query = t.scope(CatalogQuery::<ProductFilters>::new().with_category("Tech"));
        assert_eq!(query.category.as_deref(), Some("Tech"));
        assert_eq!(query.category_targets, Some(vec!["Eletrônicos".to_string()]));

        let plain = t.scope(CatalogQuery::<ProductFilters>::new().with_category("Moda"));
        assert_eq!(plain.category_targets, None);

        let books = t.scope(CatalogQuery::<ProductFilters>::new().with_category("Books"));
        assert_eq!(books.category_targets, Some(Vec::new()));
    }

    #[test]
    fn test_subcategories_follow_alias() {
        let t = taxonomy();
        assert_eq!(t.subcategories_for("Tech").len(), 2);
        assert_eq!(t.subcategories_for("Eletrônicos")[0], "Smartphones");
        assert!(t.subcategories_for("Books").is_empty());
        assert!(t.subcategories_for("Unknown").is_empty());
    }
}
