//! Header autocomplete.

use crate::search::evaluate::{matches_text, Searchable};

/// Inputs shorter than this produce no suggestions.
pub const MIN_SUGGESTION_CHARS: usize = 2;

/// Default number of suggestions shown.
pub const MAX_SUGGESTIONS: usize = 5;

/// Items whose name contains `input`, in catalog order, at most `limit`.
pub fn suggest<'a, T: Searchable>(items: &'a [T], input: &str, limit: usize) -> Vec<&'a T> {
    let input = input.trim();
    if input.chars().count() < MIN_SUGGESTION_CHARS {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    items
        .iter()
        .filter(|item| matches_text(*item, Some(needle.as_str())))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    fn catalog() -> Vec<Product> {
        (1..=8)
            .map(|i| Product::new(i, format!("Café {i}"), "Comida", Money::brl(100), 4.0))
            .chain([Product::new(9, "Pão", "Comida", Money::brl(100), 4.0)])
            .collect()
    }

    #[test]
    fn test_single_char_gives_nothing() {
        assert!(suggest(&catalog(), "c", MAX_SUGGESTIONS).is_empty());
        assert!(suggest(&catalog(), " ", MAX_SUGGESTIONS).is_empty());
    }

    #[test]
    fn test_limit_and_catalog_order() {
        let items = catalog();
        let out = suggest(&items, "CA", MAX_SUGGESTIONS);
        let ids: Vec<u64> = out.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_accented_match() {
        let items = catalog();
        let out = suggest(&items, "pã", MAX_SUGGESTIONS);
        assert_eq!(out.len(), 1);
    }
}
