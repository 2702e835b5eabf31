//! Exact-key deduplication of candidate project records.
//!
//! Known limitation: this is an exact-key dedup over a normalised name, not a
//! similarity match. Near-duplicates that differ in punctuation or word order
//! ("Vía Expresa Sur" vs "Via Expresa - Sur") are NOT collapsed.

use std::collections::HashSet;

/// Normalise a project name into its deduplication key.
///
/// Lower-cases and strips all whitespace, so casing and spacing differences
/// collapse onto one key.
pub fn dedup_key(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect()
}

/// Keep the first item observed for each key, preserving input order.
pub fn dedupe_by_key<T, F>(items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_folds_case_and_whitespace() {
        assert_eq!(dedup_key("  Vía Expresa  Sur "), "víaexpresasur");
        assert_eq!(dedup_key("vía expresa sur"), "víaexpresasur");
    }

    #[test]
    fn dedupe_keeps_first_seen_casing() {
        let names = vec![
            "Via Expresa Norte".to_string(),
            "via expresa norte".to_string(),
            "Via Expresa Sur".to_string(),
        ];
        let unique = dedupe_by_key(names, |n| dedup_key(n));
        assert_eq!(unique, vec!["Via Expresa Norte", "Via Expresa Sur"]);
    }

    #[test]
    fn dedupe_preserves_input_order() {
        let items = vec!["b", "a", "b", "c", "a"];
        let unique = dedupe_by_key(items, |s| s.to_string());
        assert_eq!(unique, vec!["b", "a", "c"]);
    }

    #[test]
    fn punctuation_differences_are_not_collapsed() {
        // Documented limitation: exact-key only.
        let items = vec!["Vía Expresa Sur".to_string(), "Vía Expresa - Sur".to_string()];
        let unique = dedupe_by_key(items, |n| dedup_key(n));
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty() {
        let unique: Vec<String> = dedupe_by_key(Vec::new(), |n: &String| dedup_key(n));
        assert!(unique.is_empty());
    }
}
