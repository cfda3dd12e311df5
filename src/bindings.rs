//! The runtime binding table and key-label ordering.
//!
//! The table maps command name → options string → key-binding labels. It is
//! produced by the host's key-mapping layer and fetched fresh every time the
//! help dialog is shown; this crate only reads it.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Command name → options string (possibly empty) → ordered key labels.
///
/// Commands with no bound keys are expected to be absent from the table
/// entirely rather than mapped to empty lists.
pub type BindingTable = HashMap<String, HashMap<String, Vec<String>>>;

/// Named keys use angle brackets, e.g. `<Down>` or `<c-a>`.
const NAMED_KEY_MARKER: char = '<';

/// Substituted for the marker before comparison; sorts after all
/// alphanumerics, pushing named keys behind plain ones.
const NAMED_KEY_SORT_CHAR: char = '~';

fn sort_rank(label: &str) -> String {
    label.replace(NAMED_KEY_MARKER, &NAMED_KEY_SORT_CHAR.to_string())
}

/// Compare two key labels so that named keys (`<Down>`, `<c-e>`) sort after
/// plain alphanumeric keys, with ties broken lexicographically.
pub fn compare_key_labels(a: &str, b: &str) -> Ordering {
    sort_rank(a).cmp(&sort_rank(b)).then_with(|| a.cmp(b))
}

/// Sort key labels in place for display, plain keys first.
pub fn sort_key_labels(labels: &mut [String]) {
    labels.sort_by(|a, b| compare_key_labels(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_labels_compare_lexicographically() {
        assert_eq!(compare_key_labels("a", "b"), Ordering::Less);
        assert_eq!(compare_key_labels("j", "j"), Ordering::Equal);
        assert_eq!(compare_key_labels("gg", "gT"), "gg".cmp("gT"));
    }

    #[test]
    fn test_named_keys_sort_after_plain_keys() {
        assert_eq!(compare_key_labels("j", "<Down>"), Ordering::Less);
        assert_eq!(compare_key_labels("<c-e>", "z"), Ordering::Greater);
        assert_eq!(compare_key_labels("J", "<Down>"), Ordering::Less);
    }

    #[test]
    fn test_sort_key_labels_orders_mixed_list() {
        let mut labels = vec![
            "<Down>".to_string(),
            "j".to_string(),
            "<c-e>".to_string(),
            "k".to_string(),
        ];
        sort_key_labels(&mut labels);
        assert_eq!(labels, vec!["j", "k", "<Down>", "<c-e>"]);
    }

    #[test]
    fn test_marker_ties_break_on_original_label() {
        // Same rank after substitution; the literal marker sorts first.
        assert_eq!(compare_key_labels("<", "~"), Ordering::Less);
    }
}
