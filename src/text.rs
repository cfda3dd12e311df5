//! Label composition helpers for help rows.

/// Total character budget for a row's description plus options.
pub const ROW_LABEL_BUDGET: usize = 40;

const ELLIPSIS: &str = "...";

/// A composed row label. `full_text` is populated only when the options part
/// was truncated, so the untruncated label can be recovered through a
/// hover/long-press affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLabel {
    pub text: String,
    pub full_text: Option<String>,
}

/// Truncate `s` to at most `max` characters, replacing the dropped tail with
/// `"..."`. Strings within the budget are returned unchanged.
pub fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max <= ELLIPSIS.len() {
        return ELLIPSIS.chars().take(max).collect();
    }
    let mut truncated: String = s.chars().take(max - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Compose the visible label for a help row: the command description, with a
/// non-empty options string appended in parentheses. Only the options part is
/// truncated to keep description plus options within `budget` characters.
pub fn compose_row_label(description: &str, options: &str, budget: usize) -> RowLabel {
    if options.is_empty() {
        return RowLabel {
            text: description.to_string(),
            full_text: None,
        };
    }

    // The budget covers description plus options; the " ()" decoration is
    // not charged against it.
    let options_budget = budget.saturating_sub(description.chars().count());
    let shown = ellipsize(options, options_budget);
    let text = format!("{} ({})", description, shown);

    if shown == options {
        RowLabel {
            text,
            full_text: None,
        }
    } else {
        RowLabel {
            text,
            full_text: Some(format!("{} ({})", description, options)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsize_identity_within_budget() {
        assert_eq!(ellipsize("", 10), "");
        assert_eq!(ellipsize("hard", 4), "hard");
        assert_eq!(ellipsize("hard", 40), "hard");
    }

    #[test]
    fn test_ellipsize_exact_length_and_suffix() {
        let result = ellipsize("abcdefghij", 8);
        assert_eq!(result.chars().count(), 8);
        assert!(result.ends_with("..."));
        assert_eq!(result, "abcde...");
    }

    #[test]
    fn test_ellipsize_keeps_start_drops_tail() {
        assert_eq!(ellipsize("0123456789", 5), "01...");
    }

    #[test]
    fn test_compose_label_without_options() {
        let label = compose_row_label("Scroll down", "", ROW_LABEL_BUDGET);
        assert_eq!(label.text, "Scroll down");
        assert_eq!(label.full_text, None);
    }

    #[test]
    fn test_compose_label_with_short_options_is_untruncated() {
        // "Reload the page" + " (hard)" fits the 40-character budget.
        let label = compose_row_label("Reload the page", "hard", ROW_LABEL_BUDGET);
        assert_eq!(label.text, "Reload the page (hard)");
        assert_eq!(label.full_text, None);
    }

    #[test]
    fn test_compose_label_truncates_only_options() {
        let options = "repeat=forever smooth=true axis=vertical";
        let label = compose_row_label("Scroll down", options, ROW_LABEL_BUDGET);
        assert!(label.text.starts_with("Scroll down (repeat="));
        assert!(label.text.ends_with("...)"));
        // Description + shown options stay within budget.
        let shown_options = label
            .text
            .trim_start_matches("Scroll down (")
            .trim_end_matches(')');
        assert_eq!(
            "Scroll down".chars().count() + shown_options.chars().count(),
            ROW_LABEL_BUDGET
        );
        assert_eq!(
            label.full_text.as_deref(),
            Some(format!("Scroll down ({})", options).as_str())
        );
    }
}
