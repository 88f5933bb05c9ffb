//! Free-text → list-of-strings parsers.
//!
//! The generative service returns prose; structure is recovered here and
//! nowhere else, so the matching rules (or a future structured-output mode)
//! can change without touching callers. Both parsers validate items at the
//! boundary: non-empty after trimming, capped at `MAX_ITEM_LEN` characters.

use once_cell::sync::Lazy;
use regex::Regex;

/// Items longer than this are prose, not list entries; dropped.
const MAX_ITEM_LEN: usize = 200;

static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[*\-•]\s*(.+)").expect("bullet regex is valid"));

/// Extracts bullet items from generated text.
///
/// A line counts only if it starts with a `*`, `-`, or `•` marker; the
/// remainder is trimmed and kept. Everything else (headings, prose,
/// blank lines) is ignored. Empty input yields an empty list.
pub fn bullet_items(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| {
            BULLET_RE
                .captures(line)
                .map(|caps| caps[1].trim().to_string())
        })
        .filter(|item| is_valid_item(item))
        .collect()
}

/// Keeps every non-blank line verbatim (trimmed), in source order.
///
/// Used where the prompt asks for one item per line and any non-blank
/// line is accepted as an item.
pub fn nonblank_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .filter(|item| is_valid_item(item))
        .collect()
}

fn is_valid_item(item: &str) -> bool {
    !item.is_empty() && item.chars().count() <= MAX_ITEM_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_items_accepts_all_three_markers() {
        let raw = "* Data Scientist\n- ML Engineer\n• Research Analyst";
        assert_eq!(
            bullet_items(raw),
            vec!["Data Scientist", "ML Engineer", "Research Analyst"]
        );
    }

    #[test]
    fn test_bullet_items_ignores_unmarked_lines() {
        let raw = "Here are some career options for you:\n\n* Data Scientist\nSome closing remarks.";
        assert_eq!(bullet_items(raw), vec!["Data Scientist"]);
    }

    #[test]
    fn test_bullet_items_trims_whitespace_and_strips_marker() {
        let raw = "  *   Data Scientist  \n\t- ML Engineer\t";
        let items = bullet_items(raw);
        assert_eq!(items, vec!["Data Scientist", "ML Engineer"]);
        for item in &items {
            assert!(!item.starts_with(['*', '-', '•']));
            assert_eq!(item, item.trim());
        }
    }

    #[test]
    fn test_bullet_items_empty_input() {
        assert!(bullet_items("").is_empty());
        assert!(bullet_items("no bullets anywhere\njust prose").is_empty());
    }

    #[test]
    fn test_bullet_items_drops_overlong_items() {
        let raw = format!("* {}", "x".repeat(300));
        assert!(bullet_items(&raw).is_empty());
    }

    #[test]
    fn test_nonblank_lines_keeps_source_order_verbatim() {
        let raw = "Python\n\n  Statistics  \nMachine Learning\n";
        assert_eq!(
            nonblank_lines(raw),
            vec!["Python", "Statistics", "Machine Learning"]
        );
    }

    #[test]
    fn test_nonblank_lines_keeps_duplicates() {
        let raw = "SQL\nSQL\nCommunication";
        assert_eq!(nonblank_lines(raw), vec!["SQL", "SQL", "Communication"]);
    }

    #[test]
    fn test_nonblank_lines_empty_input() {
        assert!(nonblank_lines("").is_empty());
        assert!(nonblank_lines("\n\n  \n").is_empty());
    }
}
