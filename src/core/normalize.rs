// src/core/normalize.rs
//! Ingredient line → canonical ingredient name.
//!
//! Scraped ingredient lines look like `Poulet (bio) - 200g` or
//! `Tomates cerises : 250 g`. The canonical name keeps only what precedes the
//! quantity/detail part:
//!
//! 1. drop every `( ... )` group (non-greedy, no nesting);
//! 2. cut at the first `-`, then at the first `:`, then at the first `,`;
//! 3. lower-case and trim.
//!
//! The result may be empty (a line that was only a parenthetical, or a line
//! starting with a delimiter). This is a punctuation heuristic, not a parser:
//! nested or unbalanced parentheses are removed on a best-effort basis.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("static pattern"));

/// Cut points, applied left to right on the previous result.
const DELIMITERS: [char; 3] = ['-', ':', ','];

pub fn remove_parentheticals(line: &str) -> Cow<'_, str> {
    PARENTHETICAL.replace_all(line, "")
}

fn truncate_at_delimiters(mut s: &str) -> &str {
    for delim in DELIMITERS {
        if let Some(ix) = s.find(delim) {
            s = &s[..ix];
        }
    }
    s
}

/// Canonical ingredient name for one raw ingredient line. Never fails.
pub fn normalize_ingredient(raw_line: &str) -> String {
    let without_parens = remove_parentheticals(raw_line);
    truncate_at_delimiters(&without_parens).to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_is_sequential() {
        // '-' first, then ':' on what is left, then ','
        assert_eq!(truncate_at_delimiters("a,b:c-d"), "a");
        assert_eq!(truncate_at_delimiters("a:b,c"), "a");
        assert_eq!(truncate_at_delimiters("plain"), "plain");
    }

    #[test]
    fn parentheticals_are_non_greedy() {
        assert_eq!(remove_parentheticals("a (x) b (y) c"), "a  b  c");
    }

    #[test]
    fn unbalanced_open_paren_is_kept() {
        assert_eq!(normalize_ingredient("Sel (fin"), "sel (fin");
    }
}
