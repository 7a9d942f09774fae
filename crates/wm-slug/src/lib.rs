//! URL slug normalization for waymark.
//!
//! A slug is the canonical URL-safe identifier for a piece of free text
//! (a tag name, a heading, a page title). Every component that compares
//! slugs must derive them through [`slugify`] so that equality is computed
//! consistently: tag matching in `wm-content` and segment resolution in
//! `wm-crumbs` both go through this crate.
//!
//! # Example
//!
//! ```
//! use wm_slug::slugify;
//!
//! assert_eq!(slugify("Café Déjà-Vu!"), "cafe-deja-vu");
//! assert_eq!(slugify("  Node.js  "), "node-js");
//! assert_eq!(slugify(""), "");
//! ```

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize free text into a URL-safe slug.
///
/// The transform, in order: lowercase, trim, NFD-decompose and strip
/// combining marks (so accented letters reduce to their base letter),
/// replace every character that is not `[a-z0-9]`, whitespace, or `-` with
/// a space, trim again, then collapse each run of whitespace and hyphens
/// into a single hyphen.
///
/// Total and idempotent: never fails, and `slugify(slugify(x)) ==
/// slugify(x)` for any input.
#[must_use]
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();

    let stripped: String = lowered
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            c if c.is_whitespace() => c,
            _ => ' ',
        })
        .collect();

    let trimmed = stripped.trim();
    let mut slug = String::with_capacity(trimmed.len());
    let mut in_separator_run = false;
    for c in trimmed.chars() {
        if c.is_whitespace() || c == '-' {
            in_separator_run = true;
        } else {
            if in_separator_run {
                slug.push('-');
                in_separator_run = false;
            }
            slug.push(c);
        }
    }
    if in_separator_run {
        slug.push('-');
    }

    slug
}

/// [`slugify`] lifted over optional input. Absent text yields the empty slug.
#[must_use]
pub fn slugify_opt(input: Option<&str>) -> String {
    input.map(slugify).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_basic_lowercase_and_hyphenate() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_diacritics_stripped() {
        assert_eq!(slugify("Café Déjà-Vu!"), "cafe-deja-vu");
    }

    #[test]
    fn test_punctuation_becomes_separator() {
        assert_eq!(slugify("Node.js"), "node-js");
        assert_eq!(slugify("C++ & Rust"), "c-rust");
    }

    #[test]
    fn test_whitespace_trimmed_and_collapsed() {
        assert_eq!(slugify("  a   lot\tof   space  "), "a-lot-of-space");
    }

    #[test]
    fn test_mixed_hyphen_whitespace_runs_collapse() {
        assert_eq!(slugify("web - dev --- tips"), "web-dev-tips");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_opt_absent_is_empty() {
        assert_eq!(slugify_opt(None), "");
        assert_eq!(slugify_opt(Some("Rust")), "rust");
    }

    #[test]
    fn test_idempotent_on_samples() {
        let samples = [
            "Café Déjà-Vu!",
            "Hello World",
            "Node.js",
            "  -leading and trailing-  ",
            "汉字 and ASCII",
            "ÀÉÎÕÜ",
            "already-a-slug",
            "",
        ];
        for s in samples {
            let once = slugify(s);
            assert_eq!(slugify(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_non_latin_characters_drop_out() {
        // Characters with no ASCII decomposition become separators.
        assert_eq!(slugify("汉字 blog"), "blog");
    }
}
