//! Breadcrumb trail construction from URL paths.
//!
//! [`build_breadcrumbs`] turns a URL path into an ordered trail of
//! [`BreadcrumbItem`]s from the site root to the current page. Dynamic
//! segments (post slugs under `/blog/`, tag slugs under `/tags/`,
//! pagination numbers) are resolved to display names through an injected
//! [`PostTagLookup`]; everything the lookup cannot resolve degrades to a
//! Title Case rendering of the raw segment, so the builder is total over
//! any input path.
//!
//! # Example
//!
//! ```
//! use wm_content::ContentIndex;
//! use wm_crumbs::build_breadcrumbs;
//!
//! let index = ContentIndex::default();
//! let trail = build_breadcrumbs("/about", &index);
//! assert_eq!(trail.len(), 2);
//! assert_eq!(trail[0].label, "Home");
//! assert_eq!(trail[1].label, "About");
//! assert!(trail[1].is_current);
//! ```

use serde::Serialize;
use wm_content::PostTagLookup;
use wm_slug::slugify;

mod structured;
pub use structured::breadcrumb_list_json;

/// Maximum number of items shown in a trail.
///
/// Longer trails collapse to `[Home, immediate parent, current page]`,
/// discarding intermediate ancestors.
const MAX_TRAIL: usize = 3;

/// One waypoint in a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display label.
    pub label: String,
    /// Link target; `None` marks a non-navigable (terminal) item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// True only on the item representing the requested page.
    #[serde(rename = "isCurrent")]
    pub is_current: bool,
}

/// Build the breadcrumb trail for a URL path.
///
/// The trail always starts with Home (`/`). Path segments are labeled by
/// kind: `blog` and `tags` get fixed labels, the segment after them (when
/// final) is resolved through `lookup`, an all-digit segment is a
/// pagination page number, and anything else is a static page labeled via
/// [`format_label`]. Trails longer than three items collapse to
/// `[Home, second-to-last, last]`.
///
/// Total over any input: lookup misses fall back to the formatted segment
/// and malformed paths take the static-page branch.
#[must_use]
pub fn build_breadcrumbs(path: &str, lookup: &dyn PostTagLookup) -> Vec<BreadcrumbItem> {
    let path = path.strip_suffix('/').unwrap_or(path);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut items = vec![BreadcrumbItem {
        label: "Home".to_owned(),
        href: Some("/".to_owned()),
        is_current: segments.is_empty(),
    }];
    if segments.is_empty() {
        return items;
    }

    for (i, &segment) in segments.iter().enumerate() {
        let is_last = i == segments.len() - 1;
        let prev = i.checked_sub(1).map(|p| segments[p]);

        let item = if segment == "blog" {
            section_item("Blog", "/blog", is_last)
        } else if prev == Some("blog") && is_last {
            let label = lookup.post_title(segment).unwrap_or_else(|| {
                tracing::debug!(slug = %segment, "no post for slug, formatting segment");
                format_label(segment)
            });
            terminal_item(label)
        } else if segment == "tags" {
            section_item("Tags", "/tags", is_last)
        } else if prev == Some("tags") && is_last {
            let label = lookup.tag_name(&slugify(segment)).unwrap_or_else(|| {
                tracing::debug!(slug = %segment, "no tag for slug, formatting segment");
                format_label(segment)
            });
            terminal_item(label)
        } else if segment.chars().all(|c| c.is_ascii_digit()) {
            // Pagination page number.
            terminal_item(segment.to_owned())
        } else {
            BreadcrumbItem {
                label: format_label(segment),
                href: (!is_last).then(|| format!("/{}", segments[..=i].join("/"))),
                is_current: is_last,
            }
        };
        items.push(item);
    }

    if items.len() > MAX_TRAIL {
        let len = items.len();
        items.drain(1..len - 2);
    }
    items
}

fn section_item(label: &str, href: &str, is_last: bool) -> BreadcrumbItem {
    BreadcrumbItem {
        label: label.to_owned(),
        href: (!is_last).then(|| href.to_owned()),
        is_current: is_last,
    }
}

fn terminal_item(label: String) -> BreadcrumbItem {
    BreadcrumbItem {
        label,
        href: None,
        is_current: true,
    }
}

/// Format a kebab-case URL segment as a Title Case label.
///
/// # Example
///
/// ```
/// assert_eq!(wm_crumbs::format_label("web-dev-notes"), "Web Dev Notes");
/// ```
#[must_use]
pub fn format_label(segment: &str) -> String {
    segment
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a page should render breadcrumbs at all.
///
/// The homepage has no trail to show; every other path does.
#[must_use]
pub fn should_show_breadcrumbs(path: &str) -> bool {
    !(path.is_empty() || path == "/")
}
