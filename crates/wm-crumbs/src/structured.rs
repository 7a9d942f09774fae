//! Schema.org `BreadcrumbList` projection.

use serde_json::{Value, json};

use crate::BreadcrumbItem;

/// Project a breadcrumb trail into a schema.org `BreadcrumbList` object.
///
/// Positions are 1-based; the `item` field is present only for navigable
/// entries.
///
/// # Example
///
/// ```
/// use wm_content::ContentIndex;
/// use wm_crumbs::{breadcrumb_list_json, build_breadcrumbs};
///
/// let trail = build_breadcrumbs("/about", &ContentIndex::default());
/// let data = breadcrumb_list_json(&trail);
/// assert_eq!(data["@type"], "BreadcrumbList");
/// assert_eq!(data["itemListElement"][0]["position"], 1);
/// ```
#[must_use]
pub fn breadcrumb_list_json(items: &[BreadcrumbItem]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut element = json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": item.label,
            });
            if let Some(href) = &item.href {
                element["item"] = Value::String(href.clone());
            }
            element
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}
