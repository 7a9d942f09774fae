//! Post and tag data model for waymark.
//!
//! Holds the blog-side content types ([`Post`], [`TagData`]) and the
//! [`PostTagLookup`] capability that navigation code uses to turn URL slugs
//! back into display names. Navigation never queries a content store
//! directly; it receives a `&dyn PostTagLookup`, which keeps the builders
//! testable against an in-memory fake and agnostic to how content is
//! actually loaded.
//!
//! [`ContentIndex`] is the standard implementation, backed by a loaded
//! `Vec<Post>`. Tag matching goes through [`wm_slug::slugify`] so that
//! "Node.js" and "node js" resolve to the same tag id.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wm_slug::slugify;

/// A published blog post's navigation-relevant metadata.
///
/// This is the slice of front matter the navigation core needs; body
/// content and rendering data live elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// URL slug identifying the post (e.g. "my-first-post").
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Publish timestamp, used for chronological ordering.
    pub published: DateTime<Utc>,
    /// Tag names in original casing.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A tag with its display name and normalized id.
///
/// `id` is `slugify(name)`; two tags whose names normalize to the same id
/// are the same tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagData {
    /// Display name (original casing of the first occurrence).
    pub name: String,
    /// Normalized slug, unique within a [`collect_tags`] result.
    pub id: String,
}

/// Read capability for resolving URL slugs to display names.
///
/// Implementations may be backed by anything (a loaded content set, a
/// database, a fixture map); the navigation core only needs these two
/// lookups. A miss is `None`, never an error — callers degrade to a
/// formatted fallback label.
pub trait PostTagLookup {
    /// Resolve a post slug to its display title.
    fn post_title(&self, slug: &str) -> Option<String>;

    /// Resolve a tag slug to its original-casing display name.
    ///
    /// Matching compares the queried slug against each known tag's
    /// normalized id.
    fn tag_name(&self, slug: &str) -> Option<String>;
}

/// In-memory [`PostTagLookup`] over a loaded post set.
#[derive(Clone, Debug, Default)]
pub struct ContentIndex {
    posts: Vec<Post>,
}

impl ContentIndex {
    /// Build an index over the given posts.
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// All indexed posts, in insertion order.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }
}

impl PostTagLookup for ContentIndex {
    fn post_title(&self, slug: &str) -> Option<String> {
        self.posts
            .iter()
            .find(|post| post.slug == slug)
            .map(|post| post.title.clone())
    }

    fn tag_name(&self, slug: &str) -> Option<String> {
        self.posts
            .iter()
            .flat_map(|post| &post.tags)
            .find(|tag| slugify(tag) == slug)
            .cloned()
    }
}

/// Comparator for descending publish date, for use with stable `sort_by`.
///
/// Ties compare equal; the sort's stability keeps their relative order.
///
/// # Example
///
/// ```
/// # use wm_content::{Post, by_date_desc};
/// # let mut posts: Vec<Post> = Vec::new();
/// posts.sort_by(by_date_desc);
/// ```
#[must_use]
pub fn by_date_desc(a: &Post, b: &Post) -> Ordering {
    b.published.cmp(&a.published)
}

/// Collect the unique tags across all posts.
///
/// Order is first encountered; when two tag names normalize to the same id
/// the first-seen display name wins. Tags that normalize to the empty slug
/// are skipped.
#[must_use]
pub fn collect_tags(posts: &[Post]) -> Vec<TagData> {
    let mut tags: Vec<TagData> = Vec::new();
    for name in posts.iter().flat_map(|post| &post.tags) {
        let id = slugify(name);
        if id.is_empty() || tags.iter().any(|tag| tag.id == id) {
            continue;
        }
        tags.push(TagData {
            name: name.clone(),
            id,
        });
    }
    tags
}

/// Posts carrying a tag that normalizes to `tag_id`, in input order.
#[must_use]
pub fn posts_with_tag<'a>(posts: &'a [Post], tag_id: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| post.tags.iter().any(|tag| slugify(tag) == tag_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn post(slug: &str, title: &str, year: i32, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_owned(),
            title: title.to_owned(),
            published: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
            tags: tags.iter().map(|&t| t.to_owned()).collect(),
        }
    }

    #[test]
    fn test_post_title_lookup() {
        let index = ContentIndex::new(vec![post("my-post", "My Post", 2024, &[])]);
        assert_eq!(index.post_title("my-post"), Some("My Post".to_owned()));
        assert_eq!(index.post_title("missing"), None);
    }

    #[test]
    fn test_tag_name_resolves_via_normalized_id() {
        let index = ContentIndex::new(vec![post("p", "P", 2024, &["Node.js", "Web Dev"])]);
        assert_eq!(index.tag_name("node-js"), Some("Node.js".to_owned()));
        assert_eq!(index.tag_name("web-dev"), Some("Web Dev".to_owned()));
        assert_eq!(index.tag_name("nope"), None);
    }

    #[test]
    fn test_collect_tags_dedupes_by_normalized_id() {
        let posts = vec![
            post("a", "A", 2024, &["Node.js", "Rust"]),
            post("b", "B", 2023, &["node js", "rust"]),
        ];
        let tags = collect_tags(&posts);
        assert_eq!(
            tags,
            vec![
                TagData {
                    name: "Node.js".to_owned(),
                    id: "node-js".to_owned(),
                },
                TagData {
                    name: "Rust".to_owned(),
                    id: "rust".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_collect_tags_skips_blank_tags() {
        let posts = vec![post("a", "A", 2024, &["", "  ", "Real"])];
        let tags = collect_tags(&posts);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].id, "real");
    }

    #[test]
    fn test_posts_with_tag_matches_normalized() {
        let posts = vec![
            post("a", "A", 2024, &["Node.js"]),
            post("b", "B", 2023, &["Rust"]),
            post("c", "C", 2022, &["node js"]),
        ];
        let hits = posts_with_tag(&posts, "node-js");
        let slugs: Vec<&str> = hits.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "c"]);
    }

    #[test]
    fn test_sort_by_date_desc_is_non_increasing() {
        let mut posts = vec![
            post("old", "Old", 2020, &[]),
            post("new", "New", 2025, &[]),
            post("mid", "Mid", 2023, &[]),
        ];
        posts.sort_by(by_date_desc);
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "mid", "old"]);
        assert!(
            posts
                .windows(2)
                .all(|w| w[0].published >= w[1].published)
        );
    }
}
