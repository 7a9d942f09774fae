//! Table-of-contents tree construction.
//!
//! Markdown processors emit headings as a flat sequence where each entry
//! carries only an absolute nesting depth, not a parent pointer. This crate
//! reconstructs the nested outline from that lossy form: [`build_toc`]
//! turns a `[Heading]` slice into a forest of [`TocItem`] nodes, rejecting
//! sequences whose depths cannot be placed unambiguously.
//!
//! # Reconstruction model
//!
//! The builder walks the sequence once, maintaining an explicit right-spine
//! stack: the chain of still-open nodes from the most recent root down to
//! the most recently inserted leaf. Depths along the stack are strictly
//! consecutive starting at 2, so the correct parent for an incoming heading
//! of depth `d` is exactly the open node at depth `d - 1`. If no such node
//! is open, the heading is an orphan and the build fails — a depth jump of
//! more than one level has no unambiguous parent.
//!
//! # Example
//!
//! ```
//! use wm_toc::{Heading, build_toc};
//!
//! let headings = [
//!     Heading::new(2, "Setup", "setup"),
//!     Heading::new(3, "Install", "install"),
//!     Heading::new(2, "Usage", "usage"),
//! ];
//! let toc = build_toc(&headings)?;
//! assert_eq!(toc.len(), 2);
//! assert_eq!(toc[0].subheadings[0].text, "Install");
//! # Ok::<(), wm_toc::OrphanHeadingError>(())
//! ```

/// A single document heading, as produced by a markdown processor.
///
/// Depth is the absolute nesting level (1 for H1, 2 for H2, ...). Order in
/// a slice of headings is document order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    /// Nesting level (1-6).
    pub depth: u8,
    /// Heading text.
    pub text: String,
    /// Anchor ID for linking.
    pub slug: String,
}

impl Heading {
    /// Create a heading record.
    #[must_use]
    pub fn new(depth: u8, text: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            depth,
            text: text.into(),
            slug: slug.into(),
        }
    }
}

/// A node in the reconstructed table-of-contents tree.
///
/// Every child in `subheadings` has depth exactly one greater than its
/// parent; siblings appear in document order. Built once per document by
/// [`build_toc`] and not mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TocItem {
    /// Nesting level (2-6; depth-1 headings never enter the TOC).
    pub depth: u8,
    /// Heading text.
    pub text: String,
    /// Anchor ID for linking.
    pub slug: String,
    /// Nested child entries, in document order.
    pub subheadings: Vec<TocItem>,
}

impl TocItem {
    fn from_heading(heading: &Heading) -> Self {
        Self {
            depth: heading.depth,
            text: heading.text.clone(),
            slug: heading.slug.clone(),
            subheadings: Vec::new(),
        }
    }
}

/// A heading whose depth cannot be attached under any open ancestor.
///
/// Raised when a heading's depth skips more than one level past the
/// deepest open node (e.g. an H4 directly after an H2), or when the first
/// body heading is deeper than H2. Fatal to the single build call; the
/// caller decides whether to drop the TOC or abort.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Orphan heading found: {text}")]
pub struct OrphanHeadingError {
    /// Text of the heading that could not be placed.
    pub text: String,
}

/// Build a nested table of contents from a flat heading sequence.
///
/// Only headings with `depth > 1` participate; the document H1 is the page
/// title, not part of the outline. Depth-2 headings become roots of the
/// returned forest.
///
/// # Errors
///
/// Returns [`OrphanHeadingError`] for the first heading that has no open
/// ancestor at exactly one level up. Depth jumps are never coerced to the
/// nearest available parent.
pub fn build_toc(headings: &[Heading]) -> Result<Vec<TocItem>, OrphanHeadingError> {
    let mut toc: Vec<TocItem> = Vec::new();
    // Open nodes from root to deepest, depths consecutive from 2.
    let mut spine: Vec<TocItem> = Vec::new();

    for heading in headings.iter().filter(|h| h.depth > 1) {
        // Close every open node at or below the incoming depth; the new
        // heading starts a fresh branch at its level.
        while spine.last().is_some_and(|open| open.depth >= heading.depth) {
            let Some(closed) = spine.pop() else { break };
            attach(&mut toc, &mut spine, closed);
        }

        let node = TocItem::from_heading(heading);
        if heading.depth == 2 {
            spine.push(node);
        } else {
            match spine.last() {
                Some(parent) if parent.depth + 1 == heading.depth => spine.push(node),
                _ => {
                    return Err(OrphanHeadingError {
                        text: heading.text.clone(),
                    });
                }
            }
        }
    }

    while let Some(closed) = spine.pop() {
        attach(&mut toc, &mut spine, closed);
    }

    Ok(toc)
}

/// Attach a closed node to its parent, or to the forest when it is a root.
fn attach(toc: &mut Vec<TocItem>, spine: &mut [TocItem], node: TocItem) {
    match spine.last_mut() {
        Some(parent) => parent.subheadings.push(node),
        None => toc.push(node),
    }
}
