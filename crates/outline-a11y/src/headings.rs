//! Heading Query
//!
//! Collects `h1`-`h6` elements in document order.

use outline_dom::{Document, NodeId};

/// Heading tag names, indexed by level - 1
pub const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// A heading element and its numeric level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingDescriptor<E> {
    /// 1-6 for HTML headings
    pub level: u8,
    /// Element to resolve the heading's name from
    pub element: E,
}

impl<E> HeadingDescriptor<E> {
    pub fn new(level: u8, element: E) -> Self {
        Self { level, element }
    }
}

/// Numeric level for an `h1`-`h6` tag name
pub fn heading_level(tag: &str) -> Option<u8> {
    HEADING_TAGS.iter()
        .position(|h| h.eq_ignore_ascii_case(tag))
        .map(|i| i as u8 + 1)
}

/// All headings of `doc` in document order
pub fn collect_headings(doc: &Document) -> Vec<HeadingDescriptor<NodeId>> {
    doc.elements_by_tag_names(&HEADING_TAGS)
        .into_iter()
        .filter_map(|id| {
            let elem = doc.tree().get(id)?.as_element()?;
            Some(HeadingDescriptor::new(heading_level(&elem.tag)?, id))
        })
        .collect()
}
