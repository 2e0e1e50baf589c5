//! fOS Outline Accessibility
//!
//! Heading outline checks for HTML documents.
//!
//! Features:
//! - Accessible name computation (`aria-labelledby`, `aria-label`, `alt`, content)
//! - Heading query in document order
//! - Outline validation (single top-level heading, first level, no skipped levels)
//!
//! # Example
//! ```rust,ignore
//! let doc = outline_html::parse(html);
//! let outline = outline_a11y::check_document(&doc)?;
//! for entry in &outline {
//!     println!("h{} {} {}", entry.level, entry.text, entry.is_valid);
//! }
//! ```

pub mod source;
pub mod name;
pub mod headings;
pub mod outline;

pub use source::{NameSource, ChildNode};
pub use name::accessible_name;
pub use headings::{HeadingDescriptor, collect_headings, heading_level};
pub use outline::{Outline, OutlineEntry, OutlineValidator, Violation, MISSING_TOP_LEVEL_TEXT};

use outline_dom::Document;

/// Outline check error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutlineError {
    #[error("No headings found on this page.")]
    NoHeadings,
}

/// Collect the headings of `doc` and validate them
///
/// Returns `OutlineError::NoHeadings` without running the validator when the
/// document has no `h1`-`h6` elements.
pub fn check_document(doc: &Document) -> Result<Outline, OutlineError> {
    let headings = collect_headings(doc);
    if headings.is_empty() {
        tracing::debug!(url = doc.url(), "No headings found");
        return Err(OutlineError::NoHeadings);
    }
    OutlineValidator::new(doc).validate(&headings)
}
