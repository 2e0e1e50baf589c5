//! fOS Outline Overlay
//!
//! Presentation of an outline check: a modal overlay listing every heading
//! with its violations, or a blocking notice when the page has no headings.
//!
//! The overlay owns its own lifecycle. It is built from the checker's output
//! and never feeds anything back into it.

mod overlay;
mod render;

pub use overlay::{Overlay, OverlayItem, OverlayState, Key, INDENT_PX};
pub use render::escape_html;

use outline_a11y::{Outline, OutlineError};

/// Shown above the list when every entry is valid
pub const SUCCESS_MESSAGE: &str = "This webpage has a syntactically valid document outline.";

/// Blocking notice shown instead of an overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// What the user gets to see for a check result
#[derive(Debug)]
pub enum Presentation {
    /// The check could not produce an outline
    Notice(Notice),
    /// An open overlay for the outline
    Overlay(Overlay),
}

/// Turn a check result into its presentation
pub fn present(result: Result<Outline, OutlineError>) -> Presentation {
    match result {
        Ok(outline) => Presentation::Overlay(Overlay::open(outline)),
        Err(err) => {
            tracing::info!("{}", err);
            Presentation::Notice(Notice::new(err.to_string()))
        }
    }
}
