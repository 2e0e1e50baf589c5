//! fOS Outline HTML Parser
//!
//! HTML5 parser built on html5ever, producing an `outline_dom::Document`.

mod parser;

pub use parser::HtmlParser;
pub use outline_dom::Document;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}
