//! Overlay Rendering
//!
//! Plain text for terminals and HTML markup for embedding in a page.

use crate::overlay::{violation_id, Overlay, INDENT_PX};

const BACKDROP_ID: &str = "outline-validator-backdrop";
const MODAL_ID: &str = "outline-validator-modal";
const BACKDROP_STYLE: &str =
    "position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.5); z-index: 99999;";

/// Escape text for HTML element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl Overlay {
    /// Render as indented text, two spaces per level
    ///
    /// Expanded items list their violations below the label. A closed
    /// overlay renders nothing.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if !self.is_open() {
            return out;
        }

        if let Some(message) = self.success_message() {
            out.push_str(message);
            out.push('\n');
        }

        for item in self.items() {
            let indent = " ".repeat((item.indent_px() / INDENT_PX * 2) as usize);
            out.push_str(&format!("{}{}\n", indent, item.label()));
            if item.is_expanded() {
                for message in item.messages() {
                    out.push_str(&format!("{}  - {}\n", indent, message));
                }
            }
        }
        out
    }

    /// Render the backdrop and modal markup
    ///
    /// A closed overlay renders nothing.
    pub fn render_html(&self) -> String {
        let mut out = String::new();
        if !self.is_open() {
            return out;
        }

        out.push_str(&format!("<div id=\"{}\" style=\"{}\"></div>\n", BACKDROP_ID, BACKDROP_STYLE));
        out.push_str(&format!("<div id=\"{}\">\n", MODAL_ID));
        out.push_str("<button class=\"close-button\">&times;</button>\n");

        if let Some(message) = self.success_message() {
            out.push_str(&format!("<div class=\"success-message\">{}</div>\n", escape_html(message)));
        }

        out.push_str("<ul>\n");
        for (index, item) in self.items().iter().enumerate() {
            let label = escape_html(&item.label());
            let margin = item.indent_px();

            if !item.has_disclosure() {
                out.push_str(&format!("<li class=\"valid\" style=\"margin-left: {}px\">{}</li>\n", margin, label));
                continue;
            }

            let id = violation_id(index);
            out.push_str(&format!(
                "<li class=\"invalid\" style=\"margin-left: {}px\"><button aria-expanded=\"{}\" aria-controls=\"{}\">{}</button>",
                margin,
                item.is_expanded(),
                id,
                label
            ));
            if item.is_expanded() {
                out.push_str(&format!("<div class=\"violation-message\" id=\"{}\">", id));
                for message in item.messages() {
                    out.push_str(&format!("<div>{}</div>", escape_html(&message)));
                }
                out.push_str("</div>");
            }
            out.push_str("</li>\n");
        }
        out.push_str("</ul>\n</div>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outline_a11y::check_document;

    fn overlay(body: &str) -> Overlay {
        let doc = outline_html::parse(body);
        Overlay::open(check_document(&doc).unwrap())
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<h1> & \"q\" 'a'"), "&lt;h1&gt; &amp; &quot;q&quot; &#39;a&#39;");
    }

    #[test]
    fn test_render_text_valid() {
        let text = overlay("<h1>Title</h1><h2>Part</h2><h3>Bit</h3>").render_text();
        assert_eq!(
            text,
            "This webpage has a syntactically valid document outline.\n<h1> Title\n  <h2> Part\n    <h3> Bit\n"
        );
    }

    #[test]
    fn test_render_text_expanded() {
        let mut overlay = overlay("<h1>Title</h1><h3>Bit</h3>");
        overlay.expand_all();
        let text = overlay.render_text();
        assert_eq!(
            text,
            "<h1> Title\n    <h3> Bit \u{26a0}\u{fe0f}\n      - Heading level should not skip levels. Found level 3 after level 1.\n"
        );
    }

    #[test]
    fn test_render_html_disclosure() {
        let mut overlay = overlay("<h2>A &amp; B</h2>");
        let html = overlay.render_html();
        assert!(html.contains("id=\"outline-validator-modal\""));
        assert!(html.contains("aria-expanded=\"false\" aria-controls=\"violation-message-0\""));
        assert!(!html.contains("class=\"violation-message\""));
        assert!(html.contains("&lt;h2&gt; A &amp; B</li>"));

        overlay.toggle(0);
        let html = overlay.render_html();
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains(
            "<div class=\"violation-message\" id=\"violation-message-0\"><div>The page must have at least one top-level heading.</div></div>"
        ));
    }

    #[test]
    fn test_closed_renders_nothing() {
        let mut overlay = overlay("<h1>x</h1>");
        overlay.close();
        assert!(overlay.render_text().is_empty());
        assert!(overlay.render_html().is_empty());
    }
}
