//! HTML5 Parser implementation
//!
//! Uses html5ever's build-in RcDom and converts to our DOM format.

use std::io::Read;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use outline_dom::{Document, DomTree, Node, NodeId};

use crate::HtmlError;

/// HTML5 parser
#[derive(Debug, Clone, Copy)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Document {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a document URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Document {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default()).one(html);
        self.build(&dom, url)
    }

    /// Parse HTML bytes from a reader (lossy UTF-8 decoding)
    pub fn parse_reader<R: Read>(&self, reader: &mut R, url: &str) -> Result<Document, HtmlError> {
        tracing::debug!("Parsing HTML stream: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(reader)?;
        Ok(self.build(&dom, url))
    }

    fn build(&self, dom: &RcDom, url: &str) -> Document {
        let mut document = Document::empty(url);
        self.convert(&dom.document, document.tree_mut());

        // Find the title element
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        document
    }

    /// Convert an RcDom tree to our DOM format
    ///
    /// Walks with an explicit stack so nesting depth is bounded by the heap,
    /// not the call stack.
    fn convert(&self, document: &Handle, tree: &mut DomTree) {
        let mut stack: Vec<(Handle, NodeId)> = Vec::new();
        push_children(&mut stack, document, NodeId::ROOT);

        while let Some((handle, parent)) = stack.pop() {
            match &handle.data {
                RcNodeData::Document => push_children(&mut stack, &handle, parent),
                RcNodeData::Doctype { name, .. } => {
                    let id = tree.push(Node::doctype(name.to_string()));
                    tree.append_child(parent, id);
                }
                RcNodeData::Text { contents } => {
                    // Whitespace-only runs are kept: they separate words in accessible names
                    let id = tree.create_text(&contents.borrow());
                    tree.append_child(parent, id);
                }
                RcNodeData::Comment { contents } => {
                    let id = tree.create_comment(contents);
                    tree.append_child(parent, id);
                }
                RcNodeData::Element { name, attrs, .. } => {
                    let id = tree.create_element(name.local.as_ref());
                    for attr in attrs.borrow().iter() {
                        tree.set_attribute(id, attr.name.local.as_ref(), &attr.value);
                    }
                    tree.append_child(parent, id);
                    push_children(&mut stack, &handle, id);
                }
                RcNodeData::ProcessingInstruction { .. } => {
                    // Not part of the HTML outline
                }
            }
        }
    }
}

/// Queue children in reverse so they pop in document order
fn push_children(stack: &mut Vec<(Handle, NodeId)>, handle: &Handle, parent: NodeId) {
    stack.extend(handle.children.borrow().iter().rev().map(|child| (child.clone(), parent)));
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}
