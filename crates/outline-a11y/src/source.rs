//! Name Sources
//!
//! The read-only view of a document that name resolution needs.

use outline_dom::{Document, NodeData, NodeId};

/// A child node as seen by name resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildNode<'a, E> {
    /// Text node contents, verbatim
    Text(&'a str),
    /// Element child
    Element(E),
}

/// Read-only document access used to compute accessible names
///
/// Every call reads the current state; implementations must not cache.
pub trait NameSource {
    /// Opaque element handle
    type Element: Copy;

    /// Attribute value; `Some("")` for a present but empty attribute
    fn attribute(&self, element: Self::Element, name: &str) -> Option<&str>;

    /// Ordered text and element children (comments etc. are skipped)
    fn child_nodes(&self, element: Self::Element) -> Vec<ChildNode<'_, Self::Element>>;

    /// Full text content of the element's subtree
    fn text_content(&self, element: Self::Element) -> String;

    /// Image-like leaf whose `alt` names it
    fn is_image(&self, element: Self::Element) -> bool;

    /// Resolve an `id` reference
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

impl NameSource for Document {
    type Element = NodeId;

    fn attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        self.tree().get(element)?.as_element()?.get_attr(name)
    }

    fn child_nodes(&self, element: NodeId) -> Vec<ChildNode<'_, NodeId>> {
        self.tree().children(element)
            .filter_map(|(id, node)| match &node.data {
                NodeData::Text(text) => Some(ChildNode::Text(text.as_str())),
                NodeData::Element(_) => Some(ChildNode::Element(id)),
                _ => None,
            })
            .collect()
    }

    fn text_content(&self, element: NodeId) -> String {
        self.tree().text_content(element)
    }

    fn is_image(&self, element: NodeId) -> bool {
        self.tree().get(element)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.is("img"))
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }
}
