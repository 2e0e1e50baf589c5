//! Document - High-level document API

use crate::{DomTree, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to the first <title> element
    title_element: NodeId,
}

impl Document {
    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            title_element: NodeId::NONE,
        }
    }

    /// Locate the <title> element after the tree was built externally
    pub fn finalize(&mut self) {
        self.title_element = self.tree.descendants(self.tree.root())
            .find(|(_, n)| n.as_element().is_some_and(|e| e.is("title")))
            .map(|(id, _)| id)
            .unwrap_or(NodeId::NONE);

        tracing::debug!(
            nodes = self.tree.len(),
            has_title = self.title_element.is_valid(),
            "Document finalized"
        );
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get document title, whitespace-trimmed
    pub fn title(&self) -> String {
        if !self.title_element.is_valid() {
            return String::new();
        }
        self.tree.text_content(self.title_element).trim().to_string()
    }

    /// Get the first element in document order whose id matches exactly
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.tree.descendants(self.tree.root())
            .find(|(_, node)| {
                node.as_element()
                    .and_then(|e| e.id.as_deref())
                    .is_some_and(|elem_id| elem_id == id)
            })
            .map(|(node_id, _)| node_id)
    }

    /// All elements whose tag is one of `tags`, in document order
    pub fn elements_by_tag_names(&self, tags: &[&str]) -> Vec<NodeId> {
        self.tree.descendants(self.tree.root())
            .filter(|(_, node)| {
                node.as_element()
                    .is_some_and(|e| tags.iter().any(|tag| e.is(tag)))
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}
