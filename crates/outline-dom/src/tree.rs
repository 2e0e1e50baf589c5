//! DOM Tree (arena-based allocation)

use crate::{Node, NodeId};

/// Arena-based DOM tree for memory efficiency
///
/// Node 0 is always the document node.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self { nodes: vec![Node::document()] }
    }

    /// Document node ID
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a detached node to the arena
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(Node::text(text))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(Node::comment(text))
    }

    /// Append `child` as the last child of `parent`
    ///
    /// Returns false when either ID is unknown, the child is already attached,
    /// or the child is the document node or an ancestor of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if child == NodeId::ROOT || self.get(parent).is_none() {
            return false;
        }
        let has_children = match self.get(child) {
            Some(node) if !node.parent.is_valid() => node.first_child.is_valid(),
            _ => return false,
        };
        // A childless node can only be its own ancestor
        if parent == child || (has_children && self.is_inclusive_ancestor(child, parent)) {
            return false;
        }

        let prev_last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = prev_last;
            node.next_sibling = NodeId::NONE;
        }
        if prev_last.is_valid() {
            self.nodes[prev_last.index()].next_sibling = child;
        }
        let parent_node = &mut self.nodes[parent.index()];
        if !parent_node.first_child.is_valid() {
            parent_node.first_child = child;
        }
        parent_node.last_child = child;
        true
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = node;
        while cursor.is_valid() {
            if cursor == ancestor {
                return true;
            }
            cursor = self.get(cursor).map(|n| n.parent).unwrap_or(NodeId::NONE);
        }
        false
    }

    /// Set an attribute on an element; no-op for non-elements
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.get_mut(id).and_then(Node::as_element_mut) {
            elem.set_attr(name, value);
        }
    }

    /// Iterate direct children in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children { tree: self, next }
    }

    /// Iterate all descendants of `id` in document (pre-)order, excluding `id`
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let next = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Descendants { tree: self, start: id, next }
    }

    /// Concatenated text of all descendant text nodes (DOM `textContent`)
    pub fn text_content(&self, id: NodeId) -> String {
        match self.get(id) {
            Some(node) if node.is_text() => node.as_text().unwrap_or_default().to_string(),
            Some(_) => self.descendants(id)
                .filter_map(|(_, node)| node.as_text())
                .collect(),
            None => String::new(),
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the direct children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    tree: &'a DomTree,
    start: NodeId,
    next: NodeId,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;

        // Descend first, then walk siblings, climbing until we leave the subtree
        self.next = if node.first_child.is_valid() {
            node.first_child
        } else {
            let mut cursor = id;
            loop {
                if cursor == self.start {
                    break NodeId::NONE;
                }
                let Some(current) = self.tree.get(cursor) else {
                    break NodeId::NONE;
                };
                if current.next_sibling.is_valid() {
                    break current.next_sibling;
                }
                cursor = current.parent;
            }
        };

        Some((id, node))
    }
}
