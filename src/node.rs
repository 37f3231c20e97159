//! The node type that [`Tree`](crate::Tree)s are built from.

/// A single node in a binary search tree.
///
/// A `Node` holds a value and owns up to two children; a node with no
/// children is a leaf. Nodes are plain data: all searching and
/// restructuring lives on [`Tree`](crate::Tree), which owns the root node
/// exclusively. There are no parent pointers and no sharing, so the node
/// graph is always a strict tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a leaf node holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Creates a node holding `value` with the given children.
    ///
    /// The caller is responsible for the children respecting the search
    /// invariant: everything under `left` must compare less than `value`
    /// and everything under `right` greater than or equal to it.
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// This node's left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// This node's right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_makes_a_leaf() {
        let node = Node::new(7);
        assert_eq!(node.value(), &7);
        assert!(node.is_leaf());
    }

    #[test]
    fn with_children_wires_both_sides() {
        let node = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
        assert!(!node.is_leaf());
        assert_eq!(node.left().map(Node::value), Some(&1));
        assert_eq!(node.right().map(Node::value), Some(&3));
    }
}
