//! The tree type owning the nodes and exposing every operation.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::Node;

/// An unbalanced binary search tree.
///
/// Values double as keys: the tree stores each inserted value in its own
/// [`Node`] and keeps the nodes ordered by the search invariant (left
/// subtree strictly less, right subtree greater or equal). Duplicates are
/// allowed and always descend right.
///
/// Mutating operations return `&mut Self` so calls can be chained.
///
/// # Examples
///
/// ```
/// use bstree::Tree;
///
/// let mut tree = Tree::new();
/// tree.insert(2).insert(1).insert(3);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.bfs(), [&2, &1, &3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T> Tree<T> {
    /// Creates a new, empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Creates a tree rooted at a pre-built node.
    ///
    /// The node (and any children it was built with) must already respect
    /// the search invariant for later operations to behave.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Node, Tree};
    ///
    /// let root = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    /// let tree = Tree::with_root(root);
    ///
    /// assert_eq!(tree.dfs_in_order(), [&1, &2, &3]);
    /// ```
    pub fn with_root(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// The root node, if the tree is non-empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes in the tree, duplicates included. `O(n)`.
    pub fn len(&self) -> usize {
        Self::count(self.root.as_deref())
    }

    /// The number of nodes on the longest root-to-leaf path.
    ///
    /// An empty tree has height 0, a lone root height 1.
    pub fn height(&self) -> usize {
        Self::height_below(self.root.as_deref())
    }

    /// Inserts `value`, iteratively.
    ///
    /// Descends from the root, going left when `value` is less than the
    /// current node and right otherwise (equal values descend right, with
    /// no special casing), and attaches a new leaf at the first empty
    /// slot. An empty tree gets `value` as its root. No rebalancing is
    /// performed.
    ///
    /// Returns the tree for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5).insert(3).insert(5);
    ///
    /// // The duplicate went into the right subtree of the first 5.
    /// assert_eq!(tree.dfs_in_order(), [&3, &5, &5]);
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(value)));
        self
    }

    /// Inserts `value`, recursively. Behaviorally identical to
    /// [`insert`](Self::insert).
    pub fn insert_recursive(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        match self.root.as_deref_mut() {
            Some(root) => Self::insert_below(root, value),
            None => self.root = Some(Box::new(Node::new(value))),
        }
        self
    }

    fn insert_below(node: &mut Node<T>, value: T)
    where
        T: Ord,
    {
        if value < node.value {
            match node.left.as_deref_mut() {
                Some(left) => Self::insert_below(left, value),
                None => node.left = Some(Box::new(Node::new(value))),
            }
        } else {
            match node.right.as_deref_mut() {
                Some(right) => Self::insert_below(right, value),
                None => node.right = Some(Box::new(Node::new(value))),
            }
        }
    }

    /// Finds the node holding `value`, iteratively.
    ///
    /// Runs in `O(height)`: a single descent from the root, branching like
    /// [`insert`](Self::insert) until an exact match or a dead end.
    /// Returns `None` if no node holds `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [4, 2, 6].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&2).map(|node| node.value()), Some(&2));
    /// assert!(tree.find(&5).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Finds the node holding `value`, recursively. Behaviorally identical
    /// to [`find`](Self::find).
    pub fn find_recursive(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        Self::find_below(self.root.as_deref(), value)
    }

    fn find_below<'a>(node: Option<&'a Node<T>>, value: &T) -> Option<&'a Node<T>>
    where
        T: Ord,
    {
        let node = node?;
        match value.cmp(&node.value) {
            Ordering::Equal => Some(node),
            Ordering::Less => Self::find_below(node.left.as_deref(), value),
            Ordering::Greater => Self::find_below(node.right.as_deref(), value),
        }
    }

    /// Visits every value in pre-order (node, left subtree, right subtree)
    /// and returns the fully materialized sequence. Empty for an empty
    /// tree.
    pub fn dfs_pre_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        if let Some(root) = self.root.as_deref() {
            Self::pre_order(root, &mut values);
        }
        values
    }

    /// Visits every value in in-order (left subtree, node, right subtree).
    ///
    /// Because of the search invariant this is the values in sorted order,
    /// duplicates adjacent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [8, 3, 10, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.dfs_in_order(), [&1, &3, &8, &10]);
    /// ```
    pub fn dfs_in_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        if let Some(root) = self.root.as_deref() {
            Self::in_order(root, &mut values);
        }
        values
    }

    /// Visits every value in post-order (left subtree, right subtree,
    /// node).
    pub fn dfs_post_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        if let Some(root) = self.root.as_deref() {
            Self::post_order(root, &mut values);
        }
        values
    }

    /// Visits every value in level order: the root, then each depth's
    /// nodes left to right.
    ///
    /// Uses a FIFO queue seeded with the root; an empty tree yields an
    /// empty sequence without touching the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [8, 3, 10, 1, 6].into_iter().collect();
    ///
    /// assert_eq!(tree.bfs(), [&8, &3, &10, &1, &6]);
    /// assert!(Tree::<i32>::new().bfs().is_empty());
    /// ```
    pub fn bfs(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return values,
        };

        let mut queue = VecDeque::new();
        queue.push_back(root);
        while let Some(node) = queue.pop_front() {
            values.push(&node.value);
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        values
    }

    /// Removes the first node found holding `value` and restructures the
    /// tree to preserve the search invariant (Hibbard deletion).
    ///
    /// A matched node with no children is simply detached, one with a
    /// single child is replaced by that child, and one with two children
    /// has its value replaced by its in-order successor's (the leftmost
    /// value of its right subtree), with the successor node excised from
    /// where it was. The successor strategy can skew heights over repeated
    /// removals; no rebalancing is attempted.
    ///
    /// Removing a value the tree does not hold is a silent no-op.
    ///
    /// Returns the tree for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = [8, 3, 10, 1, 6].into_iter().collect();
    /// tree.remove(&3).remove(&42);
    ///
    /// assert!(tree.find(&3).is_none());
    /// assert_eq!(tree.dfs_in_order(), [&1, &6, &8, &10]);
    /// ```
    pub fn remove(&mut self, value: &T) -> &mut Self
    where
        T: Ord,
    {
        self.root = Self::remove_below(self.root.take(), value);
        self
    }

    /// Removes `value` from the subtree rooted at `link`, returning the
    /// replacement subtree.
    fn remove_below(link: Option<Box<Node<T>>>, value: &T) -> Option<Box<Node<T>>>
    where
        T: Ord,
    {
        let mut node = link?;
        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Self::remove_below(node.left.take(), value);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::remove_below(node.right.take(), value);
                Some(node)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => None,
                (None, Some(child)) | (Some(child), None) => Some(child),
                (Some(left), Some(right)) => {
                    let (right, successor) = Self::detach_leftmost(right);
                    node.value = successor;
                    node.left = Some(left);
                    node.right = right;
                    Some(node)
                }
            },
        }
    }

    /// Detaches the leftmost node of the given subtree, returning the
    /// remaining subtree and the detached value. The leftmost node has no
    /// left child, so its right child (if any) takes its place.
    fn detach_leftmost(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, T) {
        match node.left.take() {
            None => (node.right.take(), node.value),
            Some(left) => {
                let (rest, value) = Self::detach_leftmost(left);
                node.left = rest;
                (Some(node), value)
            }
        }
    }

    /// Whether every node's left and right subtree heights differ by at
    /// most one. An empty tree is balanced.
    ///
    /// Computed bottom-up in one post-order pass; the first violation
    /// short-circuits the walk instead of recomputing heights.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let full: Tree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    /// let chain: Tree<_> = [1, 2, 3, 4, 5].into_iter().collect();
    ///
    /// assert!(full.is_balanced());
    /// assert!(!chain.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        Self::balanced_height(self.root.as_deref()).is_some()
    }

    /// The height of the subtree, or `None` as the "unbalanced" sentinel
    /// the moment any node below violates the height constraint.
    fn balanced_height(node: Option<&Node<T>>) -> Option<usize> {
        let node = match node {
            Some(node) => node,
            None => return Some(0),
        };
        let left = Self::balanced_height(node.left.as_deref())?;
        let right = Self::balanced_height(node.right.as_deref())?;
        if left.abs_diff(right) > 1 {
            None
        } else {
            Some(left.max(right) + 1)
        }
    }

    /// The value immediately below the maximum, or `None` if the tree has
    /// fewer than two nodes.
    ///
    /// Walks right to the maximum while remembering its parent. The
    /// second-highest is then either the largest value of the maximum's
    /// left subtree or, failing that, the parent's value. Duplicates are
    /// handled purely structurally, so a tree holding `[5, 5]` reports
    /// `5`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), Some(&8));
    ///
    /// let lone: Tree<_> = [5].into_iter().collect();
    /// assert_eq!(lone.find_second_highest(), None);
    /// ```
    pub fn find_second_highest(&self) -> Option<&T> {
        let root = self.root.as_deref()?;
        if root.is_leaf() {
            return None;
        }

        let mut parent = None;
        let mut current = root;
        while let Some(right) = current.right.as_deref() {
            parent = Some(current);
            current = right;
        }

        // The maximum's left subtree, when present, holds everything
        // between the second-highest and the maximum; its own maximum is
        // the answer. Otherwise the maximum's parent is.
        if let Some(mut node) = current.left.as_deref() {
            while let Some(right) = node.right.as_deref() {
                node = right;
            }
            return Some(&node.value);
        }
        parent.map(|node| &node.value)
    }

    fn pre_order<'a>(node: &'a Node<T>, values: &mut Vec<&'a T>) {
        values.push(&node.value);
        if let Some(left) = node.left.as_deref() {
            Self::pre_order(left, values);
        }
        if let Some(right) = node.right.as_deref() {
            Self::pre_order(right, values);
        }
    }

    fn in_order<'a>(node: &'a Node<T>, values: &mut Vec<&'a T>) {
        if let Some(left) = node.left.as_deref() {
            Self::in_order(left, values);
        }
        values.push(&node.value);
        if let Some(right) = node.right.as_deref() {
            Self::in_order(right, values);
        }
    }

    fn post_order<'a>(node: &'a Node<T>, values: &mut Vec<&'a T>) {
        if let Some(left) = node.left.as_deref() {
            Self::post_order(left, values);
        }
        if let Some(right) = node.right.as_deref() {
            Self::post_order(right, values);
        }
        values.push(&node.value);
    }

    fn count(node: Option<&Node<T>>) -> usize {
        node.map_or(0, |node| {
            1 + Self::count(node.left.as_deref()) + Self::count(node.right.as_deref())
        })
    }

    fn height_below(node: Option<&Node<T>>) -> usize {
        node.map_or(0, |node| {
            1 + Self::height_below(node.left.as_deref()).max(Self::height_below(node.right.as_deref()))
        })
    }
}
