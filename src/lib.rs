//! An unbalanced Binary Search Tree (BST) over ordered values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The important invariants of this tree are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree
//!    have a value less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree
//!    have a value greater than *or equal to* its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The second invariant is deliberately asymmetric: duplicate values are
//! allowed and always descend to the right, so later-inserted duplicates
//! appear after earlier ones in sorted order. Insertion, lookup, and
//! removal all lean on this rule.
//!
//! Searching takes `O(height)` (where `height` is the longest path from the
//! root `Node` to a leaf `Node`). This tree performs **no rebalancing**:
//! the shape is entirely determined by the order of insertions and
//! deletions, so sorted input degrades the tree into a linked list and
//! `O(height)` becomes `O(n)`. Deletion uses Hibbard's successor-based
//! algorithm, which is known to skew heights further over repeated
//! deletions; that is inherent to the algorithm and left as-is. Use
//! [`Tree::is_balanced`] to check what you ended up with.
//!
//! Nodes are owned exclusively by their parent (the root by the tree
//! itself), so the structure is single-threaded and lock-free by
//! construction; dropping the tree drops every node.
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(8).insert(3).insert(10).insert(1).insert(6);
//!
//! assert_eq!(tree.find(&6).map(|node| node.value()), Some(&6));
//! assert_eq!(tree.dfs_in_order(), [&1, &3, &6, &8, &10]);
//!
//! tree.remove(&3);
//! assert!(tree.find(&3).is_none());
//! ```

#![deny(missing_docs)]

pub mod node;
pub mod tree;

pub use node::Node;
pub use tree::Tree;
