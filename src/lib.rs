//! This crate exposes an unbalanced Binary Search Tree (BST) whose nodes know their parents,
//! along with the small FIFO queue its breadth-first traversal runs on.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of key (the key that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). The [`Tree`] here does nothing to
//! limit its height: inserting keys in sorted order produces a chain. Every walk
//! over the tree therefore uses an explicit stack or [`Queue`] rather than call
//! recursion.
//!
//! ## Example
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key, key.to_string());
//! }
//!
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_bst());
//! assert_eq!(tree.find_kth_largest_value(2).map(String::as_str), Ok("8"));
//! assert_eq!(tree.bfs()[0], "5");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod error;
pub mod queue;
pub mod tree;


pub use error::{Error, Result};
pub use queue::Queue;
pub use tree::Tree;
