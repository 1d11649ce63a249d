//! An unbalanced BST whose nodes live in an arena. Every node keeps a link to its parent so a
//! removal can relink the surrounding nodes without searching for them again.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), Err(Error::KeyNotFound));
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.find(&1), Ok(&2));
//!
//! // Removing a key hands back its value.
//! assert_eq!(tree.remove(&1), Ok(2));
//! assert_eq!(tree.find(&1), Err(Error::KeyNotFound));
//!
//! // Removing it again is an error and leaves the tree alone.
//! assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{trace, warn};

use crate::arena::{Arena, Link, Node, NodeId};
use crate::error::{Error, Result};
use crate::queue::Queue;

/// A Binary Search Tree with no self-balancing: its shape is decided purely by insertion order.
/// This can be used for inserting, finding, and removing keys and values, and for walking the
/// stored values in any of the four classic orders.
///
/// Inserting a key that is already present does not replace it. The new entry is placed in the
/// right subtree of the existing one, so equal keys behave first-in-first-out: [`find`] sees the
/// earliest remaining entry and [`remove`] removes it.
///
/// [`find`]: Tree::find
/// [`remove`]: Tree::remove
pub struct Tree<K, V> {
    nodes: Arena<K, V>,
    // `None` is the empty tree. The `Tree` itself stays the caller's handle no matter how many
    // keys come and go.
    root: Link,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for Tree<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.walk_in_order(|node| {
            map.entry(&node.key, &node.value);
        });
        map.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V> Extend<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Generate a new, empty `Tree` with room for `capacity` nodes before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Inserts the given value into the tree stored at the given key. Keys smaller than a node's
    /// key go to its left, all others (including equal keys) go to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.find(&1), Ok(&2));
    ///
    /// // The first entry for a key shadows later ones.
    /// tree.insert(1, 3);
    /// assert_eq!(tree.find(&1), Ok(&2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let Some(mut current) = self.root else {
            trace!("inserting root of empty tree");
            self.root = Some(self.nodes.alloc(Node::new(key, value, None)));
            return;
        };

        loop {
            let node = &self.nodes[current];
            let (goes_left, next) = match key.cmp(&node.key) {
                Ordering::Less => (true, node.left),
                Ordering::Equal | Ordering::Greater => (false, node.right),
            };

            match next {
                Some(child) => current = child,
                None => {
                    let leaf = Some(self.nodes.alloc(Node::new(key, value, Some(current))));
                    let parent = &mut self.nodes[current];
                    if goes_left {
                        parent.left = leaf;
                    } else {
                        parent.right = leaf;
                    }
                    return;
                }
            }
        }
    }

    /// Finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, [`Error::KeyNotFound`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Ok(&2));
    /// assert_eq!(tree.find(&42), Err(Error::KeyNotFound));
    /// ```
    pub fn find(&self, key: &K) -> Result<&V>
    where
        K: Ord,
    {
        self.locate(key).map(|id| &self.nodes[id].value)
    }

    /// Like [`find`][Self::find] but the value can be modified in place.
    pub fn find_mut(&mut self, key: &K) -> Result<&mut V>
    where
        K: Ord,
    {
        let id = self.locate(key)?;
        Ok(&mut self.nodes[id].value)
    }

    /// Whether some node holds `key`.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.locate(key).is_ok()
    }

    /// Removes the node containing the given key from the tree and returns its value. If the tree
    /// does not contain a node with the key, [`Error::KeyNotFound`] is returned and the tree is
    /// left untouched.
    ///
    /// A node with two children is not unlinked itself: it takes over the key and value of its
    /// in-order successor (the smallest key in its right subtree) and the successor's node is
    /// unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_, _> = [5, 3, 8, 7, 9].into_iter().map(|k| (k, k * 10)).collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(50));
    /// assert_eq!(tree.dfs_pre_order(), [&70, &30, &80, &90]);
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V>
    where
        K: Ord,
    {
        let target = self.locate(key)?;
        let node = &self.nodes[target];

        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                trace!("promoting in-order successor into two-child node");
                let Node {
                    key: successor_key,
                    value: successor_value,
                    ..
                } = self.unlink(successor);

                let node = &mut self.nodes[target];
                node.key = successor_key;
                Ok(mem::replace(&mut node.value, successor_value))
            }
            _ => Ok(self.unlink(target).value),
        }
    }

    /// The entry with the smallest key.
    pub fn min(&self) -> Option<(&K, &V)> {
        self.root.map(|root| {
            let node = &self.nodes[self.leftmost(root)];
            (&node.key, &node.value)
        })
    }

    /// The entry with the largest key. With duplicate keys this is the latest remaining one.
    pub fn max(&self) -> Option<(&K, &V)> {
        self.root.map(|root| {
            let node = &self.nodes[self.rightmost(root)];
            (&node.key, &node.value)
        })
    }

    /// The values in ascending key order (left subtree, node, right subtree).
    pub fn dfs_in_order(&self) -> Vec<&V> {
        let mut values = Vec::with_capacity(self.len());
        self.dfs_in_order_into(&mut values);
        values
    }

    /// Appends the values to `values` in ascending key order.
    pub fn dfs_in_order_into<'a>(&'a self, values: &mut Vec<&'a V>) {
        self.walk_in_order(|node| values.push(&node.value));
    }

    /// The values with each node before its subtrees (node, left subtree, right subtree).
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_, _> = [2, 1, 3].into_iter().map(|k| (k, k)).collect();
    /// assert_eq!(tree.dfs_pre_order(), [&2, &1, &3]);
    /// ```
    pub fn dfs_pre_order(&self) -> Vec<&V> {
        let mut values = Vec::with_capacity(self.len());
        self.dfs_pre_order_into(&mut values);
        values
    }

    /// Appends the values to `values` with each node before its subtrees.
    pub fn dfs_pre_order_into<'a>(&'a self, values: &mut Vec<&'a V>) {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            values.push(&node.value);
            // Left goes on top so it's visited first.
            stack.extend(node.right);
            stack.extend(node.left);
        }
    }

    /// The values with each node after its subtrees (left subtree, right subtree, node).
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_, _> = [2, 1, 3].into_iter().map(|k| (k, k)).collect();
    /// assert_eq!(tree.dfs_post_order(), [&1, &3, &2]);
    /// ```
    pub fn dfs_post_order(&self) -> Vec<&V> {
        let mut values = Vec::with_capacity(self.len());
        self.dfs_post_order_into(&mut values);
        values
    }

    /// Appends the values to `values` with each node after its subtrees.
    pub fn dfs_post_order_into<'a>(&'a self, values: &mut Vec<&'a V>) {
        // Node, right, left reversed is left, right, node.
        let start = values.len();
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            values.push(&node.value);
            stack.extend(node.left);
            stack.extend(node.right);
        }
        values[start..].reverse();
    }

    /// The values level by level from the root, each level left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_, _> = [5, 3, 8, 1, 9].into_iter().map(|k| (k, k)).collect();
    /// assert_eq!(tree.bfs(), [&5, &3, &8, &1, &9]);
    /// ```
    pub fn bfs(&self) -> Vec<&V> {
        let mut values = Vec::with_capacity(self.len());
        self.bfs_into(&mut values);
        values
    }

    /// Appends the values to `values` level by level.
    pub fn bfs_into<'a>(&'a self, values: &mut Vec<&'a V>) {
        let mut queue = Queue::new();
        if let Some(root) = self.root {
            queue.enqueue(root);
        }

        while let Some(id) = queue.dequeue() {
            let node = &self.nodes[id];
            values.push(&node.value);
            if let Some(left) = node.left {
                queue.enqueue(left);
            }
            if let Some(right) = node.right {
                queue.enqueue(right);
            }
        }
    }

    /// The number of edges between the root and its deepest descendant. A tree with a single
    /// node has a height of 0, as does an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let chain: Tree<_, _> = (1..=5).map(|k| (k, k)).collect();
    /// assert_eq!(chain.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> =
            self.root.map(|root| (root, 0)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            height = height.max(depth);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }

        height
    }

    /// Checks that the in-order walk produces a non-decreasing sequence of values, returning
    /// `false` at the first value smaller than the one before it.
    ///
    /// Values are audited, not keys, so a tree whose values don't follow its keys' order is
    /// reported as invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_, _> = [(1, "a"), (2, "b")].into_iter().collect();
    /// assert!(tree.is_bst());
    ///
    /// let tree: Tree<_, _> = [(1, "b"), (2, "a")].into_iter().collect();
    /// assert!(!tree.is_bst());
    /// ```
    pub fn is_bst(&self) -> bool
    where
        V: PartialOrd,
    {
        self.dfs_in_order()
            .windows(2)
            .all(|pair| pair[0] <= pair[1])
    }

    /// The value of the `k`-th largest key, counting from 1: `k == 1` is the maximum.
    ///
    /// A `k` of 0 or larger than [`len`][Self::len] is logged as a warning and returned as
    /// [`Error::RankOutOfRange`].
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Error, Tree};
    ///
    /// let tree: Tree<_, _> = [5, 3, 8].into_iter().map(|k| (k, k)).collect();
    ///
    /// assert_eq!(tree.find_kth_largest_value(1), Ok(&8));
    /// assert_eq!(tree.find_kth_largest_value(3), Ok(&3));
    /// assert_eq!(
    ///     tree.find_kth_largest_value(4),
    ///     Err(Error::RankOutOfRange { k: 4, len: 3 })
    /// );
    /// ```
    pub fn find_kth_largest_value(&self, k: usize) -> Result<&V> {
        // Eager like the other traversals: the whole in-order walk is materialized and indexed.
        let values = self.dfs_in_order();
        match values.len().checked_sub(k) {
            Some(index) if k > 0 => Ok(values[index]),
            _ => {
                let error = Error::RankOutOfRange {
                    k,
                    len: values.len(),
                };
                warn!("{error}");
                Err(error)
            }
        }
    }

    /// Finds the shallowest node holding `key`.
    fn locate(&self, key: &K) -> Result<NodeId>
    where
        K: Ord,
    {
        let mut current = self.root.ok_or(Error::KeyNotFound)?;
        loop {
            let node = &self.nodes[current];
            let next = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Ok(current),
                Ordering::Greater => node.right,
            };
            current = next.ok_or(Error::KeyNotFound)?;
        }
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        id
    }

    /// Frees a node with at most one child, putting that child (or nothing) where the node was.
    ///
    /// ## Panics
    ///
    /// When the node has two children.
    fn unlink(&mut self, id: NodeId) -> Node<K, V> {
        let node = self.nodes.free(id);
        let child = node
            .only_child()
            .expect("Unlinking a node requires at most one child");

        if let Some(child) = child {
            self.nodes[child].parent = node.parent;
        }
        match node.parent {
            Some(parent) => {
                trace!("splicing child into parent");
                let parent = &mut self.nodes[parent];
                if parent.left == Some(id) {
                    parent.left = child;
                } else {
                    debug_assert_eq!(parent.right, Some(id));
                    parent.right = child;
                }
            }
            None => {
                trace!("replacing root");
                self.root = child;
            }
        }

        node
    }

    /// Visits the nodes in ascending key order.
    fn walk_in_order<'a>(&'a self, mut visit: impl FnMut(&'a Node<K, V>)) {
        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes[id].left;
            }
            let Some(id) = stack.pop() else {
                return;
            };
            let node = &self.nodes[id];
            visit(node);
            current = node.right;
        }
    }
}
