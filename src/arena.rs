//! Index-addressed storage for tree nodes. Nodes refer to each other by [`NodeId`] rather than by
//! pointer so parent links can't form ownership cycles and dropping a tree never recurses.

use std::ops::{Index, IndexMut};

/// The position of a [`Node`] in an [`Arena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// A possibly-empty reference to another node.
pub(crate) type Link = Option<NodeId>;

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    /// The node holding this one as `left` or `right`. `None` only for the root.
    pub(crate) parent: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl<K, V> Node<K, V> {
    /// A fresh leaf hanging from `parent`.
    pub(crate) fn new(key: K, value: V, parent: Link) -> Self {
        Self {
            key,
            value,
            parent,
            left: None,
            right: None,
        }
    }

    /// Exactly one of the children, if the node doesn't have two.
    pub(crate) fn only_child(&self) -> Option<Link> {
        match (self.left, self.right) {
            (Some(_), Some(_)) => None,
            (left, None) => Some(left),
            (None, right) => Some(right),
        }
    }
}

impl<K, V> Clone for Node<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            parent: self.parent,
            left: self.left,
            right: self.right,
        }
    }
}

/// Slots of nodes. Freed slots are recycled by later allocations.
pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeId>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns its position.
    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.0].is_none());
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Vacates the slot at `id`, handing back what was stored there.
    ///
    /// ## Panics
    ///
    /// When `id` is already vacant.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<K, V> {
        let node = self.slots[id.0]
            .take()
            .expect("Freeing a node implies it is live");
        self.free.push(id);
        node
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<K, V> Index<NodeId> for Arena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.slots[id.0]
            .as_ref()
            .expect("Links only point at live nodes")
    }
}

impl<K, V> IndexMut<NodeId> for Arena<K, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.slots[id.0]
            .as_mut()
            .expect("Links only point at live nodes")
    }
}

impl<K, V> Clone for Arena<K, V>
where
    K: Clone,
    V: Clone,
{
    // Ids are positions so a slot-for-slot copy keeps every link valid.
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            free: self.free.clone(),
        }
    }
}
