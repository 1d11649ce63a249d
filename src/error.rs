use thiserror::Error;

/// An error returned by a [`Tree`][crate::Tree] operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The search reached a node without the key and there was no child to continue into.
    #[error("Key Not Found")]
    KeyNotFound,

    /// A k-th largest query asked for a rank the tree can't satisfy.
    ///
    /// Ranks are 1-indexed so `k == 0` is also out of range.
    #[error("k value {k} is out of range for a BST of {len} nodes")]
    RankOutOfRange {
        /// The requested rank.
        k: usize,
        /// How many nodes the tree held at the time of the query.
        len: usize,
    },
}

/// Shorthand for results of tree operations.
pub type Result<T> = std::result::Result<T, Error>;
