mod error;
mod node;
mod types;

/// This module provides the public B-tree handle.
///
/// The tree stores fixed-size opaque objects, copied by value into node
/// storage and ordered entirely by caller-supplied callbacks. It supports
/// insertion, key-based search into a caller buffer, key-based deletion
/// with sibling borrow/merge rebalancing, in-order traversal, and full
/// teardown with a per-object delete notification.
mod btree;

pub use btree::BTree;
pub use error::Error;
pub use types::ObjectOps;
