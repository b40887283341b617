use std::cmp::Ordering;

/// Application callbacks that give meaning to the opaque byte objects a
/// [`BTree`](crate::BTree) stores.
///
/// The tree copies objects by value into node storage and never inspects
/// them itself; every ordering decision goes through this trait. An
/// implementation must be deterministic and sign-consistent: for any two
/// objects `a` and `b` that can coexist in one tree,
/// `compare_objects(a, b)` and `compare_keys(key_of(a), key_of(b))` must
/// agree in sign, or every structural invariant of the tree is void.
///
/// Duplicate handling is entirely up to the comparator: the tree inserts
/// whatever it is given and removes the first object a key matches. A
/// caller that wants unique keys performs a search before inserting.
///
/// Callbacks run synchronously on the calling thread while the tree is
/// borrowed, so re-entering the same tree from a callback is rejected at
/// compile time.
pub trait ObjectOps {
    /// Total order over stored objects. Drives insertion placement and the
    /// order produced by [`BTree::walk`](crate::BTree::walk).
    fn compare_objects(&self, a: &[u8], b: &[u8]) -> Ordering;

    /// Compares a search key against the key region extracted from a stored
    /// object. Drives search and delete descent.
    fn compare_keys(&self, key: &[u8], object_key: &[u8]) -> Ordering;

    /// Returns the key region inside an object.
    fn key_of<'a>(&self, object: &'a [u8]) -> &'a [u8];

    /// Invoked exactly once per object immediately before it leaves the
    /// tree: on remove, on replacement of an internal separator, and on
    /// teardown. The object bytes are still valid for the duration of the
    /// call and must not be retained.
    fn on_delete(&self, _object: &[u8]) {}
}
