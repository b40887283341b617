use std::fmt;

/// Errors reported by the tree's public surface.
///
/// A missing key is not an error: search reports it as `Ok(None)` and
/// remove as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The minimum degree handed to [`BTree::new`](crate::BTree::new) was
    /// below 2, which cannot describe a B-tree.
    InvalidMinDegree(usize),
    /// The object size handed to [`BTree::new`](crate::BTree::new) was zero.
    InvalidObjectSize,
    /// An inserted slice did not match the configured object size.
    ObjectSizeMismatch { expected: usize, actual: usize },
    /// The output buffer handed to search cannot hold one object.
    BufferTooSmall { required: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidMinDegree(t) => {
                write!(f, "minimum degree must be at least 2, got {}", t)
            }
            Error::InvalidObjectSize => write!(f, "object size must be non-zero"),
            Error::ObjectSizeMismatch { expected, actual } => {
                write!(f, "object is {} bytes, tree stores {}-byte objects", actual, expected)
            }
            Error::BufferTooSmall { required, actual } => {
                write!(f, "output buffer holds {} bytes, {} required", actual, required)
            }
        }
    }
}

impl std::error::Error for Error {}
