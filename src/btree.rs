use log::debug;

use crate::error::Error;
use crate::node::Node;
use crate::types::ObjectOps;

/// An in-memory B-tree over fixed-size opaque objects.
///
/// Configuration is fixed at construction: the minimum degree `t` bounds
/// every non-root node to between `t - 1` and `2t - 1` objects, and
/// `object_size` is the byte width copied into and out of node storage.
/// All ordering decisions are delegated to the caller's [`ObjectOps`]
/// implementation.
///
/// Objects are stored by value. References returned through the search
/// buffer are byte copies; nothing handed out borrows node storage, so
/// mutating operations are free to move and release nodes.
pub struct BTree<O: ObjectOps> {
    root: Option<Box<Node>>,
    ops: O,
    min_degree: usize,
    object_size: usize,
    len: usize,
}

impl<O: ObjectOps> BTree<O> {
    /// Creates an empty tree with minimum degree `min_degree` storing
    /// objects of `object_size` bytes.
    pub fn new(ops: O, min_degree: usize, object_size: usize) -> Result<BTree<O>, Error> {
        if min_degree < 2 {
            return Err(Error::InvalidMinDegree(min_degree));
        }
        if object_size == 0 {
            return Err(Error::InvalidObjectSize);
        }
        Ok(BTree {
            root: None,
            ops,
            min_degree,
            object_size,
            len: 0,
        })
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance from the root to the leaves, counting nodes. 0 when the
    /// tree is empty. Every leaf sits at the same depth, so the leftmost
    /// spine measures the whole tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            height += 1;
            node = current.children.first().map(|child| child.as_ref());
        }
        height
    }

    /// The callbacks this tree was configured with.
    pub fn ops(&self) -> &O {
        &self.ops
    }

    /// Inserts a copy of `object`, which must be exactly `object_size`
    /// bytes. Duplicates are admitted if the comparator admits them; the
    /// tree performs no duplicate detection of its own.
    pub fn insert(&mut self, object: &[u8]) -> Result<(), Error> {
        if object.len() != self.object_size {
            return Err(Error::ObjectSizeMismatch {
                expected: self.object_size,
                actual: object.len(),
            });
        }
        let t = self.min_degree;
        let size = self.object_size;
        match self.root.take() {
            None => {
                let mut root = Node::boxed(t, size);
                root.insert_non_full(&self.ops, t, size, object);
                self.root = Some(root);
            }
            Some(mut root) => {
                if root.is_full(t, size) {
                    // Split the root before descending so the descent never
                    // meets a full node. This is the only way height grows.
                    debug!("root is full, splitting it to grow the tree");
                    let mut new_root = Node::boxed(t, size);
                    new_root.children.push(root);
                    new_root.split_child(0, t, size);
                    new_root.insert_non_full(&self.ops, t, size, object);
                    self.root = Some(new_root);
                } else {
                    root.insert_non_full(&self.ops, t, size, object);
                    self.root = Some(root);
                }
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Looks up the first object matching `key`. On a hit the object is
    /// copied into `out` and the filled prefix is returned; `Ok(None)`
    /// means the key is absent. The tree is never mutated.
    pub fn search<'a>(&self, key: &[u8], out: &'a mut [u8]) -> Result<Option<&'a [u8]>, Error> {
        if out.len() < self.object_size {
            return Err(Error::BufferTooSmall {
                required: self.object_size,
                actual: out.len(),
            });
        }
        match &self.root {
            None => Ok(None),
            Some(root) => Ok(root.search(&self.ops, self.object_size, key, out)),
        }
    }

    /// Removes the first object matching `key`, invoking the delete
    /// callback on it. Returns false and leaves the tree untouched when
    /// the key is absent.
    pub fn remove(&mut self, key: &[u8]) -> bool {
        let t = self.min_degree;
        let size = self.object_size;
        let removed = match self.root.as_mut() {
            None => return false,
            Some(root) => root.remove_key(&self.ops, t, size, key, true),
        };
        if self.root.as_ref().map_or(false, |root| root.len(size) == 0) {
            // Root collapse: the only way height shrinks.
            let mut root = self.root.take().unwrap();
            if root.is_leaf() {
                debug!("last object removed, tree is empty");
            } else {
                self.root = Some(root.children.remove(0));
                debug!("root emptied, tree shrank to height {}", self.height());
            }
        }
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Visits every object in ascending order under the object comparator.
    pub fn walk<F: FnMut(&[u8])>(&self, mut visitor: F) {
        if let Some(root) = &self.root {
            root.walk(self.object_size, &mut visitor);
        }
    }

    /// Destroys every node, invoking the delete callback once per stored
    /// object. The tree is empty and reusable afterwards. Dropping the
    /// tree performs the same teardown.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            debug!("tearing down tree holding {} objects", self.len);
            root.destroy(&self.ops, self.object_size);
        }
        self.len = 0;
    }

    /// Audits every structural invariant and panics on the first
    /// violation. Intended for tests; cost is a full traversal.
    pub fn check_invariants(&self) {
        if let Some(root) = &self.root {
            let mut leaf_depth = None;
            root.check_subtree(
                &self.ops,
                self.min_degree,
                self.object_size,
                true,
                0,
                &mut leaf_depth,
                None,
                None,
            );
        }
    }
}

impl<O: ObjectOps> Drop for BTree<O> {
    fn drop(&mut self) {
        self.clear();
    }
}
