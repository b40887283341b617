#![allow(dead_code)]

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

use btreebase::{BTree, ObjectOps};

pub const OBJECT_SIZE: usize = 16;

/// Builds a 16-byte test record: a little-endian u64 key followed by a
/// u64 payload.
pub fn record(key: u64, payload: u64) -> [u8; OBJECT_SIZE] {
    let mut object = [0u8; OBJECT_SIZE];
    object[..8].copy_from_slice(&key.to_le_bytes());
    object[8..].copy_from_slice(&payload.to_le_bytes());
    object
}

pub fn key_bytes(key: u64) -> [u8; 8] {
    key.to_le_bytes()
}

pub fn record_key(object: &[u8]) -> u64 {
    u64::from_le_bytes(object[..8].try_into().unwrap())
}

pub fn record_payload(object: &[u8]) -> u64 {
    u64::from_le_bytes(object[8..16].try_into().unwrap())
}

/// Payload the helpers derive from a key, so search results can be
/// checked bytewise.
pub fn payload_for(key: u64) -> u64 {
    key.wrapping_mul(31).wrapping_add(7)
}

/// Callbacks for the test records. Orders by key only, so the comparator
/// admits duplicate keys, and counts delete notifications.
#[derive(Default)]
pub struct RecordOps {
    pub deleted: Rc<Cell<usize>>,
}

impl ObjectOps for RecordOps {
    fn compare_objects(&self, a: &[u8], b: &[u8]) -> Ordering {
        record_key(a).cmp(&record_key(b))
    }

    fn compare_keys(&self, key: &[u8], object_key: &[u8]) -> Ordering {
        let key = u64::from_le_bytes(key.try_into().unwrap());
        let object_key = u64::from_le_bytes(object_key.try_into().unwrap());
        key.cmp(&object_key)
    }

    fn key_of<'a>(&self, object: &'a [u8]) -> &'a [u8] {
        &object[..8]
    }

    fn on_delete(&self, _object: &[u8]) {
        self.deleted.set(self.deleted.get() + 1);
    }
}

/// Fresh tree plus a handle on its delete counter.
pub fn new_tree(min_degree: usize) -> (BTree<RecordOps>, Rc<Cell<usize>>) {
    let ops = RecordOps::default();
    let deleted = ops.deleted.clone();
    let tree = BTree::new(ops, min_degree, OBJECT_SIZE).unwrap();
    (tree, deleted)
}

pub fn insert_keys(tree: &mut BTree<RecordOps>, keys: &[u64]) {
    for &key in keys {
        tree.insert(&record(key, payload_for(key))).unwrap();
    }
}

pub fn walk_keys(tree: &BTree<RecordOps>) -> Vec<u64> {
    let mut keys = Vec::new();
    tree.walk(|object| keys.push(record_key(object)));
    keys
}

pub fn walk_bytes(tree: &BTree<RecordOps>) -> Vec<u8> {
    let mut bytes = Vec::new();
    tree.walk(|object| bytes.extend_from_slice(object));
    bytes
}
