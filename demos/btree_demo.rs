//! Randomized workload driver: load a batch of records, verify every one
//! by search, walk them in order, delete a slice, then tear the tree down.
//!
//! Run with `RUST_LOG=debug` to watch the structural events the library
//! logs (root splits, root collapse, teardown).

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;
use std::time::SystemTime;

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use btreebase::{BTree, ObjectOps};

const DATA_COUNT: usize = 128;
const DELETE_COUNT: usize = 32;
const MIN_DEGREE: usize = 15;
const OBJECT_SIZE: usize = 16;

/// 16-byte record: little-endian u64 key, then a u64 payload.
#[derive(Default)]
struct DemoOps {
    deleted: Rc<Cell<usize>>,
}

fn key_of_record(object: &[u8]) -> u64 {
    u64::from_le_bytes(object[..8].try_into().unwrap())
}

impl ObjectOps for DemoOps {
    fn compare_objects(&self, a: &[u8], b: &[u8]) -> Ordering {
        key_of_record(a).cmp(&key_of_record(b))
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

fn record(key: u64, payload: u64) -> [u8; OBJECT_SIZE] {
    let mut object = [0u8; OBJECT_SIZE];
    object[..8].copy_from_slice(&key.to_le_bytes());
    object[8..].copy_from_slice(&payload.to_le_bytes());
    object
}

fn main() {
    env_logger::init();

    let ops = DemoOps::default();
    let deleted = ops.deleted.clone();
    let mut tree = BTree::new(ops, MIN_DEGREE, OBJECT_SIZE).unwrap();

    let mut rng = thread_rng();
    let mut out = [0u8; OBJECT_SIZE];
    let mut keys = Vec::with_capacity(DATA_COUNT);

    // Keys are drawn at random; on the rare collision, redraw, so the demo
    // data set stays unique without the tree rejecting anything.
    let start = SystemTime::now();
    while keys.len() < DATA_COUNT {
        let key: u64 = rng.gen_range(0..100_000);
        if tree.search(&key.to_le_bytes(), &mut out).unwrap().is_some() {
            continue;
        }
        tree.insert(&record(key, rng.gen())).unwrap();
        keys.push(key);
    }
    let duration = start.elapsed().unwrap();
    println!(
        "Loaded {} records in {}us (height {})",
        tree.len(),
        duration.as_micros(),
        tree.height()
    );

    for &key in &keys {
        let hit = tree.search(&key.to_le_bytes(), &mut out).unwrap();
        assert!(hit.is_some(), "key {} vanished", key);
    }
    println!("Verified {} records by search", keys.len());

    let mut walked = Vec::with_capacity(tree.len());
    tree.walk(|object| walked.push(key_of_record(object)));
    println!(
        "Walked {} records in order: first {}, last {}",
        walked.len(),
        walked.first().unwrap(),
        walked.last().unwrap()
    );

    keys.shuffle(&mut rng);
    for key in keys.drain(..DELETE_COUNT) {
        assert!(tree.remove(&key.to_le_bytes()));
    }
    println!(
        "Deleted {} records, {} remain (height {})",
        DELETE_COUNT,
        tree.len(),
        tree.height()
    );

    drop(tree);
    println!("Teardown notified {} deletions in total", deleted.get());
}
