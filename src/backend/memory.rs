//! Memory accounting model
//!
//! One approximate model applied uniformly to every backend so that estimates
//! are comparable across variants. Figures are not allocator-exact.
//!
//! With `P` = pointer size, `S` = `size_of::<String>()`, `R` =
//! `size_of::<Student>()` and `heap(s)` = capacity of a record's strings:
//!
//! ```text
//! Linear   size_of::<Self>() + capacity * R + Σ heap(s)
//! Keyed    size_of::<Self>() + buckets * P + n * (S + R + 8 + P) + Σ (key + heap(s))
//! Ordered  size_of::<Self>() + n * (S + R + 3P + 1) + Σ (key + heap(s))
//! Indexed  Keyed, plus per index: pairs * (2S + 3P) + Σ (index key + phone)
//! ```

use std::mem::size_of;

use crate::record::Student;

pub const POINTER: usize = size_of::<usize>();

/// Cached hash plus bucket chain link per hashed entry
pub const HASH_ENTRY_OVERHEAD: usize = size_of::<u64>() + POINTER;

/// Parent/left/right links plus a balance flag per tree node
pub const TREE_NODE_OVERHEAD: usize = 3 * POINTER + 1;

/// Per (key, phone) pair in a secondary index
pub const INDEX_ENTRY_OVERHEAD: usize = 2 * size_of::<String>() + 3 * POINTER;

/// Inline plus heap cost of a record stored by value
pub fn record_bytes(student: &Student) -> usize {
    size_of::<Student>() + student.heap_bytes()
}

/// Cost of one keyed entry: the key string plus the record
pub fn keyed_entry_bytes(key: &str, student: &Student, node_overhead: usize) -> usize {
    size_of::<String>() + key.len() + record_bytes(student) + node_overhead
}

/// Bucket array of a hashed table
pub fn bucket_bytes(buckets: usize) -> usize {
    buckets * POINTER
}

/// Cost of one (key, phone) pair in a secondary index
pub fn index_entry_bytes(key: &str, phone: &str) -> usize {
    INDEX_ENTRY_OVERHEAD + key.len() + phone.len()
}
