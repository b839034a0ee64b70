//! chain-hashmap: a single-threaded, separately chained hash map with
//! cached entry hashes and a secondary traversal list.
//!
//! Internal Design:
//!
//! Summary
//! - Entries live in a slotmap arena behind generational keys; the
//!   collision chains and the traversal list are arena keys, never
//!   pointers, so unlinking and re-slotting cannot dangle.
//! - A flat slot array heads one chain per slot; an entry's slot is its
//!   cached hash modulo the slot count.
//! - Every entry is simultaneously a member of exactly one chain and one
//!   position in a doubly linked traversal list, for its entire
//!   lifetime. Iteration follows the list; deletion unlinks from both
//!   once the entry is found.
//!
//! Invariants
//! - `len() / slot_count()` stays strictly below 1.0 after every insert;
//!   the slot array doubles inside the insert that would reach the
//!   ceiling, and growth re-slots entries in one pass over the
//!   traversal list.
//! - Each entry stores a precomputed `u64` hash and probing always uses
//!   the stored hash; `K: Hash` is never invoked again for a live entry,
//!   not even during growth.
//! - A probe matches on hash equality *and* `K: Eq`, so colliding keys
//!   stay distinct.
//!
//! Constraints
//! - Single-threaded: `!Send`/`!Sync` by design (no atomics).
//! - Mutating the table while iterating is rejected by the borrow
//!   checker; a debug-only reentrancy check additionally catches
//!   re-entry through user `Eq`/`Hash` code during probes.
//!
//! Notes and non-goals
//! - No thread safety, persistence, or wire formats.
//! - Traversal order is newest-first between growths and unspecified
//!   across them; callers must not rely on it surviving a growth.
//! - Dropping the table releases every surviving entry; `drain` hands
//!   the pairs back for callers that need per-entry cleanup.

mod chain_map;
mod chain_map_proptest;
pub mod hash;
mod reentrancy;

// Public surface
pub use chain_map::{ChainMap, Drain, Iter, Keys, Values, DEFAULT_SLOTS};
