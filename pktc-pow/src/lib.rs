//! # PacketCrypt Proof-of-Work Arithmetic
//!
//! Consensus-critical difficulty arithmetic for the PacketCrypt mining
//! scheme:
//!
//! - compact (32-bit) difficulty targets and their 256-bit expansions,
//! - the target/work duality over the fixed 2^256 hash space,
//! - the effective block mining target derived from the announcement pool,
//! - announcement aging and the per-hash / min-difficulty sanity checks.
//!
//! Every bit of these computations is consensus-critical: two nodes that
//! disagree on a single rounding step will disagree on chain validity.
//! All functions here are pure, stateless, and bounded-time, and may be
//! called concurrently from any number of threads.
//!
//! Domain-level rejections (ineligible announcement age, target out of
//! range, hash above threshold) are reported in-band as sentinel values
//! (`0xffffffff`, `false`), never as errors. Violating a call-site
//! contract is a bug in the caller and panics.

pub mod compact;
pub mod difficulty;
pub mod util;
pub mod work;

pub use compact::{big_to_compact, compact_to_big};
pub use difficulty::{
    aged_ann_target, effective_target, hash_meets_target, is_ann_min_diff_ok, soft_nonce_max,
    ProtocolVersion, AGED_INVALID, ANN_WAIT_PERIOD, EFFECTIVE_TARGET_CEILING,
};
pub use work::{target_for_work, work_for_target};
