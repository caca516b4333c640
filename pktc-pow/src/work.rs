//! Target/work duality over the fixed 256-bit hash space.
//!
//! A *target* is the largest acceptable hash value; *work* is the expected
//! number of hash attempts needed to land under that target. The two are
//! inverses of one another through the 2^256 hash space, and both
//! directions are integer divisions whose truncation is consensus-critical.

use num_bigint::BigUint;
use num_traits::{CheckedSub, One, Zero};

/// The size of the hash space, 2^256.
fn hash_space() -> BigUint {
    BigUint::one() << 256u32
}

/// Expected number of hash attempts to meet `target`.
///
/// `work = 2^256 / (target + 1)`. A target of zero costs the whole hash
/// space (2^256 attempts); a target at or beyond 2^256 - 1 costs one or
/// zero.
pub fn work_for_target(target: &BigUint) -> BigUint {
    hash_space() / (target + 1u32)
}

/// The target a given amount of work entitles a miner to.
///
/// `target = (2^256 - work) / work`. Zero work returns the maximal target
/// `2^256 - 1` (minimum difficulty); work at or beyond the hash space
/// collapses to target zero, the hardest expressible requirement.
pub fn target_for_work(work: &BigUint) -> BigUint {
    if work.is_zero() {
        return hash_space() - 1u32;
    }
    match hash_space().checked_sub(work) {
        Some(numerator) => numerator / work,
        None => BigUint::zero(),
    }
}
