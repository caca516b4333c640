//! Effective mining targets, announcement aging, and sanity checks.
//!
//! PacketCrypt links two kinds of mining: block miners commit to a pool of
//! announcements, and the difficulty their block hash must meet is derived
//! from the block header target *and* the quality of that pool. Cubing the
//! header work rewards harder block mining disproportionately; dividing by
//! the pool's minimum announcement work and by the announcement count
//! spreads the requirement across the committed announcements.
//!
//! Announcements themselves decay: one that sits unconsumed for longer
//! than the wait period counts for less and less, so easy announcements
//! cannot be hoarded and replayed later.
//!
//! Protocol versions select between two fixed formula families. Dispatch
//! is exhaustive over [`ProtocolVersion`]; the two algorithms are never
//! blended.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::compact::{big_to_compact, compact_to_big, MANTISSA_MASK};
use crate::util::log2_floor;
use crate::work::{target_for_work, work_for_target};

/// Blocks an announcement must wait after inclusion before it is usable.
pub const ANN_WAIT_PERIOD: u32 = 3;

/// Ceiling on the compact form of any permitted minimum difficulty.
pub const EFFECTIVE_TARGET_CEILING: u32 = 0x207fffff;

/// Ceiling on an announcement's declared difficulty under version 1.
pub const ANN_MIN_DIFF_CEILING_V1: u32 = 0x20ffffff;

/// In-band sentinel: an aged announcement target that is unusable, either
/// not yet eligible or decayed past expressibility.
pub const AGED_INVALID: u32 = 0xffffffff;

/// Saturating maximum of the announcement soft-nonce space.
pub const SOFT_NONCE_MAX: u32 = 0x00ffffff;

/// PacketCrypt protocol version.
///
/// Version 2 introduced the normalized effective-work formula and the
/// shift-based announcement aging. Every raw version at or above 2 selects
/// the version-2 behavior, mirroring the `>= 2` fallthrough the network
/// consensus fixed; anything below selects version 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolVersion {
    /// Original formulas: cubic work, division-based aging.
    V1,
    /// Normalized cubic work, announcement count squared, shift-based aging.
    V2,
}

impl ProtocolVersion {
    /// Map a raw wire version to the algorithm family it selects.
    #[inline]
    pub const fn from_raw(version: u32) -> Self {
        if version >= 2 {
            ProtocolVersion::V2
        } else {
            ProtocolVersion::V1
        }
    }
}

/// Compute the effective target a block's hash must meet.
///
/// Combines the block header target, the weakest announcement the miner
/// committed to, and the announcement count. An empty pool (zero count or
/// announcements so easy they carry no work) yields the maximal work
/// requirement, which compresses to target zero: a block without a usable
/// announcement pool cannot be mined.
///
/// The compact result is clamped to [`EFFECTIVE_TARGET_CEILING`].
pub fn effective_target(
    block_header_target: u32,
    min_ann_target: u32,
    ann_count: u64,
    version: ProtocolVersion,
) -> u32 {
    let block_work = work_for_target(&compact_to_big(block_header_target));
    let min_ann_work = work_for_target(&compact_to_big(min_ann_target));

    let effective_work = if min_ann_work.is_zero() || ann_count == 0 {
        (BigUint::one() << 256u32) - 1u32
    } else {
        let mut w = &block_work * &block_work;
        w *= &block_work;
        if version == ProtocolVersion::V2 {
            w >>= 10u32;
        }
        w /= &min_ann_work;
        let divisor = match version {
            ProtocolVersion::V1 => BigUint::from(ann_count),
            ProtocolVersion::V2 => BigUint::from(ann_count) * ann_count,
        };
        w / divisor
    };

    let out = big_to_compact(&target_for_work(&effective_work));
    if out > EFFECTIVE_TARGET_CEILING {
        EFFECTIVE_TARGET_CEILING
    } else {
        out
    }
}

/// Age an announcement's target by the number of blocks it has waited.
///
/// Below [`ANN_WAIT_PERIOD`] the announcement is not yet usable and the
/// result is [`AGED_INVALID`]; at exactly the wait period the target is
/// unchanged. Past it, version 1 divides the announcement's work by the
/// excess age and version 2 left-shifts the target by it; either way an
/// old announcement is credited with less and less work until it decays
/// out of the representable range and becomes [`AGED_INVALID`].
pub fn aged_ann_target(ann_target: u32, age_blocks: u32, version: ProtocolVersion) -> u32 {
    if age_blocks < ANN_WAIT_PERIOD {
        return AGED_INVALID;
    }
    if age_blocks == ANN_WAIT_PERIOD {
        return ann_target;
    }
    let excess = age_blocks - ANN_WAIT_PERIOD;

    match version {
        ProtocolVersion::V1 => {
            let work = work_for_target(&compact_to_big(ann_target)) / excess;
            let out = big_to_compact(&target_for_work(&work));
            if out > EFFECTIVE_TARGET_CEILING {
                AGED_INVALID
            } else {
                out
            }
        }
        ProtocolVersion::V2 => {
            let target = compact_to_big(ann_target) << excess;
            if target.bits() > 255 {
                AGED_INVALID
            } else {
                big_to_compact(&target)
            }
        }
    }
}

/// Check a hash against a compact target.
///
/// The hash travels least-significant-byte first; it is reversed and read
/// as a big-endian integer, and passes when it does not exceed the
/// expanded target.
pub fn hash_meets_target(hash: &[u8; 32], target: u32) -> bool {
    let hash_int = BigUint::from_bytes_be(&crate::util::reverse32(*hash));
    compact_to_big(target) >= hash_int
}

/// Validate a miner-declared announcement minimum difficulty.
///
/// Rejects degenerate encodings (zero, sign bit) and values that would
/// destabilize the effective-target division: version 2 additionally
/// requires that the announcement's work is strictly inside the open
/// interval (0, 2^256).
pub fn is_ann_min_diff_ok(target: u32, version: ProtocolVersion) -> bool {
    match version {
        ProtocolVersion::V1 => target != 0 && target <= ANN_MIN_DIFF_CEILING_V1,
        ProtocolVersion::V2 => {
            if target == 0 || target > EFFECTIVE_TARGET_CEILING {
                return false;
            }
            let expanded = compact_to_big(target);
            if expanded.is_zero() {
                return false;
            }
            let work = work_for_target(&expanded);
            !work.is_zero() && work < (BigUint::one() << 256u32)
        }
    }
}

/// Maximum soft-nonce value an announcement miner may search under the
/// given target.
///
/// The usable bit count follows the target's mantissa and exponent:
/// `bits = 22 - log2floor(mantissa) + (0x20 - exponent) * 8 + 10`. At 24
/// bits or more the full [`SOFT_NONCE_MAX`] space is available; below
/// that the space shrinks by the shortfall.
pub fn soft_nonce_max(target: u32) -> u32 {
    let mantissa = (target & MANTISSA_MASK) as u64;
    let exponent = (target >> 24) as i64;
    let bits = 22 - log2_floor(mantissa) as i64 + (0x20 - exponent) * 8 + 10;
    if bits >= 24 {
        SOFT_NONCE_MAX
    } else {
        let shift = (24 - bits) as u64;
        if shift >= 32 {
            0
        } else {
            SOFT_NONCE_MAX >> shift
        }
    }
}
