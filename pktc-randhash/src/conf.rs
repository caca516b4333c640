//! # Program-Generation Policy
//!
//! Named constants and pure policy functions consumed by the external
//! program generator. None of this carries state or logic of its own,
//! but every value is consensus-critical: a generator fed different
//! thresholds emits different programs for the same seed, and the
//! network silently forks.
//!
//! Values are fixed constants of the protocol, written out literally and
//! never derived.

/// Announcements hashed per block mining cycle.
pub const NUM_ANNS: usize = 4;

/// RandHash program executions per announcement hashing cycle.
pub const RANDHASH_CYCLES: usize = 4;

/// Memo-hash rounds per announcement hashing cycle.
pub const MEMOHASH_CYCLES: usize = 2;

/// Bytes of seed input a program run consumes.
pub const INPUT_LEN: usize = 32;

/// VM memory size in words.
pub const MEMORY_SZ: usize = 256;

/// Minimum operations a valid execution may perform.
pub const MIN_OPS: u32 = 0;

/// Maximum operations a valid execution may perform.
pub const MAX_OPS: u32 = 20_000;

/// Minimum instructions in a valid generated program.
pub const MIN_INSNS: usize = 0;

/// Maximum instructions in a valid generated program.
pub const MAX_INSNS: usize = 2048;

/// Budget the generator starts with; emitting instructions spends it.
pub const INITIAL_BUDGET: i32 = 20_000;

/// Budget cost of a memory access instruction.
pub const MEMORY_COST: i32 = 20;

/// Budget cost of an input access instruction.
pub const INPUT_COST: i32 = 2;

/// Budget cost of a branch instruction.
pub const BRANCH_COST: i32 = 50;

/// One-in-N chance the generator emits a random branch.
pub const RANDOM_BRANCH_LIKELYHOOD: u32 = 2;

/// One-in-N chance a variable is picked from a higher scope.
pub const HIGHER_SCOPE_LIKELYHOOD: u32 = 4;

/// One-in-N chance an existing variable is reused.
pub const VAR_REUSE_LIKELYHOOD: u32 = 8;

/// One-in-N chance an operand is an immediate.
pub const IMMEDIATE_LIKELYHOOD: u32 = 4;

/// Whether a raw random value tells the generator to open a loop.
#[inline]
pub const fn should_loop(rand: u32) -> bool {
    (rand % 32) < 23
}

/// Whether a raw random value tells the generator to emit a branch.
///
/// The threshold tightens as the program grows, so long programs branch
/// less and stay within the op budget.
#[inline]
pub const fn should_branch(rand: u32, insn_count: usize) -> bool {
    (rand % 64) as usize + (insn_count * 25 / MAX_INSNS) < 50
}

/// Minimum loop cycles at a given scope depth.
#[inline]
pub const fn loop_min_cycles(scope_depth: u32) -> u32 {
    scope_depth * 2 + 2
}

/// Maximum loop cycles at a given scope depth.
#[inline]
pub const fn loop_max_cycles(scope_depth: u32) -> u32 {
    loop_min_cycles(scope_depth) + 5
}

/// Budget available inside a conditional sub-scope.
#[inline]
pub const fn if_body_budget(budget: i32, _scopes: u32) -> i32 {
    budget * 7 / 32
}
