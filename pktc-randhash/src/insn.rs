//! # Instruction Encoding
//!
//! RandHash instructions are 32-bit words whose shape is self-describing:
//! fixed bits inside the word, not an external tag, decide how the rest
//! of it reads. Four shapes share the low opcode byte:
//!
//! ```text
//! normal:  [  regb:9  ][x][x][  rega:9  ][ op:8 ]
//! imm:     [   imm:12    ][P][1][  rega:9  ][ op:8 ]   bit 18 set
//! jump:    [          offset:24          ][ op:8 ]
//! memory:  [    base:15    ][step:4][carry:4][ op:8 ]
//! ```
//!
//! Decoding is a pure function of the word; no instruction carries state
//! from its predecessors. The word is kept wrapped ([`Insn`]) with named
//! accessors instead of being unpacked into an enum: bits outside a
//! shape's fields may legitimately be set, and eager unpacking would
//! misread them.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Field positions and masks
// ============================================================================

/// Opcode mask (low 8 bits, shared by every shape).
pub const OP_MASK: u32 = 0xff;

/// First register field: bits 9-17 (9 bits).
pub const REGA_SHIFT: u32 = 9;

/// Second register field: bits 20-28 (9 bits).
pub const REGB_SHIFT: u32 = 20;

/// Register field mask (9 bits).
pub const REG_MASK: u32 = 0x1ff;

/// Immediate-shape marker bit.
pub const HAS_IMM_BIT: u32 = 18;

/// Pattern-immediate marker bit (only meaningful when bit 18 is set).
pub const PATTERN_IMM_BIT: u32 = 19;

/// Raw and pattern immediates live in the top 12 bits.
pub const IMM_SHIFT: u32 = 20;

/// Jump displacement: bits 8-31 (24 bits).
pub const JUMP_SHIFT: u32 = 8;

/// Memory base field: bits 17-31 (15 bits).
pub const MEMORY_BASE_SHIFT: u32 = 17;

/// Memory step field: bits 13-16 (4 bits).
pub const MEMORY_STEP_SHIFT: u32 = 13;

/// Memory carry field: bits 9-12 (4 bits).
pub const MEMORY_CARRY_SHIFT: u32 = 9;

/// Memory step/carry field mask (4 bits).
pub const NIBBLE_MASK: u32 = 0xf;

/// A single RandHash instruction word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insn(pub u32);

impl fmt::Debug for Insn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Insn")
            .field(&format_args!("{:#010x}", self.0))
            .finish()
    }
}

impl Insn {
    /// The raw 32-bit word.
    #[inline]
    pub const fn word(self) -> u32 {
        self.0
    }

    /// Opcode (low 8 bits).
    #[inline]
    pub const fn op(self) -> u8 {
        (self.0 & OP_MASK) as u8
    }

    /// First register index (normal shape).
    #[inline]
    pub const fn rega(self) -> u32 {
        (self.0 >> REGA_SHIFT) & REG_MASK
    }

    /// Second register index (normal shape).
    #[inline]
    pub const fn regb(self) -> u32 {
        (self.0 >> REGB_SHIFT) & REG_MASK
    }

    /// Whether this word carries an immediate (loop/branch/input class).
    #[inline]
    pub const fn has_imm(self) -> bool {
        self.0 & (1 << HAS_IMM_BIT) != 0
    }

    /// Whether the immediate uses the compressed pattern encoding.
    #[inline]
    pub const fn is_pattern_imm(self) -> bool {
        self.0 & (1 << PATTERN_IMM_BIT) != 0
    }

    /// Unconditional-jump displacement (24 bits).
    #[inline]
    pub const fn jump_offset(self) -> u32 {
        self.0 >> JUMP_SHIFT
    }

    /// Memory-shape base field (15 bits, unmasked top of the word).
    #[inline]
    pub const fn memory_base(self) -> u32 {
        self.0 >> MEMORY_BASE_SHIFT
    }

    /// Memory-shape step field.
    #[inline]
    pub const fn memory_step(self) -> u32 {
        (self.0 >> MEMORY_STEP_SHIFT) & NIBBLE_MASK
    }

    /// Memory-shape carry field.
    #[inline]
    pub const fn memory_carry(self) -> u32 {
        (self.0 >> MEMORY_CARRY_SHIFT) & NIBBLE_MASK
    }

    /// Rewrite the 4 carry bits in place, preserving the rest of the word.
    #[inline]
    pub const fn with_memory_carry(self, carry: u32) -> Insn {
        Insn(
            (self.0 & !(NIBBLE_MASK << MEMORY_CARRY_SHIFT))
                | ((carry & NIBBLE_MASK) << MEMORY_CARRY_SHIFT),
        )
    }

    /// The 64-bit immediate value of this word.
    ///
    /// With bit 19 clear the top 12 bits are an arithmetic-shifted signed
    /// literal. With bit 19 set they are a compressed pattern:
    ///
    /// ```text
    ///   1 1
    ///   1 0 9 8 7 6 5 4 3 2 1 0
    ///  +-+-+-+-+-+-+-+-+-+-+-+-+
    ///  |S|I|    B    |    A    |
    ///  +-+-+-+-+-+-+-+-+-+-+-+-+
    /// ```
    ///
    /// which synthesizes `((I << 63) - 1) ^ (1 << B) ^ (1 << A)` and then
    /// ORs `S` into bit 63: structured runs of ones and zeros with up to
    /// two bits toggled, far cheaper than storing a 64-bit literal.
    #[inline]
    pub const fn imm(self) -> i64 {
        if self.is_pattern_imm() {
            let f = self.0 >> IMM_SHIFT;
            let a = f & 0x1f;
            let b = (f >> 5) & 0x1f;
            let i = (f >> 10) & 1;
            let s = (f >> 11) & 1;
            let mut out = ((i as u64) << 63).wrapping_sub(1);
            out ^= 1u64 << b;
            out ^= 1u64 << a;
            out |= (s as u64) << 63;
            out as i64
        } else {
            ((self.0 as i32) >> IMM_SHIFT) as i64
        }
    }

    /// Low 32 bits of the immediate.
    #[inline]
    pub const fn imm_lo(self) -> i32 {
        self.imm() as i32
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode a normal two-register operation.
#[inline]
pub const fn encode_op(op: u8, rega: u32, regb: u32) -> Insn {
    Insn((op as u32) | ((rega & REG_MASK) << REGA_SHIFT) | ((regb & REG_MASK) << REGB_SHIFT))
}

/// Encode an operation with a raw 12-bit signed immediate.
#[inline]
pub const fn encode_imm_op(op: u8, rega: u32, imm: i32) -> Insn {
    Insn(
        (op as u32)
            | ((rega & REG_MASK) << REGA_SHIFT)
            | (1 << HAS_IMM_BIT)
            | (((imm as u32) & 0xfff) << IMM_SHIFT),
    )
}

/// Encode an operation with a compressed pattern immediate.
#[inline]
pub const fn encode_pattern_op(op: u8, rega: u32, a: u32, b: u32, i: u32, s: u32) -> Insn {
    let fields = (a & 0x1f) | ((b & 0x1f) << 5) | ((i & 1) << 10) | ((s & 1) << 11);
    Insn(
        (op as u32)
            | ((rega & REG_MASK) << REGA_SHIFT)
            | (1 << HAS_IMM_BIT)
            | (1 << PATTERN_IMM_BIT)
            | (fields << IMM_SHIFT),
    )
}

/// Encode an unconditional jump with a 24-bit displacement.
#[inline]
pub const fn encode_jump(op: u8, offset: u32) -> Insn {
    Insn((op as u32) | ((offset & 0xffffff) << JUMP_SHIFT))
}

/// Encode a memory operation.
#[inline]
pub const fn encode_memory(op: u8, base: u32, step: u32, carry: u32) -> Insn {
    Insn(
        (op as u32)
            | ((carry & NIBBLE_MASK) << MEMORY_CARRY_SHIFT)
            | ((step & NIBBLE_MASK) << MEMORY_STEP_SHIFT)
            | ((base & 0x7fff) << MEMORY_BASE_SHIFT),
    )
}
