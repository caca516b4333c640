//! # Program Container
//!
//! A generated program is an ordered sequence of instruction words;
//! ordering is significant (sequential execution with jumps). On the
//! wire a program is nothing but its words, little-endian, back to back.

use serde::{Deserialize, Serialize};

use crate::conf;
use crate::error::ProgramError;
use crate::insn::Insn;

/// An ordered sequence of RandHash instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    insns: Vec<Insn>,
}

impl Program {
    /// Wrap a sequence of instructions.
    pub fn new(insns: Vec<Insn>) -> Self {
        Self { insns }
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.insns.len()
    }

    /// Whether the program is empty.
    pub fn is_empty(&self) -> bool {
        self.insns.is_empty()
    }

    /// The instructions in execution order.
    pub fn insns(&self) -> &[Insn] {
        &self.insns
    }

    /// Serialize to the wire shape: contiguous little-endian words.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.insns.len() * 4);
        for insn in &self.insns {
            bytes.extend_from_slice(&insn.word().to_le_bytes());
        }
        bytes
    }

    /// Deserialize from the wire shape.
    ///
    /// # Panics
    ///
    /// If the byte length is not a multiple of 4. A partial word cannot
    /// come from a correct caller.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        assert!(
            bytes.len() % 4 == 0,
            "program byte length {} is not a multiple of 4",
            bytes.len()
        );
        let insns = bytes
            .chunks_exact(4)
            .map(|c| Insn(u32::from_le_bytes([c[0], c[1], c[2], c[3]])))
            .collect();
        Self { insns }
    }

    /// Check the program against the generation-policy size bounds.
    pub fn validate(&self) -> Result<(), ProgramError> {
        let count = self.insns.len();
        if count > conf::MAX_INSNS {
            tracing::debug!(count, "generated program exceeds the instruction ceiling");
            return Err(ProgramError::TooManyInstructions { count });
        }
        if count < conf::MIN_INSNS {
            tracing::debug!(count, "generated program is below the instruction floor");
            return Err(ProgramError::TooFewInstructions { count });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Insn;
    type IntoIter = std::slice::Iter<'a, Insn>;

    fn into_iter(self) -> Self::IntoIter {
        self.insns.iter()
    }
}
