//! # RandHash VM Wire Format and Policy
//!
//! The RandHash virtual machine gates announcement validity: a
//! deterministic, seed-derived program must execute to the expected
//! result before an announcement is accepted. This crate defines the
//! parts of that machine which are consensus-critical wire format and
//! policy, not execution:
//!
//! - the bit-exact 32-bit instruction codec ([`insn`]),
//! - the generation-policy constants and threshold functions the program
//!   generator consumes ([`conf`]),
//! - the program container and its serialized shape ([`program`]),
//! - the keyed hashing primitives used to seed and checkpoint VM memory
//!   ([`crypto`]).
//!
//! The generator and executor live outside this crate; everything here
//! is a pure function of its inputs and safe to call concurrently.

pub mod conf;
pub mod crypto;
pub mod error;
pub mod insn;
pub mod program;

pub use crypto::{hash_compress, hash_compress64, hash_expand};
pub use error::ProgramError;
pub use insn::Insn;
pub use program::Program;
