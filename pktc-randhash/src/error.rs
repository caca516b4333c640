//! # Error Types

use thiserror::Error;

/// Validation failures for a generated program.
///
/// Call-site contract violations (a byte stream that is not a whole
/// number of words, undersized hash buffers) panic instead; these errors
/// cover domain validation of otherwise well-formed input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProgramError {
    #[error("program has {count} instructions, maximum is 2048")]
    TooManyInstructions { count: usize },

    #[error("program has {count} instructions, below the required minimum")]
    TooFewInstructions { count: usize },
}
