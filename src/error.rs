//! Error types.
//!
//! Ignored selections (a matched card, or the card already pending) are not
//! errors. What remains are contract violations between the core and its
//! host, surfaced to the caller and never recovered internally.

use thiserror::Error;

use crate::core::SymbolId;

/// Errors emitted by `Session` and `Table` commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("card index {index} out of range for {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors emitted when validating configuration.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("symbol `{0}` appears more than once")]
    DuplicateSymbol(SymbolId),
    #[error("grid must have at least one column")]
    NoColumns,
    #[error("grid spacing must be a finite non-negative number, got {0}")]
    InvalidSpacing(f32),
    #[error("grid top bias must be a finite number, got {0}")]
    InvalidTopBias(f32),
}
