//! Typed error surface for the public API.

use thiserror::Error;

use crate::codec::DecodeError;
use crate::nfa::{BUDGET, MAX_EDITS};

/// Everything [`crate::Index::build`] or [`crate::Index::search`] can reject.
///
/// There is no "unknown method" variant: [`crate::IndexMethod`] is an enum,
/// so that failure mode is unrepresentable rather than merely checked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("max_edits must be non-negative, got {0}")]
    NegativeMaxEdits(i32),

    #[error(
        "pattern length {pattern_len} plus max_edits {max_edits} exceeds the supported budget of {limit}"
    )]
    BudgetExceeded {
        pattern_len: usize,
        max_edits: i32,
        limit: i32,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("persisted index has schema version {found}, expected {expected}")]
    SchemaMismatch { found: u32, expected: u32 },
}

impl Error {
    pub(crate) fn check_budget(pattern_len: usize, max_edits: i32) -> Result<(), Error> {
        if max_edits > MAX_EDITS || pattern_len as i32 + max_edits > BUDGET {
            return Err(Error::BudgetExceeded {
                pattern_len,
                max_edits,
                limit: BUDGET,
            });
        }
        Ok(())
    }
}
