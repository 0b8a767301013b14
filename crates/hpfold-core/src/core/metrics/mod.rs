//! Geometric measurements over bead sets.
//!
//! - [`gyration`] - Radius of gyration, its joint H/P form, and the extended-chain maximum
//! - [`pairs`] - Brute-force contact and collision counting over unordered bead pairs

pub mod gyration;
pub mod pairs;

use super::models::chain::ParseLabelError;
use super::models::measures::MeasureField;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Length mismatch for {what}: expected {expected}, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Chain length must be greater than zero")]
    EmptyChain,

    #[error("Cannot compute gyration of an empty bead set")]
    EmptyBeadSet,

    #[error(transparent)]
    UnknownLabel(#[from] ParseLabelError),

    #[error("Corrected '{field}' count is negative ({value}); side chains are not adjacent to their backbone")]
    NegativeCount { field: MeasureField, value: i64 },
}

pub(crate) fn ensure_length(
    what: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), InputError> {
    if expected != found {
        return Err(InputError::LengthMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}
