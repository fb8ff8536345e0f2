//! Errors during handling/conversion of primitives.

use thiserror::Error;

use crate::bridge_id::BRIDGE_ID_LEN;

/// Error type for bridge identifier normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The configured identifier cannot fit the fixed 32-byte slot the
    /// destination contract reserves for it.
    #[error("bridge identifier is {0} bytes (max {BRIDGE_ID_LEN})")]
    TooLong(usize),
}
