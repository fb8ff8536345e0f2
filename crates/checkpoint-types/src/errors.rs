//! Failure modes of checkpoint computation.
//!
//! Every variant signals malformed or inconsistent input, never a transient
//! fault: retrying with unchanged input cannot succeed. A failure aborts the
//! whole computation; callers must never sign, store or forward a partially
//! computed checkpoint.

use fluxgate_primitives::IdentifierError;
use thiserror::Error;

/// Error type for checkpoint computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckpointError {
    /// The bridge identifier exceeds the contract's fixed 32-byte slot.
    #[error(transparent)]
    IdentifierTooLong(#[from] IdentifierError),

    /// An address field failed to parse as a 20-byte hex value.
    #[error("malformed address `{value}`: {reason}")]
    AddressParse { value: String, reason: String },

    /// The ABI encoder produced a payload the hasher cannot use.
    #[error("abi packing failed: {0}")]
    AbiPack(String),
}
