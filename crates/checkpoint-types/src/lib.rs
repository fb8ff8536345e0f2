//! Checkpoint computation for pending outbound bridge operations.
//!
//! A pending operation (signer-set update, transfer batch or contract call)
//! is ABI-encoded into the exact binary layout the destination contract
//! expects and hashed with Keccak-256 into the 32-byte checkpoint that
//! bridge validators sign. Encoding must match the receiving contract's
//! decoding byte-for-byte; any divergence either breaks consensus among
//! honest validators or opens a forgery path.

mod encode;
mod errors;
mod outgoing_tx;
mod registry;

pub use encode::Checkpoint;
pub use errors::CheckpointError;
pub use outgoing_tx::*;
pub use registry::*;
