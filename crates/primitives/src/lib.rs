//! Primitive types shared across the bridge crates.

pub mod bridge_id;
pub mod errors;

pub use bridge_id::{BridgeId, BRIDGE_ID_LEN};
pub use errors::IdentifierError;
