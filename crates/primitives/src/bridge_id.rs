//! Bridge instance identifier.

use std::fmt;

use alloy_primitives::{hex, B256};
use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

use crate::errors::IdentifierError;

/// Width of the fixed identifier slot in the destination contract's
/// checkpoint layout.
pub const BRIDGE_ID_LEN: usize = 32;

/// Process-wide bridge instance identifier.
///
/// Supplied by configuration and embedded into every checkpoint computed for
/// one bridge instance, so signatures cannot be replayed across instances.
/// The raw value is kept exactly as configured; [`BridgeId::to_fixed`]
/// normalizes it into the contract's fixed slot and enforces the length
/// bound at computation time.
#[derive(Clone, Debug, PartialEq, Eq, Arbitrary, Deserialize, Serialize)]
pub struct BridgeId(Vec<u8>);

impl BridgeId {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Normalizes the identifier into the fixed 32-byte slot:
    /// left-justified, zero-padded on the right.
    pub fn to_fixed(&self) -> Result<B256, IdentifierError> {
        if self.0.len() > BRIDGE_ID_LEN {
            return Err(IdentifierError::TooLong(self.0.len()));
        }
        let mut buf = [0u8; BRIDGE_ID_LEN];
        buf[..self.0.len()].copy_from_slice(&self.0);
        Ok(B256::new(buf))
    }
}

impl From<&str> for BridgeId {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl fmt::Display for BridgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_to_fixed_pads_right() {
        let id = BridgeId::from("foo");
        let fixed = id.to_fixed().expect("3-byte id fits");

        let mut expected = [0u8; 32];
        expected[..3].copy_from_slice(b"foo");
        assert_eq!(fixed, B256::new(expected));
    }

    #[test]
    fn test_exact_width_accepted() {
        let id = BridgeId::new([0xab; 32]);
        assert_eq!(id.to_fixed().expect("32-byte id fits"), B256::new([0xab; 32]));
    }

    #[test]
    fn test_oversized_rejected() {
        let id = BridgeId::new(vec![0u8; 33]);
        assert_eq!(id.to_fixed(), Err(IdentifierError::TooLong(33)));
    }

    proptest! {
        #[test]
        fn test_to_fixed_preserves_prefix(bytes in prop::collection::vec(any::<u8>(), 0..=32)) {
            let fixed = BridgeId::new(bytes.clone()).to_fixed().expect("within bound");
            prop_assert_eq!(&fixed[..bytes.len()], &bytes[..]);
            prop_assert!(fixed[bytes.len()..].iter().all(|&b| b == 0));
        }
    }
}
