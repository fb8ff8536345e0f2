//! Resolution of native token denominations to destination-chain contracts.

use alloy_primitives::Address;

use crate::{encode::parse_eth_address, errors::CheckpointError};

/// Maps a native asset denomination to its bridge-registered contract on the
/// destination chain.
///
/// Only the contract-call encoder consults this; transfer batches already
/// carry their token contract.
pub trait TokenRegistry {
    fn resolve(&self, denom: &str) -> Result<Address, CheckpointError>;
}

/// Registry for denoms the bridge itself minted, which embed the destination
/// contract directly as `<prefix><hex-address>`.
#[derive(Clone, Debug)]
pub struct PrefixDenomRegistry {
    prefix: String,
}

impl PrefixDenomRegistry {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl TokenRegistry for PrefixDenomRegistry {
    fn resolve(&self, denom: &str) -> Result<Address, CheckpointError> {
        let contract =
            denom
                .strip_prefix(&self.prefix)
                .ok_or_else(|| CheckpointError::AddressParse {
                    value: denom.to_owned(),
                    reason: format!("denom does not start with `{}`", self.prefix),
                })?;
        parse_eth_address(contract)
    }
}
