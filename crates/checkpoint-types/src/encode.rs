//! ABI encoding and hashing of outbound operations into checkpoints.
//!
//! The byte layout produced here must match the destination contract's
//! decoding byte-for-byte: tuple field order, fixed-width padding and
//! dynamic-array headers all feed the hash validators sign.

use std::fmt;

use alloy_primitives::{keccak256, Address, Bytes, B256, U256};
use alloy_sol_types::{sol, SolCall};
use fluxgate_primitives::BridgeId;

use crate::{
    errors::CheckpointError,
    outgoing_tx::{BatchTx, ContractCallTx, SignerSetTx},
    registry::TokenRegistry,
};

// Checkpoint schemas, declared once per variant so drift from the
// destination contract is a compile-time mismatch rather than a runtime
// packing failure. Function names double as the salt tags, which keeps the
// three selectors pairwise distinct.
sol! {
    function checkpoint(
        bytes32 bridgeId,
        bytes32 methodName,
        uint256 signerSetNonce,
        address[] signers,
        uint256[] powers
    );

    function transactionBatch(
        bytes32 bridgeId,
        bytes32 methodName,
        uint256[] amounts,
        address[] destinations,
        uint256[] fees,
        uint256 batchNonce,
        address tokenContract,
        uint256 batchTimeout
    );

    function logicCall(
        bytes32 bridgeId,
        bytes32 methodName,
        uint256[] transferAmounts,
        address[] transferTokenContracts,
        uint256[] feeAmounts,
        address[] feeTokenContracts,
        address logicContractAddress,
        bytes payload,
        uint256 timeout,
        bytes32 invalidationScope,
        uint256 invalidationNonce
    );
}

/// Tag strings the destination contract uses to salt each variant's hash,
/// domain-separating checkpoints even when all other fields coincide.
const SIGNER_SET_SALT: &str = "checkpoint";
const BATCH_SALT: &str = "transactionBatch";
const CONTRACT_CALL_SALT: &str = "logicCall";

/// Selector width of the ABI encoding convention in use. The encoder always
/// prefixes its output with this many bytes; [`hash_packed`] discards
/// exactly as many. Changing the tag names or schemas does not change this
/// width, changing the encoding convention would.
const SELECTOR_LEN: usize = 4;

/// 32-byte Keccak-256 digest committing to one pending outbound operation;
/// the value validators sign.
///
/// A checkpoint has no identity of its own: it is always re-derived from the
/// operation and the bridge identifier, never stored as a mutable entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Checkpoint(B256);

impl Checkpoint {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0 .0
    }

    pub fn into_inner(self) -> B256 {
        self.0
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Expands a constant tag into its 32-byte form: left-justified, zero-padded
/// on the right, mirroring the destination contract's internal dispatch.
/// Tags are compile-time constants well under 32 bytes.
fn method_salt(tag: &str) -> B256 {
    debug_assert!(tag.len() <= 32, "salt tag must fit the 32-byte slot");
    let mut buf = [0u8; 32];
    buf[..tag.len()].copy_from_slice(tag.as_bytes());
    B256::new(buf)
}

/// Parses the external hex form of a destination-chain address, with or
/// without the `0x` prefix.
pub(crate) fn parse_eth_address(value: &str) -> Result<Address, CheckpointError> {
    value
        .parse::<Address>()
        .map_err(|err| CheckpointError::AddressParse {
            value: value.to_owned(),
            reason: err.to_string(),
        })
}

/// Hashes an ABI-packed payload into a checkpoint, discarding the leading
/// function selector.
///
/// The destination contract hashes `abi.encode` output, which carries no
/// selector; the selector the encoder prepends reflects only the constant
/// tag name and is never consumed downstream.
fn hash_packed(packed: &[u8]) -> Result<Checkpoint, CheckpointError> {
    match packed.get(SELECTOR_LEN..) {
        Some(body) if !body.is_empty() => Ok(Checkpoint(keccak256(body))),
        _ => Err(CheckpointError::AbiPack(format!(
            "packed payload is {} bytes, expected a selector followed by the encoded tuple",
            packed.len()
        ))),
    }
}

impl SignerSetTx {
    /// Computes the checkpoint for a signer-set update.
    ///
    /// Signers are split into two parallel arrays (addresses, powers) in
    /// signer order, matching the destination contract's verification loop.
    pub fn checkpoint(&self, bridge_id: &BridgeId) -> Result<Checkpoint, CheckpointError> {
        let mut signers = Vec::with_capacity(self.signers.len());
        let mut powers = Vec::with_capacity(self.signers.len());
        for signer in &self.signers {
            signers.push(parse_eth_address(&signer.eth_address)?);
            powers.push(U256::from(signer.power));
        }

        let call = checkpointCall {
            bridgeId: bridge_id.to_fixed()?,
            methodName: method_salt(SIGNER_SET_SALT),
            signerSetNonce: U256::from(self.nonce),
            signers,
            powers,
        };
        hash_packed(&call.abi_encode())
    }
}

impl BatchTx {
    /// Computes the checkpoint for an outbound transfer batch.
    ///
    /// Transfers are flattened into three parallel arrays (amounts,
    /// destinations, fees) preserving batch order; reordering transfers
    /// changes the checkpoint.
    pub fn checkpoint(&self, bridge_id: &BridgeId) -> Result<Checkpoint, CheckpointError> {
        let mut amounts = Vec::with_capacity(self.transfers.len());
        let mut destinations = Vec::with_capacity(self.transfers.len());
        let mut fees = Vec::with_capacity(self.transfers.len());
        for transfer in &self.transfers {
            amounts.push(transfer.amount);
            destinations.push(parse_eth_address(&transfer.recipient)?);
            fees.push(transfer.fee);
        }

        let call = transactionBatchCall {
            bridgeId: bridge_id.to_fixed()?,
            methodName: method_salt(BATCH_SALT),
            amounts,
            destinations,
            fees,
            batchNonce: U256::from(self.nonce),
            tokenContract: parse_eth_address(&self.token_contract)?,
            batchTimeout: U256::from(self.timeout),
        };
        hash_packed(&call.abi_encode())
    }
}

impl ContractCallTx {
    /// Computes the checkpoint for an arbitrary contract call.
    ///
    /// Token and fee coins resolve to their destination-chain contracts
    /// through `registry`, preserving coin order. The opaque payload and the
    /// invalidation scope are copied into the encoder's own buffers.
    pub fn checkpoint(
        &self,
        bridge_id: &BridgeId,
        registry: &dyn TokenRegistry,
    ) -> Result<Checkpoint, CheckpointError> {
        let mut transfer_amounts = Vec::with_capacity(self.tokens.len());
        let mut transfer_contracts = Vec::with_capacity(self.tokens.len());
        for coin in &self.tokens {
            transfer_amounts.push(coin.amount);
            transfer_contracts.push(registry.resolve(&coin.denom)?);
        }

        let mut fee_amounts = Vec::with_capacity(self.fees.len());
        let mut fee_contracts = Vec::with_capacity(self.fees.len());
        for coin in &self.fees {
            fee_amounts.push(coin.amount);
            fee_contracts.push(registry.resolve(&coin.denom)?);
        }

        let call = logicCallCall {
            bridgeId: bridge_id.to_fixed()?,
            methodName: method_salt(CONTRACT_CALL_SALT),
            transferAmounts: transfer_amounts,
            transferTokenContracts: transfer_contracts,
            feeAmounts: fee_amounts,
            feeTokenContracts: fee_contracts,
            logicContractAddress: parse_eth_address(&self.address)?,
            payload: Bytes::from(self.payload.clone()),
            timeout: U256::from(self.timeout),
            invalidationScope: self.invalidation_scope,
            invalidationNonce: U256::from(self.invalidation_nonce),
        };
        hash_packed(&call.abi_encode())
    }
}
