//! Pending outbound bridge operations and checkpoint dispatch.

use alloy_primitives::{B256, U256};
use arbitrary::Arbitrary;
use fluxgate_primitives::BridgeId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{encode::Checkpoint, errors::CheckpointError, registry::TokenRegistry};

/// A member of the bridge signer set as recognized by the destination
/// contract.
#[derive(Clone, Debug, PartialEq, Eq, Arbitrary, Deserialize, Serialize)]
pub struct Signer {
    /// Destination-chain address in its external hex form, parsed at
    /// encoding time.
    pub eth_address: String,

    /// Relative voting power of this signer.
    pub power: u64,
}

/// Pending update of the signer set recognized by the destination contract.
#[derive(Clone, Debug, PartialEq, Eq, Arbitrary, Deserialize, Serialize)]
pub struct SignerSetTx {
    /// Monotonically increasing nonce distinguishing successive signer-set
    /// checkpoints.
    pub nonce: u64,

    /// New signer set in consensus order. Reordering changes the checkpoint.
    pub signers: Vec<Signer>,
}

/// A single outbound transfer within a batch.
#[derive(Clone, Debug, PartialEq, Eq, Arbitrary, Deserialize, Serialize)]
pub struct TransferTx {
    /// Destination-chain recipient in its external hex form.
    pub recipient: String,

    /// Token amount delivered to the recipient.
    pub amount: U256,

    /// Fee paid to the relayer, in the same token.
    pub fee: U256,
}

/// Pending batch of outbound transfers of one token, executed atomically on
/// the destination chain.
#[derive(Clone, Debug, PartialEq, Eq, Arbitrary, Deserialize, Serialize)]
pub struct BatchTx {
    /// Monotonically increasing nonce distinguishing successive batch
    /// checkpoints.
    pub nonce: u64,

    /// Destination-chain height after which the batch can no longer execute.
    pub timeout: u64,

    /// Transfers in batch order. Reordering changes the checkpoint.
    pub transfers: Vec<TransferTx>,

    /// Contract of the token all transfers in this batch move.
    pub token_contract: String,
}

/// A native asset amount, resolved to its destination-chain contract through
/// a [`TokenRegistry`].
#[derive(Clone, Debug, PartialEq, Eq, Arbitrary, Deserialize, Serialize)]
pub struct Coin {
    pub denom: String,
    pub amount: U256,
}

/// Pending arbitrary contract invocation requested through the bridge.
#[derive(Clone, Debug, PartialEq, Eq, Arbitrary, Deserialize, Serialize)]
pub struct ContractCallTx {
    /// Nonce within the invalidation scope; a newer nonce supersedes all
    /// pending calls sharing the scope.
    pub invalidation_nonce: u64,

    /// Identifies which prior pending calls this call supersedes, preventing
    /// stale-call replay.
    pub invalidation_scope: B256,

    /// Target contract on the destination chain, in its external hex form.
    pub address: String,

    /// Opaque calldata forwarded to the target contract.
    pub payload: Vec<u8>,

    /// Destination-chain height after which the call can no longer execute.
    pub timeout: u64,

    /// Tokens transferred to the target contract before invocation.
    pub tokens: Vec<Coin>,

    /// Fees paid to the relayer.
    pub fees: Vec<Coin>,
}

/// A pending outbound operation awaiting validator signatures.
///
/// Closed set of variants; consumers match exhaustively, so growing the set
/// is a compile-time event everywhere it matters.
#[derive(Clone, Debug, PartialEq, Eq, Arbitrary, Deserialize, Serialize)]
pub enum OutgoingTx {
    SignerSet(SignerSetTx),
    Batch(BatchTx),
    ContractCall(ContractCallTx),
}

impl OutgoingTx {
    /// Computes the checkpoint validators sign to authorize this operation
    /// on the destination chain.
    ///
    /// Stateless and repeatable: identical inputs always produce the
    /// identical checkpoint. Only the contract-call variant consults
    /// `registry`.
    pub fn checkpoint(
        &self,
        bridge_id: &BridgeId,
        registry: &dyn TokenRegistry,
    ) -> Result<Checkpoint, CheckpointError> {
        let checkpoint = match self {
            Self::SignerSet(tx) => tx.checkpoint(bridge_id)?,
            Self::Batch(tx) => tx.checkpoint(bridge_id)?,
            Self::ContractCall(tx) => tx.checkpoint(bridge_id, registry)?,
        };
        debug!(variant = self.variant_name(), %checkpoint, "computed checkpoint");
        Ok(checkpoint)
    }

    /// Name of the concrete variant, for logging.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::SignerSet(_) => "signer_set",
            Self::Batch(_) => "batch",
            Self::ContractCall(_) => "contract_call",
        }
    }
}

/// Store-key derivation for pending operations.
///
/// The key layout belongs to the storage layer, which implements this for
/// each variant; checkpoint computation itself owns no persisted state.
pub trait StoreIndexed {
    /// Key under which the operation is indexed in the outgoing pool.
    fn store_index(&self) -> Vec<u8>;
}
