//! Error types
//!
//! Two classes: integrity failures mean the binary's own constants are
//! inconsistent and startup must stop; network errors come from caller
//! input and can be retried with a different name.

use thiserror::Error;
use crate::chainparams::NetworkId;
use crate::consensus::ParamsError;
use crate::crypto::Hash;

/// The compiled-in parameter set contradicts itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("{network}: genesis hash {computed} does not match expected {expected}")]
    GenesisHashMismatch {
        network: NetworkId,
        computed: Hash,
        expected: Hash,
    },

    #[error("{network}: genesis merkle root {computed} does not match expected {expected}")]
    GenesisMerkleMismatch {
        network: NetworkId,
        computed: Hash,
        expected: Hash,
    },

    #[error("{network}: genesis block {hash} does not satisfy its own target {bits:#010x}")]
    GenesisProofOfWork {
        network: NetworkId,
        hash: Hash,
        bits: u32,
    },

    #[error("{network}: checkpoint at height 0 is {found:?}, expected genesis {genesis}")]
    CheckpointGenesisMismatch {
        network: NetworkId,
        found: Option<Hash>,
        genesis: Hash,
    },

    #[error("{network}: consensus parameter violation: {reason}")]
    InvalidParams {
        network: NetworkId,
        reason: ParamsError,
    },

    #[error("{network}: malformed constant {name}: {value}")]
    MalformedConstant {
        network: NetworkId,
        name: &'static str,
        value: &'static str,
    },
}

/// Bad network choice from the caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("unknown network {0:?}")]
    UnknownNetwork(String),

    #[error("-testnet and -regtest cannot be used together")]
    ConflictingFlags,

    #[error("network already selected as {0}")]
    AlreadySelected(NetworkId),
}
