//! Per-network parameter bundle
//!
//! A profile carries everything one network needs besides the consensus
//! constants: wire magic, ports, address prefixes, seeds, checkpoints and
//! behavior switches. Each profile verifies its own genesis block when it
//! is built.

use primitive_types::U256;
use serde::Serialize;
use crate::consensus::{check_proof_of_work, ConsensusParams};
use crate::crypto::Hash;
use crate::error::IntegrityError;
use crate::primitives::Block;
use super::{CheckpointData, DnsSeed, NetworkId, SeedSpec6};

/// Base58 address and key kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

/// Version bytes prepended before base58check encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
}

/// Everything a node needs to join one network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkProfile {
    pub network: NetworkId,
    pub consensus: ConsensusParams,
    /// Magic bytes opening every P2P message
    pub message_start: [u8; 4],
    pub default_port: u16,
    /// Block files below this height are never pruned
    pub prune_after_height: u64,
    pub genesis: Block,
    pub base58_prefixes: Base58Prefixes,
    /// Human-readable prefix for the cashaddr codec
    pub cashaddr_prefix: &'static str,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<SeedSpec6>,
    pub checkpoints: CheckpointData,

    pub mining_requires_peers: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    /// RPC still reports the deprecated `testnet` field
    pub testnet_to_be_deprecated_field_rpc: bool,
}

impl NetworkProfile {
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        let prefixes = &self.base58_prefixes;
        match kind {
            Base58Type::PubkeyAddress => &prefixes.pubkey_address,
            Base58Type::ScriptAddress => &prefixes.script_address,
            Base58Type::SecretKey => &prefixes.secret_key,
            Base58Type::ExtPublicKey => &prefixes.ext_public_key,
            Base58Type::ExtSecretKey => &prefixes.ext_secret_key,
        }
    }

    pub fn genesis_hash(&self) -> Hash {
        self.consensus.hash_genesis_block
    }

    /// Startup self-check against the pinned genesis values
    ///
    /// Any failure means the compiled-in constants disagree with each
    /// other; the caller must not continue with this profile.
    pub(crate) fn check_integrity(
        &self,
        expected_hash: Hash,
        expected_merkle_root: Hash,
    ) -> Result<(), IntegrityError> {
        let network = self.network;
        let computed = self.genesis.hash();

        if computed != expected_hash || self.consensus.hash_genesis_block != expected_hash {
            return Err(IntegrityError::GenesisHashMismatch {
                network,
                computed,
                expected: expected_hash,
            });
        }

        for merkle_root in [self.genesis.header.merkle_root, self.genesis.compute_merkle_root()] {
            if merkle_root != expected_merkle_root {
                return Err(IntegrityError::GenesisMerkleMismatch {
                    network,
                    computed: merkle_root,
                    expected: expected_merkle_root,
                });
            }
        }

        let bits = self.genesis.header.bits;
        if !check_proof_of_work(&computed, bits, &self.consensus.pow_limit) {
            return Err(IntegrityError::GenesisProofOfWork {
                network,
                hash: computed,
                bits,
            });
        }

        self.consensus
            .validate()
            .map_err(|reason| IntegrityError::InvalidParams { network, reason })?;

        let found = self.checkpoints.get(0).copied();
        if found != Some(computed) {
            return Err(IntegrityError::CheckpointGenesisMismatch {
                network,
                found,
                genesis: computed,
            });
        }

        Ok(())
    }
}

/// Parse a 256-bit hex literal
pub(crate) fn uint256(
    network: NetworkId,
    name: &'static str,
    value: &'static str,
) -> Result<U256, IntegrityError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    U256::from_str_radix(digits, 16).map_err(|_| IntegrityError::MalformedConstant {
        network,
        name,
        value,
    })
}

/// Parse a display-order hash literal
pub(crate) fn hash256(
    network: NetworkId,
    name: &'static str,
    value: &'static str,
) -> Result<Hash, IntegrityError> {
    Hash::from_hex(value).map_err(|_| IntegrityError::MalformedConstant {
        network,
        name,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainparams::mainnet;
    use crate::consensus::ParamsError;

    fn main_profile() -> NetworkProfile {
        mainnet::build().unwrap()
    }

    fn pinned(profile: &NetworkProfile) -> (Hash, Hash) {
        (profile.genesis_hash(), profile.genesis.header.merkle_root)
    }

    #[test]
    fn test_integrity_passes_with_pinned_values() {
        let profile = main_profile();
        let (hash, merkle_root) = pinned(&profile);
        assert_eq!(profile.check_integrity(hash, merkle_root), Ok(()));
    }

    #[test]
    fn test_integrity_rejects_wrong_genesis_hash() {
        let profile = main_profile();
        let (hash, merkle_root) = pinned(&profile);
        assert_eq!(
            profile.check_integrity(Hash::zero(), merkle_root),
            Err(IntegrityError::GenesisHashMismatch {
                network: NetworkId::Main,
                computed: hash,
                expected: Hash::zero(),
            })
        );
    }

    #[test]
    fn test_integrity_rejects_stale_consensus_genesis_hash() {
        let mut profile = main_profile();
        let (hash, merkle_root) = pinned(&profile);
        profile.consensus.hash_genesis_block = Hash::zero();
        assert!(matches!(
            profile.check_integrity(hash, merkle_root),
            Err(IntegrityError::GenesisHashMismatch { .. })
        ));
    }

    #[test]
    fn test_integrity_rejects_wrong_merkle_root() {
        let profile = main_profile();
        let (hash, merkle_root) = pinned(&profile);
        assert_eq!(
            profile.check_integrity(hash, Hash::zero()),
            Err(IntegrityError::GenesisMerkleMismatch {
                network: NetworkId::Main,
                computed: merkle_root,
                expected: Hash::zero(),
            })
        );
    }

    #[test]
    fn test_integrity_rejects_target_above_pow_limit() {
        let mut profile = main_profile();
        let (hash, merkle_root) = pinned(&profile);
        // Genesis bits decode to 0x0ffff0 << 216, well above this limit
        profile.consensus.pow_limit = U256::from(0xffffu64) << 200usize;
        assert_eq!(
            profile.check_integrity(hash, merkle_root),
            Err(IntegrityError::GenesisProofOfWork {
                network: NetworkId::Main,
                hash,
                bits: 0x1e0ffff0,
            })
        );
    }

    #[test]
    fn test_integrity_rejects_invalid_params() {
        let mut profile = main_profile();
        let (hash, merkle_root) = pinned(&profile);
        profile.consensus.coinbase_maturity = 0;
        assert_eq!(
            profile.check_integrity(hash, merkle_root),
            Err(IntegrityError::InvalidParams {
                network: NetworkId::Main,
                reason: ParamsError::ZeroCoinbaseMaturity,
            })
        );
    }

    #[test]
    fn test_integrity_rejects_missing_genesis_checkpoint() {
        let mut profile = main_profile();
        let (hash, merkle_root) = pinned(&profile);
        profile.checkpoints.checkpoints.clear();
        assert_eq!(
            profile.check_integrity(hash, merkle_root),
            Err(IntegrityError::CheckpointGenesisMismatch {
                network: NetworkId::Main,
                found: None,
                genesis: hash,
            })
        );

        profile.checkpoints.checkpoints.insert(0, Hash::zero());
        assert_eq!(
            profile.check_integrity(hash, merkle_root),
            Err(IntegrityError::CheckpointGenesisMismatch {
                network: NetworkId::Main,
                found: Some(Hash::zero()),
                genesis: hash,
            })
        );
    }

    #[test]
    fn test_uint256_literal() {
        let value = uint256(NetworkId::Main, "work", "0x0000000000000000000000000000000000000000000000000000000000100001")
            .unwrap();
        assert_eq!(value, U256::from(0x100001u64));
    }

    #[test]
    fn test_malformed_literal_is_reported() {
        let err = uint256(NetworkId::Test, "pow_limit", "xyz").unwrap_err();
        assert_eq!(
            err,
            IntegrityError::MalformedConstant {
                network: NetworkId::Test,
                name: "pow_limit",
                value: "xyz",
            }
        );
        assert!(hash256(NetworkId::Test, "genesis", "0x1234").is_err());
    }
}
