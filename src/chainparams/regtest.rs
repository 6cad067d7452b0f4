//! Regression-test network
//!
//! Local only: no seeds, no retargeting, blocks mined on demand. The one
//! profile whose deployment windows may be overridden at setup.

use primitive_types::U256;
use crate::consensus::ConsensusParams;
use crate::error::IntegrityError;
use crate::node::GenesisBuilder;
use super::profile::{hash256, uint256};
use super::{
    Base58Prefixes, CheckpointData, NetworkId, NetworkProfile, GENESIS_BITS, GENESIS_VERSION,
    TESTDUMMY_DEPLOYMENT,
};

const GENESIS_TIME: u32 = 1652164204;
const GENESIS_NONCE: u32 = 739807;
const GENESIS_HASH: &str = "0x0000037f3e0646d8ba9253c1e9706a58124286935c9e3ecf81c80b49a9122e3e";
const GENESIS_MERKLE_ROOT: &str = "0x546d3cccb98b294a40a40425db0efcea131d2e4ff3d00ad9abd6493f0816e169";

pub(crate) fn build() -> Result<NetworkProfile, IntegrityError> {
    let network = NetworkId::Regtest;
    let genesis = GenesisBuilder::reflect(GENESIS_TIME, GENESIS_NONCE, GENESIS_BITS, GENESIS_VERSION, 0).build();
    let genesis_hash = genesis.hash();

    let consensus = ConsensusParams {
        hash_genesis_block: genesis_hash,
        pow_limit: uint256(network, "pow_limit", "0000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        pos_limit: uint256(network, "pos_limit", "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        pos_limit_v2: uint256(network, "pos_limit_v2", "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        target_timespan: 10 * 60,
        target_spacing_v1: 2 * 64,
        target_spacing: 2 * 60,
        protocol_v1_retargeting_fixed_time: 1652164204,
        protocol_v2_time: 1652164205,
        protocol_v3_time: 1652164206,
        last_pow_block: 250,
        stake_timestamp_mask: 0xf,
        coinbase_maturity: 3,
        stake_min_age: 60 * 60,
        majority_enforce_block_upgrade: 51,
        majority_reject_block_outdated: 75,
        majority_window: 100,
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        bip34_height: None,
        bip34_hash: None,
        deployments: [TESTDUMMY_DEPLOYMENT],
        minimum_chain_work: U256::zero(),
        max_reorganization_depth: 50,
        pow_no_retargeting: true,
        pos_no_retargeting: true,
        pow_allow_min_difficulty_blocks: true,
    };

    let profile = NetworkProfile {
        network,
        consensus,
        message_start: [0x3d, 0x80, 0xb5, 0x06],
        default_port: 45454,
        prune_after_height: 100_000,
        genesis,
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![122], // r
            script_address: vec![60],  // R
            secret_key: vec![126],
            ext_public_key: vec![0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: vec![0x04, 0x88, 0xAD, 0xE4],
        },
        cashaddr_prefix: "reetreg",
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        // Only the genesis block is pinned
        checkpoints: CheckpointData::new([(0, genesis_hash)], 0, 0, 0.0),
        mining_requires_peers: false,
        default_consistency_checks: true,
        require_standard: false,
        mine_blocks_on_demand: true,
        testnet_to_be_deprecated_field_rpc: false,
    };

    profile.check_integrity(
        hash256(network, "genesis hash", GENESIS_HASH)?,
        hash256(network, "genesis merkle root", GENESIS_MERKLE_ROOT)?,
    )?;
    Ok(profile)
}
