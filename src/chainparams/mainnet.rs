//! Main network

use primitive_types::U256;
use crate::consensus::ConsensusParams;
use crate::error::IntegrityError;
use crate::node::GenesisBuilder;
use super::profile::{hash256, uint256};
use super::seeds::{MAIN_DNS_SEEDS, MAIN_FIXED_SEEDS};
use super::{
    Base58Prefixes, CheckpointData, NetworkId, NetworkProfile, GENESIS_BITS, GENESIS_VERSION,
    TESTDUMMY_DEPLOYMENT,
};

const GENESIS_TIME: u32 = 1652163942;
const GENESIS_NONCE: u32 = 482542;
const GENESIS_HASH: &str = "0x000006c931fb75cf37a078be1496a80183516ec543dc0f09d45a5e4b434d1fe7";
const GENESIS_MERKLE_ROOT: &str = "0x08482a9dc270b518eb69df31cad9b990511cdcafbc3aa4745bc9ab11b22716a9";

pub(crate) fn build() -> Result<NetworkProfile, IntegrityError> {
    let network = NetworkId::Main;
    let genesis = GenesisBuilder::reflect(GENESIS_TIME, GENESIS_NONCE, GENESIS_BITS, GENESIS_VERSION, 0).build();

    let consensus = ConsensusParams {
        hash_genesis_block: genesis.hash(),
        pow_limit: uint256(network, "pow_limit", "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        pos_limit: uint256(network, "pos_limit", "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        pos_limit_v2: uint256(network, "pos_limit_v2", "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        target_timespan: 10 * 60,
        target_spacing_v1: 2 * 60,
        target_spacing: 2 * 60,
        protocol_v1_retargeting_fixed_time: 1652163942,
        protocol_v2_time: 1652163943,
        protocol_v3_time: 1652163944,
        last_pow_block: 800_000,
        stake_timestamp_mask: 0xf,
        coinbase_maturity: 50,
        stake_min_age: 24 * 60 * 60,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1000,
        rule_change_activation_threshold: 5,
        miner_confirmation_window: 5,
        bip34_height: None,
        bip34_hash: None,
        deployments: [TESTDUMMY_DEPLOYMENT],
        minimum_chain_work: U256::from(0x100001u64),
        max_reorganization_depth: 500,
        pow_no_retargeting: false,
        pos_no_retargeting: false,
        pow_allow_min_difficulty_blocks: false,
    };

    let profile = NetworkProfile {
        network,
        consensus,
        message_start: [0xb5, 0x3d, 0x80, 0x00],
        default_port: 54647,
        prune_after_height: 100_000,
        genesis,
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![60], // R
            script_address: vec![28], // C
            secret_key: vec![52],
            ext_public_key: vec![0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: vec![0x04, 0x88, 0xAD, 0xE4],
        },
        cashaddr_prefix: "Reflect",
        dns_seeds: MAIN_DNS_SEEDS.to_vec(),
        fixed_seeds: MAIN_FIXED_SEEDS.to_vec(),
        checkpoints: CheckpointData::new(
            [(0, hash256(network, "checkpoint 0", GENESIS_HASH)?)],
            1652163942,
            0,
            0.0,
        ),
        mining_requires_peers: true,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        testnet_to_be_deprecated_field_rpc: false,
    };

    profile.check_integrity(
        hash256(network, "genesis hash", GENESIS_HASH)?,
        hash256(network, "genesis merkle root", GENESIS_MERKLE_ROOT)?,
    )?;
    Ok(profile)
}
