//! Public test network

use primitive_types::U256;
use crate::consensus::ConsensusParams;
use crate::error::IntegrityError;
use crate::node::GenesisBuilder;
use super::profile::{hash256, uint256};
use super::seeds::TEST_FIXED_SEEDS;
use super::{
    Base58Prefixes, CheckpointData, NetworkId, NetworkProfile, GENESIS_BITS, GENESIS_VERSION,
    TESTDUMMY_DEPLOYMENT,
};

const GENESIS_TIME: u32 = 1652164067;
const GENESIS_NONCE: u32 = 3388822;
const GENESIS_HASH: &str = "0x000001b686156ecd79931c15d91340bba506770530fc2bef830942bb519671f2";
const GENESIS_MERKLE_ROOT: &str = "0xf1b295459fab215ddb57cb6a2b3b0e06f82603bee7da2e5be06ac8a2be13178a";

pub(crate) fn build() -> Result<NetworkProfile, IntegrityError> {
    let network = NetworkId::Test;
    let genesis = GenesisBuilder::reflect(GENESIS_TIME, GENESIS_NONCE, GENESIS_BITS, GENESIS_VERSION, 0).build();

    let consensus = ConsensusParams {
        hash_genesis_block: genesis.hash(),
        pow_limit: uint256(network, "pow_limit", "0000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        pos_limit: uint256(network, "pos_limit", "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        pos_limit_v2: uint256(network, "pos_limit_v2", "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        target_timespan: 10 * 60,
        target_spacing_v1: 60,
        target_spacing: 60,
        protocol_v1_retargeting_fixed_time: 1652164067,
        protocol_v2_time: 1652164068,
        protocol_v3_time: 1652164069,
        last_pow_block: 100_000,
        stake_timestamp_mask: 0xf,
        coinbase_maturity: 10,
        stake_min_age: 8 * 60 * 60,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1000,
        // Departs from deployed testnet, which paired 1512 with a 5-block
        // window; 2016 is not the historical value
        rule_change_activation_threshold: 1512,
        miner_confirmation_window: 2016,
        bip34_height: None,
        bip34_hash: None,
        deployments: [TESTDUMMY_DEPLOYMENT],
        minimum_chain_work: U256::from(0x100001u64),
        max_reorganization_depth: 500,
        pow_no_retargeting: false,
        pos_no_retargeting: false,
        pow_allow_min_difficulty_blocks: true,
    };

    let profile = NetworkProfile {
        network,
        consensus,
        message_start: [0x42, 0x56, 0xb1, 0x41],
        default_port: 35353,
        prune_after_height: 1000,
        genesis,
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![122], // r
            script_address: vec![65],  // T
            secret_key: vec![111],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
        },
        cashaddr_prefix: "reettest",
        dns_seeds: Vec::new(),
        fixed_seeds: TEST_FIXED_SEEDS.to_vec(),
        checkpoints: CheckpointData::new(
            [(0, hash256(network, "checkpoint 0", GENESIS_HASH)?)],
            1652164067,
            0,
            0.0,
        ),
        mining_requires_peers: false,
        default_consistency_checks: false,
        require_standard: false,
        mine_blocks_on_demand: false,
        testnet_to_be_deprecated_field_rpc: true,
    };

    profile.check_integrity(
        hash256(network, "genesis hash", GENESIS_HASH)?,
        hash256(network, "genesis merkle root", GENESIS_MERKLE_ROOT)?,
    )?;
    Ok(profile)
}
