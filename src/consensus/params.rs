//! Consensus parameters
//!
//! Every constant a node must agree on with its peers to stay on the same
//! chain. One value per network, built by the chain parameter bodies.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::crypto::Hash;
use super::is_compact_representable;

/// Highest version bit a deployment may signal on; bits 29-31 are reserved
pub const MAX_DEPLOYMENT_BIT: u8 = 28;

/// Number of known version-bits deployments
pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = 1;

/// Structural violations found by [`ConsensusParams::validate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("{0} is not a valid compact target")]
    InvalidLimit(&'static str),
    #[error("target timespan and spacings must be positive")]
    NonPositiveTiming,
    #[error("protocol activation times must be non-decreasing")]
    ProtocolTimesOutOfOrder,
    #[error("coinbase maturity must be positive")]
    ZeroCoinbaseMaturity,
    #[error("majority thresholds out of order: enforce {enforce} reject {reject} window {window}")]
    MajorityOutOfOrder { enforce: u32, reject: u32, window: u32 },
    #[error("activation threshold {threshold} exceeds confirmation window {window}")]
    ThresholdExceedsWindow { threshold: u32, window: u32 },
    #[error("bip34 height and hash must be set together")]
    IncompleteBip34,
    #[error("deployment {deployment} uses reserved bit {bit}")]
    ReservedDeploymentBit { deployment: &'static str, bit: u8 },
    #[error("deployment {0} times out before it starts")]
    DeploymentWindowInverted(&'static str),
}

/// Known soft-fork deployments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeploymentPos {
    /// Placeholder deployment used to exercise the signaling machinery
    TestDummy,
}

impl DeploymentPos {
    pub const ALL: [DeploymentPos; MAX_VERSION_BITS_DEPLOYMENTS] = [DeploymentPos::TestDummy];

    pub fn index(self) -> usize {
        match self {
            DeploymentPos::TestDummy => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DeploymentPos::TestDummy => "testdummy",
        }
    }
}

/// Version-bits signaling window for one deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bip9Deployment {
    /// Bit position in the block version
    pub bit: u8,
    /// Median time past at which signaling may start
    pub start_time: i64,
    /// Median time past after which an unlocked deployment fails
    pub timeout: i64,
}

/// Consensus-critical constants for one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusParams {
    /// Filled in from the built genesis block
    pub hash_genesis_block: Hash,

    /// Easiest allowed proof-of-work target
    pub pow_limit: U256,
    /// Easiest allowed proof-of-stake target, first generation
    pub pos_limit: U256,
    /// Easiest allowed proof-of-stake target, second generation
    pub pos_limit_v2: U256,

    /// Retarget timespan in seconds
    pub target_timespan: i64,
    /// Block spacing before the retargeting fix
    pub target_spacing_v1: i64,
    /// Block spacing in seconds
    pub target_spacing: i64,

    pub protocol_v1_retargeting_fixed_time: u32,
    pub protocol_v2_time: u32,
    pub protocol_v3_time: u32,

    /// Last height at which proof-of-work blocks are accepted
    pub last_pow_block: u32,
    /// Stake block timestamps must have these bits clear
    pub stake_timestamp_mask: u32,
    /// Confirmations before coinbase and coinstake outputs can be spent
    pub coinbase_maturity: u32,
    /// Minimum age in seconds before an output may stake
    pub stake_min_age: i64,

    pub majority_enforce_block_upgrade: u32,
    pub majority_reject_block_outdated: u32,
    pub majority_window: u32,

    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,

    /// `None` when the height-in-coinbase rule has no pinned activation
    pub bip34_height: Option<u32>,
    pub bip34_hash: Option<Hash>,

    pub deployments: [Bip9Deployment; MAX_VERSION_BITS_DEPLOYMENTS],

    /// Best-chain candidates need more cumulative work than this
    pub minimum_chain_work: U256,
    /// Deepest reorganization the node will follow
    pub max_reorganization_depth: u32,

    pub pow_no_retargeting: bool,
    pub pos_no_retargeting: bool,
    pub pow_allow_min_difficulty_blocks: bool,
}

impl ConsensusParams {
    /// Retarget window length in blocks
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    pub fn is_protocol_v1_retargeting_fixed(&self, time: u32) -> bool {
        time >= self.protocol_v1_retargeting_fixed_time
    }

    pub fn is_protocol_v2(&self, time: u32) -> bool {
        time >= self.protocol_v2_time
    }

    pub fn is_protocol_v3(&self, time: u32) -> bool {
        time >= self.protocol_v3_time
    }

    /// Whether a proof-of-work block is acceptable at `height`
    pub fn is_pow_allowed(&self, height: u32) -> bool {
        height <= self.last_pow_block
    }

    /// Whether a stake timestamp has the required granularity
    pub fn check_stake_timestamp(&self, time: u32) -> bool {
        time & self.stake_timestamp_mask == 0
    }

    pub fn deployment(&self, pos: DeploymentPos) -> &Bip9Deployment {
        &self.deployments[pos.index()]
    }

    pub(crate) fn set_deployment_window(&mut self, pos: DeploymentPos, start_time: i64, timeout: i64) {
        let deployment = &mut self.deployments[pos.index()];
        deployment.start_time = start_time;
        deployment.timeout = timeout;
    }

    /// Check the structural invariants, reporting the first violation
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, limit) in [
            ("pow_limit", &self.pow_limit),
            ("pos_limit", &self.pos_limit),
            ("pos_limit_v2", &self.pos_limit_v2),
        ] {
            if !is_compact_representable(limit) {
                return Err(ParamsError::InvalidLimit(name));
            }
        }

        if self.target_timespan <= 0 || self.target_spacing_v1 <= 0 || self.target_spacing <= 0 {
            return Err(ParamsError::NonPositiveTiming);
        }

        if self.protocol_v1_retargeting_fixed_time > self.protocol_v2_time
            || self.protocol_v2_time > self.protocol_v3_time
        {
            return Err(ParamsError::ProtocolTimesOutOfOrder);
        }

        if self.coinbase_maturity == 0 {
            return Err(ParamsError::ZeroCoinbaseMaturity);
        }

        if self.majority_enforce_block_upgrade > self.majority_reject_block_outdated
            || self.majority_reject_block_outdated > self.majority_window
        {
            return Err(ParamsError::MajorityOutOfOrder {
                enforce: self.majority_enforce_block_upgrade,
                reject: self.majority_reject_block_outdated,
                window: self.majority_window,
            });
        }

        if self.rule_change_activation_threshold > self.miner_confirmation_window {
            return Err(ParamsError::ThresholdExceedsWindow {
                threshold: self.rule_change_activation_threshold,
                window: self.miner_confirmation_window,
            });
        }

        if self.bip34_height.is_some() != self.bip34_hash.is_some() {
            return Err(ParamsError::IncompleteBip34);
        }

        for pos in DeploymentPos::ALL {
            let deployment = self.deployment(pos);
            if deployment.bit > MAX_DEPLOYMENT_BIT {
                return Err(ParamsError::ReservedDeploymentBit {
                    deployment: pos.name(),
                    bit: deployment.bit,
                });
            }
            if deployment.start_time > deployment.timeout {
                return Err(ParamsError::DeploymentWindowInverted(pos.name()));
            }
        }

        Ok(())
    }
}
