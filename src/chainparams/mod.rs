//! Chain parameters - Per-network profiles, registry and active selection

mod checkpoints;
mod mainnet;
mod network;
mod profile;
mod regtest;
mod registry;
mod seeds;
mod selector;
mod testnet;

pub use checkpoints::*;
pub use network::*;
pub use profile::{Base58Prefixes, Base58Type, NetworkProfile};
pub use registry::*;
pub use seeds::*;
pub use selector::*;

use crate::consensus::Bip9Deployment;

/// Compact target of every Reflect genesis block
pub const GENESIS_BITS: u32 = 0x1e0ffff0;

/// Block version of every Reflect genesis block
pub const GENESIS_VERSION: i32 = 1;

/// January 1, 2008 to December 31, 2008 on bit 28, so it never activates
pub const TESTDUMMY_DEPLOYMENT: Bip9Deployment = Bip9Deployment {
    bit: 28,
    start_time: 1199145601,
    timeout: 1230767999,
};
