//! Reflect (RF) Chain Parameters
//!
//! Consensus constants, genesis blocks and network selection for the
//! main, test and regtest networks of a hybrid PoW/PoS chain.
//!
//! Every profile rebuilds its genesis block at startup and checks it
//! against the pinned hashes before anything can query it.

pub mod chainparams;
pub mod consensus;
pub mod crypto;
pub mod error;
pub mod node;
pub mod primitives;

pub use chainparams::{ActiveNetwork, NetworkId, NetworkProfile, ProfileRegistry};
pub use error::{IntegrityError, NetworkError};

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Chain name (short form for tickers and logs)
    pub const CHAIN_NAME: &str = "RF";

    /// Full chain name
    pub const CHAIN_FULL_NAME: &str = "Reflect";

    /// Environment variable naming the network when no argument is given
    pub const NETWORK_ENV_VAR: &str = "RF_NETWORK";

    /// Log filter used when `RUST_LOG` is unset
    pub const DEFAULT_LOG_FILTER: &str = "info";
}
