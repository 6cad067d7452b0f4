//! Network identifiers and name canonicalization

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::error::NetworkError;

/// The three Reflect networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// Production network
    Main,
    /// Public test network
    Test,
    /// Local regression-test network, blocks mined on demand
    Regtest,
}

impl NetworkId {
    pub const ALL: [NetworkId; 3] = [NetworkId::Main, NetworkId::Test, NetworkId::Regtest];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Test => "test",
            NetworkId::Regtest => "regtest",
        }
    }

    /// Map the usual `-testnet` / `-regtest` switches to a network
    pub fn from_flags(testnet: bool, regtest: bool) -> Result<Self, NetworkError> {
        match (testnet, regtest) {
            (true, true) => Err(NetworkError::ConflictingFlags),
            (true, false) => Ok(NetworkId::Test),
            (false, true) => Ok(NetworkId::Regtest),
            (false, false) => Ok(NetworkId::Main),
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkId {
    type Err = NetworkError;

    /// Accepts canonical names and the common aliases, ignoring case and
    /// surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkId::Main),
            "test" | "testnet" | "testnet3" => Ok(NetworkId::Test),
            "regtest" => Ok(NetworkId::Regtest),
            _ => Err(NetworkError::UnknownNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for id in NetworkId::ALL {
            assert_eq!(id.name().parse::<NetworkId>(), Ok(id));
            assert_eq!(id.to_string(), id.name());
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("mainnet".parse::<NetworkId>(), Ok(NetworkId::Main));
        assert_eq!("TestNet".parse::<NetworkId>(), Ok(NetworkId::Test));
        assert_eq!("testnet3".parse::<NetworkId>(), Ok(NetworkId::Test));
        assert_eq!(" regtest ".parse::<NetworkId>(), Ok(NetworkId::Regtest));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "bogus".parse::<NetworkId>(),
            Err(NetworkError::UnknownNetwork("bogus".to_string()))
        );
        assert!("".parse::<NetworkId>().is_err());
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(NetworkId::from_flags(false, false), Ok(NetworkId::Main));
        assert_eq!(NetworkId::from_flags(true, false), Ok(NetworkId::Test));
        assert_eq!(NetworkId::from_flags(false, true), Ok(NetworkId::Regtest));
        assert_eq!(NetworkId::from_flags(true, true), Err(NetworkError::ConflictingFlags));
    }
}
