//! Registry of the three network profiles
//!
//! Built once at startup. Either every profile passes its self-check and
//! the registry exists, or construction fails and nothing is returned.

use tracing::{debug, error};
use crate::consensus::DeploymentPos;
use crate::error::{IntegrityError, NetworkError};
use super::{mainnet, regtest, testnet, NetworkId, NetworkProfile};

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRegistry {
    main: NetworkProfile,
    test: NetworkProfile,
    regtest: NetworkProfile,
}

impl ProfileRegistry {
    /// Build and self-check all three profiles
    pub fn new() -> Result<Self, IntegrityError> {
        Ok(Self {
            main: checked(NetworkId::Main, mainnet::build())?,
            test: checked(NetworkId::Test, testnet::build())?,
            regtest: checked(NetworkId::Regtest, regtest::build())?,
        })
    }

    /// Profile for a known network
    pub fn get(&self, network: NetworkId) -> &NetworkProfile {
        match network {
            NetworkId::Main => &self.main,
            NetworkId::Test => &self.test,
            NetworkId::Regtest => &self.regtest,
        }
    }

    /// Profile by user-facing name; unknown names are an error, never a default
    pub fn profile(&self, name: &str) -> Result<&NetworkProfile, NetworkError> {
        let network: NetworkId = name.parse()?;
        Ok(self.get(network))
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkProfile> {
        NetworkId::ALL.into_iter().map(move |network| self.get(network))
    }

    pub(crate) fn update_regtest_deployment(&mut self, pos: DeploymentPos, start_time: i64, timeout: i64) {
        self.regtest
            .consensus
            .set_deployment_window(pos, start_time, timeout);
    }
}

fn checked(
    network: NetworkId,
    built: Result<NetworkProfile, IntegrityError>,
) -> Result<NetworkProfile, IntegrityError> {
    match built {
        Ok(profile) => {
            debug!(
                %network,
                genesis = %profile.genesis_hash(),
                port = profile.default_port,
                "network profile constructed"
            );
            Ok(profile)
        }
        Err(e) => {
            error!(%network, error = %e, "network profile failed its integrity check");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_matches_network() {
        let registry = ProfileRegistry::new().unwrap();
        for network in NetworkId::ALL {
            assert_eq!(registry.get(network).network, network);
        }
    }

    #[test]
    fn test_profile_by_alias() {
        let registry = ProfileRegistry::new().unwrap();
        assert_eq!(registry.profile("testnet").unwrap().network, NetworkId::Test);
        assert_eq!(registry.profile("MAIN").unwrap().network, NetworkId::Main);
    }

    #[test]
    fn test_unknown_profile() {
        let registry = ProfileRegistry::new().unwrap();
        assert_eq!(
            registry.profile("bogus"),
            Err(NetworkError::UnknownNetwork("bogus".into()))
        );
    }

    #[test]
    fn test_iter_covers_all_networks() {
        let registry = ProfileRegistry::new().unwrap();
        let networks: Vec<NetworkId> = registry.iter().map(|p| p.network).collect();
        assert_eq!(networks, NetworkId::ALL.to_vec());
    }

    #[test]
    fn test_regtest_update_leaves_others_alone() {
        let mut registry = ProfileRegistry::new().unwrap();
        let main_before = registry.get(NetworkId::Main).clone();
        registry.update_regtest_deployment(DeploymentPos::TestDummy, 0, 1);

        let regtest = registry.get(NetworkId::Regtest);
        assert_eq!(regtest.consensus.deployment(DeploymentPos::TestDummy).timeout, 1);
        assert_eq!(registry.get(NetworkId::Main), &main_before);
    }
}
