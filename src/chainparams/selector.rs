//! Active network selection
//!
//! The node commits to one network during startup and keeps it for the
//! rest of the process. Components receive the `ActiveNetwork` and read
//! the bound profile through it.

use std::sync::OnceLock;
use tracing::{info, warn};
use crate::consensus::DeploymentPos;
use crate::error::{IntegrityError, NetworkError};
use super::{NetworkId, NetworkProfile, ProfileRegistry};

/// Registry plus a write-once binding to one of its profiles
#[derive(Debug)]
pub struct ActiveNetwork {
    registry: ProfileRegistry,
    selected: OnceLock<NetworkId>,
}

impl ActiveNetwork {
    pub fn new(registry: ProfileRegistry) -> Self {
        Self {
            registry,
            selected: OnceLock::new(),
        }
    }

    /// Build the registry and wrap it, nothing selected yet
    pub fn bootstrap() -> Result<Self, IntegrityError> {
        Ok(Self::new(ProfileRegistry::new()?))
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    /// Bind the network named by `name` (aliases accepted)
    pub fn select(&self, name: &str) -> Result<&NetworkProfile, NetworkError> {
        let network: NetworkId = name.parse()?;
        self.select_network(network)
    }

    /// Bind `network`; a binding is never replaced, so a second call fails
    pub fn select_network(&self, network: NetworkId) -> Result<&NetworkProfile, NetworkError> {
        let mut fresh = false;
        let bound = *self.selected.get_or_init(|| {
            fresh = true;
            network
        });
        if !fresh {
            return Err(NetworkError::AlreadySelected(bound));
        }

        let profile = self.registry.get(bound);
        info!(
            network = %bound,
            port = profile.default_port,
            magic = %hex::encode(profile.message_start),
            genesis = %profile.genesis_hash(),
            "selected network"
        );
        Ok(profile)
    }

    /// The bound profile, if selection already happened
    pub fn try_active(&self) -> Option<&NetworkProfile> {
        self.selected.get().map(|network| self.registry.get(*network))
    }

    /// The bound profile
    ///
    /// # Panics
    ///
    /// If called before [`select`](Self::select). Consumers are wired up
    /// after network selection, so this is a startup ordering bug.
    pub fn active(&self) -> &NetworkProfile {
        match self.try_active() {
            Some(profile) => profile,
            None => panic!("network parameters queried before a network was selected"),
        }
    }

    /// Move the regtest window for one deployment, for tests that need a
    /// soft fork active at a known time. Main and test have no equivalent.
    ///
    /// Takes `&mut self`: run it during setup, before the context is shared.
    pub fn override_regtest_deployment(&mut self, pos: DeploymentPos, start_time: i64, timeout: i64) {
        warn!(
            deployment = pos.name(),
            start_time,
            timeout,
            "overriding regtest deployment window"
        );
        self.registry
            .update_regtest_deployment(pos, start_time, timeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ActiveNetwork {
        ActiveNetwork::bootstrap().unwrap()
    }

    #[test]
    fn test_select_then_active() {
        let network = context();
        assert!(network.try_active().is_none());

        let selected = network.select("regtest").unwrap().network;
        assert_eq!(selected, NetworkId::Regtest);
        assert_eq!(network.active().network, NetworkId::Regtest);
        assert_eq!(network.active(), network.active());
    }

    #[test]
    fn test_unknown_name_leaves_selection_open() {
        let network = context();
        assert_eq!(
            network.select("bogus").unwrap_err(),
            NetworkError::UnknownNetwork("bogus".into())
        );
        assert!(network.try_active().is_none());
        assert!(network.select("test").is_ok());
    }

    #[test]
    fn test_second_select_is_rejected() {
        let network = context();
        network.select("main").unwrap();
        assert_eq!(
            network.select("test").unwrap_err(),
            NetworkError::AlreadySelected(NetworkId::Main)
        );
        assert_eq!(network.active().network, NetworkId::Main);
    }

    #[test]
    #[should_panic(expected = "before a network was selected")]
    fn test_active_before_select_panics() {
        let network = context();
        let _ = network.active();
    }

    #[test]
    fn test_override_visible_through_active() {
        let mut network = context();
        network.override_regtest_deployment(DeploymentPos::TestDummy, 0, 4_000_000_000);
        network.select_network(NetworkId::Regtest).unwrap();

        let deployment = network.active().consensus.deployment(DeploymentPos::TestDummy);
        assert_eq!(deployment.start_time, 0);
        assert_eq!(deployment.timeout, 4_000_000_000);
    }
}
