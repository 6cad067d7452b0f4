//! Seed Node Configuration
//!
//! Bootstrap descriptors for initial peer discovery. Resolution and
//! connection happen in the networking layer.

use serde::Serialize;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

/// A DNS seeder and the host name it answers for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
    /// Seeder understands service-bit filtered queries
    pub supports_service_bits: bool,
}

impl DnsSeed {
    pub const fn new(name: &'static str, host: &'static str, supports_service_bits: bool) -> Self {
        Self {
            name,
            host,
            supports_service_bits,
        }
    }
}

/// Fixed seed record: IPv6 address (IPv4 mapped as ::ffff:a.b.c.d) and port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    /// Socket address, unwrapping IPv4-mapped entries
    pub fn to_socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.addr);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// Mainnet DNS seeders
pub const MAIN_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::new("seed.reetchash.com", "node.reetchash.com", true),
    DnsSeed::new("explorer.reetchash.com", "node2.reetchash.com", true),
];

/// Mainnet fixed seeds; populated from the crawler output when one is published
pub const MAIN_FIXED_SEEDS: &[SeedSpec6] = &[];

/// Testnet fixed seeds
pub const TEST_FIXED_SEEDS: &[SeedSpec6] = &[];
