//! Best-first ordering of endpoints.
//!
//! Tiers, most preferred first:
//! 1. Public IPv4, then public IPv6.
//! 2. Hostnames, whatever scope they were given.
//! 3. Cloud-local IPv4, then IPv6.
//! 4. Machine-local IPv4, then IPv6.
//! 5. Link-local IPv4, then IPv6.
//! 6. IP literals explicitly scoped as unknown.
//!
//! Inside a tier endpoints are ordered by address text, then by port.

use std::cmp::Ordering;

use dialr_common::network::address::{Address, AddressType, Scope};
use dialr_common::network::hostport::HostPort;

const HOSTNAME_TIER: u8 = 0x10;

fn tier(address: &Address) -> u8 {
    let family: u8 = match address.address_type() {
        AddressType::Hostname => return HOSTNAME_TIER,
        AddressType::Ipv4 => 0,
        AddressType::Ipv6 => 1,
    };
    let scope: u8 = match address.scope() {
        Scope::Public => 0x00,
        Scope::CloudLocal => 0x20,
        Scope::MachineLocal => 0x40,
        Scope::LinkLocal => 0x80,
        Scope::Unknown => 0xF0,
    };
    scope + family
}

/// Total order used by [`sort_host_ports`].
pub fn compare(a: &HostPort, b: &HostPort) -> Ordering {
    tier(a.address())
        .cmp(&tier(b.address()))
        .then_with(|| a.address().value().cmp(b.address().value()))
        .then_with(|| a.port().cmp(&b.port()))
}

/// Sorts endpoints best-first. Stable, so endpoints comparing equal keep their order.
pub fn sort_host_ports(host_ports: &mut [HostPort]) {
    host_ports.sort_by(compare);
}

/// Returns the list with `preferred` at index 0.
///
/// The first occurrence of `preferred` is moved to the front; when it is missing it is
/// prepended. Everything else keeps its relative order.
pub fn ensure_first(preferred: &HostPort, host_ports: &[HostPort]) -> Vec<HostPort> {
    let mut result: Vec<HostPort> = Vec::with_capacity(host_ports.len() + 1);
    result.push(preferred.clone());
    match host_ports.iter().position(|hp| hp == preferred) {
        Some(index) => {
            result.extend_from_slice(&host_ports[..index]);
            result.extend_from_slice(&host_ports[index + 1..]);
        }
        None => result.extend_from_slice(host_ports),
    }
    result
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
