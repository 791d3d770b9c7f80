//! # Address Scope Model
//!
//! An [`Address`] is the host half of an endpoint: a dotted-quad IPv4 literal, a bare IPv6
//! literal, or a hostname. Every address carries a [`Scope`] describing where it can be
//! reached from, derived once from the text when the address is built.
//!
//! ## Classification
//! * **MachineLocal**: `127.0.0.0/8`, `::1`.
//! * **CloudLocal**: `10.0.0.0/8`, `172.16.0.0/12`, `192.168.0.0/16`, `fc00::/7`.
//! * **LinkLocal**: `169.254.0.0/16`, `224.0.0.0/24`, `fe80::/10` and the interface/link-local
//!   IPv6 multicast scopes (`ffx1::`, `ffx2::`).
//! * **Public**: every other IP literal.
//! * **Unknown**: anything that is not an IP literal (hostnames, including invalid ones).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use pnet::ipnetwork::IpNetwork;

/// Reachability domain of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// No scope could be derived, e.g. for hostnames.
    #[default]
    Unknown,
    /// Routable from anywhere.
    Public,
    /// Private ranges used inside a cloud provider or datacenter network.
    CloudLocal,
    /// Loopback, only reachable from the same machine.
    MachineLocal,
    /// Only valid on a single network segment.
    LinkLocal,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Unknown => "unknown",
            Scope::Public => "public",
            Scope::CloudLocal => "local-cloud",
            Scope::MachineLocal => "local-machine",
            Scope::LinkLocal => "link-local",
        }
    }

    /// Returns `false` for scopes that can never be reached from another host.
    pub fn is_usable(&self) -> bool {
        !matches!(self, Scope::MachineLocal | Scope::LinkLocal)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntactic kind of an address value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    Ipv4,
    Ipv6,
    Hostname,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressType::Ipv4 => "ipv4",
            AddressType::Ipv6 => "ipv6",
            AddressType::Hostname => "hostname",
        };
        f.write_str(name)
    }
}

const LOOPBACK_RANGES: &[(IpAddr, u8)] = &[
    (IpAddr::V4(Ipv4Addr::new(127, 0, 0, 0)), 8),
    (IpAddr::V6(Ipv6Addr::LOCALHOST), 128),
];

const PRIVATE_RANGES: &[(IpAddr, u8)] = &[
    (IpAddr::V4(Ipv4Addr::new(10, 0, 0, 0)), 8),
    (IpAddr::V4(Ipv4Addr::new(172, 16, 0, 0)), 12),
    (IpAddr::V4(Ipv4Addr::new(192, 168, 0, 0)), 16),
    (IpAddr::V6(Ipv6Addr::new(0xfc00, 0, 0, 0, 0, 0, 0, 0)), 7),
];

const LINK_LOCAL_RANGES: &[(IpAddr, u8)] = &[
    (IpAddr::V4(Ipv4Addr::new(169, 254, 0, 0)), 16),
    (IpAddr::V4(Ipv4Addr::new(224, 0, 0, 0)), 24),
    (IpAddr::V6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0)), 10),
];

static MACHINE_LOCAL: LazyLock<Vec<IpNetwork>> = LazyLock::new(|| networks(LOOPBACK_RANGES));
static CLOUD_LOCAL: LazyLock<Vec<IpNetwork>> = LazyLock::new(|| networks(PRIVATE_RANGES));
static LINK_LOCAL: LazyLock<Vec<IpNetwork>> = LazyLock::new(|| networks(LINK_LOCAL_RANGES));

fn networks(table: &[(IpAddr, u8)]) -> Vec<IpNetwork> {
    table
        .iter()
        .filter_map(|&(ip, prefix)| IpNetwork::new(ip, prefix).ok())
        .collect()
}

fn in_any(nets: &[IpNetwork], ip: IpAddr) -> bool {
    nets.iter().any(|net| net.contains(ip))
}

/// Interface-local (`ffx1::`) and link-local (`ffx2::`) IPv6 multicast.
fn is_link_local_multicast(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(_) => false,
        IpAddr::V6(v6) => {
            let octets = v6.octets();
            octets[0] == 0xff && matches!(octets[1] & 0x0f, 0x01 | 0x02)
        }
    }
}

/// Derives the scope of a textual host value.
///
/// Never fails: anything that is not an IP literal is [`Scope::Unknown`].
pub fn classify(value: &str) -> Scope {
    value.parse::<IpAddr>().map_or(Scope::Unknown, classify_ip)
}

/// Derives the scope of an IP address. IPv4-mapped IPv6 addresses are classified
/// by the embedded IPv4 address.
pub fn classify_ip(ip: IpAddr) -> Scope {
    let ip = match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map_or(ip, IpAddr::V4),
        IpAddr::V4(_) => ip,
    };

    if in_any(&MACHINE_LOCAL, ip) {
        Scope::MachineLocal
    } else if in_any(&CLOUD_LOCAL, ip) {
        Scope::CloudLocal
    } else if in_any(&LINK_LOCAL, ip) || is_link_local_multicast(ip) {
        Scope::LinkLocal
    } else {
        Scope::Public
    }
}

/// A host value together with its scope.
///
/// Two addresses are equal when both the text and the scope are equal. No normalization
/// is applied to the text: `2001:DB8::1` and `2001:db8::1` are different addresses.
#[derive(Clone)]
pub struct Address {
    value: String,
    scope: Scope,
    /// Cached parse of `value`; `None` for hostnames.
    ip: Option<IpAddr>,
}

impl Address {
    /// Builds an address, classifying its scope from the text.
    pub fn new(value: impl Into<String>) -> Self {
        let value: String = value.into();
        let ip: Option<IpAddr> = value.parse().ok();
        let scope: Scope = ip.map_or(Scope::Unknown, classify_ip);
        Self { value, scope, ip }
    }

    /// Builds an address with a scope supplied by the caller, skipping classification.
    ///
    /// Used when a structured source already knows the scope, e.g. a provider reporting
    /// its public DNS name.
    pub fn with_scope(value: impl Into<String>, scope: Scope) -> Self {
        let value: String = value.into();
        let ip: Option<IpAddr> = value.parse().ok();
        Self { value, scope, ip }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn ip(&self) -> Option<IpAddr> {
        self.ip
    }

    pub fn is_ip(&self) -> bool {
        self.ip.is_some()
    }

    pub fn address_type(&self) -> AddressType {
        match self.ip {
            Some(IpAddr::V4(_)) => AddressType::Ipv4,
            Some(IpAddr::V6(_)) => AddressType::Ipv6,
            None => AddressType::Hostname,
        }
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.scope == other.scope
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.scope.hash(state);
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Address")
            .field("value", &self.value)
            .field("scope", &self.scope)
            .finish()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Self::new(ip.to_string())
    }
}

/// Builds one classified address per value, in order.
pub fn new_addresses<I, S>(values: I) -> Vec<Address>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Address::new).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
