//! # Host-Port Endpoints
//!
//! A [`HostPort`] is what a client dials: an [`Address`] and a port.
//!
//! Endpoints are parsed from and rendered to the usual textual forms:
//! * `1.2.3.4:17070` and `example.com:17070` for IPv4 literals and hostnames.
//! * `[2001:db8::1]:17070` for IPv6 literals.
//!
//! Rendering is the inverse of parsing for every endpoint the parser produces.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Malformation, MalformedEndpoint};
use crate::network::address::{Address, AddressType};

/// An address paired with a port. Immutable once built.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HostPort {
    address: Address,
    port: u16,
}

impl HostPort {
    pub fn new(address: Address, port: u16) -> Self {
        Self { address, port }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn needs_brackets(&self) -> bool {
        self.address.address_type() == AddressType::Ipv6 || self.address.value().contains(':')
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.needs_brackets() {
            write!(f, "[{}]:{}", self.address, self.port)
        } else {
            write!(f, "{}:{}", self.address, self.port)
        }
    }
}

impl fmt::Debug for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for HostPort {
    type Err = MalformedEndpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_host_port(s)
    }
}

/// Splits `host:port` on the last colon, honouring `[ipv6]:port` brackets.
fn split_host_port(text: &str) -> Result<(&str, &str), Malformation> {
    let Some(colon) = text.rfind(':') else {
        return Err(Malformation::MissingPort);
    };

    let (host, open_from, close_from) = if text.starts_with('[') {
        let Some(end) = text.find(']') else {
            return Err(Malformation::MissingBracket);
        };
        if end + 1 == text.len() {
            return Err(Malformation::MissingPort);
        }
        if end + 1 != colon {
            return Err(match text.as_bytes()[end + 1] {
                b':' => Malformation::TooManyColons,
                _ => Malformation::MissingPort,
            });
        }
        (&text[1..end], 1, end + 1)
    } else {
        let host: &str = &text[..colon];
        if host.contains(':') {
            return Err(Malformation::TooManyColons);
        }
        (host, 0, 0)
    };

    if text[open_from..].contains('[') {
        return Err(Malformation::UnexpectedOpenBracket);
    }
    if text[close_from..].contains(']') {
        return Err(Malformation::UnexpectedCloseBracket);
    }

    Ok((host, &text[colon + 1..]))
}

/// Parses a single `host:port` or `[ipv6]:port` text.
///
/// The host is not validated: anything that is not an IP literal becomes a hostname,
/// even an empty one.
pub fn parse_host_port(text: &str) -> Result<HostPort, MalformedEndpoint> {
    let (host, port) =
        split_host_port(text).map_err(|reason| MalformedEndpoint::new(text, reason))?;

    let port: u16 = port
        .parse()
        .map_err(|e| MalformedEndpoint::new(text, Malformation::InvalidPort(e)))?;

    Ok(HostPort::new(Address::new(host), port))
}

/// Parses every text in order. Fails on the first malformed entry with no partial result.
pub fn parse_host_ports<I, S>(texts: I) -> Result<Vec<HostPort>, MalformedEndpoint>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|text| parse_host_port(text.as_ref()))
        .collect::<Result<Vec<HostPort>, _>>()
        .inspect_err(|err| debug!(input = err.input(), "rejecting endpoint batch"))
}

/// Builds endpoints from plain host values sharing one port.
pub fn new_host_ports<I, S>(port: u16, values: I) -> Vec<HostPort>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(|value| HostPort::new(Address::new(value), port))
        .collect()
}

/// Pairs every address with the same port.
pub fn addresses_with_port(addresses: &[Address], port: u16) -> Vec<HostPort> {
    addresses
        .iter()
        .map(|address| HostPort::new(address.clone(), port))
        .collect()
}

/// Strips the ports, keeping the addresses in order.
pub fn hosts_without_port(host_ports: &[HostPort]) -> Vec<Address> {
    host_ports.iter().map(|hp| hp.address.clone()).collect()
}

pub fn to_strings(host_ports: &[HostPort]) -> Vec<String> {
    host_ports.iter().map(HostPort::to_string).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
