use std::collections::HashSet;

use dialr_common::network::hostport::HostPort;

/// Keeps the first occurrence of every endpoint, preserving order.
///
/// Membership is tracked in a hash set keyed by the whole endpoint, so both long runs of
/// one repeated endpoint and very large all-distinct inputs stay linear.
pub fn unique(host_ports: &[HostPort]) -> Vec<HostPort> {
    let mut seen: HashSet<&HostPort> = HashSet::new();
    host_ports
        .iter()
        .filter(|hp| seen.insert(*hp))
        .cloned()
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
