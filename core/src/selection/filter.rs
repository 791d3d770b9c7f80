use dialr_common::network::hostport::HostPort;

/// Drops machine-local and link-local endpoints, keeping the rest in their original order.
///
/// Hostnames are kept whatever they resolve to.
pub fn filter_unusable(host_ports: &[HostPort]) -> Vec<HostPort> {
    host_ports
        .iter()
        .filter(|hp| hp.address().scope().is_usable())
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
