use dialr_common::network::hostport::HostPort;

/// Flattens per-server endpoint lists into one list, server by server.
pub fn collapse(groups: &[Vec<HostPort>]) -> Vec<HostPort> {
    let total: usize = groups.iter().map(Vec::len).sum();
    let mut collapsed: Vec<HostPort> = Vec::with_capacity(total);
    for group in groups {
        collapsed.extend_from_slice(group);
    }
    collapsed
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
