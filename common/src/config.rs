use std::net::IpAddr;

use crate::network::hostport::HostPort;

/// Options for building the endpoint list published to remote clients.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Keeps machine-local and link-local endpoints in the published list.
    ///
    /// Only useful for diagnostics; such endpoints can never be dialed remotely.
    pub keep_unusable: bool,
    /// Addresses of local container or VM bridges, never reachable by remote clients.
    pub excluded: Vec<IpAddr>,
    /// Endpoint that must be offered first.
    pub preferred: Option<HostPort>,
}
