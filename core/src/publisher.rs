//! Builds the candidate list offered to connecting clients.
//!
//! The endpoints of each server arrive as a separate group. Publishing runs the
//! [`selection`] operations over them in a fixed order:
//!
//! 1. Drop endpoints on excluded local bridges, and any group left empty.
//! 2. Drop machine-local and link-local endpoints (unless [`Config::keep_unusable`]).
//! 3. Collapse the groups into one list.
//! 4. Drop duplicates.
//! 5. Sort best-first.
//! 6. Force [`Config::preferred`] to the front, if set.

use std::net::IpAddr;

use dialr_common::config::Config;
use dialr_common::network::hostport::HostPort;
use tracing::{debug, trace};

use crate::selection;

/// Removes endpoints whose address is one of `excluded`, dropping groups that end up empty.
///
/// Only IP literals can match; hostnames are always kept.
pub fn exclude_addresses(groups: &[Vec<HostPort>], excluded: &[IpAddr]) -> Vec<Vec<HostPort>> {
    if excluded.is_empty() {
        return groups.to_vec();
    }

    groups
        .iter()
        .map(|group| {
            group
                .iter()
                .filter(|hp| !hp.address().ip().is_some_and(|ip| excluded.contains(&ip)))
                .cloned()
                .collect::<Vec<HostPort>>()
        })
        .filter(|group| !group.is_empty())
        .collect()
}

/// Runs the whole pipeline and returns the candidates, best first.
pub fn prepare_candidates(groups: &[Vec<HostPort>], cfg: &Config) -> Vec<HostPort> {
    let groups: Vec<Vec<HostPort>> = exclude_addresses(groups, &cfg.excluded);
    trace!(groups = groups.len(), "excluded bridge addresses");

    let groups: Vec<Vec<HostPort>> = if cfg.keep_unusable {
        groups
    } else {
        groups
            .iter()
            .map(|group| selection::filter_unusable(group))
            .collect()
    };

    let collapsed: Vec<HostPort> = selection::collapse(&groups);
    let mut candidates: Vec<HostPort> = selection::unique(&collapsed);
    debug!(
        collapsed = collapsed.len(),
        unique = candidates.len(),
        "merged server endpoints"
    );

    selection::sort_host_ports(&mut candidates);

    match &cfg.preferred {
        Some(preferred) => selection::ensure_first(preferred, &candidates),
        None => candidates,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
