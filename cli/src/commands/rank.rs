use anyhow::Context;
use dialr_common::config::Config;
use dialr_common::network::hostport::{self, HostPort};
use dialr_core::publisher;
use tracing::{info, warn};

use crate::terminal::print;

pub fn rank(groups: &[String], cfg: &Config) -> anyhow::Result<()> {
    let groups: Vec<Vec<HostPort>> = groups
        .iter()
        .enumerate()
        .map(|(idx, group)| {
            parse_group(group).with_context(|| format!("invalid endpoint group #{idx}"))
        })
        .collect::<anyhow::Result<_>>()?;

    let candidates: Vec<HostPort> = publisher::prepare_candidates(&groups, cfg);
    let Some(first) = candidates.first() else {
        warn!("No usable endpoints left to offer");
        return Ok(());
    };

    for (idx, hp) in candidates.iter().enumerate() {
        print::candidate(idx, hp);
    }

    let unit: &str = if candidates.len() == 1 { "candidate" } else { "candidates" };
    info!("{} {unit}, dial {first} first", candidates.len());
    Ok(())
}

/// Parses one server's endpoints, e.g. "8.8.8.8:17070, [fc00::1]:17070".
fn parse_group(group: &str) -> anyhow::Result<Vec<HostPort>> {
    let texts = group.split(',').map(str::trim).filter(|s| !s.is_empty());
    Ok(hostport::parse_host_ports(texts)?)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
