pub mod classify;
pub mod rank;

use std::net::IpAddr;

use clap::{Parser, Subcommand};
use dialr_common::network::hostport::HostPort;

#[derive(Parser)]
#[command(name = "dialr")]
#[command(about = "Ranks host:port endpoints for connecting clients.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the ordered candidate list from per-server endpoint groups
    #[command(alias = "r")]
    Rank {
        /// Comma-separated endpoints of one server, e.g. "10.0.0.1:17070,[fc00::1]:17070"
        #[arg(required = true, value_name = "GROUP")]
        groups: Vec<String>,
        /// Keep machine-local and link-local endpoints
        #[arg(long)]
        keep_unusable: bool,
        /// Local bridge address to leave out (repeatable)
        #[arg(long = "exclude", value_name = "IP")]
        excluded: Vec<IpAddr>,
        /// Endpoint to offer first
        #[arg(long, value_name = "HOST:PORT")]
        prefer: Option<HostPort>,
    },
    /// Show the type and scope of host values
    #[command(alias = "c")]
    Classify {
        #[arg(required = true, value_name = "HOST")]
        values: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
