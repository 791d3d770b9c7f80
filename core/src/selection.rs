//! List operations over [`HostPort`] endpoints.
//!
//! Every operation takes its input by reference and returns a freshly built list, except
//! [`sort_host_ports`] which orders a slice in place. None of them can fail.
//!
//! [`HostPort`]: dialr_common::network::hostport::HostPort

mod collapse;
mod dedup;
mod filter;
mod priority;

pub use collapse::collapse;
pub use dedup::unique;
pub use filter::filter_unusable;
pub use priority::{compare, ensure_first, sort_host_ports};
