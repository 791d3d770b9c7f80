//! # Network Models
//!
//! * [`address::Address`]: A host value (IP literal or hostname) with its derived [`address::Scope`].
//! * [`hostport::HostPort`]: An address paired with a port, the unit a client dials.

pub mod address;
pub mod hostport;
