//! # Dialr Common
//!
//! Shared value types for the `dialr` workspace.
//!
//! * **[`network`]**: Addresses, scopes and `host:port` endpoints.
//! * **[`error`]**: Errors raised while parsing endpoints.
//! * **[`config`]**: Options controlling how candidate lists are published.

pub mod config;
pub mod error;
pub mod network;
