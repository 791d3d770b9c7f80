//! # Dialr Core
//!
//! Turns the raw endpoints gathered for a set of servers into the ordered candidate list
//! offered to connecting clients.
//!
//! * **[`selection`]**: Pure list operations (filter, collapse, dedup, priority sort).
//! * **[`publisher`]**: Runs those operations as one pipeline according to a [`Config`].
//!
//! [`Config`]: dialr_common::config::Config

pub mod publisher;
pub mod selection;
