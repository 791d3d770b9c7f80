//! Errors produced while turning text into endpoints.

use std::num::ParseIntError;

use thiserror::Error;

/// An endpoint text that could not be parsed as `host:port`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse {input:?} {reason}")]
pub struct MalformedEndpoint {
    input: String,
    reason: Malformation,
}

impl MalformedEndpoint {
    pub fn new(input: impl Into<String>, reason: Malformation) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }

    /// The offending text, exactly as it was given.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> &Malformation {
        &self.reason
    }
}

/// What was wrong with a malformed endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformation {
    #[error("as address:port: missing port in address")]
    MissingPort,
    #[error("as address:port: too many colons in address")]
    TooManyColons,
    #[error("as address:port: missing ']' in address")]
    MissingBracket,
    #[error("as address:port: unexpected '[' in address")]
    UnexpectedOpenBracket,
    #[error("as address:port: unexpected ']' in address")]
    UnexpectedCloseBracket,
    #[error("port: {0}")]
    InvalidPort(#[source] ParseIntError),
}
