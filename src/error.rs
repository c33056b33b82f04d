use std::io;
use thiserror::Error;

/// Failure modes of a single metric query. None of these abort the report;
/// see the policy in `report.rs`.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The whole subsystem is absent on this host (no GPU tooling, no swap).
    #[error("{0} not available on this host")]
    Unavailable(&'static str),
    /// One enumerated resource is off limits; the rest keep going.
    #[error("permission denied for {0}")]
    Permission(String),
    /// Unexpected provider failure.
    #[error("query failed: {0}")]
    Query(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    /// Host identity could not be determined at all. The only collection
    /// failure that makes the report meaningless.
    #[error("cannot determine host identity: {0}")]
    Identity(#[source] CollectError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
