//! The error taxonomy shared by all quadrature rules.
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when setting up or running an integration. There is no transient
/// failure mode anywhere in this crate, so no error is worth retrying; callers must re-invoke
/// with corrected arguments.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A structurally invalid input: a zero step or call count, an inverted or degenerate
    /// domain, or a negative bounding rectangle height.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The integrand broke a precondition of the hit-or-miss method while being sampled: it
    /// returned a negative value, a value above the bounding rectangle, or a non-finite value.
    #[error("domain violation: {0}")]
    DomainViolation(String),
}
