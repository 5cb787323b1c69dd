//! Error types for the probability engine.
//!
//! Two failure modes exist: rejected parameters (checked synchronously before
//! any computation) and a simulated hole blowing through its shot cap. The
//! exact solvers never fail — truncation shows up as missing pmf mass, not as
//! an error.

use thiserror::Error;

/// Errors produced by the simulation and exact-solver entry points.
#[derive(Debug, Error, PartialEq)]
pub enum HardyError {
    /// Rejected input: invalid probabilities, par, start state, or target
    /// boundary. Raised before any state vector is built.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A simulated hole exceeded the shot safety cap before reaching par.
    /// Signals an extreme parameter combination or a misconfigured cap;
    /// never retried internally.
    #[error("exceeded {cap} shots without reaching par; check parameters")]
    BoundExceeded { cap: u32 },
}
