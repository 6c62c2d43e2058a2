// SPDX-License-Identifier: AGPL-3.0-only

//! Typed errors for Hamiltonian assembly and marker evaluation.
//!
//! Every failure is an input-validation failure raised before any matrix
//! is allocated, so callers never observe a partially built result.

use thiserror::Error;

/// Errors arising from lattice validation, parameter resolution, or
/// projector shape checks.
#[derive(Debug, Error)]
pub enum TopoError {
    /// An array input does not match the size implied by the lattice.
    #[error("shape mismatch for {what}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Which input was rejected (`"ws"`, `"projector"`, ...).
        what: &'static str,
        /// Human-readable description of the accepted size.
        expected: String,
        /// The size actually supplied.
        found: usize,
    },

    /// An edge is not close enough to a cardinal bond direction.
    ///
    /// Only raised under [`GeometryPolicy::Strict`](crate::params::GeometryPolicy).
    #[error("edge {edge} is not cardinal (bond angle {angle:.6} rad)")]
    GeometryAssumptionViolated {
        /// Edge index into the lattice edge list.
        edge: usize,
        /// Bond angle `atan2(vy, vx)` in radians.
        angle: f64,
    },

    /// The lattice itself is inconsistent (edge/vector counts, vertex ids).
    #[error("invalid lattice: {0}")]
    InvalidLattice(String),

    /// Parameter or lattice JSON could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TopoError>;
