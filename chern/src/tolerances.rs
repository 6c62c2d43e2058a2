// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized numeric tolerances with physical justification.
//!
//! Every threshold used by the assemblers' diagnostics and by the test
//! suite is defined here. No ad-hoc magic numbers.
//!
//! | Category | Basis | Example |
//! |----------|-------|---------|
//! | Machine precision | IEEE 754 f64 | 1e-14 for exact algebra |
//! | Dense products | O(M) accumulated rounding | 1e-12 for Hermiticity |
//! | Physical model | Finite-size corrections | 0.1 for quantized markers |

/// Exact arithmetic on O(1) quantities (Pauli algebra, closed-form blocks).
pub const EXACT_F64: f64 = 1e-14;

/// Max |H − H†| for an assembled Hamiltonian.
///
/// Both assemblers produce H† = H by construction; the residual comes only
/// from `exp(iφ)` evaluated separately for forward and reverse entries.
pub const HERMITIAN_ABS: f64 = 1e-12;

/// Marker on a zero projector: every product term vanishes identically.
pub const MARKER_ZERO_ABS: f64 = 1e-12;

/// Bond-angle deviation (radians) above which a rounded edge is logged.
///
/// Under `GeometryPolicy::Round` edges are binned silently; a deviation
/// this large means the lattice is not cardinal and the hopping is
/// attached to the wrong direction.
pub const CARDINAL_ANGLE_WARN: f64 = 1e-6;

/// Bulk local Chern marker vs nearest integer on a gapped torus.
///
/// Corrections scale like exp(−L/ξ); for the QWZ model at |u| = 1 and
/// L ≥ 10 the deviation is well below this bound.
pub const QUANTIZED_MARKER_ABS: f64 = 0.1;

/// Commutator ‖[H, P]‖ for a projector built from the Bloch bands.
pub const COMMUTATOR_ABS: f64 = 1e-10;
