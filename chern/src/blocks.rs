// SPDX-License-Identifier: AGPL-3.0-only

//! 4×4 hopping and onsite blocks of the four-band (BHZ) model.
//!
//! Orbital order within a site is `(s↑, s↓, p↑, p↓)` in the Kronecker
//! convention of [`kron2`]: the first factor acts on the orbital pair, the
//! second on the spin-like pair.
//!
//! `tx` and `ty` are deliberately not related by a rotation of the basis:
//! the inter-orbital term uses σx⊗σz along x but σy⊗σ0 along y, and the
//! spin-mixing term uses σ0⊗σy along x but σz⊗σx along y.
//!
//! # Provenance
//! Bernevig, Hughes & Zhang (2006), Science 314, 1757

use ndarray::Array2;
use num_complex::Complex64;

use crate::pauli::{diag2, kron2, SIGMA_0, SIGMA_X, SIGMA_Y, SIGMA_Z};

/// Hopping block along +x:
///   tx = B σz⊗σ0 − (iA/2) σx⊗σz + (iα/2) σ0⊗σy
pub fn hopping_x(a: f64, b: f64, alpha: f64) -> Array2<Complex64> {
    let mass = kron2(&SIGMA_Z, &SIGMA_0) * Complex64::new(b, 0.0);
    let inter = kron2(&SIGMA_X, &SIGMA_Z) * Complex64::new(0.0, -a / 2.0);
    let spin = kron2(&SIGMA_0, &SIGMA_Y) * Complex64::new(0.0, alpha / 2.0);
    mass + inter + spin
}

/// Hopping block along +y:
///   ty = B σz⊗σ0 + (iA/2) σy⊗σ0 − (iα/2) σz⊗σx
pub fn hopping_y(a: f64, b: f64, alpha: f64) -> Array2<Complex64> {
    let mass = kron2(&SIGMA_Z, &SIGMA_0) * Complex64::new(b, 0.0);
    let inter = kron2(&SIGMA_Y, &SIGMA_0) * Complex64::new(0.0, a / 2.0);
    let spin = kron2(&SIGMA_Z, &SIGMA_X) * Complex64::new(0.0, -alpha / 2.0);
    mass + inter + spin
}

/// Onsite block for one vertex:
///   (Δ − 4B) σz⊗σ0 + σ0⊗diag(ws, wp)
///
/// which is `diag(Δ−4B+ws, Δ−4B+wp, −(Δ−4B)+ws, −(Δ−4B)+wp)`.
pub fn onsite_block(delta: f64, b: f64, ws: f64, wp: f64) -> Array2<Complex64> {
    let mass = kron2(&SIGMA_Z, &SIGMA_0) * Complex64::new(delta - 4.0 * b, 0.0);
    let field = kron2(&SIGMA_0, &diag2(ws, wp));
    mass + field
}
