// SPDX-License-Identifier: AGPL-3.0-only

//! Pauli basis and the 2⊗2 Kronecker product.
//!
//! The four basis matrices are `const` arrays; [`sigma`] lifts one into an
//! `ndarray` matrix when a dense operand is needed.

use ndarray::Array2;
use num_complex::Complex64;

const O: Complex64 = Complex64::new(0.0, 0.0);
const R: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// A 2×2 complex matrix in row-major order.
pub type Mat2 = [[Complex64; 2]; 2];

/// Identity σ₀.
pub const SIGMA_0: Mat2 = [[R, O], [O, R]];
/// σₓ.
pub const SIGMA_X: Mat2 = [[O, R], [R, O]];
/// σᵧ.
pub const SIGMA_Y: Mat2 = [[O, Complex64::new(0.0, -1.0)], [I, O]];
/// σ_z.
pub const SIGMA_Z: Mat2 = [[R, O], [O, Complex64::new(-1.0, 0.0)]];

/// Dense copy of a 2×2 basis matrix.
pub fn sigma(m: &Mat2) -> Array2<Complex64> {
    Array2::from_shape_fn((2, 2), |(r, c)| m[r][c])
}

/// Diagonal 2×2 matrix `diag(a, b)`.
pub fn diag2(a: f64, b: f64) -> Mat2 {
    [
        [Complex64::new(a, 0.0), O],
        [O, Complex64::new(b, 0.0)],
    ]
}

/// Kronecker product `a ⊗ b` of two 2×2 matrices.
///
/// Entry `[2r + s, 2c + t] = a[r][c] · b[s][t]`, i.e. the first factor picks
/// the 2×2 block and the second factor fills it.
pub fn kron2(a: &Mat2, b: &Mat2) -> Array2<Complex64> {
    Array2::from_shape_fn((4, 4), |(row, col)| {
        a[row / 2][col / 2] * b[row % 2][col % 2]
    })
}
