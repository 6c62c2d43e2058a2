// SPDX-License-Identifier: AGPL-3.0-only

//! Shared fixtures: square lattices and an exact QWZ band projector.

#![allow(dead_code, clippy::expect_used)]

use std::f64::consts::TAU;

use hotspring_chern::Lattice;
use ndarray::Array2;
use num_complex::Complex64;

/// L×L square lattice in unit-cell coordinates (spacing 1/L).
///
/// Vertex id is `iy·L + ix`. Each vertex stores its +x and +y bond; with
/// `periodic` the last row/column wrap around with minimum-image vectors.
pub fn square_lattice(l: usize, periodic: bool) -> Lattice {
    let a = 1.0 / l as f64;
    let id = |ix: usize, iy: usize| iy * l + ix;
    let mut positions = Vec::with_capacity(l * l);
    let mut indices = Vec::new();
    let mut vectors = Vec::new();
    for iy in 0..l {
        for ix in 0..l {
            positions.push([ix as f64 * a, iy as f64 * a]);
            if periodic || ix + 1 < l {
                indices.push([id(ix, iy), id((ix + 1) % l, iy)]);
                vectors.push([a, 0.0]);
            }
            if periodic || iy + 1 < l {
                indices.push([id(ix, iy), id(ix, (iy + 1) % l)]);
                vectors.push([0.0, a]);
            }
        }
    }
    let n_plaquettes = if periodic { l * l } else { (l - 1) * (l - 1) };
    Lattice::new(positions, indices, vectors, n_plaquettes).expect("square lattice")
}

/// Bloch vector d(k) of the QWZ model as assembled by `build_two_band_hamiltonian`:
///   H(k) = −sin kx σx − sin ky σy + (u + cos kx + cos ky) σz
fn qwz_d(u: f64, kx: f64, ky: f64) -> [f64; 3] {
    [-kx.sin(), -ky.sin(), u + kx.cos() + ky.cos()]
}

/// Lower-band projector of the zero-flux QWZ model on the periodic L×L torus.
///
/// P(r, r') = (1/N) Σ_k e^{ik·(r−r')} ½(1 − d̂(k)·σ), built from the
/// translation-invariant kernel so the cost is O(N²).
pub fn qwz_lower_band_projector(l: usize, u: f64) -> Array2<Complex64> {
    let n = l * l;
    let norm = 1.0 / n as f64;
    let ks: Vec<f64> = (0..l).map(|m| TAU * m as f64 / l as f64).collect();

    // kernel[(dy·L + dx)] = 2×2 block for separation (dx, dy)
    let mut kernel = vec![[[Complex64::new(0.0, 0.0); 2]; 2]; n];
    for (&kx, &ky) in ks.iter().flat_map(|kx| ks.iter().map(move |ky| (kx, ky))) {
        let d = qwz_d(u, kx, ky);
        let len = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
        let (hx, hy, hz) = (d[0] / len, d[1] / len, d[2] / len);
        let q = [
            [Complex64::new(0.5 * (1.0 - hz), 0.0), Complex64::new(-0.5 * hx, 0.5 * hy)],
            [Complex64::new(-0.5 * hx, -0.5 * hy), Complex64::new(0.5 * (1.0 + hz), 0.0)],
        ];
        for sy in 0..l {
            for sx in 0..l {
                let phase = Complex64::from_polar(norm, kx * sx as f64 + ky * sy as f64);
                let block = &mut kernel[sy * l + sx];
                for o in 0..2 {
                    for p in 0..2 {
                        block[o][p] += phase * q[o][p];
                    }
                }
            }
        }
    }

    Array2::from_shape_fn((2 * n, 2 * n), |(a, b)| {
        let (i, o) = (a / 2, a % 2);
        let (j, p) = (b / 2, b % 2);
        let sx = (i % l + l - j % l) % l;
        let sy = (i / l + l - j / l) % l;
        kernel[sy * l + sx][o][p]
    })
}

/// Route `tracing` output through the test harness; `RUST_LOG` selects levels.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Max |A − B| over all entries.
pub fn max_abs_diff(a: &Array2<Complex64>, b: &Array2<Complex64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}
