// SPDX-License-Identifier: AGPL-3.0-only

//! Four-band (BHZ) real-space Hamiltonian.
//!
//! H = ⊕ᵢ onsite(ws[i], wp[i]) + (T + T†), where
//!   T = M₊ₓ⊗tx + M₋ₓ⊗tx† + M₊ᵧ⊗ty + M₋ᵧ⊗ty†
//! and M_d is the directed adjacency of bonds classified as direction d.
//! The adjacency matrices only record stored edge directions; adding T†
//! supplies the reverse hops, so H is Hermitian however edges are stored.
//!
//! Basis ordering: index `4·i + o` is orbital `o` of vertex `i`.

use ndarray::linalg::kron;
use ndarray::{s, Array2};
use num_complex::Complex64;

use crate::blocks::{hopping_x, hopping_y, onsite_block};
use crate::classify::classify_edges;
use crate::error::Result;
use crate::lattice::Lattice;
use crate::linalg::{dagger, embed_real, hermiticity_defect};
use crate::params::BhzParams;

/// Orbitals per vertex.
pub const N_ORBITALS: usize = 4;

/// Assemble the dense `4n × 4n` BHZ Hamiltonian.
///
/// # Errors
/// - [`TopoError::ShapeMismatch`](crate::TopoError::ShapeMismatch) if `ws`
///   or `wp` is a per-vertex array of the wrong length.
/// - [`TopoError::InvalidLattice`](crate::TopoError::InvalidLattice) for an
///   inconsistent lattice.
/// - [`TopoError::GeometryAssumptionViolated`](crate::TopoError::GeometryAssumptionViolated)
///   under a strict geometry policy.
pub fn build_four_band_hamiltonian(
    lattice: &Lattice,
    params: &BhzParams,
) -> Result<Array2<Complex64>> {
    let n = lattice.n_vertices();
    let ws = params.ws.resolve(n, "ws")?;
    let wp = params.wp.resolve(n, "wp")?;
    lattice.validate()?;

    let tx = hopping_x(params.a, params.b, params.alpha);
    let ty = hopping_y(params.a, params.b, params.alpha);
    let adj = classify_edges(lattice, params.geometry)?;

    let mut hopping = kron(&embed_real(&adj.x_plus), &tx);
    hopping += &kron(&embed_real(&adj.x_minus), &dagger(&tx));
    hopping += &kron(&embed_real(&adj.y_plus), &ty);
    hopping += &kron(&embed_real(&adj.y_minus), &dagger(&ty));
    let mut h = &hopping + &dagger(&hopping);

    for (i, (&s_energy, &p_energy)) in ws.iter().zip(wp.iter()).enumerate() {
        let block = onsite_block(params.delta, params.b, s_energy, p_energy);
        let lo = N_ORBITALS * i;
        let mut slot = h.slice_mut(s![lo..lo + N_ORBITALS, lo..lo + N_ORBITALS]);
        slot += &block;
    }

    tracing::debug!(
        n_vertices = n,
        dim = h.nrows(),
        hermiticity_defect = hermiticity_defect(&h),
        "assembled four-band Hamiltonian"
    );
    Ok(h)
}
