// SPDX-License-Identifier: AGPL-3.0-only

//! hotSpring Chern — tight-binding Hamiltonians and the local Chern marker
//!
//! Builds dense real-space Hamiltonians for two lattice models and evaluates
//! the site-resolved Chern marker from an occupied-state projector. Lattice
//! generation and diagonalization are external: the crate consumes a
//! [`Lattice`] and a precomputed projector.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `pauli` | σ₀, σₓ, σᵧ, σ_z constants and 2⊗2 Kronecker products |
//! | `blocks` | BHZ hopping (`tx`, `ty`) and onsite 4×4 blocks |
//! | `classify` | Cardinal bond-direction binning and directed adjacency |
//! | `bhz` | Four-band BHZ Hamiltonian (4n × 4n) |
//! | `qwz` | Two-band QWZ Hamiltonian with Peierls flux (2n × 2n) |
//! | `marker` | Bianco–Resta local Chern marker |
//! | `lattice` | Consumed lattice geometry and its invariants |
//! | `params` | Model parameters, per-vertex fields, geometry policy |
//! | `linalg` | Conjugate transpose, Hermiticity defect |
//! | `tolerances` | Numeric thresholds |
//!
//! ## Basis convention
//!
//! Row `n_orbitals·i + o` of every Hamiltonian and projector is orbital `o`
//! of vertex `i`.
//!
//! ## Logging
//!
//! Assemblers and the marker kernel emit `tracing` events at `debug`
//! (sizes, bond histogram, Hermiticity defect). Non-cardinal bonds rounded
//! under [`GeometryPolicy::Round`] are reported at `warn`. The crate never
//! installs a subscriber.

pub mod bhz;
pub mod blocks;
pub mod classify;
pub mod error;
pub mod lattice;
pub mod linalg;
pub mod marker;
pub mod params;
pub mod pauli;
pub mod qwz;
pub mod tolerances;

pub use bhz::build_four_band_hamiltonian;
pub use classify::{classify_edges, direction_bin, DirectionalAdjacency, EdgeDirection};
pub use error::{Result, TopoError};
pub use lattice::Lattice;
pub use marker::{local_chern_marker, position_shifts, wrap_minimum_image};
pub use params::{BhzParams, GeometryPolicy, QwzParams, SiteField};
pub use qwz::{build_two_band_hamiltonian, peierls_phase};
