// SPDX-License-Identifier: AGPL-3.0-only

//! Lattice geometry as handed over by an external geometry generator.
//!
//! The crate never places vertices or enumerates bonds itself. It consumes
//! vertex positions, directed edges, and their (possibly minimum-image
//! wrapped) displacement vectors, and checks them for consistency.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TopoError};

/// Read-only 2D lattice: vertices, directed edges, plaquette count.
///
/// `edge_vectors[e]` is the displacement of edge `edge_indices[e] = (i, j)`,
/// geometrically `positions[j] - positions[i]` up to periodic wrapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    positions: Vec<[f64; 2]>,
    edge_indices: Vec<[usize; 2]>,
    edge_vectors: Vec<[f64; 2]>,
    #[serde(default)]
    n_plaquettes: usize,
}

impl Lattice {
    /// Build and validate a lattice.
    ///
    /// # Errors
    /// [`TopoError::InvalidLattice`] if the edge and vector counts differ,
    /// an edge references a missing vertex, or a coordinate is not finite.
    pub fn new(
        positions: Vec<[f64; 2]>,
        edge_indices: Vec<[usize; 2]>,
        edge_vectors: Vec<[f64; 2]>,
        n_plaquettes: usize,
    ) -> Result<Self> {
        let lattice = Self {
            positions,
            edge_indices,
            edge_vectors,
            n_plaquettes,
        };
        lattice.validate()?;
        Ok(lattice)
    }

    /// Parse a lattice from JSON and validate it.
    ///
    /// # Errors
    /// [`TopoError::Config`] on malformed JSON, otherwise as [`Lattice::new`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let lattice: Self = serde_json::from_str(json)?;
        lattice.validate()?;
        Ok(lattice)
    }

    /// Check the structural invariants.
    ///
    /// Deserialized lattices bypass [`Lattice::new`], so the assemblers call
    /// this again before touching any edge.
    ///
    /// # Errors
    /// [`TopoError::InvalidLattice`] describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.edge_indices.len() != self.edge_vectors.len() {
            return Err(TopoError::InvalidLattice(format!(
                "{} edge index pairs but {} edge vectors",
                self.edge_indices.len(),
                self.edge_vectors.len()
            )));
        }
        let n = self.positions.len();
        for (e, &[i, j]) in self.edge_indices.iter().enumerate() {
            if i >= n || j >= n {
                return Err(TopoError::InvalidLattice(format!(
                    "edge {e} = ({i}, {j}) references a vertex outside 0..{n}"
                )));
            }
        }
        if let Some(v) = self
            .positions
            .iter()
            .position(|p| !(p[0].is_finite() && p[1].is_finite()))
        {
            return Err(TopoError::InvalidLattice(format!(
                "vertex {v} has a non-finite position"
            )));
        }
        if let Some(e) = self
            .edge_vectors
            .iter()
            .position(|d| !(d[0].is_finite() && d[1].is_finite()))
        {
            return Err(TopoError::InvalidLattice(format!(
                "edge {e} has a non-finite displacement"
            )));
        }
        Ok(())
    }

    /// Number of vertices.
    #[must_use]
    pub fn n_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn n_edges(&self) -> usize {
        self.edge_indices.len()
    }

    /// Number of plaquettes (sets the flux quantum per unit area).
    #[must_use]
    pub const fn n_plaquettes(&self) -> usize {
        self.n_plaquettes
    }

    /// Vertex positions, indexed by vertex id.
    #[must_use]
    pub fn positions(&self) -> &[[f64; 2]] {
        &self.positions
    }

    /// Edge endpoint pairs `(i, j)`.
    #[must_use]
    pub fn edge_indices(&self) -> &[[usize; 2]] {
        &self.edge_indices
    }

    /// Edge displacement vectors, parallel to [`Lattice::edge_indices`].
    #[must_use]
    pub fn edge_vectors(&self) -> &[[f64; 2]] {
        &self.edge_vectors
    }

    /// Iterate `(edge index, (i, j), displacement)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, [usize; 2], [f64; 2])> + '_ {
        self.edge_indices
            .iter()
            .zip(&self.edge_vectors)
            .enumerate()
            .map(|(e, (&ij, &v))| (e, ij, v))
    }
}
