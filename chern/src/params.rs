// SPDX-License-Identifier: AGPL-3.0-only

//! Model parameter sets.
//!
//! Per-vertex fields are either one value broadcast to every site or an
//! explicit array; both deserialize from JSON (a number or a list).

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TopoError};

/// A per-vertex scalar field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SiteField {
    /// Same value on every vertex.
    Uniform(f64),
    /// One value per vertex, indexed by vertex id.
    PerVertex(Vec<f64>),
}

impl SiteField {
    /// Resolve to exactly `n_vertices` values.
    ///
    /// # Errors
    /// [`TopoError::ShapeMismatch`] if a `PerVertex` array has the wrong length.
    pub fn resolve(&self, n_vertices: usize, what: &'static str) -> Result<Cow<'_, [f64]>> {
        match self {
            Self::Uniform(v) => Ok(Cow::Owned(vec![*v; n_vertices])),
            Self::PerVertex(values) if values.len() == n_vertices => {
                Ok(Cow::Borrowed(values.as_slice()))
            }
            Self::PerVertex(values) => Err(TopoError::ShapeMismatch {
                what,
                expected: format!("{n_vertices} (n_vertices)"),
                found: values.len(),
            }),
        }
    }
}

impl From<f64> for SiteField {
    fn from(v: f64) -> Self {
        Self::Uniform(v)
    }
}

impl From<Vec<f64>> for SiteField {
    fn from(values: Vec<f64>) -> Self {
        Self::PerVertex(values)
    }
}

/// How the edge classifier treats bonds that are not exactly cardinal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryPolicy {
    /// Round every bond angle to the nearest cardinal bin.
    #[default]
    Round,
    /// Reject bonds further than `max_deviation` radians from their bin.
    Strict {
        /// Largest accepted |θ − θ_bin|, radians.
        max_deviation: f64,
    },
}

/// Four-band (BHZ) model parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BhzParams {
    /// Spin-orbit-like inter-orbital hopping `A`.
    pub a: f64,
    /// Intra-orbital hopping `B` (also shifts the onsite mass by −4B).
    pub b: f64,
    /// Spin-mixing term `α`.
    pub alpha: f64,
    /// Mass `Δ`.
    pub delta: f64,
    /// s-orbital onsite energy.
    pub ws: SiteField,
    /// p-orbital onsite energy.
    pub wp: SiteField,
    /// Bond-direction classification policy.
    #[serde(default)]
    pub geometry: GeometryPolicy,
}

impl BhzParams {
    /// Parameters with uniform onsite energies and [`GeometryPolicy::Round`].
    #[must_use]
    pub fn uniform(a: f64, b: f64, alpha: f64, delta: f64, ws: f64, wp: f64) -> Self {
        Self {
            a,
            b,
            alpha,
            delta,
            ws: ws.into(),
            wp: wp.into(),
            geometry: GeometryPolicy::Round,
        }
    }

    /// Parse from JSON.
    ///
    /// # Errors
    /// [`TopoError::Config`] on malformed input.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Two-band (QWZ) model parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QwzParams {
    /// Onsite mass/detuning: +u on the A orbital, −u on B.
    pub u: SiteField,
    /// Uniform flux density, in flux quanta per plaquette count.
    #[serde(default)]
    pub h_field: f64,
}

impl QwzParams {
    /// Zero-flux parameters.
    pub fn new(u: impl Into<SiteField>) -> Self {
        Self {
            u: u.into(),
            h_field: 0.0,
        }
    }

    /// Set the flux density.
    #[must_use]
    pub fn with_field(mut self, h_field: f64) -> Self {
        self.h_field = h_field;
        self
    }

    /// Parse from JSON.
    ///
    /// # Errors
    /// [`TopoError::Config`] on malformed input.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
