// SPDX-License-Identifier: AGPL-3.0-only

//! Bond-direction classification for square-like lattices.
//!
//! Each edge is binned by `round(2·atan2(vy, vx)/π) mod 4`. Ties round half
//! to even, so a bond at exactly ±45° always lands in the same bin.

use std::f64::consts::FRAC_PI_2;

use ndarray::Array2;
use rayon::prelude::*;

use crate::error::{Result, TopoError};
use crate::lattice::Lattice;
use crate::params::GeometryPolicy;
use crate::tolerances::CARDINAL_ANGLE_WARN;

/// One of the four cardinal bond directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    /// Bin 0, +x.
    XPlus,
    /// Bin 1, +y.
    YPlus,
    /// Bin 2, −x.
    XMinus,
    /// Bin 3, −y.
    YMinus,
}

impl EdgeDirection {
    /// Direction for bin `0..4`; larger values wrap.
    #[must_use]
    pub const fn from_bin(bin: usize) -> Self {
        match bin % 4 {
            0 => Self::XPlus,
            1 => Self::YPlus,
            2 => Self::XMinus,
            _ => Self::YMinus,
        }
    }

    /// Bin index `0..4`.
    #[must_use]
    pub const fn bin(self) -> usize {
        match self {
            Self::XPlus => 0,
            Self::YPlus => 1,
            Self::XMinus => 2,
            Self::YMinus => 3,
        }
    }

    /// Nearest cardinal direction of a displacement vector.
    #[must_use]
    pub fn from_vector(v: [f64; 2]) -> Self {
        Self::from_bin(direction_bin(v))
    }

    /// Canonical bond angle of this direction, in `(-π, π]`.
    #[must_use]
    pub fn angle(self) -> f64 {
        match self {
            Self::XPlus => 0.0,
            Self::YPlus => FRAC_PI_2,
            Self::XMinus => std::f64::consts::PI,
            Self::YMinus => -FRAC_PI_2,
        }
    }
}

/// `round_half_even(2·atan2(vy, vx)/π) mod 4`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // result in -2..=2
pub fn direction_bin(v: [f64; 2]) -> usize {
    let quarter_turns = (v[1].atan2(v[0]) / FRAC_PI_2).round_ties_even() as i64;
    quarter_turns.rem_euclid(4) as usize
}

/// Distance in radians between a bond angle and its bin's cardinal angle.
fn cardinal_deviation(v: [f64; 2]) -> f64 {
    let q = v[1].atan2(v[0]) / FRAC_PI_2;
    (q - q.round_ties_even()).abs() * FRAC_PI_2
}

/// Directed adjacency split by bond direction.
///
/// Each matrix is `n_vertices × n_vertices` with `1.0` at `[i, j]` for every
/// edge `(i, j)` in that bin. No symmetrization happens here.
#[derive(Clone, Debug)]
pub struct DirectionalAdjacency {
    /// Edges binned +x.
    pub x_plus: Array2<f64>,
    /// Edges binned +y.
    pub y_plus: Array2<f64>,
    /// Edges binned −x.
    pub x_minus: Array2<f64>,
    /// Edges binned −y.
    pub y_minus: Array2<f64>,
}

impl DirectionalAdjacency {
    /// Matrix for one direction.
    #[must_use]
    pub const fn get(&self, dir: EdgeDirection) -> &Array2<f64> {
        match dir {
            EdgeDirection::XPlus => &self.x_plus,
            EdgeDirection::YPlus => &self.y_plus,
            EdgeDirection::XMinus => &self.x_minus,
            EdgeDirection::YMinus => &self.y_minus,
        }
    }

    fn get_mut(&mut self, dir: EdgeDirection) -> &mut Array2<f64> {
        match dir {
            EdgeDirection::XPlus => &mut self.x_plus,
            EdgeDirection::YPlus => &mut self.y_plus,
            EdgeDirection::XMinus => &mut self.x_minus,
            EdgeDirection::YMinus => &mut self.y_minus,
        }
    }
}

/// Classify every edge of `lattice` and build the four adjacency matrices.
///
/// # Errors
/// [`TopoError::GeometryAssumptionViolated`] under [`GeometryPolicy::Strict`]
/// when a bond is off-cardinal by more than the allowed deviation or has
/// zero length.
pub fn classify_edges(lattice: &Lattice, policy: GeometryPolicy) -> Result<DirectionalAdjacency> {
    let checked: Vec<(EdgeDirection, f64)> = lattice
        .edge_vectors()
        .par_iter()
        .enumerate()
        .map(|(edge, &v)| {
            check_edge(edge, v, policy).map(|dev| (EdgeDirection::from_vector(v), dev))
        })
        .collect::<Result<_>>()?;

    if let Some((count, worst)) = off_cardinal_summary(checked.iter().map(|&(_, dev)| dev)) {
        tracing::warn!(
            count,
            worst_deviation = worst,
            "non-cardinal bonds rounded to nearest direction"
        );
    }

    let n = lattice.n_vertices();
    let mut adjacency = DirectionalAdjacency {
        x_plus: Array2::zeros((n, n)),
        y_plus: Array2::zeros((n, n)),
        x_minus: Array2::zeros((n, n)),
        y_minus: Array2::zeros((n, n)),
    };
    let mut counts = [0_usize; 4];
    for (&[i, j], &(dir, _)) in lattice.edge_indices().iter().zip(&checked) {
        adjacency.get_mut(dir)[[i, j]] = 1.0;
        counts[dir.bin()] += 1;
    }
    tracing::debug!(
        n_vertices = n,
        n_edges = lattice.n_edges(),
        x_plus = counts[0],
        y_plus = counts[1],
        x_minus = counts[2],
        y_minus = counts[3],
        "classified bonds"
    );
    Ok(adjacency)
}

/// Number of bonds off-cardinal by more than [`CARDINAL_ANGLE_WARN`] and the
/// largest deviation among them, or `None` when every bond is cardinal.
fn off_cardinal_summary(deviations: impl Iterator<Item = f64>) -> Option<(usize, f64)> {
    let (count, worst) = deviations
        .filter(|&dev| dev > CARDINAL_ANGLE_WARN)
        .fold((0_usize, 0.0_f64), |(n, w), dev| (n + 1, w.max(dev)));
    (count > 0).then_some((count, worst))
}

/// Apply `policy` to one bond; returns its angular deviation from cardinal.
fn check_edge(edge: usize, v: [f64; 2], policy: GeometryPolicy) -> Result<f64> {
    let deviation = cardinal_deviation(v);
    if let GeometryPolicy::Strict { max_deviation } = policy {
        let degenerate = v[0] == 0.0 && v[1] == 0.0;
        if degenerate || deviation > max_deviation {
            return Err(TopoError::GeometryAssumptionViolated {
                edge,
                angle: v[1].atan2(v[0]),
            });
        }
    }
    Ok(deviation)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn cardinal_vectors_classify() {
        assert_eq!(direction_bin([1.0, 0.0]), 0);
        assert_eq!(direction_bin([0.0, 1.0]), 1);
        assert_eq!(direction_bin([-1.0, 0.0]), 2);
        assert_eq!(direction_bin([0.0, -1.0]), 3);
    }

    #[test]
    fn negative_x_near_minus_pi_still_bin_two() {
        assert_eq!(direction_bin([-1.0, -1e-12]), 2);
        assert_eq!(direction_bin([-1.0, 1e-12]), 2);
    }

    #[test]
    fn short_and_long_bonds_agree() {
        assert_eq!(direction_bin([0.125, 0.0]), 0);
        assert_eq!(direction_bin([0.0, -7.0]), 3);
    }

    #[test]
    fn diagonal_ties_round_half_even() {
        // 45° is exactly half a quarter turn and rounds down to +x
        assert_eq!(direction_bin([1.0, 1.0]), 0);
        assert_eq!(direction_bin([1.0, -1.0]), 0);
    }

    #[test]
    fn slightly_tilted_bond_rounds() {
        assert_eq!(EdgeDirection::from_vector([1.0, 0.1]), EdgeDirection::XPlus);
        assert_eq!(EdgeDirection::from_vector([0.1, 1.0]), EdgeDirection::YPlus);
    }

    #[test]
    fn bin_roundtrip() {
        for b in 0..4 {
            assert_eq!(EdgeDirection::from_bin(b).bin(), b);
        }
        assert_eq!(EdgeDirection::from_bin(6), EdgeDirection::XMinus);
    }

    #[test]
    fn canonical_angles_classify_to_themselves() {
        for b in 0..4 {
            let dir = EdgeDirection::from_bin(b);
            let v = [dir.angle().cos(), dir.angle().sin()];
            assert_eq!(EdgeDirection::from_vector(v), dir);
        }
    }

    fn plus_shape() -> Lattice {
        // centre 0, neighbours +x, +y, −x, −y
        Lattice::new(
            vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [-1.0, 0.0], [0.0, -1.0]],
            vec![[0, 1], [0, 2], [0, 3], [0, 4]],
            vec![[1.0, 0.0], [0.0, 1.0], [-1.0, 0.0], [0.0, -1.0]],
            0,
        )
        .expect("valid lattice")
    }

    #[test]
    #[allow(clippy::float_cmp)] // exact 0/1 entries
    fn adjacency_is_directed_per_bin() {
        let adj = classify_edges(&plus_shape(), GeometryPolicy::Round).expect("classify");
        for (k, dir) in [
            EdgeDirection::XPlus,
            EdgeDirection::YPlus,
            EdgeDirection::XMinus,
            EdgeDirection::YMinus,
        ]
        .into_iter()
        .enumerate()
        {
            let m = adj.get(dir);
            assert_eq!(m.sum(), 1.0, "{dir:?} should hold one edge");
            assert_eq!(m[[0, k + 1]], 1.0);
            assert_eq!(m[[k + 1, 0]], 0.0, "no reverse entry before symmetrization");
        }
    }

    #[test]
    fn strict_policy_rejects_tilted_bond() {
        let l = Lattice::new(
            vec![[0.0, 0.0], [1.0, 0.2]],
            vec![[0, 1]],
            vec![[1.0, 0.2]],
            0,
        )
        .expect("valid lattice");
        let strict = GeometryPolicy::Strict { max_deviation: 1e-3 };
        match classify_edges(&l, strict) {
            Err(TopoError::GeometryAssumptionViolated { edge, angle }) => {
                assert_eq!(edge, 0);
                assert!((angle - 0.2_f64.atan()).abs() < 1e-12);
            }
            other => panic!("expected geometry violation, got {other:?}"),
        }
        assert!(classify_edges(&l, GeometryPolicy::Round).is_ok());
    }

    #[test]
    fn off_cardinal_bonds_are_summarized_once() {
        let devs = [0.0, 0.05, 1e-9, 0.2, 0.1];
        let (count, worst) = off_cardinal_summary(devs.into_iter()).expect("some tilted");
        assert_eq!(count, 3);
        assert!((worst - 0.2).abs() < 1e-15);
        assert!(off_cardinal_summary([0.0, 1e-9].into_iter()).is_none());
    }

    #[test]
    fn round_policy_reports_tilt_per_edge() {
        let dev = check_edge(0, [1.0, 0.1], GeometryPolicy::Round).expect("round accepts");
        assert!((dev - 0.1_f64.atan()).abs() < 1e-12);
    }

    #[test]
    fn strict_policy_rejects_zero_vector() {
        let l = Lattice::new(vec![[0.0, 0.0]; 2], vec![[0, 1]], vec![[0.0, 0.0]], 0)
            .expect("valid lattice");
        let strict = GeometryPolicy::Strict { max_deviation: 0.1 };
        assert!(classify_edges(&l, strict).is_err());
    }

    #[test]
    fn strict_policy_accepts_cardinal_lattice() {
        let strict = GeometryPolicy::Strict { max_deviation: 1e-9 };
        assert!(classify_edges(&plus_shape(), strict).is_ok());
    }
}
