//! Least-squares estimation of the proportions in which a set of paints
//! approximate a target color.
//!
//! The paints are stacked as the rows of an M×3 matrix, and that stack is
//! transposed before solving, so every paint becomes a column of `A` and the
//! system solved is `A x = t`. The solution is the minimum-norm least-squares
//! one, computed from a singular value decomposition, and is then scaled to
//! sum to 1.
//!
//! There is no non-negativity constraint. Proportions below 0 or above 1 are
//! part of the result and mean the target lies outside what the paints can
//! produce by mixing.

use nalgebra::{DMatrix, DVector};

use crate::{
    color::Component,
    error::MixError,
    models::{Rgb8, Srgb},
};

/// Solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProportionSolver {
    /// Singular values at or below `rcond * largest_singular_value` are
    /// treated as zero. `None` uses `machine_epsilon * max(3, paints)`.
    pub rcond: Option<Component>,
    /// A raw solution whose sum is within this distance of zero cannot be
    /// normalized.
    pub zero_sum_epsilon: Component,
}

impl Default for ProportionSolver {
    fn default() -> Self {
        Self {
            rcond: None,
            zero_sum_epsilon: 1.0e-10,
        }
    }
}

impl ProportionSolver {
    /// Find the proportions of `paints` whose mix best approximates `target`.
    /// The result has one proportion per paint, and sums to 1.
    pub fn solve(&self, paints: &[Srgb], target: &Srgb) -> Result<Vec<Component>, MixError> {
        if paints.is_empty() {
            return Err(MixError::InvalidInput(
                "at least one paint is needed to match a color".to_string(),
            ));
        }

        if let Some(index) = paints
            .iter()
            .position(|p| !p.to_components().is_finite())
        {
            return Err(MixError::InvalidInput(format!(
                "paint {} has a non-finite color",
                index + 1
            )));
        }

        if !target.to_components().is_finite() {
            return Err(MixError::InvalidInput(
                "the target has a non-finite color".to_string(),
            ));
        }

        if let Some(rcond) = self.rcond {
            if rcond.is_nan() || rcond < 0.0 {
                return Err(MixError::InvalidInput(format!(
                    "rcond must be a non-negative number, got {rcond}"
                )));
            }
        }

        let stacked = DMatrix::from_fn(paints.len(), 3, |row, col| {
            paints[row].to_components().to_array()[col]
        });
        let a = stacked.transpose();
        let t = DVector::from_column_slice(&target.to_components().to_array());

        let svd = a.svd(true, true);
        let largest = svd
            .singular_values
            .iter()
            .copied()
            .fold(0.0, Component::max);
        let rcond = self
            .rcond
            .unwrap_or(Component::EPSILON * paints.len().max(3) as Component);
        let cutoff = rcond * largest;

        log::trace!(
            "singular values {:?}, cutoff {}",
            svd.singular_values.as_slice(),
            cutoff
        );

        let raw = svd
            .solve(&t, cutoff)
            .map_err(|e| MixError::InvalidInput(e.to_string()))?;

        let sum = raw.sum();
        if !sum.is_finite() || sum.abs() <= self.zero_sum_epsilon {
            return Err(MixError::DegenerateSolution { sum });
        }

        let proportions = raw.iter().map(|x| x / sum).collect::<Vec<_>>();

        log::debug!(
            "solved {} paint proportions: {:?}",
            paints.len(),
            proportions
        );

        Ok(proportions)
    }
}

/// Solve with the default [`ProportionSolver`].
pub fn solve(paints: &[Srgb], target: &Srgb) -> Result<Vec<Component>, MixError> {
    ProportionSolver::default().solve(paints, target)
}

/// Solve with the default [`ProportionSolver`] for 8-bit colors.
pub fn solve_rgb8(paints: &[Rgb8], target: &Rgb8) -> Result<Vec<Component>, MixError> {
    let paints = paints.iter().map(|&p| Srgb::from(p)).collect::<Vec<_>>();
    solve(&paints, &Srgb::from(*target))
}
