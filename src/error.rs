//! Errors reported by the mixing operations.

use crate::color::Component;

/// Everything that can go wrong while mixing or solving. All failures are
/// deterministic for a given input, so none of them are worth retrying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MixError {
    /// Malformed arguments: empty or mismatched sequences, non-finite values,
    /// ratios or strengths out of range, unparsable hex text.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Every adjusted ratio is zero, so the weights cannot be normalized.
    #[error("all ratios or strengths are zero, weights cannot be normalized")]
    DegenerateInput,
    /// The least-squares solution sums to (almost) zero, so it cannot be
    /// normalized into proportions.
    #[error("least-squares solution sums to {sum}, proportions cannot be normalized")]
    DegenerateSolution {
        /// The sum of the raw solution.
        sum: Component,
    },
}
