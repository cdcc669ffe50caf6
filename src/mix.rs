//! Weighted mixing of paints in the Lab color space.
//!
//! Each paint contributes with a weight proportional to `ratio * strength`.
//! The strength scales a paint's influence on the mix; it never changes the
//! paint's own color.

use crate::{
    color::Component,
    error::MixError,
    math::weighted_sum,
    models::Lab,
};

/// One ingredient of a mix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintEntry {
    /// The color of the paint.
    pub color: Lab,
    /// The relative amount of the paint. Must not be negative.
    pub ratio: Component,
    /// The potency of the paint, in [0..1].
    pub strength: Component,
}

impl PaintEntry {
    /// Create a new entry.
    pub fn new(color: Lab, ratio: Component, strength: Component) -> Self {
        Self {
            color,
            ratio,
            strength,
        }
    }

    /// The ratio scaled by the strength, before normalization.
    pub fn adjusted_ratio(&self) -> Component {
        self.ratio * self.strength
    }
}

/// The outcome of a mix: the resulting color and the normalized weight of
/// each input, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct MixResult<C> {
    /// The mixed color.
    pub color: C,
    /// One weight per input. The weights sum to 1.
    pub weights: Vec<Component>,
}

/// Mix `paints` using the matching `ratios` and `strengths`.
///
/// All three slices must have the same, non-zero, length.
pub fn mix(
    paints: &[Lab],
    ratios: &[Component],
    strengths: &[Component],
) -> Result<MixResult<Lab>, MixError> {
    if paints.is_empty() {
        return Err(MixError::InvalidInput("no paints to mix".to_string()));
    }

    if ratios.len() != paints.len() || strengths.len() != paints.len() {
        return Err(MixError::InvalidInput(format!(
            "{} paints, {} ratios and {} strengths do not match up",
            paints.len(),
            ratios.len(),
            strengths.len()
        )));
    }

    let entries = paints
        .iter()
        .zip(ratios)
        .zip(strengths)
        .map(|((&color, &ratio), &strength)| PaintEntry::new(color, ratio, strength))
        .collect::<Vec<_>>();

    mix_entries(&entries)
}

/// Mix a list of paint entries.
pub fn mix_entries(entries: &[PaintEntry]) -> Result<MixResult<Lab>, MixError> {
    if entries.is_empty() {
        return Err(MixError::InvalidInput("no paints to mix".to_string()));
    }

    for (index, entry) in entries.iter().enumerate() {
        validate(index, entry)?;
    }

    let adjusted = entries
        .iter()
        .map(PaintEntry::adjusted_ratio)
        .collect::<Vec<_>>();
    let total: Component = adjusted.iter().sum();

    if !total.is_finite() {
        return Err(MixError::InvalidInput(format!(
            "adjusted ratios add up to {total}, which is too large to normalize"
        )));
    }

    if total == 0.0 {
        return Err(MixError::DegenerateInput);
    }

    let weights = adjusted.iter().map(|a| a / total).collect::<Vec<_>>();

    let color = Lab::new(
        weighted_sum(&weights, entries.iter().map(|e| e.color.lightness)),
        weighted_sum(&weights, entries.iter().map(|e| e.color.a)),
        weighted_sum(&weights, entries.iter().map(|e| e.color.b)),
    );

    log::debug!("mixed {} paints into {:.2}", entries.len(), color);
    log::trace!("mix weights: {:?}", weights);

    Ok(MixResult { color, weights })
}

fn validate(index: usize, entry: &PaintEntry) -> Result<(), MixError> {
    let paint = index + 1;

    if !entry.color.to_components().is_finite() {
        return Err(MixError::InvalidInput(format!(
            "paint {paint} has a non-finite color {}",
            entry.color
        )));
    }

    if !entry.ratio.is_finite() || entry.ratio < 0.0 {
        return Err(MixError::InvalidInput(format!(
            "paint {paint} has ratio {}, expected a finite value >= 0",
            entry.ratio
        )));
    }

    if !(0.0..=1.0).contains(&entry.strength) {
        return Err(MixError::InvalidInput(format!(
            "paint {paint} has strength {}, expected a value in [0, 1]",
            entry.strength
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn single_paint_is_unchanged() {
        let paint = Lab::new(50.0, 0.0, 0.0);
        let result = mix(&[paint], &[1.0], &[1.0]).unwrap();
        assert_eq!(result.color, paint);
        assert_eq!(result.weights, vec![1.0]);
    }

    #[test]
    fn single_weak_paint_is_unchanged() {
        let paint = Lab::new(62.5, -17.0, 33.3);
        let result = mix(&[paint], &[7.0], &[0.3]).unwrap();
        assert_eq!(result.color, paint);
        assert_eq!(result.weights, vec![1.0]);
    }

    #[test]
    fn black_and_white_make_gray() {
        let result = mix(
            &[Lab::new(100.0, 0.0, 0.0), Lab::new(0.0, 0.0, 0.0)],
            &[1.0, 1.0],
            &[1.0, 1.0],
        )
        .unwrap();

        assert_eq!(result.color, Lab::new(50.0, 0.0, 0.0));
        assert_eq!(result.weights, vec![0.5, 0.5]);
    }

    #[test]
    fn strength_scales_influence() {
        let result = mix(
            &[Lab::new(80.0, 40.0, -20.0), Lab::new(20.0, -10.0, 60.0)],
            &[2.0, 1.0],
            &[0.5, 1.0],
        )
        .unwrap();

        // Both adjusted ratios are 1.
        assert_eq!(result.weights, vec![0.5, 0.5]);
        assert_component_eq!(result.color.lightness, 50.0);
        assert_component_eq!(result.color.a, 15.0);
        assert_component_eq!(result.color.b, 20.0);
    }

    #[test]
    fn weights_follow_ratios() {
        let result = mix(
            &[
                Lab::new(90.0, 0.0, 0.0),
                Lab::new(30.0, 60.0, 0.0),
                Lab::new(40.0, 0.0, -60.0),
            ],
            &[1.0, 2.0, 5.0],
            &[1.0, 1.0, 0.2],
        )
        .unwrap();

        // Adjusted: 1, 2, 1.
        assert_component_eq!(result.weights[0], 0.25, epsilon = 1.0e-12);
        assert_component_eq!(result.weights[1], 0.5, epsilon = 1.0e-12);
        assert_component_eq!(result.weights[2], 0.25, epsilon = 1.0e-12);
        assert_component_eq!(result.color.lightness, 47.5);
        assert_component_eq!(result.color.a, 30.0);
        assert_component_eq!(result.color.b, -15.0);
    }

    #[test]
    fn weights_always_sum_to_one() {
        let paints = [
            Lab::new(10.0, 20.0, 30.0),
            Lab::new(40.0, -50.0, 60.0),
            Lab::new(70.0, 80.0, -90.0),
            Lab::new(100.0, 0.0, 0.0),
            Lab::new(25.0, -128.0, 127.0),
            Lab::new(55.0, 5.0, -5.0),
        ];

        for ratios in [
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            [10.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            [0.001, 7.0, 0.0, 3.5, 9.0, 1.0],
        ] {
            for strengths in [
                [1.0; 6],
                [0.1, 0.2, 0.3, 0.4, 0.5, 0.6],
                [0.7, 0.0, 1.0, 0.9, 0.3, 0.1],
            ] {
                let result = mix(&paints, &ratios, &strengths).unwrap();
                let sum: Component = result.weights.iter().sum();
                assert_component_eq!(sum, 1.0, epsilon = 1.0e-9);
                assert!(result.weights.iter().all(|w| *w >= 0.0));
            }
        }
    }

    #[test]
    fn zero_ratios_are_degenerate() {
        let paints = [Lab::new(100.0, 0.0, 0.0), Lab::new(0.0, 0.0, 0.0)];
        assert_eq!(
            mix(&paints, &[0.0, 0.0], &[1.0, 1.0]),
            Err(MixError::DegenerateInput)
        );
        assert_eq!(
            mix(&paints, &[1.0, 3.0], &[0.0, 0.0]),
            Err(MixError::DegenerateInput)
        );
    }

    #[test]
    fn reject_ratios_that_overflow_when_added() {
        let paints = [Lab::new(100.0, 0.0, 0.0), Lab::new(50.0, 0.0, 0.0)];
        assert!(matches!(
            mix(&paints, &[1.0e308, 1.0e308], &[1.0, 1.0]),
            Err(MixError::InvalidInput(_))
        ));

        // Large but summable ratios still mix.
        let result = mix(&paints, &[1.0e307, 1.0e307], &[1.0, 1.0]).unwrap();
        assert_eq!(result.weights, vec![0.5, 0.5]);
        assert_component_eq!(result.color.lightness, 75.0);
    }

    #[test]
    fn zero_weight_paint_does_not_contribute() {
        let result = mix(
            &[Lab::new(100.0, 0.0, 0.0), Lab::new(0.0, 50.0, 50.0)],
            &[0.0, 4.0],
            &[1.0, 1.0],
        )
        .unwrap();
        assert_eq!(result.weights, vec![0.0, 1.0]);
        assert_eq!(result.color, Lab::new(0.0, 50.0, 50.0));
    }

    #[test]
    fn reject_empty_and_mismatched_input() {
        assert!(matches!(mix(&[], &[], &[]), Err(MixError::InvalidInput(_))));
        assert!(matches!(mix_entries(&[]), Err(MixError::InvalidInput(_))));

        let paints = [Lab::new(50.0, 0.0, 0.0), Lab::new(60.0, 0.0, 0.0)];
        assert!(matches!(
            mix(&paints, &[1.0], &[1.0, 1.0]),
            Err(MixError::InvalidInput(_))
        ));
        assert!(matches!(
            mix(&paints, &[1.0, 1.0], &[1.0, 1.0, 1.0]),
            Err(MixError::InvalidInput(_))
        ));
    }

    #[test]
    fn reject_out_of_range_values() {
        let paint = Lab::new(50.0, 0.0, 0.0);

        for (ratio, strength) in [
            (-1.0, 1.0),
            (Component::NAN, 1.0),
            (Component::INFINITY, 1.0),
            (1.0, 1.5),
            (1.0, -0.1),
            (1.0, Component::NAN),
        ] {
            assert!(
                matches!(
                    mix(&[paint], &[ratio], &[strength]),
                    Err(MixError::InvalidInput(_))
                ),
                "ratio {ratio} strength {strength}"
            );
        }

        assert!(matches!(
            mix(&[Lab::new(Component::NAN, 0.0, 0.0)], &[1.0], &[1.0]),
            Err(MixError::InvalidInput(_))
        ));
    }

    #[test]
    fn adjusted_ratio() {
        let entry = PaintEntry::new(Lab::new(0.0, 0.0, 0.0), 4.0, 0.25);
        assert_eq!(entry.adjusted_ratio(), 1.0);
    }
}
