//! Conversion from the perceptual Lab space to displayable sRGB, and the
//! 8-bit and hex renderings of sRGB colors.
//!
//! Out of gamut colors are clipped per channel, not mapped; the clipped
//! channels can be inspected with [`to_rgb_clipped`].

use crate::{
    color::{ClipFlags, Component},
    models::{Lab, Rgb8, Srgb, SrgbLinear, ToXyz},
};

/// Convert a Lab color to sRGB with every channel clamped to [0..1].
pub fn to_rgb(color: &Lab) -> Srgb {
    to_rgb_clipped(color).0
}

/// Convert a Lab color to sRGB with every channel clamped to [0..1], and
/// report which channels were outside that range.
pub fn to_rgb_clipped(color: &Lab) -> (Srgb, ClipFlags) {
    let srgb = SrgbLinear::from(color.to_xyz()).to_gamma_encoded();

    let mut flags = ClipFlags::empty();
    let mut clip = |value: Component, flag: ClipFlags| {
        // `clamp` passes NaN through.
        if value.is_nan() {
            flags |= flag;
            return 0.0;
        }
        if !(0.0..=1.0).contains(&value) {
            flags |= flag;
        }
        value.clamp(0.0, 1.0)
    };

    let clipped = Srgb::new(
        clip(srgb.red, ClipFlags::RED),
        clip(srgb.green, ClipFlags::GREEN),
        clip(srgb.blue, ClipFlags::BLUE),
    );

    if !flags.is_empty() {
        log::debug!(
            "{} is out of the sRGB gamut, clipped {:?} from {}",
            color,
            flags,
            srgb.to_components()
        );
    }

    (clipped, flags)
}

/// Convert to 8 bits per channel, truncating `component * 255`.
pub fn to_int8(color: &Srgb) -> Rgb8 {
    let channel = |value: Component| (value * 255.0).floor().clamp(0.0, 255.0) as u8;
    Rgb8::new(channel(color.red), channel(color.green), channel(color.blue))
}

/// Format as `#rrggbb`, with each channel truncated like [`to_int8`].
pub fn to_hex(color: &Srgb) -> String {
    to_int8(color).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn mid_gray() {
        let (srgb, flags) = to_rgb_clipped(&Lab::new(50.0, 0.0, 0.0));
        assert_component_eq!(srgb.red, 0.46632714016742266, epsilon = 1.0e-9);
        assert_component_eq!(srgb.green, 0.46634313106057707, epsilon = 1.0e-9);
        assert_component_eq!(srgb.blue, 0.4662906553443153, epsilon = 1.0e-9);
        assert!(flags.is_empty());
        assert_eq!(to_hex(&srgb), "#767676");
    }

    #[test]
    fn white_is_clipped_by_the_matrix_rounding() {
        let (srgb, flags) = to_rgb_clipped(&Lab::new(100.0, 0.0, 0.0));
        assert_eq!(srgb.red, 1.0);
        assert_eq!(srgb.green, 1.0);
        assert_component_eq!(srgb.blue, 0.9999272406103893, epsilon = 1.0e-9);
        assert_eq!(flags, ClipFlags::RED | ClipFlags::GREEN);
        assert_eq!(to_hex(&srgb), "#fffffe");
    }

    #[test]
    fn black() {
        let (srgb, flags) = to_rgb_clipped(&Lab::new(0.0, 0.0, 0.0));
        assert_eq!(to_int8(&srgb), Rgb8::new(0, 0, 0));
        assert!(flags.is_empty());
    }

    #[test]
    fn saturated_colors() {
        let cases = [
            (Lab::new(50.0, 80.0, 0.0), "#e8007a", ClipFlags::GREEN),
            (Lab::new(75.0, -20.0, 40.0), "#adc16d", ClipFlags::empty()),
            (Lab::new(60.0, 0.0, -60.0), "#0096fa", ClipFlags::RED),
        ];

        for (lab, hex, expected_flags) in cases {
            let (srgb, flags) = to_rgb_clipped(&lab);
            assert_eq!(to_hex(&srgb), hex, "{lab}");
            assert_eq!(flags, expected_flags, "{lab}");
        }
    }

    #[test]
    fn output_is_always_in_range() {
        for lightness in [0.0, 10.0, 35.0, 60.0, 85.0, 100.0] {
            for a in [-128.0, -64.0, 0.0, 64.0, 127.0] {
                for b in [-128.0, -64.0, 0.0, 64.0, 127.0] {
                    let srgb = to_rgb(&Lab::new(lightness, a, b));
                    for value in srgb.to_components().to_array() {
                        assert!((0.0..=1.0).contains(&value), "{lightness} {a} {b}");
                    }
                }
            }
        }
    }

    #[test]
    fn nan_is_clipped_to_zero() {
        let (srgb, flags) = to_rgb_clipped(&Lab::new(Component::NAN, 0.0, 0.0));
        assert_eq!(srgb.to_components().to_array(), [0.0, 0.0, 0.0]);
        assert_eq!(flags, ClipFlags::all());
    }

    #[test]
    fn int8_truncates() {
        let srgb = Srgb::new(0.999, 0.5, 1.0 / 255.0 - 1.0e-12);
        assert_eq!(to_int8(&srgb), Rgb8::new(254, 127, 0));
        assert_eq!(to_hex(&srgb), "#fe7f00");
    }

    #[test]
    fn int8_clamps() {
        assert_eq!(to_int8(&Srgb::new(-0.5, 1.5, 1.0)), Rgb8::new(0, 255, 255));
    }

    #[test]
    fn hex_is_idempotent() {
        for lab in [
            Lab::new(50.0, 0.0, 0.0),
            Lab::new(32.3, 79.2, -107.9),
            Lab::new(87.7, -86.2, 83.2),
            Lab::new(66.6, 12.0, 45.0),
            Lab::new(100.0, 0.0, 0.0),
        ] {
            let hex = to_hex(&to_rgb(&lab));
            let reparsed = Srgb::from(Rgb8::from_hex(&hex).unwrap());
            assert_eq!(to_hex(&reparsed), hex);
        }
    }

    #[test]
    fn round_trip_through_srgb() {
        for lab in [
            Lab::new(50.0, 0.0, 0.0),
            Lab::new(75.0, -20.0, 40.0),
            Lab::new(40.0, 30.0, -20.0),
        ] {
            let srgb = to_rgb(&lab);
            let back = Lab::from(srgb.to_linear_light().to_xyz());
            assert_component_eq!(back.lightness, lab.lightness, epsilon = 1.0e-2);
            assert_component_eq!(back.a, lab.a, epsilon = 1.0e-2);
            assert_component_eq!(back.b, lab.b, epsilon = 1.0e-2);
        }
    }
}
