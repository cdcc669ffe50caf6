//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    error::MixError,
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz, XyzD65, D65},
};

/// This trait is used to identify tags that specify gamma encoding.
pub trait Encoding {}

/// Tag for values with the sRGB transfer function applied. This is what
/// displays and hex notation expect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GammaEncoded;
impl Encoding for GammaEncoded {}

/// Tag for values proportional to light intensity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearLight;
impl Encoding for LinearLight {}

chromix_macros::gen_model! {
    /// A color specified in the sRGB color space, with components
    /// normalized to [0..1].
    pub struct Rgb<E: Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<LinearLight>;

impl Srgb {
    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        self.to_components()
            .map(|value| {
                let abs = value.abs();

                if abs <= 0.04045 {
                    value / 12.92
                } else {
                    value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
                }
            })
            .into()
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Srgb {
        self.to_components()
            .map(|value| {
                let abs = value.abs();

                if abs > 0.0031308 {
                    value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
                } else {
                    12.92 * value
                }
            })
            .into()
    }
}

impl From<XyzD65> for SrgbLinear {
    fn from(value: XyzD65) -> Self {
        #[rustfmt::skip]
        const FROM_XYZ: Transform = transform_3x3(
             3.2406, -0.9689,  0.0557,
            -1.5372,  1.8758, -0.2040,
            -0.4986,  0.0415,  1.0570,
        );

        transform(&FROM_XYZ, value.to_components()).into()
    }
}

impl ToXyz<D65> for SrgbLinear {
    fn to_xyz(&self) -> Xyz<D65> {
        #[rustfmt::skip]
        const TO_XYZ: Transform = transform_3x3(
            0.4124, 0.2126, 0.0193,
            0.3576, 0.7152, 0.1192,
            0.1805, 0.0722, 0.9505,
        );

        transform(&TO_XYZ, self.to_components()).into()
    }
}

/// An sRGB color with 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Rgb8 {
    /// Create a new 8-bit color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// The channels in order.
    pub fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Format as `#rrggbb` with lower case digits.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Parse `#rrggbb` or `rrggbb`, in either case.
    pub fn from_hex(text: &str) -> Result<Self, MixError> {
        let digits = text.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MixError::InvalidInput(format!(
                "\"{text}\" is not a #rrggbb hex color"
            )));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| MixError::InvalidInput(format!("\"{text}\": {e}")))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl std::fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RGB({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl From<Rgb8> for Srgb {
    fn from(value: Rgb8) -> Self {
        Components(
            value.red as Component,
            value.green as Component,
            value.blue as Component,
        )
        .map(|v| v / 255.0)
        .into()
    }
}
