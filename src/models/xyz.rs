//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// A reference white used to relate relative and absolute colors.
pub trait WhitePoint {
    /// The XYZ coordinates of the reference white, normalized so Y = 1.
    const WHITE_POINT: Components;
}

/// CIE standard illuminant D65, 2° observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct D65;

impl WhitePoint for D65 {
    const WHITE_POINT: Components = Components(0.95047, 1.0, 1.08883);
}

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz<W: WhitePoint> {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz<W>;
}

chromix_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a specified white point reference.
    pub struct Xyz<W: WhitePoint> {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

/// Model for a color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;
