//! Model for the CIE-Lab color space.

use crate::{
    color::{Component, Components},
    models::xyz::{ToXyz, WhitePoint, Xyz, XyzD65, D65},
};

/// δ = 6/29, the point where the Lab companding switches to its linear
/// segment.
const DELTA: Component = 6.0 / 29.0;

chromix_macros::gen_model! {
    /// A color in the CIE-Lab color space relative to a D65 reference white.
    ///
    /// Lightness ranges over [0..100]; `a` and `b` are the green-red and
    /// blue-yellow opponent axes, in practice within [-128..127].
    pub struct Lab {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

impl std::fmt::Display for Lab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "Lab({:.p$}, {:.p$}, {:.p$})",
                self.lightness,
                self.a,
                self.b,
                p = p
            ),
            None => write!(f, "Lab({}, {}, {})", self.lightness, self.a, self.b),
        }
    }
}

impl ToXyz<D65> for Lab {
    fn to_xyz(&self) -> Xyz<D65> {
        fn f_inverse(t: Component) -> Component {
            if t > DELTA {
                t * t * t
            } else {
                3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
            }
        }

        let fy = (self.lightness + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            D65::WHITE_POINT.0 * f_inverse(fx),
            D65::WHITE_POINT.1 * f_inverse(fy),
            D65::WHITE_POINT.2 * f_inverse(fz),
        )
    }
}

impl From<XyzD65> for Lab {
    fn from(value: XyzD65) -> Self {
        let adapted = Components(
            value.x / D65::WHITE_POINT.0,
            value.y / D65::WHITE_POINT.1,
            value.z / D65::WHITE_POINT.2,
        );

        let Components(fx, fy, fz) = adapted.map(|v| {
            if v > DELTA * DELTA * DELTA {
                v.cbrt()
            } else {
                v / (3.0 * DELTA * DELTA) + 4.0 / 29.0
            }
        });

        Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}
