//! Primitive types shared by all the color models.

use bitflags::bitflags;

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Return the components as an array, in order.
    pub fn to_array(&self) -> [Component; 3] {
        [self.0, self.1, self.2]
    }

    /// Returns true if none of the components are NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite()
    }
}

impl std::fmt::Display for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

bitflags! {
    /// Marks the channels of an RGB color that were outside [0..1] and had
    /// to be clipped.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ClipFlags : u8 {
        /// Set when the red channel was clipped.
        const RED = 1 << 0;
        /// Set when the green channel was clipped.
        const GREEN = 1 << 1;
        /// Set when the blue channel was clipped.
        const BLUE = 1 << 2;
    }
}
