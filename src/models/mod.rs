//! Each color space is modeled with its own type. Conversions are only
//! implemented on relevant models, making conversion paths explicit.
//!
//! ```rust
//! use chromix::models::{Lab, SrgbLinear, ToXyz};
//! let gray = SrgbLinear::from(Lab::new(50.0, 0.0, 0.0).to_xyz()).to_gamma_encoded();
//! ```

pub mod lab;
pub mod rgb;
pub mod xyz;

pub use lab::Lab;
pub use rgb::{GammaEncoded, LinearLight, Rgb, Rgb8, Srgb, SrgbLinear};
pub use xyz::{ToXyz, WhitePoint, Xyz, XyzD65, D65};
