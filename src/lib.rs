//! chromix mixes paint colors: a weighted average in the CIE-Lab space, and
//! a least-squares estimate of the proportions of RGB paints that reproduce
//! a target color.
//!
//! ```rust
//! use chromix::{mix, to_hex, to_rgb, Lab};
//! let result = mix(
//!     &[Lab::new(100.0, 0.0, 0.0), Lab::new(0.0, 0.0, 0.0)],
//!     &[1.0, 1.0],
//!     &[1.0, 1.0],
//! )
//! .unwrap();
//! assert_eq!(to_hex(&to_rgb(&result.color)), "#767676");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod math;
mod mix;
pub mod models;
mod record;
mod solve;

pub use color::{ClipFlags, Component, Components};
pub use convert::{to_hex, to_int8, to_rgb, to_rgb_clipped};
pub use error::MixError;
pub use mix::{mix, mix_entries, MixResult, PaintEntry};
pub use models::{Lab, Rgb8, Srgb, SrgbLinear};
pub use record::{
    DesiredColorRecord, InputColorRecord, MixRecord, MixedColorRecord, ProportionEntryRecord,
    ProportionRecord,
};
pub use solve::{solve, solve_rgb8, ProportionSolver};
