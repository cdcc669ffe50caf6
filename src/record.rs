//! Snapshot records of a mix or a proportion solve, in the shape they are
//! exported as JSON.

use serde::{Deserialize, Serialize};

use crate::{
    color::Component,
    convert::{to_int8, to_rgb},
    error::MixError,
    mix::{MixResult, PaintEntry},
    models::{Lab, Rgb8},
};

/// A paint that went into a mix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputColorRecord {
    /// The color as `Lab(L, a, b)` text.
    #[serde(rename = "Lab")]
    pub lab: String,
    /// The 8-bit color as `RGB(r, g, b)` text.
    #[serde(rename = "RGB")]
    pub rgb: String,
    /// The color as `#rrggbb`.
    #[serde(rename = "HEX")]
    pub hex: String,
    /// The relative amount of the paint.
    pub ratio: Component,
    /// The potency of the paint.
    pub strength: Component,
}

/// The color that came out of a mix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixedColorRecord {
    /// The color as `Lab(L, a, b)` text.
    #[serde(rename = "Lab")]
    pub lab: String,
    /// The 8-bit color as `RGB(r, g, b)` text.
    #[serde(rename = "RGB")]
    pub rgb: String,
    /// The color as `#rrggbb`.
    #[serde(rename = "HEX")]
    pub hex: String,
}

/// Everything needed to reproduce a weighted Lab mix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixRecord {
    /// How many paints went into the mix.
    pub number_of_colors: usize,
    /// The paints, in input order.
    pub input_colors: Vec<InputColorRecord>,
    /// The result of the mix.
    pub mixed_color: MixedColorRecord,
}

impl MixRecord {
    /// Build the record for `entries` mixed into `result`.
    pub fn new(entries: &[PaintEntry], result: &MixResult<Lab>) -> Self {
        let input_colors = entries
            .iter()
            .map(|entry| {
                let rgb = to_int8(&to_rgb(&entry.color));
                InputColorRecord {
                    lab: entry.color.to_string(),
                    rgb: rgb.to_string(),
                    hex: rgb.to_hex(),
                    ratio: entry.ratio,
                    strength: entry.strength,
                }
            })
            .collect::<Vec<_>>();

        let mixed = to_int8(&to_rgb(&result.color));

        Self {
            number_of_colors: entries.len(),
            input_colors,
            mixed_color: MixedColorRecord {
                lab: format!("{:.2}", result.color),
                rgb: mixed.to_string(),
                hex: mixed.to_hex(),
            },
        }
    }

    /// Pretty printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// The color a proportion solve aims for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesiredColorRecord {
    /// The 8-bit channels.
    #[serde(rename = "RGB")]
    pub rgb: [u8; 3],
    /// The color as `#rrggbb`.
    #[serde(rename = "HEX")]
    pub hex: String,
}

/// One paint and its share of a solved mix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProportionEntryRecord {
    /// A label for the paint, numbered from 1.
    #[serde(rename = "Paint")]
    pub paint: String,
    /// The 8-bit channels.
    #[serde(rename = "RGB")]
    pub rgb: [u8; 3],
    /// The color as `#rrggbb`.
    #[serde(rename = "HEX")]
    pub hex: String,
    /// The share of the paint in percent. May be negative or above 100.
    #[serde(rename = "Proportion (%)")]
    pub percentage: Component,
}

/// Everything needed to reproduce a proportion solve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProportionRecord {
    /// The target of the solve.
    #[serde(rename = "Desired Color")]
    pub desired_color: DesiredColorRecord,
    /// One entry per paint, in input order.
    pub proportions: Vec<ProportionEntryRecord>,
}

impl ProportionRecord {
    /// Build the record for `paints` solved towards `target`, with one value
    /// in `proportions` per paint.
    pub fn new(
        paints: &[Rgb8],
        target: &Rgb8,
        proportions: &[Component],
    ) -> Result<Self, MixError> {
        if paints.len() != proportions.len() {
            return Err(MixError::InvalidInput(format!(
                "{} paints and {} proportions do not match up",
                paints.len(),
                proportions.len()
            )));
        }

        Ok(Self {
            desired_color: DesiredColorRecord {
                rgb: target.to_array(),
                hex: target.to_hex(),
            },
            proportions: paints
                .iter()
                .zip(proportions)
                .enumerate()
                .map(|(i, (paint, proportion))| ProportionEntryRecord {
                    paint: format!("Paint {}", i + 1),
                    rgb: paint.to_array(),
                    hex: paint.to_hex(),
                    percentage: proportion * 100.0,
                })
                .collect(),
        })
    }

    /// Pretty printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
