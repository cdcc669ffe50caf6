//! Command-line argument definitions and parsers.

use std::path::PathBuf;

use chromix::{Component, Lab, PaintEntry, Rgb8};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "chromix-mixer")]
#[command(author, version, about = "Mix paint colors, or find the proportions that match a color", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log filter in env_logger syntax, e.g. "debug" or "chromix=trace"
    /// (defaults to RUST_LOG, then "warn")
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// When to color log output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print the snapshot record as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Save the snapshot record to a timestamped JSON file in the current
    /// directory
    #[arg(long, global = true)]
    pub save: bool,

    /// Save the snapshot record to this path (implies --save)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mix Lab colors weighted by ratio and strength
    Mix {
        /// A paint as "L,a,b[:ratio[:strength]]", repeat for every paint
        /// (default: two paints of Lab(50, 0, 0))
        #[arg(short, long = "paint", value_parser = parse_paint_entry)]
        paints: Vec<PaintEntry>,
    },
    /// Find the proportions of RGB paints that best reproduce a target
    Solve {
        /// A paint as a "#rrggbb" hex color, repeat for every paint
        /// (default: #ff0000 and #00ff00)
        #[arg(short, long = "paint", value_parser = parse_rgb8)]
        paints: Vec<Rgb8>,

        /// The color to reproduce
        #[arg(short, long, value_parser = parse_rgb8, default_value = "#808080")]
        target: Rgb8,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorChoice {
    pub fn to_write_style(self) -> env_logger::WriteStyle {
        match self {
            ColorChoice::Auto => env_logger::WriteStyle::Auto,
            ColorChoice::Always => env_logger::WriteStyle::Always,
            ColorChoice::Never => env_logger::WriteStyle::Never,
        }
    }
}

pub const DEFAULT_PAINT: PaintEntry = PaintEntry {
    color: Lab {
        lightness: 50.0,
        a: 0.0,
        b: 0.0,
    },
    ratio: 1.0,
    strength: 1.0,
};

pub const DEFAULT_SOLVE_PAINTS: [Rgb8; 2] = [Rgb8::new(255, 0, 0), Rgb8::new(0, 255, 0)];

/// Parse "L,a,b", "L,a,b:ratio" or "L,a,b:ratio:strength".
pub fn parse_paint_entry(s: &str) -> Result<PaintEntry, String> {
    let mut parts = s.split(':');

    let lab = parts.next().unwrap_or_default();
    let coords = lab
        .split(',')
        .map(|v| parse_number(v, "Lab coordinate"))
        .collect::<Result<Vec<_>, _>>()?;
    let [lightness, a, b] = coords[..] else {
        return Err(format!(
            "expected three Lab coordinates \"L,a,b\", got \"{lab}\""
        ));
    };

    let ratio = parts
        .next()
        .map(|v| parse_number(v, "ratio"))
        .transpose()?
        .unwrap_or(DEFAULT_PAINT.ratio);
    let strength = parts
        .next()
        .map(|v| parse_number(v, "strength"))
        .transpose()?
        .unwrap_or(DEFAULT_PAINT.strength);

    if parts.next().is_some() {
        return Err(format!(
            "expected \"L,a,b[:ratio[:strength]]\", got \"{s}\""
        ));
    }

    Ok(PaintEntry::new(Lab::new(lightness, a, b), ratio, strength))
}

fn parse_number(s: &str, what: &str) -> Result<Component, String> {
    s.trim()
        .parse::<Component>()
        .map_err(|e| format!("invalid {what} \"{s}\": {e}"))
}

pub fn parse_rgb8(s: &str) -> Result<Rgb8, String> {
    Rgb8::from_hex(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_with_defaults() {
        let paint = parse_paint_entry("50,0,0").unwrap();
        assert_eq!(paint, DEFAULT_PAINT);
    }

    #[test]
    fn paint_with_ratio_and_strength() {
        let paint = parse_paint_entry("72.5, -10, 33:4:0.3").unwrap();
        assert_eq!(paint.color, Lab::new(72.5, -10.0, 33.0));
        assert_eq!(paint.ratio, 4.0);
        assert_eq!(paint.strength, 0.3);

        let paint = parse_paint_entry("0,0,0:7").unwrap();
        assert_eq!(paint.ratio, 7.0);
        assert_eq!(paint.strength, 1.0);
    }

    #[test]
    fn reject_malformed_paints() {
        for s in ["", "50,0", "50,0,0,0", "a,b,c", "50,0,0:x", "50,0,0:1:1:1"] {
            assert!(parse_paint_entry(s).is_err(), "{s}");
        }
    }

    #[test]
    fn hex_paints() {
        assert_eq!(parse_rgb8("#808080").unwrap(), Rgb8::new(128, 128, 128));
        assert!(parse_rgb8("#80808").is_err());
    }

    #[test]
    fn command_line() {
        let args = Args::try_parse_from([
            "chromix-mixer",
            "solve",
            "-p",
            "#ff0000",
            "-p",
            "#ffff00",
            "--target",
            "#80ff00",
            "--json",
        ])
        .unwrap();

        assert!(args.json);
        match args.command {
            Command::Solve { paints, target } => {
                assert_eq!(paints, vec![Rgb8::new(255, 0, 0), Rgb8::new(255, 255, 0)]);
                assert_eq!(target, Rgb8::new(128, 255, 0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
