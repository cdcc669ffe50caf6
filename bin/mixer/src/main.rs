//! chromix-mixer - mix paint colors from the command line.
//!
//! `mix` blends Lab paints weighted by ratio and strength. `solve` finds the
//! proportions of RGB paints that best reproduce a target color. Both can
//! export a JSON snapshot of the inputs and the result.

mod args;
mod logging;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use args::{Args, Command, DEFAULT_PAINT, DEFAULT_SOLVE_PAINTS};
use chromix::{
    mix_entries, solve_rgb8, to_int8, to_rgb_clipped, MixRecord, PaintEntry,
    ProportionEntryRecord, ProportionRecord, Rgb8, Srgb,
};
use clap::Parser;
use logging::{init_logging, LoggingConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        write_style: args.color.to_write_style(),
    });

    let (json, prefix) = match &args.command {
        Command::Mix { paints } => run_mix(paints, args.json)?,
        Command::Solve { paints, target } => run_solve(paints, target, args.json)?,
    };

    let path = match (&args.output, args.save) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(timestamped_path(prefix)?),
        (None, false) => None,
    };

    if let Some(path) = path {
        std::fs::write(&path, json)
            .with_context(|| format!("could not write {}", path.display()))?;
        eprintln!("saved to {}", path.display());
    }

    Ok(())
}

/// Mix the paints, print the result and return the JSON record.
fn run_mix(paints: &[PaintEntry], json: bool) -> Result<(String, &'static str)> {
    let entries = if paints.is_empty() {
        vec![DEFAULT_PAINT; 2]
    } else {
        paints.to_vec()
    };

    let result = mix_entries(&entries).context("could not mix the paints")?;
    let record = MixRecord::new(&entries, &result);
    let text = record.to_json().context("could not serialize the mix")?;

    if json {
        println!("{text}");
        return Ok((text, "colorMix_"));
    }

    for (i, (entry, input)) in entries.iter().zip(&record.input_colors).enumerate() {
        let (_, clipped) = to_rgb_clipped(&entry.color);
        if !clipped.is_empty() {
            log::warn!("paint {} is outside the sRGB gamut, display is clipped", i + 1);
        }

        println!(
            "Paint {:<3} {:<24} {:<20} {}  R: {}  S: {:.1}  weight {:.4}",
            i + 1,
            input.lab,
            input.rgb,
            input.hex,
            entry.ratio,
            entry.strength,
            result.weights[i]
        );
    }

    let mixed = &record.mixed_color;
    println!(
        "{:<9} {:<24} {:<20} {}",
        "Mixed", mixed.lab, mixed.rgb, mixed.hex
    );

    Ok((text, "colorMix_"))
}

/// Solve for the proportions, print them and return the JSON record.
fn run_solve(paints: &[Rgb8], target: &Rgb8, json: bool) -> Result<(String, &'static str)> {
    let paints = if paints.is_empty() {
        DEFAULT_SOLVE_PAINTS.to_vec()
    } else {
        paints.to_vec()
    };

    let proportions = solve_rgb8(&paints, target).context("could not match the target color")?;
    let record = ProportionRecord::new(&paints, target, &proportions)
        .context("could not record the proportions")?;
    let text = record.to_json().context("could not serialize the proportions")?;

    if json {
        println!("{text}");
        return Ok((text, "MixingApp"));
    }

    println!("Desired   {:<20} {}", target.to_string(), target.to_hex());
    for (paint, entry) in paints.iter().zip(&record.proportions) {
        println!("{}", proportion_row(paint, entry));
    }

    if proportions.iter().any(|p| !(0.0..=1.0).contains(p)) {
        log::warn!("the target cannot be mixed from these paints, some proportions are below 0% or above 100%");
    }

    // Report what the solved proportions actually produce.
    let mixed = paints
        .iter()
        .zip(&proportions)
        .fold([0.0; 3], |acc, (paint, p)| {
            let c = Srgb::from(*paint);
            [acc[0] + p * c.red, acc[1] + p * c.green, acc[2] + p * c.blue]
        });
    let mixed = to_int8(&Srgb::new(mixed[0], mixed[1], mixed[2]));
    println!("{:<9} {:<20} {}", "Result", mixed.to_string(), mixed.to_hex());

    Ok((text, "MixingApp"))
}

fn proportion_row(paint: &Rgb8, entry: &ProportionEntryRecord) -> String {
    format!(
        "{:<9} {:<20} {}  {:>8.2}%",
        entry.paint,
        paint.to_string(),
        entry.hex,
        entry.percentage
    )
}

fn timestamped_path(prefix: &str) -> Result<PathBuf> {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the unix epoch")?
        .as_secs();
    Ok(PathBuf::from(format!("{prefix}{seconds}.json")))
}
