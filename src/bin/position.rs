//! Position conversion tool
//!
//! Converts a decimal degree latitude/longitude pair into DD, DDM and DMS
//! notation and prints the rendered text.
//!
//! Usage:
//!   cargo run --bin position -- 47.6205 -122.3493 [--to dms] [--preset dms] [--json]

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::{debug, info};
use position::{config, DisplayString, Notation, Position, PositionDd, PositionFormat, Preset};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Position conversion tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts decimal degree positions to DD, DDM and DMS display strings",
    long_about = None
)]
struct Args {
    /// Latitude in decimal degrees, positive north
    #[arg(allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in decimal degrees, positive east
    #[arg(allow_negative_numbers = true)]
    lon: f64,

    /// Target notation (dd, ddm or dms); all three when omitted
    #[arg(short, long)]
    to: Option<Notation>,

    /// Format preset (default, dd, ddm, ddm-short, dms)
    ///
    /// Defaults to the compact preset for each notation.
    #[arg(short, long)]
    preset: Option<Preset>,

    /// JSON file with format fields, overriding any preset
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Emit JSON records instead of plain text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

/// One rendered notation in the JSON output
#[derive(Debug, serde::Serialize)]
struct Rendered {
    notation: Notation,
    #[serde(flatten)]
    text: DisplayString,
}

/// Picks the format for a notation: config file, then preset, then the notation's compact preset
fn format_for(notation: Notation, args: &Args, loaded: Option<&PositionFormat>) -> PositionFormat {
    if let Some(format) = loaded {
        return format.clone();
    }
    args.preset
        .unwrap_or_else(|| Preset::for_notation(notation))
        .format()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let loaded = match &args.config {
        Some(path) => Some(config::load_format(path)?),
        None => None,
    };

    let notations: Vec<Notation> = match args.to {
        Some(notation) => vec![notation],
        None => Notation::ALL.to_vec(),
    };

    let source = Position::Dd(PositionDd::new(args.lat, args.lon));
    info!("Converting ({}, {})", args.lat, args.lon);

    let mut rendered = Vec::with_capacity(notations.len());
    for notation in notations {
        let format = format_for(notation, &args, loaded.as_ref());
        debug!("Using format {:?} for {}", format, notation);

        let text = source.convert(notation).display(&format);
        rendered.push(Rendered { notation, text });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        for entry in &rendered {
            let notation = entry.notation.name().to_uppercase();
            println!("{:<4} {}  {}", notation, entry.text.lat, entry.text.lon);
        }
    }

    Ok(())
}
