use anyhow::Context;
use clap::Parser;
use kundali::birth::parse_utc_offset;
use kundali::{BirthChart, BirthInstant, ChartEngine};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a sidereal birth chart and print it as JSON")]
struct Args {
    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// Local clock time, 24-hour HH:MM.
    #[arg(long)]
    time: String,

    /// Latitude in degrees, north positive.
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in degrees, east positive.
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// IANA timezone name, carried into the output unchanged.
    #[arg(long, default_value = "UTC")]
    tz: String,

    /// Fixed offset of the clock time from UTC (e.g. -05:00). Only used
    /// when `apply_utc_offset` is enabled in the config.
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<String>,

    /// Config file (default: configs/kundali.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

fn birth_from_args(args: &Args) -> anyhow::Result<BirthInstant> {
    let mut birth = BirthInstant::parse(&args.date, &args.time, args.lat, args.lon, &args.tz)?;
    if let Some(offset) = &args.utc_offset {
        birth = birth.with_utc_offset(parse_utc_offset(offset)?);
    }
    Ok(birth)
}

fn render(chart: &BirthChart, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(chart)
    } else {
        serde_json::to_string(chart)
    };
    json.context("Failed to serialize chart")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = kundali_config::load_engine_settings(args.config.as_deref())?;
    if args.utc_offset.is_some() && !settings.apply_utc_offset {
        log::warn!("--utc-offset given but apply_utc_offset is off; clock time is used as UT");
    }
    let engine = ChartEngine::new(settings)?;
    let birth = birth_from_args(&args)?;

    let chart = engine.calculate(&birth);
    log::info!("Chart {} computed for {} {}", chart.id, args.date, args.time);
    println!("{}", render(&chart, args.pretty)?);
    Ok(())
}
