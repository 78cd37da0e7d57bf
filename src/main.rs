// src/main.rs
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use td6_rs::{SegmentCatalog, Track, TrackReader};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Decode a coaster track design file and print its segments and path
#[derive(Parser, Debug)]
#[command(name = "td6", version, about, long_about = None)]
struct Cli {
    /// Track design file to read
    input: PathBuf,

    /// Segment catalog (JSON) to use instead of the built-in one
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also write the decoded body to this file
    #[arg(long)]
    dump_decoded: Option<PathBuf>,

    /// Set the logging level (RUST_LOG overrides)
    #[arg(short, long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    segments: Vec<&'a str>,
    path: Vec<[i32; 3]>,
    final_heading: i32,
}

impl<'a> From<&Track<'a>> for Report<'a> {
    fn from(track: &Track<'a>) -> Self {
        Report {
            segments: track.names(),
            path: track.path.waypoints.iter().map(|p| p.to_array()).collect(),
            final_heading: track.path.final_orientation.degrees(),
        }
    }
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level.into()).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> Result<SegmentCatalog> {
    match path {
        Some(path) => SegmentCatalog::from_path(path)
            .with_context(|| format!("failed to load segment catalog {}", path.display())),
        None => Ok(SegmentCatalog::builtin()),
    }
}

fn print_text(out: &mut impl Write, track: &Track<'_>) -> io::Result<()> {
    writeln!(out, "Segments ({}):", track.segments.len())?;
    for name in track.names() {
        writeln!(out, "  {}", name)?;
    }

    writeln!(out, "Path ({} waypoints):", track.path.len())?;
    for waypoint in &track.path.waypoints {
        writeln!(out, "  {}", waypoint)?;
    }
    writeln!(out, "Final heading: {}", track.path.final_orientation)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    let catalog = load_catalog(cli.catalog.as_ref())?;
    let design = TrackReader::open(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    if let Some(dump) = &cli.dump_decoded {
        std::fs::write(dump, design.decoded())
            .with_context(|| format!("failed to write {}", dump.display()))?;
    }

    let track = design.track(&catalog);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.format {
        OutputFormat::Text => print_text(&mut out, &track)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &Report::from(&track))?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
