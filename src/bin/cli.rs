//! overspeed CLI - excess travel-time analysis for a speed-limited zone
//!
//! Usage:
//!   overspeed-cli <folder> [--vmax <kph>] [--lat-min <deg>] [--lat-max <deg>]
//!                 [--lon-min <deg>] [--lon-max <deg>] [--plot] [--json]
//!
//! Scans a folder for GPX files, crops each track to the configured zone,
//! rebuilds its timeline at the speed limit, and prints the per-track and
//! run-level excess delays.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use overspeed::{analyze_file, summarize, AnalysisConfig, TrackResult, ZoneBounds};

#[derive(Parser)]
#[command(name = "overspeed-cli")]
#[command(about = "Excess travel-time analysis for speed-limited zones", long_about = None)]
struct Cli {
    /// Folder containing GPX files
    folder: PathBuf,

    /// Speed limit inside the zone, km/h
    #[arg(long, default_value_t = 30.0)]
    vmax: f64,

    /// Southern zone edge, degrees latitude
    #[arg(long)]
    lat_min: Option<f64>,

    /// Northern zone edge, degrees latitude
    #[arg(long)]
    lat_max: Option<f64>,

    /// Western zone edge, degrees longitude
    #[arg(long)]
    lon_min: Option<f64>,

    /// Eastern zone edge, degrees longitude
    #[arg(long)]
    lon_max: Option<f64>,

    /// Render a speed chart per track
    #[cfg(feature = "plot")]
    #[arg(long)]
    plot: bool,

    /// Chart format: svg or png
    #[cfg(feature = "plot")]
    #[arg(long, value_enum, default_value_t = PlotFormat::Svg)]
    plot_format: PlotFormat,

    /// Output directory for charts
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the run summary as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose per-segment output
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "plot")]
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum PlotFormat {
    Svg,
    Png,
}

#[derive(Serialize)]
struct JsonTrack<'a> {
    file: &'a str,
    segments: usize,
    excess_delay_s: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tracks: Vec<JsonTrack<'a>>,
    delays_s: &'a [f64],
    mean_s: f64,
    median_s: f64,
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();

    let config = AnalysisConfig {
        bounds: ZoneBounds {
            min_lat: cli.lat_min,
            max_lat: cli.lat_max,
            min_lon: cli.lon_min,
            max_lon: cli.lon_max,
        },
        speed_limit_kph: cli.vmax,
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    let paths = match collect_gpx_paths(&cli.folder) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error reading folder {}: {}", cli.folder.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if !cli.json {
        println!("{}", "=".repeat(60));
        println!(
            "Analyzing {} GPX files at vmax = {} km/h",
            paths.len(),
            config.speed_limit_kph
        );
        println!("{}", "=".repeat(60));
    }

    let mut results = Vec::new();
    let mut failures = 0usize;

    for path in &paths {
        match analyze_file(path, &config) {
            Ok(result) => {
                if !cli.json {
                    println!(
                        "  [OK] {} - {} segments, {:.1}s excess travel time",
                        result.file_id,
                        result.segments.len(),
                        result.excess_delay_s
                    );
                    if cli.verbose {
                        print_segments(&result);
                    }
                }

                #[cfg(feature = "plot")]
                if cli.plot {
                    render_chart(&cli, &config, &result);
                }

                results.push(result);
            }
            Err(e) => {
                eprintln!("  [ERR] {}: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    let summary = match summarize(&results) {
        Ok(s) => s,
        Err(_) => {
            println!("No tracks to process");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        let report = JsonReport {
            tracks: results
                .iter()
                .map(|r| JsonTrack {
                    file: &r.file_id,
                    segments: r.segments.len(),
                    excess_delay_s: r.excess_delay_s,
                })
                .collect(),
            delays_s: &summary.delays_s,
            mean_s: summary.mean_s,
            median_s: summary.median_s,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("\n{}", "-".repeat(60));
        println!("RUN SUMMARY ({} tracks, {} failed)", results.len(), failures);
        println!("{}", "-".repeat(60));
        println!(
            "  Excess delays (s): {:?}",
            summary
                .delays_s
                .iter()
                .map(|d| (d * 10.0).round() / 10.0)
                .collect::<Vec<_>>()
        );
        println!("  Mean:   {:.1} s", summary.mean_s);
        println!("  Median: {:.1} s", summary.median_s);
    }

    ExitCode::SUCCESS
}

/// Collect GPX paths from a folder, sorted by file name for stable output.
fn collect_gpx_paths(folder: &PathBuf) -> std::io::Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(folder)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "gpx"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Print the adjusted segment table for one track.
fn print_segments(result: &TrackResult) {
    for (i, s) in result.segments.iter().enumerate() {
        println!(
            "      #{:<4} t+{:>7.1}s  {:>6.1} km/h -> {:>6.1} km/h  ({:.1}s -> {:.1}s)",
            i,
            s.segment.offset_s,
            s.segment.speed_kph,
            s.capped_speed_kph,
            s.segment.elapsed_s,
            s.adjusted_elapsed_s
        );
    }
}

#[cfg(feature = "plot")]
fn render_chart(cli: &Cli, config: &AnalysisConfig, result: &TrackResult) {
    use overspeed::{render_speed_chart, ChartKind};

    let (kind, ext) = match cli.plot_format {
        PlotFormat::Svg => (ChartKind::Svg, "svg"),
        PlotFormat::Png => (ChartKind::Png, "png"),
    };

    let out_dir = cli.output.clone().unwrap_or_else(|| PathBuf::from("."));
    if let Err(e) = fs::create_dir_all(&out_dir) {
        eprintln!("  [ERR] Failed to create output directory: {}", e);
        return;
    }

    let path = out_dir.join(format!("{}.{}", result.file_id, ext));
    match render_speed_chart(result, config.speed_limit_kph, &path, kind) {
        Ok(()) => {
            if cli.verbose {
                println!("      chart written to {}", path.display());
            }
        }
        Err(e) => eprintln!("  [ERR] {}: {}", result.file_id, e),
    }
}
