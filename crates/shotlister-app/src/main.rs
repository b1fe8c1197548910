//! Shotlister - EDL to shot list CSV plus per-shot screenshots
//!
//! Entry point and CLI argument handling.

use anyhow::{Context, Result};
use clap::Parser;
use shotlister_app::pipeline::{self, RunConfig};
use shotlister_core::FrameRate;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "shotlister")]
#[command(version)]
#[command(about = "Turn an EDL into a shot list CSV plus per-shot screenshots")]
struct Args {
    /// EDL file to parse
    edl: PathBuf,

    /// Reference video the screenshots are captured from
    video: PathBuf,

    /// Directory that receives the shotlist/ output tree
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Frame rate override, e.g. 25 or 23.976; probed from the video when omitted
    #[arg(long)]
    frame_rate: Option<f64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    info!("Shotlister starting...");

    shotlister_media::init()?;

    let frame_rate = args
        .frame_rate
        .map(FrameRate::from_fps)
        .transpose()
        .context("invalid --frame-rate value")?;

    let config = RunConfig {
        edl_path: args.edl,
        video_path: args.video,
        output_dir: args.output_dir,
        frame_rate,
    };

    let summary = pipeline::run(&config)?;

    println!("Shot list written to {}", summary.csv_path.display());
    println!(
        "Captured {} of {} screenshots for {} shots at {}",
        summary.captures_succeeded(),
        summary.outcomes.len(),
        summary.shot_count,
        summary.frame_rate
    );
    if summary.captures_failed() > 0 {
        println!(
            "{} capture(s) failed; see warnings above",
            summary.captures_failed()
        );
        std::process::exit(1);
    }

    Ok(())
}
