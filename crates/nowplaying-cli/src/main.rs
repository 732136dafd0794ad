// SPDX-License-Identifier: GPL-3.0-or-later
mod report;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nowplaying_application::{Hints, Recognizer};
use nowplaying_config::{load as load_config, AppConfig};
use nowplaying_fingerprint::{AudioReference, UnimplementedIdentifier};
use tracing::info;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "nowplaying")]
#[command(about = "Identify the music that is playing from an audio sample and/or hints")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "NOWPLAYING_CONFIG")]
    config: Option<PathBuf>,

    /// Captured audio sample, tried with fingerprinting first
    #[arg(long)]
    audio: Option<PathBuf>,

    #[arg(long)]
    artist: Option<String>,

    #[arg(long)]
    album: Option<String>,

    #[arg(long)]
    track: Option<String>,

    /// Only count a search as a match when it returns at least one result
    #[arg(long)]
    strict: bool,

    /// Print the full recognition trace as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the built-in sample scenarios against the live metadata service
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let filter = init_tracing();

    let mut config = load_config(args.config.as_deref())?;
    if args.strict {
        config.recognition.strict = true;
    }
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        apply_log_level(&filter, &config)?;
    }

    let recognizer = Recognizer::from_config(&config, Arc::new(UnimplementedIdentifier))?;
    info!(target: "cli", methods = ?recognizer.methods(), "recognizer ready");

    match args.command {
        Some(Command::Demo) => run_demo(&recognizer, args.json).await,
        None => {
            let hints = Hints {
                artist: args.artist,
                album: args.album,
                track: args.track,
            };
            let audio = args.audio.map(AudioReference::new);
            let outcome = recognizer.recognize(audio.as_ref(), &hints).await;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print!("{}", report::render_outcome(&outcome));
            }
            Ok(())
        }
    }
}

async fn run_demo(recognizer: &Recognizer, json: bool) -> Result<()> {
    println!("=== Hybrid Music Recognition Demo ===");
    println!();

    for (i, scenario) in report::demo_scenarios().iter().enumerate() {
        let outcome = recognizer.recognize(None, &scenario.hints).await;

        println!("--- Test {}: {} ---", i + 1, scenario.name);
        println!("Input hints: {}", report::render_hints(&scenario.hints));
        if json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            print!("{}", report::render_outcome(&outcome));
        }
        println!();
    }

    Ok(())
}

/// Install the subscriber before config is read; `RUST_LOG` wins, otherwise
/// `info` until [`apply_log_level`] swaps in the configured level.
fn init_tracing() -> FilterHandle {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let (filter, handle) = reload::Layer::new(env_filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
    handle
}

fn apply_log_level(filter: &FilterHandle, config: &AppConfig) -> Result<()> {
    let level = EnvFilter::try_new(&config.telemetry.log_level)?;
    filter.reload(level)?;
    Ok(())
}
