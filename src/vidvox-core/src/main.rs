//! Vidvox - Video URL processing service
//!
//! Accepts a video URL over HTTP and derives artifacts from it: first
//! frame, audio segment, OCR text, transcript, translation, and spoken
//! translation.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "vidvox")]
#[command(about = "Video URL processing: frame, audio, OCR, transcription, translation, speech")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Web server port
        #[arg(short, long)]
        port: Option<u16>,

        /// Data directory for the session file
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },

    /// Check external dependencies (tesseract, data directory)
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Serve { port, data_dir } => {
            if let Some(dir) = data_dir {
                config.data_dir = dir;
            }
            let port = port.unwrap_or(config.port);

            std::fs::create_dir_all(&config.data_dir)?;
            info!("session data in {:?}", config.data_file());

            vidvox_web::serve(config.app_config(), port).await?;
        }
        Commands::Check => {
            cmd_check(&config).await;
        }
    }

    Ok(())
}

async fn cmd_check(config: &Config) {
    println!("Vidvox dependency check");
    println!("  ffmpeg:    ok (linked at build time)");

    let engine = match &config.tesseract_cmd {
        Some(cmd) => vidvox_ocr::Engine::new(cmd.clone()),
        None => vidvox_ocr::Engine::from_env(),
    };
    if engine.available().await {
        println!("  tesseract: ok");
    } else {
        println!("  tesseract: missing (OCR route will report an error)");
    }

    match std::fs::create_dir_all(&config.data_dir) {
        Ok(()) => println!("  data dir:  {:?} (writable)", config.data_dir),
        Err(e) => println!("  data dir:  {:?} (NOT writable: {})", config.data_dir, e),
    }
}
