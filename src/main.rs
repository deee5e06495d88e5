use clap::Parser;
use lifeterm::core::config::{self, CliOverrides, LifeConfig};
use lifeterm::core::seeds::CATALOG;
use lifeterm::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lifeterm", about = "Conway's Game of Life in the terminal")]
struct Args {
    /// Seed pattern to start with (see --list-seeds)
    #[arg(short, long)]
    seed: Option<String>,

    /// Milliseconds between frames
    #[arg(short, long)]
    frame_ms: Option<u64>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the seed catalog and exit
    #[arg(long)]
    list_seeds: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    if args.list_seeds {
        for (index, seed) in CATALOG.iter().enumerate() {
            println!("{index}: {} ({} cells)", seed.name, seed.cells.len());
        }
        return ExitCode::SUCCESS;
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("lifeterm: {e}; using defaults");
        LifeConfig::default()
    });
    let cli = CliOverrides {
        seed: args.seed,
        frame_ms: args.frame_ms,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    // The terminal belongs to the renderer, so logs go to a file.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("lifeterm starting up with config: {:?}", resolved);

    match tui::run(&resolved) {
        Ok(()) => {
            log::info!("lifeterm exited cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("lifeterm failed: {}", e);
            eprintln!("lifeterm: {e}");
            ExitCode::FAILURE
        }
    }
}
