// Replay a light edit session headlessly and print the finalized lights.
// Run with: cargo run --bin lux_session -- sessions/stage.json

mod session;

use std::env;
use std::fs;

use anyhow::{Context, Result};

use session::{run_session, SessionFile};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <session.json>", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    log::info!("Loading session: {}", path);

    let json = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let file = SessionFile::from_json(&json)?;
    let report = run_session(file)?;

    log::info!(
        "Replayed {} steps: {} clamped edits, {} failed binds",
        report.steps,
        report.clamped_edits,
        report.failed_binds
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
