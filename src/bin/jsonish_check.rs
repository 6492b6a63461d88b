//! Read a JSONish document back, either as generic JSON or as missions.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mission_converter::convert::load_jsonish_missions;
use mission_converter::jsonish;

#[derive(Parser)]
#[command(author, version, about = "Inspect a JSONish document")]
struct Cli {
    /// JSONish file to read
    input: PathBuf,

    /// Decode the document as a mission list and report the count
    #[arg(long, default_value_t = false)]
    missions: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.missions {
        let missions = load_jsonish_missions(&cli.input)?;
        println!("{} missions in {}", missions.len(), cli.input.display());
        return Ok(());
    }

    let src = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let document = jsonish::parse(&src)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &document)?;
    writeln!(out)?;

    Ok(())
}
