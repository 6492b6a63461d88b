//! Convert a mission text file into a JSONish document.
//!
//! Usage: `convert_missions <input_path> <output_path>`

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use mission_converter::convert::convert_file;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert a mission text file to the JSONish mission format"
)]
struct Cli {
    /// Mission text file to read
    input: PathBuf,

    /// JSONish file to write (overwritten if present)
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    let summary = convert_file(&cli.input, &cli.output).with_context(|| {
        format!(
            "converting {} to {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;
    println!("{summary}");

    Ok(())
}
