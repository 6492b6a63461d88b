//! End-to-end conversion pipeline and the JSONish read-back helpers.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use mission_core::Mission;
use mission_importer::ImportError;
use mission_jsonish::JsonishError;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read missions: {0}")]
    Import(#[from] ImportError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Jsonish(#[from] JsonishError),
    #[error("JSONish document does not describe missions: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub missions: usize,
    pub output: PathBuf,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Converted {} missions → {}",
            self.missions,
            self.output.display()
        )
    }
}

/// Read the mission text file at `input` and write its JSONish rendering to `output`.
///
/// The output file is only touched after the whole input parsed.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionSummary, ConvertError> {
    let missions = mission_importer::read_missions(input)?;
    mission_export::write_to_path(output, &missions).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(ConversionSummary {
        missions: missions.len(),
        output: output.to_path_buf(),
    })
}

/// Parse a JSONish document as a list of missions.
pub fn decode_missions(src: &str) -> Result<Vec<Mission>, ConvertError> {
    let document = mission_jsonish::parse(src)?;
    let missions: Vec<Mission> = serde_json::from_value(document)?;
    debug!(count = missions.len(), "decoded JSONish missions");
    Ok(missions)
}

/// Load and decode a JSONish mission document from disk.
pub fn load_jsonish_missions(path: &Path) -> Result<Vec<Mission>, ConvertError> {
    let src = fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_missions(&src)
}
