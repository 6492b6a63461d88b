//! Reader for the line-oriented mission text format.
//!
//! Each record is a fixed sequence of lines: four header lines, a
//! requirement count followed by that many requirement lines, then the
//! position, attribute, slot, difficulty, duration and danger lines.
//! Blank lines are only allowed between records.

pub mod cursor;

use std::fs;
use std::path::Path;

use mission_core::{AttributeSet, Mission, Outcome, Position, danger_from_flag};
use thiserror::Error;
use tracing::{debug, info};

pub use cursor::LineCursor;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: unexpected end of input while reading {field}")]
    UnexpectedEof { line: usize, field: &'static str },
    #[error("line {line}: expected an integer for {field}, found {value:?}")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: expected {expected} integers for {field}, found {found}")]
    FieldCount {
        line: usize,
        field: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Read every mission from the file at `path`.
pub fn read_missions<P: AsRef<Path>>(path: P) -> Result<Vec<Mission>, ImportError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let missions = parse_missions(&contents)?;
    info!(path = %path.display(), count = missions.len(), "read mission file");
    Ok(missions)
}

/// Parse every mission record in `text`, in file order.
pub fn parse_missions(text: &str) -> Result<Vec<Mission>, ImportError> {
    let mut cursor = LineCursor::new(text);
    let mut missions = Vec::new();

    loop {
        cursor.skip_blank();
        if cursor.is_exhausted() {
            break;
        }
        let start = cursor.line_number();
        let mission = parse_mission(&mut cursor)?;
        debug!(line = start, name = %mission.name, "parsed mission");
        missions.push(mission);
    }

    Ok(missions)
}

/// Parse a single record starting at the cursor's current line.
pub fn parse_mission(cursor: &mut LineCursor<'_>) -> Result<Mission, ImportError> {
    let name = cursor.text("name")?;
    let kind = cursor.text("type")?;
    let caller = cursor.text("caller")?;
    let description = cursor.text("description")?;

    let requirement_count = cursor.count("requirement_count")?;
    let requirements = (0..requirement_count)
        .map(|_| cursor.text("requirement"))
        .collect::<Result<Vec<_>, _>>()?;

    let position = Position::from(cursor.integers::<2>("position")?);
    let attributes = AttributeSet::from_values(cursor.integers::<5>("attributes")?);

    let slots = cursor.integer("slots")?;
    let difficulty = cursor.integer("difficulty")?;
    let failure_duration = cursor.integer("failure_duration")?;
    let success_duration = cursor.integer("success_duration")?;
    let dangerous = danger_from_flag(cursor.integer("danger_flag")?);

    Ok(Mission {
        name,
        kind,
        caller,
        description,
        requirements,
        attributes,
        position,
        slots,
        difficulty,
        failure: Outcome::with_duration(failure_duration),
        success: Outcome::with_duration(success_duration),
        dangerous,
    })
}
