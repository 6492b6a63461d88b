//! JSONish export for mission records.
//!
//! JSONish is the loose JSON dialect the game loads: unquoted keys, trailing
//! commas after every member, tab indentation.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use mission_core::{Mission, Outcome};
use tracing::info;

/// Escape a string for a JSONish literal. Only `"` is escaped.
pub fn escape(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// Create a buffered writer for `path`, creating parent directories as needed.
pub fn writer_for_path(path: &Path) -> io::Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}

/// Write one mission block, without a trailing newline after its closing `},`.
pub fn write_mission(writer: &mut dyn Write, mission: &Mission) -> io::Result<()> {
    writeln!(writer, "\t{{")?;
    writeln!(writer, "\t\tname: \"{}\",", escape(&mission.name))?;
    writeln!(writer, "\t\ttype: \"{}\",", escape(&mission.kind))?;
    writeln!(writer, "\t\tcaller: \"{}\",", escape(&mission.caller))?;
    writeln!(writer, "\t\tdescription: \"{}\",", escape(&mission.description))?;

    if mission.requirements.is_empty() {
        writeln!(writer, "\t\trequirements: [],")?;
    } else {
        writeln!(writer, "\t\trequirements: [")?;
        for requirement in &mission.requirements {
            writeln!(writer, "\t\t\t\"{}\",", escape(requirement))?;
        }
        writeln!(writer, "\t\t],")?;
    }

    writeln!(writer, "\t\tattributes: {{")?;
    for (attribute, value) in mission.attributes.iter() {
        writeln!(writer, "\t\t\t{}: {},", attribute.key(), value)?;
    }
    writeln!(writer, "\t\t}},")?;

    writeln!(
        writer,
        "\t\tposition: [{}, {}],",
        mission.position.x, mission.position.y
    )?;
    writeln!(writer, "\t\tslots: {},", mission.slots)?;
    writeln!(writer, "\t\tdifficulty: {},", mission.difficulty)?;
    write_outcome(writer, "failure", &mission.failure)?;
    write_outcome(writer, "success", &mission.success)?;
    writeln!(
        writer,
        "\t\tdangerous: {},",
        if mission.dangerous { "true" } else { "false" }
    )?;
    write!(writer, "\t}},")
}

fn write_outcome(writer: &mut dyn Write, key: &str, outcome: &Outcome) -> io::Result<()> {
    writeln!(writer, "\t\t{key}: {{")?;
    writeln!(writer, "\t\t\tduration: {},", outcome.duration)?;
    if let Some(message) = &outcome.message {
        writeln!(writer, "\t\t\tmessage: \"{}\",", escape(message))?;
    }
    if let Some(mission) = &outcome.mission {
        writeln!(writer, "\t\t\tmission: \"{}\",", escape(mission))?;
    }
    writeln!(writer, "\t\t}},")
}

/// Write the full document: `[`, blocks separated by a blank line, `]`.
///
/// No newline follows the closing bracket.
pub fn write_document(writer: &mut dyn Write, missions: &[Mission]) -> io::Result<()> {
    writeln!(writer, "[")?;
    for (index, mission) in missions.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
            writeln!(writer)?;
        }
        write_mission(writer, mission)?;
    }
    if !missions.is_empty() {
        writeln!(writer)?;
    }
    write!(writer, "]")
}

/// Render a mission block to a string.
pub fn render_mission(mission: &Mission) -> String {
    render_with(|buffer| write_mission(buffer, mission))
}

/// Render the whole document to a string.
pub fn render_document(missions: &[Mission]) -> String {
    render_with(|buffer| write_document(buffer, missions))
}

fn render_with(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write(&mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Write the document to `path`, replacing any existing file.
pub fn write_to_path(path: &Path, missions: &[Mission]) -> io::Result<()> {
    let mut writer = writer_for_path(path)?;
    write_document(&mut writer, missions)?;
    writer.flush()?;
    info!(path = %path.display(), count = missions.len(), "wrote JSONish document");
    Ok(())
}
