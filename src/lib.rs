//! Converts hand-authored mission text files into the JSONish dialect the
//! game loads.
//!
//! The reader, writer and JSONish parser live in their own crates; this
//! crate ties them together and hosts the command-line tools.

pub mod convert;

pub use mission_core as model;
pub use mission_export as export;
pub use mission_importer as importer;
pub use mission_jsonish as jsonish;

