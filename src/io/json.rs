//! SDF2D JSON format (Deep Fried Edition)
//!
//! Human-readable JSON representation of shape documents.
//!
//! # Deep Fried Optimizations
//! - **Streaming I/O**: Uses `serde_json::to_writer`/`from_reader` with `BufWriter`/`BufReader`.
//! - **Reduced Allocations**: Eliminates intermediate Strings for file I/O.
//!
//! Author: Moroya Sakamoto

use crate::io::IoError;
use crate::types::ShapeDocument;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Save a shape document to JSON format (Streaming)
pub fn save_sdf2d_json(doc: &ShapeDocument, path: impl AsRef<Path>) -> Result<(), IoError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, doc)
        .map_err(|e| IoError::Serialization(e.to_string()))?;
    writer.flush()?;

    Ok(())
}

/// Load a shape document from JSON format (Streaming) and validate it
pub fn load_sdf2d_json(path: impl AsRef<Path>) -> Result<ShapeDocument, IoError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let doc: ShapeDocument =
        serde_json::from_reader(reader).map_err(|e| IoError::Serialization(e.to_string()))?;
    doc.shape.validate()?;

    Ok(doc)
}

/// Serialize a shape document to a JSON string
pub fn to_json_string(doc: &ShapeDocument) -> Result<String, IoError> {
    serde_json::to_string_pretty(doc).map_err(|e| IoError::Serialization(e.to_string()))
}

/// Parse and validate a shape document from a JSON string
pub fn from_json_string(json: &str) -> Result<ShapeDocument, IoError> {
    let doc: ShapeDocument =
        serde_json::from_str(json).map_err(|e| IoError::Serialization(e.to_string()))?;
    doc.shape.validate()?;
    Ok(doc)
}
