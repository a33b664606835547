//! File I/O for shape documents (Deep Fried Edition)
//!
//! Supports one format:
//! - .sdf2d.json: Human-readable JSON format
//!
//! # Deep Fried Optimizations
//! - **Buffered I/O**: Uses `BufReader`/`BufWriter` for efficient buffering.
//! - **Direct JSON I/O**: Uses `serde_json::to_writer`/`from_reader`.
//! - **Validate on Load**: Parameters are checked once, before any evaluation.
//!
//! Author: Moroya Sakamoto

mod json;

pub use json::{from_json_string, load_sdf2d_json, save_sdf2d_json, to_json_string};

use crate::types::{ShapeDocument, ShapeError};
use std::path::Path;
use thiserror::Error;

/// File extension for JSON shape documents
pub const SDF2D_JSON_EXT: &str = ".sdf2d.json";

/// File I/O errors
#[derive(Error, Debug)]
pub enum IoError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Document parsed but the shape parameters are invalid
    #[error("Invalid shape: {0}")]
    InvalidShape(#[from] ShapeError),
}

fn check_extension(path: &Path) -> Result<(), IoError> {
    if path.to_string_lossy().ends_with(SDF2D_JSON_EXT) {
        Ok(())
    } else {
        Err(IoError::InvalidFormat(format!(
            "Unknown file extension. Use {}",
            SDF2D_JSON_EXT
        )))
    }
}

/// Save a shape document to file (format from extension)
///
/// # Arguments
/// * `doc` - The document to save
/// * `path` - File path (.sdf2d.json)
pub fn save(doc: &ShapeDocument, path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    check_extension(path)?;
    save_sdf2d_json(doc, path)
}

/// Load and validate a shape document from file (format from extension)
///
/// # Arguments
/// * `path` - File path (.sdf2d.json)
pub fn load(path: impl AsRef<Path>) -> Result<ShapeDocument, IoError> {
    let path = path.as_ref();
    check_extension(path)?;
    load_sdf2d_json(path)
}

/// Get a short human-readable summary of a document file
pub fn get_info(path: impl AsRef<Path>) -> Result<String, IoError> {
    let doc = load(path)?;
    let mut info = format!(
        "Format: SDF2D JSON\nVersion: {}\nPrimitive: {}\nParameters: {}",
        doc.version,
        doc.shape.primitive_type(),
        doc.shape.params().len()
    );
    if let Some(name) = doc.metadata.as_ref().and_then(|m| m.name.as_deref()) {
        info.push_str(&format!("\nName: {}", name));
    }
    Ok(info)
}
