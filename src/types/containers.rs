//! Container types: ShapeDocument, ShapeMetadata
//!
//! Author: Moroya Sakamoto

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Shape2d;

/// Shape document - top-level persisted container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDocument {
    /// Version string
    pub version: String,
    /// The shape
    pub shape: Shape2d,
    /// Optional metadata
    pub metadata: Option<ShapeMetadata>,
}

impl ShapeDocument {
    /// Create a new document
    pub fn new(shape: Shape2d) -> Self {
        ShapeDocument {
            version: env!("CARGO_PKG_VERSION").to_string(),
            shape,
            metadata: None,
        }
    }

    /// Create with metadata
    pub fn with_metadata(shape: Shape2d, metadata: ShapeMetadata) -> Self {
        ShapeDocument {
            version: env!("CARGO_PKG_VERSION").to_string(),
            shape,
            metadata: Some(metadata),
        }
    }
}

/// Optional metadata for shape documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShapeMetadata {
    /// Name of the shape
    pub name: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Author
    pub author: Option<String>,
    /// Bounding box hint (min, max)
    pub bounds: Option<(Vec2, Vec2)>,
    /// Custom key-value pairs
    pub custom: Option<std::collections::HashMap<String, String>>,
}
