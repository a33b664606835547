//! # ALICE-SDF2D
//!
//! **Closed-form 2D signed distance primitives**
//!
//! A library of exact (and a few near-exact) 2D signed distance functions:
//! negative inside, zero on the boundary, positive outside. Every primitive
//! is a pure function of a query point already expressed in the shape's
//! local frame.
//!
//! ## Features
//!
//! - **Primitives**: Circle, Box, Rounded Box, Triangle, Quad, Polygon, Ellipse,
//!   Star, Moon, Vesica, Horseshoe and 20+ more
//! - **Dynamic Dispatch**: `PrimitiveType` + flat parameter slices
//! - **Shape Model**: serializable `Shape2d` with validation
//! - **Batch Evaluation**: rayon-parallel point batches and grids
//! - **File I/O**: JSON (.sdf2d.json) format
//!
//! ## Example
//!
//! ```rust
//! use alice_sdf2d::prelude::*;
//!
//! // Raw primitive call
//! let d = sdf_circle(Vec2::new(2.0, 0.0), 1.0);
//! assert!((d - 1.0).abs() < 1e-6);
//!
//! // Shape model
//! let star = Shape2d::star5(1.0, 0.5);
//! assert!(eval_2d(&star, Vec2::ZERO) < 0.0);
//!
//! // Rasterize
//! let grid = eval_grid(&star, &GridConfig::default());
//! assert_eq!(grid.len(), 64 * 64);
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod eval;
pub mod io;
pub mod math;
pub mod primitives;
pub mod types;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::eval::{
        eval_2d, eval_batch, eval_batch_parallel, eval_grid, gradient_2d, grid_coords,
        grid_index, normal_2d, GridConfig,
    };
    pub use crate::io::{load, save, IoError};
    pub use crate::primitives::*;
    pub use crate::types::{Shape2d, ShapeDocument, ShapeError, ShapeMetadata};
    pub use glam::{Vec2, Vec4};
}
