//! Parallel shape evaluation (Deep Fried Edition)
//!
//! Batch evaluation using rayon for CPU parallelism.
//!
//! # Deep Fried Optimizations
//! - **Division Exorcism**: Grid coordinates come from nested loops, not `i % width`.
//! - **Row Parallelism**: Each rayon task fills one contiguous row.
//! - **Pre-calculated Step**: Step vector computed once, not per-point.
//!
//! Author: Moroya Sakamoto

use crate::eval::eval_2d;
use crate::types::Shape2d;
use glam::Vec2;
use rayon::prelude::*;

/// Sampling grid over an axis-aligned rectangle
///
/// Samples include both corners: column 0 sits at `min.x`, column
/// `width - 1` at `max.x`; row 0 at `min.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Minimum corner
    pub min: Vec2,
    /// Maximum corner
    pub max: Vec2,
    /// Samples along X
    pub width: usize,
    /// Samples along Y
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            min: Vec2::splat(-1.0),
            max: Vec2::splat(1.0),
            width: 64,
            height: 64,
        }
    }
}

impl GridConfig {
    /// Pixel-centered canvas of `width × height` unit pixels around the origin
    pub fn canvas(width: usize, height: usize) -> Self {
        let half = Vec2::new(width as f32, height as f32) * 0.5;
        GridConfig {
            min: -half,
            max: half - Vec2::ONE,
            width,
            height,
        }
    }

    /// Distance between neighbouring samples
    ///
    /// A single-sample axis has zero step and samples only its minimum.
    #[inline]
    pub fn step(&self) -> Vec2 {
        let size = self.max - self.min;
        let axis = |extent: f32, n: usize| {
            if n > 1 {
                extent / (n as f32 - 1.0)
            } else {
                0.0
            }
        };
        Vec2::new(axis(size.x, self.width), axis(size.y, self.height))
    }

    /// World position of sample `(x, y)`
    #[inline]
    pub fn point(&self, x: usize, y: usize) -> Vec2 {
        self.min + self.step() * Vec2::new(x as f32, y as f32)
    }

    /// Total number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the grid has no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Evaluate a shape at multiple points (single-threaded)
///
/// # Arguments
/// * `shape` - The shape
/// * `points` - Slice of points to evaluate
///
/// # Returns
/// Vector of distances
#[inline]
pub fn eval_batch(shape: &Shape2d, points: &[Vec2]) -> Vec<f32> {
    points.iter().map(|&p| eval_2d(shape, p)).collect()
}

/// Evaluate a shape at multiple points (parallel)
///
/// Uses rayon for parallel iteration over points.
#[inline]
pub fn eval_batch_parallel(shape: &Shape2d, points: &[Vec2]) -> Vec<f32> {
    points.par_iter().map(|&p| eval_2d(shape, p)).collect()
}

/// Evaluate a shape on a 2D grid (Deep Fried)
///
/// # Returns
/// Flattened grid of distances in row-major order (`x + y * width`)
pub fn eval_grid(shape: &Shape2d, grid: &GridConfig) -> Vec<f32> {
    let mut buffer = vec![0.0f32; grid.len()];
    if grid.is_empty() {
        return buffer;
    }

    let step = grid.step();
    let min = grid.min;
    let width = grid.width;

    buffer
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let y_pos = min.y + y as f32 * step.y;

            // Inner loop X (hot path - no division)
            for (x, out) in row.iter_mut().enumerate() {
                let x_pos = min.x + x as f32 * step.x;
                *out = eval_2d(shape, Vec2::new(x_pos, y_pos));
            }
        });

    buffer
}

/// Get grid index from 2D coordinates
#[inline(always)]
pub fn grid_index(x: usize, y: usize, width: usize) -> usize {
    x + y * width
}

/// Get 2D coordinates from grid index
///
/// Note: Contains integer division - prefer nested loops when iterating.
///
/// # Panics
///
/// Panics if `width` is zero.
#[inline(always)]
pub fn grid_coords(index: usize, width: usize) -> (usize, usize) {
    (index % width, index / width)
}
