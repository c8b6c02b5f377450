#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Matrix2x2
//!
//! A `Copy` value type holding four floating point elements in row-major order,
//! `[m00, m01, m10, m11]`. The element type is bounded by [`num_traits::Float`],
//! so the matrix can only be instantiated with `f32` or `f64`.
//!
//! ## Example
//!
//! ```rust
//! use matrix2x2::{Matrix2x2D, Vector2D};
//!
//! let rotation = Matrix2x2D::make_rotation_matrix(std::f64::consts::FRAC_PI_2);
//! let scale = Matrix2x2D::make_scale_matrix(2.0, 3.0);
//!
//! // rotate first, then scale
//! let transform = scale * rotation;
//! let p = transform * Vector2D::new(1.0, 0.0);
//!
//! assert!((p.x - 0.0).abs() < 1e-9);
//! assert!((p.y - 3.0).abs() < 1e-9);
//! ```

/// Error types for the fallible matrix operations.
pub mod error;

/// The 2x2 matrix type.
pub mod matrix;

/// The 2-component vector type used by matrix-vector products.
pub mod vector;

mod interop;
mod ops;

#[cfg(feature = "approx")]
mod approx_eq;

pub use error::MatrixError;
pub use matrix::{Matrix2x2, DEFAULT_TOLERANCE};
pub use vector::Vector2;

/// Single precision 2x2 matrix.
pub type Matrix2x2F = Matrix2x2<f32>;

/// Double precision 2x2 matrix.
pub type Matrix2x2D = Matrix2x2<f64>;

/// Single precision 2-component vector.
pub type Vector2F = Vector2<f32>;

/// Double precision 2-component vector.
pub type Vector2D = Vector2<f64>;
