//! Matcache Linalg: dense matrix primitives for the memoizing solver
//!
//! This crate provides the small dense-matrix substrate the Matcache engine
//! is built on: a row-major `f64` [`Matrix`] type with exact value equality,
//! Gauss-Jordan inversion with partial pivoting, and a plain matrix product
//! for verification.
//!
//! # Example
//!
//! ```rust
//! use matcache_linalg::{Matrix, Inverter, InvertOptions, MatMul};
//!
//! let m = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]])?;
//! let inv = Inverter::compute(&m, &InvertOptions::default())?;
//!
//! // The product with the original is the identity, up to rounding
//! let product = MatMul::compute(&m, &inv)?;
//! assert!((product[(0, 0)] - 1.0).abs() < 1e-12);
//! # Ok::<(), matcache_linalg::LinalgError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod matrix;
pub mod ops;

// Re-export main types
pub use error::{LinalgError, Result};
pub use matrix::Matrix;
pub use ops::{InvertOptions, Inverter, MatMul};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{InvertOptions, Inverter, LinalgError, MatMul, Matrix, Result};
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
