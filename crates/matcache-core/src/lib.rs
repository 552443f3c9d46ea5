//! Matcache Core - memoizing matrix-inversion engine
//!
//! This crate provides the memoization layer over the inversion routine in
//! `matcache-linalg`: a single-slot [`InverseCache`] pairing one matrix with
//! its computed inverse, and a [`CachedSolver`] that answers repeated solves
//! for the exact same matrix from that slot instead of recomputing.
//!
//! The cache slot is caller-owned state, not a hidden global: keep one
//! `CachedSolver` alive for the life of the process to get process-wide
//! memoization, or create independent instances for isolated tests.

// Module declarations
pub mod cache;
pub mod solver;

// Inversion failures propagate to callers unchanged, so this crate reuses
// the linalg error type wholesale.
pub use matcache_linalg::{LinalgError, Result};

// Re-export key types at the crate root
pub use cache::{CacheStats, InverseCache};
pub use solver::CachedSolver;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::{
        cache::{CacheStats, InverseCache},
        solver::CachedSolver,
        LinalgError, Result,
    };
    pub use matcache_linalg::{InvertOptions, Matrix};
}
