//! Memoizing solver over the single-slot inverse cache

use matcache_linalg::{InvertOptions, Inverter, Matrix, Result};
use tracing::debug;

use crate::cache::{CacheStats, InverseCache};

/// Memoizing matrix-inversion solver.
///
/// Owns the single cache slot for its lifetime, so "process-wide" caching is
/// a matter of keeping one `CachedSolver` alive for the process. Separate
/// instances are fully independent, which is what tests rely on.
///
/// Calls are synchronous and take `&mut self`; there is no internal locking.
///
/// # Example
///
/// ```rust
/// use matcache_core::CachedSolver;
/// use matcache_linalg::Matrix;
///
/// let mut solver = CachedSolver::new();
/// let m = Matrix::identity(3);
///
/// let first = solver.solve(&m)?;   // computed
/// let second = solver.solve(&m)?;  // served from cache
/// assert_eq!(first, second);
/// assert_eq!(solver.stats().hits, 1);
/// # Ok::<(), matcache_core::LinalgError>(())
/// ```
#[derive(Debug, Default)]
pub struct CachedSolver {
    cell: Option<InverseCache>,
    stats: CacheStats,
}

impl CachedSolver {
    /// Creates a solver with an empty cache slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the inverse of `matrix`, reusing the cached result when the
    /// exact same matrix was solved last
    pub fn solve(&mut self, matrix: &Matrix) -> Result<Matrix> {
        self.solve_with(matrix, &InvertOptions::default())
    }

    /// Like [`solve`](Self::solve), passing `options` through verbatim to
    /// the inversion routine.
    ///
    /// The cache key is the matrix alone, compared by exact value equality:
    /// a matrix differing in a single element or in shape replaces the slot
    /// wholesale and discards the previous inverse. On failure the requested
    /// matrix stays in the slot with no inverse, so a retry recomputes
    /// instead of reporting a stale hit.
    pub fn solve_with(&mut self, matrix: &Matrix, options: &InvertOptions) -> Result<Matrix> {
        let up_to_date = self
            .cell
            .as_ref()
            .is_some_and(|cell| cell.matrix() == matrix);
        if !up_to_date {
            if self.cell.is_some() {
                self.stats.invalidations += 1;
                debug!(
                    "discarding cached inverse, requested {}x{} matrix differs from cached one",
                    matrix.rows(),
                    matrix.cols()
                );
            }
            self.cell = Some(InverseCache::new(matrix.clone()));
        }

        if let Some(inverse) = self.cell.as_ref().and_then(InverseCache::inverse) {
            self.stats.hits += 1;
            debug!(
                "inverse cache hit for {}x{} matrix",
                matrix.rows(),
                matrix.cols()
            );
            return Ok(inverse.clone());
        }

        self.stats.misses += 1;
        debug!(
            "inverse cache miss for {}x{} matrix, computing",
            matrix.rows(),
            matrix.cols()
        );
        let inverse = Inverter::compute(matrix, options)?;
        if let Some(cell) = self.cell.as_mut() {
            cell.set_inverse(inverse.clone());
        }
        Ok(inverse)
    }

    /// Returns the matrix currently held in the cache slot, if any
    pub fn cached_matrix(&self) -> Option<&Matrix> {
        self.cell.as_ref().map(InverseCache::matrix)
    }

    /// Returns whether the slot currently holds a computed inverse
    pub fn has_cached_inverse(&self) -> bool {
        self.cell.as_ref().is_some_and(InverseCache::has_inverse)
    }

    /// Returns cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Drops the cache slot, leaving the statistics intact
    pub fn clear(&mut self) {
        self.cell = None;
    }
}
