//! Single-slot cache pairing a matrix with its computed inverse

use matcache_linalg::Matrix;
use serde::Serialize;

/// Statistics for cache performance monitoring
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of solves answered from the cache
    pub hits: u64,
    /// Number of solves that had to compute the inverse
    pub misses: u64,
    /// Number of times a cached inverse was discarded because a different
    /// matrix was requested
    pub invalidations: u64,
}

impl CacheStats {
    /// Fraction of solves answered from the cache
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Single-slot cache holding one matrix and, once computed, its inverse.
///
/// The inverse is only ever present for the matrix currently stored in the
/// same cell: replacing the matrix unconditionally discards the inverse, so
/// there is exactly one valid (matrix, inverse) pair alive at a time.
#[derive(Debug, Clone)]
pub struct InverseCache {
    matrix: Matrix,
    inverse: Option<Matrix>,
}

impl InverseCache {
    /// Creates a cell for `matrix` with no inverse computed yet
    pub fn new(matrix: Matrix) -> Self {
        Self {
            matrix,
            inverse: None,
        }
    }

    /// Returns the currently stored matrix
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Replaces the stored matrix and discards any cached inverse
    pub fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix = matrix;
        self.inverse = None;
    }

    /// Returns the cached inverse, if one has been computed for the
    /// currently stored matrix
    pub fn inverse(&self) -> Option<&Matrix> {
        self.inverse.as_ref()
    }

    /// Stores `inverse` as the cached inverse of the currently held matrix.
    ///
    /// The caller is responsible for only storing an inverse that actually
    /// corresponds to the matrix in this cell.
    pub fn set_inverse(&mut self, inverse: Matrix) {
        self.inverse = Some(inverse);
    }

    /// Returns whether an inverse is currently cached
    pub fn has_inverse(&self) -> bool {
        self.inverse.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_has_no_inverse() {
        let cell = InverseCache::new(Matrix::identity(2));
        assert_eq!(cell.matrix(), &Matrix::identity(2));
        assert!(!cell.has_inverse());
        assert!(cell.inverse().is_none());
    }

    #[test]
    fn test_set_inverse_then_read_back() {
        let mut cell = InverseCache::new(Matrix::identity(2));
        cell.set_inverse(Matrix::identity(2));
        assert!(cell.has_inverse());
        assert_eq!(cell.inverse(), Some(&Matrix::identity(2)));
    }

    #[test]
    fn test_set_matrix_discards_inverse() {
        let mut cell = InverseCache::new(Matrix::identity(2));
        cell.set_inverse(Matrix::identity(2));

        cell.set_matrix(Matrix::identity(3));
        assert_eq!(cell.matrix(), &Matrix::identity(3));
        assert!(cell.inverse().is_none());

        // Replacing again while no inverse is stored stays a no-op
        cell.set_matrix(Matrix::identity(4));
        assert!(cell.inverse().is_none());
    }

    #[test]
    fn test_hit_rate() {
        let mut stats = CacheStats::default();
        assert_eq!(stats.hit_rate(), 0.0);

        stats.hits = 3;
        stats.misses = 1;
        assert!((stats.hit_rate() - 0.75).abs() < 1e-12);
    }
}
