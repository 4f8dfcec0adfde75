//! Type definitions.
use crate::types::RealScalar;

/// Quadrature error
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuadratureError {
    /// The requested builtin rule does not exist
    #[error("invalid quadrature rule: {0}")]
    InvalidIdentity(String),
    /// Node and weight tables have inconsistent lengths
    #[error("length mismatch: expected {expected} node values, found {found}")]
    LengthMismatch {
        /// Number of node values implied by the weight table
        expected: usize,
        /// Number of node values supplied
        found: usize,
    },
}

/// Definition of a numerical quadrature rule.
///
/// The table is validated on construction and is read-only afterwards, so
/// nodes and weights can never be reordered independently.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureRule<T: RealScalar> {
    dim: usize,
    degree: Option<usize>,
    npoints: usize,
    weights: Vec<T>,
    points: Vec<T>,
}

impl<T: RealScalar> QuadratureRule<T> {
    /// Create a rule from a flat point table and a weight table.
    ///
    /// A single point has the coordinates p_1, p_2, ..., p_d,
    /// with d = `dim` being the number of values per point.
    /// The vector `points` stores all points in consecutive order.
    /// Hence, the first point starts at position zero, the second point at
    /// position d, and the third point at position 2d.
    pub(crate) fn new(
        dim: usize,
        degree: Option<usize>,
        points: Vec<T>,
        weights: Vec<T>,
    ) -> Result<Self, QuadratureError> {
        let expected = dim * weights.len();
        if points.len() != expected {
            return Err(QuadratureError::LengthMismatch {
                expected,
                found: points.len(),
            });
        }
        Ok(Self {
            dim,
            degree,
            npoints: weights.len(),
            weights,
            points,
        })
    }

    /// Create a rule from tables whose shapes are consistent by construction.
    pub(crate) fn new_unchecked(
        dim: usize,
        degree: Option<usize>,
        points: Vec<T>,
        weights: Vec<T>,
    ) -> Self {
        debug_assert_eq!(points.len(), dim * weights.len());
        Self {
            dim,
            degree,
            npoints: weights.len(),
            weights,
            points,
        }
    }

    /// Create a rule from tabulated `f64` constants.
    pub(crate) fn from_constants(dim: usize, degree: usize, points: &[f64], weights: &[f64]) -> Self {
        Self::new_unchecked(
            dim,
            Some(degree),
            points.iter().map(|p| T::from_constant(*p)).collect(),
            weights.iter().map(|w| T::from_constant(*w)).collect(),
        )
    }

    /// The number of values per point.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The degree of precision. `None` for caller-supplied tables.
    pub fn degree(&self) -> Option<usize> {
        self.degree
    }

    /// The number of points.
    pub fn npoints(&self) -> usize {
        self.npoints
    }

    /// The weights.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// The flat point table.
    pub fn points(&self) -> &[T] {
        &self.points
    }

    /// The point with index `index`.
    pub fn point(&self, index: usize) -> &[T] {
        &self.points[self.dim * index..self.dim * (index + 1)]
    }

    /// The sum of all weights, i.e. the measure of the reference domain.
    pub fn weight_sum(&self) -> T {
        self.weights.iter().fold(T::zero(), |acc, w| acc + *w)
    }

    /// Tolerance for consistency checks on a caller-supplied table.
    ///
    /// Never tighter than the rounding error of summing the weights in `T`.
    pub(crate) fn tolerance(&self) -> T {
        let rounding = T::epsilon() * T::from_constant(4.0 * self.npoints as f64);
        rounding.max(T::from_constant(1E-8))
    }

    /// Whether the weights sum to `measure` up to [`Self::tolerance`].
    pub(crate) fn has_weight_sum(&self, measure: T) -> bool {
        approx::relative_eq!(self.weight_sum(), measure, max_relative = self.tolerance())
    }

    /// Iterate over `(point, weight)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&[T], T)> + '_ {
        self.points
            .chunks_exact(self.dim)
            .zip(self.weights.iter().copied())
    }
}
