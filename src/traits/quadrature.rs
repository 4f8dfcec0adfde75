//! Quadrature engines.

use crate::quadrature::types::QuadratureRule;
use crate::traits::ReferenceMap;

/// A fixed quadrature rule tied to one kind of reference domain.
pub trait Quadrature {
    /// The scalar type of nodes, weights and results
    type T: crate::types::RealScalar;

    /// The domain descriptor this rule integrates over
    type Map: ReferenceMap<T = Self::T>;

    /// The underlying node and weight table.
    fn rule(&self) -> &QuadratureRule<Self::T>;

    /// The node with index `index` as a point of the reference domain.
    fn reference_point(&self, index: usize) -> <Self::Map as ReferenceMap>::ReferencePoint;

    /// The number of nodes.
    fn number_of_points(&self) -> usize {
        self.rule().npoints()
    }

    /// The degree of precision, if known.
    fn degree(&self) -> Option<usize> {
        self.rule().degree()
    }

    /// Integrate `f` over the physical domain described by `map`.
    ///
    /// Nodes are visited in table order, each mapped to the physical domain.
    /// The weighted sum is scaled by the Jacobian determinant of `map`.
    fn integrate_mapped<F>(&self, f: F, map: &Self::Map) -> Self::T
    where
        F: Fn(<Self::Map as ReferenceMap>::PhysicalPoint) -> Self::T,
    {
        let sum = self
            .rule()
            .weights()
            .iter()
            .enumerate()
            .fold(<Self::T as num::Zero>::zero(), |acc, (index, weight)| {
                acc + *weight * f(map.reference_to_physical(self.reference_point(index)))
            });
        map.jacobian_determinant() * sum
    }
}
