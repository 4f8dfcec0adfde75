//! Map from reference to physical domain.

use crate::types::RealScalar;

/// An affine map between a reference domain and a physical domain.
pub trait ReferenceMap {
    /// The scalar type of the coordinates
    type T: RealScalar;

    /// A point of the reference domain
    type ReferencePoint: Copy;

    /// A point of the physical domain
    type PhysicalPoint: Copy;

    /// Map a point of the reference domain to the physical domain.
    fn reference_to_physical(&self, point: Self::ReferencePoint) -> Self::PhysicalPoint;

    /// Map a point of the physical domain back to the reference domain.
    fn physical_to_reference(&self, point: Self::PhysicalPoint) -> Self::ReferencePoint;

    /// The ratio of physical measure to reference measure.
    ///
    /// The sign encodes the orientation of the physical domain.
    fn jacobian_determinant(&self) -> Self::T;
}
