//! Physical integration domains and their maps to the reference domains.
//!
//! Neither domain validates its input. An interval with `xl > xr` or a
//! triangle with clockwise vertices integrates with a negative sign, and a
//! degenerate domain has a zero Jacobian.
use crate::traits::ReferenceMap;
use crate::types::RealScalar;

/// The interval `[xl, xr]`, mapped affinely onto the reference interval `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: RealScalar = f64> {
    xl: T,
    xr: T,
}

impl<T: RealScalar> Interval<T> {
    /// Create an interval. `xl < xr` is expected but not checked.
    pub fn new(xl: T, xr: T) -> Self {
        Self { xl, xr }
    }

    /// Left bound.
    pub fn xl(&self) -> T {
        self.xl
    }

    /// Right bound.
    pub fn xr(&self) -> T {
        self.xr
    }

    /// Signed length `xr - xl`.
    pub fn length(&self) -> T {
        self.xr - self.xl
    }
}

impl<T: RealScalar> ReferenceMap for Interval<T> {
    type T = T;
    type ReferencePoint = T;
    type PhysicalPoint = T;

    fn reference_to_physical(&self, point: T) -> T {
        let two = T::one() + T::one();
        self.xl + self.length() * (point + T::one()) / two
    }

    fn physical_to_reference(&self, point: T) -> T {
        let two = T::one() + T::one();
        -T::one() + two * (point - self.xl) / self.length()
    }

    fn jacobian_determinant(&self) -> T {
        self.length() / (T::one() + T::one())
    }
}

/// Signed area of the triangle with vertices `(x1, y1)`, `(x2, y2)`, `(x3, y3)`.
///
/// Positive for counter-clockwise vertices.
pub fn triangle_signed_area<T: RealScalar>(x1: T, y1: T, x2: T, y2: T, x3: T, y3: T) -> T {
    let px = x2 - x1;
    let py = y2 - y1;
    let qx = x3 - x1;
    let qy = y3 - y1;

    (px * qy - py * qx) / (T::one() + T::one())
}

/// A triangle given by its three vertices.
///
/// The reference domain is the barycentric simplex: a reference point
/// `[c1, c2, c3]` with `c1 + c2 + c3 = 1` maps to `c1 * a + c2 * b + c3 * c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T: RealScalar = f64> {
    vertices: [[T; 2]; 3],
}

impl<T: RealScalar> Triangle<T> {
    /// Create a triangle from its vertices.
    pub fn new(a: [T; 2], b: [T; 2], c: [T; 2]) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Create a triangle from the vertex coordinates `(ax, ay)`, `(bx, by)`, `(cx, cy)`.
    pub fn from_coordinates(ax: T, ay: T, bx: T, by: T, cx: T, cy: T) -> Self {
        Self::new([ax, ay], [bx, by], [cx, cy])
    }

    /// The vertices.
    pub fn vertices(&self) -> &[[T; 2]; 3] {
        &self.vertices
    }

    /// The signed area. Positive if the vertices are counter-clockwise.
    pub fn signed_area(&self) -> T {
        let [[ax, ay], [bx, by], [cx, cy]] = self.vertices;
        triangle_signed_area(ax, ay, bx, by, cx, cy)
    }

    /// The unsigned area.
    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    /// Whether the vertices are ordered counter-clockwise.
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > T::zero()
    }

    /// The centroid.
    pub fn centroid(&self) -> [T; 2] {
        let third = T::one() / T::from_constant(3.0);
        self.reference_to_physical([third, third, third])
    }
}

impl<T: RealScalar> ReferenceMap for Triangle<T> {
    type T = T;
    type ReferencePoint = [T; 3];
    type PhysicalPoint = [T; 2];

    fn reference_to_physical(&self, point: [T; 3]) -> [T; 2] {
        let [c1, c2, c3] = point;
        let [[ax, ay], [bx, by], [cx, cy]] = self.vertices;
        [c1 * ax + c2 * bx + c3 * cx, c1 * ay + c2 * by + c3 * cy]
    }

    /// Solve for the barycentric coordinates of a physical point.
    ///
    /// The result is not finite for a degenerate triangle; callers must not
    /// pass one.
    fn physical_to_reference(&self, point: [T; 2]) -> [T; 3] {
        let [x, y] = point;
        let [[ax, ay], [bx, by], [cx, cy]] = self.vertices;

        let c3 = ((ay - by) * x + (bx - ax) * y + ax * by - bx * ay)
            / ((ay - by) * cx + (bx - ax) * cy + ax * by - bx * ay);
        let c2 = ((ay - cy) * x + (cx - ax) * y + ax * cy - cx * ay)
            / ((ay - cy) * bx + (cx - ax) * by + ax * cy - cx * ay);
        let c1 = T::one() - c2 - c3;

        [c1, c2, c3]
    }

    fn jacobian_determinant(&self) -> T {
        // Barycentric weights sum to one, so the area is the whole Jacobian.
        self.signed_area()
    }
}
