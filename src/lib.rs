//! Fixed-order Gauss quadrature on intervals and triangles.
//!
//! Two engines are provided. [`IntervalQuadrature`] evaluates
//! integrals over an [`Interval`] using Gauss-Legendre or Gauss-Lobatto rules
//! tabulated on `[-1, 1]`. [`TriangleQuadrature`] evaluates integrals over a
//! [`Triangle`] using rules tabulated in barycentric coordinates.
//!
//! ```
//! use fixedquad::{IntervalQuadrature, IntervalRuleType, Interval};
//! use fixedquad::{TriangleQuadrature, TriangleRuleType, Triangle};
//!
//! let quad = IntervalQuadrature::<f64>::new(IntervalRuleType::Legendre3);
//! let value: f64 = quad.integrate(|x| x * x, &Interval::new(0.0, 1.0));
//! assert!((value - 1.0 / 3.0).abs() < 1e-12);
//!
//! let quad = TriangleQuadrature::<f64>::new(TriangleRuleType::P3);
//! let triangle = Triangle::new([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]);
//! let value: f64 = quad.integrate(|x, y| x * x + y * y, &triangle);
//! assert!((value - 1.0 / 6.0).abs() < 1e-12);
//! ```
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

#[macro_use]
extern crate lazy_static;

pub mod quadrature;
pub mod traits;
pub mod types;

pub use quadrature::geometry::{Interval, Triangle};
pub use quadrature::interval::{IntervalQuadrature, IntervalRuleFamily, IntervalRuleType};
pub use quadrature::triangle::{TriangleQuadrature, TriangleRuleType};
pub use quadrature::types::{QuadratureError, QuadratureRule};
