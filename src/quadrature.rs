//! Fixed-order quadrature on intervals and triangles.
//!
//! Each engine owns one node and weight table, selected from the builtin
//! rules or supplied by the caller, and integrates caller-supplied functions
//! over a physical domain through an affine map from the reference domain.

pub mod geometry;
pub mod interval;
mod rule_definitions;
pub mod triangle;
pub mod types;

pub use geometry::{triangle_signed_area, Interval, Triangle};
pub use interval::{
    available_interval_rules, IntervalQuadrature, IntervalRuleFamily, IntervalRuleType,
};
pub use triangle::{available_triangle_rules, TriangleQuadrature, TriangleRuleType};
pub use types::{QuadratureError, QuadratureRule};
