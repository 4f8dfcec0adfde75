//! Trait definitions

mod quadrature;
mod reference_map;

pub use quadrature::Quadrature;
pub use reference_map::ReferenceMap;
