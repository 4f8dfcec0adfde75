//! Types specific to fixedquad

use num::traits::AsPrimitive;
use std::fmt::Debug;

/// Real scalar type in which rules are stored and integrals accumulated.
pub trait RealScalar:
    num::Float + approx::AbsDiffEq<Epsilon = Self> + approx::RelativeEq + Debug + Send + Sync + 'static
{
    /// Convert a tabulated `f64` constant into this type.
    fn from_constant(value: f64) -> Self;
}

impl<T> RealScalar for T
where
    T: num::Float
        + approx::AbsDiffEq<Epsilon = T>
        + approx::RelativeEq
        + Debug
        + Send
        + Sync
        + 'static,
    f64: AsPrimitive<T>,
{
    fn from_constant(value: f64) -> Self {
        value.as_()
    }
}

#[cfg(test)]
mod test {
    use super::RealScalar;

    #[test]
    fn test_from_constant() {
        assert_eq!(<f64 as RealScalar>::from_constant(0.25), 0.25);
        assert_eq!(<f32 as RealScalar>::from_constant(0.25), 0.25f32);
        assert_eq!(<f32 as RealScalar>::from_constant(1.0 / 3.0), 1.0f32 / 3.0);
    }
}
