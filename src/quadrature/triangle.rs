//! Symmetric rules on a triangle.
//!
//! Nodes are barycentric triples `(c1, c2, c3)` with `c1 + c2 + c3 = 1`, and
//! weights sum to one. The physical integral is the weighted sum scaled by
//! the signed area of the triangle.
use crate::quadrature::geometry::Triangle;
use crate::quadrature::rule_definitions::TRIANGLE_RULE_DEFINITIONS;
use crate::quadrature::types::{QuadratureError, QuadratureRule};
use crate::traits::Quadrature;
use crate::types::RealScalar;
use itertools::Itertools;
use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

/// Builtin triangle rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriangleRuleType {
    /// Centroid rule, degree 1
    P1,
    /// 3-point rule, degree 2
    P3,
    /// 7-point rule, degree 5
    #[default]
    P7,
    /// 12-point rule, degree 6
    P12,
}

impl TriangleRuleType {
    /// All builtin triangle rules.
    pub const ALL: [Self; 4] = [Self::P1, Self::P3, Self::P7, Self::P12];

    /// Select the builtin rule with `npoints` points.
    pub fn from_npoints(npoints: usize) -> Result<Self, QuadratureError> {
        match npoints {
            1 => Ok(Self::P1),
            3 => Ok(Self::P3),
            7 => Ok(Self::P7),
            12 => Ok(Self::P12),
            _ => Err(QuadratureError::InvalidIdentity(format!(
                "triangle rule with {npoints} points"
            ))),
        }
    }

    /// The number of points.
    pub fn npoints(&self) -> usize {
        match self {
            Self::P1 => 1,
            Self::P3 => 3,
            Self::P7 => 7,
            Self::P12 => 12,
        }
    }

    /// The highest polynomial degree integrated exactly.
    pub fn degree(&self) -> usize {
        match self {
            Self::P1 => 1,
            Self::P3 => 2,
            Self::P7 => 5,
            Self::P12 => 6,
        }
    }
}

impl fmt::Display for TriangleRuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.npoints())
    }
}

impl FromStr for TriangleRuleType {
    type Err = QuadratureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|rule| rule.to_string() == name)
            .ok_or_else(|| QuadratureError::InvalidIdentity(s.to_string()))
    }
}

/// Return the numbers of points for which builtin triangle rules are available.
pub fn available_triangle_rules() -> Vec<usize> {
    TRIANGLE_RULE_DEFINITIONS
        .keys()
        .copied()
        .sorted_unstable()
        .collect()
}

/// Count the nodes whose barycentric coordinates do not sum to one.
fn off_simplex_nodes<T: RealScalar>(rule: &QuadratureRule<T>) -> usize {
    let tolerance = rule.tolerance();
    rule.points()
        .iter()
        .tuples()
        .filter(|&(c1, c2, c3)| {
            !approx::abs_diff_eq!(*c1 + *c2 + *c3, T::one(), epsilon = tolerance)
        })
        .count()
}

/// Quadrature over a [`Triangle`] with a fixed rule in barycentric coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleQuadrature<T: RealScalar = f64> {
    rule: QuadratureRule<T>,
}

impl<T: RealScalar> TriangleQuadrature<T> {
    /// Create a quadrature from a builtin rule.
    pub fn new(rule_type: TriangleRuleType) -> Self {
        let (degree, points, weights) = TRIANGLE_RULE_DEFINITIONS
            .get(&rule_type.npoints())
            .expect("builtin rule table");
        let rule = QuadratureRule::from_constants(3, *degree, points, weights);
        debug!("Created {rule_type} triangle quadrature.");
        Self { rule }
    }

    /// Create a quadrature from the number of points of a builtin rule.
    pub fn from_npoints(npoints: usize) -> Result<Self, QuadratureError> {
        Ok(Self::new(TriangleRuleType::from_npoints(npoints)?))
    }

    /// Create a quadrature from caller-supplied barycentric nodes and weights.
    ///
    /// `points` holds three values per node, so its length must be three
    /// times the length of `weights`.
    pub fn from_table(points: Vec<T>, weights: Vec<T>) -> Result<Self, QuadratureError> {
        Ok(Self::from_custom_rule(QuadratureRule::new(3, None, points, weights)?))
    }

    /// Create a quadrature from fixed-size node and weight tables.
    pub fn from_array<const N: usize>(points: [[T; 3]; N], weights: [T; N]) -> Self {
        Self::from_custom_rule(QuadratureRule::new_unchecked(
            3,
            None,
            points.into_iter().flatten().collect(),
            weights.to_vec(),
        ))
    }

    fn from_custom_rule(rule: QuadratureRule<T>) -> Self {
        if !rule.has_weight_sum(T::one()) {
            warn!(
                "Custom triangle rule weights sum to {:?}, not to one.",
                rule.weight_sum()
            );
        }
        let off_simplex = off_simplex_nodes(&rule);
        if off_simplex > 0 {
            warn!("{off_simplex} custom triangle nodes are not barycentric: coordinates do not sum to one.");
        }
        debug!("Created custom triangle quadrature with {} points.", rule.npoints());
        Self { rule }
    }

    /// Integrate `f` over `triangle`.
    ///
    /// Result is `signed_area * sum_i w_i f(x_i, y_i)` with `(x_i, y_i)` the
    /// nodes mapped into the triangle. Clockwise vertices flip the sign and a
    /// degenerate triangle gives zero.
    pub fn integrate<F>(&self, f: F, triangle: &Triangle<T>) -> T
    where
        F: Fn(T, T) -> T,
    {
        self.integrate_mapped(|[x, y]: [T; 2]| f(x, y), triangle)
    }
}

impl<T: RealScalar> Default for TriangleQuadrature<T> {
    fn default() -> Self {
        Self::new(TriangleRuleType::default())
    }
}

impl<T: RealScalar> Quadrature for TriangleQuadrature<T> {
    type T = T;
    type Map = Triangle<T>;

    fn rule(&self) -> &QuadratureRule<T> {
        &self.rule
    }

    fn reference_point(&self, index: usize) -> [T; 3] {
        let point = self.rule.point(index);
        [point[0], point[1], point[2]]
    }
}

#[cfg(test)]
mod test {
    use super::{
        available_triangle_rules, off_simplex_nodes, TriangleQuadrature, TriangleRuleType,
    };
    use crate::quadrature::geometry::Triangle;
    use crate::quadrature::types::QuadratureError;
    use crate::traits::Quadrature;
    use approx::assert_relative_eq;
    use paste::paste;

    fn factorial(n: i32) -> f64 {
        (1..=n).map(|k| k as f64).product()
    }

    /// Integral of `x^a y^b` over the triangle (0, 0), (1, 0), (0, 1).
    fn reference_monomial_integral(a: i32, b: i32) -> f64 {
        factorial(a) * factorial(b) / factorial(a + b + 2)
    }

    macro_rules! test_rule {

        ($($rule:ident),+) => {

        $(
            paste! {

                #[test]
                fn [<test_weight_sum_ $rule:lower>]() {
                    let quad = TriangleQuadrature::<f64>::new(TriangleRuleType::[<$rule>]);
                    assert_eq!(quad.number_of_points(), TriangleRuleType::[<$rule>].npoints());
                    assert_relative_eq!(quad.rule().weight_sum(), 1.0, max_relative = 1E-14);

                    let triangle = Triangle::new([0.5, -1.0], [3.0, 0.5], [-1.0, 2.0]);
                    assert_relative_eq!(
                        quad.integrate(|_, _| 1.0, &triangle),
                        triangle.signed_area(),
                        max_relative = 1E-14
                    );
                }

                #[test]
                fn [<test_monomials_ $rule:lower>]() {
                    let rule_type = TriangleRuleType::[<$rule>];
                    let quad = TriangleQuadrature::<f64>::new(rule_type);
                    let triangle = Triangle::new([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]);
                    let degree = rule_type.degree() as i32;
                    for a in 0..=degree {
                        for b in 0..=degree - a {
                            let actual = quad.integrate(|x, y| x.powi(a) * y.powi(b), &triangle);
                            assert_relative_eq!(
                                actual,
                                reference_monomial_integral(a, b),
                                epsilon = 1E-14,
                                max_relative = 1E-13
                            );
                        }
                    }
                }

            }
        )*
        };
    }

    test_rule!(P1, P3, P7, P12);

    #[test]
    fn test_default_rule() {
        let quad = TriangleQuadrature::<f64>::default();
        assert_eq!(quad, TriangleQuadrature::new(TriangleRuleType::P7));
        assert_eq!(quad.degree(), Some(5));
    }

    #[test]
    fn test_rule_selection() {
        assert_eq!(TriangleRuleType::from_npoints(12), Ok(TriangleRuleType::P12));
        assert!(matches!(
            TriangleRuleType::from_npoints(6),
            Err(QuadratureError::InvalidIdentity(_))
        ));
        assert!(TriangleQuadrature::<f64>::from_npoints(0).is_err());
        assert_eq!(available_triangle_rules(), vec![1, 3, 7, 12]);

        for rule_type in TriangleRuleType::ALL {
            assert_eq!(rule_type.to_string().parse::<TriangleRuleType>(), Ok(rule_type));
        }
        assert_eq!(" P3 ".parse::<TriangleRuleType>(), Ok(TriangleRuleType::P3));
        assert!("p5".parse::<TriangleRuleType>().is_err());
    }

    #[test]
    fn test_custom_table() {
        #[rustfmt::skip]
        let points = vec![
            2.0 / 3.0, 1.0 / 6.0, 1.0 / 6.0,
            1.0 / 6.0, 2.0 / 3.0, 1.0 / 6.0,
            1.0 / 6.0, 1.0 / 6.0, 2.0 / 3.0,
        ];
        let quad = TriangleQuadrature::<f64>::from_table(points, vec![1.0 / 3.0; 3]).unwrap();
        let builtin = TriangleQuadrature::<f64>::new(TriangleRuleType::P3);
        let triangle = Triangle::new([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]);
        assert_eq!(
            quad.integrate(|x, y| x * x + y * y, &triangle),
            builtin.integrate(|x, y| x * x + y * y, &triangle)
        );

        assert_eq!(
            TriangleQuadrature::<f64>::from_table(vec![1.0 / 3.0; 3], vec![0.5, 0.5]),
            Err(QuadratureError::LengthMismatch {
                expected: 6,
                found: 3
            })
        );

        let vertex_rule = TriangleQuadrature::<f64>::from_array(
            [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            [1.0 / 3.0; 3],
        );
        assert_eq!(vertex_rule.number_of_points(), 3);
        assert_eq!(vertex_rule.degree(), None);
        assert_relative_eq!(
            vertex_rule.integrate(|x, y| 1.0 + x - y, &triangle),
            0.5,
            max_relative = 1E-15
        );
    }

    #[test]
    fn test_inconsistent_table_is_accepted() {
        #[rustfmt::skip]
        let points = vec![
            0.5, 0.5, 0.0,
            0.0, 0.5, 0.5,
            0.5, 0.0, 0.75,
        ];
        let quad = TriangleQuadrature::<f64>::from_table(points, vec![0.5; 3]).unwrap();
        assert!(!quad.rule().has_weight_sum(1.0));
        assert_eq!(off_simplex_nodes(quad.rule()), 1);

        let triangle = Triangle::new([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]);
        assert_relative_eq!(quad.integrate(|_, _| 1.0, &triangle), 0.75, max_relative = 1E-15);
    }

    #[test]
    fn test_single_precision_table() {
        let builtin = TriangleQuadrature::<f32>::new(TriangleRuleType::P7);
        let quad = TriangleQuadrature::<f32>::from_table(
            builtin.rule().points().to_vec(),
            builtin.rule().weights().to_vec(),
        )
        .unwrap();
        assert!(quad.rule().has_weight_sum(1.0));
        assert_eq!(off_simplex_nodes(quad.rule()), 0);
    }

    #[test]
    fn test_winding_and_degeneracy() {
        let quad = TriangleQuadrature::<f64>::new(TriangleRuleType::P12);
        let ccw = Triangle::new([0.0, 0.0], [2.0, 0.0], [0.0, 3.0]);
        let cw = Triangle::new([0.0, 0.0], [0.0, 3.0], [2.0, 0.0]);
        let f = |x: f64, y: f64| x * x + y * y;
        assert_relative_eq!(quad.integrate(f, &ccw), 6.5, max_relative = 1E-13);
        assert_relative_eq!(quad.integrate(f, &cw), -6.5, max_relative = 1E-13);

        let collinear = Triangle::new([0.0, 0.0], [1.0, 1.0], [3.0, 3.0]);
        assert_eq!(quad.integrate(f, &collinear), 0.0);
    }
}
