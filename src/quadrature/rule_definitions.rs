//! Tabulated builtin rules.
//!
//! Each entry is `(degree, points, weights)`. Interval points live on
//! `[-1, 1]` and are listed in descending order. Triangle points are
//! barycentric triples stored consecutively, three values per point.

use crate::quadrature::interval::IntervalRuleFamily;
use std::collections::HashMap;

/// A tabulated rule: degree of precision, points and weights.
pub(crate) type RuleDefinition = (usize, Vec<f64>, Vec<f64>);

lazy_static! {
    /// Gauss rules on `[-1, 1]`, keyed by family and number of points.
    pub(crate) static ref INTERVAL_RULE_DEFINITIONS: HashMap<IntervalRuleFamily, HashMap<usize, RuleDefinition>> = {
        let mut legendre = HashMap::new();
        legendre.insert(
            3,
            (
                5,
                vec![0.7745966692414834, 0.0, -0.7745966692414834],
                vec![0.5555555555555556, 0.8888888888888888, 0.5555555555555556],
            ),
        );
        legendre.insert(
            5,
            (
                9,
                vec![
                    0.906179845938664,
                    0.5384693101056831,
                    0.0,
                    -0.5384693101056831,
                    -0.906179845938664,
                ],
                vec![
                    0.23692688505618908,
                    0.47862867049936647,
                    0.5688888888888889,
                    0.47862867049936647,
                    0.23692688505618908,
                ],
            ),
        );
        legendre.insert(
            7,
            (
                13,
                vec![
                    0.9491079123427585,
                    0.7415311855993945,
                    0.4058451513773972,
                    0.0,
                    -0.4058451513773972,
                    -0.7415311855993945,
                    -0.9491079123427585,
                ],
                vec![
                    0.1294849661688697,
                    0.27970539148927664,
                    0.3818300505051189,
                    0.4179591836734694,
                    0.3818300505051189,
                    0.27970539148927664,
                    0.1294849661688697,
                ],
            ),
        );

        // Lobatto rules include both end points of the interval.
        let mut lobatto = HashMap::new();
        lobatto.insert(
            3,
            (
                3,
                vec![1.0, 0.0, -1.0],
                vec![1.0 / 3.0, 4.0 / 3.0, 1.0 / 3.0],
            ),
        );
        lobatto.insert(
            5,
            (
                7,
                vec![1.0, 0.6546536707079771, 0.0, -0.6546536707079771, -1.0],
                vec![0.1, 49.0 / 90.0, 32.0 / 45.0, 49.0 / 90.0, 0.1],
            ),
        );
        lobatto.insert(
            7,
            (
                11,
                vec![
                    1.0,
                    0.8302238962785669,
                    0.4688487934707142,
                    0.0,
                    -0.4688487934707142,
                    -0.8302238962785669,
                    -1.0,
                ],
                vec![
                    1.0 / 21.0,
                    0.2768260473615659,
                    0.4317453812098626,
                    256.0 / 525.0,
                    0.4317453812098626,
                    0.2768260473615659,
                    1.0 / 21.0,
                ],
            ),
        );

        let mut definitions = HashMap::new();
        definitions.insert(IntervalRuleFamily::GaussLegendre, legendre);
        definitions.insert(IntervalRuleFamily::GaussLobatto, lobatto);
        definitions
    };

    /// Symmetric rules on the triangle in barycentric coordinates, keyed by
    /// number of points.
    pub(crate) static ref TRIANGLE_RULE_DEFINITIONS: HashMap<usize, RuleDefinition> = {
        let mut definitions = HashMap::new();

        // Centroid rule
        definitions.insert(
            1,
            (1, vec![1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0], vec![1.0]),
        );

        definitions.insert(
            3,
            (
                2,
                vec![
                    2.0 / 3.0, 1.0 / 6.0, 1.0 / 6.0,
                    1.0 / 6.0, 2.0 / 3.0, 1.0 / 6.0,
                    1.0 / 6.0, 1.0 / 6.0, 2.0 / 3.0,
                ],
                vec![1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
            ),
        );

        // a = (6 -+ sqrt(15)) / 21, b = 1 - 2a, w = (155 -+ sqrt(15)) / 1200
        definitions.insert(
            7,
            (
                5,
                vec![
                    1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0,
                    0.7974269853530873, 0.10128650732345634, 0.10128650732345634,
                    0.10128650732345634, 0.7974269853530873, 0.10128650732345634,
                    0.10128650732345634, 0.10128650732345634, 0.7974269853530873,
                    0.05971587178976982, 0.4701420641051151, 0.4701420641051151,
                    0.4701420641051151, 0.05971587178976982, 0.4701420641051151,
                    0.4701420641051151, 0.4701420641051151, 0.05971587178976982,
                ],
                vec![
                    0.225,
                    0.12593918054482714,
                    0.12593918054482714,
                    0.12593918054482714,
                    0.1323941527885062,
                    0.1323941527885062,
                    0.1323941527885062,
                ],
            ),
        );

        definitions.insert(
            12,
            (
                6,
                vec![
                    0.8738219710169955, 0.06308901449150223, 0.06308901449150223,
                    0.06308901449150223, 0.8738219710169955, 0.06308901449150223,
                    0.06308901449150223, 0.06308901449150223, 0.8738219710169955,
                    0.5014265096581791, 0.24928674517091043, 0.24928674517091043,
                    0.24928674517091043, 0.5014265096581791, 0.24928674517091043,
                    0.24928674517091043, 0.24928674517091043, 0.5014265096581791,
                    0.6365024991213987, 0.3103524510337844, 0.05314504984481695,
                    0.6365024991213987, 0.05314504984481695, 0.3103524510337844,
                    0.3103524510337844, 0.6365024991213987, 0.05314504984481695,
                    0.3103524510337844, 0.05314504984481695, 0.6365024991213987,
                    0.05314504984481695, 0.6365024991213987, 0.3103524510337844,
                    0.05314504984481695, 0.3103524510337844, 0.6365024991213987,
                ],
                vec![
                    0.05084490637020682,
                    0.05084490637020682,
                    0.05084490637020682,
                    0.11678627572637937,
                    0.11678627572637937,
                    0.11678627572637937,
                    0.08285107561837358,
                    0.08285107561837358,
                    0.08285107561837358,
                    0.08285107561837358,
                    0.08285107561837358,
                    0.08285107561837358,
                ],
            ),
        );

        definitions
    };
}
