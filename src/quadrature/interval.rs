//! Gauss rules on an interval.
use crate::quadrature::geometry::Interval;
use crate::quadrature::rule_definitions::INTERVAL_RULE_DEFINITIONS;
use crate::quadrature::types::{QuadratureError, QuadratureRule};
use crate::traits::Quadrature;
use crate::types::RealScalar;
use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

/// Family of a builtin interval rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalRuleFamily {
    /// Gauss-Legendre: interior nodes only, degree `2n - 1`
    GaussLegendre,
    /// Gauss-Lobatto: nodes include both end points, degree `2n - 3`
    GaussLobatto,
}

/// Builtin interval rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntervalRuleType {
    /// 3-point Gauss-Legendre
    Legendre3,
    /// 5-point Gauss-Legendre
    #[default]
    Legendre5,
    /// 7-point Gauss-Legendre
    Legendre7,
    /// 3-point Gauss-Lobatto
    Lobatto3,
    /// 5-point Gauss-Lobatto
    Lobatto5,
    /// 7-point Gauss-Lobatto
    Lobatto7,
}

impl IntervalRuleType {
    /// All builtin interval rules.
    pub const ALL: [Self; 6] = [
        Self::Legendre3,
        Self::Legendre5,
        Self::Legendre7,
        Self::Lobatto3,
        Self::Lobatto5,
        Self::Lobatto7,
    ];

    /// Select the builtin rule of `family` with `npoints` points.
    pub fn new(family: IntervalRuleFamily, npoints: usize) -> Result<Self, QuadratureError> {
        match (family, npoints) {
            (IntervalRuleFamily::GaussLegendre, 3) => Ok(Self::Legendre3),
            (IntervalRuleFamily::GaussLegendre, 5) => Ok(Self::Legendre5),
            (IntervalRuleFamily::GaussLegendre, 7) => Ok(Self::Legendre7),
            (IntervalRuleFamily::GaussLobatto, 3) => Ok(Self::Lobatto3),
            (IntervalRuleFamily::GaussLobatto, 5) => Ok(Self::Lobatto5),
            (IntervalRuleFamily::GaussLobatto, 7) => Ok(Self::Lobatto7),
            _ => Err(QuadratureError::InvalidIdentity(format!(
                "{family:?} rule with {npoints} points"
            ))),
        }
    }

    /// The family of the rule.
    pub fn family(&self) -> IntervalRuleFamily {
        match self {
            Self::Legendre3 | Self::Legendre5 | Self::Legendre7 => IntervalRuleFamily::GaussLegendre,
            Self::Lobatto3 | Self::Lobatto5 | Self::Lobatto7 => IntervalRuleFamily::GaussLobatto,
        }
    }

    /// The number of points.
    pub fn npoints(&self) -> usize {
        match self {
            Self::Legendre3 | Self::Lobatto3 => 3,
            Self::Legendre5 | Self::Lobatto5 => 5,
            Self::Legendre7 | Self::Lobatto7 => 7,
        }
    }

    /// The highest polynomial degree integrated exactly.
    pub fn degree(&self) -> usize {
        match self.family() {
            IntervalRuleFamily::GaussLegendre => 2 * self.npoints() - 1,
            IntervalRuleFamily::GaussLobatto => 2 * self.npoints() - 3,
        }
    }
}

impl fmt::Display for IntervalRuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.family() {
            IntervalRuleFamily::GaussLegendre => "legendre",
            IntervalRuleFamily::GaussLobatto => "lobatto",
        };
        write!(f, "{name}{}", self.npoints())
    }
}

impl FromStr for IntervalRuleType {
    type Err = QuadratureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|rule| rule.to_string() == name)
            .ok_or_else(|| QuadratureError::InvalidIdentity(s.to_string()))
    }
}

/// For a given family return the numbers of points for which builtin rules are available.
pub fn available_interval_rules(family: IntervalRuleFamily) -> Vec<usize> {
    let mut npoints = INTERVAL_RULE_DEFINITIONS
        .get(&family)
        .map(|rules| rules.keys().copied().collect::<Vec<_>>())
        .unwrap_or_default();
    npoints.sort_unstable();
    npoints
}

/// Quadrature over an [`Interval`] with a fixed rule tabulated on `[-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalQuadrature<T: RealScalar = f64> {
    rule: QuadratureRule<T>,
}

impl<T: RealScalar> IntervalQuadrature<T> {
    /// Create a quadrature from a builtin rule.
    pub fn new(rule_type: IntervalRuleType) -> Self {
        let family = rule_type.family();
        let npoints = rule_type.npoints();
        let (degree, points, weights) = INTERVAL_RULE_DEFINITIONS
            .get(&family)
            .and_then(|rules| rules.get(&npoints))
            .expect("builtin rule table");
        let rule = QuadratureRule::from_constants(1, *degree, points, weights);
        debug!("Created {rule_type} interval quadrature.");
        Self { rule }
    }

    /// Create a quadrature from a rule family and a number of points.
    pub fn from_family(family: IntervalRuleFamily, npoints: usize) -> Result<Self, QuadratureError> {
        Ok(Self::new(IntervalRuleType::new(family, npoints)?))
    }

    /// Create a quadrature from caller-supplied nodes on `[-1, 1]` and weights.
    pub fn from_table(points: Vec<T>, weights: Vec<T>) -> Result<Self, QuadratureError> {
        Ok(Self::from_custom_rule(QuadratureRule::new(1, None, points, weights)?))
    }

    /// Create a quadrature from fixed-size node and weight tables.
    pub fn from_array<const N: usize>(points: [T; N], weights: [T; N]) -> Self {
        Self::from_custom_rule(QuadratureRule::new_unchecked(
            1,
            None,
            points.to_vec(),
            weights.to_vec(),
        ))
    }

    fn from_custom_rule(rule: QuadratureRule<T>) -> Self {
        if !rule.has_weight_sum(T::one() + T::one()) {
            warn!(
                "Custom interval rule weights sum to {:?}, not to the reference length 2.",
                rule.weight_sum()
            );
        }
        debug!("Created custom interval quadrature with {} points.", rule.npoints());
        Self { rule }
    }

    /// Integrate `f` over `interval`.
    ///
    /// Result is `(xr - xl) / 2 * sum_i w_i f(x_i)` with `x_i` the nodes mapped
    /// into the interval. A zero length interval gives zero.
    pub fn integrate<F>(&self, f: F, interval: &Interval<T>) -> T
    where
        F: Fn(T) -> T,
    {
        self.integrate_mapped(f, interval)
    }
}

impl<T: RealScalar> Default for IntervalQuadrature<T> {
    fn default() -> Self {
        Self::new(IntervalRuleType::default())
    }
}

impl<T: RealScalar> Quadrature for IntervalQuadrature<T> {
    type T = T;
    type Map = Interval<T>;

    fn rule(&self) -> &QuadratureRule<T> {
        &self.rule
    }

    fn reference_point(&self, index: usize) -> T {
        self.rule.points()[index]
    }
}
