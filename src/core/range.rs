use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const RELATIVE_WIDENING: f64 = 1e-9;

/// Closed interval `[lower, upper]` of data values.
///
/// `lower <= upper` always holds. A range with `lower == upper` is a degenerate
/// point; consumers treat it as zero-size instead of dividing by its span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    lower: f64,
    upper: f64,
}

impl NumericRange {
    pub const ZERO: Self = Self {
        lower: 0.0,
        upper: 0.0,
    };

    pub fn new(lower: f64, upper: f64) -> ChartResult<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(ChartError::InvalidData(
                "range bounds must be finite".to_owned(),
            ));
        }
        if lower > upper {
            return Err(ChartError::InvalidData(format!(
                "range lower bound {lower} exceeds upper bound {upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// Degenerate range holding exactly `value`.
    pub fn point(value: f64) -> ChartResult<Self> {
        Self::new(value, value)
    }

    /// Range for value charts (bars, lines): always includes the zero baseline.
    ///
    /// Empty input yields `[0, 0]`. Non-finite samples are ignored.
    #[must_use]
    pub fn for_values(values: &[f64]) -> Self {
        match finite_extent(values) {
            Some((min, max)) => Self {
                lower: min.min(0.0),
                upper: max.max(0.0),
            },
            None => Self::ZERO,
        }
    }

    /// Unclamped `[min, max]` of the samples, used for scatter Y bounds.
    ///
    /// Empty input yields `[0, 0]`. Non-finite samples are ignored.
    #[must_use]
    pub fn for_extent(values: &[f64]) -> Self {
        match finite_extent(values) {
            Some((lower, upper)) => Self { lower, upper },
            None => Self::ZERO,
        }
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.upper == self.lower
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Clamps `value` into the range.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    /// Smallest range covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            lower: self.lower.min(other.lower),
            upper: self.upper.max(other.upper),
        }
    }

    /// Widens a degenerate range to `[value - epsilon, value + epsilon]`.
    ///
    /// Non-degenerate ranges are returned unchanged, as are ranges when
    /// `epsilon` is not a finite positive number. For very large values the
    /// widening grows with the magnitude so the result keeps a non-zero span.
    /// Both bounds stay finite: near `f64::MAX` the range only grows toward
    /// zero.
    #[must_use]
    pub fn widened_if_degenerate(self, epsilon: f64) -> Self {
        if !self.is_degenerate() || !epsilon.is_finite() || epsilon <= 0.0 {
            return self;
        }
        let epsilon = epsilon.max(self.upper.abs() * RELATIVE_WIDENING);
        Self {
            lower: (self.lower - epsilon).max(f64::MIN),
            upper: (self.upper + epsilon).min(f64::MAX),
        }
    }

    /// Value at fraction `t` of the way from `upper` down to `lower`.
    ///
    /// Stays finite for ranges whose span overflows, e.g. `[-MAX, MAX]`.
    #[must_use]
    pub fn lerp_down(self, t: f64) -> f64 {
        let span = self.span();
        if span.is_finite() {
            self.upper - span * t
        } else {
            self.upper * (1.0 - t) + self.lower * t
        }
    }
}

impl Default for NumericRange {
    fn default() -> Self {
        Self::ZERO
    }
}

fn finite_extent(values: &[f64]) -> Option<(f64, f64)> {
    let finite = values.iter().copied().filter(|value| value.is_finite());
    let min = finite.clone().map(OrderedFloat).min()?;
    let max = finite.map(OrderedFloat).max()?;
    Some((min.into_inner(), max.into_inner()))
}
