use serde::{Deserialize, Serialize};

use crate::core::NumericRange;

/// Half-width used to widen a degenerate merged range.
pub const DEFAULT_DEGENERATE_WIDENING: f64 = 1.0;

/// Which label column a series' axis attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSide {
    #[default]
    Left,
    Right,
}

impl AxisSide {
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];
}

/// Merged bounds per axis side. A side no series uses stays `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SideBounds {
    pub left: Option<NumericRange>,
    pub right: Option<NumericRange>,
}

impl SideBounds {
    #[must_use]
    pub fn get(self, side: AxisSide) -> Option<NumericRange> {
        match side {
            AxisSide::Left => self.left,
            AxisSide::Right => self.right,
        }
    }

    fn slot_mut(&mut self, side: AxisSide) -> &mut Option<NumericRange> {
        match side {
            AxisSide::Left => &mut self.left,
            AxisSide::Right => &mut self.right,
        }
    }
}

/// Merges per-series ranges into one range per axis side.
///
/// Every merged range has a non-zero span: degenerate merges are widened
/// symmetrically by `widening`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsAggregator {
    widening: f64,
}

impl Default for BoundsAggregator {
    fn default() -> Self {
        Self {
            widening: DEFAULT_DEGENERATE_WIDENING,
        }
    }
}

impl BoundsAggregator {
    /// Uses `widening` for degenerate merges; falls back to the default
    /// when it is not a finite positive number.
    #[must_use]
    pub fn with_widening(widening: f64) -> Self {
        if widening.is_finite() && widening > 0.0 {
            Self { widening }
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn widening(self) -> f64 {
        self.widening
    }

    #[must_use]
    pub fn aggregate<I>(self, entries: I) -> SideBounds
    where
        I: IntoIterator<Item = (NumericRange, AxisSide)>,
    {
        let mut merged = SideBounds::default();
        for (range, side) in entries {
            let slot = merged.slot_mut(side);
            *slot = Some(match *slot {
                Some(existing) => existing.union(range),
                None => range,
            });
        }

        for side in AxisSide::ALL {
            let slot = merged.slot_mut(side);
            if let Some(range) = *slot {
                *slot = Some(range.widened_if_degenerate(self.widening));
            }
        }
        merged
    }
}

/// Aggregates with the default widening policy.
#[must_use]
pub fn aggregate_bounds<I>(entries: I) -> SideBounds
where
    I: IntoIterator<Item = (NumericRange, AxisSide)>,
{
    BoundsAggregator::default().aggregate(entries)
}
