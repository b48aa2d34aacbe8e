use serde::{Deserialize, Serialize};

use crate::core::NumericRange;
use crate::error::{ChartError, ChartResult};

/// Smallest tick count that still describes an interval.
pub const MIN_TICK_COUNT: usize = 2;

/// Evenly spaced axis ticks for a validated tick count.
///
/// The count is checked once at construction so drawing code never sees a
/// tick-count error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTickGenerator {
    count: usize,
}

impl AxisTickGenerator {
    pub fn new(count: usize) -> ChartResult<Self> {
        validate_tick_count(count)?;
        Ok(Self { count })
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    /// Tick values ordered from `range.upper()` down to `range.lower()`.
    #[must_use]
    pub fn values(self, range: NumericRange) -> Vec<f64> {
        descending_ticks(range, self.count)
    }

    /// Pixel offsets from the top edge, one per tick.
    #[must_use]
    pub fn pixel_offsets(self, pixel_extent: f64) -> Vec<f64> {
        evenly_spaced_offsets(self.count, pixel_extent)
    }
}

/// Returns `count` tick values from `range.upper()` down to `range.lower()` inclusive.
pub fn axis_ticks(range: NumericRange, count: usize) -> ChartResult<Vec<f64>> {
    validate_tick_count(count)?;
    Ok(descending_ticks(range, count))
}

/// Returns `count` offsets `extent / (count - 1) * i`; all zero for an empty extent.
pub fn tick_pixel_offsets(count: usize, pixel_extent: f64) -> ChartResult<Vec<f64>> {
    validate_tick_count(count)?;
    Ok(evenly_spaced_offsets(count, pixel_extent))
}

fn validate_tick_count(count: usize) -> ChartResult<()> {
    if count < MIN_TICK_COUNT {
        return Err(ChartError::InvalidTickCount { count });
    }
    Ok(())
}

fn descending_ticks(range: NumericRange, count: usize) -> Vec<f64> {
    let (lower, upper) = (range.lower(), range.upper());
    if range.is_degenerate() {
        return vec![upper; count];
    }

    let last = count - 1;
    let denominator = last as f64;
    let mut ticks = Vec::with_capacity(count);
    let mut previous = upper;
    for index in 0..count {
        let value = if index == 0 {
            upper
        } else if index == last {
            lower
        } else {
            // Rounding must never reorder neighbours or leave the interval.
            range
                .lerp_down(index as f64 / denominator)
                .clamp(lower, upper)
                .min(previous)
        };
        ticks.push(value);
        previous = value;
    }
    ticks
}

fn evenly_spaced_offsets(count: usize, pixel_extent: f64) -> Vec<f64> {
    if !pixel_extent.is_finite() || pixel_extent <= 0.0 {
        return vec![0.0; count];
    }

    let step = pixel_extent / (count - 1) as f64;
    (0..count).map(|index| step * index as f64).collect()
}
