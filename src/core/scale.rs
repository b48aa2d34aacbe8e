use serde::{Deserialize, Serialize};

use crate::core::{NumericRange, PixelSize, Point2D};

/// Bar width cap in pixels.
pub const DEFAULT_MAX_BAR_WIDTH: f64 = 100.0;
/// Total gap budget spread across a bar row; dense rows get thinner gaps.
pub const DEFAULT_BAR_SPACING_FACTOR: f64 = 90.0;

/// Horizontal layout of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum XLayout {
    /// Fixed-width bars separated by `spacing`.
    Bars { spacing: f64 },
    /// Sample `i` sits at `i * step_x`.
    Indexed,
    /// Sample `x` sits at `(x - origin) * step_x`.
    Continuous { origin: f64 },
}

/// Tuning for the bar row heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarScaleTuning {
    pub spacing_factor: f64,
    pub max_bar_width: f64,
}

impl Default for BarScaleTuning {
    fn default() -> Self {
        Self {
            spacing_factor: DEFAULT_BAR_SPACING_FACTOR,
            max_bar_width: DEFAULT_MAX_BAR_WIDTH,
        }
    }
}

/// Data-space to pixel-space mapping for one series.
///
/// Built fresh for every draw request. Larger data values map to smaller
/// pixel Y (the top of the surface). Both steps are always finite and `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale2D {
    size: PixelSize,
    range: NumericRange,
    step_x: f64,
    step_y: f64,
    x_layout: XLayout,
}

impl Scale2D {
    /// Scale for a row of `count` bars with the default tuning.
    #[must_use]
    pub fn for_bars(size: PixelSize, range: NumericRange, count: usize) -> Self {
        Self::for_bars_tuned(size, range, count, BarScaleTuning::default())
    }

    /// Scale for a row of `count` bars.
    ///
    /// `spacing = spacing_factor / count` and
    /// `step_x = min(max(0, width / count - spacing), max_bar_width)`.
    #[must_use]
    pub fn for_bars_tuned(
        size: PixelSize,
        range: NumericRange,
        count: usize,
        tuning: BarScaleTuning,
    ) -> Self {
        let size = size.sanitized();
        let (step_x, spacing) = if count == 0 {
            (0.0, 0.0)
        } else {
            let count = count as f64;
            let spacing = finite_or_zero(tuning.spacing_factor / count).max(0.0);
            let max_width = finite_or_zero(tuning.max_bar_width).max(0.0);
            let width = (size.width / count - spacing).max(0.0).min(max_width);
            (width, spacing)
        };

        Self {
            size,
            range,
            step_x,
            step_y: vertical_step(size, range),
            x_layout: XLayout::Bars { spacing },
        }
    }

    /// Scale for `count` evenly spaced samples spanning the full width.
    #[must_use]
    pub fn for_continuous(size: PixelSize, range: NumericRange, count: usize) -> Self {
        let size = size.sanitized();
        let step_x = if count >= 2 {
            size.width / (count - 1) as f64
        } else {
            0.0
        };

        Self {
            size,
            range,
            step_x,
            step_y: vertical_step(size, range),
            x_layout: XLayout::Indexed,
        }
    }

    /// Scale for samples with their own X coordinate spanning `x_range`.
    #[must_use]
    pub fn for_xy(size: PixelSize, range: NumericRange, x_range: NumericRange) -> Self {
        let size = size.sanitized();
        let step_x = if x_range.is_degenerate() {
            0.0
        } else {
            step_across(size.width, x_range)
        };

        Self {
            size,
            range,
            step_x,
            step_y: vertical_step(size, range),
            x_layout: XLayout::Continuous {
                origin: x_range.lower(),
            },
        }
    }

    #[must_use]
    pub fn size(self) -> PixelSize {
        self.size
    }

    #[must_use]
    pub fn range(self) -> NumericRange {
        self.range
    }

    #[must_use]
    pub fn step_x(self) -> f64 {
        self.step_x
    }

    #[must_use]
    pub fn step_y(self) -> f64 {
        self.step_y
    }

    #[must_use]
    pub fn x_layout(self) -> XLayout {
        self.x_layout
    }

    /// Gap between neighbouring bars; `0` for non-bar layouts.
    #[must_use]
    pub fn bar_spacing(self) -> f64 {
        match self.x_layout {
            XLayout::Bars { spacing } => spacing,
            XLayout::Indexed | XLayout::Continuous { .. } => 0.0,
        }
    }

    /// Pixel Y of a data value: `(upper - value) * step_y`.
    #[must_use]
    pub fn y_to_pixel(self, value: f64) -> f64 {
        scaled_offset(value, self.range.upper(), self.step_y)
    }

    /// Pixel length of a data-space height.
    #[must_use]
    pub fn height_of(self, value_delta: f64) -> f64 {
        finite_or_zero(value_delta * self.step_y)
    }

    /// Pixel X of the sample at `index`.
    ///
    /// For bar layouts this is the left edge of the bar.
    #[must_use]
    pub fn x_at_index(self, index: usize) -> f64 {
        let index = index as f64;
        match self.x_layout {
            XLayout::Bars { spacing } => index * (self.step_x + spacing),
            XLayout::Indexed | XLayout::Continuous { .. } => index * self.step_x,
        }
    }

    /// Pixel X of a data-space X coordinate (continuous layouts).
    #[must_use]
    pub fn x_to_pixel(self, x: f64) -> f64 {
        match self.x_layout {
            XLayout::Continuous { origin } => scaled_offset(origin, x, self.step_x),
            XLayout::Bars { .. } | XLayout::Indexed => finite_or_zero(x * self.step_x),
        }
    }

    /// Maps the `index`-th sample of a value series.
    #[must_use]
    pub fn project_indexed(self, index: usize, value: f64) -> Point2D {
        Point2D::new(self.x_at_index(index), self.y_to_pixel(value))
    }

    /// Maps a data-space `(x, y)` pair.
    #[must_use]
    pub fn project_xy(self, x: f64, y: f64) -> Point2D {
        Point2D::new(self.x_to_pixel(x), self.y_to_pixel(y))
    }
}

fn vertical_step(size: PixelSize, range: NumericRange) -> f64 {
    if range.is_degenerate() {
        return 0.0;
    }
    step_across(size.height, range)
}

/// `extent / range.span()`, also for ranges whose span overflows.
fn step_across(extent: f64, range: NumericRange) -> f64 {
    let span = range.span();
    if span.is_finite() {
        finite_or_zero(extent / span)
    } else {
        finite_or_zero(extent / (range.upper() / 2.0 - range.lower() / 2.0) / 2.0)
    }
}

/// `(to - from) * step` without overflowing on the difference.
fn scaled_offset(from: f64, to: f64, step: f64) -> f64 {
    let delta = to - from;
    if delta.is_finite() {
        finite_or_zero(delta * step)
    } else {
        finite_or_zero((to / 2.0 - from / 2.0) * step * 2.0)
    }
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
