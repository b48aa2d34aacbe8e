use serde::{Deserialize, Serialize};

use crate::core::{BarScaleTuning, NumericRange, PixelSize, Scale2D};

/// One bar rectangle in pixel space.
///
/// The bar is drawn from its anchor (`offset_y`) upward by `height`. When
/// `flipped` is set the same rectangle is mirrored about the anchor so it
/// extends downward instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
    pub flipped: bool,
}

impl BarGeometry {
    /// Top edge after applying the flip.
    #[must_use]
    pub fn top(self) -> f64 {
        if self.flipped {
            self.offset_y
        } else {
            self.offset_y - self.height
        }
    }

    /// Bottom edge after applying the flip.
    #[must_use]
    pub fn bottom(self) -> f64 {
        if self.flipped {
            self.offset_y + self.height
        } else {
            self.offset_y
        }
    }
}

/// Bars of one series plus the row metrics hosts need to draw them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarLayout {
    pub bars: Vec<BarGeometry>,
    pub bar_width: f64,
    pub spacing: f64,
    /// Pixel Y of the anchor line every bar grows from.
    pub baseline_y: f64,
}

impl BarLayout {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Computes bar rectangles against a shared range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarGeometryCalculator {
    tuning: BarScaleTuning,
}

impl BarGeometryCalculator {
    #[must_use]
    pub fn new(tuning: BarScaleTuning) -> Self {
        Self { tuning }
    }

    /// Lays out one bar per value, in input order, as a horizontally
    /// centered row.
    ///
    /// Every bar is anchored at data value `0` (clamped into `range` when the
    /// range excludes zero). Negative bars are flagged `flipped`.
    #[must_use]
    pub fn layout(self, values: &[f64], range: NumericRange, size: PixelSize) -> BarLayout {
        let scale = Scale2D::for_bars_tuned(size, range, values.len(), self.tuning);
        let anchor_value = range.clamp(0.0);
        let baseline_y = scale.y_to_pixel(anchor_value);
        if values.is_empty() {
            return BarLayout {
                baseline_y,
                ..BarLayout::default()
            };
        }

        let bar_width = scale.step_x();
        let spacing = scale.bar_spacing();
        let count = values.len() as f64;
        let row_width = count * bar_width + (count - 1.0) * spacing;
        let row_start = ((scale.size().width - row_width) / 2.0).max(0.0);

        let bars = values
            .iter()
            .enumerate()
            .map(|(index, value)| BarGeometry {
                offset_x: row_start + scale.x_at_index(index),
                offset_y: baseline_y,
                width: bar_width,
                height: scale.height_of(value - anchor_value).abs(),
                flipped: *value < anchor_value,
            })
            .collect();

        BarLayout {
            bars,
            bar_width,
            spacing,
            baseline_y,
        }
    }
}

/// Lays out bars with the default row tuning.
#[must_use]
pub fn project_bars(values: &[f64], range: NumericRange, size: PixelSize) -> BarLayout {
    BarGeometryCalculator::default().layout(values, range, size)
}
