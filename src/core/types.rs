use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel-space size of the drawing surface, supplied by the host after layout.
///
/// Before the first layout pass hosts pass `PixelSize::ZERO`; every geometry
/// function degrades to zero-sized output for it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns a copy with non-finite or negative dimensions replaced by `0`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            width: sanitize_extent(self.width),
            height: sanitize_extent(self.height),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        let size = self.sanitized();
        size.width == 0.0 || size.height == 0.0
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Point in pixel coordinates (origin top-left, Y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Scatter sample in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "data point coordinates must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
