use serde::{Deserialize, Serialize};

use crate::core::{
    BarScaleTuning, DEFAULT_BAR_SPACING_FACTOR, DEFAULT_DEGENERATE_WIDENING,
    DEFAULT_MAX_BAR_WIDTH, MIN_TICK_COUNT,
};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_TICK_COUNT: usize = 5;

/// Chart-wide composition settings.
///
/// Serializable so hosts can persist and reload chart setup. Validation runs
/// when a `ChartComposer` is built, never during a draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_bar_spacing_factor")]
    pub bar_spacing_factor: f64,
    #[serde(default = "default_max_bar_width")]
    pub max_bar_width: f64,
    #[serde(default = "default_degenerate_widening")]
    pub degenerate_widening: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            tick_count: default_tick_count(),
            bar_spacing_factor: default_bar_spacing_factor(),
            max_bar_width: default_max_bar_width(),
            degenerate_widening: default_degenerate_widening(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of axis ticks (and gridlines) per side.
    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_bar_spacing_factor(mut self, factor: f64) -> Self {
        self.bar_spacing_factor = factor;
        self
    }

    #[must_use]
    pub fn with_max_bar_width(mut self, width: f64) -> Self {
        self.max_bar_width = width;
        self
    }

    /// Sets the half-width used to widen a zero-span merged range.
    #[must_use]
    pub fn with_degenerate_widening(mut self, widening: f64) -> Self {
        self.degenerate_widening = widening;
        self
    }

    #[must_use]
    pub fn bar_tuning(self) -> BarScaleTuning {
        BarScaleTuning {
            spacing_factor: self.bar_spacing_factor,
            max_bar_width: self.max_bar_width,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.tick_count < MIN_TICK_COUNT {
            return Err(ChartError::InvalidTickCount {
                count: self.tick_count,
            });
        }
        if !self.bar_spacing_factor.is_finite() || self.bar_spacing_factor < 0.0 {
            return Err(ChartError::InvalidConfiguration(
                "bar spacing factor must be finite and >= 0".to_owned(),
            ));
        }
        if !self.max_bar_width.is_finite() || self.max_bar_width < 0.0 {
            return Err(ChartError::InvalidConfiguration(
                "max bar width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.degenerate_widening.is_finite() || self.degenerate_widening <= 0.0 {
            return Err(ChartError::InvalidConfiguration(
                "degenerate range widening must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Parses and validates a JSON config. Missing fields take defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfiguration(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidConfiguration(format!("failed to serialize chart config: {e}"))
        })
    }
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

fn default_bar_spacing_factor() -> f64 {
    DEFAULT_BAR_SPACING_FACTOR
}

fn default_max_bar_width() -> f64 {
    DEFAULT_MAX_BAR_WIDTH
}

fn default_degenerate_widening() -> f64 {
    DEFAULT_DEGENERATE_WIDENING
}
