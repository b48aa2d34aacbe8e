use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ComposedChart;

pub const COMPOSED_CHART_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedChartJsonContractV1 {
    pub schema_version: u32,
    pub chart: ComposedChart,
}

impl ComposedChart {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize composed chart: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ComposedChartJsonContractV1 {
            schema_version: COMPOSED_CHART_JSON_SCHEMA_V1,
            chart: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize composed chart contract v1: {e}"))
        })
    }

    /// Accepts either a bare chart or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(chart) = serde_json::from_str::<ComposedChart>(input) {
            return Ok(chart);
        }
        let payload: ComposedChartJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse composed chart json payload: {e}"))
        })?;
        if payload.schema_version != COMPOSED_CHART_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidConfiguration(format!(
                "unsupported composed chart schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.chart)
    }
}
