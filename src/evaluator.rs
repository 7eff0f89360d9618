// Decode -> normalize -> mean -> classify.
// Pure: same payload and thresholds always give the same result.

use tracing::debug;

use crate::decode::SeriesFormat;
use crate::error::EvalError;
use crate::models::{EvaluationResult, Sample, Status, ThresholdConfig};

pub struct Evaluator {
    target: String,
    format: SeriesFormat,
}

impl Evaluator {
    pub fn new(target: impl Into<String>, format: SeriesFormat) -> Self {
        Self {
            target: target.into(),
            format,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Reduces the first series in `payload` to its mean and classifies it.
    /// Threshold inversion is reported before the payload is looked at.
    pub fn evaluate(
        &self,
        payload: &[u8],
        thresholds: &ThresholdConfig,
    ) -> Result<EvaluationResult, EvalError> {
        thresholds.validate()?;

        let series = self.format.decode(payload)?;
        let values = normalize(&series.samples);
        debug!(target_name = %self.target, ?values, "normalized samples");

        let value = mean(&values)
            .ok_or_else(|| EvalError::no_data("series contains no samples"))?;
        let result = EvaluationResult {
            value,
            status: classify(value, thresholds),
            message: format!("{} = {:.6}", self.target, value),
        };
        debug!(
            result = %serde_json::to_string(&result).unwrap_or_default(),
            "evaluated series"
        );

        Ok(result)
    }
}

/// Missing samples count as zero and stay in the mean.
pub fn normalize(samples: &[Sample]) -> Vec<f64> {
    samples.iter().map(|s| s.unwrap_or(0.0)).collect()
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / (values.len() as f64))
}

/// Critical wins over warning. Both bounds are inclusive.
pub fn classify(value: f64, thresholds: &ThresholdConfig) -> Status {
    if value >= thresholds.critical {
        Status::Critical
    } else if value >= thresholds.warning {
        Status::Warning
    } else {
        Status::Ok
    }
}
