// Domain models for a single check invocation

use std::fmt;

use serde::Serialize;

use crate::error::EvalError;

/// One observation in a series; Graphite reports gaps as `None`.
pub type Sample = Option<f64>;

/// The series selected from a render payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPayload {
    pub name: Option<String>,
    pub samples: Vec<Sample>,
}

/// Alert-when-above bounds. `critical` must be >= `warning`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdConfig {
    pub warning: f64,
    pub critical: f64,
}

impl ThresholdConfig {
    pub fn new(warning: f64, critical: f64) -> Self {
        Self { warning, critical }
    }

    /// Rejects inverted bounds. A NaN on either side also fails.
    pub fn validate(&self) -> Result<(), EvalError> {
        if self.critical >= self.warning {
            Ok(())
        } else {
            Err(EvalError::BadConfig {
                warning: self.warning,
                critical: self.critical,
            })
        }
    }
}

/// Monitoring supervisor status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "Warning",
            Status::Critical => "Critical",
            Status::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub value: f64,
    pub status: Status,
    pub message: String,
}
