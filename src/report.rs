// Plugin output: one status line plus optional performance data.
//   Status Warning, some.target = 51.030000|some.target=51.03%;50;80;;

use std::fmt;

use crate::models::{EvaluationResult, Status, ThresholdConfig};

/// Machine-readable suffix after `|` on the status line.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfData {
    pub label: String,
    pub value: f64,
    pub uom: &'static str,
    pub warning: f64,
    pub critical: f64,
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.contains([' ', '=', '\'']) {
            write!(f, "'{}'", self.label.replace('\'', "''"))?;
        } else {
            f.write_str(&self.label)?;
        }
        write!(
            f,
            "={}{};{};{};;",
            self.value, self.uom, self.warning, self.critical
        )
    }
}

/// Unit-of-measure suffix for perf data; unrecognised units get none.
pub fn units_to_uom(units: &str) -> &'static str {
    match units.to_ascii_lowercase().as_str() {
        "percent" | "%" => "%",
        "seconds" | "s" => "s",
        "milliseconds" | "ms" => "ms",
        "microseconds" | "us" => "us",
        "bytes" | "b" => "B",
        "kilobytes" | "kb" => "KB",
        "megabytes" | "mb" => "MB",
        "gigabytes" | "gb" => "GB",
        "counter" | "c" => "c",
        _ => "",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub status: Status,
    pub message: String,
    pub perfdata: Option<PerfData>,
}

impl Report {
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            status: Status::Unknown,
            message: message.into(),
            perfdata: None,
        }
    }

    /// Folds a clap parse error into one line: the headline plus its indented
    /// detail lines (e.g. the names of missing arguments), without usage text.
    pub fn from_cli_error(err: &clap::Error) -> Self {
        let rendered = err.to_string();
        let reason = rendered
            .lines()
            .take_while(|line| !line.trim().is_empty())
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");
        let reason = reason.strip_prefix("error: ").unwrap_or(&reason);
        Self::unknown(format!("ERROR: {}", reason))
    }

    pub fn from_result(
        result: EvaluationResult,
        target: &str,
        units: &str,
        thresholds: &ThresholdConfig,
    ) -> Self {
        Self {
            status: result.status,
            perfdata: Some(PerfData {
                label: target.to_string(),
                value: result.value,
                uom: units_to_uom(units),
                warning: thresholds.warning,
                critical: thresholds.critical,
            }),
            message: result.message,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.status.exit_code()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status {}, {}", self.status, self.message)?;
        if let Some(perfdata) = &self.perfdata {
            write!(f, "|{}", perfdata)?;
        }
        Ok(())
    }
}
