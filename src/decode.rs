// Graphite render payload decoding (pickle and json formats).
// Only the first series of a payload is used; the rest are ignored.

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::EvalError;
use crate::models::{Sample, SeriesPayload};

/// Value of the render API `format=` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SeriesFormat {
    #[default]
    Pickle,
    Json,
}

impl SeriesFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            SeriesFormat::Pickle => "pickle",
            SeriesFormat::Json => "json",
        }
    }

    pub fn decode(self, payload: &[u8]) -> Result<SeriesPayload, EvalError> {
        match self {
            SeriesFormat::Pickle => decode_pickle(payload),
            SeriesFormat::Json => decode_json(payload),
        }
    }
}

/// One entry of `format=pickle`: a dict with name/start/end/step/values.
#[derive(Debug, Deserialize)]
struct PickleSeries {
    name: Option<String>,
    values: Option<Vec<Sample>>,
}

/// One entry of `format=json`: `{"target": .., "datapoints": [[value, ts], ..]}`.
#[derive(Debug, Deserialize)]
struct JsonSeries {
    target: Option<String>,
    datapoints: Option<Vec<(Sample, Option<f64>)>>,
}

pub fn decode_pickle(payload: &[u8]) -> Result<SeriesPayload, EvalError> {
    let options = serde_pickle::DeOptions::new().decode_strings();
    let series: Vec<PickleSeries> =
        serde_pickle::from_slice(payload, options).map_err(EvalError::no_data)?;

    let first = series
        .into_iter()
        .next()
        .ok_or_else(|| EvalError::no_data("payload contains no series"))?;
    let samples = first
        .values
        .ok_or_else(|| EvalError::no_data("series has no 'values' attribute"))?;

    Ok(SeriesPayload {
        name: first.name,
        samples,
    })
}

pub fn decode_json(payload: &[u8]) -> Result<SeriesPayload, EvalError> {
    let series: Vec<JsonSeries> = serde_json::from_slice(payload).map_err(EvalError::no_data)?;

    let first = series
        .into_iter()
        .next()
        .ok_or_else(|| EvalError::no_data("payload contains no series"))?;
    let datapoints = first
        .datapoints
        .ok_or_else(|| EvalError::no_data("series has no 'datapoints' attribute"))?;

    Ok(SeriesPayload {
        name: first.target,
        samples: datapoints.into_iter().map(|(value, _ts)| value).collect(),
    })
}
