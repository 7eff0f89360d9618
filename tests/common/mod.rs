// Shared test helpers: render payload builders and an in-process Graphite stub

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::routing::get;
use graphite_check::config::{CheckConfig, HttpConfig};
use graphite_check::decode::SeriesFormat;
use graphite_check::models::ThresholdConfig;
use serde::Serialize;

pub const TARGET: &str = "diamond.testhost.cpu.total.user";

/// Shape Graphite emits for `format=pickle`.
#[derive(Serialize)]
struct RenderSeries<'a> {
    name: &'a str,
    start: i64,
    end: i64,
    step: i64,
    values: Vec<Option<f64>>,
}

pub fn pickle_series(series: &[(&str, Vec<Option<f64>>)]) -> Vec<u8> {
    let entries: Vec<RenderSeries<'_>> = series
        .iter()
        .map(|(name, values)| RenderSeries {
            name: *name,
            start: 1_700_000_000,
            end: 1_700_000_300,
            step: 60,
            values: values.clone(),
        })
        .collect();
    serde_pickle::to_vec(&entries, serde_pickle::SerOptions::new()).unwrap()
}

pub fn pickle_values(values: Vec<Option<f64>>) -> Vec<u8> {
    pickle_series(&[(TARGET, values)])
}

pub fn json_values(values: &[Option<f64>]) -> Vec<u8> {
    let datapoints: Vec<serde_json::Value> = values
        .iter()
        .enumerate()
        .map(|(i, v)| serde_json::json!([v, 1_700_000_000 + 60 * i as i64]))
        .collect();
    serde_json::to_vec(&serde_json::json!([{ "target": TARGET, "datapoints": datapoints }]))
        .unwrap()
}

pub fn check_config(host: &str, warning: f64, critical: f64) -> CheckConfig {
    CheckConfig {
        target: TARGET.to_string(),
        host: host.to_string(),
        window: "-5minutes".to_string(),
        units: "percent".to_string(),
        thresholds: ThresholdConfig::new(warning, critical),
        format: SeriesFormat::Pickle,
        debug: false,
        http: HttpConfig {
            timeout_secs: 5,
            use_env_proxy: false,
            ..HttpConfig::default()
        },
    }
}

pub fn http_config() -> HttpConfig {
    HttpConfig {
        use_env_proxy: false,
        ..HttpConfig::default()
    }
}

pub struct StubGraphite {
    /// `ip:port` to use as the check's host.
    pub host: String,
    pub last_query: Arc<Mutex<Option<String>>>,
    pub hits: Arc<AtomicUsize>,
}

impl StubGraphite {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }
}

/// Serves `GET /render` with a fixed status and body on 127.0.0.1.
pub async fn spawn_graphite(status: u16, body: Vec<u8>) -> StubGraphite {
    let last_query = Arc::new(Mutex::new(None));
    let hits = Arc::new(AtomicUsize::new(0));

    let (q, h) = (last_query.clone(), hits.clone());
    let app = Router::new().route(
        "/render",
        get(move |RawQuery(query): RawQuery| {
            let (q, h, body) = (q.clone(), h.clone(), body.clone());
            async move {
                *q.lock().unwrap() = query;
                h.fetch_add(1, Ordering::SeqCst);
                (StatusCode::from_u16(status).unwrap(), body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubGraphite {
        host: addr.to_string(),
        last_query,
        hits,
    }
}

/// An address nothing is listening on.
pub async fn closed_host() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr.to_string()
}
