// One check cycle: validate -> fetch -> evaluate -> report.
// Every failure ends the cycle as an UNKNOWN report.

use tracing::{debug, info, warn};

use crate::config::CheckConfig;
use crate::error::EvalError;
use crate::evaluator::Evaluator;
use crate::fetcher::{GraphiteFetcher, render_url};
use crate::report::Report;

pub async fn run_check(config: &CheckConfig) -> Report {
    match GraphiteFetcher::from_config(&config.http) {
        Ok(fetcher) => run_check_with(config, &fetcher).await,
        Err(e) => Report::unknown(format!("ERROR: {}", e)),
    }
}

pub async fn run_check_with(config: &CheckConfig, fetcher: &GraphiteFetcher) -> Report {
    // Inverted thresholds fail before any request is made.
    if let Err(EvalError::BadConfig { warning, critical }) = config.thresholds.validate() {
        return bad_config(warning, critical);
    }

    let url = render_url(&config.host, &config.window, &config.target, config.format);
    debug!(%url, "render url");

    let payload = match fetcher.fetch(&url).await {
        Ok(payload) => payload,
        Err(e) => {
            warn!("{}", e);
            return Report::unknown(format!("ERROR: Could not fetch data from URL - {}", e.url()));
        }
    };

    let evaluator = Evaluator::new(config.target.as_str(), config.format);
    match evaluator.evaluate(&payload, &config.thresholds) {
        Ok(result) => {
            info!(value = result.value, status = %result.status, "check complete");
            Report::from_result(result, evaluator.target(), &config.units, &config.thresholds)
        }
        Err(e) => unknown_from_eval(e, &url),
    }
}

fn unknown_from_eval(err: EvalError, url: &str) -> Report {
    match err {
        EvalError::BadConfig { warning, critical } => bad_config(warning, critical),
        EvalError::NoData(reason) => {
            warn!(url, %reason, "no usable data");
            Report::unknown(format!("ERROR: Could not parse data from URL - {}", url))
        }
    }
}

fn bad_config(warning: f64, critical: f64) -> Report {
    Report::unknown(format!(
        "ERROR: Critical level ({}) is set LOWER than Warning level ({})",
        critical, warning
    ))
}
