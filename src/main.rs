use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use graphite_check::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Logs go to stderr; stdout is reserved for the single status line.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit(report: report::Report) -> ExitCode {
    println!("{}", report);
    ExitCode::from(report.exit_code())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match cli::CheckArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => return emit(report::Report::from_cli_error(&e)),
    };

    init_tracing(args.debug);
    tracing::debug!("{} {} starting", version::NAME, version::VERSION);

    let config = match config::CheckConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => return emit(report::Report::unknown(format!("ERROR: {}", e))),
    };

    emit(check::run_check(&config).await)
}
