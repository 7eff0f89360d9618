use std::path::Path;

use serde::Deserialize;

use crate::cli::CheckArgs;
use crate::decode::SeriesFormat;
use crate::models::ThresholdConfig;
use crate::version;

/// Everything one check invocation needs, assembled from the command line
/// plus the optional transport file.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub target: String,
    pub host: String,
    pub window: String,
    pub units: String,
    pub thresholds: ThresholdConfig,
    pub format: SeriesFormat,
    pub debug: bool,
    pub http: HttpConfig,
}

/// Contents of the `--config` TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "version::user_agent")]
    pub user_agent: String,
    /// Honor HTTP_PROXY / NO_PROXY style environment variables.
    #[serde(default = "default_use_env_proxy")]
    pub use_env_proxy: bool,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_use_env_proxy() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: version::user_agent(),
            use_env_proxy: default_use_env_proxy(),
        }
    }
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: FileConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.http.timeout_secs > 0,
            "http.timeout_secs must be > 0, got {}",
            self.http.timeout_secs
        );
        anyhow::ensure!(
            !self.http.user_agent.is_empty(),
            "http.user_agent must be non-empty"
        );
        Ok(())
    }
}

impl CheckConfig {
    pub fn from_args(args: CheckArgs) -> anyhow::Result<Self> {
        let file = match args.config.as_deref() {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let config = CheckConfig {
            target: args.target,
            host: args.host,
            window: args.window,
            units: args.units,
            thresholds: ThresholdConfig::new(args.warning, args.critical),
            format: args.format,
            debug: args.debug,
            http: file.http,
        };
        config.validate()?;
        Ok(config)
    }

    /// Field-level checks only; threshold ordering is left to the evaluator
    /// so it is reported with its own message.
    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.target.trim().is_empty(), "target must be non-empty");
        anyhow::ensure!(!self.host.trim().is_empty(), "host must be non-empty");
        anyhow::ensure!(!self.window.trim().is_empty(), "window must be non-empty");
        anyhow::ensure!(
            self.thresholds.warning.is_finite(),
            "warning must be a finite number, got {}",
            self.thresholds.warning
        );
        anyhow::ensure!(
            self.thresholds.critical.is_finite(),
            "critical must be a finite number, got {}",
            self.thresholds.critical
        );
        Ok(())
    }
}
