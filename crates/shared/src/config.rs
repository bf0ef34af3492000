//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Budget usage thresholds.
    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

/// Budget usage thresholds, in percent of the budgeted amount.
///
/// These are raw values; the core crate validates them before use. Fractional
/// values such as `87.5` are accepted from files and the environment.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ThresholdConfig {
    /// Usage at which a budget becomes at-risk and a warning alert is raised.
    #[serde(default = "default_at_risk_percent")]
    pub at_risk_percent: Decimal,
    /// Usage at which a budget is over its limit.
    #[serde(default = "default_over_limit_percent")]
    pub over_limit_percent: Decimal,
    /// Usage at which an alert escalates to critical and becomes urgent.
    #[serde(default = "default_critical_alert_percent")]
    pub critical_alert_percent: Decimal,
}

fn default_at_risk_percent() -> Decimal {
    Decimal::from(75)
}

fn default_over_limit_percent() -> Decimal {
    Decimal::ONE_HUNDRED
}

fn default_critical_alert_percent() -> Decimal {
    Decimal::from(90)
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            at_risk_percent: default_at_risk_percent(),
            over_limit_percent: default_over_limit_percent(),
            critical_alert_percent: default_critical_alert_percent(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `.env`, config files and the environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `FINSIGHT__`-prefixed variables (e.g.
    /// `FINSIGHT__THRESHOLDS__AT_RISK_PERCENT=80`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINSIGHT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
