//! Named usage thresholds.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use finsight_shared::{AppConfig, AppResult, ThresholdConfig};

use super::error::ThresholdError;

/// Default at-risk threshold (percent).
pub const DEFAULT_AT_RISK_PERCENT: Decimal = dec!(75);

/// Default over-limit threshold (percent).
pub const DEFAULT_OVER_LIMIT_PERCENT: Decimal = dec!(100);

/// Default critical alert threshold (percent).
///
/// Sits below [`DEFAULT_OVER_LIMIT_PERCENT`]. The two values are configured
/// independently and must not be merged.
pub const DEFAULT_CRITICAL_ALERT_PERCENT: Decimal = dec!(90);

/// Validated set of usage thresholds shared by every classifier.
///
/// All comparisons are `>=`: a usage equal to a threshold falls into the
/// higher-severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageThresholds {
    at_risk_percent: Decimal,
    over_limit_percent: Decimal,
    critical_alert_percent: Decimal,
}

impl UsageThresholds {
    /// Creates a validated threshold set.
    ///
    /// # Errors
    ///
    /// Returns `ThresholdError::NotPositive` if any value is zero or negative,
    /// `ThresholdError::AtRiskNotBelowCritical` if at-risk >= critical, and
    /// `ThresholdError::AtRiskNotBelowOverLimit` if at-risk >= over-limit.
    pub fn new(
        at_risk_percent: Decimal,
        over_limit_percent: Decimal,
        critical_alert_percent: Decimal,
    ) -> Result<Self, ThresholdError> {
        for (name, value) in [
            ("at_risk_percent", at_risk_percent),
            ("over_limit_percent", over_limit_percent),
            ("critical_alert_percent", critical_alert_percent),
        ] {
            if value <= Decimal::ZERO {
                return Err(ThresholdError::NotPositive { name, value });
            }
        }

        if at_risk_percent >= critical_alert_percent {
            return Err(ThresholdError::AtRiskNotBelowCritical {
                at_risk: at_risk_percent,
                critical: critical_alert_percent,
            });
        }

        if at_risk_percent >= over_limit_percent {
            return Err(ThresholdError::AtRiskNotBelowOverLimit {
                at_risk: at_risk_percent,
                over_limit: over_limit_percent,
            });
        }

        Ok(Self {
            at_risk_percent,
            over_limit_percent,
            critical_alert_percent,
        })
    }

    /// Builds thresholds from loaded configuration.
    ///
    /// # Errors
    ///
    /// Same as [`UsageThresholds::new`].
    pub fn from_config(config: &ThresholdConfig) -> Result<Self, ThresholdError> {
        Self::new(
            config.at_risk_percent,
            config.over_limit_percent,
            config.critical_alert_percent,
        )
    }

    /// Loads and validates thresholds from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if the configuration cannot be
    /// loaded or the thresholds are inconsistent.
    pub fn load() -> AppResult<Self> {
        let config = AppConfig::load()?;
        let thresholds = Self::from_config(&config.thresholds)?;

        tracing::debug!(
            at_risk = %thresholds.at_risk_percent,
            over_limit = %thresholds.over_limit_percent,
            critical = %thresholds.critical_alert_percent,
            "loaded usage thresholds"
        );

        Ok(thresholds)
    }

    /// Usage at which a budget becomes at-risk.
    #[must_use]
    pub const fn at_risk_percent(&self) -> Decimal {
        self.at_risk_percent
    }

    /// Usage at which a budget is over its limit.
    #[must_use]
    pub const fn over_limit_percent(&self) -> Decimal {
        self.over_limit_percent
    }

    /// Usage at which an alert escalates to critical.
    #[must_use]
    pub const fn critical_alert_percent(&self) -> Decimal {
        self.critical_alert_percent
    }
}

impl Default for UsageThresholds {
    fn default() -> Self {
        Self {
            at_risk_percent: DEFAULT_AT_RISK_PERCENT,
            over_limit_percent: DEFAULT_OVER_LIMIT_PERCENT,
            critical_alert_percent: DEFAULT_CRITICAL_ALERT_PERCENT,
        }
    }
}

impl TryFrom<&ThresholdConfig> for UsageThresholds {
    type Error = ThresholdError;

    fn try_from(config: &ThresholdConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = UsageThresholds::default();
        assert_eq!(thresholds.at_risk_percent(), dec!(75));
        assert_eq!(thresholds.over_limit_percent(), dec!(100));
        assert_eq!(thresholds.critical_alert_percent(), dec!(90));
    }

    #[test]
    fn test_default_matches_default_config() {
        let from_config = UsageThresholds::from_config(&ThresholdConfig::default()).unwrap();
        assert_eq!(from_config, UsageThresholds::default());
    }

    #[test]
    fn test_thresholds_are_independent() {
        // Critical above over-limit is allowed; the values do not have to move together.
        let thresholds = UsageThresholds::new(dec!(80), dec!(100), dec!(110)).unwrap();
        assert_eq!(thresholds.critical_alert_percent(), dec!(110));

        let thresholds = UsageThresholds::new(dec!(60), dec!(120), dec!(85)).unwrap();
        assert_eq!(thresholds.over_limit_percent(), dec!(120));
    }

    #[test]
    fn test_rejects_at_risk_not_below_critical() {
        let result = UsageThresholds::new(dec!(90), dec!(100), dec!(90));
        assert!(matches!(
            result,
            Err(ThresholdError::AtRiskNotBelowCritical { .. })
        ));
    }

    #[test]
    fn test_rejects_at_risk_not_below_over_limit() {
        let result = UsageThresholds::new(dec!(100), dec!(100), dec!(120));
        assert!(matches!(
            result,
            Err(ThresholdError::AtRiskNotBelowOverLimit { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive() {
        let result = UsageThresholds::new(dec!(0), dec!(100), dec!(90));
        assert_eq!(
            result,
            Err(ThresholdError::NotPositive {
                name: "at_risk_percent",
                value: dec!(0),
            })
        );
    }

    #[test]
    fn test_from_config_keeps_fractional_values() {
        let config = ThresholdConfig {
            at_risk_percent: dec!(72.5),
            over_limit_percent: dec!(100),
            critical_alert_percent: dec!(87.5),
        };
        let thresholds = UsageThresholds::from_config(&config).unwrap();
        assert_eq!(thresholds.at_risk_percent(), dec!(72.5));
        assert_eq!(thresholds.critical_alert_percent(), dec!(87.5));
    }

    #[test]
    fn test_load_reads_environment() {
        temp_env::with_vars(
            [
                ("FINSIGHT__THRESHOLDS__AT_RISK_PERCENT", None),
                ("FINSIGHT__THRESHOLDS__OVER_LIMIT_PERCENT", None),
                ("FINSIGHT__THRESHOLDS__CRITICAL_ALERT_PERCENT", Some("87.5")),
            ],
            || {
                let thresholds = UsageThresholds::load().unwrap();
                assert_eq!(thresholds.critical_alert_percent(), dec!(87.5));
                assert_eq!(thresholds.at_risk_percent(), dec!(75));
            },
        );
    }

    #[test]
    fn test_load_rejects_inconsistent_environment() {
        temp_env::with_vars(
            [
                ("FINSIGHT__THRESHOLDS__AT_RISK_PERCENT", Some("95")),
                ("FINSIGHT__THRESHOLDS__OVER_LIMIT_PERCENT", None),
                ("FINSIGHT__THRESHOLDS__CRITICAL_ALERT_PERCENT", None),
            ],
            || {
                let err = UsageThresholds::load().unwrap_err();
                assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
            },
        );
    }

    #[test]
    fn test_try_from_config() {
        let config = ThresholdConfig {
            at_risk_percent: dec!(95),
            over_limit_percent: dec!(100),
            critical_alert_percent: dec!(90),
        };
        let result = UsageThresholds::try_from(&config);
        assert!(result.is_err());

        let err: finsight_shared::AppError = result.unwrap_err().into();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }
}
