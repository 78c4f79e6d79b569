//! Bridges persisted configuration into analysis settings.

use finsight_config::Config;
use finsight_core::AnalysisSettings;

pub fn analysis_settings(config: &Config) -> AnalysisSettings {
    AnalysisSettings {
        history_months: config.history_months,
        confidence_interval: config.confidence_interval,
        confidence_band: config.confidence_band,
        currency: config.currency.clone(),
        max_months_to_project: config.max_months_to_project,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_reproduces_default_settings() {
        assert_eq!(
            analysis_settings(&Config::default()),
            AnalysisSettings::default()
        );
    }
}
