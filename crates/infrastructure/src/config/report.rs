//! Report artifact configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the persisted report artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path the assembled report is written to
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Location used when the command line gives none
    #[serde(default = "default_location")]
    pub default_location: String,
}

fn default_path() -> PathBuf {
    PathBuf::from("weather_forecast.json")
}

fn default_location() -> String {
    "Austin, Texas, USA".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            default_location: default_location(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_cli_contract() {
        let config = ReportConfig::default();
        assert_eq!(config.path, PathBuf::from("weather_forecast.json"));
        assert_eq!(config.default_location, "Austin, Texas, USA");
    }
}
