use crate::assets::AssetLoader;
use palette_match::{DistanceMetric, DEFAULT_SUGGESTION_LIMIT};
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Metric used by color matching when a request names none
    #[serde(default = "default_metric")]
    pub default_metric: String,

    /// How many suggestions an unmatched name reports
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

fn default_metric() -> String {
    DistanceMetric::default().name().to_string()
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => Self::from_yaml(&content),
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration; anything unusable falls back to its default.
    pub fn from_yaml(content: &str) -> Self {
        let mut config: Self = match serde_yaml::from_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                return Self::default();
            }
        };

        if let Err(e) = config.default_metric.parse::<DistanceMetric>() {
            tracing::warn!(%e, "Invalid default_metric, using default");
            config.default_metric = default_metric();
        }

        tracing::info!(
            default_metric = %config.default_metric,
            suggestion_limit = config.suggestion_limit,
            "Loaded configuration"
        );
        config
    }

    /// The configured default metric.
    pub fn metric(&self) -> DistanceMetric {
        self.default_metric.parse().unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_metric: default_metric(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}
