//! Configuration loaded from persona_mind.toml and environment variables.

use serde::{Deserialize, Serialize};

use crate::insight::MAX_PER_CATEGORY;
use crate::insight::ids::IdSourceKind;

/// Main configuration structure. The file is optional; every field has
/// a sensible default and env vars override whatever was loaded.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Engine tunables.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Insights per category, capped at the engine ceiling of 3.
    pub quota: usize,
    /// Emit the generic fallback insight when a category's rules all
    /// miss but the profile has data.
    pub emit_fallback: bool,
    /// ID scheme for generated insights.
    pub id_source: IdSourceKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quota: MAX_PER_CATEGORY,
            emit_fallback: true,
            id_source: IdSourceKind::Uuid,
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses PERSONA_MIND_CONFIG for the path or defaults to
    /// "persona_mind.toml".
    pub fn load() -> crate::error::Result<Self> {
        let config_path = std::env::var("PERSONA_MIND_CONFIG")
            .unwrap_or_else(|_| "persona_mind.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        // Env overrides (env-first)
        if let Ok(quota) = std::env::var("PERSONA_MIND_QUOTA") {
            match quota.parse::<usize>() {
                Ok(parsed) => config.engine.quota = parsed,
                Err(_) => tracing::warn!("ignoring non-numeric PERSONA_MIND_QUOTA '{}'", quota),
            }
        }
        if let Ok(fallback) = std::env::var("PERSONA_MIND_FALLBACK") {
            config.engine.emit_fallback = matches!(
                fallback.to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
        if let Ok(ids) = std::env::var("PERSONA_MIND_IDS") {
            match ids.to_lowercase().as_str() {
                "uuid" => config.engine.id_source = IdSourceKind::Uuid,
                "sequential" => config.engine.id_source = IdSourceKind::Sequential,
                other => tracing::warn!("ignoring unknown PERSONA_MIND_IDS '{}'", other),
            }
        }

        // The quota is a hard product ceiling, not merely a default.
        if config.engine.quota == 0 || config.engine.quota > MAX_PER_CATEGORY {
            tracing::warn!(
                "quota {} outside 1..={}, clamping",
                config.engine.quota,
                MAX_PER_CATEGORY
            );
            config.engine.quota = config.engine.quota.clamp(1, MAX_PER_CATEGORY);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.engine.quota, 3);
        assert!(config.engine.emit_fallback);
        assert_eq!(config.engine.id_source, IdSourceKind::Uuid);
    }

    #[test]
    fn test_toml_roundtrip() {
        let parsed: Config = toml::from_str(
            r#"
            [engine]
            quota = 2
            emit_fallback = false
            id_source = "sequential"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.engine.quota, 2);
        assert!(!parsed.engine.emit_fallback);
        assert_eq!(parsed.engine.id_source, IdSourceKind::Sequential);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.engine.quota, 3);
    }
}
