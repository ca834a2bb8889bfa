//! Engine configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! module_id = "contradiction_detection"
//!
//! [thresholds]
//! critical = 0.85
//! warning = 0.70
//!
//! [enrichment]
//! timeout_ms = 30000
//! provision_relevance_cutoff = 0.8
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};
use crate::finding::Severity;

/// Confidence cutoffs that map a score to a [`Severity`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityThresholds {
    /// Scores at or above this are critical
    pub critical: f64,
    /// Scores at or above this (and below `critical`) are warnings
    pub warning: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            critical: 0.85,
            warning: 0.70,
        }
    }
}

impl SeverityThresholds {
    /// Map a confidence score to a severity.
    pub fn classify(&self, confidence: f64) -> Severity {
        if confidence >= self.critical {
            Severity::Critical
        } else if confidence >= self.warning {
            Severity::Warning
        } else {
            Severity::Info
        }
    }
}

/// Settings for the legal-database fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Upper bound for all three lookups together; expiry fails the analysis
    pub timeout_ms: u64,
    /// Provisions must score strictly above this to back a finding
    pub provision_relevance_cutoff: f64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            provision_relevance_cutoff: 0.8,
        }
    }
}

impl EnrichmentConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Configuration for [`ContradictionEngine`](crate::ContradictionEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Identifier reported in every `ModuleResult`
    pub module_id: String,
    pub thresholds: SeverityThresholds,
    pub enrichment: EnrichmentConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            module_id: "contradiction_detection".to_string(),
            thresholds: SeverityThresholds::default(),
            enrichment: EnrichmentConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| EngineError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| EngineError::ConfigLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&content).map_err(|e| EngineError::ConfigLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Check that thresholds are ordered and within `[0, 1]`.
    pub fn validate(&self) -> EngineResult<()> {
        let SeverityThresholds { critical, warning } = self.thresholds;

        if !(0.0..=1.0).contains(&critical) || !(0.0..=1.0).contains(&warning) {
            return Err(EngineError::Config {
                message: format!(
                    "thresholds must be within [0, 1] (critical = {}, warning = {})",
                    critical, warning
                ),
            });
        }

        if warning > critical {
            return Err(EngineError::Config {
                message: format!(
                    "warning threshold {} exceeds critical threshold {}",
                    warning, critical
                ),
            });
        }

        if self.enrichment.timeout_ms == 0 {
            return Err(EngineError::Config {
                message: "enrichment.timeout_ms must be greater than zero".to_string(),
            });
        }

        if self.module_id.trim().is_empty() {
            return Err(EngineError::Config {
                message: "module_id must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_classify_boundaries() {
        let thresholds = SeverityThresholds::default();
        assert_eq!(thresholds.classify(0.85), Severity::Critical);
        assert_eq!(thresholds.classify(0.849), Severity::Warning);
        assert_eq!(thresholds.classify(0.70), Severity::Warning);
        assert_eq!(thresholds.classify(0.69), Severity::Info);
        assert_eq!(thresholds.classify(0.0), Severity::Info);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [thresholds]
            critical = 0.9
            "#,
        )
        .unwrap();
        assert_eq!(config.thresholds.critical, 0.9);
        assert_eq!(config.thresholds.warning, 0.70);
        assert_eq!(config.enrichment.timeout_ms, 30_000);
        assert_eq!(config.module_id, "contradiction_detection");
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let err = EngineConfig::from_toml_str(
            r#"
            [thresholds]
            critical = 0.6
            warning = 0.7
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let err = EngineConfig::from_toml_str("[thresholds]\ncritical = 1.5").unwrap_err();
        assert!(err.to_string().contains("within [0, 1]"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = EngineConfig::from_toml_str("[enrichment]\ntimeout_ms = 0").unwrap_err();
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = EngineConfig::from_toml_str("thresholds = [").unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "module_id = \"contradictions-v2\"").unwrap();
        writeln!(file, "[enrichment]").unwrap();
        writeln!(file, "timeout_ms = 500").unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.module_id, "contradictions-v2");
        assert_eq!(config.enrichment.timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/engine.toml")).unwrap_err();
        assert!(matches!(err, EngineError::ConfigLoad { .. }));
    }
}
