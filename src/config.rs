//! Pipeline configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermnetError};

/// Configuration for corpus analysis and network filtering.
///
/// # Examples
///
/// ```
/// use termnet::config::NetworkConfig;
///
/// let config = NetworkConfig::default();
/// assert_eq!(config.top_n, 25);
/// assert_eq!(config.min_weight, 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Maximum node count of the filtered network.
    pub top_n: usize,
    /// Minimum edge weight kept by the filter.
    pub min_weight: f64,
    /// Corpus-specific stopwords added to the default list.
    pub custom_stopwords: Vec<String>,
    /// Exact-token lemma normalization pairs `(variant, canonical)`.
    pub lemmas: Vec<(String, String)>,
    /// PageRank damping factor.
    pub damping: f64,
    /// PageRank iteration cap.
    pub max_iterations: usize,
    /// Label propagation sweep cap.
    pub max_sweeps: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            top_n: 25,
            min_weight: 1.0,
            custom_stopwords: Vec::new(),
            lemmas: Vec::new(),
            damping: 0.85,
            max_iterations: 100,
            max_sweeps: 20,
        }
    }
}

impl NetworkConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TermnetError::config(format!(
                "cannot read config file '{}': {e}",
                path.display()
            ))
        })?;
        let config: NetworkConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(TermnetError::config("top_n must be positive"));
        }
        if self.min_weight < 0.0 || !self.min_weight.is_finite() {
            return Err(TermnetError::config("min_weight must be non-negative"));
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(TermnetError::config("damping must be in [0, 1)"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = NetworkConfig::default();
        assert_eq!(config.top_n, 25);
        assert_eq!(config.min_weight, 1.0);
        assert_eq!(config.damping, 0.85);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_with_partial_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_n": 10, "custom_stopwords": ["educacional"]}}"#).unwrap();

        let config = NetworkConfig::from_file(file.path()).unwrap();

        assert_eq!(config.top_n, 10);
        assert_eq!(config.custom_stopwords, vec!["educacional"]);
        assert_eq!(config.min_weight, 1.0); // default preserved
    }

    #[test]
    fn test_zero_top_n_is_rejected() {
        let config = NetworkConfig {
            top_n: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_min_weight_is_rejected() {
        let config = NetworkConfig {
            min_weight: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        assert!(NetworkConfig::from_file(Path::new("/no/such/config.json")).is_err());
    }
}
