//! Rule set loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RuleSet;

/// Loads and provides access to the rule parameter set.
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::RuleLoader;
///
/// let loader = RuleLoader::load("./config/rules.yaml").unwrap();
/// let rules = loader.rules();
/// assert_eq!(rules.supplementary_threshold, chrono::Duration::hours(8));
/// ```
#[derive(Debug, Clone)]
pub struct RuleLoader {
    rules: RuleSet,
}

impl RuleLoader {
    /// Loads the rule set from a YAML file.
    ///
    /// Returns an error if the file is missing ([`EngineError::RulesNotFound`])
    /// or fails to parse ([`EngineError::RulesParseError`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::RulesNotFound {
            path: path_str.clone(),
        })?;

        let rules = serde_yaml::from_str(&content).map_err(|e| EngineError::RulesParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { rules })
    }

    /// A loader carrying the statutory defaults, used when no override file
    /// is deployed.
    pub fn with_defaults() -> Self {
        Self {
            rules: RuleSet::default(),
        }
    }

    /// The loaded rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let result = RuleLoader::load("/nonexistent/rules.yaml");
        assert!(matches!(
            result,
            Err(EngineError::RulesNotFound { .. })
        ));
    }

    #[test]
    fn test_with_defaults_matches_default_rule_set() {
        let loader = RuleLoader::with_defaults();
        assert_eq!(loader.rules(), &RuleSet::default());
    }

    #[test]
    fn test_load_parses_yaml() {
        let yaml = serde_yaml::to_string(&RuleSet::default()).unwrap();
        let dir = std::env::temp_dir().join("timecard_engine_rules_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rules.yaml");
        fs::write(&path, yaml).unwrap();

        let loader = RuleLoader::load(&path).unwrap();
        assert_eq!(loader.rules(), &RuleSet::default());
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join("timecard_engine_rules_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.yaml");
        fs::write(&path, "supplementary_threshold: [not a duration").unwrap();

        let result = RuleLoader::load(&path);
        assert!(matches!(
            result,
            Err(EngineError::RulesParseError { .. })
        ));
    }
}
