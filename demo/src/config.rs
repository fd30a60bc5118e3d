//! Runtime configuration, read from the environment

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DATA_DIR_VAR: &str = "LINREG_DATA_DIR";
pub const FEATURE_VAR: &str = "LINREG_FEATURE";
pub const TEST_SIZE_VAR: &str = "LINREG_TEST_SIZE";
pub const PLOT_VAR: &str = "LINREG_PLOT";
pub const MODEL_JSON_VAR: &str = "LINREG_MODEL_JSON";

/// Body mass index
const DEFAULT_FEATURE: usize = 2;
const DEFAULT_TEST_SIZE: usize = 20;
const DEFAULT_PLOT: &str = "ols_diabetes.svg";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Settings of a single run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory with the diabetes files, the bundled copy is used when unset
    pub data_dir: Option<PathBuf>,
    /// Feature column used as the single regressor
    pub feature: usize,
    /// Number of trailing samples held out for testing
    pub test_size: usize,
    /// Where the chart is written
    pub plot_path: PathBuf,
    /// Where the fitted model is written as JSON, if anywhere
    pub model_json: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: None,
            feature: DEFAULT_FEATURE,
            test_size: DEFAULT_TEST_SIZE,
            plot_path: PathBuf::from(DEFAULT_PLOT),
            model_json: None,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration from an arbitrary key-value source, unset or empty keys fall back
    /// to the defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Config::default();

        Ok(Config {
            data_dir: lookup(DATA_DIR_VAR).map(PathBuf::from),
            feature: parse_or(lookup(FEATURE_VAR), FEATURE_VAR, defaults.feature)?,
            test_size: parse_or(lookup(TEST_SIZE_VAR), TEST_SIZE_VAR, defaults.test_size)?,
            plot_path: lookup(PLOT_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.plot_path),
            model_json: lookup(MODEL_JSON_VAR).map(PathBuf::from),
        })
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_in(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.data_dir, None);
        assert_eq!(config.feature, 2);
        assert_eq!(config.test_size, 20);
        assert_eq!(config.model_json, None);
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_lookup(lookup_in(&[
            (DATA_DIR_VAR, "/tmp/diabetes"),
            (FEATURE_VAR, "0"),
            (TEST_SIZE_VAR, " 42 "),
            (PLOT_VAR, "out.svg"),
            (MODEL_JSON_VAR, "model.json"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/diabetes")));
        assert_eq!(config.feature, 0);
        assert_eq!(config.test_size, 42);
        assert_eq!(config.plot_path, PathBuf::from("out.svg"));
        assert_eq!(config.model_json, Some(PathBuf::from("model.json")));
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config =
            Config::from_lookup(lookup_in(&[(FEATURE_VAR, ""), (MODEL_JSON_VAR, "  ")])).unwrap();

        assert_eq!(config.feature, 2);
        assert_eq!(config.model_json, None);
    }

    #[test]
    fn rejects_invalid_numbers() {
        let err = Config::from_lookup(lookup_in(&[(TEST_SIZE_VAR, "-3")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                key: TEST_SIZE_VAR,
                value: "-3".to_string()
            }
        );
    }
}
