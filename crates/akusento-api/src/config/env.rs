//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use akusento::config::{CandidatesConfig, DictionaryConfig, LogLevel, LoggingConfig};
use akusento::{AkusentoConfig, DictionaryPreset};

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_PRESET_DICT};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:8000")
  pub bind_addr: String,
  /// Dictionary preset to use
  pub preset: DictionaryPreset,
  /// Dictionary cache directory (OS cache directory when unset)
  pub dict_cache_dir: Option<PathBuf>,
  /// Extra seed words, one per line
  pub seed_file: Option<PathBuf>,
  /// Candidate snapshot written by `build_candidates`
  pub candidates_file: Option<PathBuf>,
  /// Default log level (RUST_LOG takes precedence)
  pub log_level: LogLevel,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      preset: DictionaryPreset::UnidicCwj,
      dict_cache_dir: None,
      seed_file: None,
      candidates_file: None,
      log_level: LogLevel::default(),
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through `lookup` (environment variables in production)
  ///
  /// # Errors
  /// Returns an error if a preset or log level cannot be parsed
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup("AKUSENTO_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let preset_dict_str =
      lookup("AKUSENTO_PRESET_DICT").unwrap_or_else(|| DEFAULT_PRESET_DICT.to_string());
    let preset = DictionaryPreset::from_str(&preset_dict_str).map_err(ApiError::config)?;

    let log_level = match lookup("AKUSENTO_LOG_LEVEL") {
      Some(level) => LogLevel::from_str(&level).map_err(ApiError::config)?,
      None => LogLevel::default(),
    };

    let path = |key: &str| lookup(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);

    Ok(Self {
      bind_addr,
      preset,
      dict_cache_dir: path("AKUSENTO_DICT_CACHE_DIR"),
      seed_file: path("AKUSENTO_SEED_FILE"),
      candidates_file: path("AKUSENTO_CANDIDATES_FILE"),
      log_level,
    })
  }

  /// Library configuration handed to `AkusentoService::init`
  #[must_use]
  pub fn to_akusento_config(&self) -> AkusentoConfig {
    AkusentoConfig {
      dictionary: DictionaryConfig {
        preset: self.preset,
        cache_dir: self.dict_cache_dir.clone(),
      },
      candidates: CandidatesConfig {
        seed_file: self.seed_file.clone(),
        snapshot_file: self.candidates_file.clone(),
        ..CandidatesConfig::default()
      },
      logging: LoggingConfig {
        level: self.log_level,
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn config_defaults_without_variables() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.preset, DictionaryPreset::UnidicCwj);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.dict_cache_dir.is_none());
    assert!(config.seed_file.is_none());
    assert!(config.candidates_file.is_none());
  }

  #[test]
  fn config_reads_every_variable() {
    let config = Config::from_lookup(lookup_from(&[
      ("AKUSENTO_BIND_ADDR", "0.0.0.0:9000"),
      ("AKUSENTO_PRESET_DICT", "UNIDIC-CSJ"),
      ("AKUSENTO_DICT_CACHE_DIR", "/tmp/dict"),
      ("AKUSENTO_SEED_FILE", "/tmp/seeds.txt"),
      ("AKUSENTO_CANDIDATES_FILE", "/tmp/candidates.json"),
      ("AKUSENTO_LOG_LEVEL", "debug"),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr, "0.0.0.0:9000");
    assert_eq!(config.preset, DictionaryPreset::UnidicCsj);
    assert_eq!(config.dict_cache_dir, Some(PathBuf::from("/tmp/dict")));
    assert_eq!(config.seed_file, Some(PathBuf::from("/tmp/seeds.txt")));
    assert_eq!(config.candidates_file, Some(PathBuf::from("/tmp/candidates.json")));
    assert_eq!(config.log_level, LogLevel::Debug);
  }

  #[test]
  fn blank_paths_are_ignored() {
    let config = Config::from_lookup(lookup_from(&[("AKUSENTO_SEED_FILE", "  ")])).unwrap();
    assert!(config.seed_file.is_none());
  }

  #[test]
  fn invalid_preset_is_config_error() {
    let err = Config::from_lookup(lookup_from(&[("AKUSENTO_PRESET_DICT", "jumandic")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn invalid_log_level_is_config_error() {
    let err = Config::from_lookup(lookup_from(&[("AKUSENTO_LOG_LEVEL", "loud")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn converts_to_library_config() {
    let config = Config {
      candidates_file: Some(PathBuf::from("/tmp/candidates.json")),
      ..Config::default()
    };
    let lib = config.to_akusento_config();

    assert_eq!(lib.dictionary.preset, DictionaryPreset::UnidicCwj);
    assert_eq!(lib.snapshot_file(), Some(std::path::Path::new("/tmp/candidates.json")));
    assert_eq!(lib.mora_range(), (2, 10));
  }
}
