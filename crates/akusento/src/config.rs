// crates/akusento/src/config.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::errors::ConfigError;

/// Default lower bound of the candidate mora range.
pub const DEFAULT_MIN_MORA: usize = 2;

/// Default upper bound of the candidate mora range.
pub const DEFAULT_MAX_MORA: usize = 10;

/// Top-level configuration for akusento.
#[derive(Debug, Clone, Deserialize)]
pub struct AkusentoConfig {
  /// [dictionary] section
  pub dictionary: DictionaryConfig,
  /// [candidates] section
  #[serde(default)]
  pub candidates: CandidatesConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [dictionary] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
  /// Preset dictionary type: "ipadic" | "unidic-cwj" | "unidic-csj"
  pub preset: DictionaryPreset,
  /// Dictionary cache directory.
  ///
  /// If omitted, `DictionaryManager` falls back to the OS cache directory.
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,
}

/// Preset dictionary type.
///
/// `PresetDictionaryKind` from vibrato-rkyv does not implement `Deserialize`
/// and the orphan rule prevents adding it here, so this enum is the
/// configuration-side mirror and converts with `.into()`.
///
/// Only the UniDic presets carry accent kernels (`aType`); IPADIC is accepted by
/// the parser but rejected by [`AkusentoConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryPreset {
  /// IpaDic: The smallest, no accent information
  Ipadic,
  /// Unidic for written language
  UnidicCwj,
  /// Unidic for spoken language
  UnidicCsj,
}

impl DictionaryPreset {
  /// Whether the dictionary features include accent kernels.
  pub fn has_accent(&self) -> bool {
    matches!(self, Self::UnidicCwj | Self::UnidicCsj)
  }
}

impl FromStr for DictionaryPreset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "ipadic" => Ok(Self::Ipadic),
      "unidic-cwj" => Ok(Self::UnidicCwj),
      "unidic-csj" => Ok(Self::UnidicCsj),
      _ => Err(format!(
        "Unknown preset: {}. Valid values: ipadic, unidic-cwj, unidic-csj",
        s
      )),
    }
  }
}

/// [candidates] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatesConfig {
  /// Smallest mora count a candidate may have
  #[serde(default = "default_min_mora")]
  pub min_mora: usize,
  /// Largest mora count a candidate may have
  #[serde(default = "default_max_mora")]
  pub max_mora: usize,
  /// Extra seed words, one per line
  #[serde(default)]
  pub seed_file: Option<PathBuf>,
  /// JSON snapshot written by `CandidatePool::save_json`
  ///
  /// When the file exists the pool is loaded from it instead of being rebuilt.
  #[serde(default)]
  pub snapshot_file: Option<PathBuf>,
}

fn default_min_mora() -> usize {
  DEFAULT_MIN_MORA
}

fn default_max_mora() -> usize {
  DEFAULT_MAX_MORA
}

impl Default for CandidatesConfig {
  fn default() -> Self {
    Self {
      min_mora: DEFAULT_MIN_MORA,
      max_mora: DEFAULT_MAX_MORA,
      seed_file: None,
      snapshot_file: None,
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Directive string understood by `tracing_subscriber::EnvFilter`.
  pub fn as_filter(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      _ => Err(format!(
        "Unknown log level: {}. Valid values: trace, debug, info, warn, error",
        s
      )),
    }
  }
}

// ===== Accessor Methods =====

impl AkusentoConfig {
  /// Configuration with the given preset and defaults everywhere else.
  pub fn with_preset(preset: DictionaryPreset) -> Self {
    Self {
      dictionary: DictionaryConfig {
        preset,
        cache_dir: None,
      },
      candidates: CandidatesConfig::default(),
      logging: LoggingConfig::default(),
    }
  }

  /// Returns the preset dictionary type to pass to DictionaryManager.
  pub fn dictionary_preset(&self) -> PresetDictionaryKind {
    self.dictionary.preset.into()
  }

  /// Returns the configured dictionary cache directory.
  ///
  /// `None` if unspecified.
  pub fn dictionary_cache_dir(&self) -> Option<&Path> {
    self.dictionary.cache_dir.as_deref()
  }

  /// Returns the inclusive mora range candidates are built for.
  pub fn mora_range(&self) -> (usize, usize) {
    (self.candidates.min_mora, self.candidates.max_mora)
  }

  /// Returns the extra seed file, if any.
  pub fn seed_file(&self) -> Option<&Path> {
    self.candidates.seed_file.as_deref()
  }

  /// Returns the candidate snapshot file, if any.
  pub fn snapshot_file(&self) -> Option<&Path> {
    self.candidates.snapshot_file.as_deref()
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `dictionary.preset` carries accent information
  /// - `candidates.min_mora` >= 1
  /// - `candidates.max_mora` >= `candidates.min_mora`
  /// - `candidates.seed_file` exists when given
  /// - `dictionary.cache_dir` exists or can be created
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if !self.dictionary.preset.has_accent() {
      return Err(ConfigError::PresetWithoutAccent {
        preset: self.dictionary.preset,
      });
    }

    if self.candidates.min_mora < 1 {
      return Err(ConfigError::InvalidMinMora {
        actual: self.candidates.min_mora,
      });
    }

    if self.candidates.max_mora < self.candidates.min_mora {
      return Err(ConfigError::InvalidMoraRange {
        min_mora: self.candidates.min_mora,
        max_mora: self.candidates.max_mora,
      });
    }

    if let Some(seed_file) = &self.candidates.seed_file
      && !seed_file.is_file()
    {
      return Err(ConfigError::SeedFileNotFound {
        path: seed_file.clone(),
      });
    }

    // dictionary.cache_dir exists or can be created
    if let Some(cache_dir) = &self.dictionary.cache_dir {
      if cache_dir.exists() {
        if !cache_dir.is_dir() {
          return Err(ConfigError::InvalidDictionaryCacheDir {
            path: cache_dir.clone(),
          });
        }
      } else if let Err(e) = std::fs::create_dir_all(cache_dir) {
        return Err(ConfigError::DictionaryCacheDirCreationFailed {
          path: cache_dir.clone(),
          source: Arc::new(e),
        });
      }
    }

    Ok(())
  }
}

// Conversion from DictionaryPreset (configuration) -> PresetDictionaryKind (vibrato-rkyv).

impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
      DictionaryPreset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
      DictionaryPreset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  // ─── Test Helpers ─────────────────────────────────────────────────────

  /// Creates a base valid configuration (uses a temporary directory for each test)
  fn create_valid_config(temp_dir: &TempDir) -> AkusentoConfig {
    AkusentoConfig {
      dictionary: DictionaryConfig {
        preset: DictionaryPreset::UnidicCwj,
        cache_dir: Some(temp_dir.path().join("dict")),
      },
      candidates: CandidatesConfig::default(),
      logging: LoggingConfig {
        level: LogLevel::Info,
      },
    }
  }

  // ─── validate() Normal Case Tests ────────────────────────────────────────────

  #[test]
  fn validate_accepts_valid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_valid_config(&temp_dir);

    assert!(config.validate().is_ok(), "valid config should pass validation");
  }

  #[test]
  fn validate_accepts_single_mora_range() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.candidates.min_mora = 3;
    config.candidates.max_mora = 3;

    assert!(config.validate().is_ok());
  }

  #[test]
  fn validate_accepts_existing_seed_file() {
    let temp_dir = TempDir::new().unwrap();
    let seed_file = temp_dir.path().join("seed_nouns.txt");
    fs::write(&seed_file, "猫\n犬\n").unwrap();

    let mut config = create_valid_config(&temp_dir);
    config.candidates.seed_file = Some(seed_file);

    assert!(config.validate().is_ok());
  }

  // ─── validate() Abnormal Cases ───────────────────────────────────────────

  #[test]
  fn validate_rejects_ipadic() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.dictionary.preset = DictionaryPreset::Ipadic;

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::PresetWithoutAccent { preset } => {
        assert_eq!(preset, DictionaryPreset::Ipadic);
      }
      _ => panic!("expected PresetWithoutAccent error"),
    }
  }

  #[test]
  fn validate_rejects_zero_min_mora() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.candidates.min_mora = 0;

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMinMora { actual: 0 }));
  }

  #[test]
  fn validate_rejects_inverted_range() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.candidates.min_mora = 5;
    config.candidates.max_mora = 4;

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::InvalidMoraRange { min_mora, max_mora } => {
        assert_eq!(min_mora, 5);
        assert_eq!(max_mora, 4);
      }
      _ => panic!("expected InvalidMoraRange error"),
    }
  }

  #[test]
  fn validate_rejects_missing_seed_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");
    let mut config = create_valid_config(&temp_dir);
    config.candidates.seed_file = Some(missing.clone());

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::SeedFileNotFound { path } => assert_eq!(path, missing),
      _ => panic!("expected SeedFileNotFound error"),
    }
  }

  // ─── validate() dictionary.cache_dir Tests ───────────────────────────────

  #[test]
  fn validate_creates_missing_cache_dir() {
    let temp_dir = TempDir::new().unwrap();
    let cache_dir = temp_dir.path().join("new-cache-dir");
    assert!(!cache_dir.exists());

    let mut config = create_valid_config(&temp_dir);
    config.dictionary.cache_dir = Some(cache_dir.clone());

    assert!(config.validate().is_ok());
    assert!(cache_dir.exists() && cache_dir.is_dir());
  }

  #[test]
  fn validate_rejects_cache_dir_is_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("not-a-dir");
    fs::write(&file_path, b"dummy").unwrap();

    let mut config = create_valid_config(&temp_dir);
    config.dictionary.cache_dir = Some(file_path.clone());

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::InvalidDictionaryCacheDir { path } => {
        assert_eq!(path, file_path);
      }
      _ => panic!("expected InvalidDictionaryCacheDir error"),
    }
  }

  #[test]
  fn validate_rejects_cache_dir_creation_fails() {
    let temp_dir = TempDir::new().unwrap();
    let parent_file = temp_dir.path().join("parent_file");
    fs::write(&parent_file, b"dummy").unwrap();
    let invalid_cache_dir = parent_file.join("child_dir");

    let mut config = create_valid_config(&temp_dir);
    config.dictionary.cache_dir = Some(invalid_cache_dir.clone());

    let err = config.validate().unwrap_err();
    match err {
      ConfigError::DictionaryCacheDirCreationFailed { path, .. } => {
        assert_eq!(path, invalid_cache_dir);
      }
      _ => panic!("expected DictionaryCacheDirCreationFailed error"),
    }
  }

  #[test]
  fn validate_reports_preset_before_range() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.dictionary.preset = DictionaryPreset::Ipadic;
    config.candidates.min_mora = 0;

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PresetWithoutAccent { .. }));
  }

  // ─── Parsing / Accessor Tests ───────────────────────────────────────────

  #[test]
  fn preset_from_str_accepts_any_case() {
    assert_eq!(DictionaryPreset::from_str("ipadic").unwrap(), DictionaryPreset::Ipadic);
    assert_eq!(DictionaryPreset::from_str("UNIDIC-CWJ").unwrap(), DictionaryPreset::UnidicCwj);
    assert_eq!(DictionaryPreset::from_str("unidic-csj").unwrap(), DictionaryPreset::UnidicCsj);
    assert!(DictionaryPreset::from_str("jumandic").is_err());
  }

  #[test]
  fn log_level_from_str_and_filter() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
    assert_eq!(LogLevel::Warn.as_filter(), "warn");
    assert!(LogLevel::from_str("verbose").is_err());
  }

  #[test]
  fn with_preset_uses_defaults() {
    let config = AkusentoConfig::with_preset(DictionaryPreset::UnidicCsj);
    assert_eq!(config.mora_range(), (DEFAULT_MIN_MORA, DEFAULT_MAX_MORA));
    assert_eq!(config.log_level(), LogLevel::Info);
    assert!(config.dictionary_cache_dir().is_none());
    assert!(config.seed_file().is_none());
    assert!(config.snapshot_file().is_none());
    assert_eq!(config.dictionary_preset(), PresetDictionaryKind::UnidicCsj);
  }

  #[test]
  fn deserializes_from_json_with_defaults() {
    let json = r#"{ "dictionary": { "preset": "unidic-cwj" } }"#;
    let config: AkusentoConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.dictionary.preset, DictionaryPreset::UnidicCwj);
    assert_eq!(config.mora_range(), (2, 10));
    assert_eq!(config.log_level(), LogLevel::Info);
  }

  #[test]
  fn dictionary_preset_converts_to_preset_kind() {
    assert_eq!(
      PresetDictionaryKind::from(DictionaryPreset::Ipadic),
      PresetDictionaryKind::Ipadic
    );
    assert_eq!(
      PresetDictionaryKind::from(DictionaryPreset::UnidicCwj),
      PresetDictionaryKind::UnidicCwj
    );
    assert_eq!(
      PresetDictionaryKind::from(DictionaryPreset::UnidicCsj),
      PresetDictionaryKind::UnidicCsj
    );
  }
}
