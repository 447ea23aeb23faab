//! Dictionary Management Module
//!
//! Loads the vibrato-rkyv dictionary that carries the accent features.
//! Preset dictionaries are downloaded on the first run and loaded from the
//! cache directory afterwards. A local compiled dictionary can be loaded
//! directly as well.

use crate::config::AkusentoConfig;
use crate::errors::error_definition::DictionaryError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::info;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::LoadMode;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// Dictionary manager for vibrato-rkyv
pub struct DictionaryManager {
  /// Dictionary cache directory
  cache_dir: PathBuf,

  /// Preset dictionary kind; `None` for local dictionaries
  preset_kind: Option<PresetDictionaryKind>,

  /// Local dictionary file (only for `from_local_path`)
  dictionary_path: Option<PathBuf>,

  /// Loaded dictionary, initialised once.
  /// DictionaryError implements Clone so the failure is cached as well.
  dictionary: OnceLock<Result<Arc<Dictionary>, DictionaryError>>,
}

impl DictionaryManager {
  /// Returns the path of the cache directory
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Returns the preset kind, `None` for local dictionaries
  pub fn preset_kind(&self) -> Option<PresetDictionaryKind> {
    self.preset_kind
  }

  /// Manager for a preset dictionary cached under the OS cache directory
  pub fn with_preset(preset_kind: PresetDictionaryKind) -> Result<Self, DictionaryError> {
    Ok(Self::with_preset_in(preset_kind, default_cache_dir()?))
  }

  /// Manager for a preset dictionary cached under `cache_dir`
  pub fn with_preset_in(preset_kind: PresetDictionaryKind, cache_dir: impl Into<PathBuf>) -> Self {
    Self {
      cache_dir: cache_dir.into(),
      preset_kind: Some(preset_kind),
      dictionary_path: None,
      dictionary: OnceLock::new(),
    }
  }

  /// Manager built from `[dictionary]`: the configured cache dir, or the OS default
  pub fn from_config(config: &AkusentoConfig) -> Result<Self, DictionaryError> {
    let preset_kind = config.dictionary_preset();
    match config.dictionary_cache_dir() {
      Some(dir) => Ok(Self::with_preset_in(preset_kind, dir)),
      None => Self::with_preset(preset_kind),
    }
  }

  /// Manager for a local compiled dictionary file
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      let s = path.display().to_string();
      return Err(DictionaryError::DictionaryNotFound(s));
    }

    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      cache_dir,
      preset_kind: None,
      dictionary_path: Some(path),
      dictionary: OnceLock::new(),
    })
  }

  /// Whether the preset dictionary has already been downloaded
  pub fn is_cached(&self) -> bool {
    match (&self.dictionary_path, self.preset_kind) {
      (Some(path), _) => path.is_file(),
      (None, Some(kind)) => self.cache_dir.join(kind.name()).exists(),
      _ => false,
    }
  }

  /// Load dictionary
  ///
  /// - Loads (and downloads if needed) on the first call
  /// - Returns a clone of `Arc<Dictionary>` afterwards
  /// - A failure on the first call is cached and returned again
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    self.dictionary.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Dictionary, DictionaryError> {
    match (&self.dictionary_path, self.preset_kind) {
      (Some(path), _) => Self::load_from_local_path(path),
      (None, Some(preset_kind)) => self.load_from_preset(preset_kind),
      _ => Err(DictionaryError::InvalidPathOrInvalidPresetKind(
        self.cache_dir.clone(),
        self.preset_kind,
      )),
    }
  }

  fn load_from_local_path(path: &Path) -> Result<Dictionary, DictionaryError> {
    info!(path = %path.display(), "Loading local dictionary");
    Dictionary::from_path(path, LoadMode::TrustCache)
      .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e)))
  }

  fn load_from_preset(
    &self,
    preset_kind: PresetDictionaryKind,
  ) -> Result<Dictionary, DictionaryError> {
    std::fs::create_dir_all(&self.cache_dir)
      .map_err(|e| DictionaryError::CacheDirCreationFailed(Arc::new(e)))?;

    let dict_dir = self.cache_dir.join(preset_kind.name());
    info!(
      preset = preset_kind.name(),
      dir = %dict_dir.display(),
      cached = dict_dir.exists(),
      "Loading preset dictionary"
    );

    Dictionary::from_preset_with_download(preset_kind, &dict_dir)
      .map_err(|e| DictionaryError::PresetDictDownloadFailed(Arc::new(e)))
  }
}

/// Returns the default cache directory path according to the OS
///
/// | OS      | Example Path                                  |
/// |---------|-----------------------------------------------|
/// | Linux   | `~/.cache/akusento/dict`                      |
/// | macOS   | `~/Library/Caches/akusento/dict`              |
/// | Windows | `C:\Users\{user}\AppData\Local\akusento\dict` |
pub fn default_cache_dir() -> Result<PathBuf, DictionaryError> {
  let base = dirs::cache_dir().ok_or(DictionaryError::CacheDirNotFound)?;

  Ok(base.join("akusento").join("dict"))
}

/// `vibrato_rkyv::Dictionary` is not `Debug`, so only meta information is shown.
impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("cache_dir", &self.cache_dir)
      .field("preset_kind", &self.preset_kind)
      .field("dictionary_path", &self.dictionary_path)
      .field("dictionary_initialized", &self.dictionary.get().is_some())
      .finish()
  }
}
