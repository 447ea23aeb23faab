//! UniDic feature string parsing
//!
//! vibrato-rkyv returns the lexicon columns after the cost as one
//! comma-separated string. Multi-valued columns such as `aType` are quoted
//! (`"1,0"`), so the string is read with a CSV reader instead of `split(',')`.

use csv::{ReaderBuilder, StringRecord};

use crate::accent::{CombinationType, UnitRole};
use crate::kana::{is_katakana_reading, to_katakana};

/// Position of each column in the UniDic (CWJ/CSJ) feature array
const IDX_POS1: usize = 0;
const IDX_POS2: usize = 1;
const IDX_PRON: usize = 9;
const IDX_KANA: usize = 20;
const IDX_A_TYPE: usize = 24;
const IDX_A_CON_TYPE: usize = 25;

/// Part-of-speech tags that carry no mora (whitespace, punctuation)
const SKIPPED_POS: &[&str] = &["補助記号", "空白"];

/// Part-of-speech tags that follow the pitch of the preceding word
const ATTACHED_POS: &[&str] = &["助詞", "助動詞"];

/// The columns of a UniDic feature string that accent analysis needs.
#[derive(Debug, Clone, Default)]
pub struct UnidicFeature {
  record: StringRecord,
}

impl UnidicFeature {
  /// Parses a feature string. Unparseable input yields an empty feature.
  pub fn parse(feature: &str) -> Self {
    let mut reader = ReaderBuilder::new()
      .has_headers(false)
      .flexible(true)
      .from_reader(feature.as_bytes());

    let record = reader.records().next().and_then(Result::ok).unwrap_or_default();
    Self { record }
  }

  /// Column value, `None` when missing, empty or `*`
  fn field(&self, idx: usize) -> Option<&str> {
    self.record.get(idx).filter(|s| !s.is_empty() && *s != "*")
  }

  /// Part of speech (1st column)
  pub fn pos(&self) -> &str {
    self.field(IDX_POS1).unwrap_or("")
  }

  /// POS detail 1 (2nd column)
  pub fn pos_detail(&self) -> &str {
    self.field(IDX_POS2).unwrap_or("")
  }

  /// Whether the token contributes no mora
  pub fn is_skipped(&self) -> bool {
    SKIPPED_POS.contains(&self.pos())
  }

  /// Role in the accent fold
  pub fn role(&self) -> UnitRole {
    if ATTACHED_POS.contains(&self.pos()) {
      UnitRole::Attached
    } else {
      UnitRole::Content
    }
  }

  /// Katakana reading: `kana`, falling back to `pron`
  pub fn reading(&self) -> Option<String> {
    [IDX_KANA, IDX_PRON]
      .into_iter()
      .filter_map(|idx| self.field(idx))
      .map(to_katakana)
      .find(|reading| is_katakana_reading(reading))
  }

  /// Accent kernel (`aType`). The first value wins for multi-valued entries.
  pub fn accent_kernel(&self) -> Option<usize> {
    self.field(IDX_A_TYPE)?.split(',').next()?.trim().parse().ok()
  }

  /// Raw compound combination type (`aConType`)
  pub fn accent_con_type(&self) -> Option<&str> {
    self.field(IDX_A_CON_TYPE)
  }

  /// `aConType` as a noun combination type (C1 to C5)
  pub fn combination_type(&self) -> Option<CombinationType> {
    self.accent_con_type().and_then(CombinationType::parse)
  }
}

/// Reading taken from the surface itself when it is already kana
/// (unknown katakana words have no dictionary reading).
pub fn surface_reading(surface: &str) -> Option<String> {
  let reading = to_katakana(surface);
  is_katakana_reading(&reading).then_some(reading)
}
