//! Pitch-accent analyzer on top of vibrato-rkyv

use std::sync::Arc;

use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use crate::accent::pattern::fit_to_morae;
use crate::accent::{AccentClass, AccentUnit, UnitRole, fold_kernel, pattern_from_kernel};
use crate::analyzer::unidic_feature::{UnidicFeature, surface_reading};
use crate::errors::AnalyzerError;
use crate::kana::{mora_count, split_morae};
use crate::models::WordAnalysis;

/// Japanese pitch-accent analyzer
///
/// - Stateless (only holds the dictionary reference)
/// - `Clone + Send + Sync`; a vibrato worker is created per call
#[derive(Clone)]
pub struct AccentAnalyzer {
  inner: VibratoImpl,
}

impl AccentAnalyzer {
  /// Constructs an analyzer from a shared dictionary (`Arc<Dictionary>`),
  /// as returned by `DictionaryManager::load()`.
  pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
    }
  }

  /// Reading and pitch accent of `text`.
  ///
  /// # Errors
  /// - `InvalidInput` if `text` is empty after trimming
  /// - `Unanalyzable` if a token has no reading
  pub fn analyze(&self, text: &str) -> Result<WordAnalysis, AnalyzerError> {
    let text = text.trim();
    if text.is_empty() {
      return Err(AnalyzerError::InvalidInput {
        reason: "text is empty".to_string(),
      });
    }

    let mut worker = self.inner.new_worker();
    worker.reset_sentence(text);
    worker.tokenize();

    debug!(text = %text, num_tokens = worker.num_tokens(), "Start accent analysis");

    let tokens: Vec<(String, String)> = worker
      .token_iter()
      .map(|token| (token.surface().to_string(), token.feature().to_string()))
      .collect();

    analyze_tokens(text, tokens.iter().map(|(s, f)| (s.as_str(), f.as_str())))
  }
}

/// Accent analysis over already tokenised `(surface, feature)` pairs.
///
/// Separated from the tokenizer so the accent rules can be exercised with
/// literal UniDic feature strings.
pub fn analyze_tokens<'a, I>(text: &str, tokens: I) -> Result<WordAnalysis, AnalyzerError>
where
  I: IntoIterator<Item = (&'a str, &'a str)>,
{
  let mut reading = String::new();
  let mut units = Vec::new();

  for (surface, feature_str) in tokens {
    let feature = UnidicFeature::parse(feature_str);

    if feature.is_skipped() {
      debug!(surface = %surface, pos = feature.pos(), "Skip token");
      continue;
    }

    let token_reading =
      feature.reading().or_else(|| surface_reading(surface)).ok_or_else(|| {
        AnalyzerError::Unanalyzable {
          text: text.to_string(),
          surface: surface.to_string(),
        }
      })?;

    let morae = mora_count(&token_reading);
    let unit = match feature.role() {
      UnitRole::Attached => AccentUnit::attached(morae),
      UnitRole::Content => AccentUnit::content(morae, feature.accent_kernel())
        .with_combination(feature.combination_type()),
    };

    debug!(
      surface = %surface,
      reading = %token_reading,
      morae,
      kernel = ?unit.kernel,
      combination = ?unit.combination,
      "Token"
    );

    units.push(unit);
    reading.push_str(&token_reading);
  }

  if units.is_empty() {
    return Err(AnalyzerError::Unanalyzable {
      text: text.to_string(),
      surface: text.to_string(),
    });
  }

  let morae = split_morae(&reading);
  let kernel = fold_kernel(&units);
  let pattern = fit_to_morae(pattern_from_kernel(kernel, morae.len()), morae.len());
  let class = AccentClass::from_kernel(kernel, morae.len());

  debug!(
    text = %text,
    reading = %reading,
    kernel,
    ?pattern,
    "Accent analysis completed"
  );

  Ok(WordAnalysis::new(text, reading, pattern).with_class(class))
}
