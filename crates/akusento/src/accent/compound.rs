//! Accent kernel of multi-token input.
//!
//! A single dictionary entry keeps its own kernel. Longer input is folded
//! left to right: function words attach to what precedes them, content words
//! combine by their UniDic combination type (`aConType` C1 to C5) and fall
//! back to the compound-noun rule keyed on the length of the second element.

/// How a token takes part in the accent of the whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRole {
  /// Content word or affix: combines by the compound rule
  Content,
  /// Particle or auxiliary verb: follows the preceding pitch
  Attached,
}

/// How a content word combines with what precedes it (`aConType` C1 to C5).
///
/// The `%F` forms carried by particles and auxiliaries are not combination
/// types of this kind and parse as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinationType {
  /// C1: keeps its own kernel, offset by the first element
  KeepOwn,
  /// C2: falls on its own first mora
  OwnFirstMora,
  /// C3: falls on the last mora of the first element
  PrecedingLastMora,
  /// C4: the compound is heiban
  Flat,
  /// C5: keeps the kernel of the first element
  KeepPreceding,
}

impl CombinationType {
  /// Parses one `aConType` value; multi-valued entries use the first value.
  pub fn parse(value: &str) -> Option<Self> {
    match value.split(',').next()?.trim() {
      "C1" => Some(Self::KeepOwn),
      "C2" => Some(Self::OwnFirstMora),
      "C3" => Some(Self::PrecedingLastMora),
      "C4" => Some(Self::Flat),
      "C5" => Some(Self::KeepPreceding),
      _ => None,
    }
  }
}

/// One token reduced to what the accent fold needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentUnit {
  /// Mora count of the token reading
  pub morae: usize,
  /// Dictionary kernel (`aType`), `None` when the entry has none
  pub kernel: Option<usize>,
  /// Role in the fold
  pub role: UnitRole,
  /// Combination type as second element, `None` uses the length rule
  pub combination: Option<CombinationType>,
}

impl AccentUnit {
  /// Content unit.
  pub fn content(morae: usize, kernel: Option<usize>) -> Self {
    Self {
      morae,
      kernel,
      role: UnitRole::Content,
      combination: None,
    }
  }

  /// Attached (function word) unit.
  pub fn attached(morae: usize) -> Self {
    Self {
      morae,
      kernel: None,
      role: UnitRole::Attached,
      combination: None,
    }
  }

  /// Sets the combination type.
  #[must_use]
  pub fn with_combination(mut self, combination: Option<CombinationType>) -> Self {
    self.combination = combination;
    self
  }
}

/// Kernel of a first element of `m1` morae (kernel `k1`) followed by a
/// content element of `m2` morae (kernel `k2`) with combination type `ctype`.
fn combine(m1: usize, k1: usize, m2: usize, k2: usize, ctype: Option<CombinationType>) -> usize {
  if m1 == 0 {
    return k2;
  }
  match ctype {
    Some(CombinationType::KeepOwn) if k2 == 0 => 0,
    Some(CombinationType::KeepOwn) => m1 + k2.min(m2),
    Some(CombinationType::OwnFirstMora) => m1 + 1,
    Some(CombinationType::PrecedingLastMora) => m1,
    Some(CombinationType::Flat) => 0,
    Some(CombinationType::KeepPreceding) => k1,
    None => combine_by_length(m1, k1, m2, k2),
  }
}

/// Compound-noun rule keyed on the length of the second element.
fn combine_by_length(m1: usize, k1: usize, m2: usize, k2: usize) -> usize {
  match m2 {
    0 => k1,
    // short second element: fall on the last mora of the first
    1..=2 => m1,
    // heiban or odaka second element: fall on its first mora
    3..=4 if k2 == 0 || k2 >= m2 => m1 + 1,
    3..=4 => m1 + k2,
    _ if k2 == 0 => 0,
    _ => m1 + k2,
  }
}

/// Folds units into the kernel of the whole input.
///
/// A missing dictionary kernel counts as heiban.
pub fn fold_kernel(units: &[AccentUnit]) -> usize {
  if let [single] = units {
    return single.kernel.unwrap_or(0).min(single.morae);
  }

  let mut morae = 0;
  let mut kernel = 0;

  for unit in units {
    match unit.role {
      UnitRole::Attached => {}
      UnitRole::Content => {
        let own = unit.kernel.unwrap_or(0);
        kernel = combine(morae, kernel, unit.morae, own, unit.combination);
      }
    }
    morae += unit.morae;
  }

  kernel
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn single_unit_keeps_dictionary_kernel() {
    assert_eq!(fold_kernel(&[AccentUnit::content(2, Some(1))]), 1);
    assert_eq!(fold_kernel(&[AccentUnit::content(2, None)]), 0);
    assert_eq!(fold_kernel(&[AccentUnit::content(2, Some(4))]), 2);
  }

  #[test]
  fn long_heiban_second_element_falls_on_its_first_mora() {
    // 機械(キカイ,2) + 学習(ガクシュウ,0) -> キカイガ]クシュウ
    let units = [AccentUnit::content(3, Some(2)), AccentUnit::content(4, Some(0))];
    assert_eq!(fold_kernel(&units), 4);
  }

  #[test]
  fn short_second_element_falls_on_end_of_first() {
    // 神戸(コウベ,1) + 市(シ,1) -> コウベ]シ
    let units = [AccentUnit::content(3, Some(1)), AccentUnit::content(1, Some(1))];
    assert_eq!(fold_kernel(&units), 3);
  }

  #[test]
  fn medial_kernel_of_second_element_is_kept() {
    // 3-mora element with kernel 2 -> offset by the first element
    let units = [AccentUnit::content(2, Some(1)), AccentUnit::content(3, Some(2))];
    assert_eq!(fold_kernel(&units), 4);
  }

  #[test]
  fn long_heiban_element_keeps_compound_heiban() {
    let units = [AccentUnit::content(2, Some(1)), AccentUnit::content(5, Some(0))];
    assert_eq!(fold_kernel(&units), 0);
  }

  #[test]
  fn attached_units_do_not_move_the_kernel() {
    // 箸(ハシ,1) + が -> ハ]シガ
    let units = [AccentUnit::content(2, Some(1)), AccentUnit::attached(1)];
    assert_eq!(fold_kernel(&units), 1);
    // 橋(ハシ,2) + が -> ハ[シ]ガ
    let units = [AccentUnit::content(2, Some(2)), AccentUnit::attached(1)];
    assert_eq!(fold_kernel(&units), 2);
  }

  #[test]
  fn content_after_attached_counts_all_preceding_morae() {
    let units = [
      AccentUnit::content(2, Some(0)),
      AccentUnit::attached(1),
      AccentUnit::content(2, Some(1)),
    ];
    assert_eq!(fold_kernel(&units), 3);
  }

  #[test]
  fn combination_type_values() {
    assert_eq!(CombinationType::parse("C1"), Some(CombinationType::KeepOwn));
    assert_eq!(CombinationType::parse("C4,C1"), Some(CombinationType::Flat));
    assert_eq!(CombinationType::parse(" C5"), Some(CombinationType::KeepPreceding));
    assert_eq!(CombinationType::parse("動詞%F2@0,名詞%F1"), None);
    assert_eq!(CombinationType::parse("*"), None);
  }

  #[test]
  fn flat_suffix_makes_compound_heiban() {
    // 日本(ニホン,2) + 語(ゴ,C4) -> ニ[ホンゴ, not ニホン]ゴ
    let go = AccentUnit::content(1, Some(1)).with_combination(Some(CombinationType::Flat));
    let units = [AccentUnit::content(3, Some(2)), go];
    assert_eq!(fold_kernel(&units), 0);

    // 経済(ケイザイ,1) + 的(テキ,C4)
    let teki = AccentUnit::content(2, Some(0)).with_combination(Some(CombinationType::Flat));
    let units = [AccentUnit::content(4, Some(1)), teki];
    assert_eq!(fold_kernel(&units), 0);
  }

  #[test]
  fn preceding_last_mora_type() {
    // 神奈川(カナガワ,0) + 県(ケン,C3) -> カナガワ]ケン
    let ken = AccentUnit::content(2, Some(1)).with_combination(Some(CombinationType::PrecedingLastMora));
    let units = [AccentUnit::content(4, Some(0)), ken];
    assert_eq!(fold_kernel(&units), 4);
  }

  #[test]
  fn own_first_mora_type_overrides_length_rule() {
    // a 5-mora heiban element would keep the compound heiban by length
    let second = AccentUnit::content(5, Some(0)).with_combination(Some(CombinationType::OwnFirstMora));
    let units = [AccentUnit::content(2, Some(1)), second];
    assert_eq!(fold_kernel(&units), 3);
  }

  #[test]
  fn keep_own_and_keep_preceding_types() {
    let own = AccentUnit::content(2, Some(1)).with_combination(Some(CombinationType::KeepOwn));
    assert_eq!(fold_kernel(&[AccentUnit::content(3, Some(0)), own]), 4);

    let own_flat = AccentUnit::content(2, Some(0)).with_combination(Some(CombinationType::KeepOwn));
    assert_eq!(fold_kernel(&[AccentUnit::content(3, Some(2)), own_flat]), 0);

    let preceding =
      AccentUnit::content(2, Some(2)).with_combination(Some(CombinationType::KeepPreceding));
    assert_eq!(fold_kernel(&[AccentUnit::content(3, Some(1)), preceding]), 1);
  }

  #[test]
  fn combination_type_of_first_element_is_ignored() {
    let first = AccentUnit::content(3, Some(2)).with_combination(Some(CombinationType::Flat));
    assert_eq!(fold_kernel(&[first, AccentUnit::content(4, Some(0))]), 4);
  }

  #[test]
  fn empty_input_is_heiban() {
    assert_eq!(fold_kernel(&[]), 0);
  }
}
