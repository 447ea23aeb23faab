//! Kana normalisation and mora segmentation.
//!
//! Readings coming out of UniDic are katakana; user-facing text may also
//! contain hiragana, so everything is folded to katakana before counting.

/// Offset between a hiragana code point and its katakana counterpart.
const HIRAGANA_TO_KATAKANA: u32 = 0x60;

/// Small kana that merge into the preceding mora (キャ, ファ, クヮ ...).
const COMBINING_SMALL_KANA: &[char] = &['ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ヮ'];

/// Folds hiragana to katakana, leaving every other character untouched.
pub fn to_katakana(text: &str) -> String {
  text
    .chars()
    .map(|c| match c {
      // ぁ..ゖ and the iteration marks ゝゞ
      '\u{3041}'..='\u{3096}' | '\u{309D}'..='\u{309E}' => {
        char::from_u32(c as u32 + HIRAGANA_TO_KATAKANA).unwrap_or(c)
      }
      _ => c,
    })
    .collect()
}

/// Whether `c` belongs to the katakana block (including the long vowel mark ー).
pub fn is_katakana(c: char) -> bool {
  matches!(c, '\u{30A1}'..='\u{30FA}' | '\u{30FC}'..='\u{30FE}')
}

/// Whether the whole string is a non-empty katakana reading.
pub fn is_katakana_reading(text: &str) -> bool {
  !text.is_empty() && text.chars().all(is_katakana)
}

/// Splits a kana string into morae.
///
/// ッ, ン and ー are morae of their own; small ァィゥェォャュョヮ join the
/// preceding mora. A leading small kana (no predecessor) stands alone.
pub fn split_morae(text: &str) -> Vec<String> {
  let mut morae: Vec<String> = Vec::new();

  for c in to_katakana(text).chars() {
    if COMBINING_SMALL_KANA.contains(&c)
      && let Some(last) = morae.last_mut()
    {
      last.push(c);
      continue;
    }
    morae.push(c.to_string());
  }

  morae
}

/// Number of morae in a kana string.
pub fn mora_count(text: &str) -> usize {
  split_morae(text).len()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn folds_hiragana() {
    assert_eq!(to_katakana("はし"), "ハシ");
    assert_eq!(to_katakana("きょうと"), "キョウト");
    assert_eq!(to_katakana("東京タワー"), "東京タワー");
  }

  #[test]
  fn youon_join_previous_mora() {
    assert_eq!(split_morae("キョウト"), vec!["キョ", "ウ", "ト"]);
    assert_eq!(split_morae("シュッパツ"), vec!["シュ", "ッ", "パ", "ツ"]);
  }

  #[test]
  fn sokuon_hatsuon_and_long_vowel_are_morae() {
    assert_eq!(split_morae("ガッコウ"), vec!["ガ", "ッ", "コ", "ウ"]);
    assert_eq!(mora_count("シンカンセン"), 6);
    assert_eq!(split_morae("トーキョー"), vec!["ト", "ー", "キョ", "ー"]);
  }

  #[test]
  fn hiragana_input_is_segmented() {
    assert_eq!(split_morae("ちゃわん"), vec!["チャ", "ワ", "ン"]);
  }

  #[test]
  fn leading_small_kana_stands_alone() {
    assert_eq!(split_morae("ャア"), vec!["ャ", "ア"]);
  }

  #[test]
  fn katakana_reading_detection() {
    assert!(is_katakana_reading("ハシ"));
    assert!(is_katakana_reading("ラーメン"));
    assert!(!is_katakana_reading(""));
    assert!(!is_katakana_reading("*"));
    assert!(!is_katakana_reading("はし"));
  }
}
