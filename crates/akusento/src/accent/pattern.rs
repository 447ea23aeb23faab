//! Pitch-accent patterns.
//!
//! A pattern holds one value per mora: [`LOW`] or [`HIGH`]. [`UNKNOWN`] is
//! reserved for morae whose pitch could not be determined; the dictionary path
//! never produces it.

use serde::{Deserialize, Serialize};

/// Pitch value of an undetermined mora.
pub const UNKNOWN: u8 = 0;
/// Pitch value of a low mora.
pub const LOW: u8 = 1;
/// Pitch value of a high mora.
pub const HIGH: u8 = 2;

/// Builds the pattern of a word with accent kernel `kernel` over `morae` morae.
///
/// - `0` (heiban): `L H H ...`
/// - `1` (atamadaka): `H L L ...`
/// - `k`: `L`, then `H` up to mora `k`, then `L`
///
/// A kernel past the last mora is clamped to the last mora.
pub fn pattern_from_kernel(kernel: usize, morae: usize) -> Vec<u8> {
  let kernel = kernel.min(morae);

  (0..morae)
    .map(|i| match kernel {
      0 if i == 0 => LOW,
      0 => HIGH,
      1 if i == 0 => HIGH,
      1 => LOW,
      k if i == 0 || i >= k => LOW,
      _ => HIGH,
    })
    .collect()
}

/// Trims or pads (with [`LOW`]) a pattern to exactly `morae` entries.
pub fn fit_to_morae(mut pattern: Vec<u8>, morae: usize) -> Vec<u8> {
  pattern.resize(morae, LOW);
  pattern
}

/// Accent kernel implied by a pattern: the position of the last high mora
/// directly followed by a low one, `0` when the pitch never falls.
///
/// A word-final fall (odaka) is invisible without a following particle, so an
/// odaka pattern reads as heiban here.
pub fn kernel_from_pattern(pattern: &[u8]) -> usize {
  if pattern.len() == 1 && pattern[0] == HIGH {
    return 1;
  }
  pattern
    .windows(2)
    .rposition(|w| w[0] == HIGH && w[1] == LOW)
    .map_or(0, |i| i + 1)
}

/// Renders the display code of a reading.
///
/// `[` marks a rise (a high mora after a low one, never before the first
/// mora), `]` marks a fall (a high mora followed by a low one).
/// `ハ[シ` is 橋, `ハ]シ` is 箸.
pub fn render_accent_code<S: AsRef<str>>(morae: &[S], pattern: &[u8]) -> String {
  let mut code = String::new();

  for (i, (mora, &pitch)) in morae.iter().zip(pattern).enumerate() {
    if pitch == HIGH && i > 0 && pattern[i - 1] == LOW {
      code.push('[');
    }
    code.push_str(mora.as_ref());
    if pitch == HIGH && pattern.get(i + 1) == Some(&LOW) {
      code.push(']');
    }
  }

  code
}

/// Named pitch-accent class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentClass {
  /// No fall (kernel 0)
  Heiban,
  /// Fall after the first mora
  Atamadaka,
  /// Fall inside the word
  Nakadaka,
  /// Fall after the last mora
  Odaka,
}

impl AccentClass {
  /// Classifies a kernel over a word of `morae` morae.
  pub fn from_kernel(kernel: usize, morae: usize) -> Self {
    match kernel {
      0 => Self::Heiban,
      1 => Self::Atamadaka,
      k if k >= morae => Self::Odaka,
      _ => Self::Nakadaka,
    }
  }

  /// Japanese name (平板型, 頭高型, 中高型, 尾高型).
  pub fn label(&self) -> &'static str {
    match self {
      Self::Heiban => "平板型",
      Self::Atamadaka => "頭高型",
      Self::Nakadaka => "中高型",
      Self::Odaka => "尾高型",
    }
  }
}

impl std::fmt::Display for AccentClass {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}
