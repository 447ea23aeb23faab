//! kana module
pub mod mora;

/// 再エクスポート
pub use mora::{is_katakana_reading, mora_count, split_morae, to_katakana};
