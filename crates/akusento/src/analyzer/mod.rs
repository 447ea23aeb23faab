//! analyzer モジュール
pub mod accent_analyzer;
pub mod unidic_feature;

/// 再エクスポート
pub use accent_analyzer::{AccentAnalyzer, analyze_tokens};
pub use unidic_feature::UnidicFeature;
