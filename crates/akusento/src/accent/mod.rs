//! accent module
pub mod compound;
pub mod pattern;

/// 再エクスポート
pub use compound::{AccentUnit, CombinationType, UnitRole, fold_kernel};
pub use pattern::{AccentClass, HIGH, LOW, UNKNOWN, kernel_from_pattern, pattern_from_kernel};
