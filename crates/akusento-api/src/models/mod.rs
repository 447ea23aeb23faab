//! モデルモジュール

mod request;
mod response;

pub use request::{AnalyzeRequest, TargetWordQuery};
pub use response::StatusResponse;

/// 解析結果はコアの WordAnalysis をそのまま JSON で返す
pub use akusento::WordAnalysis;
