//! akusento ピッチアクセント解析ライブラリー
//!
//! vibrato-rkyv と UniDic のアクセント情報を用いて、日本語の読みと
//! アクセント型を求め、アクセント当てゲームの判定を行う

/// アクセントモジュール - 核からのパターン生成、複合語の核、アクセント型
pub mod accent;

/// 解析モジュール - UniDic 素性の読み取りとアクセント解析
pub mod analyzer;

/// 候補モジュール - 出題候補の構築・保存・ランダム選択
pub mod candidates;

/// 設定モジュール - AkusentoConfig 等の設定構造体を定義
pub mod config;

/// 辞書モジュール - 形態素解析用辞書の管理・ロード機能を提供
pub mod dictionary;

/// エラーモジュール - AkusentoError, AkusentoResult等のエラー型を定義
pub mod errors;

/// ゲームモジュール - アクセント比較とラウンドの状態遷移
pub mod game;

/// かなモジュール - カタカナ正規化とモーラ分割
pub mod kana;

/// データモデルモジュール - WordAnalysis を定義
pub mod models;

/// サービスモジュール - AkusentoService 等の上位レベルAPIを提供
pub mod service;

/// 再エクスポート
pub use config::{AkusentoConfig, DictionaryPreset};
pub use errors::{AkusentoError, AkusentoResult};
pub use models::WordAnalysis;
pub use service::AkusentoService;
