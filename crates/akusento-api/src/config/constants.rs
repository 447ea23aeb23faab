//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// 推測語は単語か短い句のため、1KB を上限とする。
pub const MAX_TEXT_LENGTH: usize = 1_024;

/// デフォルトのバインドアドレス
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// デフォルトの辞書プリセット名
///
/// UniDic (CWJ) をデフォルトとして使用。
/// アクセント核 (aType) を持つ辞書である必要がある。
pub const DEFAULT_PRESET_DICT: &str = "unidic-cwj";

/// サービス名（`GET /` の応答に含める）
pub const SERVICE_NAME: &str = "akusento-api";
