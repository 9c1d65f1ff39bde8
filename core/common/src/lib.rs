//! Botanix共通ライブラリ
//!
//! `botanix`コマンドから使う、ドメイン非依存の基盤を提供します。

/// エラーハンドリング
pub mod error;

/// レコードID生成（固定長・辞書順＝時系列）
pub mod record_id;

/// ビジョンモデルのドライバーとプロバイダ
pub mod llm;

/// Outbound ポート
pub mod ports;

/// 標準アダプタ
pub mod adapter;
