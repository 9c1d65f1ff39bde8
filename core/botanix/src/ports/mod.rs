//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（画像・ビジョンモデル・履歴）を使うための trait

pub mod inbound;
pub mod outbound;
