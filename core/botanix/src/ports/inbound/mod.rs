//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::cli::Config;
use common::error::Error;

/// botanix アプリケーションを実行する Inbound ポート
///
/// main はこの trait を実装した型（Runner）の run を呼び出す。
pub trait RunBotanixApp: Send + Sync {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
