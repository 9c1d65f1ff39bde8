//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・設定ファイルパス・既定言語を環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. BOTANIX_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/botanix（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/botanix
    fn resolve_home_dir(&self) -> Result<PathBuf, Error>;

    /// プロバイダプロファイル設定ファイルのパス（ホーム直下の profiles.json）
    fn resolve_profiles_config_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.join("profiles.json"))
    }

    /// 既定の出力言語（BOTANIX_LANG、未設定なら None）
    fn language_from_env(&self) -> Option<String>;
}
