//! CLI から実行へ渡すコマンド表現

use std::path::PathBuf;

/// 実行するコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotanixCommand {
    /// 使い方を表示
    Help,
    /// 利用可能なプロファイル一覧
    ListProfiles,
    /// 保存済みの識別履歴を表示
    History { json: bool },
    /// 画像ファイルを識別にかける
    Identify { image_path: PathBuf, json: bool },
}
