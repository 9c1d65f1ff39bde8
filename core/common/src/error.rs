//! エラーハンドリング
//!
//! パイプライン全体で使うエラー型。BSD sysexits に合わせた終了コードを持つ。

use thiserror::Error as ThisError;

/// エラー型
///
/// 失敗はパイプラインの中で一度だけ捕捉され、Runner でユーザー向け
/// メッセージに変換される。リトライはどこでも行わない。
#[derive(Debug, Clone, ThisError)]
pub enum Error {
    /// 引数不正（64）
    #[error("{0}")]
    InvalidArgument(String),
    /// 画像形式が認識できない（65）
    #[error("{0}")]
    UnsupportedMedia(String),
    /// 画像バイト列がデコードできない（65）
    #[error("{0}")]
    Decode(String),
    /// モデル応答からJSONが取り出せない、またはパースできない（65）
    #[error("{0}")]
    MalformedReply(String),
    /// JSONシリアライズ／設定ファイルの破損（65）
    #[error("{0}")]
    Json(String),
    /// HTTP／リモートサービス失敗。タイムアウトもここに落ちる（69）
    #[error("{0}")]
    Http(String),
    /// ファイルI/O失敗（74）
    #[error("{0}")]
    Io(String),
    /// 識別リクエストの多重実行（75）
    #[error("{0}")]
    Busy(String),
    /// 認証情報（APIキー環境変数）が未設定（78）
    #[error("{0}")]
    MissingCredential(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn unsupported_media(msg: impl Into<String>) -> Self {
        Self::UnsupportedMedia(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn malformed_reply(msg: impl Into<String>) -> Self {
        Self::MalformedReply(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn busy(msg: impl Into<String>) -> Self {
        Self::Busy(msg.into())
    }

    /// 環境変数が未設定のとき（認証情報の欠落）
    pub fn env(msg: impl Into<String>) -> Self {
        Self::MissingCredential(msg.into())
    }

    /// 終了コード（BSD sysexits）
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::UnsupportedMedia(_)
            | Self::Decode(_)
            | Self::MalformedReply(_)
            | Self::Json(_) => 65,
            Self::Http(_) => 69,
            Self::Io(_) => 74,
            Self::Busy(_) => 75,
            Self::MissingCredential(_) => 78,
        }
    }

    /// 使い方の誤りか（main で usage を表示するか）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::invalid_argument("x").exit_code(), 64);
        assert_eq!(Error::unsupported_media("x").exit_code(), 65);
        assert_eq!(Error::decode("x").exit_code(), 65);
        assert_eq!(Error::malformed_reply("x").exit_code(), 65);
        assert_eq!(Error::json("x").exit_code(), 65);
        assert_eq!(Error::http("x").exit_code(), 69);
        assert_eq!(Error::io_msg("x").exit_code(), 74);
        assert_eq!(Error::busy("x").exit_code(), 75);
        assert_eq!(Error::env("x").exit_code(), 78);
    }

    #[test]
    fn test_is_usage() {
        assert!(Error::invalid_argument("bad flag").is_usage());
        assert!(!Error::http("down").is_usage());
        assert!(!Error::env("no key").is_usage());
    }

    #[test]
    fn test_display_is_message_only() {
        let e = Error::http("Gemini API error: quota exceeded");
        assert_eq!(e.to_string(), "Gemini API error: quota exceeded");
    }
}
