//! ビジョンプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// 1 回の識別リクエストの材料
///
/// 画像は base64 文字列で渡す。`data:image/...;base64,` プレフィックスが
/// 付いたままでもよく、プロバイダ側で剥がす。
#[derive(Debug, Clone)]
pub struct VisionRequest<'a> {
    /// システム指示（言語・トーンの指定を含む）
    pub system_instruction: &'a str,
    /// ユーザープロンプト
    pub prompt: &'a str,
    /// 画像の MIME タイプ（例: image/jpeg）
    pub image_mime: &'a str,
    /// 画像の base64 ペイロード
    pub image_base64: &'a str,
    /// 応答の形を指定するスキーマ（対応しないプロバイダは無視してよい）
    pub response_schema: Option<&'a Value>,
}

/// ビジョンプロバイダのトレイト
///
/// 各プロバイダ（Gemini、Fixture）はこのトレイトを実装する。
pub trait VisionProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成する
    fn make_request_payload(&self, request: &VisionRequest) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得する
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - HTTP失敗（タイムアウト込み）
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出する
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - レスポンスが読めない、またはAPIレベルのエラー
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
