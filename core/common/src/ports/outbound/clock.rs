//! 時刻 Outbound ポート
//!
//! レコードのタイムスタンプとID生成が使う。テストでは固定時刻を返す実装を渡せる。

/// 現在時刻の抽象（Outbound ポート）
pub trait Clock: Send + Sync {
    /// UNIXエポックからのミリ秒
    fn now_ms(&self) -> u64;
}
