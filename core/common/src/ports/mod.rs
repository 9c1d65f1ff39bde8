//! ポート定義
//!
//! usecase が外界に触れるための trait を置く。実装は adapter 側。

pub mod outbound;
