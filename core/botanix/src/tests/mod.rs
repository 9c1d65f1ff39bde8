//! 結合テスト（usecase + adapter を通して検証する）
