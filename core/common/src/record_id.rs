//! レコードID生成: 固定長ASCII・辞書順＝時系列・同一ms内単調増加
//!
//! 形式: base62(0-9,A-Z,a-z) 10文字。値 = (ms since 2020-01-01)<<16 | seq(0..65535)。
//! 辞書順＝数値順なので、履歴をIDでソートすると生成順になる。
//! 同一プロセス内の衝突は seq で、プロセス間はms粒度で回避する。

use std::sync::atomic::{AtomicU64, Ordering};

static LAST_ID: AtomicU64 = AtomicU64::new(0);

const EPOCH_MS: u64 = 1577836800000; // 2020-01-01 00:00:00 UTC
const SEQ_BITS: u64 = 16;
const SEQ_MASK: u64 = (1 << SEQ_BITS) - 1;
const BASE: u64 = 62;
const WIDTH: usize = 10;
const MAX_VAL: u64 = 839299365868340223; // 62^10 - 1

/// 0-9, A-Z, a-z の順で辞書順＝数値順になるbase62
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// 新規レコードIDを1つ生成する。`now_ms` はUNIXエポックからのミリ秒。
pub fn generate(now_ms: u64) -> String {
    let ms_rel = now_ms.saturating_sub(EPOCH_MS);
    let base = (ms_rel << SEQ_BITS).min(MAX_VAL);

    loop {
        let prev = LAST_ID.load(Ordering::SeqCst);
        let next = if (prev >> SEQ_BITS) < ms_rel {
            base
        } else {
            let seq = (prev & SEQ_MASK) + 1;
            if seq > SEQ_MASK {
                continue; // 同一msでseq枯渇、次のmsまでリトライ
            }
            (prev + 1).min(MAX_VAL)
        };
        if LAST_ID
            .compare_exchange(prev, next, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return to_base62(next);
        }
    }
}

fn to_base62(mut n: u64) -> String {
    let mut buf = [0u8; WIDTH];
    for i in (0..WIDTH).rev() {
        buf[i] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now_ms() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    #[test]
    fn record_id_fixed_length_ascii() {
        let id = generate(now_ms());
        assert_eq!(id.len(), 10);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn record_id_non_empty_and_unique() {
        let ms = now_ms();
        let a = generate(ms);
        let b = generate(ms);
        assert!(!a.is_empty());
        assert_ne!(a, b, "same-ms IDs must differ via the sequence bits");
    }

    #[test]
    fn record_id_lexicographic_monotonic() {
        let ids: Vec<String> = (0..50).map(|_| generate(now_ms())).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted, "sort() must preserve generation order");
    }
}
