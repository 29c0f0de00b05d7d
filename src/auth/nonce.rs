//! Nonce generation for Gemini API authentication.
//!
//! Gemini rejects a signed request whose nonce is not greater than the last one
//! it accepted for the same key. Nonces here are milliseconds since the Unix
//! epoch, so two requests inside the same millisecond can collide.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// Must never be lower than a value previously returned by the same provider.
    fn next_nonce(&self) -> u64;
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Wall-clock millisecond nonces that never go backward.
///
/// A system clock rollback is absorbed by repeating the highest value seen so
/// far. Two calls in the same millisecond return the same nonce and the
/// exchange will reject the second request.
#[derive(Debug, Default)]
pub struct TimestampNonce {
    last_nonce: AtomicU64,
}

impl TimestampNonce {
    /// Create a new timestamp nonce provider.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceProvider for TimestampNonce {
    fn next_nonce(&self) -> u64 {
        let now = timestamp_ms();
        let prev = self.last_nonce.fetch_max(now, Ordering::SeqCst);
        prev.max(now)
    }
}

/// Strictly increasing nonces seeded from the wall clock.
///
/// Returns `max(now_ms, last + 1)`. Under bursts the nonce runs ahead of the
/// clock, which differs from what the exchange sees from [`TimestampNonce`].
/// Opt in through the client builder.
#[derive(Debug, Default)]
pub struct IncreasingNonce {
    last_nonce: AtomicU64,
}

impl IncreasingNonce {
    /// Create a new increasing nonce provider.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceProvider for IncreasingNonce {
    fn next_nonce(&self) -> u64 {
        let time_nonce = timestamp_ms();

        loop {
            let last = self.last_nonce.load(Ordering::SeqCst);
            let next = time_nonce.max(last + 1);

            if self
                .last_nonce
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_timestamp_nonce_never_decreases() {
        let provider = TimestampNonce::new();

        let mut last = 0u64;
        for _ in 0..1000 {
            let nonce = provider.next_nonce();
            assert!(nonce >= last, "Nonce must not go backward");
            last = nonce;
        }
    }

    #[test]
    fn test_timestamp_nonce_is_milliseconds() {
        let before = timestamp_ms();
        let nonce = TimestampNonce::new().next_nonce();
        let after = timestamp_ms();
        assert!(before <= nonce && nonce <= after);
    }

    #[test]
    fn test_timestamp_nonce_absorbs_rollback() {
        let provider = TimestampNonce::new();
        let future = timestamp_ms() + 60_000;
        provider.last_nonce.store(future, Ordering::SeqCst);
        assert_eq!(provider.next_nonce(), future);
    }

    #[test]
    fn test_increasing_nonce_strictly_increasing() {
        let provider = IncreasingNonce::new();

        let mut last = 0u64;
        for _ in 0..1000 {
            let nonce = provider.next_nonce();
            assert!(nonce > last, "Nonce must be strictly increasing");
            last = nonce;
        }
    }

    #[test]
    fn test_increasing_nonce_unique_across_threads() {
        let provider = std::sync::Arc::new(IncreasingNonce::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let p = provider.clone();
            handles.push(thread::spawn(move || {
                (0..1000).map(|_| p.next_nonce()).collect::<Vec<_>>()
            }));
        }

        let mut all_nonces = HashSet::new();
        for handle in handles {
            for nonce in handle.join().unwrap() {
                assert!(all_nonces.insert(nonce), "Nonce must be unique across threads");
            }
        }
    }
}
