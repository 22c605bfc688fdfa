//! In-process CSRF token store.
//!
//! Issued tokens are remembered by hash with an expiry. A token is valid
//! once: successful validation removes it. The store holds at most
//! `max_outstanding` tokens; issuing beyond that evicts the oldest, which is
//! also the soonest to expire since every token gets the same lifetime.

use std::collections::{HashMap, VecDeque};

use avolve_core::csrf::{constant_time_eq, generate_token, hash_token};
use avolve_core::error::CoreError;
use avolve_core::types::Timestamp;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

#[derive(Default)]
struct Outstanding {
    /// Live tokens: hash -> expiry.
    by_hash: HashMap<String, Timestamp>,
    /// Issue order. May still name tokens already consumed; those are
    /// skipped when popped.
    order: VecDeque<(Timestamp, String)>,
}

impl Outstanding {
    fn pop_oldest(&mut self) {
        if let Some((_, hash)) = self.order.pop_front() {
            self.by_hash.remove(&hash);
        }
    }

    /// Drop expired tokens from the front of the issue order.
    fn prune(&mut self, now: Timestamp) {
        while self.order.front().is_some_and(|(expiry, _)| *expiry <= now) {
            self.pop_oldest();
        }
    }
}

/// Outstanding CSRF tokens, keyed by SHA-256 hash.
///
/// Thread-safe via interior `RwLock`; wrap in `Arc` to share.
pub struct CsrfStore {
    ttl_secs: i64,
    max_outstanding: usize,
    tokens: RwLock<Outstanding>,
}

impl CsrfStore {
    pub fn new(ttl_secs: i64, max_outstanding: usize) -> Self {
        Self {
            ttl_secs,
            max_outstanding: max_outstanding.max(1),
            tokens: RwLock::new(Outstanding::default()),
        }
    }

    /// Token lifetime, also used as the cookie `Max-Age`.
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Issue a fresh token, dropping expired ones and evicting the oldest
    /// when the store is full.
    pub async fn issue(&self) -> String {
        let token = generate_token();
        let hash = hash_token(&token);
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.ttl_secs);

        let mut tokens = self.tokens.write().await;
        tokens.prune(now);
        while tokens.order.len() >= self.max_outstanding {
            tokens.pop_oldest();
        }
        tokens.by_hash.insert(hash.clone(), expires_at);
        tokens.order.push_back((expires_at, hash));
        token
    }

    /// Check that the cookie and submitted copies are both present and equal.
    /// Does not touch the store.
    pub fn matching_pair<'a>(
        cookie: Option<&str>,
        submitted: Option<&'a str>,
    ) -> Result<&'a str, CoreError> {
        let (Some(cookie), Some(submitted)) = (cookie, submitted) else {
            return Err(CoreError::Forbidden("Missing CSRF token".into()));
        };

        if !constant_time_eq(cookie, submitted) {
            return Err(CoreError::Forbidden("CSRF token mismatch".into()));
        }
        Ok(submitted)
    }

    /// Consume an issued token. Fails with [`CoreError::Forbidden`] if it was
    /// never issued, already used, evicted, or expired.
    pub async fn consume(&self, token: &str) -> Result<(), CoreError> {
        let expiry = self.tokens.write().await.by_hash.remove(&hash_token(token));
        match expiry {
            Some(expires_at) if expires_at > Utc::now() => Ok(()),
            _ => Err(CoreError::Forbidden("Invalid or expired CSRF token".into())),
        }
    }

    /// [`matching_pair`](Self::matching_pair) followed by
    /// [`consume`](Self::consume). A mismatch leaves the token usable.
    pub async fn validate(
        &self,
        cookie: Option<&str>,
        submitted: Option<&str>,
    ) -> Result<(), CoreError> {
        let token = Self::matching_pair(cookie, submitted)?;
        self.consume(token).await
    }

    /// Number of live tokens, expired ones included until the next issue.
    pub async fn len(&self) -> usize {
        self.tokens.read().await.by_hash.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn issued_token_validates_exactly_once() {
        let store = CsrfStore::new(3600, 100);
        let token = store.issue().await;

        assert!(store.validate(Some(&token), Some(&token)).await.is_ok());
        assert_matches!(
            store.validate(Some(&token), Some(&token)).await,
            Err(CoreError::Forbidden(_))
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        let store = CsrfStore::new(3600, 100);
        let forged = generate_token();
        assert_matches!(
            store.validate(Some(&forged), Some(&forged)).await,
            Err(CoreError::Forbidden(_))
        );
    }

    #[tokio::test]
    async fn cookie_mismatch_keeps_token_usable() {
        let store = CsrfStore::new(3600, 100);
        let token = store.issue().await;

        assert!(store.validate(Some("other"), Some(&token)).await.is_err());
        assert!(store.validate(Some(&token), Some(&token)).await.is_ok());
    }

    #[tokio::test]
    async fn missing_values_are_rejected() {
        let store = CsrfStore::new(3600, 100);
        let token = store.issue().await;
        assert!(store.validate(None, Some(&token)).await.is_err());
        assert!(store.validate(Some(&token), None).await.is_err());
        assert_matches!(
            CsrfStore::matching_pair(Some(&token), Some(&token)),
            Ok(t) if t == token
        );
    }

    #[tokio::test]
    async fn expired_token_fails_and_is_pruned() {
        let store = CsrfStore::new(0, 100);
        let token = store.issue().await;
        assert_matches!(
            store.validate(Some(&token), Some(&token)).await,
            Err(CoreError::Forbidden(_))
        );

        store.issue().await;
        store.issue().await;
        // Each issue prunes the previous (already expired) entries.
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn outstanding_tokens_stay_bounded() {
        let store = CsrfStore::new(3600, 50);
        let first = store.issue().await;
        for _ in 0..500 {
            store.issue().await;
        }

        assert_eq!(store.len().await, 50);
        assert!(store.tokens.read().await.order.len() <= 50);
        // The oldest token was evicted to make room.
        assert_matches!(store.consume(&first).await, Err(CoreError::Forbidden(_)));
    }

    #[tokio::test]
    async fn consumed_tokens_do_not_count_against_the_cap() {
        let store = CsrfStore::new(3600, 3);
        let a = store.issue().await;
        store.consume(&a).await.unwrap();
        let b = store.issue().await;
        let c = store.issue().await;
        let d = store.issue().await;

        assert_eq!(store.len().await, 3);
        for token in [b, c, d] {
            assert!(store.consume(&token).await.is_ok());
        }
    }
}
