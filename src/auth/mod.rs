//! Shared-secret authentication with per-address failure tracking.
//!
//! Every protected request passes through [`AuthGate::authenticate`]. Repeated
//! failures from one client address lead to a temporary block during which
//! all attempts from that address are rejected without looking at the
//! supplied credential.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};

use crate::config::AuthConfig;

/// Upper bound on a block so `now + block` can never overflow
const MAX_BLOCK_WEEKS: i64 = 52 * 100;

/// Result of a single authentication check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated,
    Unauthorized,
    RateLimited,
}

impl AuthOutcome {
    pub fn is_authenticated(self) -> bool {
        matches!(self, AuthOutcome::Authenticated)
    }
}

/// Failure bookkeeping for one client address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub fail_count: u32,
    pub first_fail_at: DateTime<Utc>,
    pub blocked_until: Option<DateTime<Utc>>,
}

impl FailureRecord {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            fail_count: 0,
            first_fail_at: now,
            blocked_until: None,
        }
    }

    fn is_blocked_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.blocked_until, Some(until) if now < until)
    }

    fn block_expired_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.blocked_until, Some(until) if now >= until)
    }

    fn clear(&mut self) {
        self.fail_count = 0;
        self.blocked_until = None;
    }
}

pub struct AuthGate {
    api_key: String,
    fail_threshold: u32,
    block_duration: Duration,
    // TODO: evict records whose last failure is older than the block duration
    records: Mutex<HashMap<String, FailureRecord>>,
}

impl AuthGate {
    pub fn new(api_key: impl Into<String>, fail_threshold: u32, block_duration: std::time::Duration) -> Self {
        let cap = Duration::weeks(MAX_BLOCK_WEEKS);
        let block_duration = Duration::from_std(block_duration)
            .map(|d| d.min(cap))
            .unwrap_or(cap);
        Self {
            api_key: api_key.into(),
            fail_threshold,
            block_duration,
            records: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.fail_threshold,
            std::time::Duration::from_secs(config.block_seconds),
        )
    }

    /// Check `credential` for a request coming from `client_addr`.
    pub fn authenticate(&self, client_addr: &str, credential: Option<&str>) -> AuthOutcome {
        self.authenticate_at(client_addr, credential, Utc::now())
    }

    /// Same as [`authenticate`](Self::authenticate) with an explicit clock reading.
    pub fn authenticate_at(
        &self,
        client_addr: &str,
        credential: Option<&str>,
        now: DateTime<Utc>,
    ) -> AuthOutcome {
        // One lock for the whole transition so concurrent failures from the
        // same address cannot lose increments.
        let mut records = self.lock_records();

        if let Some(record) = records.get_mut(client_addr) {
            if record.is_blocked_at(now) {
                tracing::warn!(
                    ip = client_addr,
                    fail_count = record.fail_count,
                    until = record.blocked_until.map(|t| t.timestamp()).unwrap_or(0),
                    "Auth attempt while blocked"
                );
                return AuthOutcome::RateLimited;
            }
            if record.block_expired_at(now) {
                record.clear();
            }
        }

        if credential == Some(self.api_key.as_str()) {
            if let Some(record) = records.get_mut(client_addr) {
                record.clear();
            }
            return AuthOutcome::Authenticated;
        }

        let record = records
            .entry(client_addr.to_string())
            .or_insert_with(|| FailureRecord::new(now));
        if record.fail_count == 0 {
            record.first_fail_at = now;
        }
        record.fail_count = record.fail_count.saturating_add(1);

        let blocked = record.fail_count >= self.fail_threshold;
        if blocked {
            record.blocked_until = Some(now + self.block_duration);
        }

        tracing::warn!(
            ip = client_addr,
            fail_count = record.fail_count,
            blocked,
            until = record.blocked_until.map(|t| t.timestamp()).unwrap_or(0),
            "Authentication failed"
        );

        if blocked {
            AuthOutcome::RateLimited
        } else {
            AuthOutcome::Unauthorized
        }
    }

    /// Current consecutive-failure count recorded for `client_addr`
    pub fn failure_count(&self, client_addr: &str) -> u32 {
        self.lock_records()
            .get(client_addr)
            .map(|r| r.fail_count)
            .unwrap_or(0)
    }

    /// Snapshot of the record kept for `client_addr`, if any
    pub fn record(&self, client_addr: &str) -> Option<FailureRecord> {
        self.lock_records().get(client_addr).cloned()
    }

    fn lock_records(&self) -> MutexGuard<'_, HashMap<String, FailureRecord>> {
        // The map stays consistent after every statement, so a poisoned lock
        // is still safe to use.
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("fail_threshold", &self.fail_threshold)
            .field("block_duration", &self.block_duration)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const KEY: &str = "devil";

    fn gate() -> AuthGate {
        AuthGate::new(KEY, 5, std::time::Duration::from_secs(300))
    }

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_correct_key_authenticates() {
        let gate = gate();
        assert_eq!(gate.authenticate("10.0.0.1", Some(KEY)), AuthOutcome::Authenticated);
        assert!(gate.record("10.0.0.1").is_none());
    }

    #[test]
    fn test_absent_credential_is_unauthorized() {
        let gate = gate();
        assert_eq!(gate.authenticate_at("10.0.0.1", None, t0()), AuthOutcome::Unauthorized);
        assert_eq!(gate.failure_count("10.0.0.1"), 1);
    }

    #[test]
    fn test_comparison_is_exact() {
        let gate = AuthGate::new(KEY, 100, std::time::Duration::from_secs(300));
        for wrong in ["Devil", "devil ", " devil", "devi", ""] {
            assert_eq!(
                gate.authenticate_at("10.0.0.1", Some(wrong), t0()),
                AuthOutcome::Unauthorized,
                "{:?} must not match",
                wrong
            );
        }
    }

    #[test]
    fn test_threshold_sequence_then_block() {
        let gate = gate();
        let outcomes: Vec<_> = (0..5)
            .map(|_| gate.authenticate_at("10.0.0.1", Some("wrong"), t0()))
            .collect();
        assert_eq!(
            outcomes,
            vec![
                AuthOutcome::Unauthorized,
                AuthOutcome::Unauthorized,
                AuthOutcome::Unauthorized,
                AuthOutcome::Unauthorized,
                AuthOutcome::RateLimited,
            ]
        );

        let record = gate.record("10.0.0.1").unwrap();
        assert_eq!(record.fail_count, 5);
        assert_eq!(record.blocked_until, Some(t0() + Duration::seconds(300)));

        // Blocked: even the right key is refused and the count does not move
        let later = t0() + Duration::seconds(1);
        assert_eq!(gate.authenticate_at("10.0.0.1", Some("wrong"), later), AuthOutcome::RateLimited);
        assert_eq!(gate.authenticate_at("10.0.0.1", Some(KEY), later), AuthOutcome::RateLimited);
        assert_eq!(gate.failure_count("10.0.0.1"), 5);
    }

    #[test]
    fn test_block_expiry_then_success_resets() {
        let gate = gate();
        for _ in 0..5 {
            gate.authenticate_at("10.0.0.1", Some("wrong"), t0());
        }

        let expired = t0() + Duration::seconds(300);
        assert_eq!(gate.authenticate_at("10.0.0.1", Some(KEY), expired), AuthOutcome::Authenticated);
        assert_eq!(gate.failure_count("10.0.0.1"), 0);
        assert_eq!(gate.record("10.0.0.1").unwrap().blocked_until, None);

        // Next failure starts a fresh sequence
        let next = expired + Duration::seconds(1);
        assert_eq!(gate.authenticate_at("10.0.0.1", Some("wrong"), next), AuthOutcome::Unauthorized);
        let record = gate.record("10.0.0.1").unwrap();
        assert_eq!(record.fail_count, 1);
        assert_eq!(record.first_fail_at, next);
    }

    #[test]
    fn test_block_expiry_then_failure_counts_from_one() {
        let gate = gate();
        for _ in 0..5 {
            gate.authenticate_at("10.0.0.1", None, t0());
        }

        let expired = t0() + Duration::seconds(301);
        assert_eq!(gate.authenticate_at("10.0.0.1", None, expired), AuthOutcome::Unauthorized);
        assert_eq!(gate.failure_count("10.0.0.1"), 1);
    }

    #[test]
    fn test_success_resets_accumulated_failures() {
        let gate = gate();
        for _ in 0..4 {
            gate.authenticate_at("10.0.0.1", Some("wrong"), t0());
        }
        assert_eq!(gate.authenticate_at("10.0.0.1", Some(KEY), t0()), AuthOutcome::Authenticated);
        assert_eq!(gate.failure_count("10.0.0.1"), 0);

        // Four more failures are needed again before a block
        for _ in 0..4 {
            assert_eq!(
                gate.authenticate_at("10.0.0.1", Some("wrong"), t0()),
                AuthOutcome::Unauthorized
            );
        }
    }

    #[test]
    fn test_addresses_are_isolated() {
        let gate = gate();
        for _ in 0..3 {
            gate.authenticate_at("10.0.0.2", Some("wrong"), t0());
        }
        assert_eq!(gate.authenticate_at("10.0.0.1", Some(KEY), t0()), AuthOutcome::Authenticated);
        assert_eq!(gate.failure_count("10.0.0.2"), 3);

        for _ in 0..5 {
            gate.authenticate_at("10.0.0.3", Some("wrong"), t0());
        }
        assert_eq!(gate.authenticate_at("10.0.0.1", Some(KEY), t0()), AuthOutcome::Authenticated);
    }

    #[test]
    fn test_threshold_of_one_blocks_immediately() {
        let gate = AuthGate::new(KEY, 1, std::time::Duration::from_secs(10));
        assert_eq!(gate.authenticate_at("10.0.0.1", None, t0()), AuthOutcome::RateLimited);
    }

    #[test]
    fn test_concurrent_failures_are_all_counted() {
        let gate = Arc::new(AuthGate::new(KEY, 1_000, std::time::Duration::from_secs(300)));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gate = Arc::clone(&gate);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        gate.authenticate("10.0.0.9", Some("wrong"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(gate.failure_count("10.0.0.9"), 400);
    }

    #[test]
    fn test_from_config() {
        let config = AuthConfig {
            api_key: KEY.to_string(),
            fail_threshold: 2,
            block_seconds: 60,
        };
        let gate = AuthGate::from_config(&config);
        assert_eq!(gate.authenticate_at("h", None, t0()), AuthOutcome::Unauthorized);
        assert_eq!(gate.authenticate_at("h", None, t0()), AuthOutcome::RateLimited);
        assert_eq!(
            gate.record("h").unwrap().blocked_until,
            Some(t0() + Duration::seconds(60))
        );
    }
}
