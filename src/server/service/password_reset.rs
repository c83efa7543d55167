//! Password reset code store.
//!
//! This module provides the `PasswordResetService` for issuing and validating one-time-use
//! password reset codes. Codes are six digits, keyed by the account's email address, held
//! in memory with a 10-minute TTL and invalidated after successful use or expiration.
//! Codes do not survive a restart.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default time-to-live for reset codes in seconds.
const RESET_CODE_TTL_SECONDS: u64 = 10 * 60;

/// Stored reset code with expiration timestamp.
#[derive(Clone)]
struct ResetCode {
    code: String,
    expires_at: Instant,
}

impl ResetCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input.trim()
    }
}

/// Service for managing password reset codes.
///
/// Holds at most one active code per email address; issuing a new code replaces the
/// previous one. Expired codes are purged from the map whenever a new code is issued
/// so the map cannot grow without bound.
#[derive(Clone)]
pub struct PasswordResetService {
    /// Active codes keyed by normalized email address.
    codes: Arc<RwLock<HashMap<String, ResetCode>>>,
    ttl: Duration,
}

impl PasswordResetService {
    /// Creates a new PasswordResetService with the default 10-minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(RESET_CODE_TTL_SECONDS))
    }

    /// Creates a new PasswordResetService whose codes expire after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Generates a new six digit code for `email`.
    ///
    /// Replaces any code previously issued for the same address and purges expired
    /// entries for other addresses.
    ///
    /// # Returns
    /// - `String` - The generated code
    pub async fn generate(&self, email: &str) -> String {
        let code_string = Self::generate_random_code();
        let mut codes = self.codes.write().await;

        codes.retain(|_, code| !code.is_expired());
        codes.insert(
            Self::key(email),
            ResetCode::new(code_string.clone(), self.ttl),
        );

        code_string
    }

    /// Validates the provided code for `email`.
    ///
    /// A matching, unexpired code is removed so it cannot be reused. Expired codes are
    /// removed and fail validation. A wrong code leaves the stored code in place.
    ///
    /// # Returns
    /// - `true` - Code matched and was still valid; it has been consumed
    /// - `false` - No code, wrong code, or expired code
    pub async fn validate_and_consume(&self, email: &str, input_code: &str) -> bool {
        let key = Self::key(email);
        let mut codes = self.codes.write().await;

        let Some(stored_code) = codes.get(&key) else {
            return false;
        };

        if stored_code.is_expired() {
            codes.remove(&key);
            return false;
        }

        if stored_code.matches(input_code) {
            codes.remove(&key);
            return true;
        }

        false
    }

    fn key(email: &str) -> String {
        email.trim().to_lowercase()
    }

    fn generate_random_code() -> String {
        let mut rng = rand::rng();
        format!("{:06}", rng.random_range(0..1_000_000u32))
    }

    /// Number of codes currently held, expired or not.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }
}

impl Default for PasswordResetService {
    fn default() -> Self {
        Self::new()
    }
}
