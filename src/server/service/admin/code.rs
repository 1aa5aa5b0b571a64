//! One-time admin codes.
//!
//! `AdminCodeService` holds at most one code in memory. A code is issued at startup when
//! no admin account exists and lets the first logged-in user claim admin rights. Codes
//! are consumed on first successful use and expire after a fixed TTL.

use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Default time a freshly generated code stays valid.
pub const ADMIN_CODE_TTL: Duration = Duration::from_secs(10 * 60);

const CODE_LENGTH: usize = 32;
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

struct AdminCode {
    code: String,
    expires_at: Instant,
}

/// Issues and redeems the bootstrap admin code.
///
/// Cloning shares the underlying slot, so the copy stored in `AppState` and the one used
/// at startup see the same code.
#[derive(Clone)]
pub struct AdminCodeService {
    slot: Arc<RwLock<Option<AdminCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    /// Creates a service with no active code and the default TTL.
    pub fn new() -> Self {
        Self::with_ttl(ADMIN_CODE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new random 32-character alphanumeric code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The code to hand to the operator
    pub async fn generate(&self) -> String {
        let mut rng = rand::rng();
        let code: String = (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect();

        *self.slot.write().await = Some(AdminCode {
            code: code.clone(),
            expires_at: Instant::now() + self.ttl,
        });

        code
    }

    /// Redeems `input` if it matches the stored, unexpired code.
    ///
    /// A successful match consumes the code. An expired code is discarded. A wrong code
    /// leaves the stored one in place.
    ///
    /// # Returns
    /// - `true` - Code matched and has been consumed
    /// - `false` - No code, wrong code, or expired
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut slot = self.slot.write().await;

        let Some(stored) = slot.as_ref() else {
            return false;
        };

        if Instant::now() >= stored.expires_at {
            *slot = None;
            return false;
        }

        if stored.code == input {
            *slot = None;
            return true;
        }

        false
    }

    #[cfg(test)]
    async fn has_valid_code(&self) -> bool {
        self.slot
            .read()
            .await
            .as_ref()
            .is_some_and(|c| Instant::now() < c.expires_at)
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
