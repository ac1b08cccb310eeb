use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

/// Fixed session lifetime. The TTL is not sliding: a session created at login
/// stays valid for exactly this long regardless of activity, matching the
/// 24h Max-Age on the `hub_session` cookie.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Session data created on successful login or registration
#[derive(Clone, Debug)]
pub struct Session {
    pub user_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// In-memory session registry.
///
/// Process-wide mapping from opaque token to authenticated user id. Sessions
/// live only in this map — never in durable storage — and expire after
/// [`SESSION_TTL_HOURS`]. All access goes through `create`/`resolve`/`revoke`
/// so no ambient global reaches the session table.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a new session for a user and return the opaque token.
    ///
    /// Tokens are random UUIDv4s; a collision with a live token would silently
    /// overwrite it. At 122 bits of entropy that is an accepted risk, not a
    /// retried condition.
    pub async fn create(&self, user_id: i64) -> String {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            user_id,
            created_at: chrono::Utc::now(),
        };
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), session);
        token
    }

    /// Resolve a token to a user id. Expired sessions resolve as missing.
    pub async fn resolve(&self, token: &str) -> Option<i64> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(token)?;

        let elapsed = chrono::Utc::now().signed_duration_since(session.created_at);
        if elapsed.num_hours() >= SESSION_TTL_HOURS {
            return None;
        }

        Some(session.user_id)
    }

    /// Remove a session (logout). Revoking an unknown or already-revoked
    /// token is a no-op.
    pub async fn revoke(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }

    /// Drop expired sessions from the map.
    ///
    /// Expiry is already enforced at resolve time; this only reclaims memory.
    pub async fn cleanup_expired(&self) {
        let mut sessions = self.sessions.write().await;
        let now = chrono::Utc::now();

        sessions.retain(|_, session| {
            let elapsed = now.signed_duration_since(session.created_at);
            elapsed.num_hours() < SESSION_TTL_HOURS
        });
    }

    #[cfg(test)]
    async fn insert_raw(&self, token: &str, session: Session) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.to_string(), session);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
