use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::user::models::User;

/// Public API representation of a user (JSON responses).
///
/// Deliberately excludes the password digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
