use chrono::{DateTime, Utc};

/// A registered member. Created by registration, never mutated or deleted
/// afterwards; owned exclusively by the member directory. The password is
/// only ever stored as its hex digest.
#[derive(Debug, Clone)]
pub struct Member {
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
