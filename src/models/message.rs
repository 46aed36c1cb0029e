use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A group chat message.
///
/// Ids are process-lifetime unique and strictly increasing; they are never
/// reused, even after old messages are evicted from the log. `username`
/// references a directory entry at creation time and is not re-validated
/// later.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub id: u64,
    pub username: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
