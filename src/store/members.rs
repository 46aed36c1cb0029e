use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::models::Member;
use crate::security::hash_password;
use crate::validators;

/// Process-wide mapping from username to member record; the only place
/// identity is created or checked. Usernames are case-sensitive exact-match
/// keys. Registration's check-then-insert runs under a single write lock so
/// two concurrent registrations of the same name cannot both succeed.
#[derive(Clone, Default)]
pub struct MemberDirectory {
    inner: Arc<RwLock<HashMap<String, Member>>>,
}

impl MemberDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new member and return its record.
    ///
    /// The username is trimmed before any check. Fails with `InvalidInput`
    /// when the trimmed username or password is empty or the username
    /// contains the reserved ':' delimiter, and with `Conflict` when the
    /// username is already taken. The password is hashed as supplied,
    /// untrimmed.
    pub fn register(&self, username: &str, password: &str) -> AppResult<Member> {
        let username = username.trim();
        if username.is_empty() || password.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "username and password are required".into(),
            ));
        }
        if !validators::validate_username(username) {
            return Err(AppError::InvalidInput(
                "username must not contain ':'".into(),
            ));
        }

        let mut members = self.inner.write().map_err(|_| AppError::Internal)?;
        if members.contains_key(username) {
            return Err(AppError::Conflict(
                "a member with this username already exists".into(),
            ));
        }

        let member = Member {
            username: username.to_string(),
            password_hash: hash_password(password),
            created_at: Utc::now(),
        };
        members.insert(member.username.clone(), member.clone());
        Ok(member)
    }

    /// Look up a member by exact username.
    pub fn find(&self, username: &str) -> AppResult<Option<Member>> {
        let members = self.inner.read().map_err(|_| AppError::Internal)?;
        Ok(members.get(username).cloned())
    }

    /// True iff the member exists and the digest of the supplied password
    /// matches the stored one. Unknown users and wrong passwords are
    /// indistinguishable here; callers must not distinguish them either.
    pub fn verify_password(&self, username: &str, password: &str) -> AppResult<bool> {
        let members = self.inner.read().map_err(|_| AppError::Internal)?;
        Ok(members
            .get(username)
            .is_some_and(|m| m.password_hash == hash_password(password)))
    }
}
