use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::models::Message;

/// Retention cap. Once the log grows past this, the oldest entries are
/// evicted in bulk until the count is back at the cap.
pub const MAX_STORED_MESSAGES: usize = 1000;

struct LogInner {
    messages: VecDeque<Message>,
    last_id: u64,
}

/// Bounded, append-only in-memory log of chat messages.
///
/// A single mutex serializes id assignment, append, and eviction, so
/// concurrent appends can neither produce duplicate ids nor tear an
/// eviction. Ids start at 1 and keep increasing for the process lifetime;
/// eviction never resets or reuses them.
#[derive(Clone)]
pub struct MessageLog {
    inner: Arc<Mutex<LogInner>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(LogInner {
                messages: VecDeque::new(),
                last_id: 0,
            })),
        }
    }

    /// Append a message and return it.
    ///
    /// Text validation (trimmed, non-empty, length cap) is the caller's
    /// responsibility; the log stores whatever it is given.
    pub fn append(&self, username: &str, text: &str) -> AppResult<Message> {
        let mut inner = self.inner.lock().map_err(|_| AppError::Internal)?;

        inner.last_id += 1;
        let message = Message {
            id: inner.last_id,
            username: username.to_string(),
            text: text.to_string(),
            created_at: Utc::now(),
        };
        inner.messages.push_back(message.clone());

        if inner.messages.len() > MAX_STORED_MESSAGES {
            let excess = inner.messages.len() - MAX_STORED_MESSAGES;
            inner.messages.drain(..excess);
        }

        Ok(message)
    }

    /// The most recent `limit` messages, id-ascending.
    pub fn recent(&self, limit: usize) -> AppResult<Vec<Message>> {
        let inner = self.inner.lock().map_err(|_| AppError::Internal)?;
        let skip = inner.messages.len().saturating_sub(limit);
        Ok(inner.messages.iter().skip(skip).cloned().collect())
    }

    pub fn len(&self) -> AppResult<usize> {
        let inner = self.inner.lock().map_err(|_| AppError::Internal)?;
        Ok(inner.messages.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_have_no_gaps() {
        let log = MessageLog::new();
        for i in 1..=5u64 {
            let message = log.append("alice", &format!("message {i}")).unwrap();
            assert_eq!(message.id, i);
        }

        let recent = log.recent(5).unwrap();
        assert_eq!(recent.len(), 5);
        let ids: Vec<u64> = recent.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_recent_returns_ascending_tail() {
        let log = MessageLog::new();
        for i in 0..10 {
            log.append("alice", &format!("message {i}")).unwrap();
        }

        let tail = log.recent(3).unwrap();
        let ids: Vec<u64> = tail.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![8, 9, 10]);
    }

    #[test]
    fn test_recent_with_limit_above_len_returns_all() {
        let log = MessageLog::new();
        log.append("alice", "hi").unwrap();
        assert_eq!(log.recent(100).unwrap().len(), 1);
        assert_eq!(log.recent(0).unwrap().len(), 0);
    }

    #[test]
    fn test_eviction_keeps_cap_and_never_reuses_ids() {
        let log = MessageLog::new();
        let extra = 5;
        for i in 0..(MAX_STORED_MESSAGES + extra) {
            log.append("alice", &format!("message {i}")).unwrap();
        }

        assert_eq!(log.len().unwrap(), MAX_STORED_MESSAGES);

        // The retained window is exactly the most recent cap-many ids.
        let all = log.recent(MAX_STORED_MESSAGES).unwrap();
        assert_eq!(all.first().unwrap().id, extra as u64 + 1);
        assert_eq!(all.last().unwrap().id, (MAX_STORED_MESSAGES + extra) as u64);

        // The counter keeps going from where it was.
        let next = log.append("alice", "one more").unwrap();
        assert_eq!(next.id, (MAX_STORED_MESSAGES + extra + 1) as u64);
    }

    #[test]
    fn test_append_stamps_username_and_text() {
        let log = MessageLog::new();
        let message = log.append("bob", "hello there").unwrap();
        assert_eq!(message.username, "bob");
        assert_eq!(message.text, "hello there");
        assert!(!log.is_empty().unwrap());
    }
}
