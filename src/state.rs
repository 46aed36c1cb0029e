use crate::security::TokenCodec;
use crate::store::{MemberDirectory, MessageLog};

/// Shared application state, cloned into every worker. The stores are
/// `Arc`-backed handles, so clones observe the same process-wide tables.
#[derive(Clone)]
pub struct AppState {
    pub members: MemberDirectory,
    pub messages: MessageLog,
    pub tokens: TokenCodec,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            members: MemberDirectory::new(),
            messages: MessageLog::new(),
            tokens: TokenCodec::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
