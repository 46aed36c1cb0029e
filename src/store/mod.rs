/// Process-wide in-memory state. Nothing here survives a restart.

pub mod members;
pub mod messages;

pub use members::MemberDirectory;
pub use messages::MessageLog;
