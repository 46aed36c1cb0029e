pub mod member;
pub mod message;

pub use member::Member;
pub use message::Message;
