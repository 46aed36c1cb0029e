/// Security primitives: password digests and signed bearer tokens.

pub mod password;
pub mod token;

pub use password::hash_password;
pub use token::{TokenClaims, TokenCodec};
