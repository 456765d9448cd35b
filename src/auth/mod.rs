pub mod token;

pub use token::{decode_token, issue_token, verify_token};
