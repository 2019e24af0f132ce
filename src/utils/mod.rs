//! Utility functions

pub mod crypto;
pub mod time;
pub mod validation;

pub use crypto::{generate_secure_token, hash_string};
pub use time::{now_utc, today_utc};
pub use validation::{validate_input_schema, validate_username};
