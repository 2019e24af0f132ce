//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod badge;
pub mod interview;
pub mod question;
pub mod submission;
pub mod user;

pub use badge::*;
pub use interview::*;
pub use question::*;
pub use submission::*;
pub use user::*;
