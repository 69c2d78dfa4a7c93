//! Authentication route handlers
//!
//! - Registration and login with email/password
//! - Stateless logout
//! - Profile aggregation for the authenticated user

pub mod login;
pub mod logout;
pub mod profile;
pub mod registration;
