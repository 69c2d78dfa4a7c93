//! Registration, login and bearer-subject resolution.

mod service;

pub use service::AuthService;
