//! Booking engine: stay pricing, availability checks and ownership-scoped
//! reservation mutation.

mod service;

pub use service::{quote_stay, BookingService};
