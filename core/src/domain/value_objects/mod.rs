//! Value objects carried between the API layer and the domain services.

pub mod access_token;
pub mod booking_input;
pub mod new_user;
pub mod property_input;

pub use access_token::AccessToken;
pub use booking_input::BookingInput;
pub use new_user::NewUser;
pub use property_input::PropertyInput;
