pub mod bookings;
pub mod fare;
pub mod health;
pub mod lodging;
pub mod suggestions;
