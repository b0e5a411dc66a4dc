pub mod booking;
pub mod lodging;
pub mod suggestions;
pub mod vehicle;
