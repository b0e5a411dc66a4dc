use std::sync::Mutex;

use crate::models::booking::Booking;

/// In-memory booking store. Bookings are session-scoped; there is no
/// durable persistence behind this service.
#[derive(Default)]
pub struct BookingStore {
    bookings: Mutex<Vec<Booking>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, booking: Booking) -> Booking {
        let mut bookings = self
            .bookings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        bookings.push(booking.clone());
        booking
    }

    pub fn list(&self) -> Vec<Booking> {
        self.bookings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
