use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::lodging::{RoomType, Sharing};
use crate::models::vehicle::RoadType;

/// What was booked. Tagged so the UI can render vehicle and lodge
/// bookings in the same list.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BookingDetails {
    #[serde(rename_all = "camelCase")]
    Vehicle {
        vehicle_id: String,
        vehicle_name: String,
        distance_km: f64,
        road_type: RoadType,
        use_ac: bool,
        total_fare: f64,
    },
    #[serde(rename_all = "camelCase")]
    Lodge {
        room_type: RoomType,
        sharing: Sharing,
        nights: u32,
        rooms: u32,
        total_cost: f64,
    },
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    pub passenger_name: String,
    pub mobile_number: String,
    #[serde(flatten)]
    pub details: BookingDetails,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub passenger_name: String,
    pub mobile_number: String,
    #[serde(flatten)]
    pub details: BookingDetails,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_input(input: BookingInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            passenger_name: input.passenger_name,
            mobile_number: input.mobile_number,
            details: input.details,
            created_at: Utc::now(),
        }
    }
}
