use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    #[serde(rename = "ac")]
    Ac,
    #[serde(rename = "nonAc")]
    NonAc,
}

impl RoomType {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ac" => Some(RoomType::Ac),
            "nonAc" => Some(RoomType::NonAc),
            _ => None,
        }
    }
}

/// Occupants per room. The price table is keyed by (room type, sharing),
/// so this is a closed set rather than a free-form count.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Sharing {
    #[serde(rename = "2")]
    Double,
    #[serde(rename = "3")]
    Triple,
    #[serde(rename = "4")]
    Quad,
}

impl Sharing {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "2" => Some(Sharing::Double),
            "3" => Some(Sharing::Triple),
            "4" => Some(Sharing::Quad),
            _ => None,
        }
    }

    pub fn occupants(&self) -> u32 {
        match self {
            Sharing::Double => 2,
            Sharing::Triple => 3,
            Sharing::Quad => 4,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LodgingQuote {
    pub room_type: RoomType,
    pub sharing: Sharing,
    pub price_per_night: f64,
    pub nights: u32,
    pub rooms: u32,
    pub total: f64,
}
