use serde::{Deserialize, Serialize};

/// Road pricing tier. Closed set; anything else is a caller error.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum RoadType {
    #[serde(rename = "highway")]
    Highway,
    #[serde(rename = "ghat")]
    Ghat,
}

impl RoadType {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "highway" => Some(RoadType::Highway),
            "ghat" => Some(RoadType::Ghat),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            RoadType::Highway => "highway",
            RoadType::Ghat => "ghat",
        }
    }
}

/// Per-kilometre rates for one AC tier.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct TierRates {
    pub highway: f64,
    pub ghat: f64,
}

impl TierRates {
    pub fn rate_for(&self, road_type: RoadType) -> f64 {
        match road_type {
            RoadType::Highway => self.highway,
            RoadType::Ghat => self.ghat,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct PricingTable {
    pub non_ac: TierRates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac: Option<TierRates>,
    pub driver_fee: f64,
}

/// Vehicle category with its pricing contract. Presentation details
/// (icons, display ordering) belong to the UI, not to this model.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "category", content = "pricing")]
pub enum VehicleClass {
    #[serde(rename = "two-wheeler")]
    TwoWheeler(PricingTable),
    #[serde(rename = "four-wheeler")]
    FourWheeler(PricingTable),
    #[serde(rename = "flight")]
    Flight,
}

impl VehicleClass {
    /// Flights have no table-driven pricing; everything else does.
    pub fn pricing(&self) -> Option<&PricingTable> {
        match self {
            VehicleClass::TwoWheeler(pricing) | VehicleClass::FourWheeler(pricing) => {
                Some(pricing)
            }
            VehicleClass::Flight => None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub class: VehicleClass,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FareQuote {
    pub vehicle_id: String,
    pub distance_km: f64,
    pub road_type: RoadType,
    pub use_ac: bool,
    pub days: u32,
    pub rate_per_km: f64,
    pub driver_fee: f64,
    pub total: f64,
}

/// Outcome of a fare estimate. `NotApplicable` is a valid fare-less
/// state (flight, or no vehicle chosen), not an error; callers must
/// branch on it before formatting a currency amount.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FareEstimate {
    Quote(FareQuote),
    NotApplicable,
}
