use std::error::Error;
use std::fmt;

use crate::models::vehicle::{
    FareEstimate, FareQuote, PricingTable, RoadType, TierRates, Vehicle, VehicleClass,
};

#[derive(Debug, PartialEq)]
pub enum EstimateError {
    InvalidInput(String),
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl Error for EstimateError {}

/// Whether the driver fee is charged once per booking or once per day.
/// Flat is the default; per-day is selectable for operators that hire
/// the driver by the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeScaling {
    Flat,
    PerDay,
}

#[derive(Debug, Clone, Copy)]
pub struct FareConfig {
    pub fee_scaling: FeeScaling,
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            fee_scaling: FeeScaling::Flat,
        }
    }
}

/// Sample rate card. Rates are currency units per kilometre; the driver
/// fee is a flat surcharge per booking (or per day, see FeeScaling).
pub fn vehicle_catalog() -> Vec<Vehicle> {
    fn two_wheeler(id: &str, name: &str, pricing: PricingTable) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            name: name.to_string(),
            class: VehicleClass::TwoWheeler(pricing),
        }
    }
    fn four_wheeler(id: &str, name: &str, pricing: PricingTable) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            name: name.to_string(),
            class: VehicleClass::FourWheeler(pricing),
        }
    }
    fn table(non_ac: (f64, f64), ac: Option<(f64, f64)>, driver_fee: f64) -> PricingTable {
        PricingTable {
            non_ac: TierRates {
                highway: non_ac.0,
                ghat: non_ac.1,
            },
            ac: ac.map(|(highway, ghat)| TierRates { highway, ghat }),
            driver_fee,
        }
    }

    vec![
        two_wheeler("bike", "Bike", table((7.0, 7.0), None, 300.0)),
        two_wheeler("scooty", "Scooty", table((7.0, 7.0), None, 300.0)),
        four_wheeler("swift", "Swift", table((10.0, 11.0), Some((12.0, 13.0)), 500.0)),
        four_wheeler("etios", "Etios", table((10.0, 10.5), Some((12.0, 12.5)), 500.0)),
        four_wheeler("eeco", "Eeco", table((10.0, 10.5), Some((12.0, 12.5)), 500.0)),
        four_wheeler("ertiga", "Ertiga", table((15.0, 16.0), Some((17.0, 18.0)), 500.0)),
        four_wheeler("innova", "Innova", table((15.0, 16.0), Some((17.0, 18.0)), 500.0)),
        four_wheeler("mini-bus", "Mini Bus", table((22.0, 24.0), Some((25.0, 27.0)), 800.0)),
        four_wheeler(
            "18-seater",
            "18-Seater Bus",
            table((22.0, 24.0), Some((25.0, 27.0)), 800.0),
        ),
        four_wheeler(
            "33-seater",
            "33-Seater Bus",
            table((32.0, 35.0), Some((36.0, 39.0)), 800.0),
        ),
        Vehicle {
            id: "flight".to_string(),
            name: "Flight".to_string(),
            class: VehicleClass::Flight,
        },
    ]
}

pub fn find_vehicle(vehicle_id: &str) -> Option<Vehicle> {
    vehicle_catalog().into_iter().find(|v| v.id == vehicle_id)
}

/// Parse a wire road-type key. The set is closed; anything outside
/// {highway, ghat} is a caller contract violation.
pub fn parse_road_type(key: &str) -> Result<RoadType, EstimateError> {
    RoadType::from_key(key)
        .ok_or_else(|| EstimateError::InvalidInput(format!("unsupported road type '{}'", key)))
}

/// Compute a fare estimate. Pure: the result is a function of the
/// arguments and the fixed rate card only.
///
/// `None` for the vehicle, or a flight, yields `NotApplicable` rather
/// than an error; an unknown id, a negative distance or a day count
/// below 1 is rejected as `InvalidInput`.
pub fn estimate_fare(
    vehicle_id: Option<&str>,
    distance_km: f64,
    road_type: RoadType,
    use_ac: bool,
    days: u32,
    config: &FareConfig,
) -> Result<FareEstimate, EstimateError> {
    let vehicle_id = match vehicle_id {
        Some(id) => id,
        None => return Ok(FareEstimate::NotApplicable),
    };

    let vehicle = find_vehicle(vehicle_id).ok_or_else(|| {
        EstimateError::InvalidInput(format!("unknown vehicle '{}'", vehicle_id))
    })?;

    // A fare-less vehicle short-circuits before input validation: the
    // outcome is NotApplicable whatever the other inputs say.
    let pricing = match vehicle.class.pricing() {
        Some(pricing) => pricing,
        None => return Ok(FareEstimate::NotApplicable),
    };

    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(EstimateError::InvalidInput(format!(
            "distance must be non-negative, got {}",
            distance_km
        )));
    }
    if days < 1 {
        return Err(EstimateError::InvalidInput(
            "day count must be at least 1".to_string(),
        ));
    }

    let tier = match (use_ac, pricing.ac.as_ref()) {
        (true, Some(ac)) => ac,
        _ => &pricing.non_ac,
    };
    let rate = tier.rate_for(road_type);

    let fee_multiplier = match config.fee_scaling {
        FeeScaling::Flat => 1.0,
        FeeScaling::PerDay => days as f64,
    };
    let total = distance_km * rate + pricing.driver_fee * fee_multiplier;

    Ok(FareEstimate::Quote(FareQuote {
        vehicle_id: vehicle.id,
        distance_km,
        road_type,
        use_ac,
        days,
        rate_per_km: rate,
        driver_fee: pricing.driver_fee,
        total,
    }))
}
