use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::services::fare_service::{self, EstimateError, FareConfig};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareEstimateInput {
    /// Absent means "no vehicle selected yet" and yields notApplicable.
    pub vehicle_id: Option<String>,
    pub distance_km: f64,
    pub road_type: String,
    #[serde(default)]
    pub use_ac: bool,
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    1
}

/*
    /api/vehicles
*/
pub async fn get_vehicles() -> impl Responder {
    HttpResponse::Ok().json(fare_service::vehicle_catalog())
}

/*
    /api/fare/estimate
*/
pub async fn estimate(
    input: web::Json<FareEstimateInput>,
    config: web::Data<FareConfig>,
) -> impl Responder {
    let input = input.into_inner();

    let road_type = match fare_service::parse_road_type(&input.road_type) {
        Ok(road_type) => road_type,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    match fare_service::estimate_fare(
        input.vehicle_id.as_deref(),
        input.distance_km,
        road_type,
        input.use_ac,
        input.days,
        &config,
    ) {
        Ok(estimate) => HttpResponse::Ok().json(estimate),
        Err(err @ EstimateError::InvalidInput(_)) => {
            HttpResponse::BadRequest().body(err.to_string())
        }
    }
}
