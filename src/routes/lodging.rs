use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::models::lodging::{RoomType, Sharing};
use crate::services::lodging_service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LodgingEstimateInput {
    pub room_type: String,
    pub sharing: String,
    /// Values below 1 are clamped, not rejected.
    #[serde(default = "default_count")]
    pub nights: i64,
    #[serde(default = "default_count")]
    pub rooms: i64,
}

fn default_count() -> i64 {
    1
}

/*
    /api/lodging/rates
*/
pub async fn get_rates() -> impl Responder {
    let row = |room_type: RoomType| {
        json!({
            "2": lodging_service::price_per_night(room_type, Sharing::Double),
            "3": lodging_service::price_per_night(room_type, Sharing::Triple),
            "4": lodging_service::price_per_night(room_type, Sharing::Quad),
        })
    };
    HttpResponse::Ok().json(json!({
        "ac": row(RoomType::Ac),
        "nonAc": row(RoomType::NonAc),
    }))
}

/*
    /api/lodging/estimate
*/
pub async fn estimate(input: web::Json<LodgingEstimateInput>) -> impl Responder {
    let input = input.into_inner();

    let room_type = match lodging_service::parse_room_type(&input.room_type) {
        Ok(room_type) => room_type,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };
    let sharing = match lodging_service::parse_sharing(&input.sharing) {
        Ok(sharing) => sharing,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    // Clamp into u32 range before casting; a bare `as u32` would wrap
    // oversized counts around to small ones.
    let nights = input.nights.clamp(1, u32::MAX as i64) as u32;
    let rooms = input.rooms.clamp(1, u32::MAX as i64) as u32;

    HttpResponse::Ok().json(lodging_service::estimate_lodging(
        room_type, sharing, nights, rooms,
    ))
}
