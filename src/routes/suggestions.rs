use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::Serialize;

use crate::models::suggestions::{
    ActionResult, CurrencyRequest, CurrencyResponse, PlaceSuggestionsRequest,
    PlaceSuggestionsResponse, RouteDetailsRequest, RouteDetailsResponse, StaySuggestionsRequest,
    StaySuggestionsResponse, TranslateRequest, TranslateResponse,
};
use crate::services::suggestion_service::{SuggestionError, SuggestionService};

/// Map a collaborator failure onto the uniform action envelope. The
/// model is never retried here; the caller decides whether to ask again.
fn failure<T: Serialize>(flow: &str, err: SuggestionError) -> HttpResponse {
    error!("{} flow failed: {}", flow, err);
    let body = ActionResult::<T>::err(format!("Could not complete the {} request: {}", flow, err));
    match err {
        SuggestionError::EnvironmentError(_) => HttpResponse::InternalServerError().json(body),
        SuggestionError::HttpError(_) | SuggestionError::ResponseError(_) => {
            HttpResponse::BadGateway().json(body)
        }
    }
}

/*
    /api/suggestions/stays
*/
pub async fn stays(input: web::Json<StaySuggestionsRequest>) -> impl Responder {
    let service = match SuggestionService::new() {
        Ok(service) => service,
        Err(err) => return failure::<StaySuggestionsResponse>("stay-suggestions", err),
    };
    match service.stay_suggestions(&input.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(ActionResult::ok(data)),
        Err(err) => failure::<StaySuggestionsResponse>("stay-suggestions", err),
    }
}

/*
    /api/suggestions/places
*/
pub async fn places(input: web::Json<PlaceSuggestionsRequest>) -> impl Responder {
    let service = match SuggestionService::new() {
        Ok(service) => service,
        Err(err) => return failure::<PlaceSuggestionsResponse>("place-suggestions", err),
    };
    match service.suggest_places(&input.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(ActionResult::ok(data)),
        Err(err) => failure::<PlaceSuggestionsResponse>("place-suggestions", err),
    }
}

/*
    /api/suggestions/route-details
*/
pub async fn route_details(input: web::Json<RouteDetailsRequest>) -> impl Responder {
    let service = match SuggestionService::new() {
        Ok(service) => service,
        Err(err) => return failure::<RouteDetailsResponse>("route-details", err),
    };
    match service.route_details(&input.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(ActionResult::ok(data)),
        Err(err) => failure::<RouteDetailsResponse>("route-details", err),
    }
}

/*
    /api/suggestions/translate
*/
pub async fn translate(input: web::Json<TranslateRequest>) -> impl Responder {
    let service = match SuggestionService::new() {
        Ok(service) => service,
        Err(err) => return failure::<TranslateResponse>("translate", err),
    };
    match service.translate(&input.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(ActionResult::ok(data)),
        Err(err) => failure::<TranslateResponse>("translate", err),
    }
}

/*
    /api/suggestions/currency
*/
pub async fn currency(input: web::Json<CurrencyRequest>) -> impl Responder {
    let service = match SuggestionService::new() {
        Ok(service) => service,
        Err(err) => return failure::<CurrencyResponse>("currency-conversion", err),
    };
    match service.convert_currency(&input.into_inner()).await {
        Ok(data) => HttpResponse::Ok().json(ActionResult::ok(data)),
        Err(err) => failure::<CurrencyResponse>("currency-conversion", err),
    }
}
