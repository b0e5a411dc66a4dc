use serde::{Deserialize, Serialize};

/// Uniform envelope returned by every suggestion endpoint. The UI only
/// ever sees `{success, data}` or `{success, error}`, never a partially
/// valid payload.
#[derive(Debug, Serialize)]
pub struct ActionResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ActionResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StaySuggestionsRequest {
    pub destination: String,
    pub travelers: u32,
    /// "budget", "moderate" or "luxury".
    pub budget: String,
    pub preferences: String,
    pub current_location: String,
    /// YYYY-MM-DD
    pub trip_start_date: String,
    pub daily_travel_distance: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedStop {
    pub location: String,
    /// YYYY-MM-DD HH:mm; checked during structural validation.
    pub estimated_arrival_time: String,
    pub reason: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StaySuggestionsResponse {
    pub suggested_stops: Vec<SuggestedStop>,
    /// Major cities along the route, ordered origin to destination.
    pub route_cities: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlaceSuggestionsRequest {
    pub season: String,
    pub preference: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedPlace {
    pub name: String,
    pub description: String,
    pub image_hint: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlaceSuggestionsResponse {
    pub suggestions: Vec<SuggestedPlace>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RouteDetailsRequest {
    pub source: String,
    pub destination: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RouteDetailsResponse {
    pub time_taken: String,
    pub weather_report: String,
    pub number_of_tolls: u32,
    pub toll_price: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CurrencyRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyResponse {
    pub converted_amount: f64,
}
