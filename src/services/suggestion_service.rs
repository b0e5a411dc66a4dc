use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fmt;

use crate::models::suggestions::{
    CurrencyRequest, CurrencyResponse, PlaceSuggestionsRequest, PlaceSuggestionsResponse,
    RouteDetailsRequest, RouteDetailsResponse, StaySuggestionsRequest, StaySuggestionsResponse,
    TranslateRequest, TranslateResponse,
};
use crate::services::prompts;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const ARRIVAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug)]
pub enum SuggestionError {
    EnvironmentError(String),
    HttpError(reqwest::Error),
    ResponseError(String),
}

impl fmt::Display for SuggestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            SuggestionError::HttpError(err) => write!(f, "HTTP error: {}", err),
            SuggestionError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for SuggestionError {}

impl From<reqwest::Error> for SuggestionError {
    fn from(err: reqwest::Error) -> Self {
        SuggestionError::HttpError(err)
    }
}

/// Deserialize the model's JSON text into the typed response. A payload
/// that fails here is discarded wholesale; nothing is patched up or
/// partially forwarded.
pub fn parse_payload<T: DeserializeOwned>(text: &str) -> Result<T, SuggestionError> {
    serde_json::from_str(text).map_err(|e| {
        SuggestionError::ResponseError(format!("model returned a malformed payload: {}", e))
    })
}

/// Flow-specific structural checks for stay suggestions: at least one
/// stop, and every arrival time in YYYY-MM-DD HH:mm.
pub fn validate_stay_response(response: &StaySuggestionsResponse) -> Result<(), SuggestionError> {
    if response.suggested_stops.is_empty() {
        return Err(SuggestionError::ResponseError(
            "model returned no suggested stops".to_string(),
        ));
    }
    for stop in &response.suggested_stops {
        if chrono::NaiveDateTime::parse_from_str(&stop.estimated_arrival_time, ARRIVAL_TIME_FORMAT)
            .is_err()
        {
            return Err(SuggestionError::ResponseError(format!(
                "unparseable arrival time '{}'",
                stop.estimated_arrival_time
            )));
        }
    }
    Ok(())
}

/// Client for the language-model collaborator. One prompt in, one
/// structurally validated response out; no retries, no caching.
#[derive(Clone)]
pub struct SuggestionService {
    client: Client,
    api_key: String,
    model: String,
}

impl SuggestionService {
    pub fn new() -> Result<Self, SuggestionError> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            SuggestionError::EnvironmentError("GEMINI_API_KEY not set".to_string())
        })?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            client: Client::new(),
            api_key,
            model,
        })
    }

    pub async fn stay_suggestions(
        &self,
        request: &StaySuggestionsRequest,
    ) -> Result<StaySuggestionsResponse, SuggestionError> {
        let response: StaySuggestionsResponse = self
            .generate(prompts::stay_suggestions_prompt(request))
            .await?;
        validate_stay_response(&response)?;
        Ok(response)
    }

    pub async fn suggest_places(
        &self,
        request: &PlaceSuggestionsRequest,
    ) -> Result<PlaceSuggestionsResponse, SuggestionError> {
        self.generate(prompts::place_suggestions_prompt(request))
            .await
    }

    pub async fn route_details(
        &self,
        request: &RouteDetailsRequest,
    ) -> Result<RouteDetailsResponse, SuggestionError> {
        self.generate(prompts::route_details_prompt(request)).await
    }

    pub async fn translate(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslateResponse, SuggestionError> {
        self.generate(prompts::translate_prompt(request)).await
    }

    pub async fn convert_currency(
        &self,
        request: &CurrencyRequest,
    ) -> Result<CurrencyResponse, SuggestionError> {
        self.generate(prompts::currency_prompt(request)).await
    }

    /// Single round-trip to the model: send the prompt, pull the first
    /// candidate's text, deserialize into the flow's response type.
    async fn generate<T: DeserializeOwned>(&self, prompt: String) -> Result<T, SuggestionError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SuggestionError::ResponseError(format!(
                "model request failed with status {}: {}",
                status, error_text
            )));
        }

        let content: GenerateContentResponse = response.json().await.map_err(|e| {
            SuggestionError::ResponseError(format!("failed to parse model response: {}", e))
        })?;

        let text = content
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                SuggestionError::ResponseError("model returned no candidates".to_string())
            })?;

        parse_payload(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_missing_required_field_is_rejected() {
        // No suggestedStops at all: the payload must be discarded, not
        // forwarded as partial data.
        let result =
            parse_payload::<StaySuggestionsResponse>(r#"{"routeCities": ["Hubli", "Goa"]}"#);
        assert!(matches!(result, Err(SuggestionError::ResponseError(_))));
    }

    #[test]
    fn test_wrong_primitive_type_is_rejected() {
        let result = parse_payload::<RouteDetailsResponse>(
            r#"{"timeTaken": "8h", "weatherReport": "Clear", "numberOfTolls": "three", "tollPrice": "Rs.450"}"#,
        );
        assert!(matches!(result, Err(SuggestionError::ResponseError(_))));
    }

    #[test]
    fn test_conformant_stay_payload_passes() {
        let payload = r#"{
            "suggestedStops": [
                {
                    "location": "Hubli",
                    "estimatedArrivalTime": "2025-01-10 18:30",
                    "reason": "Roughly a day's drive from the start."
                }
            ],
            "routeCities": ["Bengaluru", "Hubli", "Goa"]
        }"#;
        let response: StaySuggestionsResponse = parse_payload(payload).unwrap();
        assert!(validate_stay_response(&response).is_ok());
        assert_eq!(response.route_cities.len(), 3);
    }

    #[test]
    fn test_unparseable_arrival_time_is_rejected() {
        let payload = r#"{
            "suggestedStops": [
                {
                    "location": "Hubli",
                    "estimatedArrivalTime": "tomorrow evening",
                    "reason": "Halfway point."
                }
            ],
            "routeCities": ["Bengaluru", "Goa"]
        }"#;
        let response: StaySuggestionsResponse = parse_payload(payload).unwrap();
        assert!(validate_stay_response(&response).is_err());
    }

    #[test]
    fn test_empty_stops_are_rejected() {
        let response: StaySuggestionsResponse =
            parse_payload(r#"{"suggestedStops": [], "routeCities": []}"#).unwrap();
        assert!(validate_stay_response(&response).is_err());
    }

    #[test]
    #[serial]
    fn test_new_requires_api_key() {
        let saved = env::var("GEMINI_API_KEY").ok();
        env::remove_var("GEMINI_API_KEY");
        assert!(matches!(
            SuggestionService::new(),
            Err(SuggestionError::EnvironmentError(_))
        ));
        if let Some(key) = saved {
            env::set_var("GEMINI_API_KEY", key);
        }
    }

    #[test]
    #[serial]
    fn test_new_reads_configured_model() {
        env::set_var("GEMINI_API_KEY", "test-key");
        env::remove_var("GEMINI_MODEL");
        let service = SuggestionService::new().unwrap();
        assert_eq!(service.model, DEFAULT_MODEL);
        env::remove_var("GEMINI_API_KEY");
    }
}
