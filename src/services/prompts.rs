//! Prompt templates for the suggestion flows. Each template is built
//! from the typed request and names exactly the keys of the typed
//! response, so the wire schema and the instructions the model sees
//! cannot drift apart (see the contract tests).

use crate::models::suggestions::{
    CurrencyRequest, PlaceSuggestionsRequest, RouteDetailsRequest, StaySuggestionsRequest,
    TranslateRequest,
};

/// Preamble shared by every flow; the model must emit bare JSON that
/// deserializes straight into the response type.
pub const JSON_ONLY_PREAMBLE: &str = "You are a travel assistant API. \
    Respond with a single valid JSON object and nothing else: \
    no markdown fences, no commentary outside the JSON.";

pub fn stay_suggestions_prompt(req: &StaySuggestionsRequest) -> String {
    format!(
        "{preamble}\n\n\
         You are a trip planning expert specializing in suggesting optimal overnight stay \
         locations and listing the route.\n\n\
         Given the following trip, do two things:\n\
         1. Suggest one or more locations for overnight stays along the route. Prioritize \
         hidden gems and eco-friendly options if mentioned in the preferences. Consider the \
         traveler's preferences, budget, and group size. Estimate arrival times assuming \
         {distance} miles of travel per day starting from {start_date}.\n\
         2. List the major cities and towns the vehicle will pass through sequentially from \
         the current location to the destination.\n\n\
         Destination: {destination}\n\
         Number of Travelers: {travelers}\n\
         Budget: {budget}\n\
         Lodging Preferences: {preferences}\n\
         Current Location: {current_location}\n\
         Trip Start Date: {start_date}\n\
         Daily Travel Distance: {distance} miles\n\n\
         Respond with a JSON object with a \"suggestedStops\" array and a \"routeCities\" \
         array. Each entry in \"suggestedStops\" must have \"location\", \
         \"estimatedArrivalTime\" (format YYYY-MM-DD HH:mm) and \"reason\". \
         \"routeCities\" must be an array of strings ordered from origin to destination.",
        preamble = JSON_ONLY_PREAMBLE,
        destination = req.destination,
        travelers = req.travelers,
        budget = req.budget,
        preferences = req.preferences,
        current_location = req.current_location,
        start_date = req.trip_start_date,
        distance = req.daily_travel_distance,
    )
}

pub fn place_suggestions_prompt(req: &PlaceSuggestionsRequest) -> String {
    format!(
        "{preamble}\n\n\
         You are a travel expert specializing in Indian destinations. Based on the user's \
         desired season and preference, suggest 4 travel destinations in India. For each, \
         provide the name of the place, a compelling one-paragraph description highlighting \
         why it suits that season and preference, and a simple two-word image hint \
         (e.g. \"Goa beach\").\n\n\
         Season: {season}\n\
         Preference: {preference}\n\n\
         Respond with a JSON object with a \"suggestions\" array; each entry must have \
         \"name\", \"description\" and \"imageHint\".",
        preamble = JSON_ONLY_PREAMBLE,
        season = req.season,
        preference = req.preference,
    )
}

pub fn route_details_prompt(req: &RouteDetailsRequest) -> String {
    format!(
        "{preamble}\n\n\
         You are a route planning assistant. For the journey from {source} to \
         {destination}, provide, based on typical conditions: a realistic travel time \
         estimate, a general weather forecast for the journey, an approximate count of \
         toll booths, and an estimated total cost for tolls in Indian Rupees (using the \
         'Rs.' symbol).\n\n\
         Respond with a JSON object with \"timeTaken\", \"weatherReport\", \
         \"numberOfTolls\" (a number) and \"tollPrice\".",
        preamble = JSON_ONLY_PREAMBLE,
        source = req.source,
        destination = req.destination,
    )
}

pub fn translate_prompt(req: &TranslateRequest) -> String {
    format!(
        "{preamble}\n\n\
         Translate the following text from {source} to {target}.\n\n\
         Text: {text}\n\n\
         Respond with a JSON object with a single \"translatedText\" field.",
        preamble = JSON_ONLY_PREAMBLE,
        source = req.source_language,
        target = req.target_language,
        text = req.text,
    )
}

pub fn currency_prompt(req: &CurrencyRequest) -> String {
    format!(
        "{preamble}\n\n\
         Using current exchange rates, convert {amount} {from} to {to}.\n\n\
         Respond with a JSON object with a single numeric \"convertedAmount\" field.",
        preamble = JSON_ONLY_PREAMBLE,
        amount = req.amount,
        from = req.from,
        to = req.to,
    )
}
