pub mod fare_service;
pub mod lodging_service;
pub mod prompts;
pub mod suggestion_service;
