// Route exports
pub mod compatibility;
pub mod matches;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};

use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::models::ErrorResponse;
use crate::services::AnalysisCache;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub cache: AnalysisCache,
    pub settings: MatchingSettings,
}

impl AppState {
    pub fn new(settings: MatchingSettings, cache: AnalysisCache) -> Self {
        Self {
            matcher: Matcher::new(settings.suggestion_limit),
            cache,
            settings,
        }
    }

    /// 400 response when a request carries more profiles than allowed
    pub(crate) fn reject_oversized(&self, count: usize) -> Option<HttpResponse> {
        if count <= self.settings.max_candidates {
            return None;
        }

        tracing::info!("Rejected request with {} profiles (max {})", count, self.settings.max_candidates);
        Some(HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Too many candidates",
            format!("At most {} profiles per request", self.settings.max_candidates),
        )))
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(compatibility::configure)
            .configure(matches::configure),
    );
}

/// JSON error response for malformed payloads
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// JSON extractor settings shared by the server and tests
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error));
}
