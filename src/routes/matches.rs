use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    AdminRecommendation, CreateMatchRequest, CreateMatchResponse, ErrorResponse, FeedRequest, FeedResponse,
    HealthResponse, SuggestionsRequest, SuggestionsResponse,
};
use crate::routes::AppState;

/// Configure discovery, matchmaking and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/discover/feed", web::post().to(discover_feed))
        .route("/admin/suggestions", web::post().to(admin_suggestions))
        .route("/admin/recommendations/validate", web::post().to(validate_recommendation))
        .route("/matches/create", web::post().to(create_match));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Build the swipe stack for a viewer
///
/// POST /api/v1/discover/feed
///
/// Request body:
/// ```json
/// {
///   "viewer": { "id": "string", ... },
///   "candidates": [ { "id": "string", ... } ],
///   "recommendations": [ { "targetUserId": "string", "recommendedUserId": "string", "type": "soulmate" } ],
///   "ignoredIds": ["string"],
///   "limit": 50
/// }
/// ```
async fn discover_feed(state: web::Data<AppState>, req: web::Json<FeedRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for feed request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request("Validation failed", errors.to_string()));
    }

    if let Some(response) = state.reject_oversized(req.candidates.len()) {
        return response;
    }

    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.settings.default_feed_limit);

    let feed = state
        .matcher
        .build_feed(&req.viewer, &req.candidates, &req.recommendations, &req.ignored_ids, limit);

    tracing::info!(
        "Returning {} feed entries for user {} (from {} candidates)",
        feed.entries.len(),
        req.viewer.id,
        feed.total_candidates
    );

    HttpResponse::Ok().json(FeedResponse {
        entries: feed.entries,
        total_candidates: feed.total_candidates,
    })
}

/// Suggest the best candidates for a target user
///
/// POST /api/v1/admin/suggestions
async fn admin_suggestions(state: web::Data<AppState>, req: web::Json<SuggestionsRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request("Validation failed", errors.to_string()));
    }

    if let Some(response) = state.reject_oversized(req.users.len()) {
        return response;
    }

    let suggestions = state
        .matcher
        .suggest(&req.target, &req.users, req.limit.map(usize::from));

    tracing::info!("Suggested {} candidates for {}", suggestions.len(), req.target.id);

    HttpResponse::Ok().json(SuggestionsResponse { suggestions })
}

/// Check a recommendation before the admin tool stores it
///
/// POST /api/v1/admin/recommendations/validate
async fn validate_recommendation(
    state: web::Data<AppState>,
    req: web::Json<AdminRecommendation>,
) -> impl Responder {
    match state.matcher.validate_recommendation(&req) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "valid": true })),
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse::bad_request("Invalid recommendation", e.to_string())),
    }
}

/// Decide whether a right swipe creates a match
///
/// POST /api/v1/matches/create
///
/// Request body:
/// ```json
/// {
///   "subject": { "id": "string", ... },
///   "other": { "id": "string", ... },
///   "otherLiked": true,
///   "recommendations": []
/// }
/// ```
async fn create_match(state: web::Data<AppState>, req: web::Json<CreateMatchRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request("Validation failed", errors.to_string()));
    }

    match state
        .matcher
        .create_match(&req.subject, &req.other, req.other_liked, &req.recommendations)
    {
        Ok(Some(outcome)) => HttpResponse::Ok().json(CreateMatchResponse {
            matched: true,
            instant: outcome.instant,
            record: Some(outcome.record),
            analysis: Some(outcome.analysis),
        }),
        Ok(None) => HttpResponse::Ok().json(CreateMatchResponse {
            matched: false,
            instant: false,
            record: None,
            analysis: None,
        }),
        Err(e) => {
            tracing::warn!("Rejected match request: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse::bad_request("Invalid match", e.to_string()))
        }
    }
}
