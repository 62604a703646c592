use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::rank_scored;
use crate::models::{AnalyzeRequest, ErrorResponse, Profile, RankRequest, RankResponse};
use crate::routes::AppState;

/// Configure compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/compatibility/analyze", web::post().to(analyze))
        .route("/compatibility/rank", web::post().to(rank));
}

/// Explain compatibility for one swipe card
///
/// POST /api/v1/compatibility/analyze
///
/// Request body:
/// ```json
/// {
///   "subject": { "id": "string", ... },
///   "other": { "id": "string", ... }
/// }
/// ```
async fn analyze(state: web::Data<AppState>, req: web::Json<AnalyzeRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request("Validation failed", errors.to_string()));
    }

    let analysis = state.cache.get_or_analyze(&req.subject, &req.other).await;

    tracing::debug!(
        "Analyzed {} -> {}: score {}, {}%",
        req.subject.id,
        req.other.id,
        analysis.score,
        analysis.percentage
    );

    HttpResponse::Ok().json(analysis)
}

/// Order candidates by descending compatibility
///
/// POST /api/v1/compatibility/rank
async fn rank(state: web::Data<AppState>, req: web::Json<RankRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request("Validation failed", errors.to_string()));
    }

    if let Some(response) = state.reject_oversized(req.candidates.len()) {
        return response;
    }

    let (scores, profiles): (Vec<i32>, Vec<Profile>) = rank_scored(&req.subject, &req.candidates)
        .into_iter()
        .map(|(score, profile)| (score, profile.clone()))
        .unzip();

    tracing::info!("Ranked {} candidates for {}", profiles.len(), req.subject.id);

    HttpResponse::Ok().json(RankResponse { profiles, scores })
}
