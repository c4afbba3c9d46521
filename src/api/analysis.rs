use crate::database::MongoDB;
use crate::models::AnalysisResponse;
use crate::services::analysis_service;
use crate::services::auth_service::Claims;
use actix_web::{web, HttpResponse, Responder};

/// POST /api/v1/analysis - Run the career scorer over the user's projects and
/// persist the result with a snapshot of the projects considered
#[utoipa::path(
    post,
    path = "/api/v1/analysis",
    tag = "Analysis",
    responses(
        (status = 201, description = "Analysis saved", body = AnalysisResponse),
        (status = 400, description = "Not enough projects"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn run_analysis(user: web::ReqData<Claims>, db: web::Data<MongoDB>) -> impl Responder {
    let user_id = &user.sub;
    log::info!("POST /analysis - user: {}", user_id);

    match analysis_service::run_analysis(&db, user_id).await {
        Ok(analysis) => HttpResponse::Created().json(serde_json::json!({
            "success": true,
            "analysis": analysis
        })),
        Err(e) if e.starts_with("Add at least") => {
            HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
        Err(e) => {
            log::error!("Analysis failed for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error"
            }))
        }
    }
}

/// GET /api/v1/analysis - Analysis history, newest first
#[utoipa::path(
    get,
    path = "/api/v1/analysis",
    tag = "Analysis",
    responses(
        (status = 200, description = "The user's analyses", body = [AnalysisResponse]),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_analyses(user: web::ReqData<Claims>, db: web::Data<MongoDB>) -> impl Responder {
    let user_id = &user.sub;

    match analysis_service::list_analyses(&db, user_id).await {
        Ok(analyses) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "analyses": analyses,
            "total": analyses.len()
        })),
        Err(e) => {
            log::error!("Failed to list analyses for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error"
            }))
        }
    }
}
