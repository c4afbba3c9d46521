use crate::services::auth_service::Claims;
use crate::services::resume_service::{self, ResumeAnalysis};
use crate::utils::multipart::read_resume_upload;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};

/// POST /api/v1/resume/analyze - Grade an uploaded resume against a job role
#[utoipa::path(
    post,
    path = "/api/v1/resume/analyze",
    tag = "Resume",
    responses(
        (status = 200, description = "Strengths and weaknesses", body = ResumeAnalysis),
        (status = 400, description = "Missing resume file or job role"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn analyze(user: web::ReqData<Claims>, payload: Multipart) -> impl Responder {
    let user_id = &user.sub;
    log::info!("POST /resume/analyze - user: {}", user_id);

    let upload = match read_resume_upload(payload).await {
        Ok(upload) => upload,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e
            }));
        }
    };

    let (pdf_bytes, job_role) = match (upload.resume, upload.job_role) {
        (Some(bytes), Some(role)) if !bytes.is_empty() && !role.is_empty() => (bytes, role),
        _ => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "A resume file and job role are required."
            }));
        }
    };

    match resume_service::analyze_resume(&pdf_bytes, &job_role).await {
        Ok(analysis) => HttpResponse::Ok().json(analysis),
        Err(e) => {
            log::error!("Resume analysis failed for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error during resume analysis"
            }))
        }
    }
}
