use crate::database::MongoDB;
use crate::models::ProjectResponse;
use crate::services::auth_service::Claims;
use crate::services::{github_service, resume_service};
use crate::utils::multipart::read_resume_upload;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct GithubImportRequest {
    pub url: String,
}

/// POST /api/v1/import/github - Import a repository as a project
#[utoipa::path(
    post,
    path = "/api/v1/import/github",
    tag = "Import",
    request_body = GithubImportRequest,
    responses(
        (status = 200, description = "Project imported", body = ProjectResponse),
        (status = 400, description = "Missing or malformed GitHub URL"),
        (status = 404, description = "Repository not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn import_github(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    request: web::Json<GithubImportRequest>,
) -> impl Responder {
    let user_id = &user.sub;
    log::info!("POST /import/github - user: {}", user_id);

    let url = request.url.trim();
    if url.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "GitHub URL is required"
        }));
    }

    match github_service::import_repository(&db, user_id, url).await {
        Ok(project) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "project": project
        })),
        Err(e) if e == "Invalid GitHub URL format" => {
            HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
        Err(e) if e.starts_with("Repository not found") => {
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
        Err(e) => {
            log::error!("GitHub import failed for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error while fetching from GitHub"
            }))
        }
    }
}

/// POST /api/v1/import/resume - Extract the Projects section of a resume PDF
#[utoipa::path(
    post,
    path = "/api/v1/import/resume",
    tag = "Import",
    responses(
        (status = 200, description = "Projects imported", body = [ProjectResponse]),
        (status = 400, description = "Missing file or no Projects section found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn import_resume(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    payload: Multipart,
) -> impl Responder {
    let user_id = &user.sub;
    log::info!("POST /import/resume - user: {}", user_id);

    let upload = match read_resume_upload(payload).await {
        Ok(upload) => upload,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e
            }));
        }
    };

    let pdf_bytes = match upload.resume {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Resume file is required"
            }));
        }
    };

    match resume_service::import_resume_projects(&db, user_id, &pdf_bytes).await {
        Ok(projects) if projects.is_empty() => {
            HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Could not find a \"Projects\" section in the resume."
            }))
        }
        Ok(projects) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "projects": projects,
            "total": projects.len()
        })),
        Err(e) => {
            log::error!("Resume import failed for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error during resume processing"
            }))
        }
    }
}
