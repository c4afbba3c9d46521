use crate::database::MongoDB;
use crate::models::{CreateProjectRequest, ProjectResponse};
use crate::services::auth_service::Claims;
use crate::services::{is_internal_error, project_service};
use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::oid::ObjectId;

/// GET /api/v1/projects - Only the requesting user's projects, newest first
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "Projects",
    responses(
        (status = 200, description = "The user's projects", body = [ProjectResponse]),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_projects(user: web::ReqData<Claims>, db: web::Data<MongoDB>) -> impl Responder {
    let user_id = &user.sub;

    match project_service::list_projects(&db, user_id).await {
        Ok(projects) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "projects": projects,
            "total": projects.len()
        })),
        Err(e) => {
            log::error!("Failed to list projects for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error"
            }))
        }
    }
}

/// POST /api/v1/projects - Add a project manually
#[utoipa::path(
    post,
    path = "/api/v1/projects",
    tag = "Projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project added", body = ProjectResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_project(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    request: web::Json<CreateProjectRequest>,
) -> impl Responder {
    let user_id = &user.sub;
    log::info!("POST /projects - user: {}", user_id);

    match project_service::create_project(&db, user_id, request.into_inner()).await {
        Ok(project) => HttpResponse::Created().json(serde_json::json!({
            "success": true,
            "project": project
        })),
        Err(e) if is_internal_error(&e) => {
            log::error!("Project creation failed for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error"
            }))
        }
        Err(e) => {
            log::warn!("Project creation rejected for {}: {}", user_id, e);
            HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

/// DELETE /api/v1/projects/{id} - Owner-scoped delete
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{id}",
    tag = "Projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project deleted"),
        (status = 400, description = "Malformed project id"),
        (status = 404, description = "Project not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_project(
    user: web::ReqData<Claims>,
    path: web::Path<String>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let user_id = &user.sub;
    let project_id = path.into_inner();

    let object_id = match ObjectId::parse_str(&project_id) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Invalid project ID"
            }));
        }
    };

    match project_service::delete_project(&db, user_id, &object_id).await {
        Ok(true) => {
            log::info!("Project {} deleted by user {}", project_id, user_id);
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "msg": "Project deleted."
            }))
        }
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "error": "Project not found"
        })),
        Err(e) => {
            log::error!("Failed to delete project {}: {}", project_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error"
            }))
        }
    }
}
