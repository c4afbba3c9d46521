use crate::database::MongoDB;
use crate::services::auth_service::Claims;
use crate::services::is_internal_error;
use crate::services::user_service::{self, ChangePasswordRequest, ProfileResponse};
use actix_web::{web, HttpResponse, Responder};

/// GET /api/v1/users/me - Profile, projects, and all analyses in one payload
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "Current user's profile", body = ProfileResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_me(user: web::ReqData<Claims>, db: web::Data<MongoDB>) -> impl Responder {
    let user_id = &user.sub;

    match user_service::get_profile(&db, user_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => {
            log::error!("Failed to load profile for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error"
            }))
        }
    }
}

/// POST /api/v1/users/change-password
#[utoipa::path(
    post,
    path = "/api/v1/users/change-password",
    tag = "Users",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password updated"),
        (status = 400, description = "Validation failed or wrong current password"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn change_password(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    request: web::Json<ChangePasswordRequest>,
) -> impl Responder {
    let user_id = &user.sub;
    log::info!("POST /users/change-password - user: {}", user_id);

    match user_service::change_password(&db, user_id, &request).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "msg": "Password updated successfully"
        })),
        Err(e) if is_internal_error(&e) => {
            log::error!("Password change failed for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error"
            }))
        }
        Err(e) => {
            log::warn!("Password change rejected for {}: {}", user_id, e);
            HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}
