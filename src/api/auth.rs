use crate::services::auth_service::{self, AuthResponse, LoginRequest, RegisterRequest};
use crate::services::is_internal_error;
use crate::{database::MongoDB, middleware::auth::extract_request_token};
use actix_web::{web, HttpRequest, HttpResponse};

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful", body = AuthResponse),
        (status = 400, description = "Invalid request or user already exists"),
        (status = 500, description = "Server error")
    )
)]
pub async fn register(
    db: web::Data<MongoDB>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    log::info!("POST /auth/register - email: {}", request.email);

    match auth_service::register(&db, &request).await {
        Ok(response) => {
            log::info!("Registration successful: {}", request.email);
            HttpResponse::Created().json(response)
        }
        Err(e) if is_internal_error(&e) => {
            log::error!("Registration failed: {} - {}", request.email, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error"
            }))
        }
        Err(e) => {
            log::warn!("Registration rejected: {} - {}", request.email, e);
            HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Server error")
    )
)]
pub async fn login(db: web::Data<MongoDB>, request: web::Json<LoginRequest>) -> HttpResponse {
    log::info!("POST /auth/login - email: {}", request.email);

    match auth_service::login(&db, &request).await {
        Ok(response) => {
            log::info!("Login successful: {}", request.email);
            HttpResponse::Ok().json(response)
        }
        Err(e) if is_internal_error(&e) => {
            log::error!("Login failed: {} - {}", request.email, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error"
            }))
        }
        Err(e) => {
            log::warn!("Login rejected: {} - {}", request.email, e);
            HttpResponse::Unauthorized().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/verify",
    tag = "Auth",
    responses(
        (status = 200, description = "Token is valid"),
        (status = 401, description = "Invalid or expired token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn verify_token(req: HttpRequest) -> HttpResponse {
    log::info!("GET /auth/verify");

    let token = match extract_request_token(&req) {
        Some(token) => token,
        None => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "No token provided"
            }));
        }
    };

    match auth_service::verify_token(&token) {
        Ok(claims) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "valid": true,
            "user_id": claims.sub,
            "email": claims.email,
            "exp": claims.exp
        })),
        Err(e) => {
            log::warn!("Invalid token: {}", e);
            HttpResponse::Unauthorized().json(serde_json::json!({
                "success": false,
                "valid": false,
                "error": e
            }))
        }
    }
}
