mod api;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5001".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("Starting Career Service...");

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("MongoDB connected successfully");

    let allowed_origin =
        env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

    log::info!("Server starting on {}:{}", host, port);
    log::info!("Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .allowed_header("x-auth-token")
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Metrics
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Auth endpoints (public)
            .service(
                web::scope("/api/v1/auth")
                    .route("/register", web::post().to(api::auth::register))
                    .route("/login", web::post().to(api::auth::login))
                    .route("/verify", web::get().to(api::auth::verify_token)),
            )
            // User profile
            .service(
                web::scope("/api/v1/users")
                    .wrap(middleware::auth::AuthMiddleware)
                    .route("/me", web::get().to(api::users::get_me))
                    .route(
                        "/change-password",
                        web::post().to(api::users::change_password),
                    ),
            )
            // Projects CRUD
            .service(
                web::scope("/api/v1/projects")
                    .wrap(middleware::auth::AuthMiddleware)
                    .route("", web::get().to(api::projects::get_projects))
                    .route("", web::post().to(api::projects::create_project))
                    .route("/{id}", web::delete().to(api::projects::delete_project)),
            )
            // Career analysis
            .service(
                web::scope("/api/v1/analysis")
                    .wrap(middleware::auth::AuthMiddleware)
                    .route("", web::post().to(api::analysis::run_analysis))
                    .route("", web::get().to(api::analysis::get_analyses)),
            )
            // Project import (GitHub / resume PDF)
            .service(
                web::scope("/api/v1/import")
                    .wrap(middleware::auth::AuthMiddleware)
                    .route("/github", web::post().to(api::import::import_github))
                    .route("/resume", web::post().to(api::import::import_resume)),
            )
            // Interview coach
            .service(
                web::scope("/api/v1/interview")
                    .wrap(middleware::auth::AuthMiddleware)
                    .route("/prepare", web::post().to(api::interview::prepare))
                    .route("/evaluate", web::post().to(api::interview::evaluate)),
            )
            // Resume feedback
            .service(
                web::scope("/api/v1/resume")
                    .wrap(middleware::auth::AuthMiddleware)
                    .route("/analyze", web::post().to(api::resume::analyze)),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
