use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Career Service API",
        version = "1.0.0",
        description = "REST API for the career tracker. Users log personal projects \
            (manually, via GitHub import, or via resume parsing) and receive a heuristic \
            career-path suggestion plus AI-generated interview questions and resume \
            feedback.\n\n**Authentication:** protected endpoints expect the session \
            token in the `x-auth-token` header (a standard Bearer header also works)."
    ),
    paths(
        // Auth
        crate::api::auth::register,
        crate::api::auth::login,
        crate::api::auth::verify_token,

        // Users
        crate::api::users::get_me,
        crate::api::users::change_password,

        // Projects
        crate::api::projects::get_projects,
        crate::api::projects::create_project,
        crate::api::projects::delete_project,

        // Analysis
        crate::api::analysis::run_analysis,
        crate::api::analysis::get_analyses,

        // Import
        crate::api::import::import_github,
        crate::api::import::import_resume,

        // Interview
        crate::api::interview::prepare,
        crate::api::interview::evaluate,

        // Resume
        crate::api::resume::analyze,

        // Health
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::services::auth_service::RegisterRequest,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::AuthResponse,
            crate::services::user_service::ProfileResponse,
            crate::services::user_service::ChangePasswordRequest,
            crate::models::UserInfo,
            crate::models::ProjectSource,
            crate::models::CreateProjectRequest,
            crate::models::ProjectResponse,
            crate::models::AnalyzedProject,
            crate::models::AnalysisResponse,
            crate::api::import::GithubImportRequest,
            crate::api::interview::PrepareRequest,
            crate::api::interview::EvaluateRequest,
            crate::services::interview_service::InterviewQuestions,
            crate::services::interview_service::AnswerFeedback,
            crate::services::resume_service::ResumeAnalysis,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login. Issues the session token used by every protected endpoint."),
        (name = "Users", description = "Profile retrieval and password change."),
        (name = "Projects", description = "Owner-scoped CRUD over the user's personal projects."),
        (name = "Analysis", description = "Career-path scoring over the user's projects and the analysis history."),
        (name = "Import", description = "Project import from a GitHub repository or an uploaded resume PDF."),
        (name = "Interview", description = "AI-generated interview questions and answer feedback."),
        (name = "Resume", description = "AI resume feedback for a target job role."),
        (name = "Health", description = "Health check and request counters."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your session token"))
                        .build(),
                ),
            );
        }
    }
}
