use crate::database::MongoDB;
use crate::services::auth_service::Claims;
use crate::services::interview_service::{self, AnswerFeedback, InterviewQuestions};
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrepareRequest {
    pub job_role: String,
    pub project_ids: Vec<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct EvaluateRequest {
    pub question: String,
    pub answer: String,
}

/// POST /api/v1/interview/prepare - Generate interview questions from the
/// user's projects and a target job role
#[utoipa::path(
    post,
    path = "/api/v1/interview/prepare",
    tag = "Interview",
    request_body = PrepareRequest,
    responses(
        (status = 200, description = "Generated question set", body = InterviewQuestions),
        (status = 400, description = "Missing job role or projects"),
        (status = 404, description = "Selected projects not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn prepare(
    user: web::ReqData<Claims>,
    db: web::Data<MongoDB>,
    request: web::Json<PrepareRequest>,
) -> impl Responder {
    let user_id = &user.sub;
    log::info!(
        "POST /interview/prepare - user: {}, role: {}",
        user_id,
        request.job_role
    );

    if request.job_role.trim().is_empty() || request.project_ids.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "Job role and at least one project are required."
        }));
    }

    match interview_service::prepare_questions(
        &db,
        user_id,
        request.job_role.trim(),
        &request.project_ids,
    )
    .await
    {
        Ok(questions) => HttpResponse::Ok().json(questions),
        Err(e) if e == "Selected projects not found." => {
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
        Err(e) => {
            log::error!("Interview prep failed for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error during interview preparation"
            }))
        }
    }
}

/// POST /api/v1/interview/evaluate - Grade a recorded answer
#[utoipa::path(
    post,
    path = "/api/v1/interview/evaluate",
    tag = "Interview",
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "Feedback on the answer", body = AnswerFeedback),
        (status = 400, description = "Missing question or answer"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = []))
)]
pub async fn evaluate(
    user: web::ReqData<Claims>,
    request: web::Json<EvaluateRequest>,
) -> impl Responder {
    let user_id = &user.sub;
    log::info!("POST /interview/evaluate - user: {}", user_id);

    if request.question.trim().is_empty() || request.answer.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "A question and an answer are required."
        }));
    }

    match interview_service::evaluate_answer(request.question.trim(), request.answer.trim()).await {
        Ok(feedback) => HttpResponse::Ok().json(feedback),
        Err(e) => {
            log::error!("Answer evaluation failed for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server error during answer evaluation"
            }))
        }
    }
}
