// ==================== USER PROFILE ====================
// Dashboard payload (profile + projects + analyses) and password change.

use crate::{
    database::MongoDB,
    models::{AnalysisResponse, ProjectResponse, User, UserInfo},
    services::{analysis_service, auth_service, project_service},
};
use bcrypt::{hash, verify, DEFAULT_COST};
use mongodb::bson::{doc, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ProfileResponse {
    pub user: UserInfo,
    pub projects: Vec<ProjectResponse>,
    pub analyses: Vec<AnalysisResponse>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Everything the dashboard shows in one round trip
pub async fn get_profile(db: &MongoDB, user_id: &str) -> Result<ProfileResponse, String> {
    let collection = db.collection::<User>("users");

    let user = collection
        .find_one(doc! { "user_id": user_id })
        .await
        .map_err(|e| format!("Database error: {}", e))?
        .ok_or_else(|| "User not found".to_string())?;

    let projects = project_service::list_projects(db, user_id).await?;
    let analyses = analysis_service::list_analyses(db, user_id).await?;

    Ok(ProfileResponse {
        user: UserInfo::from(user),
        projects,
        analyses,
    })
}

/// Verifies the current password and replaces it with the new one
pub async fn change_password(
    db: &MongoDB,
    user_id: &str,
    request: &ChangePasswordRequest,
) -> Result<(), String> {
    if request.current_password.is_empty() {
        return Err("Current password is required".to_string());
    }
    if request.new_password.len() < auth_service::MIN_PASSWORD_LEN {
        return Err(format!(
            "New password must be at least {} characters",
            auth_service::MIN_PASSWORD_LEN
        ));
    }

    let collection = db.collection::<User>("users");

    let user = collection
        .find_one(doc! { "user_id": user_id })
        .await
        .map_err(|e| format!("Database error: {}", e))?
        .ok_or_else(|| "User not found".to_string())?;

    let stored_password = user
        .password
        .as_ref()
        .ok_or_else(|| "User has no password set".to_string())?;

    let is_match = verify(&request.current_password, stored_password)
        .map_err(|e| format!("Password verification error: {}", e))?;

    if !is_match {
        return Err("Current password is not correct".to_string());
    }

    let new_hash = hash(&request.new_password, DEFAULT_COST)
        .map_err(|e| format!("Failed to hash password: {}", e))?;

    collection
        .update_one(
            doc! { "user_id": user_id },
            doc! { "$set": { "password": new_hash, "updated_at": BsonDateTime::now() } },
        )
        .await
        .map_err(|e| format!("Failed to update password: {}", e))?;

    log::info!("Password updated for user {}", user_id);

    Ok(())
}
