// ==================== PROJECTS ====================
// Owner-scoped CRUD over the projects collection.

use crate::{
    database::MongoDB,
    models::{CreateProjectRequest, Project, ProjectResponse, ProjectSource},
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};

/// All projects of `user_id`, newest first
pub async fn list_projects(db: &MongoDB, user_id: &str) -> Result<Vec<ProjectResponse>, String> {
    let collection = db.collection::<Project>("projects");

    let mut cursor = collection
        .find(doc! { "user_id": user_id })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut projects = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(project) => projects.push(ProjectResponse::from(project)),
            Err(e) => log::error!("Failed to read project: {}", e),
        }
    }

    projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(projects)
}

/// Adds a manually entered project
pub async fn create_project(
    db: &MongoDB,
    user_id: &str,
    request: CreateProjectRequest,
) -> Result<ProjectResponse, String> {
    let title = request.title.trim().to_string();
    if title.is_empty() {
        return Err("Title is required".to_string());
    }
    if request.description.trim().is_empty() {
        return Err("Description is required".to_string());
    }

    let technologies: Vec<String> = request
        .technologies
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if technologies.is_empty() {
        return Err("At least one technology is required".to_string());
    }

    let now = chrono::Utc::now().timestamp();
    let project = Project {
        id: None,
        user_id: user_id.to_string(),
        title,
        description: request.description.trim().to_string(),
        technologies,
        github_link: request
            .github_link
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty()),
        source: ProjectSource::Manual,
        created_at: now,
        updated_at: now,
    };

    let collection = db.collection::<Project>("projects");
    let result = collection
        .insert_one(&project)
        .await
        .map_err(|e| format!("Failed to save project: {}", e))?;

    let mut saved = project;
    saved.id = result.inserted_id.as_object_id();

    log::info!("Project added for user {}", user_id);

    Ok(ProjectResponse::from(saved))
}

/// Deletes a project owned by `user_id`. Returns false when no owned project
/// matched the id.
pub async fn delete_project(
    db: &MongoDB,
    user_id: &str,
    project_id: &ObjectId,
) -> Result<bool, String> {
    let collection = db.collection::<Project>("projects");

    let result = collection
        .delete_one(doc! { "_id": project_id, "user_id": user_id })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    Ok(result.deleted_count > 0)
}
