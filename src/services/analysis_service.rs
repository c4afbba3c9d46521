// ==================== CAREER ANALYSIS ====================
// Runs the career scorer over the user's current projects and keeps a
// historical record of every run, snapshotting the project titles involved.

use crate::{
    database::MongoDB,
    models::{Analysis, AnalysisResponse, AnalyzedProject, Project},
    services::career_service,
};
use futures::stream::StreamExt;
use mongodb::bson::doc;

/// Minimum number of projects before an analysis is meaningful
pub const MIN_PROJECTS_FOR_ANALYSIS: usize = 3;

/// Scores the user's projects, persists the result, and returns it
pub async fn run_analysis(db: &MongoDB, user_id: &str) -> Result<AnalysisResponse, String> {
    let projects_collection = db.collection::<Project>("projects");

    let mut cursor = projects_collection
        .find(doc! { "user_id": user_id })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut projects = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(project) => projects.push(project),
            Err(e) => log::error!("Failed to read project: {}", e),
        }
    }

    if projects.len() < MIN_PROJECTS_FOR_ANALYSIS {
        return Err(format!(
            "Add at least {} projects before running an analysis",
            MIN_PROJECTS_FOR_ANALYSIS
        ));
    }

    let career_path = career_service::analyze_careers(&projects);

    let snapshot: Vec<AnalyzedProject> = projects
        .iter()
        .map(|p| AnalyzedProject {
            id: p.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: p.title.clone(),
        })
        .collect();

    let analysis = Analysis {
        id: None,
        user_id: user_id.to_string(),
        career_path,
        projects: snapshot,
        created_at: chrono::Utc::now().timestamp(),
    };

    let analyses_collection = db.collection::<Analysis>("analyses");
    let result = analyses_collection
        .insert_one(&analysis)
        .await
        .map_err(|e| format!("Failed to save analysis: {}", e))?;

    let mut saved = analysis;
    saved.id = result.inserted_id.as_object_id();

    log::info!(
        "Career analysis saved for user {}: {}",
        user_id,
        saved.career_path
    );

    Ok(AnalysisResponse::from(saved))
}

/// All analyses of `user_id`, newest first
pub async fn list_analyses(db: &MongoDB, user_id: &str) -> Result<Vec<AnalysisResponse>, String> {
    let collection = db.collection::<Analysis>("analyses");

    let mut cursor = collection
        .find(doc! { "user_id": user_id })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut analyses = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(analysis) => analyses.push(AnalysisResponse::from(analysis)),
            Err(e) => log::error!("Failed to read analysis: {}", e),
        }
    }

    analyses.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(analyses)
}
