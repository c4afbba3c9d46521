use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Snapshot of a project at analysis time. Keeps a permanent record of the
/// project titles that fed the suggestion, even after the project is deleted.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AnalyzedProject {
    pub id: String,
    pub title: String,
}

/// Career analysis result (stored in MongoDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// ID of the owning user
    pub user_id: String,

    /// Label produced by the career scorer
    pub career_path: String,

    pub projects: Vec<AnalyzedProject>,

    /// Unix timestamp
    pub created_at: i64,
}

/// Analysis as returned by the API
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AnalysisResponse {
    pub id: String,
    pub user_id: String,
    pub career_path: String,
    pub projects: Vec<AnalyzedProject>,
    pub created_at: i64,
}

impl From<Analysis> for AnalysisResponse {
    fn from(analysis: Analysis) -> Self {
        AnalysisResponse {
            id: analysis.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: analysis.user_id,
            career_path: analysis.career_path,
            projects: analysis.projects,
            created_at: analysis.created_at,
        }
    }
}
