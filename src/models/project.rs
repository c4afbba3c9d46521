use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// How a project entered the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSource {
    Manual,
    Github,
    Resume,
}

impl Default for ProjectSource {
    fn default() -> Self {
        ProjectSource::Manual
    }
}

/// Personal project (stored in MongoDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// ID of the owning user
    pub user_id: String,

    pub title: String,

    pub description: String,

    /// Technology tags, e.g. ["react", "node", "mongodb"]
    pub technologies: Vec<String>,

    /// Optional link to the repository or a live demo
    pub github_link: Option<String>,

    #[serde(default)]
    pub source: ProjectSource,

    /// Unix timestamps
    pub created_at: i64,
    pub updated_at: i64,
}

/// Request to add a project manually
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_link: Option<String>,
}

/// Project as returned by the API
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ProjectResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    pub source: ProjectSource,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        ProjectResponse {
            id: project.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: project.user_id,
            title: project.title,
            description: project.description,
            technologies: project.technologies,
            github_link: project.github_link,
            source: project.source,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_tag_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProjectSource::Github).unwrap(),
            "\"github\""
        );
        assert_eq!(
            serde_json::from_str::<ProjectSource>("\"resume\"").unwrap(),
            ProjectSource::Resume
        );
    }

    #[test]
    fn source_tag_defaults_to_manual() {
        // Documents written before the source field existed deserialize as manual
        let doc = serde_json::json!({
            "user_id": "abc",
            "title": "Tracker",
            "description": "A tracker",
            "technologies": ["react"],
            "github_link": null,
            "created_at": 0,
            "updated_at": 0
        });
        let project: Project = serde_json::from_value(doc).unwrap();
        assert_eq!(project.source, ProjectSource::Manual);
    }
}
