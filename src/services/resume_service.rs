// ==================== RESUME PROCESSING ====================
// Project extraction from an uploaded resume PDF, and resume feedback for a
// target job role. Text comes out of the PDF locally; the extraction and the
// critique are delegated to Gemini with a requested JSON schema.

use crate::{
    database::MongoDB,
    models::{Project, ProjectResponse, ProjectSource},
    services::gemini_service,
    utils::pdf,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Project pulled out of a resume by the model
#[derive(Debug, Deserialize)]
pub struct ExtractedProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// Strengths/weaknesses feedback for a resume
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub good_points: Vec<String>,
    pub bad_points: Vec<String>,
}

fn extraction_schema() -> Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "technologies": { "type": "ARRAY", "items": { "type": "STRING" } }
            },
            "required": ["title", "description", "technologies"]
        }
    })
}

pub(crate) fn extraction_prompt(resume_text: &str) -> String {
    format!(
        "Analyze the following resume text. Find the section with a heading like \
         \"Projects\", \"My Projects\", or \"Personal Projects\".\n\
         Extract every project listed under that heading until you reach the next major \
         heading (like \"Experience\" or \"Education\").\n\
         For each project, extract its title, a brief description, and a list of \
         technologies used.\n\
         Return the data in the specified JSON format. If no projects section is found, \
         return an empty array.\n\n\
         Resume Text:\n---\n{}\n---",
        resume_text
    )
}

fn analysis_schema() -> Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "goodPoints": { "type": "ARRAY", "items": { "type": "STRING" } },
            "badPoints": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["goodPoints", "badPoints"]
    })
}

pub(crate) fn analysis_prompt(resume_text: &str, job_role: &str) -> String {
    format!(
        "Analyze the following resume text based on its suitability for the job role of \
         \"{}\".\n\
         Identify key strengths and weaknesses.\n\
         - For \"goodPoints\", list specific skills or projects that align with the role.\n\
         - For \"badPoints\", list areas for improvement, suggesting specific actions like \
         \"Add quantifiable results\" or \"Include more keywords like 'agile'\".\n\
         Return the analysis in the specified JSON format.\n\
         Resume Text: --- {} ---",
        job_role, resume_text
    )
}

/// Extracts the Projects section of a resume PDF and stores every entry as a
/// project of `user_id`. An empty result means no Projects section was found.
pub async fn import_resume_projects(
    db: &MongoDB,
    user_id: &str,
    pdf_bytes: &[u8],
) -> Result<Vec<ProjectResponse>, String> {
    let resume_text = pdf::extract_text(pdf_bytes)?;

    log::info!(
        "Extracting projects from resume for user {} ({} chars of text)",
        user_id,
        resume_text.len()
    );

    let raw = gemini_service::generate_structured(
        &extraction_prompt(&resume_text),
        extraction_schema(),
    )
    .await?;

    let extracted: Vec<ExtractedProject> = serde_json::from_value(raw)
        .map_err(|e| format!("Unexpected extraction output: {}", e))?;

    if extracted.is_empty() {
        return Ok(vec![]);
    }

    let now = chrono::Utc::now().timestamp();
    let projects: Vec<Project> = extracted
        .into_iter()
        .map(|p| Project {
            id: None,
            user_id: user_id.to_string(),
            title: p.title,
            description: p.description,
            technologies: p.technologies,
            github_link: None,
            source: ProjectSource::Resume,
            created_at: now,
            updated_at: now,
        })
        .collect();

    let collection = db.collection::<Project>("projects");
    let result = collection
        .insert_many(&projects)
        .await
        .map_err(|e| format!("Failed to save projects: {}", e))?;

    let mut saved = Vec::with_capacity(projects.len());
    for (i, mut project) in projects.into_iter().enumerate() {
        project.id = result
            .inserted_ids
            .get(&i)
            .and_then(|id| id.as_object_id());
        saved.push(ProjectResponse::from(project));
    }

    log::info!("Imported {} resume projects for user {}", saved.len(), user_id);

    Ok(saved)
}

/// Grades a resume PDF against a target job role
pub async fn analyze_resume(pdf_bytes: &[u8], job_role: &str) -> Result<ResumeAnalysis, String> {
    let resume_text = pdf::extract_text(pdf_bytes)?;

    log::info!(
        "Analyzing resume for role '{}' ({} chars of text)",
        job_role,
        resume_text.len()
    );

    let raw = gemini_service::generate_structured(
        &analysis_prompt(&resume_text, job_role),
        analysis_schema(),
    )
    .await?;

    serde_json::from_value(raw).map_err(|e| format!("Unexpected analysis output: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_prompt_embeds_resume_text() {
        let prompt = extraction_prompt("PROJECTS\nWeather App - React");
        assert!(prompt.contains("Weather App - React"));
        assert!(prompt.contains("\"Personal Projects\""));
    }

    #[test]
    fn parses_extracted_projects() {
        let raw = serde_json::json!([
            {
                "title": "Weather App",
                "description": "A forecast dashboard",
                "technologies": ["react", "axios"]
            }
        ]);
        let projects: Vec<ExtractedProject> = serde_json::from_value(raw).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Weather App");
        assert_eq!(projects[0].technologies, vec!["react", "axios"]);
    }

    #[test]
    fn parses_analysis_reply() {
        let raw = serde_json::json!({
            "goodPoints": ["Strong React projects"],
            "badPoints": ["Add quantifiable results"]
        });
        let analysis: ResumeAnalysis = serde_json::from_value(raw).unwrap();
        assert_eq!(analysis.good_points.len(), 1);
        assert_eq!(analysis.bad_points[0], "Add quantifiable results");
    }

    #[test]
    fn analysis_prompt_names_the_role() {
        let prompt = analysis_prompt("some resume", "Backend Developer");
        assert!(prompt.contains("\"Backend Developer\""));
        assert!(prompt.contains("goodPoints"));
    }
}
