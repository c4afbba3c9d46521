// ==================== INTERVIEW COACH ====================
// Question generation from the user's projects and answer evaluation.
// Prompt in, JSON schema out; the interviewing brain is Gemini's.

use crate::{database::MongoDB, models::Project, services::gemini_service};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generated question set, grouped the way the coach presents them
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestions {
    pub technical_questions: Vec<String>,
    pub behavioral_questions: Vec<String>,
    pub fundamental_questions: Vec<String>,
}

/// Feedback on a recorded answer
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    /// 1-10
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

fn questions_schema() -> Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "technicalQuestions": { "type": "ARRAY", "items": { "type": "STRING" } },
            "behavioralQuestions": { "type": "ARRAY", "items": { "type": "STRING" } },
            "fundamentalQuestions": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["technicalQuestions", "behavioralQuestions", "fundamentalQuestions"]
    })
}

fn feedback_schema() -> Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "INTEGER" },
            "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
            "improvements": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["score", "strengths", "improvements"]
    })
}

pub(crate) fn prepare_prompt(job_role: &str, projects: &[Project]) -> String {
    let projects_text = projects
        .iter()
        .map(|p| {
            format!(
                "---\nProject Title: {}\nDescription: {}\nTechnologies Used: {}\n---",
                p.title,
                p.description,
                p.technologies.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "You are an expert technical interviewer preparing a candidate for a job interview \
         for the role of \"{job_role}\".\n\
         You have been given a list of the candidate's personal projects to use as context.\n\n\
         **Candidate's Projects:**\n{projects_text}\n\n\
         **Your Task and Strict Instructions:**\n\
         Generate three distinct categories of interview questions. You MUST follow these rules precisely:\n\n\
         1. **Technical & Project Deep Dive Questions:**\n\
            * You MUST generate at least one specific question for EACH project provided above.\n\
            * These questions should test the candidate's understanding of the technologies and \
         architectural decisions within their projects.\n\n\
         2. **Behavioral Questions:**\n\
            * Generate behavioral questions that ask the candidate to describe a situation, \
         challenge, or learning experience related to their projects.\n\
            * These questions should also aim to cover different projects if possible.\n\n\
         3. **Fundamental Questions (This is a separate, required task):**\n\
            * First, analyze the job role: \"{job_role}\".\n\
            * IF the job role contains keywords like \"AI\", \"Machine Learning\", \"ML\", \
         \"Data Scientist\", or \"Analyst\", you MUST generate 3 questions about core AI/ML \
         concepts (e.g., model training, overfitting, data bias, specific algorithms, \
         confusion matrix).\n\
            * ELSE (for any other software role), you MUST generate 3 questions about fundamental \
         Computer Science concepts (e.g., data structures like Hash Maps vs. Arrays, Big O \
         notation, REST vs. GraphQL, OOP principles).\n\n\
         Return the final list of questions in the specified JSON format. Do not include any \
         extra text, headings, or explanations outside of the JSON structure."
    )
}

pub(crate) fn evaluate_prompt(question: &str, answer: &str) -> String {
    format!(
        "You are an expert interview coach. A candidate was asked the following interview \
         question and gave the answer below (transcribed from speech, so ignore minor \
         transcription noise).\n\n\
         Question: {question}\n\n\
         Candidate's Answer: {answer}\n\n\
         Evaluate the answer. Give a score from 1 to 10, list the strengths of the answer, \
         and list concrete improvements. Return the result in the specified JSON format \
         with no extra commentary."
    )
}

/// Loads the selected projects (owner-scoped) and generates the question set
pub async fn prepare_questions(
    db: &MongoDB,
    user_id: &str,
    job_role: &str,
    project_ids: &[String],
) -> Result<InterviewQuestions, String> {
    let object_ids: Vec<ObjectId> = project_ids
        .iter()
        .filter_map(|id| ObjectId::parse_str(id).ok())
        .collect();

    let collection = db.collection::<Project>("projects");
    let mut cursor = collection
        .find(doc! { "_id": { "$in": object_ids }, "user_id": user_id })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut projects = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(project) => projects.push(project),
            Err(e) => log::error!("Failed to read project: {}", e),
        }
    }

    if projects.is_empty() {
        return Err("Selected projects not found.".to_string());
    }

    log::info!(
        "Generating interview questions for user {} ({} projects, role '{}')",
        user_id,
        projects.len(),
        job_role
    );

    let raw = gemini_service::generate_structured(
        &prepare_prompt(job_role, &projects),
        questions_schema(),
    )
    .await?;

    serde_json::from_value(raw).map_err(|e| format!("Unexpected question output: {}", e))
}

/// Grades a transcribed answer to one interview question
pub async fn evaluate_answer(question: &str, answer: &str) -> Result<AnswerFeedback, String> {
    let raw =
        gemini_service::generate_structured(&evaluate_prompt(question, answer), feedback_schema())
            .await?;

    serde_json::from_value(raw).map_err(|e| format!("Unexpected feedback output: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectSource;

    fn project(title: &str, techs: &[&str]) -> Project {
        Project {
            id: None,
            user_id: "u1".to_string(),
            title: title.to_string(),
            description: format!("{} description", title),
            technologies: techs.iter().map(|t| t.to_string()).collect(),
            github_link: None,
            source: ProjectSource::Manual,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn prepare_prompt_embeds_every_project() {
        let projects = vec![
            project("Weather App", &["react"]),
            project("Chat Server", &["node", "express"]),
        ];
        let prompt = prepare_prompt("Backend Developer", &projects);
        assert!(prompt.contains("Project Title: Weather App"));
        assert!(prompt.contains("Project Title: Chat Server"));
        assert!(prompt.contains("node, express"));
        assert!(prompt.contains("\"Backend Developer\""));
    }

    #[test]
    fn parses_generated_questions() {
        let raw = serde_json::json!({
            "technicalQuestions": ["Why React?"],
            "behavioralQuestions": ["Describe a challenge."],
            "fundamentalQuestions": ["Explain Big O.", "REST vs GraphQL?", "What is OOP?"]
        });
        let questions: InterviewQuestions = serde_json::from_value(raw).unwrap();
        assert_eq!(questions.technical_questions.len(), 1);
        assert_eq!(questions.fundamental_questions.len(), 3);
    }

    #[test]
    fn parses_answer_feedback() {
        let raw = serde_json::json!({
            "score": 7,
            "strengths": ["Clear structure"],
            "improvements": ["Mention trade-offs"]
        });
        let feedback: AnswerFeedback = serde_json::from_value(raw).unwrap();
        assert_eq!(feedback.score, 7);
        assert_eq!(feedback.improvements.len(), 1);
    }

    #[test]
    fn evaluate_prompt_embeds_question_and_answer() {
        let prompt = evaluate_prompt("Why Rust?", "Because of the borrow checker.");
        assert!(prompt.contains("Why Rust?"));
        assert!(prompt.contains("borrow checker"));
    }
}
