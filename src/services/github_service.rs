// ==================== GITHUB IMPORT ====================
// Imports a repository as a project: metadata and languages from the GitHub
// REST API, description summarized from the README via Gemini when possible.

use crate::{
    database::MongoDB,
    models::{Project, ProjectResponse, ProjectSource},
    services::gemini_service,
};
use serde::Deserialize;

const GITHUB_API_BASE: &str = "https://api.github.com";
// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("career-service/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
}

/// Owner/repo pair parsed out of a GitHub URL
#[derive(Debug, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

/// Accepts https://github.com/owner/repo (with optional .git suffix or extra
/// path segments) and bare owner/repo paths.
pub fn parse_repo_url(url: &str) -> Result<RepoRef, String> {
    let trimmed = url.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let path = without_scheme
        .strip_prefix("github.com/")
        .or_else(|| without_scheme.strip_prefix("www.github.com/"))
        .unwrap_or(without_scheme);

    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    if parts.len() < 2 {
        return Err("Invalid GitHub URL format".to_string());
    }

    let owner = parts[0].to_string();
    let name = parts[1].trim_end_matches(".git").to_string();
    if owner.is_empty() || name.is_empty() {
        return Err("Invalid GitHub URL format".to_string());
    }

    Ok(RepoRef { owner, name })
}

fn github_client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn fetch_repo(repo: &RepoRef) -> Result<GithubRepo, String> {
    let url = format!("{}/repos/{}/{}", GITHUB_API_BASE, repo.owner, repo.name);

    let response = github_client()
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", "application/vnd.github.v3+json")
        .send()
        .await
        .map_err(|e| format!("Failed to fetch from GitHub: {}", e))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err("Repository not found. Please check the URL.".to_string());
    }
    if !response.status().is_success() {
        return Err(format!("GitHub API error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse GitHub response: {}", e))
}

async fn fetch_languages(repo: &RepoRef) -> Result<Vec<String>, String> {
    let url = format!(
        "{}/repos/{}/{}/languages",
        GITHUB_API_BASE, repo.owner, repo.name
    );

    let response = github_client()
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", "application/vnd.github.v3+json")
        .send()
        .await
        .map_err(|e| format!("Failed to fetch languages: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("GitHub API error: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read languages: {}", e))?;

    language_keys(&body)
}

// GitHub lists languages by bytes of code, most used first; the technology
// tags keep that order.
pub(crate) fn language_keys(body: &str) -> Result<Vec<String>, String> {
    let languages: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(body).map_err(|e| format!("Failed to parse languages: {}", e))?;

    Ok(languages.into_iter().map(|(name, _)| name).collect())
}

async fn fetch_readme(repo: &RepoRef) -> Result<String, String> {
    let url = format!(
        "{}/repos/{}/{}/readme",
        GITHUB_API_BASE, repo.owner, repo.name
    );

    let response = github_client()
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", "application/vnd.github.v3.raw")
        .send()
        .await
        .map_err(|e| format!("Failed to fetch README: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("GitHub API error: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read README: {}", e))
}

pub(crate) fn summary_prompt(readme: &str) -> String {
    format!(
        "Summarize the following project README in a single, plain-text paragraph \
         for a project portfolio. Do not use any markdown formatting like asterisks \
         or bolding: {}",
        readme
    )
}

/// Imports the repository at `url` as a project of `user_id`
pub async fn import_repository(
    db: &MongoDB,
    user_id: &str,
    url: &str,
) -> Result<ProjectResponse, String> {
    let repo_ref = parse_repo_url(url)?;

    log::info!(
        "Importing GitHub repo {}/{} for user {}",
        repo_ref.owner,
        repo_ref.name,
        user_id
    );

    let repo = fetch_repo(&repo_ref).await?;
    let technologies = fetch_languages(&repo_ref).await?;

    let mut description = repo
        .description
        .clone()
        .unwrap_or_else(|| "No description found.".to_string());

    // README summary is best-effort: any failure falls back to the repo description
    match fetch_readme(&repo_ref).await {
        Ok(readme) => match gemini_service::generate_text(&summary_prompt(&readme)).await {
            Ok(summary) => {
                // Strip any markdown the model slipped in anyway
                description = summary.replace("**", "");
            }
            Err(e) => {
                log::warn!("Could not summarize README, using repo description: {}", e);
            }
        },
        Err(e) => {
            log::warn!("Could not fetch README, using repo description: {}", e);
        }
    }

    let now = chrono::Utc::now().timestamp();
    let project = Project {
        id: None,
        user_id: user_id.to_string(),
        title: repo.name,
        description,
        technologies: if technologies.is_empty() {
            vec!["Not specified".to_string()]
        } else {
            technologies
        },
        github_link: Some(repo.html_url),
        source: ProjectSource::Github,
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

    log::info!("GitHub project imported for user {}", user_id);

    Ok(ProjectResponse::from(saved))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_url() {
        let repo = parse_repo_url("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "rust");
    }

    #[test]
    fn parses_url_with_git_suffix_and_extra_segments() {
        let repo = parse_repo_url("https://github.com/serde-rs/serde.git").unwrap();
        assert_eq!(repo.name, "serde");

        let repo = parse_repo_url("https://github.com/serde-rs/serde/tree/master/src").unwrap();
        assert_eq!(repo.owner, "serde-rs");
        assert_eq!(repo.name, "serde");
    }

    #[test]
    fn rejects_short_paths() {
        assert!(parse_repo_url("https://github.com/onlyowner").is_err());
        assert!(parse_repo_url("https://github.com/").is_err());
        assert!(parse_repo_url("").is_err());
    }

    #[test]
    fn language_tags_keep_most_used_first_order() {
        let tags = language_keys(r#"{"TypeScript":90210,"Rust":4017,"CSS":312}"#).unwrap();
        assert_eq!(tags, vec!["TypeScript", "Rust", "CSS"]);

        // Not alphabetized even when the response order disagrees with it
        let tags = language_keys(r#"{"Rust":3,"CSS":2,"Assembly":1}"#).unwrap();
        assert_eq!(tags, vec!["Rust", "CSS", "Assembly"]);
    }

    #[test]
    fn summary_prompt_requests_plain_text() {
        let prompt = summary_prompt("# My Project");
        assert!(prompt.contains("plain-text paragraph"));
        assert!(prompt.contains("# My Project"));
    }
}
