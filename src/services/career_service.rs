// ==================== CAREER PATH SCORER ====================
// Keyword-based scoring over the technology tags of a user's projects.
// A slice keeps the table iteration order fixed, which is what breaks ties.

use crate::models::Project;

pub const FALLBACK_MESSAGE: &str =
    "Your profile is versatile! Continue adding projects to refine the analysis.";

/// Minimum total hits before a category counts as a signal
const MIN_SIGNAL_SCORE: usize = 0;

const CAREER_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Machine Learning Engineer / Data Scientist",
        &[
            "python",
            "scikit-learn",
            "tensorflow",
            "keras",
            "prophet",
            "xgboost",
            "pandas",
        ],
    ),
    (
        "Frontend Developer",
        &["react", "recharts", "leaflet", "react-leaflet", "drei", "axios"],
    ),
    ("Backend Developer", &["python", "flask", "node", "express"]),
    (
        "Full-Stack Developer",
        &["react", "python", "flask", "node", "express"],
    ),
];

/// Scores every career category against the combined technology tags of the
/// given projects and returns the best-matching label, or the fallback message
/// when no category scores above the minimum signal.
pub fn analyze_careers(projects: &[Project]) -> String {
    let all_techs: Vec<String> = projects
        .iter()
        .flat_map(|p| p.technologies.iter())
        .map(|t| t.trim().to_lowercase())
        .collect();

    let mut scores = vec![0usize; CAREER_KEYWORDS.len()];
    for tech in &all_techs {
        for (i, (_, keywords)) in CAREER_KEYWORDS.iter().enumerate() {
            if keywords.contains(&tech.as_str()) {
                scores[i] += 1;
            }
        }
    }

    let mut best_career = FALLBACK_MESSAGE;
    let mut max_score = MIN_SIGNAL_SCORE;
    for (i, (career, _)) in CAREER_KEYWORDS.iter().enumerate() {
        // Strictly greater: earlier table entries win ties
        if scores[i] > max_score {
            max_score = scores[i];
            best_career = career;
        }
    }

    best_career.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectSource;

    fn project(techs: &[&str]) -> Project {
        Project {
            id: None,
            user_id: "u1".to_string(),
            title: "test".to_string(),
            description: "test".to_string(),
            technologies: techs.iter().map(|t| t.to_string()).collect(),
            github_link: None,
            source: ProjectSource::Manual,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn highest_scoring_category_wins() {
        let projects = vec![
            project(&["tensorflow", "pandas", "keras"]),
            project(&["react"]),
        ];
        assert_eq!(
            analyze_careers(&projects),
            "Machine Learning Engineer / Data Scientist"
        );
    }

    #[test]
    fn ties_break_by_table_order() {
        // "flask" and "node" score Backend and Full-Stack equally;
        // Backend comes first in the table.
        let projects = vec![project(&["flask", "node"])];
        assert_eq!(analyze_careers(&projects), "Backend Developer");
    }

    #[test]
    fn matching_is_case_insensitive_and_trimmed() {
        let projects = vec![project(&["  React ", "AXIOS"])];
        assert_eq!(analyze_careers(&projects), "Frontend Developer");
    }

    #[test]
    fn no_signal_returns_fallback() {
        let projects = vec![project(&["cobol", "fortran"])];
        assert_eq!(analyze_careers(&projects), FALLBACK_MESSAGE);
    }

    #[test]
    fn empty_projects_return_fallback() {
        assert_eq!(analyze_careers(&[]), FALLBACK_MESSAGE);
    }

    #[test]
    fn hits_accumulate_across_projects() {
        // One frontend keyword per project still adds up to a frontend profile
        let projects = vec![
            project(&["react"]),
            project(&["recharts"]),
            project(&["leaflet"]),
        ];
        assert_eq!(analyze_careers(&projects), "Frontend Developer");
    }
}
