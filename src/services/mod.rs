pub mod analysis_service;
pub mod auth_service;
pub mod career_service;
pub mod gemini_service;
pub mod github_service;
pub mod interview_service;
pub mod project_service;
pub mod resume_service;
pub mod user_service;

/// Service errors are plain strings. Operational failures (database, hashing,
/// token generation) all carry one of these prefixes; handlers must map them
/// to a generic 500 instead of echoing the detail to the client.
pub fn is_internal_error(message: &str) -> bool {
    message.starts_with("Database error")
        || message.starts_with("Failed to")
        || message.starts_with("Password verification error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operational_failures_are_internal() {
        assert!(is_internal_error("Database error: pool timed out"));
        assert!(is_internal_error("Failed to hash password: cost out of range"));
        assert!(is_internal_error("Failed to save project: write concern error"));
        assert!(is_internal_error("Failed to generate token: key error"));
        assert!(is_internal_error("Password verification error: invalid hash"));
    }

    #[test]
    fn validation_messages_are_not_internal() {
        assert!(!is_internal_error("User already exists"));
        assert!(!is_internal_error("Invalid credentials"));
        assert!(!is_internal_error("Title is required"));
        assert!(!is_internal_error("Current password is not correct"));
        assert!(!is_internal_error(
            "Add at least 3 projects before running an analysis"
        ));
    }
}
