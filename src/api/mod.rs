pub mod analysis;
pub mod auth;
pub mod health;
pub mod import;
pub mod interview;
pub mod metrics;
pub mod projects;
pub mod resume;
pub mod swagger;
pub mod users;
