// Utility functions
pub mod multipart;
pub mod pdf;
