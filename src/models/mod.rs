pub mod analysis;
pub mod project;
pub mod user;

pub use analysis::*;
pub use project::*;
pub use user::*;
