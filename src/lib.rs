pub mod config;
pub mod logging;
pub mod report;
pub mod version;

pub use version::error::RecommendError;
pub use version::recommend::{Recommendation, VersionRecommender, recommend};
pub use version::scheme::VersionScheme;
