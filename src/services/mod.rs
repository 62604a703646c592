// Service exports
pub mod cache;

pub use cache::{AnalysisCache, CacheKey};
