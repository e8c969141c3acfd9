pub mod commands;
pub mod config;
pub mod detectors;
pub mod engine;
pub mod followups;
pub mod markdown;
pub mod quotes;
pub mod scoring;
pub mod themes;
pub mod tokenize;
pub mod topics;

pub use config::AnalysisConfig;
pub use engine::generate_summary;
pub use markdown::to_markdown;
