pub mod sessions;
pub mod transcripts;
