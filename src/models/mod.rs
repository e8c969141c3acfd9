pub mod session;
pub mod summary;

pub use session::{
    InsightMarker, SessionSnapshot, Speaker, TopicCoverageRecord, TopicStatus, Utterance,
};
pub use summary::{KeyQuote, SessionSummary, ThemeSummary};
