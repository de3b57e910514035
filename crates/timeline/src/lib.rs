mod build;
mod questions;
mod types;

pub use build::{TimelineConfig, build_segments};
pub use questions::{QuestionRecord, load_questions};
pub use types::{Bite, OpenRange, Segment, TimeRange, TimelineMetadata};

/// Substituted for question/answer text when no record matches an
/// occurrence's number. Matches what downstream renderers already expect.
pub const NO_DATA: &str = "No data";

pub type Result<T> = std::result::Result<T, TimelineError>;

#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("questions file not found: {0}")]
    QuestionsNotFound(std::path::PathBuf),

    #[error("malformed questions document: {0}")]
    MalformedQuestions(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
