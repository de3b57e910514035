use std::path::Path;

use crate::{Result, TimelineError};

/// Externally supplied question/answer text, keyed by the sequence number
/// of the phrase occurrence it belongs to.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct QuestionRecord {
    pub number: u32,
    pub question: String,
    pub answer: String,
}

#[derive(serde::Deserialize)]
struct QuestionsDocument {
    #[serde(default)]
    questions: Vec<QuestionRecord>,
}

/// Load the question document (`{ "questions": [...] }`). A missing or
/// malformed document is an input error, fatal before the pass runs.
pub fn load_questions(path: impl AsRef<Path>) -> Result<Vec<QuestionRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TimelineError::QuestionsNotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    let doc: QuestionsDocument = serde_json::from_str(&contents)?;
    Ok(doc.questions)
}
