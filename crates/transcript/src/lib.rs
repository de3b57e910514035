mod input;
mod types;

pub use input::{assemble, load_words, validate};
pub use types::{RecognizerWord, Token};

pub type Result<T> = std::result::Result<T, TranscriptError>;

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("word list not found: {0}")]
    WordListNotFound(std::path::PathBuf),

    #[error("malformed word list: {0}")]
    MalformedWordList(#[from] serde_json::Error),

    #[error("io error reading word list: {0}")]
    Io(#[from] std::io::Error),

    #[error("token {index} ({text:?}) has end_ms {end_ms} before start_ms {start_ms}")]
    InvertedSpan {
        index: usize,
        text: String,
        start_ms: i64,
        end_ms: i64,
    },

    #[error("token {index} ({text:?}) starts at {start_ms} before previous token at {prev_start_ms}")]
    OutOfOrder {
        index: usize,
        text: String,
        start_ms: i64,
        prev_start_ms: i64,
    },
}
