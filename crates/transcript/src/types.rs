/// One recognized spoken word with its time span, in milliseconds.
///
/// Owned exclusively by the token stream and immutable once produced.
/// Streams are ordered non-decreasing by `start_ms`; see
/// [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub text: String,
    pub start_ms: i64,
    pub end_ms: i64,
}

impl Token {
    /// Convert one recognizer word (seconds as floats) to a `Token`.
    pub fn from_recognizer(w: &RecognizerWord) -> Self {
        Self {
            text: w.word.clone(),
            start_ms: (w.start * 1000.0).round() as i64,
            end_ms: (w.end * 1000.0).round() as i64,
        }
    }

    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }
}

/// Wire shape of one word as emitted by the speech-to-text collaborator
/// (Vosk-style result entries: `word`, `start`/`end` in seconds).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RecognizerWord {
    pub word: String,
    pub start: f64,
    pub end: f64,
}
