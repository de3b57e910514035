use std::path::Path;

use crate::types::{RecognizerWord, Token};
use crate::{Result, TranscriptError};

/// Convert a materialized recognizer word list into a token stream.
pub fn assemble(words: &[RecognizerWord]) -> Vec<Token> {
    words.iter().map(Token::from_recognizer).collect()
}

/// Enforce the stream invariants: `start_ms <= end_ms` per token and
/// non-decreasing `start_ms` across the stream. Violations are input
/// errors, fatal before any processing starts.
pub fn validate(tokens: &[Token]) -> Result<()> {
    let mut prev_start_ms = i64::MIN;

    for (index, t) in tokens.iter().enumerate() {
        if t.end_ms < t.start_ms {
            return Err(TranscriptError::InvertedSpan {
                index,
                text: t.text.clone(),
                start_ms: t.start_ms,
                end_ms: t.end_ms,
            });
        }
        if t.start_ms < prev_start_ms {
            return Err(TranscriptError::OutOfOrder {
                index,
                text: t.text.clone(),
                start_ms: t.start_ms,
                prev_start_ms,
            });
        }
        prev_start_ms = t.start_ms;
    }

    Ok(())
}

/// Load a recognizer word list from a JSON document (an array of
/// `{word, start, end}` entries, seconds as floats).
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<RecognizerWord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TranscriptError::WordListNotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str, start_ms: i64, end_ms: i64) -> Token {
        Token {
            text: text.to_string(),
            start_ms,
            end_ms,
        }
    }

    #[test]
    fn assemble_rounds_seconds_to_ms() {
        let words = vec![RecognizerWord {
            word: "вопрос".into(),
            start: 0.4996,
            end: 1.0004,
        }];
        let tokens = assemble(&words);
        assert_eq!(tokens[0].start_ms, 500);
        assert_eq!(tokens[0].end_ms, 1000);
    }

    #[test]
    fn validate_accepts_ordered_stream() {
        let tokens = vec![tok("a", 0, 500), tok("b", 500, 900), tok("c", 500, 1200)];
        assert!(validate(&tokens).is_ok());
    }

    #[test]
    fn validate_rejects_inverted_span() {
        let tokens = vec![tok("a", 500, 300)];
        assert!(matches!(
            validate(&tokens),
            Err(TranscriptError::InvertedSpan { index: 0, .. })
        ));
    }

    #[test]
    fn validate_rejects_out_of_order_stream() {
        let tokens = vec![tok("a", 1000, 1500), tok("b", 400, 800)];
        assert!(matches!(
            validate(&tokens),
            Err(TranscriptError::OutOfOrder { index: 1, .. })
        ));
    }

    #[test]
    fn load_words_reads_json_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        std::fs::write(
            &path,
            r#"[{"word": "первый", "start": 0.0, "end": 0.5}]"#,
        )
        .unwrap();

        let words = load_words(&path).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "первый");
    }

    #[test]
    fn load_words_missing_file_is_fatal() {
        assert!(matches!(
            load_words("/nonexistent/words.json"),
            Err(TranscriptError::WordListNotFound(_))
        ));
    }
}
