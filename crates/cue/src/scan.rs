use quiz_transcript::Token;

use crate::config::PhrasePattern;
use crate::records::PhraseOccurrence;

/// Whole-transcript phrase search: the non-streaming policy used when no
/// trigger-word excision is in play.
///
/// Scans the materialized token list once per pattern and reports every
/// exact contiguous occurrence, in pattern declaration order then stream
/// order, numbered sequentially across all hits. Phrases appearing zero
/// times are fine; timestamps stay in the source timeline (no offset
/// arithmetic happens here).
pub fn scan(tokens: &[Token], patterns: &[PhrasePattern]) -> Vec<PhraseOccurrence> {
    let lowered: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
    let mut found = Vec::new();

    for pattern in patterns {
        if pattern.is_empty() || pattern.len() > tokens.len() {
            continue;
        }
        for start in 0..=(tokens.len() - pattern.len()) {
            let matches = (0..pattern.len())
                .all(|j| pattern.word(j) == Some(lowered[start + j].as_str()));
            if matches {
                found.push(PhraseOccurrence {
                    number: found.len() as u32 + 1,
                    pattern: pattern.joined(),
                    start_ms: tokens[start].start_ms,
                    end_ms: tokens[start + pattern.len() - 1].end_ms,
                });
            }
        }
    }

    found
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

    fn stream() -> Vec<Token> {
        vec![
            tok("первый", 0, 400),
            tok("вопрос", 400, 900),
            tok("ответ", 2000, 2400),
            tok("второй", 4000, 4400),
            tok("вопрос", 4400, 4900),
            tok("ответ", 6000, 6400),
        ]
    }

    #[test]
    fn finds_each_pattern_in_declaration_order() {
        let patterns = vec![
            PhrasePattern::new(["первый", "вопрос"]),
            PhrasePattern::new(["второй", "вопрос"]),
        ];
        let found = scan(&stream(), &patterns);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].pattern, "первый вопрос");
        assert_eq!((found[0].start_ms, found[0].end_ms), (0, 900));
        assert_eq!(found[1].number, 2);
        assert_eq!((found[1].start_ms, found[1].end_ms), (4000, 4900));
    }

    #[test]
    fn reports_repeated_occurrences_of_one_pattern() {
        let patterns = vec![PhrasePattern::new(["ответ"])];
        let found = scan(&stream(), &patterns);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].start_ms, 2000);
        assert_eq!(found[1].start_ms, 6000);
    }

    #[test]
    fn absent_pattern_yields_nothing() {
        let patterns = vec![PhrasePattern::new(["десятый", "вопрос"])];
        assert!(scan(&stream(), &patterns).is_empty());
    }

    #[test]
    fn pattern_longer_than_stream_is_skipped() {
        let patterns = vec![PhrasePattern::new(["a", "b", "c"])];
        assert!(scan(&[tok("a", 0, 100)], &patterns).is_empty());
    }
}
