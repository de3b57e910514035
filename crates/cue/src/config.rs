use std::collections::HashSet;

#[derive(Debug, thiserror::Error)]
pub enum CueError {
    #[error("phrase pattern {0} is empty")]
    EmptyPattern(usize),

    #[error("phrase pattern {pattern} has an empty word at position {position}")]
    EmptyWord { pattern: usize, position: usize },

    #[error("trigger word {0} is empty")]
    EmptyTrigger(usize),

    #[error("pause duration must be positive, got {0} ms")]
    NonPositivePause(i64),
}

/// An ordered sequence of words that must appear contiguously to
/// constitute a cue phrase. Words are held lower-cased; matching is
/// literal token equality after case folding, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PhrasePattern {
    words: Vec<String>,
}

impl PhrasePattern {
    pub fn new(words: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.word(0)
    }

    /// Space-joined form, used in emitted occurrence records.
    pub fn joined(&self) -> String {
        self.words.join(" ")
    }
}

/// Everything the single pass needs, validated once at construction.
///
/// The redesign here is deliberate: no optional behavior is probed during
/// the pass. Every knob is enumerated, lower-cased and checked up front,
/// and the config is immutable for the run.
#[derive(Debug, Clone)]
pub struct CueConfig {
    pub(crate) phrases: Vec<PhrasePattern>,
    pub(crate) triggers: HashSet<String>,
    /// Fixed duration of every replacement segment, independent of the
    /// spoken trigger word's duration.
    pub pause_ms: i64,
    /// Offset the whole pass starts from, e.g. the duration of a hook
    /// clip prepended before the narration.
    pub initial_offset_ms: i64,
}

impl CueConfig {
    pub fn new(
        phrases: Vec<PhrasePattern>,
        trigger_words: impl IntoIterator<Item = impl AsRef<str>>,
        pause_ms: i64,
    ) -> Result<Self, CueError> {
        if pause_ms <= 0 {
            return Err(CueError::NonPositivePause(pause_ms));
        }

        for (i, pattern) in phrases.iter().enumerate() {
            if pattern.is_empty() {
                return Err(CueError::EmptyPattern(i));
            }
            for (j, word) in pattern.words.iter().enumerate() {
                if word.is_empty() {
                    return Err(CueError::EmptyWord {
                        pattern: i,
                        position: j,
                    });
                }
            }
        }

        let mut triggers = HashSet::new();
        for (i, word) in trigger_words.into_iter().enumerate() {
            let lower = word.as_ref().to_lowercase();
            if lower.is_empty() {
                return Err(CueError::EmptyTrigger(i));
            }
            triggers.insert(lower);
        }

        Ok(Self {
            phrases,
            triggers,
            pause_ms,
            initial_offset_ms: 0,
        })
    }

    pub fn with_initial_offset(mut self, offset_ms: i64) -> Self {
        self.initial_offset_ms = offset_ms;
        self
    }

    pub(crate) fn is_trigger(&self, lowered: &str) -> bool {
        self.triggers.contains(lowered)
    }
}
