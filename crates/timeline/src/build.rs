use std::collections::BTreeMap;

use quiz_cue::{ExcisionWindow, PhraseOccurrence};

use crate::NO_DATA;
use crate::questions::QuestionRecord;
use crate::types::{OpenRange, Segment, TimeRange};

/// Biases applied around each pause boundary. The defaults are the tuned
/// production values; they have no derivation beyond listening tests, so
/// they stay named and overridable rather than baked in.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct TimelineConfig {
    pub question_end_offset_ms: i64,
    pub answer_start_offset_ms: i64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            question_end_offset_ms: -400,
            answer_start_offset_ms: 200,
        }
    }
}

/// Join phrase occurrences with excision windows and question text into
/// ordered segments.
///
/// The join is keyed on the shared sequence number stamped at detection
/// time, not on list position: a stray trigger (window with no number, or
/// a duplicate number) cannot shift every later pairing. Divergence is a
/// configuration/transcription mismatch, reported and skipped, never
/// fatal — the builder emits every pair it can.
pub fn build_segments(
    occurrences: &[PhraseOccurrence],
    windows: &[ExcisionWindow],
    records: &[QuestionRecord],
    config: &TimelineConfig,
) -> Vec<Segment> {
    let mut by_number: BTreeMap<u32, &ExcisionWindow> = BTreeMap::new();
    for window in windows {
        let Some(number) = window.number else {
            tracing::warn!(
                start_ms = window.replacement_start_ms,
                "excision window precedes every phrase; skipped"
            );
            continue;
        };
        match by_number.entry(number) {
            std::collections::btree_map::Entry::Vacant(entry) => {
                entry.insert(window);
            }
            std::collections::btree_map::Entry::Occupied(_) => {
                tracing::warn!(number, "duplicate excision window for phrase; keeping first");
            }
        }
    }

    let mut segments = Vec::with_capacity(occurrences.len());
    for (i, occurrence) in occurrences.iter().enumerate() {
        let Some(window) = by_number.get(&occurrence.number) else {
            tracing::warn!(
                number = occurrence.number,
                pattern = %occurrence.pattern,
                "phrase occurrence has no paired excision window; skipped"
            );
            continue;
        };

        let pause_end_ms = window.replacement_end_ms;
        let next_start_ms = occurrences.get(i + 1).map(|next| next.start_ms);

        let (question_text, answer_text) = match records
            .iter()
            .find(|r| r.number == occurrence.number)
        {
            Some(record) => (record.question.clone(), record.answer.clone()),
            None => {
                tracing::warn!(number = occurrence.number, "no question record; using placeholder");
                (NO_DATA.to_string(), NO_DATA.to_string())
            }
        };

        segments.push(Segment {
            number: occurrence.number,
            question: TimeRange {
                start_ms: occurrence.start_ms,
                end_ms: pause_end_ms + config.question_end_offset_ms,
            },
            answer: OpenRange {
                start_ms: pause_end_ms + config.answer_start_offset_ms,
                end_ms: next_start_ms,
            },
            question_text,
            answer_text,
        });
    }

    segments
}
