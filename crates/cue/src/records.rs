/// One confirmed occurrence of a cue phrase, in output-timeline
/// milliseconds (all offsets from earlier excisions already applied).
///
/// `number` is 1-based and assigned in match order across all patterns
/// combined; it is the join key the timeline builder pairs windows and
/// question text against.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PhraseOccurrence {
    pub number: u32,
    pub pattern: String,
    pub start_ms: i64,
    pub end_ms: i64,
}

/// One trigger-word excision: the token's span in the source audio and
/// the span of the inserted replacement segment in the output timeline.
///
/// `number` carries the sequence number of the phrase occurrence that
/// completed most recently before this trigger fired — `None` if the
/// trigger came before any phrase completed. Joining on this key (rather
/// than on list position) keeps a stray trigger from shifting every later
/// question/answer pairing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExcisionWindow {
    pub number: Option<u32>,
    pub source_start_ms: i64,
    pub source_end_ms: i64,
    pub replacement_start_ms: i64,
    pub replacement_end_ms: i64,
}

impl ExcisionWindow {
    /// Net timeline change this excision introduced.
    pub fn delta_ms(&self) -> i64 {
        (self.replacement_end_ms - self.replacement_start_ms)
            - (self.source_end_ms - self.source_start_ms)
    }
}

/// Everything one pass over the token stream produced. Immutable once
/// returned; later (possibly parallel) audio rendering treats `windows`
/// as read-only.
#[derive(Debug, Clone)]
pub struct CuePass {
    /// In strictly increasing `number`, non-decreasing `start_ms`.
    pub occurrences: Vec<PhraseOccurrence>,
    /// In stream order.
    pub windows: Vec<ExcisionWindow>,
    /// Final cumulative offset: `initial_offset_ms` plus the sum of all
    /// excision deltas. The spliced audio's duration must differ from the
    /// source by exactly `offset_ms − initial_offset_ms`.
    pub offset_ms: i64,
}
