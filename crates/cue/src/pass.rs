use quiz_transcript::Token;

use crate::config::CueConfig;
use crate::records::{CuePass, ExcisionWindow, PhraseOccurrence};

/// A partially matched phrase: which pattern, how many words confirmed,
/// and where the match began in the output timeline. Created when a
/// pattern's first word matches, advanced or discarded per token,
/// destroyed on mismatch or completion. Never outlives the pass.
#[derive(Debug)]
struct ActiveMatch {
    pattern_index: usize,
    matched_count: usize,
    match_start_ms: i64,
}

/// Fold state threaded through the per-token step. The cumulative offset
/// is part of this value, not module state: the step consumes a state and
/// returns the next one, so the pass is a plain sequential fold.
struct PassState {
    active: Vec<ActiveMatch>,
    occurrences: Vec<PhraseOccurrence>,
    windows: Vec<ExcisionWindow>,
    offset_ms: i64,
}

impl PassState {
    fn new(initial_offset_ms: i64) -> Self {
        Self {
            active: Vec::new(),
            occurrences: Vec::new(),
            windows: Vec::new(),
            offset_ms: initial_offset_ms,
        }
    }

    fn next_number(&self) -> u32 {
        self.occurrences.len() as u32 + 1
    }

    fn last_number(&self) -> Option<u32> {
        self.occurrences.last().map(|o| o.number)
    }

    fn finish(self) -> CuePass {
        CuePass {
            occurrences: self.occurrences,
            windows: self.windows,
            offset_ms: self.offset_ms,
        }
    }
}

/// Run the streaming pass: phrase matching and trigger excision over one
/// forward iteration of the token stream, in lock-step.
pub fn run(tokens: &[Token], config: &CueConfig) -> CuePass {
    let state = tokens
        .iter()
        .fold(PassState::new(config.initial_offset_ms), |state, token| {
            step(state, token, config)
        });

    tracing::debug!(
        occurrences = state.occurrences.len(),
        windows = state.windows.len(),
        offset_ms = state.offset_ms,
        "cue pass complete"
    );
    state.finish()
}

fn step(mut state: PassState, token: &Token, config: &CueConfig) -> PassState {
    let lowered = token.text.to_lowercase();

    // A trigger token is consumed entirely by excision: it neither
    // advances nor starts an active match. Active matches survive it.
    if config.is_trigger(&lowered) {
        excise(&mut state, token, config);
        return state;
    }

    advance_matches(&mut state, token, &lowered, config);
    start_matches(&mut state, token, &lowered, config);
    state
}

fn excise(state: &mut PassState, token: &Token, config: &CueConfig) {
    let replacement_start_ms = token.start_ms + state.offset_ms;
    let window = ExcisionWindow {
        number: state.last_number(),
        source_start_ms: token.start_ms,
        source_end_ms: token.end_ms,
        replacement_start_ms,
        replacement_end_ms: replacement_start_ms + config.pause_ms,
    };

    if window.number.is_none() {
        tracing::warn!(
            start_ms = token.start_ms,
            word = %token.text,
            "trigger word before any completed phrase; window will not pair"
        );
    }

    state.offset_ms += config.pause_ms - token.duration_ms();
    state.windows.push(window);
}

/// Advance every active match; matches whose next expected word is not
/// this token are discarded (no backtracking, no re-anchoring).
/// Completions within a single token resolve in pattern declaration
/// order.
fn advance_matches(state: &mut PassState, token: &Token, lowered: &str, config: &CueConfig) {
    let mut completed: Vec<ActiveMatch> = Vec::new();
    let mut survivors: Vec<ActiveMatch> = Vec::new();

    for mut m in state.active.drain(..) {
        let pattern = &config.phrases[m.pattern_index];
        if pattern.word(m.matched_count) == Some(lowered) {
            m.matched_count += 1;
            if m.matched_count == pattern.len() {
                completed.push(m);
            } else {
                survivors.push(m);
            }
        }
        // else: dropped.
    }

    completed.sort_by_key(|m| m.pattern_index);
    for m in completed {
        emit_occurrence(state, m.pattern_index, m.match_start_ms, token, config);
    }
    state.active = survivors;
}

/// Independently of advancement, any pattern whose first word equals the
/// current token starts a new active match. Single-word patterns complete
/// immediately.
fn start_matches(state: &mut PassState, token: &Token, lowered: &str, config: &CueConfig) {
    for (pattern_index, pattern) in config.phrases.iter().enumerate() {
        if pattern.first() != Some(lowered) {
            continue;
        }
        let match_start_ms = token.start_ms + state.offset_ms;
        if pattern.len() == 1 {
            emit_occurrence(state, pattern_index, match_start_ms, token, config);
        } else {
            state.active.push(ActiveMatch {
                pattern_index,
                matched_count: 1,
                match_start_ms,
            });
        }
    }
}

fn emit_occurrence(
    state: &mut PassState,
    pattern_index: usize,
    match_start_ms: i64,
    end_token: &Token,
    config: &CueConfig,
) {
    let occurrence = PhraseOccurrence {
        number: state.next_number(),
        pattern: config.phrases[pattern_index].joined(),
        start_ms: match_start_ms,
        end_ms: end_token.end_ms + state.offset_ms,
    };
    tracing::debug!(
        number = occurrence.number,
        pattern = %occurrence.pattern,
        start_ms = occurrence.start_ms,
        "phrase matched"
    );
    state.occurrences.push(occurrence);
}
