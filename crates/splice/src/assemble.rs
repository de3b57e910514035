use std::collections::BTreeMap;

use quiz_audio_utils::{Clip, Result};
use quiz_cue::PhraseOccurrence;
use quiz_timeline::{Bite, NO_DATA, OpenRange, QuestionRecord, Segment, TimeRange, TimelineMetadata};

/// One question/answer pair cut out of the source narration at phrase
/// boundaries.
#[derive(Debug, Clone)]
pub struct QuizCut {
    pub number: u32,
    pub question: Clip,
    pub answer: Clip,
}

/// Slice the source at phrase-occurrence boundaries: question audio runs
/// from the end of the i-th question phrase to the start of the i-th
/// answer cue, answer audio from the end of that cue to the start of the
/// next question phrase (or the end of the clip). Pairing stops at the
/// shorter list; the mismatch is reported, not fatal.
pub fn cut_segments(
    source: &Clip,
    questions: &[PhraseOccurrence],
    answers: &[PhraseOccurrence],
) -> Vec<QuizCut> {
    if questions.len() != answers.len() {
        tracing::warn!(
            questions = questions.len(),
            answers = answers.len(),
            "question/answer cue counts diverge; pairing up to the shorter list"
        );
    }

    let pairs = questions.len().min(answers.len());
    let mut cuts = Vec::with_capacity(pairs);

    for i in 0..pairs {
        let question_end = questions[i].end_ms;
        let answer = &answers[i];
        let next_question_start = questions
            .get(i + 1)
            .map(|q| q.start_ms)
            .unwrap_or_else(|| source.duration_ms());

        cuts.push(QuizCut {
            number: i as u32 + 1,
            question: source.slice_ms(question_end..answer.start_ms),
            answer: source.slice_ms(answer.end_ms..next_question_start),
        });
    }

    cuts
}

/// Knobs for the assembled (segment-policy) output.
///
/// `question_end_bias_ms` widens the question window past the timer start;
/// it is a tuned value with no derivation, kept overridable. The sfx and
/// bell sets rotate per question. `bites` maps a question number to a
/// bonus clip appended right after that question's answer.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    pub question_end_bias_ms: i64,
    pub question_sfx: Vec<Clip>,
    pub bells: Vec<Clip>,
    pub timer: Clip,
    pub hook: Option<Clip>,
    pub bites: BTreeMap<u32, Clip>,
}

impl AssembleOptions {
    pub fn new(timer: Clip) -> Self {
        Self {
            question_end_bias_ms: 2700,
            question_sfx: Vec::new(),
            bells: Vec::new(),
            timer,
            hook: None,
            bites: BTreeMap::new(),
        }
    }
}

/// Rebuild the final audio from the cuts and stamp the timeline as it
/// goes: hook, then per cut question + timer + answer (+ bonus bite),
/// with a running clock providing every segment boundary.
pub fn assemble(
    cuts: &[QuizCut],
    records: &[QuestionRecord],
    options: &AssembleOptions,
) -> Result<(Clip, TimelineMetadata)> {
    let format_of = |clip: &Clip| (clip.sample_rate(), clip.channels());
    let (rate, channels) = cuts
        .first()
        .map(|c| format_of(&c.question))
        .or_else(|| options.hook.as_ref().map(format_of))
        .unwrap_or((16000, 1));

    let mut final_audio = Clip::empty(rate, channels);
    let mut current_ms = 0i64;
    let mut segments = Vec::with_capacity(cuts.len());
    let mut bites = Vec::new();

    if let Some(hook) = &options.hook {
        final_audio.append(hook)?;
        current_ms += hook.duration_ms();
    }

    for (i, cut) in cuts.iter().enumerate() {
        let mut question = cut.question.clone();
        if let Some(sfx) = rotating(&options.question_sfx, i) {
            question.overlay_at_ms(sfx, 0)?;
        }
        let mut answer = cut.answer.clone();
        if let Some(bell) = rotating(&options.bells, i) {
            answer.overlay_at_ms(bell, 0)?;
        }

        let question_start_ms = current_ms;
        current_ms += question.duration_ms();
        let question_end_ms = current_ms + options.question_end_bias_ms;
        final_audio.append(&question)?;

        final_audio.append(&options.timer)?;
        current_ms += options.timer.duration_ms();

        let answer_start_ms = current_ms;
        current_ms += answer.duration_ms();
        let answer_end_ms = current_ms;
        final_audio.append(&answer)?;

        let (question_text, answer_text) = match records.iter().find(|r| r.number == cut.number) {
            Some(r) => (r.question.clone(), r.answer.clone()),
            None => (NO_DATA.to_string(), NO_DATA.to_string()),
        };

        segments.push(Segment {
            number: cut.number,
            question: TimeRange {
                start_ms: question_start_ms,
                end_ms: question_end_ms,
            },
            answer: OpenRange {
                start_ms: answer_start_ms,
                end_ms: Some(answer_end_ms),
            },
            question_text,
            answer_text,
        });

        if let Some(bite) = options.bites.get(&cut.number) {
            final_audio.append(bite)?;
            bites.push(Bite {
                label: format!("custom_sound_{}", cut.number),
                start_ms: current_ms,
                end_ms: current_ms + bite.duration_ms(),
            });
            current_ms += bite.duration_ms();
        }
    }

    let total_ms = final_audio.duration_ms();
    Ok((final_audio, TimelineMetadata::new(segments, bites, total_ms)))
}

fn rotating<T>(set: &[T], index: usize) -> Option<&T> {
    if set.is_empty() {
        None
    } else {
        Some(&set[index % set.len()])
    }
}
