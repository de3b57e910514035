//! End-to-end pipeline: token stream → cue pass → splice → timeline.
//!
//! All clips are 1 kHz mono so one sample is one millisecond and every
//! duration assertion is exact.

use quiz_audio_utils::Clip;
use quiz_cue::{CueConfig, PhrasePattern};
use quiz_splice::{expected_output_ms, mix, splice_excisions};
use quiz_timeline::{QuestionRecord, TimelineConfig, TimelineMetadata, build_segments};
use quiz_transcript::Token;

fn tok(text: &str, start_ms: i64, end_ms: i64) -> Token {
    Token {
        text: text.to_string(),
        start_ms,
        end_ms,
    }
}

fn clip(samples: Vec<i16>) -> Clip {
    Clip::new(samples, 1000, 1).unwrap()
}

fn quiz_config(pause_ms: i64) -> CueConfig {
    CueConfig::new(
        vec![
            PhrasePattern::new(["первый", "вопрос"]),
            PhrasePattern::new(["следующий", "вопрос"]),
        ],
        ["ответ"],
        pause_ms,
    )
    .unwrap()
}

#[test]
fn no_triggers_leaves_audio_byte_identical() {
    let tokens = vec![tok("первый", 0, 500), tok("вопрос", 500, 1000)];
    let source = clip((0..2000).map(|i| (i % 17) as i16).collect());

    let pass = quiz_cue::run(&tokens, &quiz_config(3000));
    assert_eq!(pass.offset_ms, 0);

    let out = splice_excisions(&source, &pass.windows, None).unwrap();
    assert_eq!(out, source);
}

#[test]
fn spliced_duration_tracks_cumulative_offset_exactly() {
    let tokens = vec![
        tok("первый", 0, 500),
        tok("вопрос", 500, 1000),
        tok("ответ", 2000, 2500),
        tok("следующий", 4000, 4600),
        tok("вопрос", 4600, 5000),
        tok("ответ", 6000, 6800),
    ];
    let source = clip(vec![3; 8000]);
    let pass = quiz_cue::run(&tokens, &quiz_config(3000));

    let out = splice_excisions(&source, &pass.windows, Some(&clip(vec![1, 2]))).unwrap();

    assert_eq!(out.duration_ms(), source.duration_ms() + pass.offset_ms);
    assert_eq!(out.duration_ms(), expected_output_ms(&source, &pass.windows));
}

#[test]
fn hook_offset_flows_through_splice_bells_and_metadata() {
    let hook = clip(vec![5; 1000]);
    let hook_pause_ms = 200;
    let initial_offset_ms = hook.duration_ms() + hook_pause_ms;

    let tokens = vec![
        tok("первый", 0, 500),
        tok("вопрос", 500, 1000),
        tok("ответ", 2000, 2500),
    ];
    let source = clip(vec![3; 6000]);

    let config = quiz_config(3000).with_initial_offset(initial_offset_ms);
    let pass = quiz_cue::run(&tokens, &config);

    let narration = splice_excisions(&source, &pass.windows, None).unwrap();
    let mut final_audio = mix::prepend_hook(&narration, &hook, hook_pause_ms).unwrap();

    // Total output: hook + pause + (source + excision deltas).
    assert_eq!(
        final_audio.duration_ms(),
        initial_offset_ms + source.duration_ms() + (pass.offset_ms - initial_offset_ms)
    );

    // Bells land at pause ends, positioned in the final (hook-shifted)
    // timeline. The window's replacement span already carries the offset.
    let bells = vec![clip(vec![9, 9])];
    mix::overlay_bells(&mut final_audio, &bells, &pass.windows).unwrap();
    let bell_at = pass.windows[0].replacement_end_ms as usize;
    assert_eq!(
        &final_audio.samples()[bell_at..bell_at + 2],
        &[3 + 9, 3 + 9]
    );

    let records = vec![QuestionRecord {
        number: 1,
        question: "Столица Франции?".into(),
        answer: "Париж".into(),
    }];
    let segments = build_segments(
        &pass.occurrences,
        &pass.windows,
        &records,
        &TimelineConfig::default(),
    );
    let metadata = TimelineMetadata::new(segments, vec![], final_audio.duration_ms());

    assert_eq!(metadata.segments.len(), 1);
    let segment = &metadata.segments[0];
    assert_eq!(segment.number, 1);
    // Question starts where the phrase started, shifted by the hook.
    assert_eq!(segment.question.start_ms, initial_offset_ms);
    // Pause runs 2000 + hook offset for 3000 ms; biases apply on top.
    let pause_end = 2000 + initial_offset_ms + 3000;
    assert_eq!(segment.question.end_ms, pause_end - 400);
    assert_eq!(segment.answer.start_ms, pause_end + 200);
    assert_eq!(segment.answer.end_ms, None);
    assert_eq!(segment.answer_text, "Париж");

    let json: serde_json::Value =
        serde_json::from_str(&metadata.to_json_string().unwrap()).unwrap();
    assert_eq!(json["audio_duration"], final_audio.duration_ms());
    assert_eq!(json["combined_data"][0]["number"], 1);
}
