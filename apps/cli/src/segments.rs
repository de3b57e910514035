use std::path::Path;

use anyhow::Context;

use quiz_audio_utils::{Clip, read_wav, write_wav};
use quiz_cue::{PhrasePattern, scan};
use quiz_splice::{AssembleOptions, assemble, cut_segments, mix};
use quiz_timeline::load_questions;

use crate::config::{self, SegmentsConfig};

/// The assembled pipeline: find question and answer cues in the whole
/// transcript, cut the narration at their boundaries, and rebuild it with
/// timer, effect sounds and bonus bites between the pieces.
pub fn run(config_path: &Path) -> anyhow::Result<()> {
    let cfg: SegmentsConfig = config::load(config_path)?;

    let words = quiz_transcript::load_words(&cfg.words_file)?;
    let tokens = quiz_transcript::assemble(&words);
    quiz_transcript::validate(&tokens)?;

    let source = read_wav(&cfg.input_file)?;
    let records = match &cfg.questions_file {
        Some(path) => load_questions(path)?,
        None => vec![],
    };

    let question_patterns: Vec<PhrasePattern> = cfg
        .question_phrases
        .iter()
        .map(|p| PhrasePattern::new(p.split_whitespace()))
        .collect();
    let answer_pattern = vec![PhrasePattern::new(cfg.answer_phrase.split_whitespace())];

    let questions = scan(&tokens, &question_patterns);
    let answers = scan(&tokens, &answer_pattern);
    tracing::info!(
        questions = questions.len(),
        answers = answers.len(),
        "cue phrases located"
    );

    let cuts = cut_segments(&source, &questions, &answers);

    let mut options = AssembleOptions::new(read_wav(&cfg.timer_sound_file)?);
    options.question_end_bias_ms = cfg.question_end_bias_ms;
    options.hook = cfg.hook_file.as_ref().map(read_wav).transpose()?;
    options.question_sfx = load_gained(&cfg.question_sfx_files, cfg.sfx_gain_db)?;
    options.bells = load_gained(&cfg.bell_sound_files, cfg.bell_gain_db)?;
    for (number, path) in &cfg.bite_files {
        options.bites.insert(*number, read_wav(path)?);
    }

    let (mut final_audio, metadata) = assemble(&cuts, &records, &options)?;

    if let Some(music_file) = &cfg.background_music_file {
        mix::overlay_music(&mut final_audio, &read_wav(music_file)?, cfg.music_gain_db)?;
    }

    write_wav(&final_audio, &cfg.output_file)
        .with_context(|| format!("writing {}", cfg.output_file.display()))?;
    metadata
        .write_json(&cfg.metadata_file)
        .with_context(|| format!("writing {}", cfg.metadata_file.display()))?;
    tracing::info!(
        segments = metadata.segments.len(),
        duration_ms = metadata.total_duration_ms,
        "assembled audio and metadata written"
    );
    Ok(())
}

fn load_gained(paths: &[std::path::PathBuf], gain_db: f32) -> anyhow::Result<Vec<Clip>> {
    paths
        .iter()
        .map(|path| {
            let clip = read_wav(path).with_context(|| format!("loading {}", path.display()))?;
            Ok(clip.gain_db(gain_db))
        })
        .collect()
}
