use std::path::Path;

use anyhow::Context;

use quiz_audio_utils::{Clip, read_wav, write_wav};
use quiz_cue::{CueConfig, PhrasePattern};
use quiz_splice::{mix, splice_excisions};
use quiz_timeline::{TimelineConfig, TimelineMetadata, build_segments, load_questions};

use crate::config::{self, PausesConfig};

/// The excision pipeline: cut trigger words out of the narration, insert
/// timed pauses, reattach the hook, mix in music and bells, and emit the
/// corrected audio plus the timeline metadata.
pub fn run(config_path: &Path) -> anyhow::Result<()> {
    let cfg: PausesConfig = config::load(config_path)?;

    let words = quiz_transcript::load_words(&cfg.words_file)?;
    let tokens = quiz_transcript::assemble(&words);
    quiz_transcript::validate(&tokens)?;

    let source = read_wav(&cfg.input_file)?;
    let records = load_questions(&cfg.questions_file)?;

    let hook = cfg.hook_file.as_ref().map(read_wav).transpose()?;
    let initial_offset_ms = hook
        .as_ref()
        .map(|h| h.duration_ms() + cfg.hook_pause_ms)
        .unwrap_or(0);

    let cue_config = CueConfig::new(
        cfg.phrases_to_find
            .iter()
            .map(|p| PhrasePattern::new(p.iter()))
            .collect(),
        cfg.trigger_words.iter(),
        cfg.question_pause_ms,
    )
    .context("invalid cue configuration")?
    .with_initial_offset(initial_offset_ms);

    tracing::info!(tokens = tokens.len(), "running cue pass");
    let pass = quiz_cue::run(&tokens, &cue_config);
    tracing::info!(
        phrases = pass.occurrences.len(),
        pauses = pass.windows.len(),
        offset_ms = pass.offset_ms,
        "cue pass complete"
    );

    let filler = cfg.timer_sound_file.as_ref().map(read_wav).transpose()?;
    let narration = splice_excisions(&source, &pass.windows, filler.as_ref())?;

    let mut final_audio = match &hook {
        Some(hook) => mix::prepend_hook(&narration, hook, cfg.hook_pause_ms)?,
        None => narration,
    };

    if let Some(music_file) = &cfg.background_music_file {
        mix::overlay_music(&mut final_audio, &read_wav(music_file)?, cfg.music_gain_db)?;
    }

    if cfg.overlay_bells && !cfg.bell_sound_files.is_empty() {
        let bells = cfg
            .bell_sound_files
            .iter()
            .map(read_wav)
            .collect::<Result<Vec<_>, _>>()?;
        mix::overlay_bells(&mut final_audio, &bells, &pass.windows)?;
    }

    let timeline_config = TimelineConfig {
        question_end_offset_ms: cfg.question_end_offset_ms,
        answer_start_offset_ms: cfg.answer_start_offset_ms,
    };
    let segments = build_segments(&pass.occurrences, &pass.windows, &records, &timeline_config);
    let metadata = TimelineMetadata::new(segments, vec![], final_audio.duration_ms());

    write_output(&final_audio, &metadata, &cfg)
}

fn write_output(
    audio: &Clip,
    metadata: &TimelineMetadata,
    cfg: &PausesConfig,
) -> anyhow::Result<()> {
    write_wav(audio, &cfg.output_file)
        .with_context(|| format!("writing {}", cfg.output_file.display()))?;
    tracing::info!(path = %cfg.output_file.display(), "audio written");

    if let Some(timestamps_file) = &cfg.timestamps_file {
        metadata
            .write_json(timestamps_file)
            .with_context(|| format!("writing {}", timestamps_file.display()))?;
        tracing::info!(path = %timestamps_file.display(), "timeline metadata written");
    }
    Ok(())
}
