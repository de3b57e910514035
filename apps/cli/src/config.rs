use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use serde::de::DeserializeOwned;

fn default_hook_pause_ms() -> i64 {
    200
}

fn default_question_pause_ms() -> i64 {
    3000
}

fn default_music_gain_db() -> f32 {
    -10.0
}

fn default_question_end_offset_ms() -> i64 {
    -400
}

fn default_answer_start_offset_ms() -> i64 {
    200
}

fn default_overlay_bells() -> bool {
    true
}

fn default_question_end_bias_ms() -> i64 {
    2700
}

fn default_sfx_gain_db() -> f32 {
    -5.0
}

fn default_bell_gain_db() -> f32 {
    -10.0
}

/// Configuration for the `pauses` pipeline. Every option is enumerated
/// and defaulted here; nothing downstream probes for optional keys.
#[derive(Debug, Deserialize)]
pub struct PausesConfig {
    pub input_file: PathBuf,
    pub words_file: PathBuf,
    pub questions_file: PathBuf,
    pub output_file: PathBuf,
    pub timestamps_file: Option<PathBuf>,

    pub hook_file: Option<PathBuf>,
    pub timer_sound_file: Option<PathBuf>,
    pub background_music_file: Option<PathBuf>,
    #[serde(default)]
    pub bell_sound_files: Vec<PathBuf>,

    #[serde(default = "default_hook_pause_ms")]
    pub hook_pause_ms: i64,
    #[serde(default = "default_question_pause_ms")]
    pub question_pause_ms: i64,
    #[serde(default = "default_music_gain_db")]
    pub music_gain_db: f32,
    #[serde(default = "default_question_end_offset_ms")]
    pub question_end_offset_ms: i64,
    #[serde(default = "default_answer_start_offset_ms")]
    pub answer_start_offset_ms: i64,
    #[serde(default = "default_overlay_bells")]
    pub overlay_bells: bool,

    pub phrases_to_find: Vec<Vec<String>>,
    pub trigger_words: Vec<String>,
}

/// Configuration for the `segments` pipeline (whole-transcript phrase
/// search, no excision). Phrases are given as space-separated strings.
#[derive(Debug, Deserialize)]
pub struct SegmentsConfig {
    pub input_file: PathBuf,
    pub words_file: PathBuf,
    pub questions_file: Option<PathBuf>,
    pub output_file: PathBuf,
    pub metadata_file: PathBuf,

    pub timer_sound_file: PathBuf,
    pub hook_file: Option<PathBuf>,
    pub background_music_file: Option<PathBuf>,
    #[serde(default)]
    pub question_sfx_files: Vec<PathBuf>,
    #[serde(default)]
    pub bell_sound_files: Vec<PathBuf>,
    /// Bonus clips keyed by question number, appended after that
    /// question's answer.
    #[serde(default)]
    pub bite_files: BTreeMap<u32, PathBuf>,

    #[serde(default = "default_question_end_bias_ms")]
    pub question_end_bias_ms: i64,
    #[serde(default = "default_music_gain_db")]
    pub music_gain_db: f32,
    #[serde(default = "default_sfx_gain_db")]
    pub sfx_gain_db: f32,
    #[serde(default = "default_bell_gain_db")]
    pub bell_gain_db: f32,

    pub question_phrases: Vec<String>,
    pub answer_phrase: String,
}

pub fn load<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing config {}", path.display()))
}
