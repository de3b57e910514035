use std::path::Path;

use crate::Result;

/// Closed millisecond range. Serialized with the `start_time`/`end_time`
/// key names the downstream renderers consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeRange {
    #[serde(rename = "start_time")]
    pub start_ms: i64,
    #[serde(rename = "end_time")]
    pub end_ms: i64,
}

/// Range whose end may be unbounded (the final segment's answer runs to
/// the end of the audio). An open end serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OpenRange {
    #[serde(rename = "start_time")]
    pub start_ms: i64,
    #[serde(rename = "end_time")]
    pub end_ms: Option<i64>,
}

/// One logical question/answer unit: the unit downstream image and video
/// rendering indexes by `number` and cues from verbatim.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub number: u32,
    pub question: TimeRange,
    pub answer: OpenRange,
    pub question_text: String,
    pub answer_text: String,
}

/// An extra clip inserted into the assembled audio (a promo bite after a
/// given question), stamped with its output-timeline span.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Bite {
    #[serde(rename = "type")]
    pub label: String,
    #[serde(rename = "start_time")]
    pub start_ms: i64,
    #[serde(rename = "end_time")]
    pub end_ms: i64,
}

/// The sole persisted artifact of the pass: all segments plus the final
/// output duration, serialized with the wire names (`combined_data`,
/// `audio_duration`) the rendering side already reads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimelineMetadata {
    #[serde(rename = "combined_data")]
    pub segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bites: Vec<Bite>,
    #[serde(rename = "audio_duration")]
    pub total_duration_ms: i64,
}

impl TimelineMetadata {
    pub fn new(segments: Vec<Segment>, bites: Vec<Bite>, total_duration_ms: i64) -> Self {
        Self {
            segments,
            bites,
            total_duration_ms,
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
