use std::ops::Range;

use crate::{AudioError, Result};

/// Owned PCM audio, interleaved 16-bit samples, addressed by millisecond.
///
/// All millisecond arithmetic goes through one mapping
/// (`frame_at(ms) = ms * rate / 1000`), so adjacent slices tile exactly:
/// `slice_ms(a..b)` + `slice_ms(b..c)` reproduces `slice_ms(a..c)` sample
/// for sample. Splicing correctness depends on that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    samples: Vec<i16>,
    sample_rate: u32,
    channels: u16,
}

impl Clip {
    pub fn new(samples: Vec<i16>, sample_rate: u32, channels: u16) -> Result<Self> {
        if channels == 0 || samples.len() % channels as usize != 0 {
            return Err(AudioError::RaggedFrames {
                samples: samples.len(),
                channels,
            });
        }
        Ok(Self {
            samples,
            sample_rate,
            channels,
        })
    }

    pub fn empty(sample_rate: u32, channels: u16) -> Self {
        Self {
            samples: Vec::new(),
            sample_rate,
            channels,
        }
    }

    pub fn silence(duration_ms: i64, sample_rate: u32, channels: u16) -> Self {
        let frames = ms_to_frames(duration_ms, sample_rate);
        Self {
            samples: vec![0; frames * channels as usize],
            sample_rate,
            channels,
        }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_ms(&self) -> i64 {
        self.frames() as i64 * 1000 / self.sample_rate as i64
    }

    fn frame_at(&self, ms: i64) -> usize {
        ms_to_frames(ms, self.sample_rate).min(self.frames())
    }

    /// Copy out `range` (milliseconds), clamped to the clip bounds.
    pub fn slice_ms(&self, range: Range<i64>) -> Self {
        let start = self.frame_at(range.start.max(0));
        let end = self.frame_at(range.end.max(0)).max(start);
        let ch = self.channels as usize;
        Self {
            samples: self.samples[start * ch..end * ch].to_vec(),
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }

    /// Append another clip of the same format.
    pub fn append(&mut self, other: &Clip) -> Result<()> {
        self.check_format(other)?;
        self.samples.extend_from_slice(&other.samples);
        Ok(())
    }

    /// Repeat and truncate to exactly `target_ms`. An empty clip degrades
    /// to silence of the same duration, so a zero-length filler asset
    /// still yields a well-formed pause.
    pub fn looped_to_ms(&self, target_ms: i64) -> Self {
        let target_frames = ms_to_frames(target_ms.max(0), self.sample_rate);
        if self.is_empty() {
            return Self::silence(target_ms.max(0), self.sample_rate, self.channels);
        }

        let ch = self.channels as usize;
        let mut samples = Vec::with_capacity(target_frames * ch);
        while samples.len() < target_frames * ch {
            let want = target_frames * ch - samples.len();
            let take = want.min(self.samples.len());
            samples.extend_from_slice(&self.samples[..take]);
        }
        Self {
            samples,
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }

    /// Mix `other` on top of this clip starting at `position_ms`, with
    /// saturating addition.
    ///
    /// A position that would run past the end is pulled back so the
    /// overlay fits; an overlay longer than the clip is truncated. Both
    /// are recovered conditions, logged and never fatal.
    pub fn overlay_at_ms(&mut self, other: &Clip, position_ms: i64) -> Result<()> {
        self.check_format(other)?;
        let ch = self.channels as usize;

        let mut start_frame = self.frame_at(position_ms.max(0));
        if start_frame + other.frames() > self.frames() {
            let clamped = self.frames().saturating_sub(other.frames());
            tracing::warn!(
                position_ms,
                clip_ms = self.duration_ms(),
                overlay_ms = other.duration_ms(),
                "overlay past end of clip; clamping to buffer boundary"
            );
            start_frame = clamped;
        }

        let base = start_frame * ch;
        let n = other.samples.len().min(self.samples.len() - base);
        for (dst, src) in self.samples[base..base + n].iter_mut().zip(&other.samples[..n]) {
            *dst = dst.saturating_add(*src);
        }
        Ok(())
    }

    /// Scalar gain in decibels (negative attenuates).
    pub fn gain_db(&self, db: f32) -> Self {
        let scale = 10f32.powf(db / 20.0);
        Self {
            samples: self
                .samples
                .iter()
                .map(|&s| {
                    (s as f32 * scale)
                        .round()
                        .clamp(i16::MIN as f32, i16::MAX as f32) as i16
                })
                .collect(),
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }

    fn check_format(&self, other: &Clip) -> Result<()> {
        if self.sample_rate != other.sample_rate || self.channels != other.channels {
            return Err(AudioError::FormatMismatch {
                lhs_rate: self.sample_rate,
                lhs_channels: self.channels,
                rhs_rate: other.sample_rate,
                rhs_channels: other.channels,
            });
        }
        Ok(())
    }
}

fn ms_to_frames(ms: i64, sample_rate: u32) -> usize {
    // Saturating so an unbounded range end ("to the end of the clip")
    // cannot overflow; callers clamp to the real frame count.
    (ms.max(0).saturating_mul(sample_rate as i64) / 1000) as usize
}
