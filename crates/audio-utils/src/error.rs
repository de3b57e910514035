use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),

    #[error("audio file not found: {0}")]
    NotFound(std::path::PathBuf),

    #[error("unsupported wav format: {bits} bit {format}")]
    UnsupportedFormat { bits: u16, format: &'static str },

    #[error(
        "clip format mismatch: {lhs_rate} Hz / {lhs_channels} ch vs {rhs_rate} Hz / {rhs_channels} ch"
    )]
    FormatMismatch {
        lhs_rate: u32,
        lhs_channels: u16,
        rhs_rate: u32,
        rhs_channels: u16,
    },

    #[error("sample buffer length {samples} is not a multiple of {channels} channels")]
    RaggedFrames { samples: usize, channels: u16 },
}
