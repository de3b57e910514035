mod clip;
mod error;
mod wav;

pub use clip::Clip;
pub use error::AudioError;
pub use wav::{read_wav, write_wav};

pub type Result<T> = std::result::Result<T, AudioError>;
