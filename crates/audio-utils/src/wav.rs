use std::path::Path;

use crate::{AudioError, Clip, Result};

/// Read a 16-bit PCM WAV file into a [`Clip`].
pub fn read_wav(path: impl AsRef<Path>) -> Result<Clip> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AudioError::NotFound(path.to_path_buf()));
    }

    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(AudioError::UnsupportedFormat {
            bits: spec.bits_per_sample,
            format: match spec.sample_format {
                hound::SampleFormat::Int => "int",
                hound::SampleFormat::Float => "float",
            },
        });
    }

    let samples = reader.samples::<i16>().collect::<std::result::Result<Vec<_>, _>>()?;
    Clip::new(samples, spec.sample_rate, spec.channels)
}

/// Write a [`Clip`] as 16-bit PCM WAV.
pub fn write_wav(clip: &Clip, path: impl AsRef<Path>) -> Result<()> {
    let spec = hound::WavSpec {
        channels: clip.channels(),
        sample_rate: clip.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in clip.samples() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_clip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        let clip = Clip::new(vec![0, 100, -100, 32000], 16000, 2).unwrap();

        write_wav(&clip, &path).unwrap();
        let back = read_wav(&path).unwrap();

        assert_eq!(back, clip);
    }

    #[test]
    fn missing_file_is_fatal() {
        assert!(matches!(
            read_wav("/nonexistent/voice.wav"),
            Err(AudioError::NotFound(_))
        ));
    }
}
