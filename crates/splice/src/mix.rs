//! Mixdown steps: hook prepend, looped background music, bell overlays.

use quiz_audio_utils::{Clip, Result};
use quiz_cue::ExcisionWindow;

/// Hook clip, a short silence, then the narration. The hook plus pause
/// duration is what the cue pass receives as its initial offset.
pub fn prepend_hook(narration: &Clip, hook: &Clip, hook_pause_ms: i64) -> Result<Clip> {
    let mut output = hook.clone();
    output.append(&Clip::silence(
        hook_pause_ms,
        hook.sample_rate(),
        hook.channels(),
    ))?;
    output.append(narration)?;
    Ok(output)
}

/// Loop the music over the whole clip at reduced gain.
pub fn overlay_music(clip: &mut Clip, music: &Clip, gain_db: f32) -> Result<()> {
    if music.is_empty() {
        tracing::warn!("background music clip is empty; skipping overlay");
        return Ok(());
    }
    let looped = music.gain_db(gain_db).looped_to_ms(clip.duration_ms());
    clip.overlay_at_ms(&looped, 0)
}

/// One bell at the end of each pause, rotating through the bell set.
/// Positions past the buffer end are pulled back by the overlay itself.
pub fn overlay_bells(clip: &mut Clip, bells: &[Clip], windows: &[ExcisionWindow]) -> Result<()> {
    if bells.is_empty() {
        return Ok(());
    }
    for (i, window) in windows.iter().enumerate() {
        let bell = &bells[i % bells.len()];
        clip.overlay_at_ms(bell, window.replacement_end_ms)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(samples: Vec<i16>) -> Clip {
        Clip::new(samples, 1000, 1).unwrap()
    }

    fn window(replacement_end_ms: i64) -> ExcisionWindow {
        ExcisionWindow {
            number: Some(1),
            source_start_ms: 0,
            source_end_ms: 0,
            replacement_start_ms: replacement_end_ms - 10,
            replacement_end_ms,
        }
    }

    #[test]
    fn hook_pause_narration_in_order() {
        let narration = clip(vec![3; 10]);
        let hook = clip(vec![7; 5]);

        let out = prepend_hook(&narration, &hook, 4).unwrap();

        assert_eq!(out.duration_ms(), 5 + 4 + 10);
        assert_eq!(&out.samples()[..5], &[7; 5]);
        assert_eq!(&out.samples()[5..9], &[0; 4]);
        assert_eq!(&out.samples()[9..], &[3; 10]);
    }

    #[test]
    fn music_loops_across_whole_clip() {
        let mut base = clip(vec![0; 10]);
        let music = clip(vec![100, 100, 100]);

        overlay_music(&mut base, &music, 0.0).unwrap();
        assert!(base.samples().iter().all(|&s| s == 100));
    }

    #[test]
    fn empty_music_is_skipped() {
        let mut base = clip(vec![1; 10]);
        overlay_music(&mut base, &Clip::empty(1000, 1), -10.0).unwrap();
        assert_eq!(base.samples(), &[1; 10]);
    }

    #[test]
    fn bells_rotate_over_pause_ends() {
        let mut base = clip(vec![0; 40]);
        let bells = vec![clip(vec![1, 1]), clip(vec![2, 2])];
        let windows = vec![window(10), window(20), window(30)];

        overlay_bells(&mut base, &bells, &windows).unwrap();

        assert_eq!(&base.samples()[10..12], &[1, 1]);
        assert_eq!(&base.samples()[20..22], &[2, 2]);
        // Third bell wraps back to the first sound.
        assert_eq!(&base.samples()[30..32], &[1, 1]);
    }

    #[test]
    fn bell_past_end_is_clamped_inside() {
        let mut base = clip(vec![0; 12]);
        let bells = vec![clip(vec![9, 9, 9])];

        overlay_bells(&mut base, &bells, &[window(11)]).unwrap();
        assert_eq!(&base.samples()[9..], &[9, 9, 9]);
    }
}
