use quiz_audio_utils::{Clip, Result};
use quiz_cue::ExcisionWindow;

/// What the spliced output's duration must be: source duration plus the
/// sum of all excision deltas. Equal to the cue pass's final cumulative
/// offset minus its initial offset — the round-trip invariant between the
/// excision engine and this splicer.
pub fn expected_output_ms(source: &Clip, windows: &[ExcisionWindow]) -> i64 {
    source.duration_ms() + windows.iter().map(|w| w.delta_ms()).sum::<i64>()
}

/// Splice the excision windows into the source audio.
///
/// One forward walk: for each window, the gap since the previous boundary
/// is copied verbatim, then the replacement segment is inserted — the
/// filler looped and truncated to exactly the window's replacement span,
/// or silence of that span when no filler is configured. Trailing audio is
/// copied verbatim to the end.
///
/// A window scheduled past the end of the source is clamped to the buffer
/// boundary (its replacement still goes in at full length). The output is
/// checked against [`expected_output_ms`]; divergence is logged, never
/// fatal.
pub fn splice_excisions(
    source: &Clip,
    windows: &[ExcisionWindow],
    filler: Option<&Clip>,
) -> Result<Clip> {
    let mut output = Clip::empty(source.sample_rate(), source.channels());
    let mut last_end_ms = 0i64;

    for window in windows {
        if window.source_start_ms > source.duration_ms() {
            tracing::warn!(
                source_start_ms = window.source_start_ms,
                source_ms = source.duration_ms(),
                "excision window past end of source; clamping to buffer boundary"
            );
        }

        output.append(&source.slice_ms(last_end_ms..window.source_start_ms))?;

        let pause_ms = window.replacement_end_ms - window.replacement_start_ms;
        let replacement = match filler {
            Some(f) => f.looped_to_ms(pause_ms),
            None => Clip::silence(pause_ms, source.sample_rate(), source.channels()),
        };
        output.append(&replacement)?;

        last_end_ms = window.source_end_ms;
    }

    output.append(&source.slice_ms(last_end_ms..i64::MAX))?;

    let expected_ms = expected_output_ms(source, windows);
    if output.duration_ms() != expected_ms {
        tracing::warn!(
            output_ms = output.duration_ms(),
            expected_ms,
            "spliced duration diverges from cumulative offset"
        );
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1 kHz mono: one sample per millisecond.
    fn clip(samples: Vec<i16>) -> Clip {
        Clip::new(samples, 1000, 1).unwrap()
    }

    fn window(source_start_ms: i64, source_end_ms: i64, pause_ms: i64) -> ExcisionWindow {
        ExcisionWindow {
            number: Some(1),
            source_start_ms,
            source_end_ms,
            replacement_start_ms: source_start_ms,
            replacement_end_ms: source_start_ms + pause_ms,
        }
    }

    #[test]
    fn no_windows_copies_source_verbatim() {
        let source = clip((0..50).map(|i| i as i16).collect());
        let out = splice_excisions(&source, &[], None).unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn window_is_replaced_by_silence() {
        let source = clip(vec![7; 20]);
        let out = splice_excisions(&source, &[window(5, 10, 8)], None).unwrap();

        // 5 ms verbatim + 8 ms silence + 10 ms verbatim tail.
        assert_eq!(out.duration_ms(), 5 + 8 + 10);
        assert_eq!(&out.samples()[..5], &[7; 5]);
        assert_eq!(&out.samples()[5..13], &[0; 8]);
        assert_eq!(&out.samples()[13..], &[7; 10]);
    }

    #[test]
    fn filler_is_looped_to_exact_pause() {
        let source = clip(vec![7; 20]);
        let filler = clip(vec![1, 2, 3]);
        let out = splice_excisions(&source, &[window(5, 10, 8)], Some(&filler)).unwrap();

        assert_eq!(&out.samples()[5..13], &[1, 2, 3, 1, 2, 3, 1, 2]);
    }

    #[test]
    fn empty_filler_degrades_to_silence() {
        let source = clip(vec![7; 20]);
        let filler = Clip::empty(1000, 1);
        let out = splice_excisions(&source, &[window(5, 10, 8)], Some(&filler)).unwrap();
        assert_eq!(&out.samples()[5..13], &[0; 8]);
    }

    #[test]
    fn duration_matches_cumulative_offset() {
        let source = clip(vec![7; 100]);
        let windows = vec![window(10, 15, 30), window(40, 48, 30)];

        let out = splice_excisions(&source, &windows, None).unwrap();
        let delta: i64 = windows.iter().map(|w| w.delta_ms()).sum();
        assert_eq!(delta, (30 - 5) + (30 - 8));
        assert_eq!(out.duration_ms(), source.duration_ms() + delta);
        assert_eq!(out.duration_ms(), expected_output_ms(&source, &windows));
    }

    #[test]
    fn window_past_end_is_clamped() {
        let source = clip(vec![7; 20]);
        // Trigger recognized beyond the end of the buffer.
        let out = splice_excisions(&source, &[window(25, 30, 10)], None).unwrap();

        // Whole source, then the full replacement.
        assert_eq!(out.duration_ms(), 20 + 10);
        assert_eq!(&out.samples()[..20], &[7; 20]);
        assert_eq!(&out.samples()[20..], &[0; 10]);
    }
}
