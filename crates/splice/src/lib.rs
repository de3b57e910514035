//! Audio splicing for the quiz narration pipeline.
//!
//! Two policies over the same source buffer:
//!
//! - [`splice_excisions`] — the excision policy: one forward walk copying
//!   untouched ranges verbatim and substituting each excision window with a
//!   fixed-duration replacement segment (looped filler or silence). The
//!   output duration must agree with the cue pass's cumulative offset;
//!   [`expected_output_ms`] is the check.
//! - [`cut_segments`] / [`assemble`] — the segment policy: slice the source
//!   at phrase boundaries into question/answer clips, overlay rotating
//!   effects, and rebuild the final audio with a running clock stamping the
//!   metadata. No offset propagation is involved.
//!
//! [`mix`] holds the mixdown steps shared by both: hook prepend, looped
//! background music, rotating bell overlays.

mod assemble;
mod excise;
pub mod mix;

pub use assemble::{AssembleOptions, QuizCut, assemble, cut_segments};
pub use excise::{expected_output_ms, splice_excisions};
