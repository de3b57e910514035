//! # Cue detection over a token stream
//!
//! One forward pass over a materialized, time-ordered token stream does two
//! things at once:
//!
//! - **Phrase matching** — multi-word cue phrases are tracked as a set of
//!   active partial matches, advanced or discarded per token. Completed
//!   matches become [`PhraseOccurrence`]s, numbered in match order across
//!   all patterns.
//! - **Trigger excision** — single trigger words are cut from the narrative
//!   timeline and replaced by a fixed-duration segment. Each cut becomes an
//!   [`ExcisionWindow`] and shifts the running offset by
//!   `pause_ms − token duration`, which applies to every later timestamp.
//!
//! The pass is an explicit fold: per-token state lives in a value threaded
//! through the step function and is returned as a [`CuePass`], never
//! mutated through shared state. A trigger token is consumed entirely by
//! excision and never contributes to an active match.
//!
//! For the simpler "search the whole transcript for fixed phrases" policy
//! (no excision, occurrences may be absent), use [`scan`].

mod config;
mod pass;
mod records;
mod scan;

pub use config::{CueConfig, CueError, PhrasePattern};
pub use pass::run;
pub use records::{CuePass, ExcisionWindow, PhraseOccurrence};
pub use scan::scan;
