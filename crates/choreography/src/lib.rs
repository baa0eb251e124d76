//! Pure text-animation state machines for the intro flow and desktop shell.
//!
//! Every animation on the site (typewriter boot lines, scramble reveals, the
//! staged main-page entrance, the chained confirm dialog) is a value
//! implementing [`Sequence`]: `begin` and `step` return the delay until the
//! machine wants its next step, `None` once it is quiescent. Nothing here
//! touches the DOM or schedules timers; a driver on the Leptos side owns the
//! single pending timeout per machine and re-arms it after every step. Tests
//! drive `step` directly and assert on the returned delay ledger.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use rand::RngCore;

mod confirm;
mod glyphs;
mod lockstep;
mod scramble;
mod timeline;
mod typewriter;

pub use confirm::{Choice, ConfirmFlow, ConfirmTexts};
pub use glyphs::GlyphSet;
pub use lockstep::MultiScramble;
pub use scramble::{LockScramble, ScrambleDissolve, ScrambleReveal, DEFAULT_SCRAMBLE_FRAMES};
pub use timeline::Timeline;
pub use typewriter::Typewriter;

/// A stepped animation. The return value is the delay until the machine wants
/// its next [`step`](Sequence::step); `None` means quiescent (finished, or
/// waiting on external input).
pub trait Sequence {
    /// Arms the machine from its initial state.
    fn begin(&mut self, rng: &mut dyn RngCore) -> Option<Duration>;

    /// Advances one tick. Called when the previously returned delay elapses.
    fn step(&mut self, rng: &mut dyn RngCore) -> Option<Duration>;
}
