//! Scramble reveal, its dissolving inverse, and the per-character lock
//! variant used by the main-page title.

use std::time::Duration;

use rand::{Rng, RngCore};

use crate::glyphs::{passes_through, GlyphSet};
use crate::Sequence;

/// Frame budget shared by the standard scramble transitions.
pub const DEFAULT_SCRAMBLE_FRAMES: u32 = 18;

/// Reveals a target through decaying glyph noise.
///
/// At frame `f` of the budget, `floor((f / budget) * len)` leading characters
/// show their final form; the rest are redrawn from the glyph pool every tick.
/// Whitespace always passes through. At the budget the text snaps exactly.
#[derive(Debug, Clone)]
pub struct ScrambleReveal {
    target: Vec<char>,
    display: Vec<char>,
    glyphs: GlyphSet,
    tick: Duration,
    budget: u32,
    frame: u32,
    active: bool,
    done: bool,
}

impl ScrambleReveal {
    /// Creates an inactive machine with the default frame budget.
    pub fn new(target: &str, glyphs: GlyphSet, tick: Duration) -> Self {
        Self {
            target: target.chars().collect(),
            display: Vec::new(),
            glyphs,
            tick,
            budget: DEFAULT_SCRAMBLE_FRAMES,
            frame: 0,
            active: false,
            done: false,
        }
    }

    /// Overrides the frame budget (clamped to at least one frame).
    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = budget.max(1);
        self
    }

    /// Length-scaled variant: budget is `max(2 * len, 20)` frames, so long
    /// strings resolve at a steady rate instead of all at once.
    pub fn scaled(target: &str, glyphs: GlyphSet, tick: Duration) -> Self {
        let len = target.chars().count() as u32;
        let budget = (2 * len).max(20);
        Self::new(target, glyphs, tick).with_budget(budget)
    }

    /// Current display text.
    pub fn text(&self) -> String {
        if self.done {
            return self.target.iter().collect();
        }
        self.display.iter().collect()
    }

    /// True once the target has snapped into place.
    pub fn is_done(&self) -> bool {
        self.done
    }

    fn redraw(&mut self, locked: usize, rng: &mut dyn RngCore) {
        self.display.clear();
        for (i, &ch) in self.target.iter().enumerate() {
            if i < locked || passes_through(ch) {
                self.display.push(ch);
            } else {
                self.display.push(self.glyphs.sample(rng));
            }
        }
    }
}

impl Sequence for ScrambleReveal {
    fn begin(&mut self, rng: &mut dyn RngCore) -> Option<Duration> {
        self.frame = 0;
        self.done = false;
        if self.target.is_empty() {
            self.active = false;
            self.done = true;
            return None;
        }
        self.active = true;
        self.redraw(0, rng);
        Some(self.tick)
    }

    fn step(&mut self, rng: &mut dyn RngCore) -> Option<Duration> {
        if !self.active {
            return None;
        }

        self.frame += 1;
        if self.frame >= self.budget {
            self.display.clone_from(&self.target);
            self.active = false;
            self.done = true;
            return None;
        }

        let locked = (self.frame as usize * self.target.len()) / self.budget as usize;
        self.redraw(locked, rng);
        Some(self.tick)
    }
}

/// Inverse of [`ScrambleReveal`]: starts fully readable, corrupts from the
/// left, blanks past roughly 70% of the budget, and ends empty.
#[derive(Debug, Clone)]
pub struct ScrambleDissolve {
    target: Vec<char>,
    display: Vec<char>,
    glyphs: GlyphSet,
    tick: Duration,
    budget: u32,
    frame: u32,
    active: bool,
    done: bool,
}

impl ScrambleDissolve {
    /// Creates an inactive machine with the default frame budget.
    pub fn new(target: &str, glyphs: GlyphSet, tick: Duration) -> Self {
        Self {
            target: target.chars().collect(),
            display: Vec::new(),
            glyphs,
            tick,
            budget: DEFAULT_SCRAMBLE_FRAMES,
            frame: 0,
            active: false,
            done: false,
        }
    }

    /// Current display text; empty once done.
    pub fn text(&self) -> String {
        if self.done {
            return String::new();
        }
        self.display.iter().collect()
    }

    /// True once the text has fully dissolved.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Sequence for ScrambleDissolve {
    fn begin(&mut self, _rng: &mut dyn RngCore) -> Option<Duration> {
        self.frame = 0;
        self.done = false;
        if self.target.is_empty() {
            self.active = false;
            self.done = true;
            return None;
        }
        self.active = true;
        self.display.clone_from(&self.target);
        Some(self.tick)
    }

    fn step(&mut self, rng: &mut dyn RngCore) -> Option<Duration> {
        if !self.active {
            return None;
        }

        self.frame += 1;
        if self.frame >= self.budget {
            self.display.clear();
            self.active = false;
            self.done = true;
            return None;
        }

        let corrupted = (self.frame as usize * self.target.len()) / self.budget as usize;
        let blanking = self.frame * 10 > self.budget * 7;
        self.display.clear();
        for (i, &ch) in self.target.iter().enumerate() {
            if i >= corrupted || passes_through(ch) {
                self.display.push(ch);
            } else if blanking {
                self.display.push(' ');
            } else {
                self.display.push(self.glyphs.sample(rng));
            }
        }
        Some(self.tick)
    }
}

/// Scramble where every character locks at its own frame.
///
/// Character `i` locks at frame `(i + 1) * multiplier` jittered by +-4; the
/// machine snaps and finishes once all characters have locked.
#[derive(Debug, Clone)]
pub struct LockScramble {
    target: Vec<char>,
    display: Vec<char>,
    lock_at: Vec<u32>,
    multiplier: u32,
    glyphs: GlyphSet,
    tick: Duration,
    frame: u32,
    active: bool,
    done: bool,
}

impl LockScramble {
    /// Creates an inactive machine. `multiplier` spaces the lock frames;
    /// lower values resolve faster.
    pub fn new(target: &str, multiplier: u32, glyphs: GlyphSet, tick: Duration) -> Self {
        Self {
            target: target.chars().collect(),
            display: Vec::new(),
            lock_at: Vec::new(),
            multiplier,
            glyphs,
            tick,
            frame: 0,
            active: false,
            done: false,
        }
    }

    /// Current display text.
    pub fn text(&self) -> String {
        if self.done {
            return self.target.iter().collect();
        }
        self.display.iter().collect()
    }

    /// True once every character has locked.
    pub fn is_done(&self) -> bool {
        self.done
    }

    fn redraw(&mut self, rng: &mut dyn RngCore) {
        self.display.clear();
        for (i, &ch) in self.target.iter().enumerate() {
            if self.frame >= self.lock_at[i] || passes_through(ch) {
                self.display.push(ch);
            } else {
                self.display.push(self.glyphs.sample(rng));
            }
        }
    }
}

impl Sequence for LockScramble {
    fn begin(&mut self, rng: &mut dyn RngCore) -> Option<Duration> {
        self.frame = 0;
        self.done = false;
        if self.target.is_empty() {
            self.active = false;
            self.done = true;
            return None;
        }
        self.active = true;
        self.lock_at = (0..self.target.len() as u32)
            .map(|i| {
                let base = i64::from((i + 1) * self.multiplier);
                let jitter: i64 = rng.gen_range(-4..=4);
                (base + jitter).max(1) as u32
            })
            .collect();
        self.redraw(rng);
        Some(self.tick)
    }

    fn step(&mut self, rng: &mut dyn RngCore) -> Option<Duration> {
        if !self.active {
            return None;
        }

        self.frame += 1;
        if self.lock_at.iter().all(|&at| self.frame >= at) {
            self.display.clone_from(&self.target);
            self.active = false;
            self.done = true;
            return None;
        }

        self.redraw(rng);
        Some(self.tick)
    }
}
