//! Lockstep scramble over a fixed list of target strings.
//!
//! Used for language switches: every visible text field scrambles and
//! resolves together over one shared frame budget.

use std::time::Duration;

use rand::RngCore;

use crate::glyphs::{passes_through, GlyphSet};
use crate::scramble::DEFAULT_SCRAMBLE_FRAMES;
use crate::Sequence;

/// Scrambles several targets in lockstep; completion reveals all of them
/// exactly and deactivates the machine.
#[derive(Debug, Clone)]
pub struct MultiScramble {
    targets: Vec<Vec<char>>,
    display: Vec<Vec<char>>,
    glyphs: GlyphSet,
    tick: Duration,
    budget: u32,
    frame: u32,
    active: bool,
    done: bool,
}

impl MultiScramble {
    /// Creates an inactive machine with the default frame budget.
    pub fn new<S: AsRef<str>>(targets: &[S], glyphs: GlyphSet, tick: Duration) -> Self {
        Self {
            targets: targets
                .iter()
                .map(|t| t.as_ref().chars().collect())
                .collect(),
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

    /// True while the machine still owns the field texts.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True once every target has resolved.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Display text of field `index`; the final target once done.
    pub fn text_at(&self, index: usize) -> String {
        if self.done || self.display.is_empty() {
            return self
                .targets
                .get(index)
                .map(|t| t.iter().collect())
                .unwrap_or_default();
        }
        self.display
            .get(index)
            .map(|t| t.iter().collect())
            .unwrap_or_default()
    }

    /// Display texts of all fields in target order.
    pub fn texts(&self) -> Vec<String> {
        (0..self.targets.len()).map(|i| self.text_at(i)).collect()
    }

    fn redraw(&mut self, rng: &mut dyn RngCore) {
        let budget = self.budget as usize;
        let frame = self.frame as usize;
        self.display = self
            .targets
            .iter()
            .map(|target| {
                let locked = frame * target.len() / budget;
                target
                    .iter()
                    .enumerate()
                    .map(|(i, &ch)| {
                        if i < locked || passes_through(ch) {
                            ch
                        } else {
                            self.glyphs.sample(rng)
                        }
                    })
                    .collect()
            })
            .collect();
    }
}

impl Sequence for MultiScramble {
    fn begin(&mut self, rng: &mut dyn RngCore) -> Option<Duration> {
        self.frame = 0;
        self.done = false;
        if self.targets.iter().all(Vec::is_empty) {
            self.active = false;
            self.done = true;
            return None;
        }
        self.active = true;
        self.redraw(rng);
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

        self.redraw(rng);
        Some(self.tick)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    const TICK: Duration = Duration::from_millis(40);

    #[test]
    fn completes_in_exactly_the_budget_and_deactivates() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut machine = MultiScramble::new(&["tienda", "mensaje", "cerrar"], GlyphSet::Latin, TICK);

        assert_eq!(machine.begin(&mut rng), Some(TICK));
        let mut frames = 1;
        while machine.step(&mut rng).is_some() {
            frames += 1;
        }
        assert_eq!(frames, DEFAULT_SCRAMBLE_FRAMES);
        assert!(machine.is_done());
        assert!(!machine.is_active());
        assert_eq!(machine.texts(), vec!["tienda", "mensaje", "cerrar"]);
    }

    #[test]
    fn fields_keep_their_lengths_while_scrambling() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut machine = MultiScramble::new(&["will you continue", "si", "no"], GlyphSet::Kana, TICK)
            .with_budget(15);
        machine.begin(&mut rng);
        machine.step(&mut rng);

        assert_eq!(machine.text_at(0).chars().count(), 17);
        assert_eq!(machine.text_at(1).chars().count(), 2);
        assert_eq!(machine.text_at(2).chars().count(), 2);
        // Spaces pass through mid-animation.
        assert_eq!(machine.text_at(0).chars().nth(4), Some(' '));
    }

    #[test]
    fn out_of_range_field_reads_empty() {
        let machine = MultiScramble::new(&["only"], GlyphSet::Latin, TICK);
        assert_eq!(machine.text_at(3), "");
    }
}
