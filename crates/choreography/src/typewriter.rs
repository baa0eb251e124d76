//! Typewriter reveal with humanized chunking and pacing.

use std::time::Duration;

use rand::{Rng, RngCore};

use crate::Sequence;

/// Reveals a target string left to right, a small chunk per tick.
///
/// Each step consumes one to three characters (70% of ticks take a random
/// chunk, the rest exactly one) and perturbs the base delay: roughly one tick
/// in ten hesitates at 4x, one in five rushes at 0.5x. Displayed length never
/// decreases while active; `done` latches once the full target is out.
#[derive(Debug, Clone)]
pub struct Typewriter {
    target: Vec<char>,
    base_delay: Duration,
    shown: usize,
    active: bool,
    done: bool,
}

impl Typewriter {
    /// Creates an inactive machine for `target` paced at `base_delay` per tick.
    pub fn new(target: &str, base_delay: Duration) -> Self {
        Self {
            target: target.chars().collect(),
            base_delay,
            shown: 0,
            active: false,
            done: false,
        }
    }

    /// Currently revealed prefix; empty while inactive.
    pub fn text(&self) -> String {
        self.target[..self.shown].iter().collect()
    }

    /// Number of characters revealed so far.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// True once the full target has been revealed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Clears the text and `done` flag immediately.
    pub fn reset(&mut self) {
        self.shown = 0;
        self.active = false;
        self.done = false;
    }
}

impl Sequence for Typewriter {
    fn begin(&mut self, _rng: &mut dyn RngCore) -> Option<Duration> {
        self.shown = 0;
        self.done = false;
        if self.target.is_empty() {
            self.active = false;
            self.done = true;
            return None;
        }
        self.active = true;
        Some(self.base_delay)
    }

    fn step(&mut self, rng: &mut dyn RngCore) -> Option<Duration> {
        if !self.active {
            return None;
        }

        let chunk = if rng.gen_bool(0.7) {
            rng.gen_range(1..=3)
        } else {
            1
        };
        self.shown = (self.shown + chunk).min(self.target.len());

        if self.shown == self.target.len() {
            self.active = false;
            self.done = true;
            return None;
        }

        let roll: f64 = rng.gen();
        let delay = if roll < 0.1 {
            self.base_delay * 4
        } else if roll < 0.3 {
            self.base_delay / 2
        } else {
            self.base_delay
        };
        Some(delay)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::mock::StepRng;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn run_to_completion(machine: &mut Typewriter, rng: &mut dyn RngCore) -> usize {
        let mut steps = 0;
        let mut pending = machine.begin(rng);
        while pending.is_some() {
            pending = machine.step(rng);
            steps += 1;
            assert!(steps < 10_000, "typewriter failed to terminate");
        }
        steps
    }

    #[test]
    fn reveals_monotonically_and_latches_done() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut machine = Typewriter::new("hello, operator", Duration::from_millis(70));

        let mut pending = machine.begin(&mut rng);
        let mut last_shown = 0;
        while pending.is_some() {
            pending = machine.step(&mut rng);
            assert!(machine.shown() >= last_shown);
            last_shown = machine.shown();
        }

        assert!(machine.is_done());
        assert_eq!(machine.text(), "hello, operator");
    }

    #[test]
    fn reset_clears_immediately() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut machine = Typewriter::new("farewell", Duration::from_millis(50));
        run_to_completion(&mut machine, &mut rng);
        assert!(machine.is_done());

        machine.reset();
        assert_eq!(machine.text(), "");
        assert!(!machine.is_done());
        assert_eq!(machine.step(&mut rng), None);
    }

    #[test]
    fn empty_target_is_done_at_begin() {
        let mut rng = StepRng::new(0, 0);
        let mut machine = Typewriter::new("", Duration::from_millis(70));
        assert_eq!(machine.begin(&mut rng), None);
        assert!(machine.is_done());
    }

    #[test]
    fn delays_are_bounded_by_the_perturbation_band() {
        let mut rng = StdRng::seed_from_u64(99);
        let base = Duration::from_millis(40);
        let mut machine = Typewriter::new("a somewhat longer line of text", base);

        let mut pending = machine.begin(&mut rng);
        while let Some(delay) = pending {
            assert!(delay >= base / 2 && delay <= base * 4);
            pending = machine.step(&mut rng);
        }
    }
}
