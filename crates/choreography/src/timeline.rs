//! Staged entrance timeline: ordered offsets from one activation instant.

use std::time::Duration;

use rand::RngCore;

use crate::Sequence;

/// Fires a sequence of stages at absolute offsets from `begin`.
///
/// Offsets are stored sorted and stepped as deltas, so the driver still holds
/// exactly one pending timer. After each step the owner reads
/// [`latest`](Timeline::latest) to learn which stage just fired.
#[derive(Debug, Clone)]
pub struct Timeline<S: Copy> {
    stages: Vec<(Duration, S)>,
    next: usize,
    latest: Option<S>,
    active: bool,
}

impl<S: Copy> Timeline<S> {
    /// Creates an inactive timeline; stages may be given in any order.
    pub fn new(mut stages: Vec<(Duration, S)>) -> Self {
        stages.sort_by_key(|(offset, _)| *offset);
        Self {
            stages,
            next: 0,
            latest: None,
            active: false,
        }
    }

    /// The stage fired by the most recent step.
    pub fn latest(&self) -> Option<S> {
        self.latest
    }

    /// Stages that have not fired yet.
    pub fn remaining(&self) -> usize {
        self.stages.len() - self.next
    }

    /// True once every stage has fired.
    pub fn is_done(&self) -> bool {
        self.next == self.stages.len()
    }
}

impl<S: Copy> Sequence for Timeline<S> {
    fn begin(&mut self, _rng: &mut dyn RngCore) -> Option<Duration> {
        self.next = 0;
        self.latest = None;
        if self.stages.is_empty() {
            self.active = false;
            return None;
        }
        self.active = true;
        Some(self.stages[0].0)
    }

    fn step(&mut self, _rng: &mut dyn RngCore) -> Option<Duration> {
        if !self.active || self.next >= self.stages.len() {
            return None;
        }

        let (offset, stage) = self.stages[self.next];
        self.latest = Some(stage);
        self.next += 1;

        match self.stages.get(self.next) {
            Some(&(next_offset, _)) => Some(next_offset - offset),
            None => {
                self.active = false;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::mock::StepRng;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Stage {
        Frame,
        Title,
        Footer,
        Burger,
        WelcomePopup,
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_stages_as_offset_deltas() {
        let mut rng = StepRng::new(0, 0);
        let mut timeline = Timeline::new(vec![
            (ms(800), Stage::Frame),
            (ms(1500), Stage::Title),
            (ms(3500), Stage::Footer),
            (ms(5000), Stage::Burger),
            (ms(18000), Stage::WelcomePopup),
        ]);

        assert_eq!(timeline.begin(&mut rng), Some(ms(800)));
        assert_eq!(timeline.step(&mut rng), Some(ms(700)));
        assert_eq!(timeline.latest(), Some(Stage::Frame));
        assert_eq!(timeline.step(&mut rng), Some(ms(2000)));
        assert_eq!(timeline.latest(), Some(Stage::Title));
        assert_eq!(timeline.step(&mut rng), Some(ms(1500)));
        assert_eq!(timeline.step(&mut rng), Some(ms(13000)));
        assert_eq!(timeline.step(&mut rng), None);
        assert_eq!(timeline.latest(), Some(Stage::WelcomePopup));
        assert!(timeline.is_done());
        assert_eq!(timeline.step(&mut rng), None);
    }

    #[test]
    fn unsorted_stages_are_ordered_by_offset() {
        let mut rng = StepRng::new(0, 0);
        let mut timeline = Timeline::new(vec![
            (ms(300), Stage::Footer),
            (ms(100), Stage::Frame),
            (ms(200), Stage::Title),
        ]);

        assert_eq!(timeline.begin(&mut rng), Some(ms(100)));
        timeline.step(&mut rng);
        assert_eq!(timeline.latest(), Some(Stage::Frame));
        timeline.step(&mut rng);
        assert_eq!(timeline.latest(), Some(Stage::Title));
    }

    #[test]
    fn empty_timeline_is_quiescent() {
        let mut rng = StepRng::new(0, 0);
        let mut timeline: Timeline<Stage> = Timeline::new(Vec::new());
        assert_eq!(timeline.begin(&mut rng), None);
        assert!(timeline.is_done());
    }

    #[test]
    fn begin_rearms_a_finished_timeline() {
        let mut rng = StepRng::new(0, 0);
        let mut timeline = Timeline::new(vec![(ms(50), Stage::Frame)]);
        timeline.begin(&mut rng);
        timeline.step(&mut rng);
        assert!(timeline.is_done());

        assert_eq!(timeline.begin(&mut rng), Some(ms(50)));
        assert_eq!(timeline.remaining(), 1);
    }
}
