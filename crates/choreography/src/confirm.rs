//! Chained confirm-dialog state machine.
//!
//! The boot confirm screen types a greeting, three suspense dots, the
//! question, and both answer labels, then waits for a choice. Everything is
//! strictly sequential with exactly one pending delay at any time; the
//! original scripted this with nested timeouts, here it is one FSM.

use std::time::Duration;

use rand::RngCore;

use crate::glyphs::GlyphSet;
use crate::lockstep::MultiScramble;
use crate::Sequence;

const CURSOR_DELAY: Duration = Duration::from_millis(300);
const TYPING_LEAD: Duration = Duration::from_millis(700);
const GREETING_CHAR: Duration = Duration::from_millis(70);
const DOT_DELAY: Duration = Duration::from_millis(300);
const PAUSE_AFTER_DOTS: Duration = Duration::from_millis(600);
const QUESTION_CHAR: Duration = Duration::from_millis(50);
const PAUSE_AFTER_QUESTION: Duration = Duration::from_millis(400);
const LABEL_CHAR: Duration = Duration::from_millis(80);
const PAUSE_AFTER_YES: Duration = Duration::from_millis(200);
const PAUSE_AFTER_NO: Duration = Duration::from_millis(400);
const RESOLVE_DELAY: Duration = Duration::from_millis(300);
const SUSPENSE_DOTS: usize = 3;
const RELABEL_FRAMES: u32 = 15;
const RELABEL_TICK: Duration = Duration::from_millis(50);

/// The two answers the confirm screen offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Continue into the site.
    Yes,
    /// Decline.
    No,
}

impl Choice {
    fn other(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

/// Localized texts the flow types out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmTexts {
    /// Greeting line typed first.
    pub greeting: String,
    /// The question ("will you continue?").
    pub question: String,
    /// Label of the affirmative option.
    pub yes: String,
    /// Label of the negative option.
    pub no: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Cursor,
    Greeting,
    Dots,
    PauseAfterDots,
    Question,
    PauseAfterQuestion,
    YesLabel,
    PauseAfterYes,
    NoLabel,
    PauseAfterNo,
    Selector,
    Loading,
    Done,
}

/// The confirm screen's scripted typing chain plus choice handling.
///
/// `begin` shows nothing; the cursor blinks in at 300ms, typing starts at
/// 1000ms. Once the selector shows, arrow keys toggle via
/// [`toggle`](ConfirmFlow::toggle) and Enter resolves via
/// [`confirm`](ConfirmFlow::confirm). Choosing yes plays a loading-dots beat
/// before resolving; no resolves immediately. A language change while the
/// selector shows re-scrambles the labels in place; earlier, it restarts the
/// whole chain with the new texts.
#[derive(Debug, Clone)]
pub struct ConfirmFlow {
    texts: ConfirmTexts,
    glyphs: GlyphSet,
    phase: Phase,
    greeting_shown: usize,
    question_shown: usize,
    yes_shown: usize,
    no_shown: usize,
    dots: usize,
    loading_step: usize,
    cursor: bool,
    selection: Choice,
    resolution: Option<Choice>,
    relabel: Option<MultiScramble>,
}

impl ConfirmFlow {
    /// Creates an idle flow for `texts`.
    pub fn new(texts: ConfirmTexts, glyphs: GlyphSet) -> Self {
        Self {
            texts,
            glyphs,
            phase: Phase::Idle,
            greeting_shown: 0,
            question_shown: 0,
            yes_shown: 0,
            no_shown: 0,
            dots: 0,
            loading_step: 0,
            cursor: false,
            selection: Choice::Yes,
            resolution: None,
            relabel: None,
        }
    }

    /// True while the blinking cursor should render.
    pub fn cursor_visible(&self) -> bool {
        self.cursor
    }

    /// Typed prefix of the greeting line.
    pub fn greeting_text(&self) -> String {
        self.texts.greeting.chars().take(self.greeting_shown).collect()
    }

    /// Suspense dots typed after the greeting.
    pub fn dots_text(&self) -> String {
        ".".repeat(self.dots)
    }

    /// Typed (or re-scrambling) question text.
    pub fn question_text(&self) -> String {
        match &self.relabel {
            Some(scramble) if scramble.is_active() => scramble.text_at(0),
            _ => self.texts.question.chars().take(self.question_shown).collect(),
        }
    }

    /// Typed (or re-scrambling) affirmative label.
    pub fn yes_text(&self) -> String {
        match &self.relabel {
            Some(scramble) if scramble.is_active() => scramble.text_at(1),
            _ => self.texts.yes.chars().take(self.yes_shown).collect(),
        }
    }

    /// Typed (or re-scrambling) negative label.
    pub fn no_text(&self) -> String {
        match &self.relabel {
            Some(scramble) if scramble.is_active() => scramble.text_at(2),
            _ => self.texts.no.chars().take(self.no_shown).collect(),
        }
    }

    /// Loading dots shown after choosing yes.
    pub fn loading_text(&self) -> String {
        if self.phase != Phase::Loading {
            return String::new();
        }
        match self.loading_step {
            1 => ".".to_string(),
            2 => "..".to_string(),
            3 => "...".to_string(),
            _ => String::new(),
        }
    }

    /// True while the yes/no selector accepts input.
    pub fn selector_visible(&self) -> bool {
        self.phase == Phase::Selector
    }

    /// Currently highlighted option.
    pub fn selection(&self) -> Choice {
        self.selection
    }

    /// The final answer, once resolved.
    pub fn resolution(&self) -> Option<Choice> {
        self.resolution
    }

    /// Flips the highlighted option (ArrowUp/ArrowDown). No-op outside the
    /// selector phase.
    pub fn toggle(&mut self) {
        if self.phase == Phase::Selector {
            self.selection = self.selection.other();
        }
    }

    /// Highlights `choice` directly. No-op outside the selector phase.
    pub fn select(&mut self, choice: Choice) {
        if self.phase == Phase::Selector {
            self.selection = choice;
        }
    }

    /// Commits the highlighted option (Enter). Yes enters the loading beat
    /// and returns its first delay; no resolves immediately.
    pub fn confirm(&mut self) -> Option<Duration> {
        if self.phase != Phase::Selector {
            return None;
        }
        self.relabel = None;
        match self.selection {
            Choice::Yes => {
                self.phase = Phase::Loading;
                self.loading_step = 0;
                Some(DOT_DELAY)
            }
            Choice::No => {
                self.phase = Phase::Done;
                self.resolution = Some(Choice::No);
                None
            }
        }
    }

    /// Swaps in new localized texts. While the selector shows, the labels
    /// re-scramble in place; before that, the whole chain restarts.
    pub fn set_texts(
        &mut self,
        texts: ConfirmTexts,
        glyphs: GlyphSet,
        rng: &mut dyn RngCore,
    ) -> Option<Duration> {
        self.glyphs = glyphs;
        match self.phase {
            Phase::Selector => {
                let mut scramble = MultiScramble::new(
                    &[&texts.question, &texts.yes, &texts.no],
                    glyphs,
                    RELABEL_TICK,
                )
                .with_budget(RELABEL_FRAMES);
                let delay = scramble.begin(rng);
                self.texts = texts;
                self.question_shown = self.texts.question.chars().count();
                self.yes_shown = self.texts.yes.chars().count();
                self.no_shown = self.texts.no.chars().count();
                self.relabel = Some(scramble);
                delay
            }
            Phase::Idle | Phase::Loading | Phase::Done => {
                self.texts = texts;
                None
            }
            _ => {
                self.texts = texts;
                self.begin(rng)
            }
        }
    }

    /// Tears the flow down to idle from any state. Idempotent.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
        self.greeting_shown = 0;
        self.question_shown = 0;
        self.yes_shown = 0;
        self.no_shown = 0;
        self.dots = 0;
        self.loading_step = 0;
        self.cursor = false;
        self.selection = Choice::Yes;
        self.resolution = None;
        self.relabel = None;
    }
}

impl Sequence for ConfirmFlow {
    fn begin(&mut self, _rng: &mut dyn RngCore) -> Option<Duration> {
        let texts = self.texts.clone();
        let glyphs = self.glyphs;
        *self = Self::new(texts, glyphs);
        self.phase = Phase::Cursor;
        Some(CURSOR_DELAY)
    }

    fn step(&mut self, rng: &mut dyn RngCore) -> Option<Duration> {
        if let Some(scramble) = self.relabel.as_mut() {
            let delay = scramble.step(rng);
            if delay.is_none() {
                self.relabel = None;
            }
            return delay;
        }

        match self.phase {
            Phase::Idle | Phase::Selector | Phase::Done => None,
            Phase::Cursor => {
                self.cursor = true;
                self.phase = Phase::Greeting;
                Some(TYPING_LEAD)
            }
            Phase::Greeting => {
                self.greeting_shown += 1;
                if self.greeting_shown < self.texts.greeting.chars().count() {
                    Some(GREETING_CHAR)
                } else {
                    self.phase = Phase::Dots;
                    Some(DOT_DELAY)
                }
            }
            Phase::Dots => {
                self.dots += 1;
                if self.dots < SUSPENSE_DOTS {
                    Some(DOT_DELAY)
                } else {
                    self.phase = Phase::PauseAfterDots;
                    Some(PAUSE_AFTER_DOTS)
                }
            }
            Phase::PauseAfterDots => {
                self.phase = Phase::Question;
                Some(QUESTION_CHAR)
            }
            Phase::Question => {
                self.question_shown += 1;
                if self.question_shown < self.texts.question.chars().count() {
                    Some(QUESTION_CHAR)
                } else {
                    self.phase = Phase::PauseAfterQuestion;
                    Some(PAUSE_AFTER_QUESTION)
                }
            }
            Phase::PauseAfterQuestion => {
                self.phase = Phase::YesLabel;
                Some(LABEL_CHAR)
            }
            Phase::YesLabel => {
                self.yes_shown += 1;
                if self.yes_shown < self.texts.yes.chars().count() {
                    Some(LABEL_CHAR)
                } else {
                    self.phase = Phase::PauseAfterYes;
                    Some(PAUSE_AFTER_YES)
                }
            }
            Phase::PauseAfterYes => {
                self.phase = Phase::NoLabel;
                Some(LABEL_CHAR)
            }
            Phase::NoLabel => {
                self.no_shown += 1;
                if self.no_shown < self.texts.no.chars().count() {
                    Some(LABEL_CHAR)
                } else {
                    self.phase = Phase::PauseAfterNo;
                    Some(PAUSE_AFTER_NO)
                }
            }
            Phase::PauseAfterNo => {
                self.phase = Phase::Selector;
                None
            }
            Phase::Loading => {
                self.loading_step += 1;
                match self.loading_step {
                    1 | 2 => Some(DOT_DELAY),
                    3 => Some(Duration::from_millis(400)),
                    4 => Some(RESOLVE_DELAY),
                    _ => {
                        self.phase = Phase::Done;
                        self.resolution = Some(Choice::Yes);
                        None
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn texts() -> ConfirmTexts {
        ConfirmTexts {
            greeting: "welcome".to_string(),
            question: "will you continue?".to_string(),
            yes: "yes".to_string(),
            no: "no".to_string(),
        }
    }

    fn drive_to_selector(flow: &mut ConfirmFlow, rng: &mut dyn RngCore) -> Vec<Duration> {
        let mut ledger = Vec::new();
        let mut pending = flow.begin(rng);
        while let Some(delay) = pending {
            ledger.push(delay);
            pending = flow.step(rng);
        }
        ledger
    }

    #[test]
    fn delay_ledger_matches_the_timing_table() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut flow = ConfirmFlow::new(texts(), GlyphSet::Latin);
        let ledger = drive_to_selector(&mut flow, &mut rng);

        let ms = |v: u64| Duration::from_millis(v);
        let mut expected = vec![ms(300), ms(700)]; // cursor, typing lead
        expected.extend(std::iter::repeat(ms(70)).take(6)); // greeting chars 1-6
        expected.push(ms(300)); // greeting char 7, leads into dots
        expected.extend([ms(300), ms(300), ms(600)]); // dots 1-3, third leads the pause
        expected.push(ms(50)); // pause end, first question char pending
        expected.extend(std::iter::repeat(ms(50)).take(17)); // question chars 1-17
        expected.push(ms(400)); // question char 18, leads the pause
        expected.push(ms(80)); // pause end, first yes char pending
        expected.extend([ms(80), ms(80), ms(200)]); // yes chars 1-3, third leads the pause
        expected.push(ms(80)); // pause end, first no char pending
        expected.extend([ms(80), ms(400)]); // no chars 1-2, second leads the pause

        assert_eq!(ledger, expected);
        assert!(flow.selector_visible());
        assert_eq!(flow.greeting_text(), "welcome");
        assert_eq!(flow.dots_text(), "...");
        assert_eq!(flow.question_text(), "will you continue?");
        assert_eq!(flow.yes_text(), "yes");
        assert_eq!(flow.no_text(), "no");
    }

    #[test]
    fn yes_plays_the_loading_beat_before_resolving() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut flow = ConfirmFlow::new(texts(), GlyphSet::Latin);
        drive_to_selector(&mut flow, &mut rng);

        let ms = |v: u64| Duration::from_millis(v);
        assert_eq!(flow.confirm(), Some(ms(300)));
        assert_eq!(flow.step(&mut rng), Some(ms(300)));
        assert_eq!(flow.loading_text(), ".");
        assert_eq!(flow.step(&mut rng), Some(ms(300)));
        assert_eq!(flow.loading_text(), "..");
        assert_eq!(flow.step(&mut rng), Some(ms(400)));
        assert_eq!(flow.loading_text(), "...");
        assert_eq!(flow.step(&mut rng), Some(ms(300)));
        assert_eq!(flow.loading_text(), "");
        assert_eq!(flow.step(&mut rng), None);
        assert_eq!(flow.resolution(), Some(Choice::Yes));
    }

    #[test]
    fn no_resolves_immediately() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut flow = ConfirmFlow::new(texts(), GlyphSet::Latin);
        drive_to_selector(&mut flow, &mut rng);

        flow.toggle();
        assert_eq!(flow.selection(), Choice::No);
        assert_eq!(flow.confirm(), None);
        assert_eq!(flow.resolution(), Some(Choice::No));
    }

    #[test]
    fn toggle_flips_and_is_inert_before_the_selector() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut flow = ConfirmFlow::new(texts(), GlyphSet::Latin);

        flow.toggle();
        assert_eq!(flow.selection(), Choice::Yes);

        drive_to_selector(&mut flow, &mut rng);
        flow.toggle();
        flow.toggle();
        assert_eq!(flow.selection(), Choice::Yes);
        flow.select(Choice::No);
        assert_eq!(flow.selection(), Choice::No);
    }

    #[test]
    fn cancel_returns_to_idle_from_any_phase() {
        let mut rng = StdRng::seed_from_u64(5);

        // Mid-typing.
        let mut flow = ConfirmFlow::new(texts(), GlyphSet::Latin);
        flow.begin(&mut rng);
        flow.step(&mut rng);
        flow.step(&mut rng);
        flow.cancel();
        assert_eq!(flow.greeting_text(), "");
        assert!(!flow.cursor_visible());
        assert_eq!(flow.step(&mut rng), None);

        // At the selector, twice (idempotent).
        let mut flow = ConfirmFlow::new(texts(), GlyphSet::Latin);
        drive_to_selector(&mut flow, &mut rng);
        flow.cancel();
        flow.cancel();
        assert!(!flow.selector_visible());
        assert_eq!(flow.resolution(), None);
    }

    #[test]
    fn language_change_at_selector_rescrambles_in_place() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut flow = ConfirmFlow::new(texts(), GlyphSet::Latin);
        drive_to_selector(&mut flow, &mut rng);

        let spanish = ConfirmTexts {
            greeting: "bienvenido".to_string(),
            question: "deseas continuar?".to_string(),
            yes: "si".to_string(),
            no: "no".to_string(),
        };
        let delay = flow.set_texts(spanish.clone(), GlyphSet::Latin, &mut rng);
        assert_eq!(delay, Some(Duration::from_millis(50)));
        assert!(flow.selector_visible());
        assert_eq!(flow.question_text().chars().count(), 17);

        let mut frames = 1;
        while flow.step(&mut rng).is_some() {
            frames += 1;
        }
        assert_eq!(frames, 15);
        assert_eq!(flow.question_text(), "deseas continuar?");
        assert_eq!(flow.yes_text(), "si");
        assert_eq!(flow.no_text(), "no");
        assert!(flow.selector_visible());
    }

    #[test]
    fn language_change_mid_chain_restarts_with_new_texts() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut flow = ConfirmFlow::new(texts(), GlyphSet::Latin);
        flow.begin(&mut rng);
        flow.step(&mut rng); // cursor
        flow.step(&mut rng); // first greeting char

        let jp = ConfirmTexts {
            greeting: "ようこそ".to_string(),
            question: "つづけますか".to_string(),
            yes: "はい".to_string(),
            no: "いいえ".to_string(),
        };
        let delay = flow.set_texts(jp, GlyphSet::Kana, &mut rng);
        assert_eq!(delay, Some(Duration::from_millis(300)));
        assert_eq!(flow.greeting_text(), "");
        assert!(!flow.cursor_visible());

        let mut pending = delay;
        while let Some(_) = pending {
            pending = flow.step(&mut rng);
        }
        assert!(flow.selector_visible());
        assert_eq!(flow.greeting_text(), "ようこそ");
    }
}
