//! Intro/main phase machine for the `/` route.

use choreography::Choice;

/// Screens the front page moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// BIOS-style typed boot lines.
    Boot,
    /// Blocky progress bar.
    Loading,
    /// Short blank beat before the question.
    Pause,
    /// The chained confirm dialog.
    Confirm,
    /// The studio page proper.
    Main,
    /// Typed farewell after declining.
    Shutdown,
    /// "it is now safe to turn off your computer".
    Off,
    /// Easter-egg crash screen.
    Error,
}

/// Phase plus the skip flag set by rebooting, which shortens every entrance
/// timing on the next pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PhaseFlow {
    phase: Phase,
    skip: bool,
}

impl PhaseFlow {
    pub(crate) fn new() -> Self {
        Self {
            phase: Phase::Boot,
            skip: false,
        }
    }

    pub(crate) fn phase(self) -> Phase {
        self.phase
    }

    pub(crate) fn skip(self) -> bool {
        self.skip
    }

    /// Steps the scripted intro chain one screen forward. No-op outside it.
    pub(crate) fn advance_intro(&mut self) {
        self.phase = match self.phase {
            Phase::Boot => Phase::Loading,
            Phase::Loading => Phase::Pause,
            Phase::Pause => Phase::Confirm,
            other => other,
        };
    }

    /// Applies the confirm dialog's answer.
    pub(crate) fn resolve(&mut self, choice: Choice) {
        if self.phase != Phase::Confirm {
            return;
        }
        self.phase = match choice {
            Choice::Yes => Phase::Main,
            Choice::No => Phase::Shutdown,
        };
    }

    /// Burger-menu shutdown from the main page.
    pub(crate) fn shut_down(&mut self) {
        if self.phase == Phase::Main {
            self.phase = Phase::Shutdown;
        }
    }

    pub(crate) fn power_off(&mut self) {
        if self.phase == Phase::Shutdown {
            self.phase = Phase::Off;
        }
    }

    /// Burger-menu easter egg.
    pub(crate) fn crash(&mut self) {
        if self.phase == Phase::Main {
            self.phase = Phase::Error;
        }
    }

    /// Restarts the intro in skip mode. Reachable from the off screen (click)
    /// and the crash screen (any key).
    pub(crate) fn reboot(&mut self) {
        if matches!(self.phase, Phase::Off | Phase::Error) {
            self.phase = Phase::Boot;
            self.skip = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn intro_chain_reaches_the_confirm_screen() {
        let mut flow = PhaseFlow::new();
        assert_eq!(flow.phase(), Phase::Boot);
        flow.advance_intro();
        assert_eq!(flow.phase(), Phase::Loading);
        flow.advance_intro();
        assert_eq!(flow.phase(), Phase::Pause);
        flow.advance_intro();
        assert_eq!(flow.phase(), Phase::Confirm);
        // Further intro steps are inert.
        flow.advance_intro();
        assert_eq!(flow.phase(), Phase::Confirm);
    }

    #[test]
    fn yes_enters_the_main_page_and_no_shuts_down() {
        let mut flow = PhaseFlow::new();
        for _ in 0..3 {
            flow.advance_intro();
        }
        let mut declined = flow;

        flow.resolve(Choice::Yes);
        assert_eq!(flow.phase(), Phase::Main);

        declined.resolve(Choice::No);
        assert_eq!(declined.phase(), Phase::Shutdown);
        declined.power_off();
        assert_eq!(declined.phase(), Phase::Off);
    }

    #[test]
    fn reboot_from_off_restarts_in_skip_mode() {
        let mut flow = PhaseFlow::new();
        for _ in 0..3 {
            flow.advance_intro();
        }
        flow.resolve(Choice::No);
        flow.power_off();
        flow.reboot();
        assert_eq!(flow.phase(), Phase::Boot);
        assert!(flow.skip());
    }

    #[test]
    fn crash_is_only_reachable_from_main_and_reboots_on_key() {
        let mut flow = PhaseFlow::new();
        flow.crash();
        assert_eq!(flow.phase(), Phase::Boot);

        for _ in 0..3 {
            flow.advance_intro();
        }
        flow.resolve(Choice::Yes);
        flow.crash();
        assert_eq!(flow.phase(), Phase::Error);
        flow.reboot();
        assert_eq!(flow.phase(), Phase::Boot);
        assert!(flow.skip());
    }

    #[test]
    fn resolve_and_menu_actions_are_inert_elsewhere() {
        let mut flow = PhaseFlow::new();
        flow.resolve(Choice::Yes);
        assert_eq!(flow.phase(), Phase::Boot);
        flow.shut_down();
        assert_eq!(flow.phase(), Phase::Boot);
        flow.power_off();
        assert_eq!(flow.phase(), Phase::Boot);
        flow.reboot();
        assert_eq!(flow.phase(), Phase::Boot);
        assert!(!flow.skip());
    }
}
