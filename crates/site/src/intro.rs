//! Intro screens: boot, loading, pause, confirm, shutdown, off, crash.
//!
//! Every animation is a `choreography` machine in a signal, paced by a
//! `desktop_runtime::motion` driver; the components here only render the
//! machine's current text and forward phase transitions upward.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use choreography::{Choice, ConfirmFlow, ConfirmTexts, Timeline, Typewriter};
use desktop_runtime::motion;
use leptos::*;

use crate::content::{BOOT_LINES, ERROR_LINES};
use crate::language::{strings, Language};

const fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

const LOADING_BLOCKS: usize = 12;

/// Types the BIOS lines, then hands off after a short hold.
#[component]
pub(crate) fn BootScreen(skip: bool, on_done: Callback<()>) -> impl IntoView {
    let script = BOOT_LINES.join("\n");
    let base = if skip { ms(12) } else { ms(28) };
    let machine = create_rw_signal(Typewriter::new(&script, base));
    let driver = motion::drive(machine);
    on_cleanup(move || driver.cancel());

    let fired = create_rw_signal(false);
    create_effect(move |_| {
        if machine.with(|m| m.is_done()) && !fired.get_untracked() {
            fired.set(true);
            set_timeout(move || on_done.call(()), ms(500));
        }
    });

    view! {
        <pre class="intro-screen intro-boot">{move || machine.with(|m| m.text())}</pre>
    }
}

/// Fills a blocky progress bar one block at a time.
#[component]
pub(crate) fn LoadingScreen(skip: bool, on_done: Callback<()>) -> impl IntoView {
    let step = if skip { ms(60) } else { ms(140) };
    let stages = (1..=LOADING_BLOCKS)
        .map(|block| (step * block as u32, block))
        .collect();
    let machine = create_rw_signal(Timeline::new(stages));
    let driver = motion::drive(machine);
    on_cleanup(move || driver.cancel());

    let fired = create_rw_signal(false);
    create_effect(move |_| {
        if machine.with(|m| m.is_done()) && !fired.get_untracked() {
            fired.set(true);
            set_timeout(move || on_done.call(()), ms(400));
        }
    });

    let bar = move || {
        let filled = machine.with(|m| m.latest().unwrap_or(0));
        format!(
            "[{}{}]",
            "\u{2588}".repeat(filled),
            "\u{2591}".repeat(LOADING_BLOCKS - filled)
        )
    };

    view! {
        <div class="intro-screen intro-loading" aria-label="Loading">
            <span class="loading-bar">{bar}</span>
        </div>
    }
}

/// Blank beat between the progress bar and the question.
#[component]
pub(crate) fn PauseScreen(skip: bool, on_done: Callback<()>) -> impl IntoView {
    let hold = if skip { ms(300) } else { ms(900) };
    let handle = set_timeout_with_handle(move || on_done.call(()), hold).ok();
    on_cleanup(move || {
        if let Some(handle) = handle {
            handle.clear();
        }
    });

    view! { <div class="intro-screen intro-pause"></div> }
}

fn confirm_texts(language: Language) -> ConfirmTexts {
    let s = strings(language);
    ConfirmTexts {
        greeting: s.greeting.to_string(),
        question: s.question.to_string(),
        yes: s.yes.to_string(),
        no: s.no.to_string(),
    }
}

/// The chained confirm dialog, with keyboard and click input plus a language
/// switcher that re-scrambles or restarts the chain per its progress.
#[component]
pub(crate) fn ConfirmScreen(
    language: RwSignal<Language>,
    on_resolve: Callback<Choice>,
) -> impl IntoView {
    let initial = language.get_untracked();
    let machine = create_rw_signal(ConfirmFlow::new(confirm_texts(initial), initial.glyphs()));
    let driver = Rc::new(RefCell::new(motion::drive(machine)));
    on_cleanup({
        let driver = Rc::clone(&driver);
        move || driver.borrow().cancel()
    });

    let commit = {
        let driver = Rc::clone(&driver);
        move || {
            let next = machine.try_update(|m| m.confirm()).flatten();
            if let Some(delay) = next {
                driver.borrow().cancel();
                *driver.borrow_mut() = motion::resume(machine, delay);
            }
        }
    };

    let keys = window_event_listener(ev::keydown, {
        let commit = commit.clone();
        move |ev| match ev.key().as_str() {
            "ArrowUp" | "ArrowDown" => machine.update(|m| m.toggle()),
            "Enter" => commit(),
            _ => {}
        }
    });
    on_cleanup(move || keys.remove());

    // Language switches re-scramble at the selector, restart earlier.
    create_effect({
        let driver = Rc::clone(&driver);
        move |previous: Option<Language>| {
            let current = language.get();
            if previous.is_none() || previous == Some(current) {
                return current;
            }
            driver.borrow().cancel();
            let next = machine
                .try_update(|m| {
                    m.set_texts(
                        confirm_texts(current),
                        current.glyphs(),
                        &mut rand::thread_rng(),
                    )
                })
                .flatten();
            if let Some(delay) = next {
                *driver.borrow_mut() = motion::resume(machine, delay);
            }
            current
        }
    });

    create_effect(move |_| {
        if let Some(choice) = machine.with(|m| m.resolution()) {
            on_resolve.call(choice);
        }
    });

    let choice_button = {
        let commit = commit.clone();
        move |choice: Choice, text: Signal<String>| {
            let commit = commit.clone();
            view! {
                <button
                    type="button"
                    class="confirm-choice"
                    data-selected=move || {
                        if machine.with(|m| m.selection() == choice) { "true" } else { "false" }
                    }
                    on:click=move |_| {
                        machine.update(|m| m.select(choice));
                        commit();
                    }
                >
                    {move || text.get()}
                </button>
            }
        }
    };

    let yes_text = Signal::derive(move || machine.with(|m| m.yes_text()));
    let no_text = Signal::derive(move || machine.with(|m| m.no_text()));

    view! {
        <div class="intro-screen intro-confirm">
            <LanguageRow language />
            <p class="confirm-greeting">
                {move || machine.with(|m| format!("{}{}", m.greeting_text(), m.dots_text()))}
                <Show when=move || machine.with(|m| m.cursor_visible()) fallback=|| ()>
                    <span class="confirm-cursor">"_"</span>
                </Show>
            </p>
            <p class="confirm-question">{move || machine.with(|m| m.question_text())}</p>
            <Show when=move || machine.with(|m| m.selector_visible()) fallback=|| ()>
                <div class="confirm-selector" role="menu">
                    {choice_button(Choice::Yes, yes_text)}
                    {choice_button(Choice::No, no_text)}
                </div>
            </Show>
            <p class="confirm-loading">{move || machine.with(|m| m.loading_text())}</p>
        </div>
    }
}

/// Types the farewell, pulses three dots, then powers off.
#[component]
pub(crate) fn ShutdownScreen(language: RwSignal<Language>, on_done: Callback<()>) -> impl IntoView {
    let farewell = strings(language.get_untracked()).farewell;
    let typing = create_rw_signal(Typewriter::new(farewell, ms(70)));
    let typing_driver = motion::drive(typing);

    let dots = create_rw_signal(Timeline::new(vec![
        (ms(400), 1usize),
        (ms(800), 2),
        (ms(1200), 3),
        (ms(1800), 0),
    ]));
    let dots_driver = Rc::new(RefCell::new(None::<motion::MotionDriver>));

    let dots_started = create_rw_signal(false);
    create_effect({
        let dots_driver = Rc::clone(&dots_driver);
        move |_| {
            if typing.with(|m| m.is_done()) && !dots_started.get_untracked() {
                dots_started.set(true);
                *dots_driver.borrow_mut() = Some(motion::drive(dots));
            }
        }
    });
    create_effect(move |_| {
        if dots_started.get() && dots.with(|m| m.is_done()) {
            on_done.call(());
        }
    });
    on_cleanup({
        let dots_driver = Rc::clone(&dots_driver);
        move || {
            typing_driver.cancel();
            if let Some(driver) = dots_driver.borrow().as_ref() {
                driver.cancel();
            }
        }
    });

    view! {
        <div class="intro-screen intro-shutdown">
            <p>
                {move || typing.with(|m| m.text())}
                {move || ".".repeat(dots.with(|m| m.latest().unwrap_or(0)))}
            </p>
        </div>
    }
}

/// The powered-off screen; a click anywhere reboots in skip mode.
#[component]
pub(crate) fn OffScreen(language: RwSignal<Language>, on_reboot: Callback<()>) -> impl IntoView {
    view! {
        <div class="intro-screen intro-off" on:click=move |_| on_reboot.call(())>
            <p>{move || strings(language.get()).off_notice}</p>
        </div>
    }
}

/// The crash easter egg; any key reboots.
#[component]
pub(crate) fn ErrorScreen(on_reboot: Callback<()>) -> impl IntoView {
    let keys = window_event_listener(ev::keydown, move |_| on_reboot.call(()));
    on_cleanup(move || keys.remove());

    view! {
        <div class="intro-screen intro-error" role="alert">
            {ERROR_LINES
                .iter()
                .map(|line| view! { <p>{*line}</p> })
                .collect_view()}
        </div>
    }
}

/// Small language switcher shown during the intro.
#[component]
pub(crate) fn LanguageRow(language: RwSignal<Language>) -> impl IntoView {
    view! {
        <div class="language-row" role="group" aria-label="Language">
            {Language::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            type="button"
                            class="language-option"
                            data-selected=move || {
                                if language.get() == option { "true" } else { "false" }
                            }
                            on:click=move |_| language.set(option)
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
