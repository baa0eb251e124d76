//! The studio main page: staged entrance, scrambled title, draggable popups,
//! services marquee, project list, and the burger menu.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use choreography::{LockScramble, MultiScramble, Timeline};
use desktop_runtime::motion;
use leptos::*;
use rand::Rng;

use crate::content::{PROJECTS, SERVICES, TITLE};
use crate::language::{field, scramble_fields, strings, Language};

const fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

const FIELD_TICK: Duration = ms(40);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Frame,
    Title,
    Footer,
    Burger,
    Welcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct EntranceShown {
    frame: bool,
    title: bool,
    footer: bool,
    burger: bool,
}

fn entrance_stages(skip: bool) -> Vec<(Duration, Stage)> {
    if skip {
        vec![
            (ms(300), Stage::Frame),
            (ms(800), Stage::Title),
            (ms(1500), Stage::Footer),
            (ms(2000), Stage::Burger),
            (ms(12_000), Stage::Welcome),
        ]
    } else {
        let welcome = 18_000 + rand::thread_rng().gen_range(0..4_000u64);
        vec![
            (ms(800), Stage::Frame),
            (ms(1500), Stage::Title),
            (ms(3500), Stage::Footer),
            (ms(5000), Stage::Burger),
            (ms(welcome), Stage::Welcome),
        ]
    }
}

fn title_machine(skip: bool, language: Language) -> LockScramble {
    let (multiplier, tick) = if skip { (8, ms(30)) } else { (14, ms(55)) };
    LockScramble::new(TITLE, multiplier, language.glyphs(), tick)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum WelcomeStep {
    Message,
    Subscribe,
    Done,
}

#[component]
pub(crate) fn MainPage(
    language: RwSignal<Language>,
    skip: bool,
    on_shutdown: Callback<()>,
    on_crash: Callback<()>,
) -> impl IntoView {
    let shown = create_rw_signal(EntranceShown::default());
    let welcome_open = create_rw_signal(false);
    let about_open = create_rw_signal(false);
    let shop_open = create_rw_signal(false);
    let menu_open = create_rw_signal(false);

    let entrance = create_rw_signal(Timeline::new(entrance_stages(skip)));
    let entrance_driver = Rc::new(RefCell::new(motion::drive(entrance)));
    create_effect(move |_| {
        match entrance.with(|t| t.latest()) {
            Some(Stage::Frame) => shown.update(|s| s.frame = true),
            Some(Stage::Title) => shown.update(|s| s.title = true),
            Some(Stage::Footer) => shown.update(|s| s.footer = true),
            Some(Stage::Burger) => shown.update(|s| s.burger = true),
            Some(Stage::Welcome) => welcome_open.set(true),
            None => {}
        }
    });

    // The title starts its own per-character lock scramble when its stage fires.
    let title = create_rw_signal(title_machine(skip, language.get_untracked()));
    let title_driver = Rc::new(RefCell::new(None::<motion::MotionDriver>));
    let title_started = create_rw_signal(false);
    create_effect({
        let title_driver = Rc::clone(&title_driver);
        move |_| {
            if shown.with(|s| s.title) && !title_started.get_untracked() {
                title_started.set(true);
                title.set(title_machine(skip, language.get_untracked()));
                *title_driver.borrow_mut() = Some(motion::drive(title));
            }
        }
    });

    // One lockstep scramble over every visible text field per language switch.
    let fields = create_rw_signal(MultiScramble::new(
        &scramble_fields(language.get_untracked()),
        language.get_untracked().glyphs(),
        FIELD_TICK,
    ));
    let fields_driver = Rc::new(RefCell::new(None::<motion::MotionDriver>));
    let switch_language = {
        let fields_driver = Rc::clone(&fields_driver);
        move |next: Language| {
            language.set(next);
            if let Some(driver) = fields_driver.borrow().as_ref() {
                driver.cancel();
            }
            fields.set(MultiScramble::new(
                &scramble_fields(next),
                next.glyphs(),
                FIELD_TICK,
            ));
            *fields_driver.borrow_mut() = Some(motion::drive(fields));
        }
    };

    let field_text = move |index: usize| {
        if fields.with(|m| m.is_active()) {
            fields.with(|m| m.text_at(index))
        } else {
            scramble_fields(language.get())[index].to_string()
        }
    };

    let replay = {
        let entrance_driver = Rc::clone(&entrance_driver);
        let title_driver = Rc::clone(&title_driver);
        move || {
            entrance_driver.borrow().cancel();
            if let Some(driver) = title_driver.borrow().as_ref() {
                driver.cancel();
            }
            shown.set(EntranceShown::default());
            title_started.set(false);
            welcome_open.set(false);
            menu_open.set(false);
            entrance.set(Timeline::new(entrance_stages(skip)));
            *entrance_driver.borrow_mut() = motion::drive(entrance);
        }
    };

    on_cleanup({
        let entrance_driver = Rc::clone(&entrance_driver);
        let title_driver = Rc::clone(&title_driver);
        let fields_driver = Rc::clone(&fields_driver);
        move || {
            entrance_driver.borrow().cancel();
            if let Some(driver) = title_driver.borrow().as_ref() {
                driver.cancel();
            }
            if let Some(driver) = fields_driver.borrow().as_ref() {
                driver.cancel();
            }
        }
    });

    let marquee_line = SERVICES.join(" \u{00B7} ");
    let marquee = format!("{marquee_line} \u{00B7} {marquee_line}");

    view! {
        <div class="main-page">
            <Show when=move || shown.with(|s| s.frame) fallback=|| ()>
                <div class="main-frame">
                    <h1 class="main-title">
                        {move || {
                            if title_started.get() { title.with(|m| m.text()) } else { String::new() }
                        }}
                    </h1>
                    <div class="services-marquee" aria-hidden="true">
                        <span>{marquee.clone()}</span>
                    </div>
                    <ul class="project-list">
                        {PROJECTS
                            .iter()
                            .map(|project| {
                                view! {
                                    <li class="project-row">
                                        <span class="project-name">{project.name}</span>
                                        <span class="project-year">{project.year}</span>
                                        <span class="project-medium">{project.medium}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>

            <Show when=move || shown.with(|s| s.footer) fallback=|| ()>
                <footer class="main-footer">
                    <span class="footer-tag">{move || field_text(field::FOOTER_TAG)}</span>
                    <button
                        type="button"
                        class="footer-link"
                        on:click=move |_| about_open.set(true)
                    >
                        {move || field_text(field::ABOUT_TITLE)}
                    </button>
                    <button
                        type="button"
                        class="footer-link"
                        on:click=move |_| shop_open.set(true)
                    >
                        {move || field_text(field::SHOP_TITLE)}
                    </button>
                </footer>
            </Show>

            <Show when=move || shown.with(|s| s.burger) fallback=|| ()>
                <button
                    type="button"
                    class="burger-button"
                    aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "\u{2261}"
                </button>
            </Show>
            <Show when=move || menu_open.get() fallback=|| ()>
                <nav class="burger-menu" aria-label="Site menu">
                    <span class="burger-heading">{move || field_text(field::MENU_LANGUAGE)}</span>
                    <div class="burger-languages" role="group">
                        {Language::ALL
                            .into_iter()
                            .map(|option| {
                                let switch_language = switch_language.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="language-option"
                                        data-selected=move || {
                                            if language.get() == option { "true" } else { "false" }
                                        }
                                        on:click=move |_| switch_language(option)
                                    >
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button type="button" class="burger-item" on:click={
                        let replay = replay.clone();
                        move |_| replay()
                    }>
                        {move || field_text(field::MENU_REPLAY)}
                    </button>
                    <button
                        type="button"
                        class="burger-item"
                        on:click=move |_| on_shutdown.call(())
                    >
                        {move || field_text(field::MENU_SHUTDOWN)}
                    </button>
                    <button
                        type="button"
                        class="burger-item burger-item-danger"
                        on:click=move |_| on_crash.call(())
                    >
                        {move || field_text(field::MENU_CRASH)}
                    </button>
                </nav>
            </Show>

            <Show when=move || welcome_open.get() fallback=|| ()>
                <WelcomePopup language field_text on_close=Callback::new(move |_| {
                    welcome_open.set(false)
                }) />
            </Show>
            <Show when=move || about_open.get() fallback=|| ()>
                <DraggablePopup
                    layout_class="popup-about"
                    initial=(120, 140)
                    title=Signal::derive(move || field_text(field::ABOUT_TITLE))
                    close_label=Signal::derive(move || strings(language.get()).close.to_string())
                    on_close=Callback::new(move |_| about_open.set(false))
                >
                    <p>{move || field_text(field::ABOUT_BODY)}</p>
                </DraggablePopup>
            </Show>
            <Show when=move || shop_open.get() fallback=|| ()>
                <DraggablePopup
                    layout_class="popup-shop"
                    initial=(200, 180)
                    title=Signal::derive(move || field_text(field::SHOP_TITLE))
                    close_label=Signal::derive(move || strings(language.get()).close.to_string())
                    on_close=Callback::new(move |_| shop_open.set(false))
                >
                    <p>{move || field_text(field::SHOP_BODY)}</p>
                </DraggablePopup>
            </Show>
        </div>
    }
}

/// The delayed welcome popup: message first, then a subscribe step.
#[component]
fn WelcomePopup(
    language: RwSignal<Language>,
    field_text: impl Fn(usize) -> String + Copy + 'static,
    on_close: Callback<()>,
) -> impl IntoView {
    let step = create_rw_signal(WelcomeStep::Message);

    view! {
        <DraggablePopup
            layout_class="popup-welcome"
            initial=(80, 90)
            title=Signal::derive(move || field_text(field::WELCOME_TITLE))
            close_label=Signal::derive(move || strings(language.get()).close.to_string())
            on_close
        >
            <Show when=move || step.get() == WelcomeStep::Message fallback=|| ()>
                <p>{move || field_text(field::WELCOME_BODY)}</p>
                <button
                    type="button"
                    class="popup-action"
                    on:click=move |_| step.set(WelcomeStep::Subscribe)
                >
                    {move || field_text(field::SUBSCRIBE_BUTTON)}
                </button>
            </Show>
            <Show when=move || step.get() == WelcomeStep::Subscribe fallback=|| ()>
                <label class="popup-subscribe">
                    {move || strings(language.get()).subscribe_prompt}
                    <input type="email" class="popup-email" />
                </label>
                <button
                    type="button"
                    class="popup-action"
                    on:click=move |_| step.set(WelcomeStep::Done)
                >
                    {move || field_text(field::SUBSCRIBE_BUTTON)}
                </button>
            </Show>
            <Show when=move || step.get() == WelcomeStep::Done fallback=|| ()>
                <p>{move || strings(language.get()).subscribed_note}</p>
            </Show>
        </DraggablePopup>
    }
}

/// Pointer-dragged popup chrome shared by the main-page dialogs.
#[component]
fn DraggablePopup(
    layout_class: &'static str,
    initial: (i32, i32),
    title: Signal<String>,
    close_label: Signal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let position = create_rw_signal(initial);
    // Pointer offset inside the popup while a drag is live.
    let grab = create_rw_signal(None::<(i32, i32)>);

    let moved = window_event_listener(ev::pointermove, move |ev| {
        if let Some((dx, dy)) = grab.get_untracked() {
            position.set(((ev.client_x() - dx).max(0), (ev.client_y() - dy).max(0)));
        }
    });
    let released = window_event_listener(ev::pointerup, move |_| {
        if grab.get_untracked().is_some() {
            grab.set(None);
        }
    });
    on_cleanup(move || {
        moved.remove();
        released.remove();
    });

    view! {
        <section
            class=format!("main-popup {layout_class}")
            style=move || {
                let (x, y) = position.get();
                format!("left: {x}px; top: {y}px;")
            }
        >
            <header
                class="main-popup-title"
                on:pointerdown=move |ev| {
                    ev.prevent_default();
                    let (x, y) = position.get_untracked();
                    grab.set(Some((ev.client_x() - x, ev.client_y() - y)));
                }
            >
                <span>{move || title.get()}</span>
                <button
                    type="button"
                    class="main-popup-close"
                    on:pointerdown=|ev| ev.stop_propagation()
                    on:click=move |_| on_close.call(())
                >
                    {move || close_label.get()}
                </button>
            </header>
            <div class="main-popup-body">{children()}</div>
        </section>
    }
}
