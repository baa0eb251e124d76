//! Clock accessory with analog and seven-segment digital faces.

use std::rc::Rc;
use std::time::Duration;

use desktop_app_contract::AppMountContext;
use leptos::*;
use platform_host::Clock;
use system_ui::prelude::*;

mod engine;

use engine::{date_line, digit_segments, face_at, two_digits, ClockFace};

const TICK: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, PartialEq, Eq)]
enum ClockMode {
    Analog,
    Digital,
}

/// Mounts the clock into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    let clock = context.services.clock();
    view! { <ClockApp clock /> }.into_view()
}

#[component]
fn ClockApp(clock: Rc<dyn Clock>) -> impl IntoView {
    let now_ms = create_rw_signal(clock.now_ms());
    let colon_lit = create_rw_signal(true);
    let mode = create_rw_signal(ClockMode::Analog);
    let offset_minutes = clock.local_offset_minutes();

    let handle = set_interval_with_handle(
        {
            let clock = Rc::clone(&clock);
            move || {
                now_ms.set(clock.now_ms());
                colon_lit.update(|lit| *lit = !*lit);
            }
        },
        TICK,
    )
    .ok();
    on_cleanup(move || {
        if let Some(handle) = handle {
            handle.clear();
        }
    });

    let face = Signal::derive(move || face_at(now_ms.get(), offset_minutes));
    let spoken_time = Signal::derive(move || {
        let face = face.get();
        format!("{:02}:{:02}:{:02}", face.hours, face.minutes, face.seconds)
    });

    view! {
        <AppShell layout_class="app-clock">
            <ToolBar aria_label="Clock mode">
                <Button
                    ui_slot="clock-mode"
                    selected=Signal::derive(move || mode.get() == ClockMode::Analog)
                    on_click=Callback::new(move |_| mode.set(ClockMode::Analog))
                >
                    "Analog"
                </Button>
                <Button
                    ui_slot="clock-mode"
                    selected=Signal::derive(move || mode.get() == ClockMode::Digital)
                    on_click=Callback::new(move |_| mode.set(ClockMode::Digital))
                >
                    "Digital"
                </Button>
            </ToolBar>
            <span class="sr-only" role="status" aria-live="off">
                {move || spoken_time.get()}
            </span>
            <Show
                when=move || mode.get() == ClockMode::Analog
                fallback=move || {
                    view! {
                        <GroupFrame layout_class="clock-digital" ui_slot="clock-digital">
                            <SegmentPair value=Signal::derive(move || face.get().hours) />
                            <SegmentColon lit=colon_lit.into() />
                            <SegmentPair value=Signal::derive(move || face.get().minutes) />
                            <SegmentColon lit=colon_lit.into() />
                            <SegmentPair value=Signal::derive(move || face.get().seconds) />
                        </GroupFrame>
                    }
                }
            >
                <AnalogFace face />
            </Show>
            <StatusBar>
                <StatusBarItem>
                    {move || date_line(now_ms.get(), offset_minutes)}
                </StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}

#[component]
fn AnalogFace(face: Signal<ClockFace>) -> impl IntoView {
    let hand_style = move |angle: f64| format!("transform: rotate({angle}deg);");
    view! {
        <div class="clock-analog" aria-hidden="true">
            {(0..12)
                .map(|mark| {
                    view! {
                        <span
                            class="clock-mark"
                            style=format!("transform: rotate({}deg);", mark * 30)
                        ></span>
                    }
                })
                .collect_view()}
            <span
                class="clock-hand clock-hand-hour"
                style=move || hand_style(face.get().hour_angle())
            ></span>
            <span
                class="clock-hand clock-hand-minute"
                style=move || hand_style(face.get().minute_angle())
            ></span>
            <span
                class="clock-hand clock-hand-second"
                style=move || hand_style(face.get().second_angle())
            ></span>
            <span class="clock-hub"></span>
        </div>
    }
}

#[component]
fn SegmentPair(value: Signal<u8>) -> impl IntoView {
    view! {
        <SevenSegmentDigit digit=Signal::derive(move || two_digits(value.get()).0) />
        <SevenSegmentDigit digit=Signal::derive(move || two_digits(value.get()).1) />
    }
}

#[component]
fn SevenSegmentDigit(digit: Signal<u8>) -> impl IntoView {
    const SEGMENT_NAMES: [&str; 7] = ["a", "b", "c", "d", "e", "f", "g"];
    view! {
        <span class="clock-seg-digit" aria-hidden="true">
            {SEGMENT_NAMES
                .iter()
                .enumerate()
                .map(|(index, name)| {
                    view! {
                        <span
                            class="clock-seg"
                            data-segment=*name
                            data-lit=move || {
                                if digit_segments(digit.get())[index] { "true" } else { "false" }
                            }
                        ></span>
                    }
                })
                .collect_view()}
        </span>
    }
}

#[component]
fn SegmentColon(lit: Signal<bool>) -> impl IntoView {
    view! {
        <span
            class="clock-colon"
            aria-hidden="true"
            data-lit=move || if lit.get() { "true" } else { "false" }
        >
            ":"
        </span>
    }
}
