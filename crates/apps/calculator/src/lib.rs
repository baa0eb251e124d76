//! Keypad calculator accessory.

use desktop_app_contract::AppMountContext;
use leptos::ev::KeyboardEvent;
use leptos::*;
use system_ui::prelude::*;

mod engine;

use engine::{keyboard_action, BinaryOp, CalcAction, CalculatorState, UnaryOp};

#[derive(Clone, Copy)]
struct CalcKeySpec {
    id: &'static str,
    label: &'static str,
    layout_class: &'static str,
    title: &'static str,
    action: CalcAction,
}

const CALC_KEYS: [CalcKeySpec; 26] = [
    CalcKeySpec {
        id: "mc",
        label: "MC",
        layout_class: "calc-key-memory",
        title: "Clear memory",
        action: CalcAction::MemoryClear,
    },
    CalcKeySpec {
        id: "mr",
        label: "MR",
        layout_class: "calc-key-memory",
        title: "Recall memory",
        action: CalcAction::MemoryRecall,
    },
    CalcKeySpec {
        id: "mplus",
        label: "M+",
        layout_class: "calc-key-memory",
        title: "Add to memory",
        action: CalcAction::MemoryAdd,
    },
    CalcKeySpec {
        id: "mminus",
        label: "M-",
        layout_class: "calc-key-memory",
        title: "Subtract from memory",
        action: CalcAction::MemorySubtract,
    },
    CalcKeySpec {
        id: "back",
        label: "Back",
        layout_class: "calc-key-util",
        title: "Backspace",
        action: CalcAction::Backspace,
    },
    CalcKeySpec {
        id: "ce",
        label: "CE",
        layout_class: "calc-key-util",
        title: "Clear entry (Del)",
        action: CalcAction::ClearEntry,
    },
    CalcKeySpec {
        id: "c",
        label: "C",
        layout_class: "calc-key-util",
        title: "Clear all (Esc)",
        action: CalcAction::ClearAll,
    },
    CalcKeySpec {
        id: "sqrt",
        label: "\u{221A}",
        layout_class: "calc-key-util",
        title: "Square root",
        action: CalcAction::Unary(UnaryOp::Sqrt),
    },
    CalcKeySpec {
        id: "7",
        label: "7",
        layout_class: "calc-key-digit",
        title: "7",
        action: CalcAction::Digit('7'),
    },
    CalcKeySpec {
        id: "8",
        label: "8",
        layout_class: "calc-key-digit",
        title: "8",
        action: CalcAction::Digit('8'),
    },
    CalcKeySpec {
        id: "9",
        label: "9",
        layout_class: "calc-key-digit",
        title: "9",
        action: CalcAction::Digit('9'),
    },
    CalcKeySpec {
        id: "divide",
        label: "/",
        layout_class: "calc-key-operator",
        title: "Divide",
        action: CalcAction::Binary(BinaryOp::Divide),
    },
    CalcKeySpec {
        id: "4",
        label: "4",
        layout_class: "calc-key-digit",
        title: "4",
        action: CalcAction::Digit('4'),
    },
    CalcKeySpec {
        id: "5",
        label: "5",
        layout_class: "calc-key-digit",
        title: "5",
        action: CalcAction::Digit('5'),
    },
    CalcKeySpec {
        id: "6",
        label: "6",
        layout_class: "calc-key-digit",
        title: "6",
        action: CalcAction::Digit('6'),
    },
    CalcKeySpec {
        id: "mul",
        label: "*",
        layout_class: "calc-key-operator",
        title: "Multiply",
        action: CalcAction::Binary(BinaryOp::Multiply),
    },
    CalcKeySpec {
        id: "1",
        label: "1",
        layout_class: "calc-key-digit",
        title: "1",
        action: CalcAction::Digit('1'),
    },
    CalcKeySpec {
        id: "2",
        label: "2",
        layout_class: "calc-key-digit",
        title: "2",
        action: CalcAction::Digit('2'),
    },
    CalcKeySpec {
        id: "3",
        label: "3",
        layout_class: "calc-key-digit",
        title: "3",
        action: CalcAction::Digit('3'),
    },
    CalcKeySpec {
        id: "sub",
        label: "-",
        layout_class: "calc-key-operator",
        title: "Subtract",
        action: CalcAction::Binary(BinaryOp::Subtract),
    },
    CalcKeySpec {
        id: "0",
        label: "0",
        layout_class: "calc-key-digit",
        title: "0",
        action: CalcAction::Digit('0'),
    },
    CalcKeySpec {
        id: "dot",
        label: ".",
        layout_class: "calc-key-digit",
        title: "Decimal point",
        action: CalcAction::Decimal,
    },
    CalcKeySpec {
        id: "percent",
        label: "%",
        layout_class: "calc-key-util",
        title: "Percent",
        action: CalcAction::Unary(UnaryOp::Percent),
    },
    CalcKeySpec {
        id: "add",
        label: "+",
        layout_class: "calc-key-operator",
        title: "Add",
        action: CalcAction::Binary(BinaryOp::Add),
    },
    CalcKeySpec {
        id: "sign",
        label: "+/-",
        layout_class: "calc-key-util",
        title: "Toggle sign (F9)",
        action: CalcAction::Unary(UnaryOp::ToggleSign),
    },
    CalcKeySpec {
        id: "eq",
        label: "=",
        layout_class: "calc-key-equals calc-key-wide",
        title: "Equals (Enter)",
        action: CalcAction::Equals,
    },
];

/// Mounts the calculator into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    let _ = context;
    view! { <CalculatorApp /> }.into_view()
}

#[component]
fn CalculatorApp() -> impl IntoView {
    let calc = create_rw_signal(CalculatorState::default());

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if let Some(action) = keyboard_action(&ev.key()) {
            ev.prevent_default();
            calc.update(|state| state.apply(action));
        }
    };

    view! {
        <AppShell layout_class="app-calculator">
            <div class="calc-workspace" tabindex="0" on:keydown=on_keydown>
                <GroupFrame layout_class="calc-display-panel" ui_slot="calc-display">
                    <span class="calc-memory-flag" aria-hidden="true">
                        {move || if calc.get().memory_active() { "M" } else { "" }}
                    </span>
                    <span class="calc-pending" aria-live="off">
                        {move || calc.get().pending_text()}
                    </span>
                    <output class="calc-display" aria-live="polite">
                        {move || calc.get().display.clone()}
                    </output>
                </GroupFrame>
                <div class="calc-keypad" role="group" aria-label="Calculator keys">
                    {CALC_KEYS
                        .into_iter()
                        .map(|spec| {
                            view! {
                                <Button
                                    layout_class=spec.layout_class
                                    ui_slot="calc-key"
                                    id=format!("calc-key-{}", spec.id)
                                    title=spec.title
                                    aria_label=spec.title
                                    on_click=Callback::new(move |_| {
                                        calc.update(|state| state.apply(spec.action))
                                    })
                                >
                                    {spec.label}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <StatusBar>
                <StatusBarItem>"Keys: 0-9, + - * /, Enter, Backspace, Esc"</StatusBarItem>
                <StatusBarItem>
                    {move || if calc.get().memory_active() { "Memory set" } else { "Memory empty" }}
                </StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}
