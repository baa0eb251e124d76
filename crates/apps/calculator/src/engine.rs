//! Pure keypad state machine behind the calculator view.

const MAX_ENTRY_DIGITS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UnaryOp {
    ToggleSign,
    Sqrt,
    Percent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CalcAction {
    Digit(char),
    Decimal,
    Backspace,
    ClearEntry,
    ClearAll,
    Binary(BinaryOp),
    Unary(UnaryOp),
    Equals,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
}

/// Four-function accumulator with no operator precedence: operators fold
/// left as they are pressed, the way desk calculators behave.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CalculatorState {
    pub(crate) display: String,
    previous_value: Option<f64>,
    operation: Option<BinaryOp>,
    waiting_for_operand: bool,
    memory: f64,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
            memory: 0.0,
        }
    }
}

impl CalculatorState {
    pub(crate) fn apply(&mut self, action: CalcAction) {
        match action {
            CalcAction::Digit(digit) => self.input_digit(digit),
            CalcAction::Decimal => self.input_decimal(),
            CalcAction::Backspace => self.backspace(),
            CalcAction::ClearEntry => self.clear_entry(),
            CalcAction::ClearAll => self.clear_all(),
            CalcAction::Binary(op) => self.set_operation(op),
            CalcAction::Unary(op) => self.apply_unary(op),
            CalcAction::Equals => self.equals(),
            CalcAction::MemoryClear => self.memory = 0.0,
            CalcAction::MemoryRecall => {
                self.display = format_number(self.memory);
                self.waiting_for_operand = true;
            }
            CalcAction::MemoryAdd => {
                self.memory += self.current_value();
                self.waiting_for_operand = true;
            }
            CalcAction::MemorySubtract => {
                self.memory -= self.current_value();
                self.waiting_for_operand = true;
            }
        }
    }

    pub(crate) fn pending_text(&self) -> String {
        match (self.previous_value, self.operation) {
            (Some(previous), Some(op)) => {
                format!("{} {}", format_number(previous), op.symbol())
            }
            _ => String::new(),
        }
    }

    pub(crate) fn memory_active(&self) -> bool {
        self.memory != 0.0
    }

    fn current_value(&self) -> f64 {
        self.display.parse::<f64>().unwrap_or(0.0)
    }

    fn input_digit(&mut self, digit: char) {
        if self.waiting_for_operand {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
            return;
        }
        if self.display == "0" {
            self.display = digit.to_string();
            return;
        }
        let digits = self.display.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < MAX_ENTRY_DIGITS {
            self.display.push(digit);
        }
    }

    fn input_decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
            return;
        }
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn backspace(&mut self) {
        if self.waiting_for_operand {
            return;
        }
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
        }
    }

    fn clear_entry(&mut self) {
        self.display = "0".to_string();
        self.waiting_for_operand = false;
    }

    fn clear_all(&mut self) {
        self.display = "0".to_string();
        self.previous_value = None;
        self.operation = None;
        self.waiting_for_operand = false;
    }

    fn set_operation(&mut self, op: BinaryOp) {
        // An operator pressed before the next operand just swaps the
        // pending operator.
        if self.waiting_for_operand {
            self.operation = Some(op);
            return;
        }

        let current = self.current_value();
        let base = match (self.previous_value, self.operation) {
            (Some(previous), Some(pending)) => apply_binary(previous, pending, current),
            _ => current,
        };
        self.display = format_number(base);
        self.previous_value = Some(base);
        self.operation = Some(op);
        self.waiting_for_operand = true;
    }

    fn equals(&mut self) {
        let (Some(previous), Some(op)) = (self.previous_value, self.operation) else {
            return;
        };
        let result = apply_binary(previous, op, self.current_value());
        self.display = format_number(result);
        self.previous_value = None;
        self.operation = None;
        self.waiting_for_operand = true;
    }

    fn apply_unary(&mut self, op: UnaryOp) {
        match op {
            UnaryOp::ToggleSign => {
                if self.display == "0" || self.display == "0." {
                    return;
                }
                if let Some(rest) = self.display.strip_prefix('-') {
                    self.display = rest.to_string();
                } else {
                    self.display.insert(0, '-');
                }
            }
            UnaryOp::Sqrt => {
                let value = self.current_value();
                let result = if value < 0.0 { 0.0 } else { value.sqrt() };
                self.display = format_number(result);
                self.waiting_for_operand = true;
            }
            UnaryOp::Percent => {
                self.display = format_number(self.current_value() / 100.0);
                self.waiting_for_operand = true;
            }
        }
    }
}

/// Division by zero shows 0 instead of an error.
fn apply_binary(lhs: f64, op: BinaryOp, rhs: f64) -> f64 {
    let result = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide => {
            if rhs == 0.0 {
                return 0.0;
            }
            lhs / rhs
        }
    };
    if result.is_finite() {
        result
    } else {
        0.0
    }
}

pub(crate) fn keyboard_action(key: &str) -> Option<CalcAction> {
    match key {
        "0" => Some(CalcAction::Digit('0')),
        "1" => Some(CalcAction::Digit('1')),
        "2" => Some(CalcAction::Digit('2')),
        "3" => Some(CalcAction::Digit('3')),
        "4" => Some(CalcAction::Digit('4')),
        "5" => Some(CalcAction::Digit('5')),
        "6" => Some(CalcAction::Digit('6')),
        "7" => Some(CalcAction::Digit('7')),
        "8" => Some(CalcAction::Digit('8')),
        "9" => Some(CalcAction::Digit('9')),
        "." | "," => Some(CalcAction::Decimal),
        "+" => Some(CalcAction::Binary(BinaryOp::Add)),
        "-" => Some(CalcAction::Binary(BinaryOp::Subtract)),
        "*" | "x" | "X" => Some(CalcAction::Binary(BinaryOp::Multiply)),
        "/" => Some(CalcAction::Binary(BinaryOp::Divide)),
        "%" => Some(CalcAction::Unary(UnaryOp::Percent)),
        "=" | "Enter" => Some(CalcAction::Equals),
        "Backspace" => Some(CalcAction::Backspace),
        "Delete" => Some(CalcAction::ClearEntry),
        "Escape" => Some(CalcAction::ClearAll),
        "F9" => Some(CalcAction::Unary(UnaryOp::ToggleSign)),
        _ => None,
    }
}

pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }

    let mut text = format!("{value:.12}");
    while text.contains('.') && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn apply_all(state: &mut CalculatorState, actions: &[CalcAction]) {
        for action in actions {
            state.apply(*action);
        }
    }

    fn enter_number(state: &mut CalculatorState, text: &str) {
        for c in text.chars() {
            if c == '.' {
                state.apply(CalcAction::Decimal);
            } else {
                state.apply(CalcAction::Digit(c));
            }
        }
    }

    #[test]
    fn digits_accumulate_and_leading_zero_collapses() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "0042");
        assert_eq!(state.display, "42");
    }

    #[test]
    fn decimal_point_is_accepted_once() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "3.1.4");
        assert_eq!(state.display, "3.14");
    }

    #[test]
    fn operators_fold_left_without_precedence() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "2");
        state.apply(CalcAction::Binary(BinaryOp::Add));
        enter_number(&mut state, "3");
        state.apply(CalcAction::Binary(BinaryOp::Multiply));
        assert_eq!(state.display, "5");
        enter_number(&mut state, "4");
        state.apply(CalcAction::Equals);
        assert_eq!(state.display, "20");
    }

    #[test]
    fn second_operator_before_operand_swaps_the_pending_one() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "6");
        apply_all(
            &mut state,
            &[
                CalcAction::Binary(BinaryOp::Add),
                CalcAction::Binary(BinaryOp::Multiply),
            ],
        );
        enter_number(&mut state, "7");
        state.apply(CalcAction::Equals);
        assert_eq!(state.display, "42");
    }

    #[test]
    fn division_by_zero_shows_zero() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "8");
        state.apply(CalcAction::Binary(BinaryOp::Divide));
        enter_number(&mut state, "0");
        state.apply(CalcAction::Equals);
        assert_eq!(state.display, "0");
    }

    #[test]
    fn equals_clears_the_pending_operation() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "5");
        state.apply(CalcAction::Binary(BinaryOp::Subtract));
        enter_number(&mut state, "2");
        state.apply(CalcAction::Equals);
        assert_eq!(state.display, "3");
        assert_eq!(state.pending_text(), "");
        // A digit after equals starts a fresh entry.
        state.apply(CalcAction::Digit('9'));
        assert_eq!(state.display, "9");
    }

    #[test]
    fn sqrt_percent_and_sign_rewrite_the_entry() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "9");
        state.apply(CalcAction::Unary(UnaryOp::Sqrt));
        assert_eq!(state.display, "3");

        let mut state = CalculatorState::default();
        enter_number(&mut state, "50");
        state.apply(CalcAction::Unary(UnaryOp::Percent));
        assert_eq!(state.display, "0.5");

        let mut state = CalculatorState::default();
        enter_number(&mut state, "7");
        state.apply(CalcAction::Unary(UnaryOp::ToggleSign));
        assert_eq!(state.display, "-7");
        state.apply(CalcAction::Unary(UnaryOp::ToggleSign));
        assert_eq!(state.display, "7");
    }

    #[test]
    fn sqrt_of_a_negative_shows_zero() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "4");
        state.apply(CalcAction::Unary(UnaryOp::ToggleSign));
        state.apply(CalcAction::Unary(UnaryOp::Sqrt));
        assert_eq!(state.display, "0");
    }

    #[test]
    fn memory_accumulates_and_recalls() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "12");
        state.apply(CalcAction::MemoryAdd);
        enter_number(&mut state, "2");
        state.apply(CalcAction::MemorySubtract);
        assert!(state.memory_active());
        state.apply(CalcAction::MemoryRecall);
        assert_eq!(state.display, "10");
        state.apply(CalcAction::MemoryClear);
        assert!(!state.memory_active());
    }

    #[test]
    fn backspace_trims_the_entry_down_to_zero() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "15");
        state.apply(CalcAction::Backspace);
        assert_eq!(state.display, "1");
        state.apply(CalcAction::Backspace);
        assert_eq!(state.display, "0");
        state.apply(CalcAction::Backspace);
        assert_eq!(state.display, "0");
    }

    #[test]
    fn clear_entry_keeps_the_pending_operation() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "5");
        state.apply(CalcAction::Binary(BinaryOp::Add));
        enter_number(&mut state, "99");
        state.apply(CalcAction::ClearEntry);
        assert_eq!(state.display, "0");
        assert_eq!(state.pending_text(), "5 +");
        enter_number(&mut state, "3");
        state.apply(CalcAction::Equals);
        assert_eq!(state.display, "8");
    }

    #[test]
    fn keyboard_keys_map_to_actions() {
        assert_eq!(keyboard_action("7"), Some(CalcAction::Digit('7')));
        assert_eq!(keyboard_action("Enter"), Some(CalcAction::Equals));
        assert_eq!(
            keyboard_action("x"),
            Some(CalcAction::Binary(BinaryOp::Multiply))
        );
        assert_eq!(keyboard_action("Escape"), Some(CalcAction::ClearAll));
        assert_eq!(keyboard_action("q"), None);
    }

    #[test]
    fn format_number_trims_trailing_zeros() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-3.25), "-3.25");
    }
}
