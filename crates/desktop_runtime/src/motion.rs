//! Timer driver for [`choreography`] sequence machines.
//!
//! Each driver owns at most one pending browser timeout for its machine and
//! re-arms it with whatever delay the machine returns. Cancelling is
//! idempotent; starting a new driver for the same target after cancelling the
//! old one is the supersede operation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use choreography::Sequence;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::{set_timeout_with_handle, RwSignal, SignalUpdate};

/// Handle to a running sequence. Dropping it does not cancel; call
/// [`cancel`](MotionDriver::cancel), typically from `on_cleanup`.
#[derive(Clone)]
pub struct MotionDriver {
    cancelled: Rc<Cell<bool>>,
    pending: Rc<RefCell<Option<TimeoutHandle>>>,
}

impl MotionDriver {
    /// Stops the driver and clears any pending timeout. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.clear();
        }
    }
}

/// Begins `machine` and schedules its steps on the browser event loop. Every
/// step mutates the signal, so views reading it re-render per frame.
pub fn drive<M: Sequence + 'static>(machine: RwSignal<M>) -> MotionDriver {
    let driver = MotionDriver {
        cancelled: Rc::new(Cell::new(false)),
        pending: Rc::new(RefCell::new(None)),
    };

    let first = machine
        .try_update(|m| m.begin(&mut rand::thread_rng()))
        .flatten();
    if let Some(delay) = first {
        arm(machine, driver.clone(), delay);
    }
    driver
}

/// Schedules further steps of an already-armed machine. Used when a machine
/// re-activates through its own API (a confirmed choice, swapped-in texts)
/// and hands back the next delay instead of going through `begin`.
pub fn resume<M: Sequence + 'static>(machine: RwSignal<M>, delay: Duration) -> MotionDriver {
    let driver = MotionDriver {
        cancelled: Rc::new(Cell::new(false)),
        pending: Rc::new(RefCell::new(None)),
    };
    arm(machine, driver.clone(), delay);
    driver
}

fn arm<M: Sequence + 'static>(machine: RwSignal<M>, driver: MotionDriver, delay: Duration) {
    let scheduled = set_timeout_with_handle(
        {
            let driver = driver.clone();
            move || {
                if driver.cancelled.get() {
                    return;
                }
                let next = machine
                    .try_update(|m| m.step(&mut rand::thread_rng()))
                    .flatten();
                if let Some(delay) = next {
                    arm(machine, driver, delay);
                }
            }
        },
        delay,
    );

    if let Ok(handle) = scheduled {
        *driver.pending.borrow_mut() = Some(handle);
    }
}
