//! Wall-clock adapter.

use platform_host::{unix_time_ms_now, Clock};

#[derive(Debug, Clone, Copy, Default)]
/// Clock that reads `Date.now()` in the browser and the system clock off-wasm.
pub struct WebClock;

impl Clock for WebClock {
    fn now_ms(&self) -> u64 {
        unix_time_ms_now()
    }

    fn local_offset_minutes(&self) -> i32 {
        #[cfg(target_arch = "wasm32")]
        {
            // getTimezoneOffset() is minutes *behind* UTC, so flip the sign.
            -(js_sys::Date::new_0().get_timezone_offset() as i32)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            0
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn web_clock_reads_nonzero() {
        assert!(WebClock.now_ms() > 0);
    }
}
