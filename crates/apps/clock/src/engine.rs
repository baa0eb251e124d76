//! Time-of-day decomposition, hand angles, and the seven-segment table.

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ClockFace {
    pub(crate) hours: u8,
    pub(crate) minutes: u8,
    pub(crate) seconds: u8,
}

/// Local time of day for a unix timestamp and a UTC offset in minutes.
pub(crate) fn face_at(unix_ms: u64, offset_minutes: i32) -> ClockFace {
    let local_seconds = unix_ms as i64 / 1_000 + i64::from(offset_minutes) * 60;
    let of_day = local_seconds.rem_euclid(SECONDS_PER_DAY);
    ClockFace {
        hours: (of_day / 3_600) as u8,
        minutes: (of_day / 60 % 60) as u8,
        seconds: (of_day % 60) as u8,
    }
}

impl ClockFace {
    /// Hour hand angle in degrees, sweeping with the minutes.
    pub(crate) fn hour_angle(self) -> f64 {
        f64::from(self.hours % 12) * 30.0 + f64::from(self.minutes) * 0.5
    }

    /// Minute hand angle in degrees, sweeping with the seconds.
    pub(crate) fn minute_angle(self) -> f64 {
        f64::from(self.minutes) * 6.0 + f64::from(self.seconds) * 0.1
    }

    pub(crate) fn second_angle(self) -> f64 {
        f64::from(self.seconds) * 6.0
    }
}

/// Calendar date for a unix timestamp and a UTC offset in minutes.
pub(crate) fn date_line(unix_ms: u64, offset_minutes: i32) -> String {
    const WEEKDAYS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];
    let local_seconds = unix_ms as i64 / 1_000 + i64::from(offset_minutes) * 60;
    let days = local_seconds.div_euclid(SECONDS_PER_DAY);
    let (year, month, day) = civil_from_days(days);
    // 1970-01-01 was a Thursday.
    let weekday = WEEKDAYS[(days + 3).rem_euclid(7) as usize];
    format!("{weekday} {year:04}-{month:02}-{day:02}")
}

// Gregorian date from days since the unix epoch.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = if month <= 2 { year + 1 } else { year };
    (year, month, day)
}

/// Splits a 0..=99 value into its tens and ones digits.
pub(crate) fn two_digits(value: u8) -> (u8, u8) {
    (value / 10 % 10, value % 10)
}

/// Lit segments per digit, in a-g order: top, top-right, bottom-right,
/// bottom, bottom-left, top-left, middle.
pub(crate) fn digit_segments(digit: u8) -> [bool; 7] {
    const TABLE: [[bool; 7]; 10] = [
        [true, true, true, true, true, true, false],
        [false, true, true, false, false, false, false],
        [true, true, false, true, true, false, true],
        [true, true, true, true, false, false, true],
        [false, true, true, false, false, true, true],
        [true, false, true, true, false, true, true],
        [true, false, true, true, true, true, true],
        [true, true, true, false, false, false, false],
        [true, true, true, true, true, true, true],
        [true, true, true, true, false, true, true],
    ];
    TABLE[usize::from(digit) % 10]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn epoch_midnight_reads_zero() {
        assert_eq!(
            face_at(0, 0),
            ClockFace {
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn positive_offset_shifts_the_face_forward() {
        let face = face_at(0, 90);
        assert_eq!((face.hours, face.minutes), (1, 30));
    }

    #[test]
    fn negative_offset_wraps_to_the_previous_day() {
        let face = face_at(3_600_000, -120);
        assert_eq!((face.hours, face.minutes, face.seconds), (23, 0, 0));
    }

    #[test]
    fn hands_sweep_between_marks() {
        let face = ClockFace {
            hours: 15,
            minutes: 30,
            seconds: 30,
        };
        assert_eq!(face.hour_angle(), 105.0);
        assert_eq!(face.minute_angle(), 183.0);
        assert_eq!(face.second_angle(), 180.0);
    }

    #[test]
    fn noon_hour_hand_points_up() {
        let face = ClockFace {
            hours: 12,
            minutes: 0,
            seconds: 0,
        };
        assert_eq!(face.hour_angle(), 0.0);
    }

    #[test]
    fn date_line_formats_known_dates() {
        assert_eq!(date_line(0, 0), "THU 1970-01-01");
        // 2000-02-29 12:00 UTC, a leap day.
        assert_eq!(date_line(951_825_600_000, 0), "TUE 2000-02-29");
        // A positive offset can roll the date forward past midnight.
        assert_eq!(date_line(86_400_000 - 1_000, 60), "FRI 1970-01-02");
    }

    #[test]
    fn segment_table_matches_known_digits() {
        assert_eq!(digit_segments(8), [true; 7]);
        assert_eq!(
            digit_segments(1),
            [false, true, true, false, false, false, false]
        );
        assert_eq!(digit_segments(0).iter().filter(|on| **on).count(), 6);
        assert_eq!(two_digits(59), (5, 9));
        assert_eq!(two_digits(7), (0, 7));
    }
}
