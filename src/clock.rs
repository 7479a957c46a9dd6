//! Adding durations to 12-hour clock readings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExerciseError, Result};

const MINUTES_PER_DAY: u64 = 24 * 60;
const CLOCK_FORMAT: &str = "'H:MM AM' or 'H:MM PM'";
const DURATION_FORMAT: &str = "'H:MM'";

/// Day of the week attached to a clock reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Every weekday, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Full English name, e.g. `"Monday"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// The weekday `days` after this one.
    pub fn advance(self, days: u64) -> Self {
        let index = (self as u64 + days % 7) % 7;
        Self::ALL[index as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ExerciseError;

    /// Case-insensitive full day name.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ExerciseError::UnknownWeekday(s.to_string()))
    }
}

/// Adds `duration` (`"H:MM"`) to `start` (`"H:MM AM|PM"`) and reports the new
/// reading, the weekday when `day` is given, and how many days passed.
///
/// ```
/// use arithmos::clock::add_time;
///
/// assert_eq!(add_time("3:30 PM", "2:12", Some("Monday")).unwrap(), "5:42 PM, Monday");
/// assert_eq!(add_time("10:10 PM", "3:30", None).unwrap(), "1:40 AM (next day)");
/// ```
pub fn add_time(start: &str, duration: &str, day: Option<&str>) -> Result<String> {
    let weekday = day.map(str::parse::<Weekday>).transpose()?;
    let start_minutes = parse_clock(start)?;
    let elapsed = parse_duration(duration)?;

    let total = start_minutes
        .checked_add(elapsed)
        .ok_or_else(|| ExerciseError::invalid_time(duration, DURATION_FORMAT))?;
    let days = total / MINUTES_PER_DAY;
    let minute_of_day = total % MINUTES_PER_DAY;
    let (hour, minute) = (minute_of_day / 60, minute_of_day % 60);
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    let mut reading = format!("{display_hour}:{minute:02} {meridiem}");
    if let Some(weekday) = weekday {
        reading.push_str(&format!(", {}", weekday.advance(days)));
    }
    match days {
        0 => {}
        1 => reading.push_str(" (next day)"),
        n => reading.push_str(&format!(" ({n} days later)")),
    }
    Ok(reading)
}

/// Minutes since midnight for a 12-hour reading.
fn parse_clock(input: &str) -> Result<u64> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let &[time, meridiem] = tokens.as_slice() else {
        return Err(ExerciseError::malformed_time(input, CLOCK_FORMAT));
    };
    let (hour, minute) = split_hours_minutes(time, input, CLOCK_FORMAT)?;
    if !(1..=12).contains(&hour) {
        return Err(ExerciseError::invalid_time(input, CLOCK_FORMAT));
    }
    let offset = if meridiem.eq_ignore_ascii_case("AM") {
        0
    } else if meridiem.eq_ignore_ascii_case("PM") {
        12
    } else {
        return Err(ExerciseError::invalid_time(input, CLOCK_FORMAT));
    };
    Ok((hour % 12 + offset) * 60 + minute)
}

fn parse_duration(input: &str) -> Result<u64> {
    let (hours, minutes) = split_hours_minutes(input.trim(), input, DURATION_FORMAT)?;
    hours
        .checked_mul(60)
        .and_then(|total| total.checked_add(minutes))
        .ok_or_else(|| ExerciseError::invalid_time(input, DURATION_FORMAT))
}

fn split_hours_minutes(time: &str, input: &str, expected: &'static str) -> Result<(u64, u64)> {
    let Some((hours, minutes)) = time.split_once(':') else {
        return Err(ExerciseError::malformed_time(input, expected));
    };
    if minutes.len() != 2 {
        return Err(ExerciseError::invalid_time(input, expected));
    }
    match (parse_digits(hours), parse_digits(minutes)) {
        (Some(hours), Some(minutes)) if minutes < 60 => Ok((hours, minutes)),
        _ => Err(ExerciseError::invalid_time(input, expected)),
    }
}

fn parse_digits(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn same_day_additions() {
        assert_eq!(add_time("3:00 PM", "3:10", None).unwrap(), "6:10 PM");
        assert_eq!(
            add_time("11:30 AM", "2:32", Some("Monday")).unwrap(),
            "2:02 PM, Monday"
        );
        assert_eq!(add_time("11:43 AM", "00:20", None).unwrap(), "12:03 PM");
        assert_eq!(add_time("5:01 AM", "0:00", None).unwrap(), "5:01 AM");
    }

    #[test]
    fn crossing_midnight() {
        assert_eq!(add_time("10:10 PM", "3:30", None).unwrap(), "1:40 AM (next day)");
        assert_eq!(
            add_time("11:43 PM", "24:20", Some("tueSday")).unwrap(),
            "12:03 AM, Thursday (2 days later)"
        );
        assert_eq!(add_time("6:30 PM", "205:12", None).unwrap(), "7:42 AM (9 days later)");
        assert_eq!(
            add_time("8:16 PM", "466:02", Some("tuesday")).unwrap(),
            "6:18 AM, Monday (20 days later)"
        );
        assert_eq!(add_time("8:00 PM", "16:00", None).unwrap(), "12:00 PM (next day)");
    }

    #[test]
    fn midnight_and_noon_readings() {
        assert_eq!(add_time("12:30 AM", "0:15", None).unwrap(), "12:45 AM");
        assert_eq!(add_time("12:30 PM", "0:45", None).unwrap(), "1:15 PM");
        assert_eq!(add_time("11:59 AM", "0:01", Some("SUNDAY")).unwrap(), "12:00 PM, Sunday");
    }

    #[test]
    fn huge_durations_are_rejected_instead_of_overflowing() {
        let err = add_time("3:00 PM", "307445734561825861:00", None).unwrap_err();
        assert_eq!(
            err,
            ExerciseError::invalid_time("307445734561825861:00", DURATION_FORMAT)
        );
        assert_eq!(err.kind(), ErrorKind::Type);

        // Fits on its own, overflows once the start reading is added.
        let hours = u64::MAX / 60;
        let duration = format!("{hours}:00");
        let err = add_time("11:00 PM", &duration, None).unwrap_err();
        assert_eq!(err, ExerciseError::invalid_time(&duration, DURATION_FORMAT));
    }

    #[test]
    fn weekday_wraps_around() {
        assert_eq!(Weekday::Sunday.advance(1), Weekday::Monday);
        assert_eq!(Weekday::Wednesday.advance(700), Weekday::Wednesday);
        assert_eq!("friday".parse::<Weekday>().unwrap(), Weekday::Friday);
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        let err = add_time("3:00", "1:00", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arity);
        let err = add_time("13:00 PM", "1:00", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        let err = add_time("3:0 PM", "1:00", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        let err = add_time("3:00 PM", "1:75", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        let err = add_time("3:00 XM", "1:00", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        let err = add_time("3:00 PM", "1:00", Some("Caturday")).unwrap_err();
        assert_eq!(err, ExerciseError::UnknownWeekday("Caturday".into()));
        assert_eq!(err.kind(), ErrorKind::Value);
    }
}
