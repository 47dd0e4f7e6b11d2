//! Clock display formatting.

use chrono::Timelike;

use crate::HourCycle;

/// Formats a wall-clock time as `HH:MM:SS`, two digits per field.
///
/// Under [`HourCycle::H12`] the hour runs `01`-`12` and the text ends with
/// ` AM` or ` PM`.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use dynclock_domain::{HourCycle, TimeFormat};
///
/// let time = NaiveTime::from_hms_opt(13, 5, 9).unwrap();
/// assert_eq!(TimeFormat::new(HourCycle::H12).format(&time), "01:05:09 PM");
/// assert_eq!(TimeFormat::new(HourCycle::H23).format(&time), "13:05:09");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeFormat {
    hour_cycle: HourCycle,
}

impl TimeFormat {
    /// Creates a formatter for the given hour cycle.
    #[must_use]
    pub const fn new(hour_cycle: HourCycle) -> Self {
        Self { hour_cycle }
    }

    /// The hour cycle this formatter renders.
    #[must_use]
    pub const fn hour_cycle(&self) -> HourCycle {
        self.hour_cycle
    }

    /// Renders the hour, minute and second of `time`.
    ///
    /// Leap seconds (`second` reported as 59 with a nanosecond overflow)
    /// render as `:59`.
    #[must_use]
    pub fn format<T: Timelike>(&self, time: &T) -> String {
        let (minute, second) = (time.minute(), time.second());
        match self.hour_cycle {
            HourCycle::H23 => format!("{:02}:{minute:02}:{second:02}", time.hour()),
            HourCycle::H12 => {
                let (is_pm, hour) = time.hour12();
                let suffix = if is_pm { "PM" } else { "AM" };
                format!("{hour:02}:{minute:02}:{second:02} {suffix}")
            }
        }
    }
}
