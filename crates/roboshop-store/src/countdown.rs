//! Relative-time derivation for scheduled events.
//!
//! Shared by order ETA framing and live-class start countdowns. The
//! function is pure; callers that need a ticking display re-evaluate it on
//! their own timer (the storefront polls once per minute) and own that
//! timer's lifecycle, cancelling it when the view is torn down.

use chrono::{DateTime, Duration, Utc};
use std::fmt::Display;

/// An event that started within the last three hours still counts as
/// running; older than that, it has ended.
const IN_PROGRESS_GRACE_HOURS: i64 = 3;

/// Relative position of `now` against a scheduled target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// Target passed no more than three hours ago.
    InProgress,
    /// Target passed more than three hours ago.
    Ended,
    /// Target is less than a minute away.
    StartingSoon,
    /// Whole days/hours/minutes until the target.
    Remaining { days: i64, hours: i64, minutes: i64 },
}

/// Classify `target` relative to `now`.
pub fn countdown(target: DateTime<Utc>, now: DateTime<Utc>) -> Countdown {
    let until = target - now;
    if until <= Duration::zero() {
        return if -until <= Duration::hours(IN_PROGRESS_GRACE_HOURS) {
            Countdown::InProgress
        } else {
            Countdown::Ended
        };
    }
    if until < Duration::minutes(1) {
        return Countdown::StartingSoon;
    }
    let days = until.num_days();
    let hours = until.num_hours() - days * 24;
    let minutes = until.num_minutes() - until.num_hours() * 60;
    Countdown::Remaining {
        days,
        hours,
        minutes,
    }
}

impl Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::InProgress => write!(f, "in progress"),
            Self::Ended => write!(f, "ended"),
            Self::StartingSoon => write!(f, "Starting soon!"),
            Self::Remaining {
                days,
                hours,
                minutes,
            } => {
                if days > 0 {
                    write!(f, "{days} days, {hours}h {minutes}m remaining")
                } else if hours > 0 {
                    write!(f, "{hours}h {minutes}m remaining")
                } else {
                    write!(f, "{minutes}m remaining")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn recently_started_event_is_in_progress() {
        let now = base();
        let target = now - Duration::minutes(90);
        assert_eq!(countdown(target, now), Countdown::InProgress);
        assert_eq!(countdown(target, now).to_string(), "in progress");
    }

    #[test]
    fn grace_window_boundary() {
        let now = base();
        // Exactly three hours in the past is still running.
        assert_eq!(
            countdown(now - Duration::hours(3), now),
            Countdown::InProgress
        );
        assert_eq!(
            countdown(now - Duration::hours(4), now),
            Countdown::Ended
        );
        assert_eq!(countdown(now - Duration::hours(4), now).to_string(), "ended");
    }

    #[test]
    fn under_a_minute_is_starting_soon() {
        let now = base();
        let target = now + Duration::seconds(45);
        assert_eq!(countdown(target, now).to_string(), "Starting soon!");
    }

    #[test]
    fn days_hours_minutes_formatting() {
        let now = base();
        let target = now + Duration::days(2) + Duration::hours(3);
        assert_eq!(
            countdown(target, now).to_string(),
            "2 days, 3h 0m remaining"
        );
    }

    #[test]
    fn drops_to_hours_then_minutes() {
        let now = base();
        assert_eq!(
            countdown(now + Duration::hours(5) + Duration::minutes(7), now).to_string(),
            "5h 7m remaining"
        );
        assert_eq!(
            countdown(now + Duration::minutes(12), now).to_string(),
            "12m remaining"
        );
    }
}
