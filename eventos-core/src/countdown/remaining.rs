//! Calendar-aware decomposition of the time left until a target.

use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::constants::PLACEHOLDER;

const SECS_PER_DAY: u64 = 86_400;

/// Time left until a target, split into display units.
///
/// `days` is unbounded; the other units stay within a clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Remaining {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Remaining {
    pub const ZERO: Remaining = Remaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Time left from `now` until `target`, or `None` once the target is reached.
    ///
    /// Days are civil days in `tz`: the same wall-clock time on a later date,
    /// so a day spanning a DST change counts as one day whether it lasts 23 or
    /// 25 hours. What is left after the last whole day is exact elapsed time,
    /// floored to the second.
    pub fn until(now: DateTime<Utc>, target: DateTime<Utc>, tz: Tz) -> Option<Remaining> {
        if target <= now {
            return None;
        }

        let start = now.with_timezone(&tz);
        let end = target.with_timezone(&tz);

        let mut days = (end.date_naive() - start.date_naive()).num_days().max(0);
        let mut anchor = civil_days_after(&start, days);
        while days > 0 && anchor > target {
            days -= 1;
            anchor = civil_days_after(&start, days);
        }

        let mut days = days as u64;
        let mut rest = (target - anchor).num_seconds().max(0) as u64;

        // A 25-hour civil day can leave a full day of remainder
        if rest >= SECS_PER_DAY {
            days += rest / SECS_PER_DAY;
            rest %= SECS_PER_DAY;
        }

        Some(Remaining {
            days,
            hours: (rest / 3600) as u8,
            minutes: (rest % 3600 / 60) as u8,
            seconds: (rest % 60) as u8,
        })
    }

    /// Total seconds counting every day as 86 400 seconds.
    pub fn total_seconds(&self) -> u64 {
        self.days * SECS_PER_DAY + self.clock_seconds()
    }

    /// The instant reached by adding these units to `now`: `days` civil days
    /// in `tz`, then the clock units as elapsed time.
    ///
    /// This inverts `until` except in the last hour of a 25-hour day. A target
    /// there leaves 24 h or more after the previous anchor, `until` carries it
    /// into a day, and the reading is identical to one for the target an hour
    /// later, which is where this lands.
    pub fn landing(&self, now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
        let start = now.with_timezone(&tz);
        civil_days_after(&start, self.days as i64) + Duration::seconds(self.clock_seconds() as i64)
    }

    fn clock_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    pub fn display(&self) -> CountdownDisplay {
        CountdownDisplay {
            days: self.days.to_string(),
            hours: format!("{:02}", self.hours),
            minutes: format!("{:02}", self.minutes),
            seconds: format!("{:02}", self.seconds),
        }
    }
}

/// Text written into the four countdown slots of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownDisplay {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl CountdownDisplay {
    pub fn placeholder() -> Self {
        CountdownDisplay {
            days: PLACEHOLDER.to_string(),
            hours: PLACEHOLDER.to_string(),
            minutes: PLACEHOLDER.to_string(),
            seconds: PLACEHOLDER.to_string(),
        }
    }

    /// Slots in DOM order, tagged with their `data-unit` name.
    pub fn slots(&self) -> [(&'static str, &str); 4] {
        [
            ("days", &self.days),
            ("hours", &self.hours),
            ("minutes", &self.minutes),
            ("seconds", &self.seconds),
        ]
    }
}

/// `start` moved forward by `days` dates at the same wall-clock time.
fn civil_days_after(start: &DateTime<Tz>, days: i64) -> DateTime<Utc> {
    if days == 0 {
        return start.with_timezone(&Utc);
    }
    let tz = start.timezone();
    resolve_local(&tz, start.naive_local() + Duration::days(days))
}

fn resolve_local(tz: &Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        // Wall time skipped by a forward transition: land just past the gap
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| naive.and_utc()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REFERENCE_TZ;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn left(now: DateTime<Utc>, target: DateTime<Utc>) -> Remaining {
        Remaining::until(now, target, REFERENCE_TZ).expect("target is in the future")
    }

    #[test]
    fn test_one_minute_before_new_year() {
        let r = left(utc(2024, 12, 31, 23, 59, 0), utc(2025, 1, 1, 0, 0, 0));
        assert_eq!(r, Remaining { days: 0, hours: 0, minutes: 1, seconds: 0 });
        assert_eq!(r.total_seconds(), 60);
    }

    #[test]
    fn test_days_are_unbounded() {
        let r = left(utc(2025, 1, 1, 0, 0, 0), utc(2027, 1, 1, 0, 0, 0));
        assert_eq!(r.days, 730);
        assert_eq!((r.hours, r.minutes, r.seconds), (0, 0, 0));
    }

    #[test]
    fn test_mixed_units() {
        let r = left(utc(2025, 1, 10, 8, 15, 30), utc(2025, 1, 12, 10, 20, 45));
        assert_eq!(r, Remaining { days: 2, hours: 2, minutes: 5, seconds: 15 });
    }

    #[test]
    fn test_subsecond_remainder_floors() {
        let now = utc(2025, 1, 1, 0, 0, 0);
        let target = now + Duration::milliseconds(1500);
        assert_eq!(left(now, target).seconds, 1);

        let target = now + Duration::milliseconds(400);
        assert_eq!(left(now, target), Remaining::ZERO);
    }

    #[test]
    fn test_reached_target_is_none() {
        let now = utc(2025, 1, 1, 0, 0, 0);
        assert_eq!(Remaining::until(now, now, REFERENCE_TZ), None);
        assert_eq!(
            Remaining::until(now, now - Duration::seconds(1), REFERENCE_TZ),
            None
        );
    }

    #[test]
    fn test_spring_forward_day_counts_as_one_day() {
        // 2025-03-30 02:00 CET jumps to 03:00 CEST; 13:00 to 13:00 is 23 hours
        let now = utc(2025, 3, 29, 12, 0, 0);
        let target = utc(2025, 3, 30, 11, 0, 0);
        assert_eq!((target - now).num_hours(), 23);
        assert_eq!(left(now, target), Remaining { days: 1, hours: 0, minutes: 0, seconds: 0 });
    }

    #[test]
    fn test_fall_back_day_counts_as_one_day() {
        // 2025-10-26 03:00 CEST falls back to 02:00 CET; 13:00 to 13:00 is 25 hours
        let now = utc(2025, 10, 25, 11, 0, 0);
        let target = utc(2025, 10, 26, 12, 0, 0);
        assert_eq!((target - now).num_hours(), 25);
        assert_eq!(left(now, target), Remaining { days: 1, hours: 0, minutes: 0, seconds: 0 });
    }

    #[test]
    fn test_long_day_remainder_carries_into_days() {
        // Madrid midnight to 23:30 on the 25-hour day is 24.5 hours of elapsed time
        let now = utc(2025, 10, 25, 22, 0, 0);
        let target = utc(2025, 10, 26, 22, 30, 0);
        let r = left(now, target);
        assert_eq!(r, Remaining { days: 1, hours: 0, minutes: 30, seconds: 0 });
        assert!(r.hours < 24);

        // Same reading as one civil day plus 30 minutes, an hour later
        let later = utc(2025, 10, 26, 23, 30, 0);
        assert_eq!(left(now, later), r);
        assert_eq!(r.landing(now, REFERENCE_TZ), later);
    }

    #[test]
    fn test_landing_reconstructs_target_across_dst() {
        let now = utc(2025, 3, 28, 9, 17, 3);
        let target = utc(2025, 4, 2, 18, 45, 59);
        let r = left(now, target);
        assert_eq!(r.landing(now, REFERENCE_TZ), target);
        // Counting 86 400 s per day is off by the hour lost in the transition
        assert_eq!(r.total_seconds() as i64 - (target - now).num_seconds(), 3600);
    }

    #[test]
    fn test_display_pads_clock_units_only() {
        let r = Remaining { days: 123, hours: 4, minutes: 5, seconds: 6 };
        let d = r.display();
        assert_eq!(d.days, "123");
        assert_eq!(d.hours, "04");
        assert_eq!(d.minutes, "05");
        assert_eq!(d.seconds, "06");
    }

    #[test]
    fn test_placeholder_fills_every_slot() {
        let d = CountdownDisplay::placeholder();
        assert!(d.slots().iter().all(|(_, v)| *v == "--"));
        assert_eq!(d.slots()[3].0, "seconds");
    }
}
