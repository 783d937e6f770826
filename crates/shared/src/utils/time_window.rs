use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Inclusive `[start, end]` range used to filter orders by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

fn last_moment_of(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap())
}

fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_day_of_month(next_year, next_month).pred_opt().unwrap()
}

/// Window covering a single calendar day. The start keeps the time-of-day the
/// caller supplied; only the end is forced to `23:59:59.999`.
pub fn day_window(instant: NaiveDateTime) -> TimeWindow {
    TimeWindow {
        start: instant,
        end: last_moment_of(instant.date()),
    }
}

/// Window covering the calendar month `now` falls in.
pub fn current_month(now: NaiveDateTime) -> TimeWindow {
    let start = first_day_of_month(now.year(), now.month());
    TimeWindow {
        start: start.and_hms_opt(0, 0, 0).unwrap(),
        end: last_moment_of(last_day_of_month(now.year(), now.month())),
    }
}

/// Window covering the calendar month before the one `now` falls in.
/// January rolls back to December of the previous year.
pub fn previous_month(now: NaiveDateTime) -> TimeWindow {
    let (year, month) = if now.month() == 1 {
        (now.year() - 1, 12)
    } else {
        (now.year(), now.month() - 1)
    };
    TimeWindow {
        start: first_day_of_month(year, month).and_hms_opt(0, 0, 0).unwrap(),
        end: last_moment_of(last_day_of_month(year, month)),
    }
}
