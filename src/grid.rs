//! This module computes the month view: a rectangular grid of day cells,
//! each bound to the events of that day.
//!
//! All functions here are pure date arithmetic over plain calendar dates.
//! There is no time-of-day component in the grid math, so daylight-saving
//! transitions cannot affect it.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::event::{Event, DATE_FORMAT};
use crate::i18n::Language;

/// How many event chips a day cell displays before showing an overflow counter
pub const VISIBLE_CHIPS: usize = 2;

/// One day-sized unit of the rendered month view
#[derive(Clone, Debug, PartialEq)]
pub struct GridCell {
    /// The calendar day this cell represents
    pub date: NaiveDate,
    /// Whether this day belongs to the reference month (out-of-month days are dimmed)
    pub in_month: bool,
    /// Whether this day is the current real-world day
    pub is_today: bool,
    /// The events of this day, in store order
    pub events: Vec<Event>,
}

impl GridCell {
    /// The events shown as chips in this cell
    pub fn visible_events(&self) -> &[Event] {
        &self.events[..self.events.len().min(VISIBLE_CHIPS)]
    }

    /// How many events the "+N" overflow counter stands for (0 means no counter)
    pub fn overflow(&self) -> usize {
        self.events.len().saturating_sub(VISIBLE_CHIPS)
    }
}

/// The current real-world day
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The events whose date field denotes the given day.
///
/// The comparison is plain string equality on the ISO `YYYY-MM-DD` form,
/// no timezone conversion is involved.
pub fn events_on(events: &[Event], day: NaiveDate) -> Vec<Event> {
    let key = day.format(DATE_FORMAT).to_string();
    events.iter().filter(|e| e.date == key).cloned().collect()
}

/// Compute the month grid around `reference` (any date within the target month).
///
/// The grid spans from the start of the week containing the first of the month
/// to the end of the week containing the last of the month, using the locale's
/// week-start convention. Every row is therefore a full 7-day week, and the
/// cell count is always a multiple of 7 (35 or 42 depending on alignment).
/// Cells are ordered chronologically ascending, one row per week.
pub fn month_grid(
    reference: NaiveDate,
    lang: Language,
    today: NaiveDate,
    events: &[Event],
) -> Vec<GridCell> {
    let first = first_of_month(reference);
    let last = last_of_month(reference);

    let start = start_of_week(first, lang.week_start());
    let end = start_of_week(last, lang.week_start()) + Duration::days(6);

    let num_days = (end - start).num_days() + 1;
    let mut cells = Vec::with_capacity(num_days as usize);
    for offset in 0..num_days {
        let day = start + Duration::days(offset);
        cells.push(GridCell {
            date: day,
            in_month: day.year() == reference.year() && day.month() == reference.month(),
            is_today: day == today,
            events: events_on(events, day),
        });
    }
    cells
}

/// The localized name of the reference month ("March" / "三月")
pub fn month_label(reference: NaiveDate, lang: Language) -> &'static str {
    let names: &[&'static str; 12] = match lang {
        Language::En => &[
            "January", "February", "March", "April", "May", "June",
            "July", "August", "September", "October", "November", "December",
        ],
        Language::Zh => &[
            "一月", "二月", "三月", "四月", "五月", "六月",
            "七月", "八月", "九月", "十月", "十一月", "十二月",
        ],
    };
    names[reference.month0() as usize]
}

/// The localized abbreviations of all twelve months, for the month picker
pub fn month_names(lang: Language) -> [&'static str; 12] {
    match lang {
        Language::En => [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun",
            "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        Language::Zh => [
            "1月", "2月", "3月", "4月", "5月", "6月",
            "7月", "8月", "9月", "10月", "11月", "12月",
        ],
    }
}

/// The 4-digit year of the reference date
pub fn year_label(reference: NaiveDate) -> String {
    format!("{:04}", reference.year())
}

/// The weekday abbreviations heading the grid columns.
///
/// Column 0 is whichever day the locale designates as week start, and the
/// labels follow in grid-column order.
pub fn weekday_labels(lang: Language) -> [&'static str; 7] {
    // In Sunday-first order; rotated below to the locale's week start
    let names: [&'static str; 7] = match lang {
        Language::En => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
        Language::Zh => ["日", "一", "二", "三", "四", "五", "六"],
    };

    let shift = lang.week_start().num_days_from_sunday() as usize;
    let mut labels = [""; 7];
    for (column, label) in labels.iter_mut().enumerate() {
        *label = names[(column + shift) % 7];
    }
    labels
}

/// The reference date moved one month forward, day-of-month clamped
pub fn next_month(reference: NaiveDate) -> NaiveDate {
    let (year, month) = match reference.month() {
        12 => (reference.year() + 1, 1),
        m => (reference.year(), m + 1),
    };
    clamped(year, month, reference.day())
}

/// The reference date moved one month backward, day-of-month clamped
pub fn previous_month(reference: NaiveDate) -> NaiveDate {
    let (year, month) = match reference.month() {
        1 => (reference.year() - 1, 12),
        m => (reference.year(), m - 1),
    };
    clamped(year, month, reference.day())
}

/// The reference date with its month replaced (1-based), day-of-month clamped.
/// An out-of-range month leaves the reference unchanged.
pub fn with_month(reference: NaiveDate, month: u32) -> NaiveDate {
    if !(1..=12).contains(&month) {
        log::warn!("Ignoring out-of-range month {}", month);
        return reference;
    }
    clamped(reference.year(), month, reference.day())
}

/// The reference date with its year replaced, day-of-month clamped
/// (Feb 29 of a leap year becomes Feb 28 elsewhere)
pub fn with_year(reference: NaiveDate, year: i32) -> NaiveDate {
    clamped(year, reference.month(), reference.day())
}

fn first_of_month(reference: NaiveDate) -> NaiveDate {
    reference.with_day(1).unwrap(/* day 1 exists in every month */)
}

fn last_of_month(reference: NaiveDate) -> NaiveDate {
    clamped(reference.year(), reference.month(), 31)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_first = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
        m => NaiveDate::from_ymd_opt(year, m + 1, 1),
    };
    next_first
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap(/* every supported month has a last day */)
}

fn clamped(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap(/* clamped to a valid day */)
}

/// The first day of the week containing `date`, for the given week-start convention
fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_sunday()
        - week_start.num_days_from_sunday())
        % 7;
    date - Duration::days(i64::from(offset))
}
