//! Calendar events and their reminder/color attributes

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The date format every event stores, and the one the grid compares against
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// The wall-clock format every event stores (24-hour, no timezone)
pub const TIME_FORMAT: &str = "%H:%M";

/// A symbolic theme tag from the closed palette.
///
/// The serialized form keeps the theme tokens earlier releases wrote,
/// so calendars saved by them still load.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTag {
    #[serde(rename = "bg-lime-400")]
    Lime,
    #[serde(rename = "bg-green-400")]
    Green,
    #[serde(rename = "bg-orange-400")]
    Orange,
    #[serde(rename = "bg-amber-400")]
    Amber,
    #[serde(rename = "bg-yellow-400")]
    Yellow,
    #[serde(rename = "bg-sky-400")]
    Sky,
}

impl ColorTag {
    /// Every tag of the palette, in display order
    pub const ALL: [ColorTag; 6] = [
        ColorTag::Lime,
        ColorTag::Green,
        ColorTag::Orange,
        ColorTag::Amber,
        ColorTag::Yellow,
        ColorTag::Sky,
    ];

    /// The serialized theme token for this tag
    pub fn as_token(&self) -> &'static str {
        match self {
            ColorTag::Lime => "bg-lime-400",
            ColorTag::Green => "bg-green-400",
            ColorTag::Orange => "bg-orange-400",
            ColorTag::Amber => "bg-amber-400",
            ColorTag::Yellow => "bg-yellow-400",
            ColorTag::Sky => "bg-sky-400",
        }
    }
}

impl Default for ColorTag {
    fn default() -> Self {
        ColorTag::Lime
    }
}

impl FromStr for ColorTag {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for tag in &Self::ALL {
            if tag.as_token() == s {
                return Ok(*tag);
            }
        }
        Err(())
    }
}

impl Display for ColorTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_token())
    }
}

/// The unit of an event's reminder offset
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderType {
    None,
    Minutes,
    Hours,
    Days,
}

impl Default for ReminderType {
    fn default() -> Self {
        ReminderType::None
    }
}

/// A persisted calendar event.
///
/// Every instance has passed the editor's validation: `name` is non-empty,
/// `date` parses as a calendar date and `time` as a wall-clock time.
/// Drafts that have not been validated yet live in
/// [`EventDraft`](crate::editor::EventDraft) instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier, generated client-side, stable for the event's lifetime
    pub id: String,
    /// Display name
    pub name: String,
    /// ISO `YYYY-MM-DD` calendar date
    pub date: String,
    /// `HH:mm` wall-clock time
    pub time: String,
    /// Free-text location, possibly empty
    pub location: String,
    /// Theme bucket
    pub color: ColorTag,
    /// Duration in minutes
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub reminder_type: ReminderType,
    pub reminder_value: u32,
}

impl Event {
    /// Generate a fresh event id (a hyphenated v4 UUID)
    pub fn random_id() -> String {
        Uuid::new_v4().to_hyphenated().to_string()
    }

    /// The calendar date of this event, or None if the stored string is malformed
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// The point in time this event starts, resolved from its date and time fields
    pub fn start(&self) -> Option<NaiveDateTime> {
        let date = self.calendar_date()?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok()?;
        Some(date.and_time(time))
    }

    /// When a reminder for this event should fire (start minus the reminder offset).
    ///
    /// Reminders are data-only in this crate: no delivery mechanism is provided,
    /// but embedding applications can schedule off this value.
    pub fn reminder_trigger(&self) -> Option<NaiveDateTime> {
        let start = self.start()?;
        let offset = match self.reminder_type {
            ReminderType::None => return None,
            ReminderType::Minutes => Duration::minutes(i64::from(self.reminder_value)),
            ReminderType::Hours => Duration::hours(i64::from(self.reminder_value)),
            ReminderType::Days => Duration::days(i64::from(self.reminder_value)),
        };
        Some(start - offset)
    }
}
