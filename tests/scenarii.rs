//! Scenarios that drive full create/edit/delete flows through the application
//! shell, checking the persisted state afterwards

use chrono::NaiveDate;

use lumina_calendar::app::{App, Intent};
use lumina_calendar::event::{ColorTag, ReminderType};
use lumina_calendar::extract::ExtractedEvent;
use lumina_calendar::EventStore;

/// Where the draft of a scenario comes from
pub enum DraftSource {
    Blank,
    DayClick(NaiveDate),
    Extraction(ExtractedEvent),
}

/// One field edit the user performs in the open editor
pub enum ChangeToApply {
    SetName(&'static str),
    SetDate(&'static str),
    SetTime(&'static str),
    SetLocation(&'static str),
    SetColor(ColorTag),
    SetDuration(u32),
    SetReminder(ReminderType, u32),
}

/// What the store must look like after submitting
pub enum Expected {
    /// The draft is rejected and nothing is persisted
    Rejected,
    /// Exactly one event is persisted, with these observable fields
    Saved {
        name: &'static str,
        date: &'static str,
        time: &'static str,
        color: ColorTag,
        duration: u32,
    },
}

pub struct EditScenario {
    pub source: DraftSource,
    pub changes: Vec<ChangeToApply>,
    pub expected: Expected,
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn fresh_app(dir: &tempfile::TempDir) -> App {
    App::new(EventStore::new(&dir.path().join("events.json")))
}

/// Reload the store the way a process restart would
pub fn reloaded_store(dir: &tempfile::TempDir) -> EventStore {
    EventStore::load(&dir.path().join("events.json"))
}

pub fn apply_changes(app: &mut App, changes: &[ChangeToApply]) {
    let draft = app
        .editor_mut()
        .draft_mut()
        .expect("scenario changes require an open editor");
    for change in changes {
        match change {
            ChangeToApply::SetName(name) => draft.name = name.to_string(),
            ChangeToApply::SetDate(date) => draft.date = date.to_string(),
            ChangeToApply::SetTime(time) => draft.time = time.to_string(),
            ChangeToApply::SetLocation(location) => draft.location = location.to_string(),
            ChangeToApply::SetColor(color) => draft.color = Some(*color),
            ChangeToApply::SetDuration(minutes) => draft.duration = Some(*minutes),
            ChangeToApply::SetReminder(unit, value) => {
                draft.reminder_type = *unit;
                draft.reminder_value = *value;
            }
        }
    }
}

/// Open the scenario's draft, apply its edits, submit, and check both the
/// in-memory store and the state a reload would see
pub fn run_edit_scenario(scenario: &EditScenario) {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    match &scenario.source {
        DraftSource::Blank => app.apply(Intent::OpenBlankEditor),
        DraftSource::DayClick(date) => app.apply(Intent::OpenDayEditor(*date)),
        DraftSource::Extraction(extracted) => {
            app.apply(Intent::ExtractionStarted);
            let generation = app.extraction_generation();
            app.apply(Intent::ExtractionFinished {
                generation,
                result: Some(extracted.clone()),
            });
        }
    }
    assert!(app.editor().is_open());

    apply_changes(&mut app, &scenario.changes);
    app.apply(Intent::SubmitEditor);

    match &scenario.expected {
        Expected::Rejected => {
            assert!(app.editor().is_open(), "a rejected draft keeps the form open");
            assert!(app.events().is_empty());
            assert!(reloaded_store(&dir).events().is_empty());
        }
        Expected::Saved {
            name,
            date,
            time,
            color,
            duration,
        } => {
            assert!(!app.editor().is_open());
            assert_eq!(app.events().len(), 1);

            // A restart must observe the exact same event
            let reloaded = reloaded_store(&dir);
            assert_eq!(reloaded.events(), app.events());

            let event = &reloaded.events()[0];
            assert_eq!(&event.name, name);
            assert_eq!(&event.date, date);
            assert_eq!(&event.time, time);
            assert_eq!(&event.color, color);
            assert_eq!(&event.duration, duration);
            assert!(!event.id.is_empty());
        }
    }
}

/// An extraction result the AI boundary could plausibly return
pub fn extracted_picnic() -> ExtractedEvent {
    ExtractedEvent {
        name: "Picnic".to_string(),
        date: "2024-06-01".to_string(),
        time: "11:30".to_string(),
        location: "Riverside park".to_string(),
        color: "bg-green-400".to_string(),
        duration: Some(90),
        description: Some("Bring the blanket".to_string()),
        reminder_type: Some(ReminderType::Hours),
        reminder_value: Some(1),
    }
}
