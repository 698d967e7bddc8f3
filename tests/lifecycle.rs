mod scenarii;

use lumina_calendar::app::Intent;
use lumina_calendar::event::{ColorTag, ReminderType};
use scenarii::*;

/// Creating via a day-cell tap: the date is pre-filled, everything the user
/// leaves untouched gets its default
#[test]
fn day_click_scenario() {
    run_edit_scenario(&EditScenario {
        source: DraftSource::DayClick(day(2024, 3, 15)),
        changes: vec![
            ChangeToApply::SetName("Tea"),
            ChangeToApply::SetTime("15:00"),
        ],
        expected: Expected::Saved {
            name: "Tea",
            date: "2024-03-15",
            time: "15:00",
            color: ColorTag::Lime,
            duration: 60,
        },
    });
}

#[test]
fn blank_draft_fully_filled_in() {
    run_edit_scenario(&EditScenario {
        source: DraftSource::Blank,
        changes: vec![
            ChangeToApply::SetName("Standup"),
            ChangeToApply::SetDate("2024-04-02"),
            ChangeToApply::SetTime("09:30"),
            ChangeToApply::SetLocation("Room 2"),
            ChangeToApply::SetColor(ColorTag::Sky),
            ChangeToApply::SetDuration(15),
            ChangeToApply::SetReminder(ReminderType::Minutes, 5),
        ],
        expected: Expected::Saved {
            name: "Standup",
            date: "2024-04-02",
            time: "09:30",
            color: ColorTag::Sky,
            duration: 15,
        },
    });
}

#[test]
fn blank_draft_without_a_name_is_rejected() {
    run_edit_scenario(&EditScenario {
        source: DraftSource::Blank,
        changes: vec![
            ChangeToApply::SetDate("2024-04-02"),
            ChangeToApply::SetTime("09:30"),
        ],
        expected: Expected::Rejected,
    });
}

#[test]
fn draft_with_an_impossible_date_is_rejected() {
    run_edit_scenario(&EditScenario {
        source: DraftSource::Blank,
        changes: vec![
            ChangeToApply::SetName("Ghost meeting"),
            ChangeToApply::SetDate("2023-02-29"),
            ChangeToApply::SetTime("10:00"),
        ],
        expected: Expected::Rejected,
    });
}

/// An AI extraction pre-fills the draft; the user only confirms
#[test]
fn extraction_scenario() {
    run_edit_scenario(&EditScenario {
        source: DraftSource::Extraction(extracted_picnic()),
        changes: vec![],
        expected: Expected::Saved {
            name: "Picnic",
            date: "2024-06-01",
            time: "11:30",
            color: ColorTag::Green,
            duration: 90,
        },
    });
}

/// Editing an existing event keeps its id and its position in the list,
/// across a reload
#[test]
fn edit_keeps_id_and_position() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    for &(date, name) in &[
        ("2024-03-10", "First"),
        ("2024-03-15", "Second"),
        ("2024-03-20", "Third"),
    ] {
        app.apply(Intent::OpenBlankEditor);
        apply_changes(
            &mut app,
            &[
                ChangeToApply::SetName(name),
                ChangeToApply::SetDate(date),
                ChangeToApply::SetTime("09:00"),
            ],
        );
        app.apply(Intent::SubmitEditor);
    }
    assert_eq!(app.events().len(), 3);
    let second_id = app.events()[1].id.clone();

    app.apply(Intent::OpenEventEditor(second_id.clone()));
    apply_changes(&mut app, &[ChangeToApply::SetName("Second, renamed")]);
    app.apply(Intent::SubmitEditor);

    let reloaded = reloaded_store(&dir);
    assert_eq!(reloaded.events().len(), 3);
    assert_eq!(reloaded.events()[1].id, second_id);
    assert_eq!(reloaded.events()[1].name, "Second, renamed");
    assert_eq!(reloaded.events()[0].name, "First");
    assert_eq!(reloaded.events()[2].name, "Third");
}

/// Deleting from the editor removes exactly that id, and the removal survives
/// a reload
#[test]
fn delete_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    for &(date, name) in &[("2024-03-10", "Keep me"), ("2024-03-15", "Delete me")] {
        app.apply(Intent::OpenBlankEditor);
        apply_changes(
            &mut app,
            &[
                ChangeToApply::SetName(name),
                ChangeToApply::SetDate(date),
                ChangeToApply::SetTime("09:00"),
            ],
        );
        app.apply(Intent::SubmitEditor);
    }
    let doomed_id = app.events()[1].id.clone();

    app.apply(Intent::OpenEventEditor(doomed_id.clone()));
    app.apply(Intent::DeleteCurrent);

    assert!(!app.editor().is_open());
    assert_eq!(app.events().len(), 1);
    assert_eq!(app.events()[0].name, "Keep me");

    let reloaded = reloaded_store(&dir);
    assert!(reloaded.events().iter().all(|e| e.id != doomed_id));

    // The grid no longer shows it anywhere
    app.apply(Intent::GoToYear(2024));
    app.apply(Intent::GoToMonth(3));
    let cells = app.grid();
    assert!(cells
        .iter()
        .all(|c| c.events.iter().all(|e| e.id != doomed_id)));
}

/// Cancelling loses the draft but nothing else
#[test]
fn cancel_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = fresh_app(&dir);

    app.apply(Intent::OpenDayEditor(day(2024, 3, 15)));
    apply_changes(&mut app, &[ChangeToApply::SetName("Never saved")]);
    app.apply(Intent::CancelEditor);

    assert!(!app.editor().is_open());
    assert!(app.events().is_empty());
    assert!(reloaded_store(&dir).events().is_empty());
}
