//! The event editor: a draft, its validation, and the open/closed state machine

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveTime};

use crate::event::{ColorTag, Event, ReminderType, DATE_FORMAT, TIME_FORMAT};

/// Why a draft could not be turned into a persisted event.
///
/// These are always recovered locally: the form stays open and nothing
/// reaches the store.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    MissingName,
    MissingDate,
    MissingTime,
    InvalidDate(String),
    InvalidTime(String),
    /// Submit was requested while no draft was being edited
    EditorClosed,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ValidationError::MissingName => write!(f, "the event has no name"),
            ValidationError::MissingDate => write!(f, "the event has no date"),
            ValidationError::MissingTime => write!(f, "the event has no time"),
            ValidationError::InvalidDate(d) => write!(f, "{:?} is not a valid date", d),
            ValidationError::InvalidTime(t) => write!(f, "{:?} is not a valid time", t),
            ValidationError::EditorClosed => write!(f, "no event is being edited"),
        }
    }
}

impl Error for ValidationError {}

/// An in-progress, possibly incomplete event.
///
/// Drafts only live in the editor. The only way to turn one into an [`Event`]
/// is [`EventDraft::validate`], so no code path can mistake an incomplete
/// draft for a persisted event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventDraft {
    /// Present when editing an existing event, absent for new ones
    pub id: Option<String>,
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub color: Option<ColorTag>,
    pub duration: Option<u32>,
    pub description: Option<String>,
    pub reminder_type: ReminderType,
    pub reminder_value: u32,
}

impl EventDraft {
    /// An empty shell for a blank "new event" action
    pub fn blank() -> Self {
        Self::default()
    }

    /// The shell a day-cell tap opens: date pre-filled, time at the default slot
    pub fn for_day(date: NaiveDate) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            time: "09:00".to_string(),
            color: Some(ColorTag::default()),
            ..Self::default()
        }
    }

    /// Check the required fields and produce a complete event.
    ///
    /// `name`, `date` and `time` must be filled, and date/time must denote a
    /// resolvable point in time. Optional fields get their defaults (default
    /// theme tag, 60 minutes, no reminder) and a fresh id is assigned when the
    /// draft has none.
    pub fn validate(&self) -> Result<Event, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.date.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        if self.time.is_empty() {
            return Err(ValidationError::MissingTime);
        }
        if NaiveDate::parse_from_str(&self.date, DATE_FORMAT).is_err() {
            return Err(ValidationError::InvalidDate(self.date.clone()));
        }
        if NaiveTime::parse_from_str(&self.time, TIME_FORMAT).is_err() {
            return Err(ValidationError::InvalidTime(self.time.clone()));
        }

        Ok(Event {
            id: self.id.clone().unwrap_or_else(Event::random_id),
            name: self.name.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            location: self.location.clone(),
            color: self.color.unwrap_or_default(),
            duration: match self.duration {
                Some(d) if d > 0 => d,
                _ => 60,
            },
            description: self.description.clone(),
            reminder_type: self.reminder_type,
            reminder_value: self.reminder_value,
        })
    }
}

impl From<&Event> for EventDraft {
    fn from(event: &Event) -> Self {
        Self {
            id: Some(event.id.clone()),
            name: event.name.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            color: Some(event.color),
            duration: Some(event.duration),
            description: event.description.clone(),
            reminder_type: event.reminder_type,
            reminder_value: event.reminder_value,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum EditorState {
    Closed,
    Editing(EventDraft),
}

/// The form state machine. Either closed, or editing exactly one draft.
///
/// Field updates only ever touch the in-memory draft; a completed event leaves
/// through [`submit`](EventEditor::submit) and it is the caller's job to hand
/// it to the store.
#[derive(Clone, Debug, PartialEq)]
pub struct EventEditor {
    state: EditorState,
}

impl EventEditor {
    pub fn new() -> Self {
        Self {
            state: EditorState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Editing(_))
    }

    /// Start editing the given draft, replacing any current one
    pub fn open(&mut self, draft: EventDraft) {
        self.state = EditorState::Editing(draft);
    }

    /// The draft being edited, if any
    pub fn draft(&self) -> Option<&EventDraft> {
        match &self.state {
            EditorState::Editing(draft) => Some(draft),
            EditorState::Closed => None,
        }
    }

    /// Mutable access to the draft, for field updates
    pub fn draft_mut(&mut self) -> Option<&mut EventDraft> {
        match &mut self.state {
            EditorState::Editing(draft) => Some(draft),
            EditorState::Closed => None,
        }
    }

    /// Validate the current draft and close the editor on success.
    ///
    /// On failure the editor stays open on the same draft and the error is
    /// returned for local reporting; nothing must reach the store in that case.
    pub fn submit(&mut self) -> Result<Event, ValidationError> {
        let draft = match &self.state {
            EditorState::Editing(draft) => draft,
            EditorState::Closed => return Err(ValidationError::EditorClosed),
        };

        let event = draft.validate()?;
        self.state = EditorState::Closed;
        Ok(event)
    }

    /// Request deletion of the event being edited.
    ///
    /// Only meaningful when the draft comes from a persisted event (it has an
    /// id): the editor closes and the id is handed back for the caller to
    /// remove from the store. Editing a new draft, or a closed editor, yields
    /// None and the state is left untouched.
    pub fn take_delete_id(&mut self) -> Option<String> {
        let id = match &self.state {
            EditorState::Editing(draft) => draft.id.clone()?,
            EditorState::Closed => return None,
        };
        self.state = EditorState::Closed;
        Some(id)
    }

    /// Discard the draft unconditionally. No validation is performed.
    pub fn cancel(&mut self) {
        self.state = EditorState::Closed;
    }
}

impl Default for EventEditor {
    fn default() -> Self {
        Self::new()
    }
}
