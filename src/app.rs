//! The application shell: top-level UI state and the intents that drive it.
//!
//! All mutation funnels through [`App::apply`], one intent at a time. The
//! execution model is single-threaded, so a store mutation plus its
//! re-serialization is one atomic step from the caller's point of view.

use chrono::NaiveDate;

use crate::editor::{EventDraft, EventEditor};
use crate::event::Event;
use crate::extract::{DailyQuote, ExtractedEvent};
use crate::grid::{self, GridCell};
use crate::i18n::Language;
use crate::store::EventStore;

/// The two top-level views
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tab {
    Calendar,
    Profile,
}

/// A user (or completion-callback) intent, applied as one state transition
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    SwitchTab(Tab),
    ToggleLanguage,

    NextMonth,
    PreviousMonth,
    GoToMonth(u32),
    GoToYear(i32),
    GoToToday,

    OpenBlankEditor,
    OpenDayEditor(NaiveDate),
    /// Open the editor on the persisted event with this id
    OpenEventEditor(String),
    SubmitEditor,
    CancelEditor,
    DeleteCurrent,

    /// An external extraction call has been fired
    ExtractionStarted,
    /// An extraction call resolved. `generation` is the counter value read
    /// right after `ExtractionStarted`; a mismatch means the user has moved on
    /// and the result is stale
    ExtractionFinished {
        generation: u64,
        result: Option<ExtractedEvent>,
    },
    ListeningStarted,
    ListeningFinished,
    QuoteLoaded(Option<DailyQuote>),

    DismissNotice,
}

/// The whole client application state
pub struct App {
    store: EventStore,
    editor: EventEditor,
    tab: Tab,
    language: Language,
    reference_date: NaiveDate,
    busy: bool,
    listening: bool,
    quote: Option<DailyQuote>,
    notice: Option<String>,
    extraction_generation: u64,
}

impl App {
    pub fn new(store: EventStore) -> Self {
        Self {
            store,
            editor: EventEditor::new(),
            tab: Tab::Calendar,
            language: Language::default(),
            reference_date: grid::today(),
            busy: false,
            listening: false,
            quote: None,
            notice: None,
            extraction_generation: 0,
        }
    }

    /// Apply one intent
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::SwitchTab(tab) => self.tab = tab,
            Intent::ToggleLanguage => self.language = self.language.toggled(),

            Intent::NextMonth => self.reference_date = grid::next_month(self.reference_date),
            Intent::PreviousMonth => {
                self.reference_date = grid::previous_month(self.reference_date)
            }
            Intent::GoToMonth(month) => {
                self.reference_date = grid::with_month(self.reference_date, month)
            }
            Intent::GoToYear(year) => {
                self.reference_date = grid::with_year(self.reference_date, year)
            }
            Intent::GoToToday => self.reference_date = grid::today(),

            Intent::OpenBlankEditor => self.editor.open(EventDraft::blank()),
            Intent::OpenDayEditor(date) => self.editor.open(EventDraft::for_day(date)),
            Intent::OpenEventEditor(id) => {
                match self.store.events().iter().find(|e| e.id == id) {
                    Some(event) => self.editor.open(EventDraft::from(event)),
                    None => log::warn!("No event {:?} to edit", id),
                }
            }
            Intent::SubmitEditor => match self.editor.submit() {
                Ok(event) => {
                    self.store.upsert(event);
                    self.notice = None;
                }
                Err(err) => {
                    // Local failure: the form stays open, nothing reaches the store
                    log::debug!("Rejected draft: {}", err);
                    self.notice = Some(err.to_string());
                }
            },
            Intent::CancelEditor => self.editor.cancel(),
            Intent::DeleteCurrent => {
                if let Some(id) = self.editor.take_delete_id() {
                    self.store.remove(&id);
                }
            }

            Intent::ExtractionStarted => {
                self.extraction_generation += 1;
                self.busy = true;
            }
            Intent::ExtractionFinished { generation, result } => {
                if generation != self.extraction_generation {
                    // A late result from a dismissed capture must not reopen the editor
                    log::debug!("Dropping stale extraction result (generation {})", generation);
                    return;
                }
                self.busy = false;
                match result {
                    Some(extracted) => self.editor.open(EventDraft::from(extracted)),
                    None => {
                        self.notice = Some(self.translations().no_image.to_string());
                    }
                }
            }
            Intent::ListeningStarted => self.listening = true,
            Intent::ListeningFinished => self.listening = false,
            Intent::QuoteLoaded(quote) => self.quote = quote,

            Intent::DismissNotice => self.notice = None,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Whether an extraction call is in flight (the "processing" indicator)
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn editor(&self) -> &EventEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EventEditor {
        &mut self.editor
    }

    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    /// The transient failure/validation toast, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The counter to stamp on the matching `ExtractionFinished` intent.
    /// Read it right after applying `ExtractionStarted`
    pub fn extraction_generation(&self) -> u64 {
        self.extraction_generation
    }

    pub fn translations(&self) -> &'static crate::i18n::Translations {
        self.language.translations()
    }

    /// The month grid for the current reference date and language
    pub fn grid(&self) -> Vec<GridCell> {
        grid::month_grid(
            self.reference_date,
            self.language,
            grid::today(),
            self.store.events(),
        )
    }

    pub fn month_label(&self) -> &'static str {
        grid::month_label(self.reference_date, self.language)
    }

    pub fn weekday_labels(&self) -> [&'static str; 7] {
        grid::weekday_labels(self.language)
    }

    /// The quote shown under the title: the fetched one for the current
    /// language, or the fixed fallback when none ever arrived
    pub fn display_quote(&self) -> &str {
        let fetched = self.quote.as_ref().map(|q| match self.language {
            Language::Zh => q.zh.as_str(),
            Language::En => q.en.as_str(),
        });
        match fetched {
            Some(text) if !text.is_empty() => text,
            _ => self.translations().default_quote,
        }
    }

    /// How many events fall in the reference month (the profile page figure)
    pub fn monthly_event_count(&self) -> usize {
        use chrono::Datelike;
        self.store
            .events()
            .iter()
            .filter_map(|e| e.calendar_date())
            .filter(|d| {
                d.year() == self.reference_date.year() && d.month() == self.reference_date.month()
            })
            .count()
    }
}
