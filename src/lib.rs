//! This crate implements a personal calendar: dated events, a month-grid view,
//! and an editor that can be pre-filled by a generative-AI extraction service.
//!
//! There is no server component. The [`store`] module holds the canonical event
//! list in memory and persists a complete snapshot to a local file after every
//! change. The [`grid`] module derives the month view from it, and the
//! [`editor`] module owns the one draft being created or edited at a time.
//!
//! Captures (a photo, a voice transcript) can be turned into pre-filled drafts
//! through the [`extract`] module, which talks to an external text/vision
//! service. That boundary is strictly best-effort: any failure degrades to a
//! "no result" outcome, never to a crash.
//!
//! The [`app`] module ties everything together under a message-style
//! [`Intent`](app::Intent) interface, the way a UI layer would drive it.

pub mod event;
pub use event::ColorTag;
pub use event::Event;
pub use event::ReminderType;

pub mod store;
pub use store::EventStore;

pub mod grid;
pub use grid::GridCell;

pub mod editor;
pub use editor::EventDraft;
pub use editor::EventEditor;
pub use editor::ValidationError;

pub mod extract;
pub use extract::ExtractionClient;

pub mod capture;
pub mod i18n;
pub use i18n::Language;

pub mod app;
pub use app::App;

pub mod config;
