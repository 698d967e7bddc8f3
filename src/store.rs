//! This module provides the file-backed store that owns the canonical event list

use std::path::Path;
use std::path::PathBuf;

use crate::config;
use crate::event::Event;

/// The single source of truth for persisted events.
///
/// The store keeps the full list in memory (in insertion order) and writes a
/// complete snapshot back to its backing file after every mutation, so the
/// persisted state can never diverge from the in-memory one across reloads.
#[derive(Debug, PartialEq)]
pub struct EventStore {
    backing_file: PathBuf,
    events: Vec<Event>,
}

impl EventStore {
    /// Get the default path to the store file
    pub fn default_store_file() -> PathBuf {
        config::store_file()
    }

    /// Initialize a store from the content of its backing file.
    ///
    /// This fails soft: an absent or unparsable file yields an empty store,
    /// it never propagates an error to the caller. A corrupt blob is discarded
    /// wholesale (there is no versioning or migration scheme).
    pub fn load(path: &Path) -> Self {
        let events = match std::fs::File::open(path) {
            Err(err) => {
                log::debug!("No readable store file {:?} ({}), starting empty", path, err);
                Vec::new()
            }
            Ok(file) => match serde_json::from_reader(file) {
                Ok(events) => events,
                Err(err) => {
                    log::warn!("Discarding unparsable store file {:?}: {}", path, err);
                    Vec::new()
                }
            },
        };

        Self {
            backing_file: PathBuf::from(path),
            events,
        }
    }

    /// Initialize an empty store
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
            events: Vec::new(),
        }
    }

    /// The current events, in insertion order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Store the current events to the backing file
    fn save_to_file(&self) {
        let path = &self.backing_file;
        let file = match std::fs::File::create(path) {
            Err(err) => {
                log::warn!("Unable to save file {:?}: {}", path, err);
                return;
            }
            Ok(f) => f,
        };

        if let Err(err) = serde_json::to_writer(file, &self.events) {
            log::warn!("Unable to serialize: {}", err);
        }
    }

    /// Insert an event, or replace the event that already has the same id.
    ///
    /// Replacement happens in place, so an edited event keeps its position in
    /// the list. This is idempotent: upserting the same event twice leaves the
    /// store as if it had been upserted once. The new snapshot is persisted
    /// before returning.
    pub fn upsert(&mut self, event: Event) -> &[Event] {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.push(event),
        }
        self.save_to_file();
        &self.events
    }

    /// Remove the event with the given id.
    ///
    /// This is a no-op when no event matches. The new snapshot is persisted
    /// before returning.
    pub fn remove(&mut self, id: &str) -> &[Event] {
        self.events.retain(|e| e.id != id);
        self.save_to_file();
        &self.events
    }
}
