//! Support for library configuration options

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

/// The generative model used for event extraction and daily quotes.
/// Feel free to override it when initing this library.
pub static MODEL_NAME: Lazy<Arc<Mutex<String>>> =
    Lazy::new(|| Arc::new(Mutex::new("gemini-3-flash-preview".to_string())));

/// The base URL of the generative-AI service.
/// Feel free to override it when initing this library (e.g. to point tests at a local server).
pub static API_BASE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| {
    Arc::new(Mutex::new(
        "https://generativelanguage.googleapis.com/v1beta".to_string(),
    ))
});

/// The file the event store persists to.
/// Feel free to override it when initing this library.
pub static STORE_FILE: Lazy<Arc<Mutex<PathBuf>>> = Lazy::new(|| {
    Arc::new(Mutex::new(PathBuf::from(
        "~/.config/lumina-calendar/events.json",
    )))
});

pub fn model_name() -> String {
    MODEL_NAME.lock().unwrap().clone()
}

pub fn api_base() -> String {
    API_BASE.lock().unwrap().clone()
}

pub fn store_file() -> PathBuf {
    STORE_FILE.lock().unwrap().clone()
}
