//! This module provides the boundary to the generative-AI service.
//!
//! A capture (image bytes or a voice transcript) is sent to the service with a
//! fixed output schema and comes back as an [`ExtractedEvent`] draft, or as
//! nothing at all: every failure mode (network, HTTP status, schema mismatch)
//! degrades to `None` so callers can show a generic notice and move on.

use std::error::Error;

use base64::Engine;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::config;
use crate::editor::EventDraft;
use crate::event::{ReminderType, DATE_FORMAT};

/// A partial event as the extraction service reports it.
///
/// The field names mirror the wire schema. The color arrives as a free string
/// and is mapped onto the closed palette when the draft is built, falling back
/// to the default tag rather than rejecting the whole result.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedEvent {
    pub name: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reminder_type: Option<ReminderType>,
    #[serde(default)]
    pub reminder_value: Option<u32>,
}

impl From<ExtractedEvent> for EventDraft {
    fn from(extracted: ExtractedEvent) -> Self {
        EventDraft {
            // No id: an extracted event always saves as a new one
            id: None,
            name: extracted.name,
            date: extracted.date,
            time: extracted.time,
            location: extracted.location,
            color: Some(extracted.color.parse().unwrap_or_default()),
            duration: extracted.duration,
            description: extracted.description.filter(|d| !d.is_empty()),
            reminder_type: extracted.reminder_type.unwrap_or_default(),
            reminder_value: extracted.reminder_value.unwrap_or(0),
        }
    }
}

/// The two-language daily quote pair
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DailyQuote {
    pub zh: String,
    pub en: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// A client for the generative text/vision service
pub struct ExtractionClient {
    api_key: String,
    http_client: reqwest::Client,
}

impl ExtractionClient {
    /// Create a client, reading the API key from the `GEMINI_API_KEY` environment variable
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| "GEMINI_API_KEY environment variable not set")?;
        Ok(Self::with_api_key(api_key))
    }

    pub fn with_api_key<S: ToString>(api_key: S) -> Self {
        Self {
            api_key: api_key.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Extract a draft event from a photo.
    ///
    /// Returns None on any failure; callers should surface a generic notice,
    /// never treat this as fatal.
    pub async fn extract_from_image(&self, image: &[u8], mime_type: &str) -> Option<ExtractedEvent> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(image);
        let parts = json!([
            { "text": "Extract the calendar event details visible in this image. Return JSON." },
            { "inlineData": { "mimeType": mime_type, "data": encoded } },
        ]);

        match self.generate(parts, event_schema()).await {
            Ok(text) => parse_extracted(&text),
            Err(err) => {
                log::warn!("Image extraction failed: {}", err);
                None
            }
        }
    }

    /// Extract a draft event from a voice transcript.
    ///
    /// The current date is passed along so the service can resolve relative
    /// phrases ("tomorrow", "next Friday") to absolute dates.
    pub async fn extract_from_transcript(
        &self,
        transcript: &str,
        current_date: NaiveDate,
    ) -> Option<ExtractedEvent> {
        let prompt = format!(
            "Extract event details from this voice transcript: {:?}. Current date is {}. Return JSON.",
            transcript,
            current_date.format(DATE_FORMAT),
        );
        let parts = json!([ { "text": prompt } ]);

        match self.generate(parts, event_schema()).await {
            Ok(text) => parse_extracted(&text),
            Err(err) => {
                log::warn!("Transcript extraction failed: {}", err);
                None
            }
        }
    }

    /// Fetch the daily quote pair. Best-effort: on None the caller substitutes
    /// the fixed fallback from the translation tables.
    pub async fn daily_quote(&self) -> Option<DailyQuote> {
        let parts = json!([
            { "text": "Generate a very short, optimistic, and beautiful daily quote. One sentence. Return JSON with 'zh' and 'en' keys." },
        ]);

        match self.generate(parts, quote_schema()).await {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(quote) => Some(quote),
                Err(err) => {
                    log::warn!("Malformed daily quote: {}", err);
                    None
                }
            },
            Err(err) => {
                log::warn!("Daily quote fetch failed: {}", err);
                None
            }
        }
    }

    /// One structured-output generation call. Returns the raw JSON text of the
    /// first candidate
    async fn generate(
        &self,
        parts: serde_json::Value,
        schema: serde_json::Value,
    ) -> Result<String, Box<dyn Error>> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            config::api_base(),
            config::model_name(),
            self.api_key,
        );

        let body = json!({
            "contents": [ { "parts": parts } ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            },
        });

        let res = self.http_client.post(&url).json(&body).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(format!("Service answered {}", status).into());
        }

        let response: GenerateResponse = res.json().await?;
        let text = response
            .candidates
            .first()
            .map(|c| c.content.parts.iter().map(|p| p.text.as_str()).collect::<String>())
            .ok_or("No candidate in response")?;
        Ok(text)
    }
}

/// Attempt to parse the model's answer against the event schema; any mismatch
/// is the "no result" outcome
fn parse_extracted(text: &str) -> Option<ExtractedEvent> {
    match serde_json::from_str(text) {
        Ok(extracted) => Some(extracted),
        Err(err) => {
            log::warn!("Extraction response did not match the schema: {}", err);
            None
        }
    }
}

fn event_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name":          { "type": "STRING" },
            "date":          { "type": "STRING" },
            "time":          { "type": "STRING" },
            "location":      { "type": "STRING" },
            "color":         { "type": "STRING" },
            "duration":      { "type": "NUMBER" },
            "description":   { "type": "STRING" },
            "reminderType":  { "type": "STRING" },
            "reminderValue": { "type": "NUMBER" },
        },
        "required": ["name", "date", "time", "location", "color", "duration"],
    })
}

fn quote_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "zh": { "type": "STRING" },
            "en": { "type": "STRING" },
        },
        "required": ["zh", "en"],
    })
}
