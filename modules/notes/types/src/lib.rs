//! Shared types for the notes service and its HTTP clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A persisted note. Field order is the on-disk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Decimal millisecond timestamp assigned at creation
    pub id: String,
    pub title: String,
    pub text: String,
}

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /data` and `PUT /data/:id`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NoteInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl NoteInput {
    /// Returns `(title, text)` when both are present and non-blank.
    /// Values are returned as sent, not trimmed.
    pub fn validated(self) -> Option<(String, String)> {
        let title = self.title.filter(|t| !t.trim().is_empty())?;
        let text = self.text.filter(|t| !t.trim().is_empty())?;
        Some((title, text))
    }
}

// =====================================================
// Response Types
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Confirmation plus the note a mutation produced
#[derive(Debug, Serialize, Deserialize)]
pub struct NoteResponse {
    pub message: String,
    pub data: Note,
}

impl NoteResponse {
    pub fn new(message: impl Into<String>, data: Note) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}
