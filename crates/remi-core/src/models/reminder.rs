//! Reminder model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::tag::{normalize_tags, ReminderTag};
use crate::models::user::UserId;
use crate::{Error, Result};

/// A unique identifier for a reminder, assigned by the remote store on creation.
///
/// Opaque to the client; never minted locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderId(String);

impl ReminderId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ReminderId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Completion status of a reminder.
///
/// The remote service stores exactly these three values; anything else is
/// rejected when decoding a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderStatus {
    Incomplete,
    Complete,
    Missed,
}

impl ReminderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "INCOMPLETE",
            Self::Complete => "COMPLETE",
            Self::Missed => "MISSED",
        }
    }
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reminder in the bound user's collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Server-assigned identifier, unique within the user's collection
    pub id: ReminderId,
    /// Owning user; immutable after creation
    pub user_id: UserId,
    /// Non-empty display title
    pub title: String,
    /// Due moment, ISO-8601 on the wire
    pub timestamp: DateTime<Utc>,
    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category labels; insertion order preserved for display only
    #[serde(default)]
    pub tags: Vec<ReminderTag>,
    pub status: ReminderStatus,
}

/// Fields for creating a reminder.
///
/// The id and status are assigned remotely; a fresh reminder always comes
/// back `INCOMPLETE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDraft {
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub description: Option<String>,
    pub tags: Vec<ReminderTag>,
}

impl ReminderDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            timestamp,
            description: None,
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<ReminderTag>) -> Self {
        self.tags = tags;
        self
    }

    /// Validate and normalize the draft before it goes on the wire.
    ///
    /// Trims the title (rejecting blank ones) and deduplicates tags,
    /// defaulting an empty set to `OTHER`.
    pub fn normalized(&self) -> Result<Self> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(Error::Validation("title must not be empty".to_string()));
        }
        Ok(Self {
            title: title.to_string(),
            timestamp: self.timestamp,
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(ToString::to_string),
            tags: normalize_tags(self.tags.clone()),
        })
    }
}

/// Partial update for an existing reminder; `None` fields are left untouched
/// by the remote side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ReminderTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReminderStatus>,
}

impl ReminderPatch {
    /// Status-only patch, used for lifecycle transitions.
    #[must_use]
    pub fn status(status: ReminderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.timestamp.is_none()
            && self.description.is_none()
            && self.tags.is_none()
            && self.status.is_none()
    }

    /// Apply the provided fields to a local record, mirroring what the
    /// remote side will do. Used for optimistic updates.
    pub fn apply_to(&self, reminder: &mut Reminder) {
        if let Some(title) = &self.title {
            reminder.title = title.clone();
        }
        if let Some(timestamp) = self.timestamp {
            reminder.timestamp = timestamp;
        }
        if let Some(description) = &self.description {
            reminder.description = Some(description.clone());
        }
        if let Some(tags) = &self.tags {
            reminder.tags = normalize_tags(tags.clone());
        }
        if let Some(status) = self.status {
            reminder.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn due() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn draft_normalized_trims_title() {
        let draft = ReminderDraft::new("  take pills  ", due()).normalized().unwrap();
        assert_eq!(draft.title, "take pills");
    }

    #[test]
    fn draft_normalized_rejects_blank_title() {
        let err = ReminderDraft::new(" \t ", due()).normalized().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn draft_normalized_defaults_tags_to_other() {
        let draft = ReminderDraft::new("walk", due()).normalized().unwrap();
        assert_eq!(draft.tags, vec![ReminderTag::Other]);
    }

    #[test]
    fn draft_normalized_drops_blank_description() {
        let draft = ReminderDraft::new("walk", due())
            .with_description("   ")
            .normalized()
            .unwrap();
        assert_eq!(draft.description, None);
    }

    #[test]
    fn status_round_trips_screaming_snake_case() {
        let json = serde_json::to_string(&ReminderStatus::Incomplete).unwrap();
        assert_eq!(json, "\"INCOMPLETE\"");
        let parsed: ReminderStatus = serde_json::from_str("\"MISSED\"").unwrap();
        assert_eq!(parsed, ReminderStatus::Missed);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<ReminderStatus>("\"CANCELLED\"").is_err());
    }

    #[test]
    fn reminder_uses_camel_case_wire_names() {
        let reminder = Reminder {
            id: ReminderId::new("r1"),
            user_id: UserId::new("u1"),
            title: "call Maria".to_string(),
            timestamp: due(),
            description: None,
            tags: vec![ReminderTag::Social],
            status: ReminderStatus::Incomplete,
        };
        let value = serde_json::to_value(&reminder).unwrap();
        assert_eq!(value["userId"], "u1");
        assert_eq!(value["status"], "INCOMPLETE");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn patch_status_serializes_only_status() {
        let value = serde_json::to_value(ReminderPatch::status(ReminderStatus::Complete)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "status": "COMPLETE" })
        );
    }

    #[test]
    fn patch_apply_to_leaves_missing_fields() {
        let mut reminder = Reminder {
            id: ReminderId::new("r1"),
            user_id: UserId::new("u1"),
            title: "old".to_string(),
            timestamp: due(),
            description: Some("note".to_string()),
            tags: vec![ReminderTag::Health],
            status: ReminderStatus::Incomplete,
        };
        let patch = ReminderPatch {
            title: Some("new".to_string()),
            ..ReminderPatch::default()
        };
        patch.apply_to(&mut reminder);
        assert_eq!(reminder.title, "new");
        assert_eq!(reminder.description.as_deref(), Some("note"));
        assert_eq!(reminder.status, ReminderStatus::Incomplete);
    }
}
