use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use remi_core::{Reminder, ReminderGateway, ReminderId, SyncController};
use serde::Serialize;

use crate::error::CliError;

/// Pull pages until the collection contains `id` or is exhausted. Each CLI
/// invocation starts from an empty store, so mutations hydrate first.
pub async fn hydrate_until_found<G: ReminderGateway>(
    controller: &SyncController<G>,
    id: &ReminderId,
) -> Result<(), CliError> {
    controller.refresh().await?;
    while controller.reminders()?.iter().all(|reminder| &reminder.id != id) {
        if !controller.load_more().await? {
            break;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ReminderListItem {
    pub id: String,
    pub title: String,
    pub due: String,
    pub due_relative: String,
    pub status: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub fn reminder_to_list_item(reminder: &Reminder, now: DateTime<Utc>) -> ReminderListItem {
    ReminderListItem {
        id: reminder.id.to_string(),
        title: reminder.title.clone(),
        due: reminder.timestamp.to_rfc3339(),
        due_relative: format_relative_due(reminder.timestamp, now),
        status: reminder.status.to_string(),
        tags: reminder.tags.iter().map(ToString::to_string).collect(),
        description: reminder.description.clone(),
    }
}

pub fn format_reminder_lines(reminders: &[Reminder], now: DateTime<Utc>) -> Vec<String> {
    reminders
        .iter()
        .map(|reminder| {
            let tags = reminder
                .tags
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            format!(
                "{}  [{}]  {}  ({})  #{tags}",
                reminder.id,
                reminder.status,
                reminder.title,
                format_relative_due(reminder.timestamp, now),
            )
        })
        .collect()
}

/// Render the due moment relative to `now`: "due now", "due in 2h",
/// "overdue 3d".
pub fn format_relative_due(due: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = due - now;
    let seconds = delta.num_seconds();
    if seconds.abs() < 60 {
        return "due now".to_string();
    }

    let magnitude = seconds.abs();
    let rendered = if magnitude < 60 * 60 {
        format!("{}m", magnitude / 60)
    } else if magnitude < 24 * 60 * 60 {
        format!("{}h", magnitude / (60 * 60))
    } else {
        format!("{}d", magnitude / (24 * 60 * 60))
    };

    if seconds >= 0 {
        format!("due in {rendered}")
    } else {
        format!("overdue {rendered}")
    }
}

/// Parse a due moment. Accepts full RFC 3339, `YYYY-MM-DD HH:MM` (UTC
/// assumed), or a bare `YYYY-MM-DD` (noon UTC assumed).
pub fn parse_due(raw: &str) -> Result<DateTime<Utc>, CliError> {
    let trimmed = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M") {
        return Ok(parsed.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(noon) = date.and_hms_opt(12, 0, 0) {
            return Ok(noon.and_utc());
        }
    }

    Err(CliError::InvalidDueTime(trimmed.to_string()))
}

/// Join positional title words, rejecting an empty result.
pub fn resolve_title(parts: &[String]) -> Result<String, CliError> {
    let joined = parts.join(" ").trim().to_string();
    if joined.is_empty() {
        return Err(CliError::EmptyTitle);
    }
    Ok(joined)
}
