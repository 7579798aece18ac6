//! Data models for Remi

mod reminder;
mod tag;
mod user;

pub use reminder::{Reminder, ReminderDraft, ReminderId, ReminderPatch, ReminderStatus};
pub use tag::{normalize_tags, ReminderTag};
pub use user::UserId;
