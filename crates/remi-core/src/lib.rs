//! remi-core - Core library for Remi
//!
//! This crate contains the reminder models, lifecycle rules, client-side
//! store, and the sync controller used by all Remi interfaces. Rendering,
//! auth, and platform concerns stay in the consuming layer; the core talks
//! to the remote reminder service through [`gateway::ReminderGateway`].

pub mod error;
pub mod gateway;
pub mod lifecycle;
pub mod models;
pub mod store;
pub mod sync;

pub use error::{Error, Result};
pub use gateway::{HttpReminderGateway, ReminderGateway};
pub use models::{
    Reminder, ReminderDraft, ReminderId, ReminderPatch, ReminderStatus, ReminderTag, UserId,
};
pub use store::ReminderStore;
pub use sync::{PageCursor, SyncController, PAGE_SIZE};
