use chrono::Utc;
use remi_core::{ReminderGateway, ReminderStatus, SyncController};

use crate::commands::common::{format_reminder_lines, reminder_to_list_item, ReminderListItem};
use crate::error::CliError;

pub async fn run_list<G: ReminderGateway>(
    controller: &SyncController<G>,
    status: Option<ReminderStatus>,
    all: bool,
    as_json: bool,
) -> Result<(), CliError> {
    controller.refresh().await?;
    if all {
        while controller.load_more().await? {}
    }

    let reminders = match status {
        Some(status) => controller.view_by_status(status)?,
        None => controller.reminders()?,
    };

    let now = Utc::now();
    if as_json {
        let items = reminders
            .iter()
            .map(|reminder| reminder_to_list_item(reminder, now))
            .collect::<Vec<ReminderListItem>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_reminder_lines(&reminders, now) {
            println!("{line}");
        }
    }

    Ok(())
}
