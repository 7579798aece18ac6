use remi_core::{ReminderGateway, ReminderId, ReminderPatch, ReminderTag, SyncController};

use crate::commands::common::{hydrate_until_found, parse_due};
use crate::error::CliError;

pub async fn run_edit<G: ReminderGateway>(
    controller: &SyncController<G>,
    id: &str,
    title: Option<String>,
    at: Option<&str>,
    description: Option<String>,
    tags: Vec<ReminderTag>,
) -> Result<(), CliError> {
    let patch = ReminderPatch {
        title,
        timestamp: at.map(parse_due).transpose()?,
        description,
        tags: if tags.is_empty() { None } else { Some(tags) },
        status: None,
    };

    let id = ReminderId::new(id);
    hydrate_until_found(controller, &id).await?;
    let updated = controller.edit_reminder(&id, patch).await?;
    println!("{}", updated.id);
    Ok(())
}
