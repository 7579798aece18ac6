use remi_core::{ReminderGateway, ReminderId, ReminderStatus, SyncController};

use crate::commands::common::hydrate_until_found;
use crate::error::CliError;

pub async fn run_change_status<G: ReminderGateway>(
    controller: &SyncController<G>,
    id: &str,
    status: ReminderStatus,
) -> Result<(), CliError> {
    let id = ReminderId::new(id);
    hydrate_until_found(controller, &id).await?;
    let updated = controller.change_status(&id, status).await?;
    println!("{} [{}]", updated.id, updated.status);
    Ok(())
}
