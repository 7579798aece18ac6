use remi_core::{ReminderGateway, ReminderId, SyncController};

use crate::commands::common::hydrate_until_found;
use crate::error::CliError;

pub async fn run_delete<G: ReminderGateway>(
    controller: &SyncController<G>,
    id: &str,
) -> Result<(), CliError> {
    let id = ReminderId::new(id);
    hydrate_until_found(controller, &id).await?;
    controller.delete_reminder(&id).await?;
    println!("{id}");
    Ok(())
}
