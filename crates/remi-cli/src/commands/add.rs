use remi_core::{ReminderDraft, ReminderGateway, ReminderTag, SyncController};

use crate::commands::common::{parse_due, resolve_title};
use crate::error::CliError;

pub async fn run_add<G: ReminderGateway>(
    controller: &SyncController<G>,
    title_parts: &[String],
    at: &str,
    description: Option<&str>,
    tags: Vec<ReminderTag>,
) -> Result<(), CliError> {
    let title = resolve_title(title_parts)?;
    let mut draft = ReminderDraft::new(title, parse_due(at)?).with_tags(tags);
    if let Some(text) = description {
        draft = draft.with_description(text);
    }

    let created = controller.create_reminder(draft).await?;
    println!("{}", created.id);
    Ok(())
}
