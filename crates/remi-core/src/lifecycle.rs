//! Reminder status lifecycle rules.
//!
//! All transitions are explicit and user-triggered; the client never moves a
//! reminder to `MISSED` on its own. The remote service is the source of
//! truth for missed semantics, the client only requests the change.

use crate::models::ReminderStatus;
use crate::{Error, Result};

/// Whether `from -> to` is one of the four legal moves: mark done, mark
/// missed, and the two undos back to `INCOMPLETE`.
///
/// `COMPLETE <-> MISSED` must pass through `INCOMPLETE` so the intermediate
/// state is never silently skipped. Same-state "transitions" are rejected
/// too; a no-op write has nothing to reconcile against.
#[must_use]
pub const fn is_allowed(from: ReminderStatus, to: ReminderStatus) -> bool {
    use ReminderStatus::{Complete, Incomplete, Missed};
    matches!(
        (from, to),
        (Incomplete, Complete)
            | (Incomplete, Missed)
            | (Complete, Incomplete)
            | (Missed, Incomplete)
    )
}

/// Validate a status move, independent of whatever the UI chose to expose.
pub fn check_transition(from: ReminderStatus, to: ReminderStatus) -> Result<()> {
    if is_allowed(from, to) {
        Ok(())
    } else {
        Err(Error::InvalidTransition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ReminderStatus::{Complete, Incomplete, Missed};

    #[test]
    fn allowed_moves_pass() {
        for (from, to) in [
            (Incomplete, Complete),
            (Incomplete, Missed),
            (Complete, Incomplete),
            (Missed, Incomplete),
        ] {
            assert!(check_transition(from, to).is_ok(), "{from} -> {to}");
        }
    }

    #[test]
    fn complete_and_missed_are_not_directly_reachable_from_each_other() {
        for (from, to) in [(Complete, Missed), (Missed, Complete)] {
            let err = check_transition(from, to).unwrap_err();
            assert!(
                matches!(err, Error::InvalidTransition { .. }),
                "{from} -> {to}"
            );
        }
    }

    #[test]
    fn same_state_moves_are_rejected() {
        for status in [Incomplete, Complete, Missed] {
            assert!(check_transition(status, status).is_err(), "{status}");
        }
    }
}
