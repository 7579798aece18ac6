//! Page-fetch sequencing and mutation safety for the reminder collection.
//!
//! The controller is the composition root's single entry point: it owns the
//! store, the pagination cursor, and the in-flight bookkeeping that keeps
//! optimistic updates reconcilable. No background timers; every operation is
//! caller-initiated.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::gateway::ReminderGateway;
use crate::lifecycle;
use crate::models::{Reminder, ReminderDraft, ReminderId, ReminderPatch, ReminderStatus, UserId};
use crate::store::ReminderStore;
use crate::{Error, Result};

/// Reminders fetched per page; fixed by the remote contract.
pub const PAGE_SIZE: usize = 10;

/// Pagination cursor for the bound user's collection.
///
/// `has_more` is inferred from page length alone: a full page may still be
/// the last one, which costs one extra empty fetch to discover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u32,
    pub has_more: bool,
}

impl PageCursor {
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            page: 0,
            has_more: true,
        }
    }
}

struct ControllerState {
    user: Option<UserId>,
    store: ReminderStore,
    cursor: PageCursor,
    /// Bumped whenever the collection is reset; in-flight page results
    /// carrying an older epoch are discarded on arrival.
    epoch: u64,
    refresh_in_flight: bool,
    page_fetch_in_flight: bool,
    mutating: HashSet<ReminderId>,
}

/// Orchestrates page fetches and guards against overlapping mutations.
pub struct SyncController<G> {
    gateway: G,
    state: Mutex<ControllerState>,
    /// Settlement signal for the in-flight refresh: the attempt's epoch and
    /// whether it succeeded. Collapsed callers wait on it instead of issuing
    /// a second request.
    refresh_done: watch::Sender<(u64, bool)>,
}

impl<G: ReminderGateway> SyncController<G> {
    #[must_use]
    pub fn new(gateway: G) -> Self {
        let (refresh_done, _) = watch::channel((0, false));
        Self {
            gateway,
            state: Mutex::new(ControllerState {
                user: None,
                store: ReminderStore::new(),
                cursor: PageCursor::initial(),
                epoch: 0,
                refresh_in_flight: false,
                page_fetch_in_flight: false,
                mutating: HashSet::new(),
            }),
            refresh_done,
        }
    }

    /// Bind the session user. A rebind resets the collection and cursor and
    /// invalidates any page result still in flight for the previous user.
    pub fn bind_user(&self, user: UserId) {
        let mut state = self.state();
        tracing::debug!(user = %user, "binding session user");
        state.user = Some(user);
        state.store = ReminderStore::new();
        state.cursor = PageCursor::initial();
        state.epoch += 1;
    }

    /// Current pagination cursor.
    #[must_use]
    pub fn cursor(&self) -> PageCursor {
        self.state().cursor
    }

    /// Snapshot of the whole collection in store order.
    pub fn reminders(&self) -> Result<Vec<Reminder>> {
        let state = self.state();
        ensure_bound(&state)?;
        Ok(state.store.iter().cloned().collect())
    }

    /// Snapshot of records with the given status, in store order.
    pub fn view_by_status(&self, status: ReminderStatus) -> Result<Vec<Reminder>> {
        let state = self.state();
        ensure_bound(&state)?;
        Ok(state.store.filter_by_status(status).cloned().collect())
    }

    /// Reset to page 0 and replace the collection with the first page.
    ///
    /// Concurrent calls collapse to one in-flight request; a caller that
    /// joins an outstanding refresh waits for it to settle and reports its
    /// outcome without issuing its own fetch. A failed refresh leaves store
    /// and cursor untouched.
    pub async fn refresh(&self) -> Result<()> {
        let mut done = self.refresh_done.subscribe();
        let started = {
            let mut state = self.state();
            let user = state.user.clone().ok_or(Error::NotBound)?;
            if state.refresh_in_flight {
                None
            } else {
                state.refresh_in_flight = true;
                state.epoch += 1;
                Some((user, state.epoch))
            }
        };
        let Some((user, epoch)) = started else {
            let _ = done.changed().await;
            let (_, ok) = *done.borrow();
            if ok {
                return Ok(());
            }
            return Err(Error::Api(
                "refresh shared with a concurrent caller failed".to_string(),
            ));
        };

        let mut attempt = RefreshGuard {
            controller: self,
            epoch,
            ok: false,
        };
        let records = self.gateway.fetch_page(&user, 0, PAGE_SIZE).await?;

        let mut state = self.state();
        let full_page = records.len() >= PAGE_SIZE;
        state.store.replace_all(records);
        state.cursor = PageCursor {
            page: 0,
            has_more: full_page,
        };
        drop(state);
        attempt.ok = true;
        Ok(())
    }

    /// Fetch and append the next page. Returns `Ok(false)` without touching
    /// gateway or store when the collection is exhausted, when another page
    /// fetch is in flight, or when the result arrived for a collection that
    /// a refresh has since replaced.
    pub async fn load_more(&self) -> Result<bool> {
        let (user, epoch, next_page) = {
            let mut state = self.state();
            let user = state.user.clone().ok_or(Error::NotBound)?;
            if !state.cursor.has_more || state.page_fetch_in_flight || state.refresh_in_flight {
                return Ok(false);
            }
            state.page_fetch_in_flight = true;
            (user, state.epoch, state.cursor.page + 1)
        };
        let _fetch = PageFetchGuard { controller: self };

        let outcome = self.gateway.fetch_page(&user, next_page, PAGE_SIZE).await;

        let mut state = self.state();
        if state.epoch != epoch {
            // The collection this page was fetched for no longer exists.
            tracing::debug!(page = next_page, "discarding stale page result");
            return Ok(false);
        }
        let records = outcome?;
        let full_page = records.len() >= PAGE_SIZE;
        state.store.append(records);
        state.cursor = PageCursor {
            page: next_page,
            has_more: full_page,
        };
        Ok(true)
    }

    /// Create a reminder and commit the server's record to the store.
    ///
    /// No optimistic phase: the record has no id until the server assigns
    /// one, so the store changes only on success.
    pub async fn create_reminder(&self, draft: ReminderDraft) -> Result<Reminder> {
        let user = {
            let state = self.state();
            state.user.clone().ok_or(Error::NotBound)?
        };
        let created = self.gateway.create(&user, &draft).await?;
        self.state().store.upsert(created.clone());
        Ok(created)
    }

    /// Request a lifecycle transition for one reminder.
    ///
    /// The transition is validated before anything else happens; the store
    /// then reflects the new status optimistically and is reconciled with
    /// the server record, or rolled back to the exact previous record.
    pub async fn change_status(
        &self,
        id: &ReminderId,
        status: ReminderStatus,
    ) -> Result<Reminder> {
        let _guard = self.begin_mutation(id)?;
        let previous = {
            let mut state = self.state();
            let current = state
                .store
                .get(id)
                .cloned()
                .ok_or_else(|| Error::NotFound(id.to_string()))?;
            lifecycle::check_transition(current.status, status)?;
            let mut optimistic = current.clone();
            optimistic.status = status;
            state.store.upsert(optimistic);
            current
        };

        self.reconcile(id, previous, &ReminderPatch::status(status))
            .await
    }

    /// Partially edit a reminder's fields. Status changes must go through
    /// [`change_status`](Self::change_status) so lifecycle rules stay
    /// enforceable.
    pub async fn edit_reminder(&self, id: &ReminderId, patch: ReminderPatch) -> Result<Reminder> {
        if patch.status.is_some() {
            return Err(Error::Validation(
                "status cannot be edited directly; use a status transition".to_string(),
            ));
        }
        if patch.is_empty() {
            return Err(Error::Validation("nothing to edit".to_string()));
        }
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(Error::Validation("title must not be empty".to_string()));
            }
        }

        let _guard = self.begin_mutation(id)?;
        let previous = {
            let mut state = self.state();
            let current = state
                .store
                .get(id)
                .cloned()
                .ok_or_else(|| Error::NotFound(id.to_string()))?;
            let mut optimistic = current.clone();
            patch.apply_to(&mut optimistic);
            state.store.upsert(optimistic);
            current
        };

        self.reconcile(id, previous, &patch).await
    }

    /// Delete a reminder. The record disappears from the store immediately
    /// and is reinstated at its old position if the remote delete fails.
    pub async fn delete_reminder(&self, id: &ReminderId) -> Result<()> {
        let _guard = self.begin_mutation(id)?;
        let (index, removed) = {
            let mut state = self.state();
            state
                .store
                .remove(id)
                .ok_or_else(|| Error::NotFound(id.to_string()))?
        };

        match self.gateway.remove(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.state().store.insert_at(index, removed);
                Err(err)
            }
        }
    }

    /// Push a patch to the gateway and either commit the authoritative
    /// server record or roll the optimistic copy back.
    async fn reconcile(
        &self,
        id: &ReminderId,
        previous: Reminder,
        patch: &ReminderPatch,
    ) -> Result<Reminder> {
        match self.gateway.update(id, patch).await {
            Ok(server_record) => {
                self.state().store.upsert(server_record.clone());
                Ok(server_record)
            }
            Err(err) => {
                tracing::debug!(id = %id, error = %err, "rolling back optimistic update");
                self.state().store.upsert(previous);
                Err(err)
            }
        }
    }

    /// Mark a reminder as having a mutation in flight. Overlapping writes
    /// to the same record have undefined rollback semantics, so a second
    /// request is rejected instead of interleaved.
    fn begin_mutation(&self, id: &ReminderId) -> Result<MutationGuard<'_, G>> {
        let mut state = self.state();
        ensure_bound(&state)?;
        if !state.mutating.insert(id.clone()) {
            return Err(Error::ConcurrentMutation(id.to_string()));
        }
        Ok(MutationGuard {
            controller: self,
            id: id.clone(),
        })
    }

    fn state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn ensure_bound(state: &ControllerState) -> Result<()> {
    if state.user.is_some() {
        Ok(())
    } else {
        Err(Error::NotBound)
    }
}

/// Clears the refresh flag and fires the settlement signal when the attempt
/// resolves, including when the caller drops the future mid-flight. Joiners
/// of an abandoned attempt wake up and see it as failed.
struct RefreshGuard<'a, G> {
    controller: &'a SyncController<G>,
    epoch: u64,
    ok: bool,
}

impl<G> Drop for RefreshGuard<'_, G> {
    fn drop(&mut self) {
        let mut state = self
            .controller
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        state.refresh_in_flight = false;
        drop(state);
        self.controller
            .refresh_done
            .send_replace((self.epoch, self.ok));
    }
}

/// Clears the page-fetch flag when the fetch resolves or is abandoned, so a
/// dropped `load_more` future cannot block later ones.
struct PageFetchGuard<'a, G> {
    controller: &'a SyncController<G>,
}

impl<G> Drop for PageFetchGuard<'_, G> {
    fn drop(&mut self) {
        let mut state = self
            .controller
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        state.page_fetch_in_flight = false;
    }
}

/// Releases the per-id in-flight mark when the mutation resolves, on both
/// success and error paths.
struct MutationGuard<'a, G> {
    controller: &'a SyncController<G>,
    id: ReminderId,
}

impl<G> Drop for MutationGuard<'_, G> {
    fn drop(&mut self) {
        let mut state = self
            .controller
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        state.mutating.remove(&self.id);
    }
}
