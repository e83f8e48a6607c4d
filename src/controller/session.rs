//! Async driver pairing a [`ViewModel`] with an [`InsuranceApi`].
//!
//! The model sits behind a mutex that is never held across an await, so
//! several operations can be in flight at once (the TUI fires a fetch on every
//! tab switch without waiting for the previous one). Ordering between
//! overlapping fetches is settled by the model's sequence numbers.

use parking_lot::Mutex;

use crate::api::InsuranceApi;
use crate::error::Result;
use crate::form::FormBuffer;
use crate::types::EntityKind;

use super::model::{ListTicket, PendingDelete, ViewModel};

pub struct Session<A> {
    api: A,
    model: Mutex<ViewModel>,
}

impl<A: InsuranceApi> Session<A> {
    pub fn new(api: A, initial_tab: EntityKind) -> Self {
        Self {
            api,
            model: Mutex::new(ViewModel::new(initial_tab)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Read the model under the lock
    pub fn read<R>(&self, f: impl FnOnce(&ViewModel) -> R) -> R {
        f(&self.model.lock())
    }

    /// Mutate the model under the lock
    pub fn update<R>(&self, f: impl FnOnce(&mut ViewModel) -> R) -> R {
        f(&mut self.model.lock())
    }

    /// Activate the tab the session was created with
    pub async fn start(&self) {
        let tab = self.read(ViewModel::active_tab);
        self.activate(tab).await;
    }

    /// Switch tabs, fetching the new tab's collection if it changed
    pub async fn activate(&self, tab: EntityKind) {
        let ticket = self.update(|m| m.activate(tab));
        if let Some(ticket) = ticket {
            self.run_list(ticket).await;
        }
    }

    /// Unconditionally re-fetch one collection
    pub async fn list(&self, kind: EntityKind) {
        let ticket = self.update(|m| m.begin_list(kind));
        self.run_list(ticket).await;
    }

    /// Run an already-issued fetch and apply its result
    pub async fn run_list(&self, ticket: ListTicket) {
        let result = self.api.list(ticket.kind).await;
        self.update(|m| m.finish_list(ticket, result));
    }

    /// Submit the form for `kind`. Returns true when the server accepted it.
    pub async fn create(&self, kind: EntityKind) -> bool {
        let Some(form) = self.update(|m| m.begin_create(kind)) else {
            return false;
        };
        self.submit(form).await
    }

    /// Send a form snapshot taken by [`ViewModel::begin_create`]
    pub async fn submit(&self, form: FormBuffer) -> bool {
        match self.send_create(form).await {
            Some(ticket) => {
                self.run_list(ticket).await;
                true
            }
            None => false,
        }
    }

    /// Send a form snapshot and apply the outcome without refetching.
    /// Returns the refetch to run when the server accepted the record.
    pub async fn send_create(&self, form: FormBuffer) -> Option<ListTicket> {
        let kind = form.kind();
        let result = self.api.create(&form).await;
        self.update(|m| m.finish_create(kind, result))
    }

    /// Send a confirmed delete and apply its outcome
    pub async fn run_delete(&self, target: PendingDelete) -> bool {
        match self.send_delete(target).await {
            Some(ticket) => {
                self.run_list(ticket).await;
                true
            }
            None => false,
        }
    }

    /// Send a confirmed delete without refetching. Returns the refetch to run
    /// on success.
    pub async fn send_delete(&self, target: PendingDelete) -> Option<ListTicket> {
        let result = self.api.delete(target.kind, target.id).await;
        self.update(|m| m.finish_delete(target, result))
    }

    /// Request a delete and settle the confirmation.
    ///
    /// `confirm` receives the prompt text. Returns the delete to perform, or
    /// `None` when it was declined.
    pub fn confirm_delete(
        &self,
        kind: EntityKind,
        id: i64,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<Option<PendingDelete>> {
        let pending = self.update(|m| m.request_delete(kind, id))?;
        let confirmed = confirm(&pending.prompt());
        Ok(self.update(|m| m.resolve_delete(confirmed)))
    }

    /// Request, confirm and perform a delete in one call.
    ///
    /// `confirm` receives the prompt text; returning false cancels without
    /// contacting the server.
    pub async fn delete_with(
        &self,
        kind: EntityKind,
        id: i64,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<DeleteOutcome> {
        let Some(target) = self.confirm_delete(kind, id, confirm)? else {
            return Ok(DeleteOutcome::Declined);
        };
        Ok(if self.run_delete(target).await {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::Failed
        })
    }
}

/// How a confirmed-or-not delete ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed,
}
