//! View-model state for one client session.
//!
//! `ViewModel` owns everything the views render: the active tab, the four
//! collections, the four form buffers, the status message and a pending
//! delete confirmation. Every network operation is split into a `begin_*`
//! step that decides what to send and a `finish_*` step that applies the
//! outcome, so the state transitions can be tested without any I/O.
//!
//! List fetches carry a per-kind sequence number. A completed fetch is applied
//! only when it is the most recently issued one for its kind; results from
//! superseded fetches are dropped, whichever order they arrive in.

use crate::error::{CoverdeskError, Result};
use crate::form::FormBuffer;
use crate::types::{Claim, Collection, Customer, EntityKind, Payment, Policy};

/// Severity of the status message, used for styling only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

/// Transient status message shown until dismissed or replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
        }
    }
}

/// Handle for an issued list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTicket {
    pub kind: EntityKind,
    pub seq: u64,
}

/// A delete waiting for the user's yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelete {
    pub kind: EntityKind,
    pub id: i64,
}

impl PendingDelete {
    pub fn prompt(&self) -> String {
        confirm_prompt(self.kind)
    }
}

/// Question asked before deleting a record of `kind`
pub fn confirm_prompt(kind: EntityKind) -> String {
    format!("Delete this {}?", kind.path())
}

/// Fixed message for a failed list fetch
pub fn load_error_message(kind: EntityKind) -> String {
    format!("Error loading {}", kind.plural())
}

/// Fixed message for a failed create
pub fn create_error_message(kind: EntityKind) -> String {
    match kind {
        EntityKind::Payment => "Error processing payment".to_string(),
        _ => format!("Error creating {}", kind.path()),
    }
}

/// Fixed message for a failed delete
pub fn delete_error_message(kind: EntityKind) -> String {
    format!("Error deleting {}", kind.path())
}

/// Per-session UI state
#[derive(Debug, Clone)]
pub struct ViewModel {
    active_tab: EntityKind,
    /// False until the first activation, so the opening tab is fetched once
    activated: bool,

    customers: Vec<Customer>,
    policies: Vec<Policy>,
    claims: Vec<Claim>,
    payments: Vec<Payment>,

    forms: [FormBuffer; 4],
    message: Option<Message>,
    pending_delete: Option<PendingDelete>,

    /// Latest issued list sequence number, per kind
    issued: [u64; 4],
    /// Sequence number of the latest fetch that settled, per kind
    settled: [u64; 4],
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new(EntityKind::default())
    }
}

impl ViewModel {
    pub fn new(initial_tab: EntityKind) -> Self {
        Self {
            active_tab: initial_tab,
            activated: false,
            customers: Vec::new(),
            policies: Vec::new(),
            claims: Vec::new(),
            payments: Vec::new(),
            forms: EntityKind::ALL.map(FormBuffer::new),
            message: None,
            pending_delete: None,
            issued: [0; 4],
            settled: [0; 4],
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn active_tab(&self) -> EntityKind {
        self.active_tab
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Snapshot of one collection
    pub fn collection(&self, kind: EntityKind) -> Collection {
        match kind {
            EntityKind::Customer => Collection::Customers(self.customers.clone()),
            EntityKind::Policy => Collection::Policies(self.policies.clone()),
            EntityKind::Claim => Collection::Claims(self.claims.clone()),
            EntityKind::Payment => Collection::Payments(self.payments.clone()),
        }
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Customer => self.customers.len(),
            EntityKind::Policy => self.policies.len(),
            EntityKind::Claim => self.claims.len(),
            EntityKind::Payment => self.payments.len(),
        }
    }

    /// Id of the record at `index` in the given collection
    pub fn record_id(&self, kind: EntityKind, index: usize) -> Option<i64> {
        match kind {
            EntityKind::Customer => self.customers.get(index).map(|r| r.id),
            EntityKind::Policy => self.policies.get(index).map(|r| r.id),
            EntityKind::Claim => self.claims.get(index).map(|r| r.id),
            EntityKind::Payment => self.payments.get(index).map(|r| r.id),
        }
    }

    pub fn form(&self, kind: EntityKind) -> &FormBuffer {
        &self.forms[kind.index()]
    }

    pub fn form_mut(&mut self, kind: EntityKind) -> &mut FormBuffer {
        &mut self.forms[kind.index()]
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn pending_delete(&self) -> Option<PendingDelete> {
        self.pending_delete
    }

    /// True while the latest issued fetch for `kind` has not completed
    pub fn is_loading(&self, kind: EntityKind) -> bool {
        self.issued[kind.index()] != self.settled[kind.index()]
    }

    /// Number of list fetches issued for `kind` so far
    pub fn fetches_issued(&self, kind: EntityKind) -> u64 {
        self.issued[kind.index()]
    }

    // ------------------------------------------------------------------
    // Tabs and listing
    // ------------------------------------------------------------------

    /// Switch tabs. Returns a fetch to run when the tab actually changed
    /// (or on the very first activation).
    pub fn activate(&mut self, tab: EntityKind) -> Option<ListTicket> {
        if self.activated && tab == self.active_tab {
            return None;
        }
        self.activated = true;
        self.active_tab = tab;
        Some(self.begin_list(tab))
    }

    /// Issue a list fetch for `kind`
    pub fn begin_list(&mut self, kind: EntityKind) -> ListTicket {
        let slot = &mut self.issued[kind.index()];
        *slot += 1;
        ListTicket { kind, seq: *slot }
    }

    /// Apply a completed list fetch. Returns false when the result was
    /// discarded because a newer fetch for the same kind has been issued.
    pub fn finish_list(&mut self, ticket: ListTicket, result: Result<Collection>) -> bool {
        let index = ticket.kind.index();
        if ticket.seq != self.issued[index] {
            tracing::debug!(
                "discarding stale {} fetch #{} (latest is #{})",
                ticket.kind,
                ticket.seq,
                self.issued[index]
            );
            return false;
        }
        self.settled[index] = ticket.seq;

        match result {
            Ok(collection) if collection.kind() == ticket.kind => {
                self.replace_collection(collection);
            }
            Ok(collection) => {
                tracing::warn!(
                    "{} fetch returned {} records",
                    ticket.kind,
                    collection.kind()
                );
                self.message = Some(Message::error(load_error_message(ticket.kind)));
            }
            Err(e) => {
                tracing::warn!("failed to load {}: {}", ticket.kind.plural(), e);
                self.message = Some(Message::error(load_error_message(ticket.kind)));
            }
        }
        true
    }

    fn replace_collection(&mut self, collection: Collection) {
        match collection {
            Collection::Customers(v) => self.customers = v,
            Collection::Policies(v) => self.policies = v,
            Collection::Claims(v) => self.claims = v,
            Collection::Payments(v) => self.payments = v,
        }
    }

    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Take a snapshot of the form to submit. Returns `None` (and explains why
    /// in the message) when an input is missing or malformed.
    pub fn begin_create(&mut self, kind: EntityKind) -> Option<FormBuffer> {
        let form = self.form(kind);
        match form.check_inputs() {
            Ok(()) => Some(form.clone()),
            Err(e) => {
                self.message = Some(Message::error(e.to_string()));
                None
            }
        }
    }

    /// Apply a create outcome. On success the form is reset and a refetch is
    /// returned; on failure the form is left as the user typed it.
    pub fn finish_create(&mut self, kind: EntityKind, result: Result<String>) -> Option<ListTicket> {
        match result {
            Ok(text) => {
                self.message = Some(Message::info(text));
                self.form_mut(kind).clear();
                Some(self.begin_list(kind))
            }
            Err(e) => {
                tracing::warn!("failed to create {}: {}", kind, e);
                self.message = Some(Message::error(create_error_message(kind)));
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Ask for confirmation before deleting a record
    pub fn request_delete(&mut self, kind: EntityKind, id: i64) -> Result<PendingDelete> {
        if !kind.supports_delete() {
            return Err(CoverdeskError::NotDeletable(kind));
        }
        let pending = PendingDelete { kind, id };
        self.pending_delete = Some(pending);
        Ok(pending)
    }

    /// Close the confirmation. Returns the delete to perform if confirmed.
    pub fn resolve_delete(&mut self, confirmed: bool) -> Option<PendingDelete> {
        let pending = self.pending_delete.take()?;
        confirmed.then_some(pending)
    }

    /// Apply a delete outcome, returning the refetch to run on success
    pub fn finish_delete(
        &mut self,
        target: PendingDelete,
        result: Result<String>,
    ) -> Option<ListTicket> {
        match result {
            Ok(text) => {
                self.message = Some(Message::info(text));
                Some(self.begin_list(target.kind))
            }
            Err(e) => {
                tracing::warn!("failed to delete {} {}: {}", target.kind, target.id, e);
                self.message = Some(Message::error(delete_error_message(target.kind)));
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Message
    // ------------------------------------------------------------------

    pub fn dismiss_message(&mut self) {
        self.message = None;
    }

    /// Replace the message outside of a network operation
    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }
}
