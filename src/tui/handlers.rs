//! Action handlers for the insurance TUI
//!
//! Each key press is mapped to an [`Action`] by the keymap and applied here.
//! Synchronous state changes go straight to the session's view model; network
//! work is handed to the async handlers, which bump the render revision when
//! they finish.

use clipboard_rs::{Clipboard, ClipboardContext};
use iocraft::prelude::{Handler, State};

use crate::api::InsuranceApi;
use crate::controller::{ListTicket, PendingDelete, Session};
use crate::form::{FormBuffer, InputType};
use crate::types::EntityKind;

use super::keymap::Action;
use super::navigation::ListCursor;

/// Async operations started from key handlers
#[derive(Clone)]
pub struct AsyncHandlers {
    pub list: Handler<ListTicket>,
    pub create: Handler<FormBuffer>,
    pub delete: Handler<PendingDelete>,
}

/// Everything a key handler can touch
pub struct HandlerContext<'a, A> {
    pub session: &'a Session<A>,
    pub handlers: &'a AsyncHandlers,
    pub form_focused: &'a mut State<bool>,
    pub field_index: &'a mut State<usize>,
    pub cursors: &'a mut State<[ListCursor; 4]>,
    pub revision: &'a mut State<u64>,
    pub should_exit: &'a mut State<bool>,
    /// Cards that fit in the list pane for the active tab
    pub visible: usize,
}

impl<A: InsuranceApi> HandlerContext<'_, A> {
    fn active(&self) -> EntityKind {
        self.session.read(|m| m.active_tab())
    }

    fn cursor(&self, kind: EntityKind) -> ListCursor {
        let len = self.session.read(|m| m.len(kind));
        self.cursors.get()[kind.index()].clamped(len, self.visible)
    }

    fn set_cursor(&mut self, kind: EntityKind, cursor: ListCursor) {
        let mut cursors = self.cursors.get();
        cursors[kind.index()] = cursor;
        self.cursors.set(cursors);
    }

    fn selected_id(&self) -> Option<i64> {
        let kind = self.active();
        let cursor = self.cursor(kind);
        self.session.read(|m| m.record_id(kind, cursor.selected))
    }

    fn fetch(&self, ticket: ListTicket) {
        self.handlers.list.clone()(ticket);
    }

    fn bump(&mut self) {
        self.revision.set(self.revision.get().wrapping_add(1));
    }
}

/// Apply one action
pub fn handle_action<A: InsuranceApi>(ctx: &mut HandlerContext<'_, A>, action: Action) {
    match action {
        Action::SelectTab(kind) => activate(ctx, kind),
        Action::NextTab => {
            let next = ctx.active().next();
            activate(ctx, next);
        }
        Action::PrevTab => {
            let prev = ctx.active().prev();
            activate(ctx, prev);
        }

        Action::MoveUp | Action::MoveDown | Action::GoToTop | Action::GoToBottom => {
            navigate(ctx, action)
        }
        Action::Refresh => {
            let kind = ctx.active();
            let ticket = ctx.session.update(|m| m.begin_list(kind));
            ctx.fetch(ticket);
        }
        Action::CopyId => copy_selected_id(ctx),
        Action::RequestDelete => {
            let kind = ctx.active();
            if let Some(id) = ctx.selected_id()
                && let Err(e) = ctx.session.update(|m| m.request_delete(kind, id))
            {
                tracing::debug!("delete not offered: {}", e);
            }
        }

        Action::FocusForm => {
            ctx.form_focused.set(true);
            ctx.field_index.set(0);
        }
        Action::LeaveForm => ctx.form_focused.set(false),
        Action::NextField | Action::PrevField => {
            let kind = ctx.active();
            let count = ctx.session.read(|m| m.form(kind).len()).max(1);
            let current = ctx.field_index.get();
            let next = if action == Action::NextField {
                (current + 1) % count
            } else {
                (current + count - 1) % count
            };
            ctx.field_index.set(next);
        }
        Action::CycleOption { forward } => {
            let kind = ctx.active();
            let index = ctx.field_index.get();
            ctx.session
                .update(|m| m.form_mut(kind).cycle_option(index, forward));
        }
        Action::InputChar(c) => edit_field(ctx, |form, index| form.push_char(index, c)),
        Action::Backspace => edit_field(ctx, |form, index| form.pop_char(index)),
        Action::Submit => {
            let kind = ctx.active();
            if let Some(form) = ctx.session.update(|m| m.begin_create(kind)) {
                ctx.handlers.create.clone()(form);
            }
        }

        Action::ConfirmYes | Action::ConfirmNo => {
            let confirmed = action == Action::ConfirmYes;
            if let Some(target) = ctx.session.update(|m| m.resolve_delete(confirmed)) {
                ctx.handlers.delete.clone()(target);
            }
        }

        Action::DismissMessage => ctx.session.update(|m| m.dismiss_message()),
        Action::Quit => ctx.should_exit.set(true),
        Action::Consumed => {}
    }
    ctx.bump();
}

fn activate<A: InsuranceApi>(ctx: &mut HandlerContext<'_, A>, tab: EntityKind) {
    if let Some(ticket) = ctx.session.update(|m| m.activate(tab)) {
        ctx.field_index.set(0);
        ctx.fetch(ticket);
    }
}

fn navigate<A: InsuranceApi>(ctx: &mut HandlerContext<'_, A>, action: Action) {
    let kind = ctx.active();
    let len = ctx.session.read(|m| m.len(kind));
    let visible = ctx.visible;
    let mut cursor = ctx.cursor(kind);
    match action {
        Action::MoveUp => cursor.up(),
        Action::MoveDown => cursor.down(len, visible),
        Action::GoToTop => cursor.top(),
        Action::GoToBottom => cursor.bottom(len, visible),
        _ => return,
    }
    ctx.set_cursor(kind, cursor);
}

/// Apply a text edit to the focused field; select fields only change through
/// option cycling.
fn edit_field<A: InsuranceApi>(
    ctx: &mut HandlerContext<'_, A>,
    edit: impl FnOnce(&mut FormBuffer, usize),
) {
    let kind = ctx.active();
    let index = ctx.field_index.get();
    ctx.session.update(|m| {
        let form = m.form_mut(kind);
        let is_select = form
            .fields()
            .get(index)
            .is_some_and(|f| matches!(f.input, InputType::Select(_)));
        if !is_select {
            edit(form, index);
        }
    });
}

fn copy_selected_id<A: InsuranceApi>(ctx: &mut HandlerContext<'_, A>) {
    let Some(id) = ctx.selected_id() else {
        return;
    };
    if let Err(e) = ClipboardContext::new().and_then(|clipboard| clipboard.set_text(id.to_string()))
    {
        tracing::warn!("failed to copy id {} to clipboard: {}", id, e);
    }
}
