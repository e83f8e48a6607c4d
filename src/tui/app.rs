//! Main insurance management TUI component
//!
//! The view model lives in the shared [`Session`]; this component owns only
//! presentation state (focus, cursors) and a revision counter that is bumped
//! whenever the model changes so iocraft re-renders.

// State and Handler are Copy/cheap; clones keep the async closures readable
#![allow(clippy::clone_on_copy)]

use std::sync::Arc;

use iocraft::prelude::*;

use crate::api::HttpApi;
use crate::controller::{ListTicket, Message, PendingDelete, Session, ViewModel};
use crate::display::{RecordCard, cards_for};
use crate::form::FormBuffer;
use crate::types::EntityKind;

use super::components::{
    ConfirmDialog, EmptyState, Footer, FormPane, Header, RecordList, TabBar, browse_shortcuts,
    confirm_shortcuts, form_shortcuts, render_message, visible_cards,
};
use super::handlers::{AsyncHandlers, HandlerContext, handle_action};
use super::keymap::{KeyContext, key_to_action};
use super::navigation::ListCursor;
use super::theme::theme;

/// Rows taken by the header, tab bar, message banner and footer
const CHROME_ROWS: usize = 8;

/// Everything one render needs from the view model
struct Frame {
    active: EntityKind,
    counts: [usize; 4],
    cards: Vec<RecordCard>,
    values: Vec<String>,
    message: Option<Message>,
    pending: Option<PendingDelete>,
    busy: bool,
    active_loading: bool,
}

impl Frame {
    fn capture(model: &ViewModel) -> Self {
        let active = model.active_tab();
        let form = model.form(active);
        Self {
            active,
            counts: EntityKind::ALL.map(|k| model.len(k)),
            cards: cards_for(&model.collection(active)),
            values: (0..form.len()).map(|i| form.value_at(i).to_string()).collect(),
            message: model.message().cloned(),
            pending: model.pending_delete(),
            busy: EntityKind::ALL.into_iter().any(|k| model.is_loading(k)),
            active_loading: model.is_loading(active),
        }
    }
}

#[derive(Default, Props)]
pub struct InsuranceAppProps {
    pub session: Option<Arc<Session<HttpApi>>>,
}

#[component]
pub fn InsuranceApp(props: &InsuranceAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    // Props never change after launch, so this branch is stable across renders
    let Some(session) = props.session.clone() else {
        return element! {
            View(padding: 1) {
                Text(content: "no session to display", color: Color::Red)
            }
        }
        .into_any();
    };

    let (_width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let mut revision = hooks.use_state(|| 0u64);
    let mut form_focused = hooks.use_state(|| false);
    let mut field_index = hooks.use_state(|| 0usize);
    let mut cursors = hooks.use_state(|| [ListCursor::default(); 4]);
    let mut should_exit = hooks.use_state(|| false);
    let mut started = hooks.use_state(|| false);

    let list_handler: Handler<ListTicket> = hooks.use_async_handler({
        let session = session.clone();
        move |ticket: ListTicket| {
            let session = session.clone();
            let mut revision = revision.clone();
            async move {
                session.run_list(ticket).await;
                revision.set(revision.get().wrapping_add(1));
            }
        }
    });

    let create_handler: Handler<FormBuffer> = hooks.use_async_handler({
        let session = session.clone();
        move |form: FormBuffer| {
            let session = session.clone();
            let mut revision = revision.clone();
            async move {
                session.submit(form).await;
                revision.set(revision.get().wrapping_add(1));
            }
        }
    });

    let delete_handler: Handler<PendingDelete> = hooks.use_async_handler({
        let session = session.clone();
        move |target: PendingDelete| {
            let session = session.clone();
            let mut revision = revision.clone();
            async move {
                session.run_delete(target).await;
                revision.set(revision.get().wrapping_add(1));
            }
        }
    });

    // The opening tab counts as an activation
    if !started.get() {
        started.set(true);
        let ticket = session.update(|m| {
            let tab = m.active_tab();
            m.activate(tab)
        });
        if let Some(ticket) = ticket {
            list_handler.clone()(ticket);
        }
    }

    // Snapshot the model for this render
    let list_rows = (height as usize).saturating_sub(CHROME_ROWS);
    let Frame {
        active,
        counts,
        cards,
        values,
        message,
        pending,
        busy,
        active_loading,
    } = session.read(Frame::capture);

    let visible = visible_cards(active, list_rows);
    let cursor = cursors.get()[active.index()].clamped(cards.len(), visible);
    let window: Vec<_> = cards
        .iter()
        .skip(cursor.offset)
        .take(visible)
        .cloned()
        .collect();
    let selected = (!cards.is_empty()).then(|| cursor.selected - cursor.offset);
    let in_form = form_focused.get();

    let shortcuts = if pending.is_some() {
        confirm_shortcuts()
    } else if in_form {
        form_shortcuts()
    } else {
        browse_shortcuts(active)
    };

    hooks.use_terminal_events({
        let session = session.clone();
        let handlers = AsyncHandlers {
            list: list_handler.clone(),
            create: create_handler.clone(),
            delete: delete_handler.clone(),
        };
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let context = KeyContext {
                    form_focused: form_focused.get(),
                    confirming: session.read(|m| m.pending_delete().is_some()),
                };
                let Some(action) = key_to_action(code, modifiers, context) else {
                    return;
                };
                let mut ctx = HandlerContext {
                    session: &*session,
                    handlers: &handlers,
                    form_focused: &mut form_focused,
                    field_index: &mut field_index,
                    cursors: &mut cursors,
                    revision: &mut revision,
                    should_exit: &mut should_exit,
                    visible,
                };
                handle_action(&mut ctx, action);
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(api_base: session.api().base().to_string(), busy: busy)
            TabBar(active: active, counts: counts)

            View(
                width: 100pct,
                flex_grow: 1.0,
                flex_direction: FlexDirection::Row,
                overflow: Overflow::Hidden,
            ) {
                FormPane(
                    kind: active,
                    values: values,
                    focused: in_form,
                    field_index: field_index.get(),
                )
                #(if window.is_empty() {
                    Some(element! {
                        EmptyState(kind: active, loading: active_loading)
                    }.into_any())
                } else {
                    Some(element! {
                        RecordList(cards: window, selected: selected, focused: !in_form)
                    }.into_any())
                })
            }

            #(render_message(message.as_ref()))
            Footer(shortcuts: shortcuts)

            #(pending.map(|p| element! {
                ConfirmDialog(prompt: p.prompt(), record_id: p.id)
            }))
        }
    }
    .into_any()
}
