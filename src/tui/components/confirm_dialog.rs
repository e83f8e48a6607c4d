//! Delete confirmation dialog

use iocraft::prelude::*;

use super::{ModalContainer, ModalOverlay};
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct ConfirmDialogProps {
    /// Question to ask, e.g. "Delete this customer?"
    pub prompt: String,
    /// Id of the record the question is about
    pub record_id: i64,
}

#[component]
pub fn ConfirmDialog(props: &ConfirmDialogProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        ModalOverlay(show_backdrop: true) {
            ModalContainer(
                width: Some(48u32),
                border_color: Some(Color::Yellow),
                title: Some("Confirm".to_string()),
                footer_text: Some("[y]es / [n]o".to_string()),
            ) {
                Text(content: props.prompt.clone(), color: theme.text, weight: Weight::Bold)
                Text(content: format!("Record #{}", props.record_id), color: theme.text_dimmed)
            }
        }
    }
}
