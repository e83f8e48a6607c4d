//! Create form pane
//!
//! One labelled input per field of the active kind's form buffer. Select
//! fields show the chosen option's wire value and description.

use iocraft::prelude::*;

use crate::form::{FieldSpec, InputType, fields_for, submit_label};
use crate::tui::theme::theme;
use crate::types::EntityKind;

#[derive(Default, Props)]
pub struct FormPaneProps {
    pub kind: EntityKind,
    /// Current buffer values, in field order
    pub values: Vec<String>,
    pub focused: bool,
    pub field_index: usize,
}

/// Text shown inside a field box, and whether it is a placeholder
pub fn field_display(spec: &FieldSpec, value: &str, focused: bool) -> (String, bool) {
    match spec.input {
        InputType::Select(options) => match options.iter().find(|(v, _)| *v == value) {
            Some((v, description)) => (format!("< {} ({}) >", v, description), false),
            None => (format!("< Select {} >", spec.label), true),
        },
        _ if value.is_empty() && !focused => (spec.label.to_string(), true),
        _ if focused => (format!("{}_", value), false),
        _ => (value.to_string(), false),
    }
}

fn input_hint(input: InputType) -> &'static str {
    match input {
        InputType::Date => "YYYY-MM-DD",
        InputType::Number => "number",
        InputType::Email => "email",
        InputType::Select(_) => "Left/Right to choose",
        InputType::Text => "",
    }
}

#[component]
pub fn FormPane(props: &FormPaneProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let fields = fields_for(props.kind);
    let pane_border = if props.focused {
        theme.border_focused
    } else {
        theme.border
    };

    element! {
        View(
            width: 42,
            height: 100pct,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: pane_border,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(
                content: format!("New {}", props.kind.path()),
                color: theme.text,
                weight: Weight::Bold,
            )
            #(fields.iter().enumerate().map(|(i, spec)| {
                let field_focused = props.focused && i == props.field_index;
                let value = props.values.get(i).map(String::as_str).unwrap_or_default();
                let (text, placeholder) = field_display(spec, value, field_focused);
                let hint = input_hint(spec.input);
                element! {
                    View(flex_direction: FlexDirection::Column, margin_top: 1) {
                        View(flex_direction: FlexDirection::Row, column_gap: 1) {
                            Text(content: spec.label, color: theme.text_dimmed)
                            #((!hint.is_empty()).then(|| element! {
                                Text(content: format!("({})", hint), color: theme.text_dimmed)
                            }))
                        }
                        View(
                            width: 100pct,
                            border_style: BorderStyle::Single,
                            border_color: if field_focused { theme.border_focused } else { theme.border },
                            padding_left: 1,
                        ) {
                            Text(
                                content: text,
                                color: if placeholder { theme.text_dimmed } else { theme.text },
                            )
                        }
                    }
                }
            }))
            View(margin_top: 1) {
                Text(
                    content: format!("[Enter] {}", submit_label(props.kind)),
                    color: if props.focused { theme.highlight } else { theme.text_dimmed },
                    weight: Weight::Bold,
                )
            }
        }
    }
}
