//! Empty state component
//!
//! Shown in place of the record list when the active collection is empty.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::EntityKind;

#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EntityKind,
    /// A fetch for this kind is still outstanding
    pub loading: bool,
}

#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let (title, hint) = if props.loading {
        (format!("Loading {}...", props.kind.plural()), String::new())
    } else {
        (
            format!("No {}", props.kind.plural()),
            "Press 'n' to fill in the form, or 'r' to refresh.".to_string(),
        )
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            Text(content: title, color: theme.text, weight: Weight::Bold)
            #((!hint.is_empty()).then(|| element! {
                View(margin_top: 1) {
                    Text(content: hint.clone(), color: theme.text_dimmed)
                }
            }))
        }
    }
}
