//! Record list pane
//!
//! Renders the visible window of record cards for the active tab.

use iocraft::prelude::*;

use crate::display::RecordCard;
use crate::tui::theme::theme;
use crate::types::EntityKind;

/// Terminal rows one card of `kind` occupies, borders included
pub fn card_height(kind: EntityKind) -> usize {
    let body = match kind {
        EntityKind::Customer => 2,
        EntityKind::Policy => 3,
        // claims and payments add a status row
        EntityKind::Claim => 4,
        EntityKind::Payment => 5,
    };
    body + 1 + 2
}

/// Number of whole cards that fit in `rows`
pub fn visible_cards(kind: EntityKind, rows: usize) -> usize {
    (rows / card_height(kind)).max(1)
}

#[derive(Default, Props)]
pub struct RecordListProps {
    /// Cards in the visible window
    pub cards: Vec<RecordCard>,
    /// Position of the selected card inside `cards`
    pub selected: Option<usize>,
    pub focused: bool,
}

#[component]
pub fn RecordList(props: &RecordListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            flex_grow: 1.0,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            overflow: Overflow::Hidden,
            padding_left: 1,
        ) {
            #(props.cards.iter().enumerate().map(|(i, card)| {
                let selected = props.selected == Some(i);
                let border_color = if selected && props.focused {
                    theme.border_focused
                } else if selected {
                    theme.text
                } else {
                    theme.border
                };
                element! {
                    View(
                        width: 100pct,
                        flex_shrink: 0.0,
                        flex_direction: FlexDirection::Column,
                        border_style: if selected { BorderStyle::Double } else { BorderStyle::Round },
                        border_color: border_color,
                        padding_left: 1,
                    ) {
                        View(flex_direction: FlexDirection::Row, column_gap: 1) {
                            Text(content: card.title.clone(), color: theme.text, weight: Weight::Bold)
                            Text(content: format!("#{}", card.id), color: theme.id_color)
                        }
                        #(card.lines.iter().map(|line| element! {
                            Text(content: line.clone(), color: theme.text_dimmed)
                        }))
                        #(card.status.as_ref().map(|status| element! {
                            Text(
                                content: format!("Status: {}", status),
                                color: theme.status_color(status),
                                weight: Weight::Bold,
                            )
                        }))
                    }
                }
            }))
        }
    }
}
