//! Entity tab bar component
//!
//! Shows the four entity tabs with their number keys and record counts.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::EntityKind;

#[derive(Default, Props)]
pub struct TabBarProps {
    pub active: EntityKind,
    /// Record count per tab, indexed like `EntityKind::ALL`
    pub counts: [usize; 4],
}

#[component]
pub fn TabBar(props: &TabBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let active = props.active;
    let counts = props.counts;

    element! {
        View(
            width: 100pct,
            padding_left: 1,
            column_gap: 2,
            flex_direction: FlexDirection::Row,
            border_edges: Edges::Bottom,
            border_style: BorderStyle::Single,
            border_color: theme.border,
        ) {
            #(EntityKind::ALL.into_iter().map(|kind| {
                let is_active = kind == active;
                element! {
                    Text(
                        content: format!(
                            "[{}] {} ({})",
                            kind.index() + 1,
                            kind.label(),
                            counts[kind.index()]
                        ),
                        color: if is_active { theme.tab_active } else { theme.text_dimmed },
                        weight: if is_active { Weight::Bold } else { Weight::Normal },
                    )
                }
            }))
        }
    }
}
