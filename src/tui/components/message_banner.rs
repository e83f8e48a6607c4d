//! Status message banner
//!
//! Shows the controller's transient message until it is dismissed or replaced.

use iocraft::prelude::*;

use crate::controller::Message;
use crate::tui::theme::theme;

/// Render the message as an optional element
pub fn render_message(message: Option<&Message>) -> Option<AnyElement<'static>> {
    let theme = theme();
    message.map(|m| {
        let color = theme.message_color(m.level);
        element! {
            View(
                width: 100pct,
                height: 3,
                flex_shrink: 0.0,
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                padding_left: 1,
                padding_right: 1,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: color,
            ) {
                View(flex_grow: 1.0) {
                    Text(content: m.text.clone(), color: color)
                }
                Text(content: "[x] dismiss", color: theme.text_dimmed)
            }
        }
        .into_any()
    })
}
