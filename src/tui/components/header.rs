//! App header bar component

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct HeaderProps {
    /// API base the session talks to
    pub api_base: String,
    /// True while any list fetch is outstanding
    pub busy: bool,
}

/// App header bar showing the title and the backend in use
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: "coverdesk - Insurance Management",
                color: theme.text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 1) {
                #(props.busy.then(|| element! {
                    Text(content: "loading...", color: theme.text)
                }))
                Text(content: props.api_base.clone(), color: theme.text)
            }
        }
    }
}
