//! Keyboard shortcuts bar component
//!
//! Displays the shortcuts available in the current focus at the bottom of the
//! screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::EntityKind;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "C-q", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Next Field")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", shortcut.key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", shortcut.action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

fn shortcuts(pairs: &[(&str, &str)]) -> Vec<Shortcut> {
    pairs.iter().map(|(k, a)| Shortcut::new(*k, *a)).collect()
}

/// Shortcuts while browsing the record list of `kind`
pub fn browse_shortcuts(kind: EntityKind) -> Vec<Shortcut> {
    let mut list = shortcuts(&[
        ("1-4/Tab", "Switch Tab"),
        ("j/k", "Up/Down"),
        ("g/G", "Top/Bottom"),
        ("n", "New"),
    ]);
    if kind.supports_delete() {
        list.push(Shortcut::new("d", "Delete"));
    }
    list.extend(shortcuts(&[
        ("y", "Copy ID"),
        ("r", "Refresh"),
        ("x", "Dismiss"),
        ("q", "Quit"),
    ]));
    list
}

/// Shortcuts while the create form has focus
pub fn form_shortcuts() -> Vec<Shortcut> {
    shortcuts(&[
        ("Tab", "Next Field"),
        ("S-Tab", "Prev Field"),
        ("</>", "Choose Option"),
        ("Enter", "Submit"),
        ("Esc", "Back to List"),
    ])
}

/// Shortcuts for the delete confirmation dialog
pub fn confirm_shortcuts() -> Vec<Shortcut> {
    shortcuts(&[("y", "Yes"), ("n/Esc", "No")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_shortcut_only_for_deletable_kinds() {
        let has_delete = |kind| browse_shortcuts(kind).iter().any(|s| s.key == "d");
        assert!(has_delete(EntityKind::Customer));
        assert!(has_delete(EntityKind::Policy));
        assert!(!has_delete(EntityKind::Claim));
        assert!(!has_delete(EntityKind::Payment));
    }
}
