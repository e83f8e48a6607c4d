//! Key-to-action mapping for the insurance TUI
//!
//! The single authoritative key mapper. It turns raw `(KeyCode, KeyModifiers)`
//! pairs into `Action` values, taking the current focus into account so every
//! key press resolves to at most one action.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::types::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Tabs
    SelectTab(EntityKind),
    NextTab,
    PrevTab,

    // Record list
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    Refresh,
    CopyId,
    RequestDelete,

    // Create form
    FocusForm,
    LeaveForm,
    NextField,
    PrevField,
    CycleOption { forward: bool },
    InputChar(char),
    Backspace,
    Submit,

    // Confirm dialog
    ConfirmYes,
    ConfirmNo,

    DismissMessage,
    Quit,

    /// Key was recognised but requires no further action (absorb it).
    Consumed,
}

/// Which part of the screen owns the keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    pub form_focused: bool,
    pub confirming: bool,
}

/// Map a raw key event to an `Action`, or `None` when the key is unbound.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    context: KeyContext,
) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL)
        && matches!(code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return Some(Action::Quit);
    }

    if context.confirming {
        return confirm_key(code);
    }
    if context.form_focused {
        return form_key(code, modifiers);
    }
    browse_key(code)
}

fn confirm_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ConfirmYes),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::ConfirmNo),
        _ => Some(Action::Consumed),
    }
}

fn form_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    match code {
        KeyCode::Esc => Some(Action::LeaveForm),
        KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
        KeyCode::Left => Some(Action::CycleOption { forward: false }),
        KeyCode::Right => Some(Action::CycleOption { forward: true }),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(Action::InputChar(c))
        }
        _ => None,
    }
}

fn browse_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            EntityKind::from_index(index).map(Action::SelectTab)
        }
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PrevTab),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(Action::GoToBottom),
        KeyCode::Char('n') => Some(Action::FocusForm),
        KeyCode::Char('d') => Some(Action::RequestDelete),
        KeyCode::Char('x') | KeyCode::Esc => Some(Action::DismissMessage),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('y') => Some(Action::CopyId),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROWSE: KeyContext = KeyContext {
        form_focused: false,
        confirming: false,
    };
    const FORM: KeyContext = KeyContext {
        form_focused: true,
        confirming: false,
    };
    const CONFIRM: KeyContext = KeyContext {
        form_focused: false,
        confirming: true,
    };

    fn key(code: KeyCode, context: KeyContext) -> Option<Action> {
        key_to_action(code, KeyModifiers::NONE, context)
    }

    #[test]
    fn test_number_keys_select_tabs() {
        assert_eq!(
            key(KeyCode::Char('1'), BROWSE),
            Some(Action::SelectTab(EntityKind::Customer))
        );
        assert_eq!(
            key(KeyCode::Char('4'), BROWSE),
            Some(Action::SelectTab(EntityKind::Payment))
        );
        assert_eq!(key(KeyCode::Char('5'), BROWSE), None);
    }

    #[test]
    fn test_browse_keys() {
        assert_eq!(key(KeyCode::Tab, BROWSE), Some(Action::NextTab));
        assert_eq!(key(KeyCode::BackTab, BROWSE), Some(Action::PrevTab));
        assert_eq!(key(KeyCode::Char('j'), BROWSE), Some(Action::MoveDown));
        assert_eq!(key(KeyCode::Char('G'), BROWSE), Some(Action::GoToBottom));
        assert_eq!(key(KeyCode::Char('d'), BROWSE), Some(Action::RequestDelete));
        assert_eq!(key(KeyCode::Char('x'), BROWSE), Some(Action::DismissMessage));
        assert_eq!(key(KeyCode::Char('y'), BROWSE), Some(Action::CopyId));
        assert_eq!(key(KeyCode::Char('q'), BROWSE), Some(Action::Quit));
    }

    #[test]
    fn test_form_captures_typing() {
        assert_eq!(key(KeyCode::Char('q'), FORM), Some(Action::InputChar('q')));
        assert_eq!(key(KeyCode::Char('1'), FORM), Some(Action::InputChar('1')));
        assert_eq!(key(KeyCode::Tab, FORM), Some(Action::NextField));
        assert_eq!(
            key(KeyCode::Right, FORM),
            Some(Action::CycleOption { forward: true })
        );
        assert_eq!(key(KeyCode::Enter, FORM), Some(Action::Submit));
        assert_eq!(key(KeyCode::Esc, FORM), Some(Action::LeaveForm));
    }

    #[test]
    fn test_confirm_dialog_captures_all_keys() {
        assert_eq!(key(KeyCode::Char('y'), CONFIRM), Some(Action::ConfirmYes));
        assert_eq!(key(KeyCode::Char('n'), CONFIRM), Some(Action::ConfirmNo));
        assert_eq!(key(KeyCode::Esc, CONFIRM), Some(Action::ConfirmNo));
        assert_eq!(key(KeyCode::Char('d'), CONFIRM), Some(Action::Consumed));
        assert_eq!(key(KeyCode::Char('1'), CONFIRM), Some(Action::Consumed));
    }

    #[test]
    fn test_ctrl_q_quits_everywhere() {
        for context in [BROWSE, FORM, CONFIRM] {
            assert_eq!(
                key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, context),
                Some(Action::Quit)
            );
        }
    }
}
