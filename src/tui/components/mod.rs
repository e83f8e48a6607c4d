//! Reusable TUI components

pub mod confirm_dialog;
pub mod empty_state;
pub mod footer;
pub mod form_pane;
pub mod header;
pub mod message_banner;
pub mod modal_container;
pub mod modal_overlay;
pub mod record_list;
pub mod tab_bar;

pub use confirm_dialog::{ConfirmDialog, ConfirmDialogProps};
pub use empty_state::{EmptyState, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, browse_shortcuts, confirm_shortcuts, form_shortcuts,
};
pub use form_pane::{FormPane, FormPaneProps};
pub use header::{Header, HeaderProps};
pub use message_banner::render_message;
pub use modal_container::{ModalContainer, ModalContainerProps};
pub use modal_overlay::{ModalOverlay, ModalOverlayProps};
pub use record_list::{RecordList, RecordListProps, visible_cards};
pub use tab_bar::{TabBar, TabBarProps};
