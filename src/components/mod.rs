pub mod confirm_dialog;
pub mod modal;
pub mod sidebar;
pub mod spinner;

pub use confirm_dialog::ConfirmDialog;
pub use modal::Modal;
pub use sidebar::Sidebar;
pub use spinner::Spinner;
