//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod header;
mod owner_form;
mod pagination;
mod restaurant_form;
mod restaurant_table;
mod sidebar;
mod status_badge;
mod toast_host;
mod wizard_dialog;

pub use delete_confirm_button::DeleteConfirmButton;
pub use header::Header;
pub use owner_form::OwnerForm;
pub use pagination::Pagination;
pub use restaurant_form::RestaurantForm;
pub use restaurant_table::{EditRequest, RestaurantTable};
pub use sidebar::Sidebar;
pub use status_badge::StatusBadge;
pub use toast_host::ToastHost;
pub use wizard_dialog::WizardDialog;
