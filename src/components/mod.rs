//! UI Components
//!
//! Leptos views over the controller and toast queue.

mod specialist_form_modal;
mod specialists_list;
mod toast_host;

pub use specialist_form_modal::SpecialistFormModal;
pub use specialists_list::SpecialistsList;
pub use toast_host::ToastHost;
