//! Form Drafts
//!
//! Editable in-memory records behind the restaurant and owner sub-forms.
//! Drafts hold raw user input; payloads are derived from them on submit.

mod owner;
mod restaurant;

pub use owner::OwnerDraft;
pub use restaurant::RestaurantDraft;
