//! Form domain layer
//!
//! Field identities and the contact form state that the controller drives.

mod field;
mod form_state;

pub use field::{FieldId, FieldKind, FormField};
pub use form_state::{ContactForm, Focus};
#[cfg(test)]
pub use form_state::SUBMIT_LABEL;
