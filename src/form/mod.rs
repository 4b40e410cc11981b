pub mod field_errors;
pub mod form_state;

pub use field_errors::FieldErrors;
pub use form_state::FormState;
