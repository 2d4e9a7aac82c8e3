//! Form domain layer
//!
//! Fields, focus handling and the validation rules the controllers apply.

mod field;
mod form_state;
pub mod validation;

pub use field::FormField;
pub use form_state::Form;
pub use validation::ValidationError;
