//! Form rendering helpers

mod field_renderer;

pub use field_renderer::{draw_field, draw_form_error, FIELD_HEIGHT};
