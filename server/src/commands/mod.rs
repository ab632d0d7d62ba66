//! Request pipeline shared by the form and JSON handlers.

pub mod submit;
