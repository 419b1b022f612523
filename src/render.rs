//! Report rendering (console + HTML).

pub mod console;
pub mod html;
