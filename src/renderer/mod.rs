//! Board rendering
//!
//! Only a plain-text dump is provided; the core never depends on it.

pub mod text;

pub use text::{render_board, ATOM_MARK, EMPTY_MARK, PATH_MARK};
