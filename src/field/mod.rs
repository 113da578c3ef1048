//! Field snapshot: who is alive, who holds what, and what is on the table.

pub mod board;
pub mod view;

pub use board::{Board, FieldInfo};
pub use view::FieldView;
