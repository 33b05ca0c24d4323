//! Game definitions and logic.

mod generator;
mod move_set;
mod rules;
mod table;

pub use generator::MoveGenerator;
pub use move_set::{MoveSet, MoveSetError};
pub use rules::{resolve, Outcome};
pub use table::PayoffTable;
