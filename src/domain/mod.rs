mod cell;
mod cell_set;
mod rules;
mod algorithm;
mod automaton;

pub use cell::{Cell, MOORE_OFFSETS};
pub use cell_set::CellSet;
pub use rules::{ConwayRule, BirthWindow};
pub use algorithm::Algorithm;
pub use automaton::{AutomatonEngine, Generation};
