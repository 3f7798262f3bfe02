//! Sparse generation stepping.
//!
//! Only live cells and their Moore neighborhoods are visited, so the cost of a
//! step scales with the population rather than with any bounding box.
//! The next generation is assembled in full before it is handed back; callers
//! swap it in as a unit and never observe a half-updated set.

use std::collections::HashSet;

use rayon::prelude::*;

use super::{Algorithm, BirthWindow, Cell, CellSet, ConwayRule};

/// Result of one step: the next generation and its bookkeeping
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub cells: CellSet,
    /// Live cells in `cells` (survivors + births)
    pub live_count: usize,
    pub births: usize,
    pub deaths: usize,
}

/// Deaths and births decided against one frozen generation
struct Transitions {
    deaths: Vec<Cell>,
    births: Vec<Cell>,
    live_count: usize,
}

/// AutomatonEngine applies the B3/S23 rule to a CellSet.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutomatonEngine {
    rule: ConwayRule,
    window: BirthWindow,
    algorithm: Algorithm,
}

impl AutomatonEngine {
    pub fn new(window: BirthWindow, algorithm: Algorithm) -> Self {
        Self {
            rule: ConwayRule,
            window,
            algorithm,
        }
    }

    pub fn window(&self) -> BirthWindow {
        self.window
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Compute the generation following `current`.
    /// `current` is only read; the returned set is a fresh value.
    pub fn step(&self, current: &CellSet) -> Generation {
        let transitions = match self.algorithm {
            Algorithm::Sequential => self.transitions(current),
            Algorithm::Parallel => self.transitions_parallel(current),
        };
        Self::apply(current, transitions)
    }

    fn transitions(&self, current: &CellSet) -> Transitions {
        let mut deaths = Vec::new();
        let mut births = Vec::new();
        let mut visited = HashSet::new();
        let mut live_count = 0;

        for &cell in current {
            if self.rule.survives(current.population(cell)) {
                live_count += 1;
            } else {
                deaths.push(cell);
            }

            // A dead cell next to several live ones is judged once
            for neighbor in cell.neighbors() {
                if current.contains(neighbor) || !visited.insert(neighbor) {
                    continue;
                }
                if self.window.contains(neighbor)
                    && self.rule.is_born(current.population(neighbor))
                {
                    births.push(neighbor);
                    live_count += 1;
                }
            }
        }

        Transitions { deaths, births, live_count }
    }

    fn transitions_parallel(&self, current: &CellSet) -> Transitions {
        let deaths: Vec<Cell> = current
            .par_iter()
            .copied()
            .filter(|&cell| !self.rule.survives(current.population(cell)))
            .collect();

        let candidates: HashSet<Cell> = current
            .par_iter()
            .flat_map_iter(|cell| cell.neighbors())
            .filter(|&n| !current.contains(n) && self.window.contains(n))
            .collect();

        let births: Vec<Cell> = candidates
            .into_par_iter()
            .filter(|&n| self.rule.is_born(current.population(n)))
            .collect();

        let live_count = current.len() - deaths.len() + births.len();
        Transitions { deaths, births, live_count }
    }

    fn apply(current: &CellSet, transitions: Transitions) -> Generation {
        let Transitions { deaths, births, live_count } = transitions;

        // Deaths come from the live set and births from the dead set,
        // so no coordinate can be in both lists.
        debug_assert!(deaths.iter().all(|c| current.contains(*c)));
        debug_assert!(births.iter().all(|c| !current.contains(*c)));

        let mut cells = current.clone();
        for &cell in &deaths {
            cells.remove(cell);
        }
        for &cell in &births {
            cells.insert(cell);
        }
        debug_assert_eq!(cells.len(), live_count);

        Generation {
            cells,
            live_count,
            births: births.len(),
            deaths: deaths.len(),
        }
    }
}
