//! An archive which keeps every distinct solution it is offered.

#[cfg(test)]
#[path = "../../tests/unit/archive/unbounded_test.rs"]
mod unbounded_test;

use super::Archive;
use crate::algorithms::dominance::objectives_equal;
use crate::solution::Solution;
use crate::utils::GenericResult;

/// An unbounded archive which rejects solutions with an already stored objective vector,
/// but performs no dominance filtering. Solutions are kept in insertion order.
pub struct UnboundedArchive<S> {
    solutions: Vec<S>,
}

impl<S> UnboundedArchive<S> {
    /// Creates an empty archive.
    pub fn new() -> Self {
        Self { solutions: Vec::new() }
    }
}

impl<S> Default for UnboundedArchive<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Solution> Archive for UnboundedArchive<S> {
    type Solution = S;

    fn add(&mut self, solution: S) -> GenericResult<bool> {
        let is_contained = self
            .solutions
            .iter()
            .any(|stored| objectives_equal(stored.objectives(), solution.objectives()));

        if is_contained {
            Ok(false)
        } else {
            self.solutions.push(solution);
            Ok(true)
        }
    }

    fn get(&self, index: usize) -> GenericResult<&S> {
        self.solutions
            .get(index)
            .ok_or_else(|| format!("invalid index: {index}, archive size: {}", self.solutions.len()).into())
    }

    fn size(&self) -> usize {
        self.solutions.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &'_ S> + '_> {
        Box::new(self.solutions.iter())
    }
}
