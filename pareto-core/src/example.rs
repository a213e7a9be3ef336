//! This module contains an example solution model which demonstrates practical usage of
//! the archive and ranking functionality.

#[cfg(test)]
#[path = "../tests/unit/example_test.rs"]
mod example_test;

use crate::solution::{FrontRanks, RankingToken, Solution};
use crate::utils::Float;

/// An example solution which keeps its objective and constraint values in plain vectors.
#[derive(Clone, Debug)]
pub struct PointSolution {
    objectives: Vec<Float>,
    constraints: Vec<Float>,
    ranks: FrontRanks,
}

impl PointSolution {
    /// Creates an unconstrained solution from objective values.
    pub fn new(objectives: Vec<Float>) -> Self {
        Self::with_constraints(objectives, Vec::new())
    }

    /// Creates a solution with constraint values where zero means satisfied.
    pub fn with_constraints(objectives: Vec<Float>, constraints: Vec<Float>) -> Self {
        Self { objectives, constraints, ranks: FrontRanks::default() }
    }
}

impl Solution for PointSolution {
    fn objectives(&self) -> &[Float] {
        self.objectives.as_slice()
    }

    fn constraints(&self) -> &[Float] {
        self.constraints.as_slice()
    }

    fn set_front_rank(&mut self, token: RankingToken, rank: usize) {
        self.ranks.set(token, rank);
    }

    fn front_rank(&self, token: RankingToken) -> Option<usize> {
        self.ranks.get(token)
    }

    fn deep_copy(&self) -> Self {
        self.clone()
    }
}
