//! An archive which maintains a set of mutually non-dominated solutions.

#[cfg(test)]
#[path = "../../tests/unit/archive/non_dominated_test.rs"]
mod non_dominated_test;

use super::Archive;
use crate::algorithms::dominance::{DominanceOrd, ParetoDominance, objectives_equal};
use crate::solution::Solution;
use crate::utils::GenericResult;
use std::cmp::Ordering;

/// An archive which keeps only mutually non-dominated solutions: inserting a solution
/// evicts every stored solution it dominates and is rejected when a stored solution
/// dominates it or shares its objective vector.
///
/// The objective dimensionality is fixed by the first inserted solution; offering a
/// solution with a different dimensionality later is a consistency error. Bi-objective
/// archives use a sorted staircase representation which brings the cost of locating an
/// insertion point from `O(n)` down to `O(log n)`; the amount of evictions across all
/// insertions is bounded by the amount of accepted solutions, which keeps bulk insertion
/// cheap in the amortized sense.
pub struct ParetoArchive<S, D = ParetoDominance<S>> {
    store: Store<S>,
    dominance: D,
}

/// A storage strategy selected at the first insertion and fixed for the archive lifetime.
enum Store<S> {
    /// No solution was inserted yet.
    Empty,
    /// Solutions of the recorded dimensionality, kept in insertion order.
    Generic { dim: usize, solutions: Vec<S> },
    /// Bi-objective solutions sorted ascending by the first objective, with the second
    /// objective strictly decreasing along that order.
    Staircase { solutions: Vec<S> },
}

impl<S: Solution> ParetoArchive<S> {
    /// Creates an empty archive with the strict Pareto dominance relation.
    pub fn new() -> Self {
        Self::with_dominance(ParetoDominance::default())
    }
}

impl<S: Solution> Default for ParetoArchive<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Solution, D: DominanceOrd<T = S>> ParetoArchive<S, D> {
    /// Creates an empty archive with a custom dominance relation.
    ///
    /// The relation is consulted by the generic insertion path only: the bi-objective
    /// staircase representation is valid for strict Pareto dominance and keeps using it.
    pub fn with_dominance(dominance: D) -> Self {
        Self { store: Store::Empty, dominance }
    }

    /// Removes the first stored solution whose objective vector equals the given one.
    /// Returns true if a solution was removed.
    pub fn remove(&mut self, candidate: &S) -> bool {
        let solutions = match &mut self.store {
            Store::Empty => return false,
            Store::Generic { solutions, .. } => solutions,
            Store::Staircase { solutions } => solutions,
        };

        match solutions.iter().position(|stored| objectives_equal(stored.objectives(), candidate.objectives())) {
            Some(index) => {
                solutions.remove(index);
                true
            }
            None => false,
        }
    }

    fn solutions(&self) -> &[S] {
        match &self.store {
            Store::Empty => &[],
            Store::Generic { solutions, .. } => solutions,
            Store::Staircase { solutions } => solutions,
        }
    }
}

impl<S: Solution, D: DominanceOrd<T = S>> Archive for ParetoArchive<S, D> {
    type Solution = S;

    fn add(&mut self, solution: S) -> GenericResult<bool> {
        let dim = solution.objectives().len();

        match &mut self.store {
            store @ Store::Empty => {
                *store = if dim == 2 {
                    Store::Staircase { solutions: vec![solution] }
                } else {
                    Store::Generic { dim, solutions: vec![solution] }
                };
                Ok(true)
            }
            Store::Generic { dim: existing, solutions } => {
                if dim != *existing {
                    return Err(format!("inconsistent objective dimensions: existing={existing}, new={dim}").into());
                }
                Ok(add_generic(solutions, &self.dominance, solution))
            }
            Store::Staircase { solutions } => {
                if dim != 2 {
                    return Err(format!("inconsistent objective dimensions: existing=2, new={dim}").into());
                }
                Ok(add_staircase(solutions, solution))
            }
        }
    }

    fn get(&self, index: usize) -> GenericResult<&S> {
        self.solutions()
            .get(index)
            .ok_or_else(|| format!("invalid index: {index}, archive size: {}", self.size()).into())
    }

    fn size(&self) -> usize {
        self.solutions().len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &'_ S> + '_> {
        Box::new(self.solutions().iter())
    }
}

/// Inserts the candidate scanning all stored solutions with the dominance relation.
fn add_generic<S, D>(solutions: &mut Vec<S>, dominance: &D, candidate: S) -> bool
where
    S: Solution,
    D: DominanceOrd<T = S>,
{
    let mut index = 0;
    while index < solutions.len() {
        match dominance.dominance_ord(&candidate, &solutions[index]) {
            // the stored solution is dominated by the candidate
            Ordering::Less => {
                solutions.remove(index);
            }
            // a stored solution dominates the candidate
            Ordering::Greater => return false,
            Ordering::Equal => {
                if objectives_equal(candidate.objectives(), solutions[index].objectives()) {
                    return false;
                }
                index += 1;
            }
        }
    }

    solutions.push(candidate);
    true
}

/// Inserts the candidate into the staircase, which is sorted ascending by the first
/// objective while the second objective strictly decreases along the order.
fn add_staircase<S: Solution>(solutions: &mut Vec<S>, candidate: S) -> bool {
    let f1 = candidate.objectives()[0];
    let f2 = candidate.objectives()[1];

    let index = solutions.partition_point(|stored| stored.objectives()[0] < f1);

    // a predecessor has a strictly smaller first objective, so an equal or better second
    // objective means the candidate is dominated
    if index > 0 && solutions[index - 1].objectives()[1] <= f2 {
        return false;
    }

    // at most one stored solution shares the candidate's first objective; with an equal
    // or better second objective it dominates or duplicates the candidate
    if let Some(stored) = solutions.get(index) {
        if stored.objectives()[0] == f1 && stored.objectives()[1] <= f2 {
            return false;
        }
    }

    // every following solution with a worse or equal second objective is dominated
    let evicted = solutions[index..].iter().take_while(|stored| stored.objectives()[1] >= f2).count();
    solutions.drain(index..index + evicted);

    solutions.insert(index, candidate);
    true
}
