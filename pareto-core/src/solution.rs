//! Contracts for candidate solutions consumed by archives and rankings.

use crate::utils::Float;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Identifies a ranking instance which writes front indices into solutions. Every ranking
/// owns a distinct token, so multiple rankings can annotate the same solutions without
/// overwriting each other.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RankingToken(usize);

impl RankingToken {
    /// Allocates a token distinct from any other allocated within the process.
    pub fn new() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for RankingToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Represents a candidate solution evaluated on a fixed amount of objectives.
///
/// Objective values follow the minimization convention: lower is better. Archives and
/// rankings never change objective or constraint values, but rankings store front indices
/// through [`Solution::set_front_rank`].
pub trait Solution {
    /// Returns objective values of the solution.
    fn objectives(&self) -> &[Float];

    /// Returns constraint values of the solution where zero means the constraint is
    /// satisfied and a nonzero value is a violation magnitude. Unconstrained solutions
    /// return an empty slice.
    fn constraints(&self) -> &[Float] {
        &[]
    }

    /// Returns true if every constraint of the solution is satisfied.
    fn is_feasible(&self) -> bool {
        self.constraints().iter().all(|value| *value == 0.)
    }

    /// Stores the front index assigned by the ranking identified by `token`.
    fn set_front_rank(&mut self, token: RankingToken, rank: usize);

    /// Returns the front index assigned by the ranking identified by `token`, if any.
    fn front_rank(&self, token: RankingToken) -> Option<usize>;

    /// Creates a deep copy of the solution.
    fn deep_copy(&self) -> Self
    where
        Self: Sized;
}

/// Per-solution storage of front indices keyed by ranking identity. Solution types embed
/// it to get the rank bookkeeping part of the [`Solution`] contract.
#[derive(Clone, Debug, Default)]
pub struct FrontRanks {
    ranks: FxHashMap<RankingToken, usize>,
}

impl FrontRanks {
    /// Stores the front index assigned by the given ranking.
    pub fn set(&mut self, token: RankingToken, rank: usize) {
        self.ranks.insert(token, rank);
    }

    /// Returns the front index assigned by the given ranking, if any.
    pub fn get(&self, token: RankingToken) -> Option<usize> {
        self.ranks.get(&token).copied()
    }
}
