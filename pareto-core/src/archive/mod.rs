//! Archives which maintain sets of solutions discovered during an evolutionary search.

use crate::solution::Solution;
use crate::utils::GenericResult;

mod non_dominated;
pub use self::non_dominated::ParetoArchive;

mod unbounded;
pub use self::unbounded::UnboundedArchive;

/// A mutable set-like container of solutions populated incrementally by a search.
///
/// Archives are not internally synchronized: preventing concurrent mutation of one
/// instance is the caller's responsibility.
pub trait Archive {
    /// A type of a solution stored in the archive.
    type Solution: Solution;

    /// Tries to insert the solution into the archive.
    ///
    /// Returns `Ok(true)` if the solution was inserted and `Ok(false)` if it was rejected.
    /// A rejection is normal archive behavior, not a failure. Returns an error if the
    /// solution violates the archive's consistency rules.
    fn add(&mut self, solution: Self::Solution) -> GenericResult<bool>;

    /// Inserts all given solutions, one by one.
    fn add_all(&mut self, solutions: Vec<Self::Solution>) -> GenericResult<&mut Self> {
        for solution in solutions {
            self.add(solution)?;
        }

        Ok(self)
    }

    /// Inserts deep copies of all solutions stored in another archive.
    fn join(&mut self, other: &impl Archive<Solution = Self::Solution>) -> GenericResult<&mut Self>
    where
        Self: Sized,
    {
        let solutions = other.iter().map(|solution| solution.deep_copy()).collect();
        self.add_all(solutions)
    }

    /// Returns the solution stored at the given position.
    fn get(&self, index: usize) -> GenericResult<&Self::Solution>;

    /// Returns the amount of stored solutions.
    fn size(&self) -> usize;

    /// Iterates over stored solutions.
    fn iter(&self) -> Box<dyn Iterator<Item = &'_ Self::Solution> + '_>;
}
