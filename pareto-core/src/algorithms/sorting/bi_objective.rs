//! Implementation of a single-pass bi-objective non-dominated sorting.
//!
//! After a lexicographic sort of the population, locating the front of a solution needs
//! only a binary search over the best second-objective value seen so far in each front.
//! This assigns fronts to `N` two-objective solutions in `O(N * log N)` total instead of
//! the `O(N^2)` pairwise comparisons of generic non-dominated sorting.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/sorting/bi_objective_test.rs"]
mod bi_objective_test;

use crate::solution::{RankingToken, Solution};
use crate::utils::{Float, GenericResult, compare_floats};

/// Splits a bi-objective population into ordered dominance fronts, collapsing solutions
/// with identical objective values into the rank of their predecessor.
pub struct BiObjectiveRanking<'a, S> {
    token: RankingToken,
    population: &'a [S],
    fronts: Vec<Vec<usize>>,
}

/// Splits a bi-objective population into ordered dominance fronts, locating the front of
/// every solution individually so that solutions with identical objective values occupy
/// successively worse fronts.
pub struct StrictBiObjectiveRanking<'a, S> {
    token: RankingToken,
    population: &'a [S],
    fronts: Vec<Vec<usize>>,
}

macro_rules! impl_bi_objective_ranking {
    ($type_: ident, $handling_: expr) => {
        impl<'a, S: Solution> $type_<'a, S> {
            /// Computes the ranking of the given population, writing the front index of
            /// every solution into its rank store under this ranking's token.
            ///
            /// Feasible solutions are split into dominance fronts; infeasible solutions
            /// are placed into one additional trailing front. An empty population yields
            /// zero fronts. Fails if any solution has an objective count other than two.
            pub fn compute(population: &'a mut [S]) -> GenericResult<Self> {
                let token = RankingToken::new();
                let fronts = rank_fronts(&mut *population, token, $handling_)?;
                let population: &'a [S] = population;

                Ok(Self { token, population, fronts })
            }

            /// Iterates over solutions of the front with the given rank.
            pub fn sub_front(&self, rank: usize) -> GenericResult<Box<dyn Iterator<Item = &'a S> + '_>> {
                let population = self.population;
                match self.fronts.get(rank) {
                    Some(front) => Ok(Box::new(front.iter().map(move |idx| &population[*idx]))),
                    None => Err(format!("invalid rank: {rank}, total sub fronts: {}", self.fronts.len()).into()),
                }
            }

            /// Returns the amount of computed sub fronts.
            pub fn number_of_sub_fronts(&self) -> usize {
                self.fronts.len()
            }

            /// Returns the front index of the solution if it was ranked by this instance.
            pub fn rank_of(&self, solution: &S) -> Option<usize> {
                solution.front_rank(self.token)
            }

            /// Returns the identity token under which this ranking stores front indices.
            pub fn token(&self) -> RankingToken {
                self.token
            }
        }
    };
}

impl_bi_objective_ranking!(BiObjectiveRanking, DuplicateHandling::Collapse);
impl_bi_objective_ranking!(StrictBiObjectiveRanking, DuplicateHandling::Locate);

#[derive(Clone, Copy)]
enum DuplicateHandling {
    /// Assigns to a solution which repeats the previous objective values the previous rank.
    Collapse,
    /// Locates the front of every solution with a binary search.
    Locate,
}

fn rank_fronts<S: Solution>(
    population: &mut [S],
    token: RankingToken,
    duplicates: DuplicateHandling,
) -> GenericResult<Vec<Vec<usize>>> {
    if let Some(solution) = population.iter().find(|solution| solution.objectives().len() != 2) {
        return Err(format!(
            "bi-objective ranking supports exactly 2 objectives, detected {}",
            solution.objectives().len()
        )
        .into());
    }

    let (mut feasible, mut infeasible): (Vec<usize>, Vec<usize>) =
        (0..population.len()).partition(|idx| population[*idx].is_feasible());

    feasible.sort_by(|&left, &right| {
        let left = population[left].objectives();
        let right = population[right].objectives();
        compare_floats(left[0], right[0]).then_with(|| compare_floats(left[1], right[1]))
    });

    let mut fronts: Vec<Vec<usize>> = Vec::new();
    let mut best_f2_per_front: Vec<Float> = Vec::new();
    let mut previous: Option<(Float, Float, usize)> = None;

    for idx in feasible {
        let objectives = population[idx].objectives();
        let (f1, f2) = (objectives[0], objectives[1]);

        let rank = match (duplicates, previous) {
            (DuplicateHandling::Collapse, Some((pf1, pf2, prank))) if pf1 == f1 && pf2 == f2 => prank,
            _ => {
                let rank = locate_front(best_f2_per_front.as_slice(), f2);
                if rank == best_f2_per_front.len() {
                    best_f2_per_front.push(f2);
                    fronts.push(Vec::new());
                } else {
                    // the best value of a front only improves
                    best_f2_per_front[rank] = f2;
                }
                rank
            }
        };
        previous = Some((f1, f2, rank));

        population[idx].set_front_rank(token, rank);
        fronts[rank].push(idx);
    }

    if !infeasible.is_empty() {
        infeasible.sort_by(|&left, &right| {
            compare_floats(violation_magnitude(&population[left]), violation_magnitude(&population[right]))
        });

        let rank = fronts.len();
        infeasible.iter().for_each(|&idx| population[idx].set_front_rank(token, rank));
        fronts.push(infeasible);
    }

    Ok(fronts)
}

/// Finds the leftmost front whose best (minimum) second-objective value exceeds `f2`.
///
/// `best_f2_per_front` is ascending: a front is only opened by a solution which could not
/// enter any earlier front, so best values grow with the rank.
fn locate_front(best_f2_per_front: &[Float], f2: Float) -> usize {
    best_f2_per_front.partition_point(|best| *best <= f2)
}

fn violation_magnitude<S: Solution>(solution: &S) -> Float {
    solution.constraints().iter().map(|value| value.abs()).sum()
}
