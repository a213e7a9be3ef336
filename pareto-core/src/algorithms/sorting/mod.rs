//! Non-dominated sorting which partitions a population into ordered Pareto fronts.

mod bi_objective;
pub use self::bi_objective::*;
