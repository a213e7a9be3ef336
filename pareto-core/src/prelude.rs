//! This module reimports commonly used types.

pub use crate::solution::FrontRanks;
pub use crate::solution::RankingToken;
pub use crate::solution::Solution;

pub use crate::algorithms::dominance::DominanceOrd;
pub use crate::algorithms::dominance::ParetoDominance;

pub use crate::algorithms::sorting::BiObjectiveRanking;
pub use crate::algorithms::sorting::StrictBiObjectiveRanking;

pub use crate::archive::Archive;
pub use crate::archive::ParetoArchive;
pub use crate::archive::UnboundedArchive;

pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::compare_floats;
