//! This crate provides dominance-ordered solution containers and non-dominated sorting
//! building blocks which can be used to build a solver for multi-objective optimization
//! problems.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod algorithms;
pub mod archive;
pub mod example;
pub mod prelude;
pub mod solution;
pub mod utils;
