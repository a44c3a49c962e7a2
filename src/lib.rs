//! Degrees of separation between actors.
//!
//! Loads people, movies and cast lists from CSV into a [`dataset::Dataset`]
//! and finds the shortest chain of shared movies between two people with a
//! breadth-first search ([`search::PathFinder`]).

pub mod data_loading;
pub mod dataset;
pub mod error;
pub mod frontier;
pub mod names;
pub mod node;
pub mod report;
pub mod search;
