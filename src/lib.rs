//! Odd-graceful labeling of trees.
//!
//! Each of the N nodes of a tree receives a distinct label from
//! `1, 3, 5, ..., 2N - 1` so that the differences between the labels at the
//! two ends of every edge are also distinct. [`labeling::solve`] runs the whole
//! pipeline: validate the tree, order its nodes breadth-first, and search for
//! the first labeling by backtracking.

pub mod cli;
pub mod config;
pub mod labeling;
pub mod output;
pub mod parser;
pub mod tree;

pub use labeling::{solve, Outcome, SearchOptions};
pub use tree::{StructureError, TreeRecord};
