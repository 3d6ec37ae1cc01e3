//! Utilities shared between configuration lookup and hook installation

pub mod ancestors;

pub use ancestors::{find_ancestor_with, find_from_origins, search_origins};
