//! Command implementations for the git-sentinel CLI

pub mod install;
pub mod run;
pub mod validate;
