//! Implements the `add-*` / `take-*` inventory commands.

pub mod logic;
pub mod run;
pub mod ui;

pub use run::run_prefix;
