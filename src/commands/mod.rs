// src/commands/mod.rs
// Declares the command modules.

pub mod inventory;
