// src/models/mod.rs

pub mod preview;
pub mod transpile;
