// src/handlers/mod.rs

pub mod dictionary;
pub mod health;
pub mod preview;
pub mod transpile;
