// src/utils/mod.rs

pub mod headers;
pub mod html;
pub mod preview;
pub mod risk;
