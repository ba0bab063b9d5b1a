// src/lib.rs

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod upstream;
pub mod utils;

pub use routes::create_router;
pub use utils::{
    html::{sanitize, sanitize_fragment},
    preview::Preview,
    risk::{RiskReason, RiskVerdict, classify},
};
