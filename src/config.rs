// src/config.rs

use std::{env, path::PathBuf, str::FromStr};
use dotenvy::dotenv;

pub const DEFAULT_UPSTREAM_URL: &str = "https://doner-html-transpiler.onrender.com/";

/// Origins of the known frontends (dev servers and production).
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "https://doner-html-transpiler.onrender.com",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub log_dir: PathBuf,

    /// Base URL of the remote transpilation service.
    pub upstream_url: String,
    pub upstream_timeout_secs: u64,

    /// Largest accepted `content` payload, in bytes.
    pub max_input_bytes: usize,

    /// Requests per minute per client IP on `/api`. Zero disables the limit.
    pub rate_limit_per_minute: u32,

    pub allowed_origins: Vec<String>,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            log_dir: PathBuf::from("logs"),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout_secs: 10,
            max_input_bytes: 100 * 1024,
            rate_limit_per_minute: 100,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
            static_dir: PathBuf::from("./static"),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        Self {
            port: parsed_var("PORT", defaults.port),
            rust_log: env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            log_dir: env::var("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            upstream_url: env::var("UPSTREAM_URL").unwrap_or(defaults.upstream_url),
            upstream_timeout_secs: parsed_var("UPSTREAM_TIMEOUT_SECS", defaults.upstream_timeout_secs),
            max_input_bytes: parsed_var("MAX_INPUT_BYTES", defaults.max_input_bytes),
            rate_limit_per_minute: parsed_var("RATE_LIMIT_PER_MINUTE", defaults.rate_limit_per_minute),
            allowed_origins,
            static_dir: env::var("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
        }
    }
}

/// Reads and parses an environment variable, keeping the default when the
/// variable is unset or malformed.
fn parsed_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring malformed {}={:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}
