use std::sync::Arc;

use crate::{config::Config, upstream::Transpiler};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub upstream: Arc<dyn Transpiler>,
}

impl FromRef<AppState> for Arc<dyn Transpiler> {
    fn from_ref(state: &AppState) -> Self {
        state.upstream.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
