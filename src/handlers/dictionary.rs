// src/handlers/dictionary.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    models::transpile::DictionaryView,
    upstream::Transpiler,
};

/// Lists the supported German tags and attributes.
///
/// Never fails: when the transpilation service is unreachable the
/// dictionary is reported as unavailable instead.
pub async fn get_dictionary(State(upstream): State<Arc<dyn Transpiler>>) -> impl IntoResponse {
    let view = match upstream.fetch_dictionary().await {
        Ok(dictionary) => DictionaryView {
            available: true,
            dictionary,
        },
        Err(e) => {
            tracing::warn!("Dictionary unavailable: {}", e);
            DictionaryView::unavailable()
        }
    };

    Json(view)
}
