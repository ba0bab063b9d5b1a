// src/handlers/health.rs

use axum::{
    Json,
    response::{Html, IntoResponse},
};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Landing page served when no frontend build is present.
pub async fn api_info() -> Html<&'static str> {
    Html(concat!(
        "<!DOCTYPE html>\n",
        "<html>\n",
        "<head><title>D.Ö.N.E.R API</title></head>\n",
        "<body>\n",
        "<h1>D.Ö.N.E.R API Server</h1>\n",
        "<p>The API server is running. Frontend build not found.</p>\n",
        "<h2>Available Endpoints:</h2>\n",
        "<ul>\n",
        "<li><a href=\"/health\">GET /health</a> - Health check</li>\n",
        "<li><a href=\"/api/dictionary\">GET /api/dictionary</a> - View dictionary</li>\n",
        "<li>POST /api/transpile - Transpile German HTML and prepare a preview</li>\n",
        "<li>POST /api/preview - Check and sanitize HTML</li>\n",
        "<li>POST /api/render - Render the preview panel</li>\n",
        "</ul>\n",
        "</body>\n",
        "</html>\n",
    ))
}
