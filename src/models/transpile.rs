// src/models/transpile.rs

use std::{borrow::Cow, collections::BTreeMap};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const BLANK_CONTENT_MESSAGE: &str = "Please enter some German HTML to transpile";

/// Body of `/api/transpile`, forwarded unchanged to the transpilation service.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TranspileRequest {
    #[validate(custom(function = validate_not_blank))]
    pub content: String,
}

/// Reply of the transpilation service. Exactly one side is meaningful:
/// a non-empty `error` wins over `result`.
#[derive(Debug, Default, Deserialize)]
pub struct TranspileResponse {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Supported German tags and attributes, keyed by their German name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct DictionaryView {
    pub available: bool,
    #[serde(flatten)]
    pub dictionary: Dictionary,
}

impl DictionaryView {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            dictionary: Dictionary::default(),
        }
    }
}

fn validate_not_blank(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        let mut err = ValidationError::new("blank_content");
        err.message = Some(Cow::Borrowed(BLANK_CONTENT_MESSAGE));
        return Err(err);
    }
    Ok(())
}
