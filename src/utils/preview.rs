// src/utils/preview.rs

use std::fmt::Write;

use crate::utils::{
    html::{PREVIEW_SANDBOX, sanitize},
    risk::{RiskReason, RiskVerdict, classify},
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Blocked(RiskReason),
    Rendered(String),
}

/// Display state for one transpile result.
///
/// The classifier runs first; only a candidate it lets through is handed
/// to the sanitizer, so a blocked preview never carries a document. The
/// raw code is kept verbatim either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    raw: String,
    outcome: Outcome,
}

impl Preview {
    pub fn build(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let outcome = match classify(&raw) {
            RiskVerdict::Risk(reason) => Outcome::Blocked(reason),
            RiskVerdict::NoRisk => Outcome::Rendered(sanitize(&raw)),
        };
        Self { raw, outcome }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn verdict(&self) -> RiskVerdict {
        match &self.outcome {
            Outcome::Blocked(reason) => RiskVerdict::Risk(*reason),
            Outcome::Rendered(_) => RiskVerdict::NoRisk,
        }
    }

    /// The sanitized document, absent when the preview was blocked.
    pub fn document(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Blocked(_) => None,
            Outcome::Rendered(document) => Some(document),
        }
    }

    /// The sanitized document, or the reason it was refused.
    pub fn into_document(self) -> Result<String, RiskReason> {
        match self.outcome {
            Outcome::Blocked(reason) => Err(reason),
            Outcome::Rendered(document) => Ok(document),
        }
    }

    pub fn into_parts(self) -> (String, RiskVerdict, Option<String>) {
        let verdict = self.verdict();
        let document = match self.outcome {
            Outcome::Blocked(_) => None,
            Outcome::Rendered(document) => Some(document),
        };
        (self.raw, verdict, document)
    }

    /// Renders the output panel: a security warning or a sandboxed frame,
    /// followed by the escaped raw code.
    pub fn render_panel(&self) -> String {
        let mut panel = String::from("<section class=\"preview-panel\">\n");

        match &self.outcome {
            Outcome::Blocked(reason) => {
                let _ = write!(
                    panel,
                    concat!(
                        "<div class=\"security-warning\" role=\"alert\">\n",
                        "<strong>Security Warning</strong>\n",
                        "<p>Preview disabled for security: {}</p>\n",
                        "<p>The HTML code is shown below, but preview is blocked to prevent XSS attacks.</p>\n",
                        "</div>\n",
                    ),
                    reason
                );
            }
            Outcome::Rendered(document) => {
                let _ = writeln!(
                    panel,
                    "<iframe sandbox=\"{}\" title=\"HTML Preview\" srcdoc=\"{}\"></iframe>",
                    PREVIEW_SANDBOX,
                    ammonia::clean_text(document)
                );
            }
        }

        let _ = write!(
            panel,
            "<pre class=\"html-code\">{}</pre>\n</section>\n",
            ammonia::clean_text(&self.raw)
        );
        panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::html::document_body;

    #[test]
    fn safe_candidate_is_rendered() {
        let preview = Preview::build("<p>hello</p>");
        assert_eq!(preview.verdict(), RiskVerdict::NoRisk);
        assert_eq!(preview.raw(), "<p>hello</p>");
        let document = preview.document().expect("document for safe input");
        assert_eq!(document_body(document), Some("<p>hello</p>"));
    }

    #[test]
    fn risky_candidate_has_no_document() {
        let raw = "<a href=\"javascript:alert(1)\">click</a>";
        let preview = Preview::build(raw);
        assert_eq!(
            preview.verdict(),
            RiskVerdict::Risk(RiskReason::JavascriptUrl)
        );
        assert!(preview.document().is_none());
        assert_eq!(preview.raw(), raw);

        let (parts_raw, verdict, document) = preview.into_parts();
        assert_eq!(parts_raw, raw);
        assert!(verdict.is_risk());
        assert!(document.is_none());
    }

    #[test]
    fn blocked_panel_shows_warning_and_escaped_code() {
        let panel = Preview::build("<script>alert(1)</script>").render_panel();
        assert!(panel.contains("Preview disabled for security: Script tags detected"));
        assert!(panel.contains("prevent XSS attacks"));
        assert!(!panel.contains("<iframe"));
        assert!(!panel.to_lowercase().contains("<script"));
        assert!(panel.contains("&lt;script&gt;"));
    }

    #[test]
    fn rendered_panel_uses_sandboxed_frame() {
        let panel = Preview::build("<p>hello</p>").render_panel();
        assert!(panel.contains("<iframe sandbox=\"allow-same-origin\" title=\"HTML Preview\""));
        assert!(!panel.contains("allow-scripts"));
        assert!(!panel.contains("Security Warning"));
        // The frame document is attribute-escaped, never inlined as markup.
        assert!(!panel.contains("<p>hello</p>"));
        assert!(panel.contains("&lt;p&gt;hello"));
    }
}
