// src/utils/risk.rs

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Serialize, Serializer};

/// The class of dangerous construct that blocked a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskReason {
    ScriptTag,
    EventHandler,
    JavascriptUrl,
    VbscriptUrl,
    DangerousElement,
}

impl RiskReason {
    /// Human-readable label shown in the security warning.
    pub fn label(self) -> &'static str {
        match self {
            RiskReason::ScriptTag => "Script tags detected",
            RiskReason::EventHandler => "Event handlers detected",
            RiskReason::JavascriptUrl => "JavaScript URLs detected",
            RiskReason::VbscriptUrl => "VBScript URLs detected",
            RiskReason::DangerousElement => "Potentially dangerous HTML elements detected",
        }
    }
}

impl fmt::Display for RiskReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RiskReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Outcome of classifying a candidate.
///
/// Serializes as `{"status":"no_risk"}` or
/// `{"status":"risk","reason":"Script tags detected"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum RiskVerdict {
    NoRisk,
    Risk(RiskReason),
}

impl RiskVerdict {
    pub fn is_risk(&self) -> bool {
        matches!(self, RiskVerdict::Risk(_))
    }

    pub fn reason(&self) -> Option<RiskReason> {
        match self {
            RiskVerdict::NoRisk => None,
            RiskVerdict::Risk(reason) => Some(*reason),
        }
    }
}

struct RiskRule {
    pattern: Regex,
    reason: RiskReason,
}

/// Ordered rule table. Evaluation stops at the first match, so the order
/// here is the reporting priority.
static RULES: LazyLock<Vec<RiskRule>> = LazyLock::new(|| {
    [
        (r"(?i)<script\b", RiskReason::ScriptTag),
        // Browsers also accept `/` or a closing quote as attribute separators.
        (r#"(?i)(?:^|[\s/"'])on\w+\s*="#, RiskReason::EventHandler),
        (r"(?i)javascript:", RiskReason::JavascriptUrl),
        (r"(?i)vbscript:", RiskReason::VbscriptUrl),
        (
            r"(?i)<(?:object|embed|applet|form|input|textarea|button|select|option)\b",
            RiskReason::DangerousElement,
        ),
    ]
    .into_iter()
    .map(|(pattern, reason)| RiskRule {
        pattern: Regex::new(pattern).expect("risk rule must compile"),
        reason,
    })
    .collect()
});

/// Decides whether a candidate is too dangerous to render at all.
///
/// Conservative by construction: a false positive only costs the user the
/// preview, the raw code is still shown.
pub fn classify(candidate: &str) -> RiskVerdict {
    RULES
        .iter()
        .find(|rule| rule.pattern.is_match(candidate))
        .map_or(RiskVerdict::NoRisk, |rule| RiskVerdict::Risk(rule.reason))
}
