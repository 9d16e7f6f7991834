//! Scan result interpreter.
//!
//! # Invariants
//! - Tracking-number shape is `CD` followed by one or more ASCII digits,
//!   anchored at both ends.
//! - Non-matching text is a valid outcome: it is surfaced for manual
//!   follow-up and never blocks further action.

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

static TRACKING_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CD[0-9]+$").expect("valid tracking number regex"));

/// Router path of the tracking view.
pub const DEFAULT_TRACKING_PATH: &str = "/track";
/// Query parameter carrying the tracking number.
pub const TRACKING_CODE_PARAM: &str = "code";

/// Returns whether `value` has the tracking-number shape.
pub fn is_tracking_number(value: &str) -> bool {
    TRACKING_NUMBER_RE.is_match(value)
}

/// Router hand-off: a path plus the single `code` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTarget {
    pub path: String,
    pub code: String,
}

impl NavigationTarget {
    /// Tracking-view target for `code` on the default path.
    pub fn track(code: impl Into<String>) -> Self {
        Self {
            path: DEFAULT_TRACKING_PATH.to_string(),
            code: code.into(),
        }
    }

    /// Renders `path?code=<code>` with form-urlencoding of the code.
    pub fn to_uri(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(TRACKING_CODE_PARAM, &self.code)
            .finish();
        format!("{}?{}", self.path, query)
    }
}

/// Classification of one scan or manual entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Literal scanned text shown to the user.
    pub display: String,
    pub should_navigate: bool,
    /// Present exactly when `should_navigate` is set.
    pub navigation_target: Option<NavigationTarget>,
}

/// Classifier bound to one tracking-view path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanInterpreter {
    tracking_path: String,
}

impl ScanInterpreter {
    pub fn new(tracking_path: impl Into<String>) -> Self {
        Self {
            tracking_path: tracking_path.into(),
        }
    }

    /// Classifies decoded or manually entered text.
    pub fn interpret(&self, raw_text: &str) -> ScanOutcome {
        let should_navigate = is_tracking_number(raw_text);
        info!(
            "event=scan_interpret module=scan status={} chars={}",
            if should_navigate { "navigate" } else { "display_only" },
            raw_text.chars().count()
        );
        ScanOutcome {
            display: raw_text.to_string(),
            should_navigate,
            navigation_target: should_navigate.then(|| self.target_for(raw_text)),
        }
    }

    /// Target for explicitly tracking any scanned text, matching or not.
    pub fn track_anyway(&self, raw_text: &str) -> NavigationTarget {
        self.target_for(raw_text)
    }

    fn target_for(&self, code: &str) -> NavigationTarget {
        NavigationTarget {
            path: self.tracking_path.clone(),
            code: code.to_string(),
        }
    }
}

impl Default for ScanInterpreter {
    fn default() -> Self {
        Self::new(DEFAULT_TRACKING_PATH)
    }
}

/// Classifies `raw_text` against the default tracking path.
pub fn interpret(raw_text: &str) -> ScanOutcome {
    ScanInterpreter::default().interpret(raw_text)
}
