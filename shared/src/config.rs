//! Page-level configuration.
//!
//! The page may embed `<script type="application/json" id="ui-config">` to
//! override any of these; every field falls back to its default, so an empty
//! object (or no block at all) yields `UiConfig::default()`.

use serde::Deserialize;

use crate::{
    MIN_QUERY_LEN, NOTIFICATION_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SEARCH_DEBOUNCE_MS,
    STAGGER_STEP_S, VOTE_FEEDBACK_MS,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub vote_endpoint: String,
    pub search_debounce_ms: u32,
    pub min_query_len: usize,
    pub feedback_ms: u32,
    pub notification_ms: u32,
    pub stagger_step_s: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            vote_endpoint: "/vote".to_string(),
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            min_query_len: MIN_QUERY_LEN,
            feedback_ms: VOTE_FEEDBACK_MS,
            notification_ms: NOTIFICATION_MS,
            stagger_step_s: STAGGER_STEP_S,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse an inline config block. Blank text is the default config.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text)
    }
}
