//! # WiRiP Shared Crate
//!
//! Types, constants, and validation shared between the state engines
//! (`wirip-model`, native Rust, unit-tested without a browser) and the DOM
//! layer (`wirip-web`, compiled to WASM). This crate is the single source of
//! truth for anything both sides must agree on.
//!
//! ## Architecture
//!
//! ```text
//! shared crate (this)
//!   |
//!   +-- model crate (depends on shared)
//!   |     - Engines decide what changes: visibility, errors, vote state
//!   |
//!   +-- web crate (depends on shared + model, compiled to WASM)
//!         - Reads the page, feeds the engines, applies their decisions
//!         - wasm_bindgen lives in the web crate, NOT here
//! ```
//!
//! ## What belongs here
//!
//! - The `POST /vote` wire types
//! - Selectors and class names the page template must carry
//! - Timing defaults and the page-level `UiConfig`
//! - Pure validation helpers (no I/O, no WASM bindings)

pub mod config;
pub mod dom;
pub mod validation;
pub mod vote;

pub use config::UiConfig;
pub use vote::{VoteRequest, VoteResult};

// ============================================
// Timing Constants
//
// Defaults for every timer in the page. UiConfig
// starts from these; both the engines and the DOM
// layer read them from one place.
// ============================================

/// Quiet period before the card search runs.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Shortest query that triggers filtering. Shorter input shows every card.
pub const MIN_QUERY_LEN: usize = 3;

/// How long the vote success/failure marker stays on the button.
pub const VOTE_FEEDBACK_MS: u32 = 1000;

/// Default lifetime of a notification banner.
pub const NOTIFICATION_MS: u32 = 5000;

/// Per-card animation delay step, in seconds.
pub const STAGGER_STEP_S: f64 = 0.1;

/// Fraction of a card that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin for the reveal observer (shrinks the viewport bottom).
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ============================================
// Computation Helpers
// ============================================

/// Animation delay for the card at `index` among the matched cards,
/// formatted as a CSS time value (`"0s"`, `"0.1s"`, ...).
pub fn stagger_delay(index: usize, step_s: f64) -> String {
    format!("{}s", index as f64 * step_s)
}
