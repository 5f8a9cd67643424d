//! Selectors, attributes, and class names the page template must carry.
//!
//! The page is rendered elsewhere; these strings are the whole contract
//! between that template and this script.

// ── Selectors ──────────────────────────────────────────────────────────────

pub const SAME_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const LAZY_IMAGES: &str = "img[data-src]";

pub const NAV_TOGGLER: &str = ".navbar-toggler";
pub const NAV_COLLAPSE: &str = ".navbar-collapse";
pub const NAV_LINK: &str = ".nav-link";

pub const SEARCH_INPUT: &str = "#searchInput";
pub const BLOG_CARD: &str = ".blog-card";
pub const BLOG_TITLE: &str = ".blog-title";
pub const BLOG_SUMMARY: &str = ".blog-summary";
pub const ANIMATED_CARDS: &str = ".blog-card, .feature-card, .category-card";

pub const VOTE_BUTTON: &str = ".vote-btn";
pub const UPVOTE_BUTTON: &str = ".upvote-btn";
pub const DOWNVOTE_BUTTON: &str = ".downvote-btn";
pub const UPVOTE_COUNT_ID: &str = "upvote-count";
pub const DOWNVOTE_COUNT_ID: &str = "downvote-count";
pub const SCORE_COUNT_ID: &str = "score-count";

pub const REQUIRED_FIELDS: &str = "[required]";
pub const FIELD_ERROR: &str = ".field-error";

pub const NOTIFICATION_CONTAINER: &str = ".container";
pub const TOOLTIP_TRIGGERS: &str = "[data-bs-toggle=\"tooltip\"]";
pub const LOADING_SPINNER: &str = ".loading-spinner";

pub const UI_CONFIG_ID: &str = "ui-config";

// ── Attributes ─────────────────────────────────────────────────────────────

pub const ATTR_DATA_SRC: &str = "data-src";
pub const ATTR_POST_ID: &str = "data-post-id";
pub const ATTR_VOTE_TYPE: &str = "data-vote-type";

// ── Classes ────────────────────────────────────────────────────────────────

pub const CLASS_LAZY: &str = "lazy";
pub const CLASS_SHOW: &str = "show";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_REVEAL: &str = "animate-fade-in";
pub const CLASS_VOTE_SUCCESS: &str = "success-animation";
pub const CLASS_VOTE_ERROR: &str = "error-animation";
pub const CLASS_INVALID: &str = "is-invalid";
pub const CLASS_FIELD_ERROR: &str = "field-error text-danger mt-1";
pub const CLASS_LOADING: &str = "loading";
pub const CLASS_SPINNER: &str = "loading-spinner";

// ── Markup fragments ───────────────────────────────────────────────────────

pub const CHECKMARK_HTML: &str = "<i class=\"fas fa-check\"></i>";
pub const SPINNER_HTML: &str = "<i class=\"fas fa-spinner fa-spin\"></i>";

/// Class list of a notification banner with the given severity.
pub fn notification_class(severity: &str) -> String {
    format!("alert alert-{severity} alert-dismissible fade show notification-toast")
}
