//! # WiRiP Model Crate
//!
//! State engines behind the page behaviours. Each engine owns the state of
//! one behaviour and decides what should change; the web crate reads the
//! page, feeds the engine, and applies its decisions to the DOM.
//!
//! ## Pattern
//! - Engines own ALL mutable state for their behaviour (no globals).
//! - Time is an input (`now_ms`), never read from a clock here.
//! - I/O sits behind small traits (`VoteTransport`, `VoteView`,
//!   `ClipboardBackend`, `FieldAnnotations`) so every engine is tested
//!   natively, without a browser.
//!
//! ## Engines
//! | Module | Behaviour |
//! |---|---|
//! | [`timing`] | debounce / throttle |
//! | [`search`] | card search filter |
//! | [`viewport`] | lazy images and reveal-on-scroll, one shot per element |
//! | [`nav`] | same-page anchors, mobile menu closing |
//! | [`form`] | required-field validation |
//! | [`vote`] | vote buttons |
//! | [`notify`] | notification banners |
//! | [`clipboard`] | copy with fallback |

pub mod clipboard;
pub mod error;
pub mod form;
pub mod nav;
pub mod notify;
pub mod search;
pub mod timing;
pub mod viewport;
pub mod vote;

pub use error::{Result, UiError};
