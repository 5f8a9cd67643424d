//! Transient notification banners.
//!
//! Each banner lives until its own timer runs out or it is dismissed,
//! whichever comes first. Expiry of a banner that was already dismissed
//! is a no-op.

use wirip_shared::dom::notification_class;

pub const DEFAULT_SEVERITY: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub severity: String,
    /// How long the DOM layer's timer waits before calling `expire`.
    pub duration_ms: u32,
}

impl Notification {
    pub fn class_name(&self) -> String {
        notification_class(&self.severity)
    }
}

#[derive(Debug)]
pub struct NotificationCenter {
    default_ms: u32,
    next_id: u32,
    /// Ids of banners still in the document.
    live: Vec<u32>,
}

impl NotificationCenter {
    pub fn new(default_ms: u32) -> Self {
        Self {
            default_ms,
            next_id: 1,
            live: Vec::new(),
        }
    }

    /// Change the lifetime used when `show` gets no duration. Banners
    /// already live keep theirs.
    pub fn set_default_ms(&mut self, default_ms: u32) {
        self.default_ms = default_ms;
    }

    /// Register a new banner. Blank severity falls back to `info`.
    pub fn show(&mut self, severity: Option<&str>, duration_ms: Option<u32>) -> Notification {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.live.push(id);

        let severity = severity
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SEVERITY);

        Notification {
            id,
            severity: severity.to_string(),
            duration_ms: duration_ms.unwrap_or(self.default_ms),
        }
    }

    /// Manual dismissal. Returns true if the banner was still live.
    pub fn dismiss(&mut self, id: u32) -> bool {
        self.remove(id)
    }

    /// The banner's own timer fired. Returns true if it is still live and
    /// must now be removed from the document.
    pub fn expire(&mut self, id: u32) -> bool {
        self.remove(id)
    }

    #[cfg(test)]
    pub fn is_live(&self, id: u32) -> bool {
        self.live.contains(&id)
    }

    fn remove(&mut self, id: u32) -> bool {
        let before = self.live.len();
        self.live.retain(|live_id| *live_id != id);
        self.live.len() != before
    }
}
