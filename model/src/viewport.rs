//! One-shot viewport tracking for lazy images and reveal animations.
//!
//! Each tracked element fires at most once: the first intersecting entry
//! triggers it and drops it from the watch list, so later entries for the
//! same element (duplicates in one batch, late callbacks) are ignored.
//! The intersection threshold itself is applied by the browser observer.

#[derive(Debug, Clone)]
pub struct ViewportTracker {
    watching: Vec<bool>,
}

impl ViewportTracker {
    pub fn new(count: usize) -> Self {
        Self {
            watching: vec![true; count],
        }
    }

    /// Handle one observer entry. Returns true exactly once per element:
    /// the caller should apply the effect and unobserve it.
    pub fn on_entry(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.watching.get_mut(index) {
            Some(watching) if *watching => {
                *watching = false;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn is_watching(&self, index: usize) -> bool {
        self.watching.get(index).copied().unwrap_or(false)
    }

    /// Trigger everything still watched, in order. Used when the runtime
    /// has no intersection observer.
    pub fn drain(&mut self) -> Vec<usize> {
        let fired: Vec<usize> = self
            .watching
            .iter()
            .enumerate()
            .filter(|(_, watching)| **watching)
            .map(|(i, _)| i)
            .collect();
        self.watching.fill(false);
        fired
    }
}
