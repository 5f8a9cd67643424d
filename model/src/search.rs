// ============================================================================
// SEARCH ENGINE: Client-Side Card Filter
// ============================================================================
//
// THE PATTERN:
//    - DOM layer calls on_input(value) on every keystroke
//    - Short queries come back as Now(ShowAll)
//    - Long enough queries come back as Later(ticket); the DOM layer arms a
//      wait_ms() timer that calls fire(ticket) and gets Filter(query) back,
//      unless a newer keystroke made the ticket stale
//    - DOM layer reads each card's title/summary and calls visibility()
//
// MATCHING:
//    Plain case-insensitive substring containment on title OR summary.
//    No tokenizing, no ranking, no network. Missing text is "".
//    Query length is counted in UTF-16 units, like the input's own length.
//
// ============================================================================

use tracing::debug;

use crate::timing::Debouncer;

/// Text read from one rendered card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub summary: String,
}

impl Card {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
        }
    }
}

/// What the DOM layer should do to the card list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Force every card and its container visible.
    ShowAll,
    /// Show only cards matching this lower-cased query.
    Filter(String),
}

/// What the DOM layer should do after a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    /// Apply this right away.
    Now(SearchAction),
    /// Arm a timer for this ticket and call `fire` when it runs out.
    Later(u32),
}

// ── SearchEngine ───────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct SearchEngine {
    min_query_len: usize,
    debounce: Debouncer<String>,
}

impl SearchEngine {
    pub fn new(debounce_ms: u32, min_query_len: usize) -> Self {
        Self {
            min_query_len,
            debounce: Debouncer::new(debounce_ms),
        }
    }

    pub fn wait_ms(&self) -> u32 {
        self.debounce.wait_ms()
    }

    /// Feed the raw input value. Short queries show everything at once and
    /// drop any pending filter; longer ones wait for the debounce.
    pub fn on_input(&mut self, raw: &str) -> SearchStep {
        let query = raw.trim();
        if query.encode_utf16().count() >= self.min_query_len {
            return SearchStep::Later(self.debounce.call(query.to_string()));
        }
        self.debounce.cancel();
        SearchStep::Now(SearchAction::ShowAll)
    }

    /// The timer armed for `ticket` ran out.
    pub fn fire(&mut self, ticket: u32) -> Option<SearchAction> {
        let query = self.debounce.fire(ticket)?;
        debug!(query = %query, "searching cards");
        Some(SearchAction::Filter(query.to_lowercase()))
    }
}

// ── Matching ───────────────────────────────────────────────────────────────

/// True if the card's title or summary contains `query_lower`.
pub fn card_matches(card: &Card, query_lower: &str) -> bool {
    card.title.to_lowercase().contains(query_lower)
        || card.summary.to_lowercase().contains(query_lower)
}

/// Visibility for every card under `action`, in card order.
pub fn visibility(action: &SearchAction, cards: &[Card]) -> Vec<bool> {
    match action {
        SearchAction::ShowAll => vec![true; cards.len()],
        SearchAction::Filter(query) => cards.iter().map(|c| card_matches(c, query)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<Card> {
        vec![
            Card::new("Rust Ownership", "Borrowing explained"),
            Card::new("Cooking", "A recipe for RUSTIC bread"),
            Card::new("Travel", "Notes from the road"),
            Card::new("", ""),
        ]
    }

    fn ticket(step: SearchStep) -> u32 {
        match step {
            SearchStep::Later(ticket) => ticket,
            other => panic!("expected a debounced step, got {other:?}"),
        }
    }

    #[test]
    fn test_filter_after_debounce() {
        let mut engine = SearchEngine::new(300, 3);
        assert_eq!(engine.wait_ms(), 300);
        let t = ticket(engine.on_input("rust"));

        let action = engine.fire(t).unwrap();
        assert_eq!(action, SearchAction::Filter("rust".to_string()));
        assert_eq!(visibility(&action, &cards()), vec![true, true, false, false]);
    }

    #[test]
    fn test_query_is_case_insensitive_and_trimmed() {
        let mut engine = SearchEngine::new(300, 3);
        let t = ticket(engine.on_input("  ROAD "));
        let action = engine.fire(t).unwrap();
        assert_eq!(action, SearchAction::Filter("road".to_string()));
        assert_eq!(visibility(&action, &cards()), vec![false, false, true, false]);
    }

    #[test]
    fn test_short_query_shows_everything_immediately() {
        let mut engine = SearchEngine::new(300, 3);
        let step = engine.on_input("ru");
        assert_eq!(step, SearchStep::Now(SearchAction::ShowAll));
        assert_eq!(visibility(&SearchAction::ShowAll, &cards()), vec![true; 4]);
    }

    #[test]
    fn test_short_query_cancels_pending_filter() {
        let mut engine = SearchEngine::new(300, 3);
        let t = ticket(engine.on_input("rust"));
        assert_eq!(engine.on_input("r"), SearchStep::Now(SearchAction::ShowAll));
        assert_eq!(engine.fire(t), None);
    }

    #[test]
    fn test_typing_burst_filters_once_with_last_value() {
        let mut engine = SearchEngine::new(300, 3);
        let tickets = [
            ticket(engine.on_input("tra")),
            ticket(engine.on_input("trav")),
            ticket(engine.on_input("trave")),
        ];
        let fired: Vec<_> = tickets.iter().filter_map(|&t| engine.fire(t)).collect();
        assert_eq!(fired, vec![SearchAction::Filter("trave".to_string())]);
    }

    #[test]
    fn test_missing_text_never_matches_but_never_errors() {
        let card = Card::default();
        assert!(!card_matches(&card, "abc"));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        let mut engine = SearchEngine::new(300, 3);
        // Two BMP characters: two units, four bytes.
        assert_eq!(engine.on_input("éé"), SearchStep::Now(SearchAction::ShowAll));
        assert!(matches!(engine.on_input("ééé"), SearchStep::Later(_)));
        // An astral character is two units, so this is long enough.
        let t = ticket(engine.on_input("\u{1F600}a"));
        assert_eq!(
            engine.fire(t),
            Some(SearchAction::Filter("\u{1F600}a".to_string()))
        );
    }
}
