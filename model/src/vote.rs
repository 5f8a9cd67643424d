// ============================================================================
// VOTE ENGINE: Per-Button Vote State Machine
// ============================================================================
//
// Every vote button runs its own instance of:
//
//     idle ──click──> submitting ──response──> success ──┐
//                          │                              ├──> idle
//                          └──error/bad json──> failure ──┘
//
//   - begin():  idle -> submitting. A button already submitting refuses,
//               which is the only de-duplication there is.
//   - settle(): applies the outcome. Success overwrites the three counters
//               and moves the "active" marker; failure leaves counters alone.
//               Either way a feedback marker is shown and a revert token is
//               handed out.
//   - finish(): submitting -> idle. submit_vote() runs this from a drop
//               guard, so the button is re-enabled on every path.
//   - expire_feedback(token): removes the marker, unless a newer settle
//               has already replaced it.
//
// Buttons never coordinate with each other beyond the active marker.
// There is no retry, no timeout, and no cancellation.
//
// ============================================================================

use std::cell::RefCell;

use async_trait::async_trait;
use tracing::{debug, warn};
use wirip_shared::{VoteRequest, VoteResult};

use crate::error::Result;

// ── Types ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VotePhase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Checkmark content + success background.
    Success,
    /// Shake + danger background. Content untouched.
    Failure,
}

/// Which of the page's up/down controls a button is, if either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteRole {
    Up,
    Down,
    Plain,
}

/// A vote button as read from the page at start-up.
#[derive(Debug, Clone)]
pub struct VoteButton {
    pub request: VoteRequest,
    pub role: VoteRole,
    pub active: bool,
}

#[derive(Debug, Clone)]
struct ShownFeedback {
    kind: Feedback,
    token: u32,
    /// Content to restore when a success marker expires.
    saved_content: Option<String>,
}

#[derive(Debug, Clone)]
struct ButtonState {
    request: VoteRequest,
    role: VoteRole,
    phase: VotePhase,
    active: bool,
    feedback: Option<ShownFeedback>,
}

/// Changes to the "active" class after a successful vote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveUpdate {
    /// The page's first up and first down controls lose the active class,
    /// whether or not they are vote buttons themselves.
    pub clear_controls: bool,
    /// Tracked buttons among those controls.
    pub cleared: Vec<usize>,
    /// Button whose active class is added afterwards.
    pub activated: Option<usize>,
}

/// Everything the view must apply once a request settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub index: usize,
    /// New counter values on success, `None` on failure.
    pub counters: Option<VoteResult>,
    pub active: ActiveUpdate,
    pub feedback: Feedback,
    /// A marker still showing from an earlier settle on this button.
    pub replaced: Option<Feedback>,
    pub token: u32,
}

/// What the view must undo when a feedback marker expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revert {
    pub feedback: Feedback,
    /// Original content to put back. Failure markers only carry one when
    /// they replaced a success marker that was still showing.
    pub content: Option<String>,
}

// ── VoteWidget ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct VoteWidget {
    buttons: Vec<ButtonState>,
    feedback_ms: u32,
    next_token: u32,
}

impl VoteWidget {
    pub fn new(buttons: Vec<VoteButton>, feedback_ms: u32) -> Self {
        Self {
            buttons: buttons
                .into_iter()
                .map(|b| ButtonState {
                    request: b.request,
                    role: b.role,
                    phase: VotePhase::Idle,
                    active: b.active,
                    feedback: None,
                })
                .collect(),
            feedback_ms,
            next_token: 1,
        }
    }

    // ── Queries ────────────────────────────────────────────────────────

    pub fn feedback_ms(&self) -> u32 {
        self.feedback_ms
    }

    #[cfg(test)]
    pub fn phase(&self, index: usize) -> Option<VotePhase> {
        self.buttons.get(index).map(|b| b.phase)
    }

    #[cfg(test)]
    pub fn is_disabled(&self, index: usize) -> bool {
        self.phase(index) == Some(VotePhase::Submitting)
    }

    #[cfg(test)]
    pub fn is_active(&self, index: usize) -> bool {
        self.buttons.get(index).map_or(false, |b| b.active)
    }

    #[cfg(test)]
    pub fn feedback(&self, index: usize) -> Option<Feedback> {
        self.buttons
            .get(index)
            .and_then(|b| b.feedback.as_ref())
            .map(|f| f.kind)
    }

    // ── Transitions ────────────────────────────────────────────────────

    /// idle -> submitting. Returns the request to send, or `None` if the
    /// button is unknown or already has a request in flight.
    pub fn begin(&mut self, index: usize) -> Option<VoteRequest> {
        let button = self.buttons.get_mut(index)?;
        if button.phase != VotePhase::Idle {
            return None;
        }
        button.phase = VotePhase::Submitting;
        let request = button.request;
        Some(request)
    }

    /// Apply a settled request. `content` is the button's current content,
    /// kept so a success marker can be undone.
    pub fn settle(
        &mut self,
        index: usize,
        outcome: Result<VoteResult>,
        content: String,
    ) -> Option<Settlement> {
        if index >= self.buttons.len() {
            return None;
        }

        let (counters, active, kind) = match outcome {
            Ok(result) => (Some(result), self.move_active(index), Feedback::Success),
            Err(_) => (None, ActiveUpdate::default(), Feedback::Failure),
        };

        let token = self.next_token;
        self.next_token = self.next_token.wrapping_add(1);

        let button = &mut self.buttons[index];
        let previous = button.feedback.take();
        let replaced = previous.as_ref().map(|f| f.kind);
        // A success marker still showing means `content` is the checkmark;
        // whatever replaces it must still restore the content saved before.
        let carried = previous.and_then(|f| f.saved_content);
        let saved_content = match kind {
            Feedback::Success => carried.or(Some(content)),
            Feedback::Failure => carried,
        };
        button.feedback = Some(ShownFeedback {
            kind,
            token,
            saved_content,
        });

        Some(Settlement {
            index,
            counters,
            active,
            feedback: kind,
            replaced,
            token,
        })
    }

    /// submitting -> idle. Safe to call on an idle button.
    pub fn finish(&mut self, index: usize) {
        if let Some(button) = self.buttons.get_mut(index) {
            if button.phase != VotePhase::Idle {
                button.phase = VotePhase::Idle;
            }
        }
    }

    /// Remove the feedback marker identified by `token`. Returns `None` if
    /// that marker has already been replaced or removed.
    pub fn expire_feedback(&mut self, index: usize, token: u32) -> Option<Revert> {
        let button = self.buttons.get_mut(index)?;
        if button.feedback.as_ref()?.token != token {
            return None;
        }
        let shown = button.feedback.take()?;
        Some(Revert {
            feedback: shown.kind,
            content: shown.saved_content,
        })
    }

    /// Clear the active class on the first up and first down button, then
    /// add it to the clicked button if it does not have it.
    ///
    /// The add is unconditional in practice: the clicked button is normally
    /// one of the two just cleared, so a second vote of the same kind keeps
    /// the button active even though the endpoint treats it as a retraction.
    fn move_active(&mut self, index: usize) -> ActiveUpdate {
        let mut update = ActiveUpdate {
            clear_controls: true,
            ..ActiveUpdate::default()
        };

        for role in [VoteRole::Up, VoteRole::Down] {
            if let Some(i) = self.buttons.iter().position(|b| b.role == role) {
                self.buttons[i].active = false;
                update.cleared.push(i);
            }
        }

        let clicked = &mut self.buttons[index];
        if !clicked.active {
            clicked.active = true;
            update.activated = Some(index);
        }

        update
    }
}

// ── Collaborators ──────────────────────────────────────────────────────────

/// Sends a vote to the endpoint and decodes the tally.
#[async_trait(?Send)]
pub trait VoteTransport {
    async fn send(&self, request: &VoteRequest) -> Result<VoteResult>;
}

/// Applies widget decisions to the rendered buttons and counters.
pub trait VoteView {
    fn set_disabled(&self, index: usize, disabled: bool);
    fn button_content(&self, index: usize) -> String;
    fn apply(&self, settlement: &Settlement);
    fn revert(&self, index: usize, revert: &Revert);
    /// Arrange for `expire_feedback(index, token)` to run after `after_ms`.
    fn schedule_revert(&self, index: usize, token: u32, after_ms: u32);
}

/// Re-enables the button when dropped, whether the request settled or the
/// future was abandoned.
struct Reenable<'a, V: VoteView + ?Sized> {
    widget: &'a RefCell<VoteWidget>,
    view: &'a V,
    index: usize,
}

impl<V: VoteView + ?Sized> Drop for Reenable<'_, V> {
    fn drop(&mut self) {
        if let Ok(mut widget) = self.widget.try_borrow_mut() {
            widget.finish(self.index);
        }
        self.view.set_disabled(self.index, false);
    }
}

/// Run one click through the state machine: disable, send, settle, show
/// feedback, re-enable. Returns `None` if the click was refused.
pub async fn submit_vote<T, V>(
    widget: &RefCell<VoteWidget>,
    index: usize,
    transport: &T,
    view: &V,
) -> Option<Settlement>
where
    T: VoteTransport + ?Sized,
    V: VoteView + ?Sized,
{
    let request = widget.borrow_mut().begin(index)?;
    view.set_disabled(index, true);
    let _reenable = Reenable {
        widget,
        view,
        index,
    };

    let outcome = transport.send(&request).await;
    match &outcome {
        Ok(result) => debug!(
            post_id = ?request.post_id,
            is_upvote = request.is_upvote,
            upvotes = result.upvotes,
            downvotes = result.downvotes,
            score = result.score,
            "vote recorded"
        ),
        Err(err) => warn!(
            post_id = ?request.post_id,
            is_upvote = request.is_upvote,
            error = %err,
            "vote failed"
        ),
    }

    let content = view.button_content(index);
    let (settlement, feedback_ms) = {
        let mut widget = widget.borrow_mut();
        (widget.settle(index, outcome, content)?, widget.feedback_ms())
    };
    view.apply(&settlement);
    view.schedule_revert(index, settlement.token, feedback_ms);
    Some(settlement)
}

/// Timer callback for a scheduled revert.
pub fn revert_feedback<V: VoteView + ?Sized>(
    widget: &RefCell<VoteWidget>,
    view: &V,
    index: usize,
    token: u32,
) {
    let revert = widget.borrow_mut().expire_feedback(index, token);
    if let Some(revert) = revert {
        view.revert(index, &revert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    const TALLY: VoteResult = VoteResult {
        upvotes: 5,
        downvotes: 2,
        score: 3,
    };

    fn button(post_id: i64, is_upvote: bool, role: VoteRole) -> VoteButton {
        VoteButton {
            request: VoteRequest {
                post_id: Some(post_id),
                is_upvote,
            },
            role,
            active: false,
        }
    }

    fn up_down() -> VoteWidget {
        VoteWidget::new(
            vec![
                button(7, true, VoteRole::Up),
                button(7, false, VoteRole::Down),
            ],
            1000,
        )
    }

    /// Answers every request with a fixed outcome and records what the
    /// widget looked like while the request was in flight.
    struct FakeTransport<'a> {
        widget: &'a RefCell<VoteWidget>,
        outcome: Result<VoteResult>,
        disabled_in_flight: Cell<Option<bool>>,
        sent: RefCell<Vec<VoteRequest>>,
    }

    impl<'a> FakeTransport<'a> {
        fn new(widget: &'a RefCell<VoteWidget>, outcome: Result<VoteResult>) -> Self {
            Self {
                widget,
                outcome,
                disabled_in_flight: Cell::new(None),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl<'a> VoteTransport for FakeTransport<'a> {
        async fn send(&self, request: &VoteRequest) -> Result<VoteResult> {
            self.sent.borrow_mut().push(*request);
            self.disabled_in_flight
                .set(Some(self.widget.borrow().is_disabled(0)));
            self.outcome.clone()
        }
    }

    #[derive(Default)]
    struct RecordingView {
        disabled: RefCell<Vec<(usize, bool)>>,
        applied: RefCell<Vec<Settlement>>,
        reverted: RefCell<Vec<(usize, Revert)>>,
        scheduled: RefCell<Vec<(usize, u32, u32)>>,
    }

    impl VoteView for RecordingView {
        fn set_disabled(&self, index: usize, disabled: bool) {
            self.disabled.borrow_mut().push((index, disabled));
        }

        fn button_content(&self, _index: usize) -> String {
            "<i class=\"fas fa-arrow-up\"></i>".to_string()
        }

        fn apply(&self, settlement: &Settlement) {
            self.applied.borrow_mut().push(settlement.clone());
        }

        fn revert(&self, index: usize, revert: &Revert) {
            self.reverted.borrow_mut().push((index, revert.clone()));
        }

        fn schedule_revert(&self, index: usize, token: u32, after_ms: u32) {
            self.scheduled.borrow_mut().push((index, token, after_ms));
        }
    }

    #[test]
    fn test_success_disables_during_flight_and_reenables_once() {
        let widget = RefCell::new(up_down());
        let transport = FakeTransport::new(&widget, Ok(TALLY));
        let view = RecordingView::default();

        let settlement = block_on(submit_vote(&widget, 0, &transport, &view)).unwrap();

        assert_eq!(transport.disabled_in_flight.get(), Some(true));
        assert_eq!(*view.disabled.borrow(), vec![(0, true), (0, false)]);
        assert_eq!(widget.borrow().phase(0), Some(VotePhase::Idle));
        assert_eq!(settlement.feedback, Feedback::Success);
    }

    #[test]
    fn test_failure_also_reenables_once() {
        let widget = RefCell::new(up_down());
        let transport =
            FakeTransport::new(&widget, Err(UiError::Network("offline".to_string())));
        let view = RecordingView::default();

        let settlement = block_on(submit_vote(&widget, 0, &transport, &view)).unwrap();

        assert_eq!(transport.disabled_in_flight.get(), Some(true));
        assert_eq!(*view.disabled.borrow(), vec![(0, true), (0, false)]);
        assert!(!widget.borrow().is_disabled(0));
        assert_eq!(settlement.feedback, Feedback::Failure);
        assert_eq!(settlement.counters, None);
    }

    #[test]
    fn test_success_overwrites_counters() {
        let widget = RefCell::new(up_down());
        let transport = FakeTransport::new(&widget, Ok(TALLY));
        let view = RecordingView::default();

        block_on(submit_vote(&widget, 0, &transport, &view));

        let applied = view.applied.borrow();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].counters, Some(TALLY));
        assert_eq!(
            *transport.sent.borrow(),
            vec![VoteRequest {
                post_id: Some(7),
                is_upvote: true
            }]
        );
    }

    #[test]
    fn test_failure_leaves_counters_untouched() {
        let widget = RefCell::new(up_down());
        let view = RecordingView::default();

        let ok = FakeTransport::new(&widget, Ok(TALLY));
        block_on(submit_vote(&widget, 0, &ok, &view));

        let bad = FakeTransport::new(&widget, Err(UiError::Decode("not json".to_string())));
        block_on(submit_vote(&widget, 1, &bad, &view));

        let applied = view.applied.borrow();
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].counters, Some(TALLY));
        // The failed settlement carries no tally, so the view writes none.
        assert_eq!(applied[1].counters, None);
        assert_eq!(applied[1].active, ActiveUpdate::default());
        assert!(widget.borrow().is_active(0));
        assert!(!widget.borrow().is_active(1));
    }

    #[test]
    fn test_in_flight_button_refuses_second_click() {
        let mut widget = up_down();
        assert!(widget.begin(0).is_some());
        assert!(widget.begin(0).is_none());
        // The other button is independent.
        assert!(widget.begin(1).is_some());
        widget.finish(0);
        assert!(widget.begin(0).is_some());
    }

    #[test]
    fn test_refused_click_touches_nothing() {
        let widget = RefCell::new(up_down());
        widget.borrow_mut().begin(0);
        let transport = FakeTransport::new(&widget, Ok(TALLY));
        let view = RecordingView::default();

        assert!(block_on(submit_vote(&widget, 0, &transport, &view)).is_none());
        assert!(transport.sent.borrow().is_empty());
        assert!(view.disabled.borrow().is_empty());
        assert!(widget.borrow().is_disabled(0));
    }

    #[test]
    fn test_active_moves_to_clicked_button() {
        let mut widget = up_down();
        widget.begin(0);
        widget.settle(0, Ok(TALLY), String::new());
        assert!(widget.is_active(0));

        widget.begin(1);
        let s = widget.settle(1, Ok(TALLY), String::new()).unwrap();
        assert_eq!(s.active.cleared, vec![0, 1]);
        assert_eq!(s.active.activated, Some(1));
        assert!(!widget.is_active(0));
        assert!(widget.is_active(1));
    }

    // The endpoint treats a repeated vote of the same kind as a retraction,
    // but the active-class rule clears both buttons before checking the
    // clicked one, so it always re-adds the class. This pins the current
    // behaviour until product decides whether a retraction should clear it.
    #[test]
    fn test_repeat_vote_keeps_button_active() {
        let mut widget = up_down();
        widget.begin(0);
        widget.settle(0, Ok(TALLY), String::new());

        let retracted = VoteResult {
            upvotes: 4,
            downvotes: 2,
            score: 2,
        };
        widget.begin(0);
        let s = widget.settle(0, Ok(retracted), String::new()).unwrap();

        assert_eq!(s.active.activated, Some(0));
        assert!(widget.is_active(0));
        assert_eq!(s.counters, Some(retracted));
    }

    #[test]
    fn test_success_clears_untracked_controls() {
        // The page's up/down controls are not vote buttons here, so no
        // tracked index can be cleared; the view still has to clear them.
        let mut widget = VoteWidget::new(vec![button(3, true, VoteRole::Plain)], 1000);
        widget.begin(0);
        let s = widget.settle(0, Ok(TALLY), String::new()).unwrap();

        assert!(s.active.clear_controls);
        assert!(s.active.cleared.is_empty());
        assert_eq!(s.active.activated, Some(0));
    }

    #[test]
    fn test_failure_clears_no_controls() {
        let mut widget = up_down();
        widget.begin(0);
        let s = widget
            .settle(0, Err(UiError::Network("offline".to_string())), String::new())
            .unwrap();
        assert!(!s.active.clear_controls);
    }

    #[test]
    fn test_plain_button_is_never_cleared() {
        let mut widget = VoteWidget::new(
            vec![
                button(1, true, VoteRole::Up),
                button(1, false, VoteRole::Down),
                button(2, true, VoteRole::Plain),
            ],
            1000,
        );
        widget.begin(2);
        widget.settle(2, Ok(TALLY), String::new());
        widget.begin(0);
        let s = widget.settle(0, Ok(TALLY), String::new()).unwrap();
        assert_eq!(s.active.cleared, vec![0, 1]);
        assert!(widget.is_active(2));
    }

    #[test]
    fn test_success_marker_reverts_to_original_content() {
        let widget = RefCell::new(up_down());
        let transport = FakeTransport::new(&widget, Ok(TALLY));
        let view = RecordingView::default();

        let s = block_on(submit_vote(&widget, 0, &transport, &view)).unwrap();
        assert_eq!(*view.scheduled.borrow(), vec![(0, s.token, 1000)]);
        assert_eq!(widget.borrow().feedback(0), Some(Feedback::Success));

        revert_feedback(&widget, &view, 0, s.token);
        let reverted = view.reverted.borrow();
        assert_eq!(reverted.len(), 1);
        assert_eq!(reverted[0].1.feedback, Feedback::Success);
        assert_eq!(
            reverted[0].1.content.as_deref(),
            Some("<i class=\"fas fa-arrow-up\"></i>")
        );
        assert_eq!(widget.borrow().feedback(0), None);
    }

    #[test]
    fn test_failure_marker_reverts_without_content() {
        let mut widget = up_down();
        widget.begin(0);
        let s = widget
            .settle(0, Err(UiError::Network("x".to_string())), "orig".to_string())
            .unwrap();
        let revert = widget.expire_feedback(0, s.token).unwrap();
        assert_eq!(revert.feedback, Feedback::Failure);
        assert_eq!(revert.content, None);
    }

    #[test]
    fn test_stale_revert_is_ignored() {
        let mut widget = up_down();
        widget.begin(0);
        let first = widget.settle(0, Ok(TALLY), "orig".to_string()).unwrap();
        widget.finish(0);
        widget.begin(0);
        let second = widget
            .settle(0, Ok(TALLY), "<i class=\"fas fa-check\"></i>".to_string())
            .unwrap();

        assert_eq!(second.replaced, Some(Feedback::Success));
        assert_eq!(widget.expire_feedback(0, first.token), None);

        let revert = widget.expire_feedback(0, second.token).unwrap();
        assert_eq!(revert.content.as_deref(), Some("orig"));
    }

    #[test]
    fn test_failure_over_success_marker_restores_content() {
        let mut widget = up_down();
        widget.begin(0);
        widget.settle(0, Ok(TALLY), "orig".to_string()).unwrap();
        widget.finish(0);
        widget.begin(0);
        let failed = widget
            .settle(
                0,
                Err(UiError::Network("offline".to_string())),
                "<i class=\"fas fa-check\"></i>".to_string(),
            )
            .unwrap();

        assert_eq!(failed.replaced, Some(Feedback::Success));
        let revert = widget.expire_feedback(0, failed.token).unwrap();
        assert_eq!(revert.feedback, Feedback::Failure);
        assert_eq!(revert.content.as_deref(), Some("orig"));
    }

    #[test]
    fn test_dropped_submission_still_reenables() {
        use std::future::Future;
        use std::pin::pin;
        use std::task::{Context, Poll};

        struct Hang;

        #[async_trait(?Send)]
        impl VoteTransport for Hang {
            async fn send(&self, _request: &VoteRequest) -> Result<VoteResult> {
                futures::future::pending().await
            }
        }

        let widget = RefCell::new(up_down());
        let view = RecordingView::default();
        {
            let mut fut = pin!(submit_vote(&widget, 0, &Hang, &view));
            let waker = futures::task::noop_waker();
            let mut cx = Context::from_waker(&waker);
            assert!(matches!(fut.as_mut().poll(&mut cx), Poll::Pending));
            assert!(widget.borrow().is_disabled(0));
        }
        assert!(!widget.borrow().is_disabled(0));
        assert_eq!(*view.disabled.borrow(), vec![(0, true), (0, false)]);
    }
}
