// ============================================================================
// Vote buttons: fetch transport + DOM view for the vote widget
// ============================================================================
//
// The widget in wirip-model decides every state change. This module only
//   - reads the buttons once at start-up,
//   - posts the vote with fetch and decodes the tally,
//   - paints settlements and reverts onto the buttons and counters,
//   - schedules feedback reverts with gloo timers.
//
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, Headers, HtmlButtonElement, Request, RequestInit, Response};
use wirip_model::vote::{
    revert_feedback, submit_vote, Feedback, Revert, Settlement, VoteButton, VoteRole,
    VoteTransport, VoteView, VoteWidget,
};
use wirip_model::{Result, UiError};
use wirip_shared::dom::{
    ATTR_POST_ID, ATTR_VOTE_TYPE, CHECKMARK_HTML, CLASS_ACTIVE, CLASS_VOTE_ERROR,
    CLASS_VOTE_SUCCESS, DOWNVOTE_BUTTON, DOWNVOTE_COUNT_ID, SCORE_COUNT_ID, UPVOTE_BUTTON,
    UPVOTE_COUNT_ID, VOTE_BUTTON,
};
use wirip_shared::{UiConfig, VoteRequest, VoteResult};

use crate::dom;

// ── Transport ──────────────────────────────────────────────────────────────

pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn build(&self, vote: &VoteRequest) -> Result<Request> {
        let body =
            serde_json::to_string(vote).map_err(|err| UiError::Decode(err.to_string()))?;

        let headers = Headers::new().map_err(dom::js_error)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(dom::js_error)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        Request::new_with_str_and_init(&self.endpoint, &init).map_err(dom::js_error)
    }
}

fn network(err: JsValue) -> UiError {
    UiError::Network(dom::js_error_message(err))
}

fn decode(err: JsValue) -> UiError {
    UiError::Decode(dom::js_error_message(err))
}

#[async_trait(?Send)]
impl VoteTransport for FetchTransport {
    async fn send(&self, vote: &VoteRequest) -> Result<VoteResult> {
        let request = self.build(vote)?;
        let response = JsFuture::from(dom::window()?.fetch_with_request(&request))
            .await
            .map_err(network)?;
        let response: Response = response.dyn_into().map_err(network)?;
        // The status is not checked: any body that decodes as a tally counts.
        let json = JsFuture::from(response.json().map_err(decode)?)
            .await
            .map_err(decode)?;
        serde_wasm_bindgen::from_value(json).map_err(|err| UiError::Decode(err.to_string()))
    }
}

// ── View ───────────────────────────────────────────────────────────────────

#[derive(Clone)]
struct DomVoteView {
    document: Document,
    buttons: Rc<Vec<Element>>,
    widget: Rc<RefCell<VoteWidget>>,
}

impl DomVoteView {
    fn button(&self, index: usize) -> Option<&Element> {
        self.buttons.get(index)
    }

    fn set_counter(&self, id: &str, value: i64) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(&value.to_string()));
        }
    }

    fn remove_marker(button: &Element, feedback: Feedback) {
        let class = match feedback {
            Feedback::Success => CLASS_VOTE_SUCCESS,
            Feedback::Failure => CLASS_VOTE_ERROR,
        };
        let _ = button.class_list().remove_1(class);
    }
}

impl VoteView for DomVoteView {
    fn set_disabled(&self, index: usize, disabled: bool) {
        let Some(button) = self.button(index) else {
            return;
        };
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            let _ = button.set_attribute("disabled", "");
        } else {
            let _ = button.remove_attribute("disabled");
        }
    }

    fn button_content(&self, index: usize) -> String {
        self.button(index).map(Element::inner_html).unwrap_or_default()
    }

    fn apply(&self, settlement: &Settlement) {
        if let Some(tally) = settlement.counters {
            self.set_counter(UPVOTE_COUNT_ID, tally.upvotes);
            self.set_counter(DOWNVOTE_COUNT_ID, tally.downvotes);
            self.set_counter(SCORE_COUNT_ID, tally.score);
        }

        if settlement.active.clear_controls {
            for selector in [UPVOTE_BUTTON, DOWNVOTE_BUTTON] {
                if let Some(control) = dom::query(&self.document, selector) {
                    let _ = control.class_list().remove_1(CLASS_ACTIVE);
                }
            }
        }
        for &i in &settlement.active.cleared {
            if let Some(button) = self.button(i) {
                let _ = button.class_list().remove_1(CLASS_ACTIVE);
            }
        }
        if let Some(button) = settlement.active.activated.and_then(|i| self.button(i)) {
            let _ = button.class_list().add_1(CLASS_ACTIVE);
        }

        let Some(button) = self.button(settlement.index) else {
            return;
        };
        if let Some(previous) = settlement.replaced {
            Self::remove_marker(button, previous);
        }
        match settlement.feedback {
            Feedback::Success => {
                button.set_inner_html(CHECKMARK_HTML);
                let _ = button.class_list().add_1(CLASS_VOTE_SUCCESS);
            }
            Feedback::Failure => {
                let _ = button.class_list().add_1(CLASS_VOTE_ERROR);
            }
        }
    }

    fn revert(&self, index: usize, revert: &Revert) {
        let Some(button) = self.button(index) else {
            return;
        };
        if let Some(content) = &revert.content {
            button.set_inner_html(content);
        }
        Self::remove_marker(button, revert.feedback);
    }

    fn schedule_revert(&self, index: usize, token: u32, after_ms: u32) {
        let view = self.clone();
        Timeout::new(after_ms, move || {
            revert_feedback(&view.widget, &view, index, token);
        })
        .forget();
    }
}

// ── Wiring ─────────────────────────────────────────────────────────────────

fn read_button(el: &Element, up: Option<&Element>, down: Option<&Element>) -> VoteButton {
    let role = if up == Some(el) {
        VoteRole::Up
    } else if down == Some(el) {
        VoteRole::Down
    } else {
        VoteRole::Plain
    };
    VoteButton {
        request: VoteRequest::from_attributes(
            el.get_attribute(ATTR_POST_ID).as_deref(),
            el.get_attribute(ATTR_VOTE_TYPE).as_deref(),
        ),
        role,
        active: dom::has_class(el, CLASS_ACTIVE),
    }
}

pub fn init(document: &Document, config: &UiConfig) {
    let buttons = dom::query_all(document, VOTE_BUTTON);
    if buttons.is_empty() {
        return;
    }

    let up = dom::query(document, UPVOTE_BUTTON);
    let down = dom::query(document, DOWNVOTE_BUTTON);
    let models = buttons
        .iter()
        .map(|el| read_button(el, up.as_ref(), down.as_ref()))
        .collect();

    let view = DomVoteView {
        document: document.clone(),
        buttons: Rc::new(buttons),
        widget: Rc::new(RefCell::new(VoteWidget::new(models, config.feedback_ms))),
    };
    let transport = Rc::new(FetchTransport::new(config.vote_endpoint.clone()));

    for (index, button) in view.buttons.iter().enumerate() {
        let view = view.clone();
        let transport = transport.clone();
        dom::listen(button, "click", move |_| {
            let view = view.clone();
            let transport = transport.clone();
            spawn_local(async move {
                submit_vote(&view.widget, index, transport.as_ref(), &view).await;
            });
        });
    }
}
