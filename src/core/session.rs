//! Provider-side chat session.
//!
//! A session is bound to exactly one model and owns the history that is
//! resent with every request. It is distinct from the displayed transcript:
//! the two are recreated together on model change, but the transcript can be
//! rendered without touching the provider representation.

use crate::api::Content;

#[derive(Clone, Debug)]
pub struct ChatSession {
    model_id: String,
    history: Vec<Content>,
}

impl ChatSession {
    pub fn new(model_id: impl Into<String>) -> Self {
        ChatSession {
            model_id: model_id.into(),
            history: Vec::new(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Build the contents for one request: prior history plus the new user
    /// turn. Does not mutate the session; the exchange is only committed via
    /// [`ChatSession::record_exchange`] once the call succeeds.
    pub fn request_contents(&self, user_text: &str) -> Vec<Content> {
        let mut contents = self.history.clone();
        contents.push(Content::user(user_text));
        contents
    }

    /// Commit a successful exchange to the history.
    pub fn record_exchange(&mut self, user_text: &str, reply: &str) {
        self.history.push(Content::user(user_text));
        self.history.push(Content::model(reply));
    }
}
