//! Conversation submission.
//!
//! One user utterance at a time: the user turn lands in the transcript before
//! the network call so it stays visible even when the call fails. Failures
//! are not retried and are surfaced inline as an error turn; transcript and
//! session survive so the user can retry or switch models.

use std::fmt;

use crate::api::{ApiError, Content, GenerationConfig};
use crate::core::app::App;

#[derive(Debug)]
pub enum SubmitError {
    /// No session is bound; the caller is expected to have ensured one.
    NoSession,
    Api(ApiError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NoSession => write!(f, "no active chat session"),
            SubmitError::Api(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// A staged request: the user turn is already in the transcript, nothing has
/// been sent yet. Lets the UI render the user turn before blocking on the
/// network call.
pub struct PendingExchange {
    user_text: String,
    model_id: String,
    contents: Vec<Content>,
    config: GenerationConfig,
}

pub fn stage_user_turn(app: &mut App, user_text: String) -> Result<PendingExchange, SubmitError> {
    app.add_user_message(user_text.clone());

    let session = app.session.as_ref().ok_or(SubmitError::NoSession)?;
    Ok(PendingExchange {
        model_id: session.model_id().to_string(),
        contents: session.request_contents(&user_text),
        config: app.settings.generation_config(),
        user_text,
    })
}

pub async fn complete_exchange(
    app: &mut App,
    pending: PendingExchange,
) -> Result<String, SubmitError> {
    let api = app.api.clone();
    match api
        .generate(&pending.model_id, pending.contents, pending.config)
        .await
    {
        Ok(reply) => {
            if let Some(session) = app.session.as_mut() {
                session.record_exchange(&pending.user_text, &reply);
            }
            app.add_assistant_message(reply.clone());
            Ok(reply)
        }
        Err(e) => {
            app.add_app_error(format!(
                "An error occurred: {e}\n\nTip: try switching to another model with /model."
            ));
            Err(SubmitError::Api(e))
        }
    }
}

pub async fn submit_message(app: &mut App, user_text: String) -> Result<String, SubmitError> {
    let pending = stage_user_turn(app, user_text)?;
    complete_exchange(app, pending).await
}
