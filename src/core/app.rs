//! Runtime state for the interactive chat.

use std::collections::VecDeque;
use std::sync::Arc;

use ratatui::text::Line;

use crate::api::ChatApi;
use crate::core::config::GenerationSettings;
use crate::core::message::Message;
use crate::core::session::ChatSession;
use crate::ui::picker::PickerState;
use crate::utils::logging::LoggingState;
use crate::utils::scroll::ScrollCalculator;

pub struct App {
    /// Displayed transcript, independent of the session's provider history.
    pub messages: VecDeque<Message>,
    pub session: Option<ChatSession>,
    pub settings: GenerationSettings,
    pub api: Arc<dyn ChatApi>,
    /// Ordered catalog backing the model picker.
    pub models: Vec<String>,
    pub input: String,
    pub input_mode: bool,
    pub scroll_offset: u16,
    pub auto_scroll: bool,
    /// True while a request is in flight; input is blocked until it settles.
    pub is_waiting: bool,
    pub logging: LoggingState,
    pub picker: Option<PickerState>,
    pub exit_requested: bool,
}

impl App {
    pub fn new(
        api: Arc<dyn ChatApi>,
        models: Vec<String>,
        model_id: &str,
        settings: GenerationSettings,
        logging: LoggingState,
    ) -> Self {
        let mut app = App {
            messages: VecDeque::new(),
            session: None,
            settings,
            api,
            models,
            input: String::new(),
            input_mode: true,
            scroll_offset: 0,
            auto_scroll: true,
            is_waiting: false,
            logging,
            picker: None,
            exit_requested: false,
        };
        app.ensure_session(model_id);
        app
    }

    pub fn current_model(&self) -> &str {
        self.session
            .as_ref()
            .map(|session| session.model_id())
            .unwrap_or("")
    }

    /// Make sure a session exists for `model_id`. A no-op when the bound
    /// model is unchanged; otherwise the session is recreated with empty
    /// history and the transcript is reset. Returns true when recreated.
    pub fn ensure_session(&mut self, model_id: &str) -> bool {
        let unchanged = self
            .session
            .as_ref()
            .is_some_and(|session| session.model_id() == model_id);
        if unchanged {
            return false;
        }

        self.session = Some(ChatSession::new(model_id));
        self.messages.clear();
        self.scroll_offset = 0;
        self.auto_scroll = true;
        true
    }

    /// Empty the transcript and rebind a fresh session for the current model.
    pub fn clear_conversation(&mut self) {
        if let Some(session) = &self.session {
            let model_id = session.model_id().to_string();
            self.session = Some(ChatSession::new(model_id));
        }
        self.messages.clear();
        self.scroll_offset = 0;
        self.auto_scroll = true;
    }

    pub fn add_user_message(&mut self, content: String) {
        if let Err(e) = self.logging.log_message(&format!("You: {content}")) {
            tracing::debug!(error = %e, "failed to log user message");
        }
        self.messages.push_back(Message::user(content));
    }

    pub fn add_assistant_message(&mut self, content: String) {
        if let Err(e) = self.logging.log_message(&content) {
            tracing::debug!(error = %e, "failed to log assistant message");
        }
        self.messages.push_back(Message::assistant(content));
    }

    pub fn add_app_info(&mut self, content: impl Into<String>) {
        self.messages.push_back(Message::app_info(content));
    }

    pub fn add_app_error(&mut self, content: impl Into<String>) {
        self.messages.push_back(Message::app_error(content));
    }

    pub fn open_model_picker(&mut self) {
        let current = self.current_model().to_string();
        self.picker = Some(PickerState::for_models(&self.models, &current));
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
    }

    pub fn build_display_lines(&self) -> Vec<Line<'static>> {
        ScrollCalculator::build_display_lines(&self.messages)
    }

    pub fn calculate_wrapped_line_count(&self, terminal_width: u16) -> u16 {
        let lines = self.build_display_lines();
        ScrollCalculator::calculate_wrapped_line_count(&lines, terminal_width)
    }

    pub fn calculate_max_scroll_offset(&self, available_height: u16, terminal_width: u16) -> u16 {
        ScrollCalculator::calculate_scroll_to_bottom(
            &self.messages,
            terminal_width,
            available_height,
        )
    }

    /// Keep the view pinned to the bottom while auto-scroll is on.
    pub fn update_scroll_position(&mut self, available_height: u16, terminal_width: u16) {
        if self.auto_scroll {
            self.scroll_offset = self.calculate_max_scroll_offset(available_height, terminal_width);
        }
    }

    pub fn get_logging_status(&self) -> String {
        self.logging.get_status_string()
    }
}
