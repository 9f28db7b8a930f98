//! Shared test doubles.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{ApiError, ChatApi, Content, GenerationConfig, ModelInfo};
use crate::core::app::App;
use crate::core::config::GenerationSettings;
use crate::utils::logging::LoggingState;

type RequestLog = Arc<Mutex<Vec<Vec<Content>>>>;

/// Canned [`ChatApi`] implementation. Records every generate request so tests
/// can assert on the exact contents sent.
pub struct StubApi {
    models: Result<Vec<ModelInfo>, String>,
    reply: Result<String, String>,
    requests: RequestLog,
}

impl StubApi {
    pub fn replying(reply: &str) -> Self {
        StubApi {
            models: Ok(Vec::new()),
            reply: Ok(reply.to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        StubApi {
            models: Err(message.to_string()),
            reply: Err(message.to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_models(models: Vec<ModelInfo>) -> Self {
        StubApi {
            models: Ok(models),
            reply: Ok(String::new()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests_handle(&self) -> RequestLog {
        self.requests.clone()
    }

    fn error(message: &str) -> ApiError {
        ApiError::Status {
            status: 500,
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl ChatApi for StubApi {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ApiError> {
        match &self.models {
            Ok(models) => Ok(models.clone()),
            Err(message) => Err(Self::error(message)),
        }
    }

    async fn generate(
        &self,
        _model_id: &str,
        contents: Vec<Content>,
        _config: GenerationConfig,
    ) -> Result<String, ApiError> {
        self.requests.lock().unwrap().push(contents);
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(Self::error(message)),
        }
    }
}

pub fn test_app_with_api(model_id: &str, api: StubApi) -> App {
    App::new(
        Arc::new(api),
        vec![model_id.to_string()],
        model_id,
        GenerationSettings::default(),
        LoggingState::new(None).unwrap(),
    )
}

pub fn test_app(model_id: &str) -> App {
    test_app_with_api(model_id, StubApi::replying("ok"))
}
