//! Command-line interface parsing and startup.

pub mod model_list;

use std::error::Error;
use std::sync::Arc;

use clap::Parser;

use crate::api::{ChatApi, GeminiClient};
use crate::auth::resolve_credentials;
use crate::cli::model_list::list_models;
use crate::core::app::App;
use crate::core::catalog::{resolve_models, PREFERRED_MODELS};
use crate::core::config::{GenerationSettings, DEFAULT_TEMPERATURE};
use crate::ui::chat_loop::run_chat;
use crate::utils::logging::LoggingState;

#[derive(Parser)]
#[command(name = "gembox")]
#[command(about = "A terminal-based chat interface for the Google Gemini API")]
#[command(
    long_about = "Gembox is a full-screen terminal chat interface that connects to the Google \
Gemini API. Replies render as one completed block, and the conversation keeps \
its context until you clear it or switch models.\n\n\
Environment Variables:\n\
  GEMINI_API_KEY    Your Gemini API key (required; GOOGLE_API_KEY also works)\n\
  GEMINI_BASE_URL   Custom API base URL (optional)\n\n\
Controls:\n\
  Type              Enter your message in the input field\n\
  Enter             Send the message\n\
  Up/Down/Mouse     Scroll through chat history\n\
  Ctrl+Up/Down      Adjust the temperature\n\
  Ctrl+L            Clear the conversation\n\
  Ctrl+C            Quit the application\n\n\
Commands:\n\
  /help             Show available commands\n\
  /model [id]       Pick a model, or switch to the given id\n\
  /temp <0.0-1.0>   Set the temperature\n\
  /clear            Clear the conversation\n\
  /log [filename]   Enable logging to specified file"
)]
pub struct Args {
    /// Model to use for chat, or list available models if no model specified
    #[arg(
        short = 'm',
        long,
        value_name = "MODEL",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub model: Option<String>,

    /// Enable logging to specified file
    #[arg(short = 'l', long)]
    pub log: Option<String>,

    /// Initial temperature (0.0-1.0)
    #[arg(short = 't', long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_debug_logging();

    // Missing credentials are fatal before any UI is set up.
    let credentials = match resolve_credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if args.model.as_deref() == Some("") {
        // -m was provided without a value, list available models
        return list_models(credentials).await;
    }

    let api: Arc<dyn ChatApi> = Arc::new(GeminiClient::new(credentials));
    let models = resolve_models(api.as_ref()).await;

    // resolve_models never returns an empty list, but stay total anyway.
    let model = match args.model {
        Some(model) => model,
        None => models
            .first()
            .cloned()
            .unwrap_or_else(|| PREFERRED_MODELS[0].to_string()),
    };

    let settings = GenerationSettings::new(args.temperature);
    let logging = LoggingState::new(args.log)?;
    let app = App::new(api, models, &model, settings, logging);

    run_chat(app).await
}

/// Debug diagnostics are opt-in via RUST_LOG and go to a file so the
/// alternate screen stays clean. The default filter quiets benign HTTP
/// client noise.
fn init_debug_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Ok(file) = std::fs::File::create("gembox-debug.log") else {
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gembox=debug,hyper=warn,reqwest=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}
