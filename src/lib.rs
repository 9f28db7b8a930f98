//! Gembox is a terminal-first chat client for the Google Gemini API.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns runtime state: the transcript, the provider-side chat
//!   session, model catalog resolution, and conversation submission.
//! - [`ui`] renders the terminal interface and runs the interactive event
//!   loop that drives user input and display updates.
//! - [`commands`] implements the slash commands available from the input box.
//! - [`api`] defines the Gemini wire payloads and the HTTP client behind the
//!   [`api::ChatApi`] trait.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which resolves credentials and the model
//! catalog before dispatching into [`ui::chat_loop`].

pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;
