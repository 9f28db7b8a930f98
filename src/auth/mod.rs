//! Credential resolution.
//!
//! The API key is read once at startup from the environment. A missing key is
//! a fatal condition: the caller prints the error and exits before any
//! terminal UI is set up.

use std::env;
use std::error::Error;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

#[derive(Clone, Debug)]
pub struct Credentials {
    pub api_key: String,
    pub base_url: String,
}

pub fn resolve_credentials() -> Result<Credentials, Box<dyn Error>> {
    let api_key = API_KEY_VARS
        .iter()
        .find_map(|var| env::var(var).ok().filter(|key| !key.trim().is_empty()))
        .ok_or_else(missing_key_message)?;

    let base_url =
        env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    Ok(Credentials { api_key, base_url })
}

fn missing_key_message() -> Box<dyn Error> {
    "❌ GEMINI_API_KEY environment variable not set

Please set your Gemini API key:
export GEMINI_API_KEY=\"your-api-key-here\"

GOOGLE_API_KEY is accepted as an alternative. Optionally, you can also set a
custom base URL:
export GEMINI_BASE_URL=\"https://generativelanguage.googleapis.com/v1beta\""
        .into()
}
