//! Slash commands available from the input box.

use crate::core::app::App;

pub enum CommandResult {
    Continue,
    ProcessAsMessage(String),
    OpenModelPicker,
    Quit,
}

pub fn process_input(app: &mut App, input: &str) -> CommandResult {
    let trimmed = input.trim();

    if !trimmed.starts_with('/') {
        return CommandResult::ProcessAsMessage(input.to_string());
    }

    let mut parts = trimmed[1..].splitn(2, ' ');
    let command_name = match parts.next() {
        Some(name) if !name.is_empty() => name,
        _ => return CommandResult::ProcessAsMessage(input.to_string()),
    };
    let args = parts.next().unwrap_or("").trim();

    match command_name {
        "help" => handle_help(app),
        "clear" => handle_clear(app),
        "model" => handle_model(app, args),
        "temp" => handle_temp(app, args),
        "log" => handle_log(app, args),
        "quit" | "exit" => CommandResult::Quit,
        // Not a command, process as regular message
        _ => CommandResult::ProcessAsMessage(input.to_string()),
    }
}

fn handle_help(app: &mut App) -> CommandResult {
    app.add_app_info(
        "Commands:\n\
         /help             Show this help\n\
         /clear            Clear the conversation (history included)\n\
         /model [id]       Pick a model, or switch to the given id\n\
         /temp <0.0-1.0>   Set the temperature\n\
         /log [filename]   Enable logging to file, or toggle pause/resume\n\
         /quit             Exit\n\
         \n\
         Keys: Ctrl+Up/Down adjusts temperature, Ctrl+L clears, Ctrl+C quits.",
    );
    CommandResult::Continue
}

fn handle_clear(app: &mut App) -> CommandResult {
    app.clear_conversation();
    app.add_app_info("Conversation cleared.");
    CommandResult::Continue
}

fn handle_model(app: &mut App, args: &str) -> CommandResult {
    if args.is_empty() {
        return CommandResult::OpenModelPicker;
    }

    let model_id = args.split_whitespace().next().unwrap_or(args);
    if app.ensure_session(model_id) {
        app.add_app_info(format!("Model set: {model_id} (conversation reset)"));
    } else {
        app.add_app_info(format!("Already using model: {model_id}"));
    }
    CommandResult::Continue
}

fn handle_temp(app: &mut App, args: &str) -> CommandResult {
    if args.is_empty() {
        app.add_app_info(format!(
            "Temperature: {:.1}. Usage: /temp <0.0-1.0>",
            app.settings.temperature()
        ));
        return CommandResult::Continue;
    }

    match args.parse::<f32>() {
        Ok(value) => match app.settings.set_temperature(value) {
            Ok(()) => app.add_app_info(format!("Temperature set: {value:.1}")),
            Err(e) => app.add_app_error(e),
        },
        Err(_) => app.add_app_error(format!("Not a number: {args}")),
    }
    CommandResult::Continue
}

fn handle_log(app: &mut App, args: &str) -> CommandResult {
    let result = if args.is_empty() {
        app.logging.toggle_logging()
    } else {
        app.logging.set_log_file(args.to_string())
    };
    match result {
        Ok(message) => app.add_app_info(message),
        Err(e) => app.add_app_error(format!("Log error: {e}")),
    }
    CommandResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::TranscriptRole;
    use crate::utils::test_utils::test_app;

    #[test]
    fn plain_text_passes_through() {
        let mut app = test_app("gemini-2.5-flash");
        let result = process_input(&mut app, "hello there");
        assert!(matches!(result, CommandResult::ProcessAsMessage(text) if text == "hello there"));
    }

    #[test]
    fn unknown_slash_input_is_treated_as_message() {
        let mut app = test_app("gemini-2.5-flash");
        let result = process_input(&mut app, "/shrug");
        assert!(matches!(result, CommandResult::ProcessAsMessage(text) if text == "/shrug"));
    }

    #[test]
    fn clear_resets_transcript() {
        let mut app = test_app("gemini-2.5-flash");
        app.add_user_message("hello".to_string());
        let result = process_input(&mut app, "/clear");
        assert!(matches!(result, CommandResult::Continue));
        // Only the confirmation message remains.
        assert_eq!(app.messages.len(), 1);
        assert_eq!(app.messages[0].role, TranscriptRole::AppInfo);
    }

    #[test]
    fn bare_model_opens_picker_and_id_switches() {
        let mut app = test_app("gemini-2.5-flash");
        assert!(matches!(
            process_input(&mut app, "/model"),
            CommandResult::OpenModelPicker
        ));

        process_input(&mut app, "/model gemini-2.5-pro");
        assert_eq!(app.current_model(), "gemini-2.5-pro");
    }

    #[test]
    fn temp_parses_and_validates() {
        let mut app = test_app("gemini-2.5-flash");
        process_input(&mut app, "/temp 0.2");
        assert_eq!(app.settings.temperature(), 0.2);

        process_input(&mut app, "/temp 7");
        assert_eq!(app.settings.temperature(), 0.2);
        assert!(app
            .messages
            .iter()
            .any(|m| m.role == TranscriptRole::AppError));
    }

    #[test]
    fn quit_requests_exit() {
        let mut app = test_app("gemini-2.5-flash");
        assert!(matches!(process_input(&mut app, "/quit"), CommandResult::Quit));
        assert!(matches!(process_input(&mut app, "/exit"), CommandResult::Quit));
    }
}
