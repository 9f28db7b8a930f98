//! Main chat event loop.
//!
//! One submission is handled to completion before the next interaction is
//! processed: the loop stages the user turn, redraws once so it is visible,
//! then awaits the reply inline. There is no background work and no
//! cancellation; the input box is blocked while a request is in flight.

use std::error::Error;
use std::io;
use std::time::Duration;

use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::Terminal;

use crate::commands::{process_input, CommandResult};
use crate::core::app::App;
use crate::core::config::TEMPERATURE_STEP;
use crate::core::conversation::{complete_exchange, stage_user_turn};
use crate::ui::renderer::ui;

pub async fn run_chat(mut app: App) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if app.exit_requested {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.picker.is_some() {
                    handle_picker_key(app, key);
                } else {
                    handle_key(terminal, app, key).await?;
                }
            }
            Event::Mouse(mouse) => handle_mouse(terminal, app, mouse),
            _ => {}
        }
    }
}

/// Transcript viewport height: everything but the input box and the title.
fn available_height<B: Backend>(terminal: &Terminal<B>) -> u16 {
    let height = terminal.size().map(|size| size.height).unwrap_or_default();
    height.saturating_sub(3).saturating_sub(1)
}

fn terminal_width<B: Backend>(terminal: &Terminal<B>) -> u16 {
    terminal.size().map(|size| size.width).unwrap_or_default()
}

async fn handle_key<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    key: KeyEvent,
) -> Result<(), Box<dyn Error>> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.exit_requested = true;
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_conversation();
            app.add_app_info("Conversation cleared.");
        }
        KeyCode::Up if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.settings.adjust_temperature(TEMPERATURE_STEP);
        }
        KeyCode::Down if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.settings.adjust_temperature(-TEMPERATURE_STEP);
        }
        KeyCode::Enter => {
            let input_text = app.input.clone();
            if input_text.trim().is_empty() {
                return Ok(());
            }
            app.input.clear();

            match process_input(app, &input_text) {
                CommandResult::Continue => {}
                CommandResult::Quit => app.exit_requested = true,
                CommandResult::OpenModelPicker => app.open_model_picker(),
                CommandResult::ProcessAsMessage(text) => {
                    send_message(terminal, app, text).await?;
                }
            }
            app.update_scroll_position(available_height(terminal), terminal_width(terminal));
        }
        KeyCode::Char(c) => {
            app.input.push(c);
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Up => {
            app.scroll_offset = app.scroll_offset.saturating_sub(1);
            app.auto_scroll = false;
        }
        KeyCode::Down => {
            let max_scroll =
                app.calculate_max_scroll_offset(available_height(terminal), terminal_width(terminal));
            app.scroll_offset = app.scroll_offset.saturating_add(1).min(max_scroll);
            // Re-arm auto-scroll once the view is back at the bottom.
            if app.scroll_offset >= max_scroll {
                app.auto_scroll = true;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Stage the user turn, redraw so it is visible, then block on the reply.
async fn send_message<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    text: String,
) -> Result<(), Box<dyn Error>> {
    let pending = match stage_user_turn(app, text) {
        Ok(pending) => pending,
        Err(e) => {
            app.add_app_error(format!("An error occurred: {e}"));
            return Ok(());
        }
    };

    app.is_waiting = true;
    app.update_scroll_position(available_height(terminal), terminal_width(terminal));
    terminal.draw(|f| ui(f, app))?;

    // Errors surface as transcript turns inside complete_exchange.
    let _ = complete_exchange(app, pending).await;

    app.is_waiting = false;
    app.update_scroll_position(available_height(terminal), terminal_width(terminal));
    Ok(())
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    let Some(picker) = app.picker.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Up => picker.move_up(),
        KeyCode::Down => picker.move_down(),
        KeyCode::Enter => {
            if let Some(model_id) = picker.selected_id().map(str::to_string) {
                app.close_picker();
                if app.ensure_session(&model_id) {
                    app.add_app_info(format!("Model set: {model_id} (conversation reset)"));
                }
            } else {
                app.close_picker();
            }
        }
        KeyCode::Esc => app.close_picker(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.exit_requested = true;
        }
        _ => {}
    }
}

fn handle_mouse<B: Backend>(terminal: &Terminal<B>, app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.auto_scroll = false;
            app.scroll_offset = app.scroll_offset.saturating_sub(3);
        }
        MouseEventKind::ScrollDown => {
            let max_scroll =
                app.calculate_max_scroll_offset(available_height(terminal), terminal_width(terminal));
            app.scroll_offset = app.scroll_offset.saturating_add(3).min(max_scroll);
            if app.scroll_offset >= max_scroll {
                app.auto_scroll = true;
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::test_app;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn picker_enter_switches_model_and_resets() {
        let mut app = test_app("gemini-2.5-flash");
        app.models = vec![
            "gemini-2.5-flash".to_string(),
            "gemini-2.5-pro".to_string(),
        ];
        app.add_user_message("hello".to_string());
        app.open_model_picker();

        handle_picker_key(&mut app, key(KeyCode::Down));
        handle_picker_key(&mut app, key(KeyCode::Enter));

        assert!(app.picker.is_none());
        assert_eq!(app.current_model(), "gemini-2.5-pro");
        // Transcript was reset; only the switch notice remains.
        assert_eq!(app.messages.len(), 1);
        assert!(app.messages[0].is_app());
    }

    #[test]
    fn picker_enter_on_current_model_keeps_transcript() {
        let mut app = test_app("gemini-2.5-flash");
        app.models = vec!["gemini-2.5-flash".to_string()];
        app.add_user_message("hello".to_string());
        app.open_model_picker();

        handle_picker_key(&mut app, key(KeyCode::Enter));

        assert!(app.picker.is_none());
        assert_eq!(app.messages.len(), 1);
        assert_eq!(app.messages[0].content, "hello");
    }

    #[test]
    fn picker_esc_closes_without_switching() {
        let mut app = test_app("gemini-2.5-flash");
        app.models = vec![
            "gemini-2.5-flash".to_string(),
            "gemini-2.5-pro".to_string(),
        ];
        app.open_model_picker();
        handle_picker_key(&mut app, key(KeyCode::Down));
        handle_picker_key(&mut app, key(KeyCode::Esc));

        assert!(app.picker.is_none());
        assert_eq!(app.current_model(), "gemini-2.5-flash");
    }
}
