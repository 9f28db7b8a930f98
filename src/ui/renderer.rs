//! Frame rendering for the chat view and the model picker overlay.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::core::app::App;
use crate::ui::picker::PickerState;

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let lines = app.build_display_lines();

    // Calculate scroll position using wrapped line count
    let available_height = chunks[0].height.saturating_sub(1); // Account for title
    let total_wrapped_lines = app.calculate_wrapped_line_count(chunks[0].width);
    let max_offset = total_wrapped_lines.saturating_sub(available_height);
    let scroll_offset = app.scroll_offset.min(max_offset);

    let title = format!(
        "Gembox v{} - {} • temp {:.1} • Logging: {}",
        env!("CARGO_PKG_VERSION"),
        app.current_model(),
        app.settings.temperature(),
        app.get_logging_status()
    );

    let messages_paragraph = Paragraph::new(lines)
        .block(Block::default().title(title))
        .wrap(Wrap { trim: true })
        .scroll((scroll_offset, 0));

    f.render_widget(messages_paragraph, chunks[0]);

    render_input(f, app, chunks[1]);

    if let Some(picker) = &app.picker {
        render_picker(f, picker);
    }
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input_style = if app.input_mode && !app.is_waiting {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let input_title = if app.is_waiting {
        "Waiting for reply… (input blocked)"
    } else {
        "Type your message (Enter to send, /help for help, Ctrl+C to quit)"
    };

    // While blocked on a reply, pin a thinking indicator to the right edge.
    let input_text = if app.is_waiting {
        let inner_width = area.width.saturating_sub(2) as usize;
        let mut result = vec![' '; inner_width];
        let input_chars: Vec<char> = app.input.chars().collect();
        let max_input_len = inner_width.saturating_sub(3);
        for (i, &ch) in input_chars.iter().take(max_input_len).enumerate() {
            result[i] = ch;
        }
        if inner_width > 1 {
            result[inner_width - 2] = '●';
        }
        result.into_iter().collect()
    } else {
        app.input.clone()
    };

    let input = Paragraph::new(input_text.as_str())
        .style(input_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Reset))
                .title(input_title),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(input, area);

    if app.input_mode && !app.is_waiting {
        let max_cursor_x = area.width.saturating_sub(2);
        let cursor_x = (app.input.chars().count() as u16 + 1).min(max_cursor_x);
        f.set_cursor_position((area.x + cursor_x, area.y + 1));
    }
}

fn render_picker(f: &mut Frame, picker: &PickerState) {
    let area = centered_rect(f.area(), 44, picker.items.len() as u16 + 2);
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = picker
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == picker.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(item.label.clone(), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(picker.title.as_str()),
    );
    f.render_widget(list, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 44, 8);
        assert_eq!(rect.width, 44);
        assert_eq!(rect.x, 18);

        let tiny = Rect::new(0, 0, 10, 4);
        let rect = centered_rect(tiny, 44, 8);
        assert_eq!(rect.width, 10);
        assert_eq!(rect.height, 4);
    }
}
