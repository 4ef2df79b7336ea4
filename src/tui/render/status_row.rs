use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{display_width, spans_width};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = match app.status_toast() {
        Some(toast) => {
            let mut spans = vec![Span::styled(
                toast.message,
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )];
            if !toast.detail.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", toast.detail),
                    Style::default().fg(app.theme.text).bg(bg),
                ));
            }
            spans
        }
        None => vec![Span::styled(
            app.lock.phase().label(),
            Style::default()
                .fg(app.theme.lock_color(app.lock.is_locked()))
                .bg(bg),
        )],
    };

    if app.show_key_hints {
        let hint = key_hint(app);
        let content_width = spans_width(&spans);
        let hint_width = display_width(&hint);
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hint(app: &App) -> String {
    if app.lock.prompt_visible() {
        "y enable  n cancel".to_string()
    } else if app.lock.is_locked() {
        format!("{} unlock  ? help", app.shortcut)
    } else {
        format!("{} lock  ? help  q quit", app.shortcut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn row(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| render_status_row(frame, app, area))
    }

    #[test]
    fn idle_row_shows_state_and_hints() {
        let (app, _clock) = test_app(false);
        let out = row(&app);
        assert!(out.starts_with("unlocked"));
        assert!(out.ends_with("Ctrl+L lock  ? help  q quit"));
    }

    #[test]
    fn pending_row_shows_prompt_keys() {
        let (mut app, _clock) = test_app(false);
        app.lock.toggle();
        let out = row(&app);
        assert!(out.starts_with("pending"));
        assert!(out.ends_with("y enable  n cancel"));
    }

    #[test]
    fn feedback_replaces_state_label() {
        let (mut app, _clock) = test_app(true);
        app.lock.toggle();
        let out = row(&app);
        assert!(out.starts_with("Focus Lock disabled  Locked for 0 minutes."));
        assert!(out.ends_with("q quit"));
    }

    #[test]
    fn no_hints_when_disabled() {
        let (mut app, _clock) = test_app(true);
        app.show_key_hints = false;
        assert_eq!(row(&app), "locked");
    }
}
