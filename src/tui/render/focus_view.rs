use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::duration::format_minutes;
use crate::tui::app::App;

use super::helpers::{center_pad, display_width};

/// Render the lock state banner in the middle of the content area
pub fn render_focus_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let locked = app.lock.is_locked();

    let banner_style = Style::default()
        .fg(app.theme.lock_color(locked))
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut rows: Vec<(String, Style)> = Vec::new();
    if let Some(since) = app.lock.lock_started_at() {
        rows.push(("FOCUS LOCK ON".to_string(), banner_style));
        rows.push((String::new(), text_style));
        rows.push((
            format!(
                "Locked for {} (since {})",
                format_minutes(app.lock.elapsed_minutes()),
                since.with_timezone(&Local).format("%H:%M")
            ),
            text_style,
        ));
        rows.push(("Exit actions are blocked.".to_string(), dim_style));
    } else {
        rows.push(("FOCUS LOCK OFF".to_string(), banner_style));
    }
    if app.show_key_hints {
        let verb = if locked { "disable" } else { "enable" };
        rows.push((String::new(), text_style));
        rows.push((format!("Press {} to {}", app.shortcut, verb), dim_style));
    }

    let top = (area.height as usize).saturating_sub(rows.len()) / 2;
    let mut lines: Vec<Line> = vec![Line::from(""); top];
    for (text, style) in rows {
        let pad = center_pad(display_width(&text), width);
        lines.push(Line::from(vec![
            Span::styled(" ".repeat(pad), Style::default().bg(bg)),
            Span::styled(text, style),
        ]));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn unlocked_shows_enable_hint() {
        let (app, _clock) = test_app(false);
        let out = render_to_string(TERM_W, 10, |frame, area| {
            render_focus_view(frame, &app, area)
        });
        assert!(out.contains("FOCUS LOCK OFF"));
        assert!(out.contains("Press Ctrl+L to enable"));
        assert!(!out.contains("Locked for"));
    }

    #[test]
    fn locked_shows_live_minutes() {
        let (app, clock) = test_app(true);
        let render = |app: &App| {
            render_to_string(TERM_W, 10, |frame, area| {
                render_focus_view(frame, app, area)
            })
        };
        assert!(render(&app).contains("Locked for 0 minutes"));

        clock.advance_secs(90);
        let out = render(&app);
        assert!(out.contains("FOCUS LOCK ON"));
        assert!(out.contains("Locked for 2 minutes"));
        assert!(out.contains("Press Ctrl+L to disable"));
    }

    #[test]
    fn hints_can_be_hidden() {
        let (mut app, _clock) = test_app(false);
        app.show_key_hints = false;
        let out = render_to_string(TERM_W, 10, |frame, area| {
            render_focus_view(frame, &app, area)
        });
        assert!(!out.contains("Press"));
    }

    #[test]
    fn banner_is_centered() {
        let (app, _clock) = test_app(false);
        let out = render_to_string(40, 1, |frame, area| render_focus_view(frame, &app, area));
        // 14 columns centered in 40
        assert_eq!(out, format!("{}FOCUS LOCK OFF", " ".repeat(13)));
    }
}
