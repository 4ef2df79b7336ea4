use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::App;

/// Render the "enable focus lock" confirmation popup
pub fn render_lock_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = app.lock.prompt() else {
        return;
    };

    let bg = app.theme.background;
    let highlight = app.theme.highlight;

    let header_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let warn_style = Style::default().fg(app.theme.red).bg(bg);
    let ok_style = Style::default().fg(app.theme.green).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup_w: u16 = 66.min(area.width.saturating_sub(2));

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(" {}", prompt.title),
        header_style,
    )));
    lines.push(Line::from(Span::styled("", text_style)));

    lines.push(Line::from(Span::styled("  This will block:", bright_style)));
    for item in &prompt.blocked {
        lines.push(Line::from(vec![
            Span::styled("    \u{2717} ", warn_style),
            Span::styled(item.as_str(), text_style),
        ]));
    }
    lines.push(Line::from(Span::styled("", text_style)));

    lines.push(Line::from(Span::styled("  Still available:", bright_style)));
    for item in &prompt.available {
        lines.push(Line::from(vec![
            Span::styled("    \u{2713} ", ok_style),
            Span::styled(item.as_str(), text_style),
        ]));
    }
    lines.push(Line::from(Span::styled("", text_style)));

    lines.push(Line::from(Span::styled(
        format!("  {}", prompt.exit),
        dim_style,
    )));
    lines.push(Line::from(Span::styled("", text_style)));

    // Key hints
    lines.push(Line::from(vec![
        Span::styled("  ", text_style),
        Span::styled("y/Enter", dim_style),
        Span::styled(" enable  ", text_style),
        Span::styled("n/Esc", dim_style),
        Span::styled(" cancel", text_style),
    ]));

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
