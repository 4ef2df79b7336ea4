use chrono::{DateTime, TimeZone, Utc};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::state::SessionState;
use crate::model::FocusConfig;
use crate::ops::clock::ManualClock;
use crate::ops::controller::LockSettings;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 14, 9, 0, 0).unwrap()
}

/// An app on a manual clock at `t0()`, with no notifier and no
/// persistence. A locked app's session began at `t0()`.
pub fn test_app(locked: bool) -> (App, ManualClock) {
    let clock = ManualClock::new(t0());
    let session = SessionState::snapshot(locked.then(t0), t0());
    let app = App::new(
        &FocusConfig::default(),
        LockSettings::default(),
        Box::new(clock.clone()),
        None,
        &session,
        None,
    );
    (app, clock)
}
