use ratatui::style::Color;

use crate::model::UiConfig;

/// Colors used by the TUI. The banner switches between `red` (locked)
/// and `green` (unlocked); everything else stays neutral.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x18),
            text: Color::Rgb(0xC8, 0xD0, 0xD8),
            text_bright: Color::Rgb(0xF4, 0xF6, 0xF8),
            highlight: Color::Rgb(0xF2, 0xB1, 0x34),
            dim: Color::Rgb(0x5C, 0x67, 0x73),
            red: Color::Rgb(0xE5, 0x48, 0x4D),
            green: Color::Rgb(0x46, 0xA7, 0x58),
        }
    }
}

/// `#RRGGBB` to an RGB color
fn hex_color(value: &str) -> Option<Color> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let rgb = u32::from_str_radix(digits, 16).ok()?;
    Some(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

impl Theme {
    /// Apply `[ui.colors]` overrides; unknown keys and bad values are skipped
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (name, value) in &ui.colors {
            let Some(color) = hex_color(value) else {
                tracing::debug!(name = %name, value = %value, "ignoring unparsable color");
                continue;
            };
            let slot = match name.as_str() {
                "background" => &mut theme.background,
                "text" => &mut theme.text,
                "text_bright" => &mut theme.text_bright,
                "highlight" => &mut theme.highlight,
                "dim" => &mut theme.dim,
                "red" | "locked" => &mut theme.red,
                "green" | "unlocked" => &mut theme.green,
                _ => continue,
            };
            *slot = color;
        }
        theme
    }

    /// Banner color for the lock state
    pub fn lock_color(&self, locked: bool) -> Color {
        if locked { self.red } else { self.green }
    }
}
