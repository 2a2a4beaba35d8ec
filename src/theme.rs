//! Theme palette with optional `theme.conf` overrides.
//!
//! The palette defaults to a built-in dark scheme; users may override any
//! color in `~/.config/postdeck/theme.conf` with `key = value` lines where
//! the value is `#RRGGBB` or `R,G,B`. Unknown keys and invalid values are
//! ignored so a broken theme file never prevents startup.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds (level 1).
    pub surface1: Color,
    /// Subtle surface color for component backgrounds (level 2).
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Tertiary text for captions and low-emphasis content.
    pub subtext1: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings or selections.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            subtext1: Color::Rgb(0xba, 0xc2, 0xde),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// Global theme store, loaded once per process.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Resolve the postdeck configuration directory, creating it if needed.
///
/// Output:
/// - `$XDG_CONFIG_HOME/postdeck` when set, otherwise `~/.config/postdeck`;
///   falls back to the current directory when no home is known.
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| env::var("HOME").ok().map(|h| Path::new(&h).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    let dir = base.join("postdeck");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// What: Resolve the log directory under the configuration directory.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color specification string potentially containing inline comments.
///
/// Output:
/// - `Some(Color)` for recognized hex or decimal triplet formats; `None`
///   otherwise.
///
/// Details:
/// - Strips trailing comments beginning with `//` or secondary `#` markers.
/// - Accepts `#RRGGBB` hex and `R,G,B` decimal triplets (0-255 per channel).
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let mut t = s.trim();
    if let Some(i) = t.find("//") {
        t = &t[..i];
    }
    // Preserve a leading '#' for hex values by searching for '#' only after
    // the first char.
    if let Some(i) = if let Some(stripped) = t.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        t.find('#')
    } {
        t = &t[..i];
    }
    t = t.trim();
    if t.is_empty() {
        return None;
    }
    if let Some(hex) = t.strip_prefix('#') {
        if hex.len() == 6
            && hex.chars().all(|c| c.is_ascii_hexdigit())
            && let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            )
        {
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }
    let parts: Vec<&str> = t.split(',').map(str::trim).collect();
    if parts.len() == 3
        && let (Ok(r), Ok(g), Ok(b)) = (
            parts[0].parse::<u8>(),
            parts[1].parse::<u8>(),
            parts[2].parse::<u8>(),
        )
    {
        return Some(Color::Rgb(r, g, b));
    }
    None
}

/// What: Apply one `key = value` assignment onto a palette.
fn apply_entry(theme: &mut Theme, key: &str, color: Color) {
    match key {
        "base" => theme.base = color,
        "mantle" => theme.mantle = color,
        "crust" => theme.crust = color,
        "surface1" => theme.surface1 = color,
        "surface2" => theme.surface2 = color,
        "overlay1" => theme.overlay1 = color,
        "overlay2" => theme.overlay2 = color,
        "text" => theme.text = color,
        "subtext0" => theme.subtext0 = color,
        "subtext1" => theme.subtext1 = color,
        "sapphire" => theme.sapphire = color,
        "mauve" => theme.mauve = color,
        "green" => theme.green = color,
        "yellow" => theme.yellow = color,
        "red" => theme.red = color,
        "lavender" => theme.lavender = color,
        _ => {}
    }
}

/// What: Load a palette from a theme file, layering over the defaults.
///
/// Inputs:
/// - `path`: Theme file with `key = value` lines; `#`-prefixed and blank
///   lines are skipped.
///
/// Output:
/// - Palette with every parseable assignment applied; unreadable files or
///   unparseable lines leave the corresponding defaults in place.
pub(crate) fn load_theme_from_file(path: &Path) -> Theme {
    let mut theme = Theme::default();
    let Ok(text) = fs::read_to_string(path) else {
        return theme;
    };
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=')
            && let Some(color) = parse_color_value(value)
        {
            apply_entry(&mut theme, key.trim().to_lowercase().as_str(), color);
        }
    }
    theme
}

/// Return the application's theme palette, loading overrides on first use.
///
/// The override file is `$XDG_CONFIG_HOME/postdeck/theme.conf` (or
/// `~/.config/postdeck/theme.conf`); when absent the built-in palette is
/// used unchanged.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(|| {
        let path = config_dir().join("theme.conf");
        if path.exists() {
            tracing::info!(path = %path.display(), "loading theme overrides");
            load_theme_from_file(&path)
        } else {
            Theme::default()
        }
    })
}
