/// ANSI SGR color styling for terminal log output
///
/// A color is a foreground palette index, an optional background palette
/// index, and a bold flag. Palette indices cover the 8 basic ANSI colors
/// (0 = black .. 7 = white); `None` means the terminal default. Values are
/// immutable; the `with_*` methods derive new colors, so the palette
/// constants are safe to share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub foreground: Option<u8>, // Palette index 0-7, None for terminal default
    pub background: Option<u8>, // Palette index 0-7, None for terminal default
    pub bold: bool,
}

impl Color {
    /// No styling at all - renders as a bare SGR wrapper
    pub const CLEAR: Color = Color::new(None);
    pub const BLACK: Color = Color::new(Some(0));
    pub const RED: Color = Color::new(Some(1));
    pub const GREEN: Color = Color::new(Some(2));
    pub const YELLOW: Color = Color::new(Some(3));
    pub const BLUE: Color = Color::new(Some(4));
    pub const MAGENTA: Color = Color::new(Some(5));
    pub const CYAN: Color = Color::new(Some(6));
    pub const WHITE: Color = Color::new(Some(7));

    /// Create a plain foreground color (no background, not bold)
    pub const fn new(foreground: Option<u8>) -> Self {
        Color {
            foreground,
            background: None,
            bold: false,
        }
    }

    /// Derive a color with the background taken from another color.
    ///
    /// The background slot is filled from the argument's *foreground* index,
    /// because the palette only defines foreground indices. So
    /// `Color::WHITE.with_background(Color::RED)` is white text on a red
    /// background.
    pub const fn with_background(self, background: Color) -> Self {
        Color {
            foreground: self.foreground,
            background: background.foreground,
            bold: self.bold,
        }
    }

    /// Derive a color with the bold flag set as given
    pub const fn with_bold(self, bold: bool) -> Self {
        Color {
            foreground: self.foreground,
            background: self.background,
            bold,
        }
    }

    /// Shorthand for `with_bold(true)`
    pub const fn bold(self) -> Self {
        self.with_bold(true)
    }

    /// Wrap text in this color's SGR escape codes.
    ///
    /// Emits `\x1b[<codes>m<text>\x1b[0m` where the codes are the SGR
    /// foreground (30-37), background (40-47), and bold (1) parameters,
    /// semicolon-joined in that fixed order, each omitted when absent. A
    /// fully-default color still wraps: `\x1b[m<text>\x1b[0m`.
    pub fn render(&self, text: &str) -> String {
        let mut codes = Vec::with_capacity(3);
        if let Some(fg) = self.foreground {
            codes.push((fg + 30).to_string());
        }
        if let Some(bg) = self.background {
            codes.push((bg + 40).to_string());
        }
        if self.bold {
            codes.push("1".to_string());
        }
        format!("\x1b[{}m{}\x1b[0m", codes.join(";"), text)
    }
}
