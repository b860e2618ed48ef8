//! SGR style codes.

/// Numeric range a [`Style`] code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    /// Reset and text attributes (0-9).
    Attribute,
    /// Standard foreground colors (30-39).
    Foreground,
    /// Bright foreground colors (90-97).
    BrightForeground,
    /// Standard background colors (40-49).
    Background,
    /// Bright background colors (100-107).
    BrightBackground,
}

impl StyleCategory {
    /// Returns a human-readable name for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleCategory::Attribute => "attribute",
            StyleCategory::Foreground => "foreground",
            StyleCategory::BrightForeground => "bright foreground",
            StyleCategory::Background => "background",
            StyleCategory::BrightBackground => "bright background",
        }
    }
}

impl std::fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single SGR (Select Graphic Rendition) code.
///
/// The discriminant is the code sent to the terminal. Nothing stops a
/// crayon from carrying two foreground colors; the terminal applies them in
/// order and the last one wins.
///
/// # Example
///
/// ```rust
/// use crayons::Style;
///
/// assert_eq!(Style::FgBrightCyan.code(), 96);
/// assert_eq!(Style::BgBlack.to_string(), "40");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Style {
    /// Resets every attribute.
    Clear = 0,
    Bold = 1,
    Faint = 2,
    Italic = 3,
    Underline = 4,
    BlinkSlow = 5,
    BlinkRapid = 6,
    ReverseVideo = 7,
    Concealed = 8,
    CrossedOut = 9,

    FgBlack = 30,
    FgRed = 31,
    FgGreen = 32,
    FgYellow = 33,
    FgBlue = 34,
    FgMagenta = 35,
    FgCyan = 36,
    FgBrightGrey = 37,
    /// The terminal's own foreground color.
    DefaultFg = 39,

    BgBlack = 40,
    BgRed = 41,
    BgGreen = 42,
    BgYellow = 43,
    BgBlue = 44,
    BgMagenta = 45,
    BgCyan = 46,
    BgLightGrey = 47,
    /// The terminal's own background color.
    DefaultBg = 49,

    FgBrightBlack = 90,
    FgBrightRed = 91,
    FgBrightGreen = 92,
    FgBrightYellow = 93,
    FgBrightBlue = 94,
    FgBrightMagenta = 95,
    FgBrightCyan = 96,
    FgWhite = 97,

    BgBrightBlack = 100,
    BgBrightRed = 101,
    BgBrightGreen = 102,
    BgBrightYellow = 103,
    BgBrightBlue = 104,
    BgBrightMagenta = 105,
    BgBrightCyan = 106,
    BgWhite = 107,
}

impl Style {
    /// Returns the numeric SGR code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the range this code falls in.
    pub fn category(self) -> StyleCategory {
        match self.code() {
            0..=9 => StyleCategory::Attribute,
            30..=39 => StyleCategory::Foreground,
            40..=49 => StyleCategory::Background,
            90..=97 => StyleCategory::BrightForeground,
            _ => StyleCategory::BrightBackground,
        }
    }
}

impl From<Style> for u8 {
    fn from(style: Style) -> Self {
        style.code()
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
