//! Crayons: ordered style lists that render to SGR escape sequences.

use std::fmt::{self, Display, Write as _};
use std::io;

use super::code::Style;
use crate::output::Output;

/// The escape character that opens every SGR sequence.
pub const ESCAPE: char = '\x1b';

/// An ordered list of [`Style`] codes bound to an [`Output`].
///
/// Codes are emitted in list order, duplicates included. The list only
/// grows: there is no way to remove a code once added.
///
/// A crayon is monochrome when either its own flag or its output's flag is
/// set. The output's flag is a hard override: while it is on,
/// [`set_monochrome`](Crayon::set_monochrome) is ignored.
///
/// # Example
///
/// ```rust
/// use crayons::{Output, Style};
///
/// let (output, _capture) = Output::capture(false);
/// let crayon = output.crayon([Style::FgBrightCyan, Style::BgBlack]);
///
/// assert_eq!(crayon.start_sequence(), "\x1b[96;40m");
/// assert_eq!(crayon.end_sequence(), "\x1b[0m");
/// assert_eq!(crayon.wrap("hi"), "\x1b[96;40mhi\x1b[0m");
/// ```
#[derive(Debug, Clone)]
pub struct Crayon {
    styles: Vec<Style>,
    monochrome: bool,
    output: Output,
}

impl Crayon {
    /// Creates a crayon with `styles` in iteration order.
    ///
    /// The instance monochrome flag starts out as the output's current flag.
    pub fn new<I>(output: &Output, styles: I) -> Self
    where
        I: IntoIterator<Item = Style>,
    {
        let mut crayon = Self {
            styles: Vec::new(),
            monochrome: output.is_monochrome(),
            output: output.clone(),
        };
        crayon.append(styles);
        crayon
    }

    /// Returns the styles in emission order.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Returns the output this crayon draws to.
    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Adds styles to the end of the list.
    pub fn append<I>(&mut self, styles: I) -> &mut Self
    where
        I: IntoIterator<Item = Style>,
    {
        self.styles.extend(styles);
        self
    }

    /// Inserts a style at the front of the list.
    pub fn prepend(&mut self, style: Style) -> &mut Self {
        self.styles.insert(0, style);
        self
    }

    /// Sets this crayon's own monochrome flag.
    ///
    /// Does nothing while the output is monochrome, so color can't be
    /// switched back on where the environment forbids it.
    pub fn set_monochrome(&mut self, monochrome: bool) {
        if self.output.is_monochrome() {
            return;
        }
        self.monochrome = monochrome;
    }

    /// Returns true if this crayon currently draws without escape sequences.
    pub fn is_monochrome(&self) -> bool {
        self.monochrome || self.output.is_monochrome()
    }

    /// The sequence that turns this crayon's styles on: `ESC [ codes m`.
    ///
    /// An empty crayon yields `ESC[m`.
    pub fn start_sequence(&self) -> String {
        let mut seq = String::with_capacity(3 + self.styles.len() * 4);
        seq.push(ESCAPE);
        seq.push('[');
        for (i, style) in self.styles.iter().enumerate() {
            if i > 0 {
                seq.push(';');
            }
            // Writing into a String cannot fail.
            let _ = write!(seq, "{}", style.code());
        }
        seq.push('m');
        seq
    }

    /// The sequence that clears all styles: `ESC[0m`.
    pub fn end_sequence(&self) -> String {
        format!("{}[{}m", ESCAPE, Style::Clear.code())
    }

    /// Surrounds `text` with the start and end sequences.
    ///
    /// Returns `text` unchanged when monochrome. Never touches the output.
    pub fn wrap(&self, text: &str) -> String {
        if self.is_monochrome() {
            return text.to_string();
        }
        let mut out = self.start_sequence();
        out.push_str(text);
        out.push_str(&self.end_sequence());
        out
    }

    /// Writes the start sequence to the output, leaving the styles active
    /// until [`reset`](Crayon::reset) is called.
    pub fn apply(&self) -> io::Result<&Self> {
        if !self.is_monochrome() {
            self.output.write_str(&self.start_sequence())?;
        }
        Ok(self)
    }

    /// Writes the end sequence to the output.
    pub fn reset(&self) -> io::Result<&Self> {
        if !self.is_monochrome() {
            self.output.write_str(&self.end_sequence())?;
        }
        Ok(self)
    }

    /// Draws `text` to the output with this crayon's styles.
    ///
    /// Returns the number of bytes of `text` written; escape sequences are
    /// not counted.
    pub fn print<T: Display>(&self, text: T) -> io::Result<usize> {
        self.emit(&text.to_string())
    }

    /// Like [`print`](Crayon::print) but takes `format_args!` output.
    ///
    /// ```rust
    /// use crayons::{Output, Style};
    ///
    /// let (output, capture) = Output::capture(false);
    /// let crayon = output.crayon([Style::FgGreen]);
    /// let written = crayon.print_fmt(format_args!("{} {}", "the hulk", "bruce banner")).unwrap();
    ///
    /// assert_eq!(written, "the hulk bruce banner".len());
    /// assert_eq!(capture.contents(), "\x1b[32mthe hulk bruce banner\x1b[0m");
    /// ```
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<usize> {
        self.emit(&fmt::format(args))
    }

    /// Like [`print`](Crayon::print) with a trailing newline inside the styled span.
    pub fn println<T: Display>(&self, text: T) -> io::Result<usize> {
        self.emit(&format!("{}\n", text))
    }

    /// Returns `text` wrapped in this crayon's sequences.
    ///
    /// This also fires [`apply`](Crayon::apply) and [`reset`](Crayon::reset)
    /// on the output, so a start and an end sequence are written there
    /// back to back. Use [`wrap`](Crayon::wrap) for the string alone.
    pub fn sprint<T: Display>(&self, text: T) -> io::Result<String> {
        self.render(text.to_string())
    }

    /// Like [`sprint`](Crayon::sprint) but takes `format_args!` output.
    pub fn sprint_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<String> {
        self.render(fmt::format(args))
    }

    /// Like [`sprint`](Crayon::sprint) with a trailing newline inside the styled span.
    pub fn sprintln<T: Display>(&self, text: T) -> io::Result<String> {
        self.render(format!("{}\n", text))
    }

    fn emit(&self, text: &str) -> io::Result<usize> {
        self.apply()?;
        let written = self.output.write_str(text);
        let reset = self.reset();
        let written = written?;
        reset?;
        Ok(written)
    }

    fn render(&self, text: String) -> io::Result<String> {
        self.apply()?;
        self.reset()?;
        Ok(self.wrap(&text))
    }
}

impl PartialEq for Crayon {
    fn eq(&self, other: &Self) -> bool {
        self.styles == other.styles && self.monochrome == other.monochrome
    }
}

impl Eq for Crayon {}

/// Wraps `text` with a throwaway crayon built from `styles`.
///
/// Pure: nothing is written to `output`, it only supplies the monochrome
/// setting.
///
/// ```rust
/// use crayons::{colorize, Output, Style};
///
/// let (output, capture) = Output::capture(false);
/// assert_eq!(colorize(&output, "message", [Style::FgCyan]), "\x1b[36mmessage\x1b[0m");
/// assert!(capture.is_empty());
/// ```
pub fn colorize<I>(output: &Output, text: &str, styles: I) -> String
where
    I: IntoIterator<Item = Style>,
{
    Crayon::new(output, styles).wrap(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Capture;
    use std::io::Write;

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn color_output() -> (Output, Capture) {
        Output::capture(false)
    }

    #[test]
    fn test_start_sequence() {
        let (output, _) = color_output();
        let crayon = Crayon::new(&output, [Style::FgBrightCyan, Style::BgBlack]);
        assert_eq!(crayon.start_sequence(), "\x1b[96;40m");
    }

    #[test]
    fn test_start_sequence_empty() {
        let (output, _) = color_output();
        let crayon = Crayon::new(&output, Vec::<Style>::new());
        assert_eq!(crayon.start_sequence(), "\x1b[m");
    }

    #[test]
    fn test_end_sequence_ignores_styles() {
        let (output, _) = color_output();
        let crayon = Crayon::new(&output, [Style::FgBrightCyan, Style::BgBlack]);
        assert_eq!(crayon.end_sequence(), format!("{}[{}m", ESCAPE, Style::Clear));
        assert_eq!(Crayon::new(&output, Vec::<Style>::new()).end_sequence(), "\x1b[0m");
    }

    #[test]
    fn test_start_sequence_keeps_duplicates_in_order() {
        let (output, _) = color_output();
        let crayon = Crayon::new(&output, [Style::FgRed, Style::Bold, Style::FgRed]);
        assert_eq!(crayon.start_sequence(), "\x1b[31;1;31m");
    }

    #[test]
    fn test_append_preserves_order() {
        let (output, _) = color_output();
        let mut crayon = Crayon::new(&output, [Style::BgBlue]);
        crayon.append([Style::Underline, Style::Bold]);
        assert_eq!(crayon.styles(), &[Style::BgBlue, Style::Underline, Style::Bold]);
    }

    #[test]
    fn test_prepend_shifts_right() {
        let (output, _) = color_output();
        let mut crayon = Crayon::new(&output, [Style::BgBlue, Style::Underline]);
        assert_eq!(crayon.styles().len(), 2);

        crayon.prepend(Style::FgWhite);
        assert_eq!(
            crayon.styles(),
            &[Style::FgWhite, Style::BgBlue, Style::Underline]
        );
    }

    #[test]
    fn test_chaining() {
        let (output, _) = color_output();
        let mut crayon = Crayon::new(&output, Vec::<Style>::new());
        crayon.append([Style::Bold]).prepend(Style::FgRed).append([Style::BgBlack]);
        assert_eq!(crayon.start_sequence(), "\x1b[31;1;40m");
    }

    #[test]
    fn test_wrap() {
        let (output, capture) = color_output();
        let crayon = Crayon::new(&output, [Style::FgYellow]);
        assert_eq!(crayon.wrap("x"), "\x1b[33mx\x1b[0m");
        assert!(capture.is_empty());
    }

    #[test]
    fn test_monochrome_inherited_from_output() {
        let (output, _) = Output::capture(true);
        let mut crayon = Crayon::new(&output, [Style::FgCyan]);
        assert!(crayon.is_monochrome());

        crayon.set_monochrome(false);
        assert!(crayon.is_monochrome());
        assert!(output.is_monochrome());
        assert_eq!(crayon.wrap("message"), "message");
    }

    #[test]
    fn test_output_monochrome_overrides_instance() {
        let (output, _) = color_output();
        let crayon = Crayon::new(&output, [Style::FgCyan]);
        assert!(!crayon.is_monochrome());

        output.set_monochrome(true);
        assert!(crayon.is_monochrome());
        assert_eq!(crayon.wrap("message"), "message");
    }

    #[test]
    fn test_instance_monochrome() {
        let (output, capture) = color_output();
        let mut crayon = Crayon::new(&output, [Style::FgCyan]);
        crayon.set_monochrome(true);

        assert_eq!(crayon.sprint("message").unwrap(), "message");
        assert_eq!(crayon.print("message").unwrap(), 7);
        assert_eq!(capture.contents(), "message");
    }

    #[test]
    fn test_apply_and_reset_write_sequences() {
        let (output, capture) = color_output();
        let crayon = Crayon::new(&output, [Style::Bold]);

        crayon.apply().unwrap();
        output.write_str("x").unwrap();
        crayon.reset().unwrap();
        assert_eq!(capture.contents(), "\x1b[1mx\x1b[0m");
    }

    #[test]
    fn test_apply_and_reset_silent_when_monochrome() {
        let (output, capture) = Output::capture(true);
        let crayon = Crayon::new(&output, [Style::Bold]);
        crayon.apply().unwrap().reset().unwrap();
        assert!(capture.is_empty());
    }

    #[test]
    fn test_print_counts_payload_only() {
        let (output, capture) = color_output();
        let crayon = Crayon::new(&output, [Style::FgYellow, Style::BgRed]);

        let written = crayon.print("iron man").unwrap();
        assert_eq!(written, "iron man".len());
        assert_eq!(capture.contents(), "\x1b[33;41miron man\x1b[0m");
    }

    #[test]
    fn test_println_appends_newline() {
        let (output, capture) = color_output();
        let crayon = Crayon::new(&output, [Style::Underline]);

        let written = crayon.println("captain america").unwrap();
        assert_eq!(written, "captain america\n".len());
        assert_eq!(capture.contents(), "\x1b[4mcaptain america\n\x1b[0m");
    }

    #[test]
    fn test_sprint_returns_wrapped_and_touches_output() {
        let (output, capture) = color_output();
        let crayon = Crayon::new(&output, [Style::FgBrightCyan, Style::BgBlack]);

        let out = crayon.sprint("testing").unwrap();
        assert_eq!(out, crayon.wrap("testing"));
        assert_eq!(capture.contents(), "\x1b[96;40m\x1b[0m");
    }

    #[test]
    fn test_sprint_fmt() {
        let (output, _) = color_output();
        let crayon = Crayon::new(&output, [Style::FgBrightRed, Style::BgWhite]);

        let out = crayon
            .sprint_fmt(format_args!("{} {}!", "hello", "world"))
            .unwrap();
        let expected = crayon.start_sequence() + "hello world!" + &crayon.end_sequence();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_sprintln() {
        let (output, _) = color_output();
        let crayon = Crayon::new(&output, [Style::FgBlack, Style::BgWhite, Style::Underline]);

        let out = crayon.sprintln("hello world foo").unwrap();
        assert_eq!(out, "\x1b[30;107;4mhello world foo\n\x1b[0m");
    }

    #[test]
    fn test_print_error_passes_through() {
        let output = Output::new(FailingSink, false);
        let crayon = Crayon::new(&output, [Style::Bold]);

        let err = crayon.print("x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(crayon.sprint("x").is_err());
    }

    #[test]
    fn test_monochrome_skips_failing_sink_sequences() {
        let output = Output::new(FailingSink, true);
        let crayon = Crayon::new(&output, [Style::Bold]);

        assert_eq!(crayon.sprint("x").unwrap(), "x");
        assert!(crayon.print("x").is_err());
    }

    #[test]
    fn test_equality_ignores_output() {
        let (first, _) = color_output();
        let (second, _) = color_output();
        assert_eq!(
            Crayon::new(&first, [Style::DefaultFg, Style::DefaultBg]),
            Crayon::new(&second, [Style::DefaultFg, Style::DefaultBg])
        );
        assert_ne!(
            Crayon::new(&first, [Style::DefaultFg]),
            Crayon::new(&first, [Style::DefaultBg])
        );
    }

    #[test]
    fn test_colorize_matches_sprint() {
        let (output, _) = color_output();
        let colored = colorize(&output, "message", [Style::FgCyan]);
        let crayon = Crayon::new(&output, [Style::FgCyan]);
        assert_eq!(colored, crayon.sprint("message").unwrap());
    }
}
