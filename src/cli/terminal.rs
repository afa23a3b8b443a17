//! Colour and width of the terminal the FAQ is drawn on.

use owo_colors::{OwoColorize, colors::css};

/// Below this many columns categories stack and answers indent less.
const NARROW_COLUMNS: u16 = 60;

fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Whether stdout is a terminal narrower than [`NARROW_COLUMNS`].
///
/// Output that is not a terminal is never narrow.
pub fn is_narrow() -> bool {
    terminal_size::terminal_size().is_some_and(|(width, _)| width.0 < NARROW_COLUMNS)
}

/// Styling for the parts of a rendered screen.
///
/// Without colour support a selected label is bracketed instead; other
/// styles fall back to plain text.
pub trait Colorize {
    /// A selected category button.
    fn selected(&self) -> String;
    /// A failed fetch.
    fn error(&self) -> String;
    /// The widget title.
    fn heading(&self) -> String;
    /// Placeholders, markers and status lines.
    fn dim(&self) -> String;
}

impl<S> Colorize for S
where
    S: AsRef<str> + ?Sized,
{
    fn selected(&self) -> String {
        let text = self.as_ref();
        if supports_color() {
            text.fg::<css::DodgerBlue>().to_string()
        } else {
            format!("[{text}]")
        }
    }

    fn error(&self) -> String {
        styled(self.as_ref(), |text| text.fg::<css::Red>().to_string())
    }

    fn heading(&self) -> String {
        styled(self.as_ref(), |text| text.bold().to_string())
    }

    fn dim(&self) -> String {
        styled(self.as_ref(), |text| text.dimmed().to_string())
    }
}

fn styled(text: &str, style: impl FnOnce(&str) -> String) -> String {
    if supports_color() {
        style(text)
    } else {
        text.to_string()
    }
}
