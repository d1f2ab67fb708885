//! Output handling
//!
//! `!` hands its rendered characters to an [`Output`] in one call, so the
//! characters of a single print are written and flushed together.

use crate::render::{Blink, Intensity, Rgb, Style, StyledChar, Underline};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use std::io::{self, Write};

/// Destination of printed characters
pub trait Output {
    /// Write the characters of one print and flush them
    fn write_chars(&mut self, chars: &[StyledChar]) -> io::Result<()>;
}

/// Terminal output. Styles are emitted as escape sequences through crossterm.
#[derive(Debug)]
pub struct TerminalOutput<W: Write> {
    writer: W,
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(writer: W) -> Self {
        TerminalOutput { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TerminalOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Output for TerminalOutput<W> {
    fn write_chars(&mut self, chars: &[StyledChar]) -> io::Result<()> {
        for styled in chars {
            match styled.style {
                None => queue!(self.writer, Print(styled.ch))?,
                Some(style) => {
                    queue!(
                        self.writer,
                        SetForegroundColor(color(style.foreground)),
                        SetBackgroundColor(color(style.background))
                    )?;
                    for attribute in attributes(&style) {
                        queue!(self.writer, SetAttribute(attribute))?;
                    }
                    queue!(self.writer, Print(styled.ch), SetAttribute(Attribute::Reset))?;
                }
            }
        }
        self.writer.flush()
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Terminal attributes for a style, one per attribute set
fn attributes(style: &Style) -> [Attribute; 5] {
    [
        match style.intensity {
            Intensity::Bold => Attribute::Bold,
            Intensity::Normal => Attribute::NormalIntensity,
            Intensity::Faint => Attribute::Dim,
        },
        match style.underline {
            Underline::Single => Attribute::Underlined,
            Underline::Double => Attribute::DoubleUnderlined,
            Underline::Off => Attribute::NoUnderline,
        },
        match style.blink {
            Blink::Off => Attribute::NoBlink,
            Blink::Fast => Attribute::RapidBlink,
            Blink::Slow => Attribute::SlowBlink,
        },
        if style.strikethrough {
            Attribute::CrossedOut
        } else {
            Attribute::NotCrossedOut
        },
        if style.italic {
            Attribute::Italic
        } else {
            Attribute::NoItalic
        },
    ]
}

/// In-memory output that keeps every requested character and style
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    chars: Vec<StyledChar>,
    prints: usize,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Printed text without styles
    pub fn text(&self) -> String {
        self.chars.iter().map(|c| c.ch).collect()
    }

    pub fn chars(&self) -> &[StyledChar] {
        &self.chars
    }

    /// Number of `!` executions seen
    pub fn prints(&self) -> usize {
        self.prints
    }
}

impl Output for CapturedOutput {
    fn write_chars(&mut self, chars: &[StyledChar]) -> io::Result<()> {
        self.chars.extend_from_slice(chars);
        self.prints += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> Style {
        Style {
            foreground: Rgb { r: 255, g: 0, b: 16 },
            background: Rgb { r: 1, g: 2, b: 3 },
            intensity: Intensity::Bold,
            underline: Underline::Double,
            blink: Blink::Off,
            strikethrough: true,
            italic: false,
        }
    }

    #[test]
    fn test_plain_terminal_output() {
        let mut out = TerminalOutput::new(Vec::new());
        out.write_chars(&[StyledChar::plain('h'), StyledChar::plain('i')])
            .unwrap();
        assert_eq!(out.into_inner(), b"hi");
    }

    #[test]
    fn test_styled_terminal_output() {
        let mut out = TerminalOutput::new(Vec::new());
        out.write_chars(&[StyledChar {
            ch: 'x',
            style: Some(style()),
        }])
        .unwrap();

        let bytes = String::from_utf8(out.into_inner()).unwrap();
        assert!(bytes.contains("\x1b[38;2;255;0;16m"), "{bytes:?}");
        assert!(bytes.contains("\x1b[48;2;1;2;3m"), "{bytes:?}");
        assert!(bytes.contains('x'));
        // Styling is reset after every character
        assert!(bytes.ends_with("\x1b[0m"), "{bytes:?}");
    }

    #[test]
    fn test_attributes_cover_each_set() {
        let attrs = attributes(&style());
        assert_eq!(
            attrs,
            [
                Attribute::Bold,
                Attribute::DoubleUnderlined,
                Attribute::NoBlink,
                Attribute::CrossedOut,
                Attribute::NoItalic,
            ]
        );
    }

    #[test]
    fn test_captured_output() {
        let mut out = CapturedOutput::new();
        out.write_chars(&[StyledChar::plain('a')]).unwrap();
        out.write_chars(&[StyledChar::plain('b'), StyledChar::plain('c')])
            .unwrap();

        assert_eq!(out.text(), "abc");
        assert_eq!(out.prints(), 2);
        assert_eq!(out.chars().len(), 3);
    }
}
