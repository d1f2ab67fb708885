//! Output rendering
//!
//! Turns the accumulator into the characters `!` prints. In discouraged mode
//! every character gets an independent random style. This module only picks
//! the style; turning it into escape sequences is the job of an
//! [`Output`](crate::io::Output).

use rand::rngs::ThreadRng;
use rand::Rng;
use vague_spec::Value;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Rgb {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intensity {
    Bold,
    Normal,
    Faint,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Bold, Intensity::Normal, Intensity::Faint];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Underline {
    Single,
    Double,
    Off,
}

impl Underline {
    pub const ALL: [Underline; 3] = [Underline::Single, Underline::Double, Underline::Off];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blink {
    Off,
    Fast,
    Slow,
}

impl Blink {
    pub const ALL: [Blink; 3] = [Blink::Off, Blink::Fast, Blink::Slow];
}

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, choices: &[T]) -> T {
    choices[rng.random_range(0..choices.len())]
}

/// Style of a single printed character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub foreground: Rgb,
    pub background: Rgb,
    pub intensity: Intensity,
    pub underline: Underline,
    pub blink: Blink,
    pub strikethrough: bool,
    pub italic: bool,
}

impl Style {
    /// Draw every component uniformly and independently
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Style {
            foreground: Rgb::random(rng),
            background: Rgb::random(rng),
            intensity: pick(rng, &Intensity::ALL),
            underline: pick(rng, &Underline::ALL),
            blink: pick(rng, &Blink::ALL),
            strikethrough: rng.random(),
            italic: rng.random(),
        }
    }
}

/// A character to print, with its style if styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledChar {
    pub ch: char,
    pub style: Option<Style>,
}

impl StyledChar {
    pub const fn plain(ch: char) -> Self {
        StyledChar { ch, style: None }
    }
}

/// Renders values, drawing styles from `R`
#[derive(Debug)]
pub struct Renderer<R = ThreadRng> {
    rng: R,
    allow_styling: bool,
}

impl Renderer<ThreadRng> {
    /// Renderer backed by the process-wide, unseeded thread RNG
    pub fn new(allow_styling: bool) -> Self {
        Self::with_rng(rand::rng(), allow_styling)
    }
}

impl<R: Rng> Renderer<R> {
    pub fn with_rng(rng: R, allow_styling: bool) -> Self {
        Renderer { rng, allow_styling }
    }

    /// Render `value`, styling each character when `styled` is set and
    /// styling is allowed
    pub fn render(&mut self, value: Value, styled: bool) -> Vec<StyledChar> {
        let text = value.render();
        if !(styled && self.allow_styling) {
            return text.chars().map(StyledChar::plain).collect();
        }

        text.chars()
            .map(|ch| StyledChar {
                ch,
                style: Some(Style::random(&mut self.rng)),
            })
            .collect()
    }
}
