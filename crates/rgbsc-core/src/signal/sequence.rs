// crates/rgbsc-core/src/signal/sequence.rs

use std::ops::Deref;

use crate::error::{Result, RgbError};
use crate::signal::color::ColorState;

/// Append-only channel artifact: written by the encoder, scanned by the decoder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorSequence {
    colors: Vec<ColorState>,
}

impl ColorSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { colors: Vec::with_capacity(n) }
    }

    #[inline]
    pub fn push(&mut self, c: ColorState) {
        self.colors.push(c);
    }

    pub fn extend_from_slice(&mut self, cs: &[ColorState]) {
        self.colors.extend_from_slice(cs);
    }

    pub fn as_slice(&self) -> &[ColorState] {
        &self.colors
    }

    pub fn into_vec(self) -> Vec<ColorState> {
        self.colors
    }

    /// True when no element repeats its predecessor and the first differs from Dark.
    /// Encoder output always satisfies this; sampled input usually does not.
    pub fn is_self_clocking(&self) -> bool {
        let mut prev = ColorState::Dark;
        for &c in &self.colors {
            if c == prev {
                return false;
            }
            prev = c;
        }
        true
    }

    /// Occurrence count per color, indexed by `ColorState::index`.
    pub fn histogram(&self) -> [u64; 8] {
        let mut h = [0u64; 8];
        for c in &self.colors {
            h[c.index()] += 1;
        }
        h
    }

    /// Short-code text, one letter per color, space separated.
    pub fn to_short_string(&self) -> String {
        let mut s = String::with_capacity(self.colors.len() * 2);
        for (i, c) in self.colors.iter().enumerate() {
            if i > 0 {
                s.push(' ');
            }
            s.push(c.short());
        }
        s
    }

    /// Parse short-code text. Whitespace and commas are separators and are ignored.
    pub fn parse_short(text: &str) -> Result<Self> {
        let mut colors = Vec::with_capacity(text.len() / 2);
        for (pos, ch) in text.chars().enumerate() {
            if ch.is_whitespace() || ch == ',' {
                continue;
            }
            let c = ColorState::from_short(ch).ok_or_else(|| {
                RgbError::ColorText(format!("unknown color code {ch:?} at char {pos}"))
            })?;
            colors.push(c);
        }
        Ok(Self { colors })
    }
}

impl Deref for ColorSequence {
    type Target = [ColorState];

    fn deref(&self) -> &[ColorState] {
        &self.colors
    }
}

impl From<Vec<ColorState>> for ColorSequence {
    fn from(colors: Vec<ColorState>) -> Self {
        Self { colors }
    }
}

impl FromIterator<ColorState> for ColorSequence {
    fn from_iter<I: IntoIterator<Item = ColorState>>(iter: I) -> Self {
        Self { colors: iter.into_iter().collect() }
    }
}

impl Extend<ColorState> for ColorSequence {
    fn extend<I: IntoIterator<Item = ColorState>>(&mut self, iter: I) {
        self.colors.extend(iter);
    }
}
