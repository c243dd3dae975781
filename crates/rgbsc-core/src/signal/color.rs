// crates/rgbsc-core/src/signal/color.rs
//
// The eight binary tri-color states. Each channel is strictly on or off;
// the discriminant is the (R,G,B) triple read as a 3-bit value.

use std::fmt;

use crate::error::{Result, RgbError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ColorState {
    /// 000: channel off
    Dark = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Yellow = 6,
    White = 7,
}

impl ColorState {
    pub const ALL: [ColorState; 8] = [
        ColorState::Dark,
        ColorState::Blue,
        ColorState::Green,
        ColorState::Cyan,
        ColorState::Red,
        ColorState::Magenta,
        ColorState::Yellow,
        ColorState::White,
    ];

    /// 3-bit code: bit2=R, bit1=G, bit0=B.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of `bits`; only the low three bits are significant.
    #[inline]
    pub const fn from_bits(bits: u8) -> ColorState {
        match bits & 0x07 {
            0 => ColorState::Dark,
            1 => ColorState::Blue,
            2 => ColorState::Green,
            3 => ColorState::Cyan,
            4 => ColorState::Red,
            5 => ColorState::Magenta,
            6 => ColorState::Yellow,
            _ => ColorState::White,
        }
    }

    /// Strict variant of `from_bits` for decoding stored codes.
    pub fn try_from_bits(bits: u8) -> Result<ColorState> {
        if bits > 0x07 {
            return Err(RgbError::Validation(format!(
                "color code out of range: 0x{bits:02x}"
            )));
        }
        Ok(ColorState::from_bits(bits))
    }

    /// (red, green, blue) channel states.
    #[inline]
    pub const fn rgb(self) -> (bool, bool, bool) {
        let b = self.bits();
        (b & 0b100 != 0, b & 0b010 != 0, b & 0b001 != 0)
    }

    #[inline]
    pub const fn from_rgb(r: bool, g: bool, b: bool) -> ColorState {
        ColorState::from_bits(((r as u8) << 2) | ((g as u8) << 1) | (b as u8))
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorState::Dark => "Dark",
            ColorState::Blue => "Blue",
            ColorState::Green => "Green",
            ColorState::Cyan => "Cyan",
            ColorState::Red => "Red",
            ColorState::Magenta => "Magenta",
            ColorState::Yellow => "Yellow",
            ColorState::White => "White",
        }
    }

    pub const fn short(self) -> char {
        match self {
            ColorState::Dark => 'D',
            ColorState::Blue => 'B',
            ColorState::Green => 'G',
            ColorState::Cyan => 'C',
            ColorState::Red => 'R',
            ColorState::Magenta => 'M',
            ColorState::Yellow => 'Y',
            ColorState::White => 'W',
        }
    }

    /// Three-column form that makes the channel-off and mark states stand out in a row.
    pub const fn marked(self) -> &'static str {
        match self {
            ColorState::Dark => "_D_",
            ColorState::Blue => " B ",
            ColorState::Green => " G ",
            ColorState::Cyan => " C ",
            ColorState::Red => " R ",
            ColorState::Magenta => " M ",
            ColorState::Yellow => "!Y!",
            ColorState::White => "|W|",
        }
    }

    pub fn from_short(c: char) -> Option<ColorState> {
        match c.to_ascii_uppercase() {
            'D' => Some(ColorState::Dark),
            'B' => Some(ColorState::Blue),
            'G' => Some(ColorState::Green),
            'C' => Some(ColorState::Cyan),
            'R' => Some(ColorState::Red),
            'M' => Some(ColorState::Magenta),
            'Y' => Some(ColorState::Yellow),
            'W' => Some(ColorState::White),
            _ => None,
        }
    }

    pub fn from_name(s: &str) -> Option<ColorState> {
        let s = s.trim();
        if s.chars().count() == 1 {
            return s.chars().next().and_then(ColorState::from_short);
        }
        ColorState::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ColorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_match_rgb_triples() {
        assert_eq!(ColorState::Dark.rgb(), (false, false, false));
        assert_eq!(ColorState::Blue.rgb(), (false, false, true));
        assert_eq!(ColorState::Red.rgb(), (true, false, false));
        assert_eq!(ColorState::Yellow.rgb(), (true, true, false));
        assert_eq!(ColorState::White.rgb(), (true, true, true));

        for c in ColorState::ALL {
            let (r, g, b) = c.rgb();
            assert_eq!(ColorState::from_rgb(r, g, b), c);
            assert_eq!(ColorState::from_bits(c.bits()), c);
        }
    }

    #[test]
    fn short_and_long_names_parse_back() {
        for c in ColorState::ALL {
            assert_eq!(ColorState::from_short(c.short()), Some(c));
            assert_eq!(ColorState::from_name(c.name()), Some(c));
            assert_eq!(c.marked().len(), 3);
        }
        assert_eq!(ColorState::from_name("magenta"), Some(ColorState::Magenta));
        assert_eq!(ColorState::from_short('x'), None);
    }

    #[test]
    fn try_from_bits_rejects_wide_codes() {
        assert!(ColorState::try_from_bits(8).is_err());
        assert_eq!(ColorState::try_from_bits(6).unwrap(), ColorState::Yellow);
    }
}
