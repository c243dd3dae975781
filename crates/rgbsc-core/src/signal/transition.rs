// crates/rgbsc-core/src/signal/transition.rs
//
// The reference transition rule. Every two bits of payload are carried by a
// change of color, so the next color depends only on the symbol and the
// color that preceded it. Encode and decode both read `offset_for`.

use crate::signal::color::ColorState;

/// Data colors in ring order; ring index == the color's data slot.
pub const DATA_RING: [ColorState; 5] = [
    ColorState::Blue,
    ColorState::Green,
    ColorState::Cyan,
    ColorState::Red,
    ColorState::Magenta,
];

pub const RING_LEN: u8 = DATA_RING.len() as u8;

/// A 2-bit payload unit (0..=3).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol(u8);

impl Symbol {
    pub const ALL: [Symbol; 4] = [Symbol(0), Symbol(1), Symbol(2), Symbol(3)];

    /// Masks to the low two bits.
    #[inline]
    pub const fn new(v: u8) -> Self {
        Symbol(v & 0x03)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Split a byte into four symbols, most-significant pair first.
#[inline]
pub fn split_byte(byte: u8) -> [Symbol; 4] {
    [
        Symbol::new(byte >> 6),
        Symbol::new(byte >> 4),
        Symbol::new(byte >> 2),
        Symbol::new(byte),
    ]
}

/// Inverse of `split_byte`.
#[inline]
pub fn join_symbols(symbols: [Symbol; 4]) -> u8 {
    symbols.iter().fold(0u8, |acc, s| (acc << 2) | s.value())
}

/// Non-data observations from `recover_symbol`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    /// Same color as before: the channel has not advanced yet.
    Idle,
    /// End-of-byte mark (White in the standard assignment).
    Mark1,
    /// Alternate mark (Yellow in the standard assignment).
    Mark2,
    /// Dark: the link is down or the transmission ended.
    ChannelClosed,
}

/// Which mark terminated a decoded byte. Both end a byte; the distinction is
/// kept for a parity/marking layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mark {
    One,
    Two,
}

impl Mark {
    pub fn from_signal(s: Signal) -> Option<Mark> {
        match s {
            Signal::Mark1 => Some(Mark::One),
            Signal::Mark2 => Some(Mark::Two),
            Signal::Idle | Signal::ChannelClosed => None,
        }
    }
}

/// Ring rotation applied after `previous`.
///
/// Data-color predecessors rotate by (ring index + 1), so the four symbols
/// land on the four slots other than `previous` itself.
pub const fn offset_for(previous: ColorState) -> u8 {
    match previous {
        ColorState::Dark => 0,
        ColorState::Blue => 1,
        ColorState::Green => 2,
        ColorState::Cyan => 3,
        ColorState::Red => 4,
        ColorState::Magenta => 5,
        ColorState::Yellow => 0,
        ColorState::White => 0,
    }
}

/// Ring slot of a data color; `None` for Dark and the marks.
pub const fn ring_index(color: ColorState) -> Option<u8> {
    match color {
        ColorState::Blue => Some(0),
        ColorState::Green => Some(1),
        ColorState::Cyan => Some(2),
        ColorState::Red => Some(3),
        ColorState::Magenta => Some(4),
        ColorState::Dark | ColorState::Yellow | ColorState::White => None,
    }
}

#[inline]
pub const fn is_data_color(color: ColorState) -> bool {
    ring_index(color).is_some()
}

/// Encoder step: the color that carries `symbol` after `previous`.
pub fn next_color(symbol: Symbol, previous: ColorState) -> ColorState {
    let slot = (symbol.value() + offset_for(previous)) % RING_LEN;
    DATA_RING[slot as usize]
}

/// Decoder step: recover the symbol carried by the `previous -> incoming` transition.
pub fn recover_symbol(incoming: ColorState, previous: ColorState) -> Result<Symbol, Signal> {
    if incoming == previous {
        return Err(Signal::Idle);
    }
    let base = match incoming {
        ColorState::Dark => return Err(Signal::ChannelClosed),
        ColorState::Yellow => return Err(Signal::Mark2),
        ColorState::White => return Err(Signal::Mark1),
        ColorState::Blue => 0,
        ColorState::Green => 1,
        ColorState::Cyan => 2,
        ColorState::Red => 3,
        ColorState::Magenta => 4,
    };
    Ok(Symbol::new(ring_distance(base, offset_for(previous)) % 4))
}

/// `(base - offset) mod 5` without unsigned underflow. A result of 4 marks a
/// slot the encoder never produces after that predecessor.
#[inline]
pub(crate) fn ring_distance(base: u8, offset: u8) -> u8 {
    (base as i16 - offset as i16).rem_euclid(RING_LEN as i16) as u8
}
