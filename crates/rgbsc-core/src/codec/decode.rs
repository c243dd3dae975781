// crates/rgbsc-core/src/codec/decode.rs
//
// Byte framing on the receive side. A byte is every data transition seen
// since the last mark; repeats are idle, Dark closes the channel.

use thiserror::Error;
use tracing::{debug, warn};

use crate::codec::table::Codec;
use crate::signal::color::ColorState;
use crate::signal::transition::{Mark, Signal};

/// Read position plus the color observed just before it. The two always move together.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub index: usize,
    pub previous: ColorState,
}

impl Cursor {
    /// Beginning of a sequence; the channel is assumed closed beforehand.
    pub const fn start() -> Self {
        Self { index: 0, previous: ColorState::Dark }
    }

    /// Position `index`, seeded from the element before it (Dark at 0).
    pub fn at(seq: &[ColorState], index: usize) -> Self {
        let previous = index
            .checked_sub(1)
            .and_then(|i| seq.get(i))
            .copied()
            .unwrap_or(ColorState::Dark);
        Self { index, previous }
    }

    #[inline]
    fn advance(self, incoming: ColorState) -> Self {
        Self { index: self.index + 1, previous: incoming }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::start()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecodedByte {
    pub value: u8,
    /// Mark that ended the byte.
    pub mark: Mark,
    /// Data symbols received; fewer than 4 means the sender marked early.
    pub symbols: u8,
    /// Idle samples skipped while assembling this byte.
    pub idle: u32,
}

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("channel closed at index {index}")]
    Closed { index: usize },

    #[error("channel closed mid-byte at index {index}; {symbols} symbol(s) discarded")]
    ClosedMidByte { index: usize, symbols: u8 },

    #[error("sequence ended at index {index} before a mark; {symbols} symbol(s) pending")]
    Truncated { index: usize, symbols: u8 },

    #[error("channel stalled at index {index} after {idle} idle samples")]
    Stalled { index: usize, idle: u32 },

    #[error("missing mark at index {index}: fifth data transition in one byte")]
    MissingMark { index: usize },

    #[error("unreachable transition {previous} -> {incoming} at index {index}")]
    UnreachableTransition {
        index: usize,
        previous: ColorState,
        incoming: ColorState,
    },
}

impl DecodeError {
    /// Index of the element that ended decoding (sequence length for `Truncated`).
    pub fn index(&self) -> usize {
        match *self {
            DecodeError::Closed { index }
            | DecodeError::ClosedMidByte { index, .. }
            | DecodeError::Truncated { index, .. }
            | DecodeError::Stalled { index, .. }
            | DecodeError::MissingMark { index }
            | DecodeError::UnreachableTransition { index, .. } => index,
        }
    }
}

/// Partial byte state shared by the slice decoder and the incremental `Decoder`.
#[derive(Copy, Clone, Debug, Default)]
struct ByteAccumulator {
    value: u8,
    symbols: u8,
    idle: u32,
    /// Consecutive idle samples since the last symbol or mark.
    run: u32,
}

impl ByteAccumulator {
    fn feed(
        &mut self,
        codec: &Codec,
        incoming: ColorState,
        previous: ColorState,
        index: usize,
    ) -> Result<Option<DecodedByte>, DecodeError> {
        match codec.recover_symbol(incoming, previous) {
            Ok(sym) => {
                if codec.strict() && !codec.is_reachable(incoming, previous) {
                    return Err(DecodeError::UnreachableTransition { index, previous, incoming });
                }
                if self.symbols == 4 {
                    return Err(DecodeError::MissingMark { index });
                }
                self.value = (self.value << 2) | sym.value();
                self.symbols += 1;
                self.run = 0;
                Ok(None)
            }
            Err(Signal::Idle) => {
                self.idle += 1;
                self.run += 1;
                if self.run > codec.max_idle() {
                    return Err(DecodeError::Stalled { index, idle: self.run });
                }
                Ok(None)
            }
            Err(Signal::ChannelClosed) => {
                if self.symbols == 0 {
                    Err(DecodeError::Closed { index })
                } else {
                    Err(DecodeError::ClosedMidByte { index, symbols: self.symbols })
                }
            }
            Err(Signal::Mark1) => Ok(Some(self.take(Mark::One))),
            Err(Signal::Mark2) => Ok(Some(self.take(Mark::Two))),
        }
    }

    fn take(&mut self, mark: Mark) -> DecodedByte {
        let out = DecodedByte {
            value: self.value,
            mark,
            symbols: self.symbols,
            idle: self.idle,
        };
        *self = Self::default();
        out
    }
}

/// Decode one byte with the reference assignment. See `Codec::decode_byte`.
pub fn decode_byte(seq: &[ColorState], cursor: Cursor) -> Result<(DecodedByte, Cursor), DecodeError> {
    Codec::standard().decode_byte(seq, cursor)
}

/// Decode bytes until the channel closes or the input ends on a byte boundary.
pub fn decode_stream(codec: &Codec, seq: &[ColorState]) -> Result<DecodedStream, DecodeError> {
    codec.decode_stream(seq)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedStream {
    pub bytes: Vec<u8>,
    /// Bytes ended by the alternate mark.
    pub alt_marks: usize,
    /// Bytes ended with fewer than four symbols.
    pub short_bytes: usize,
    /// Total idle samples skipped inside bytes.
    pub idle: u64,
    /// Elements consumed, including a closing Dark.
    pub consumed: usize,
    /// Whether decoding stopped on Dark rather than end of input.
    pub closed: bool,
}

impl Codec {
    /// Assemble one byte starting at `cursor`.
    ///
    /// Every element examined advances the cursor, idle or not. On success
    /// the returned cursor sits just past the mark. Dark ends with `Closed`,
    /// or `ClosedMidByte` if symbols had already arrived (they are dropped).
    /// Running off the end without a mark or Dark yields `Truncated`.
    pub fn decode_byte(
        &self,
        seq: &[ColorState],
        cursor: Cursor,
    ) -> Result<(DecodedByte, Cursor), DecodeError> {
        let mut acc = ByteAccumulator::default();
        let mut cur = cursor;
        while let Some(&incoming) = seq.get(cur.index) {
            let step = acc.feed(self, incoming, cur.previous, cur.index);
            cur = cur.advance(incoming);
            if let Some(byte) = step? {
                return Ok((byte, cur));
            }
        }
        Err(DecodeError::Truncated { index: cur.index, symbols: acc.symbols })
    }

    /// Decode from the start of `seq` until Dark or until the input ends
    /// between bytes. Everything after a closing Dark is ignored.
    pub fn decode_stream(&self, seq: &[ColorState]) -> Result<DecodedStream, DecodeError> {
        let mut out = DecodedStream::default();
        let mut cur = Cursor::start();
        loop {
            match self.decode_byte(seq, cur) {
                Ok((byte, next)) => {
                    out.bytes.push(byte.value);
                    out.idle += byte.idle as u64;
                    if byte.mark == Mark::Two {
                        out.alt_marks += 1;
                    }
                    if byte.symbols < 4 {
                        out.short_bytes += 1;
                    }
                    cur = next;
                }
                Err(DecodeError::Closed { index }) => {
                    debug!(index, bytes = out.bytes.len(), "channel closed");
                    out.consumed = index + 1;
                    out.closed = true;
                    return Ok(out);
                }
                Err(DecodeError::Truncated { index, symbols: 0 }) => {
                    debug!(index, bytes = out.bytes.len(), "input ended on byte boundary");
                    out.consumed = index;
                    return Ok(out);
                }
                Err(e) => {
                    warn!(error = %e, bytes = out.bytes.len(), "decode failed");
                    return Err(e);
                }
            }
        }
    }
}

/// Incremental decoder fed one observed color at a time.
///
/// After any error the partial byte is dropped and decoding continues from
/// the color just observed; after Dark the next lit color starts a new
/// transmission.
#[derive(Clone, Debug)]
pub struct Decoder {
    codec: Codec,
    cursor: Cursor,
    acc: ByteAccumulator,
}

impl Decoder {
    pub fn new(codec: Codec) -> Self {
        Self {
            codec,
            cursor: Cursor::start(),
            acc: ByteAccumulator::default(),
        }
    }

    pub fn push(&mut self, incoming: ColorState) -> Result<Option<DecodedByte>, DecodeError> {
        let step = self
            .acc
            .feed(&self.codec, incoming, self.cursor.previous, self.cursor.index);
        self.cursor = self.cursor.advance(incoming);
        if let Err(e) = &step {
            debug!(error = %e, "decoder reset");
            self.acc = ByteAccumulator::default();
        }
        step
    }

    /// Samples consumed so far and the last color seen.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Symbols held for the byte in progress.
    pub fn pending_symbols(&self) -> u8 {
        self.acc.symbols
    }
}
