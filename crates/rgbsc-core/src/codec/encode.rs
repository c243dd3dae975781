// crates/rgbsc-core/src/codec/encode.rs

use crate::codec::table::Codec;
use crate::signal::color::ColorState;
use crate::signal::sequence::ColorSequence;

/// Encode one byte with the reference assignment.
///
/// Returns four data colors (most-significant symbol first), each chained
/// from the one before it, followed by the White end mark.
pub fn encode_byte(byte: u8, previous: ColorState) -> [ColorState; 5] {
    Codec::standard().encode_byte(byte, previous)
}

/// Encode a whole buffer from a closed channel; optionally end with Dark.
pub fn encode_bytes(codec: &Codec, bytes: &[u8], close: bool) -> ColorSequence {
    let mut enc = Encoder::new(*codec);
    enc.push_bytes(bytes);
    if close {
        enc.close();
    }
    enc.finish()
}

/// Stateful producer: owns the sequence and the last color written.
#[derive(Clone, Debug)]
pub struct Encoder {
    codec: Codec,
    previous: ColorState,
    sequence: ColorSequence,
    bytes: u64,
}

impl Encoder {
    /// Starts from a closed (Dark) channel.
    pub fn new(codec: Codec) -> Self {
        Self::resume(codec, ColorState::Dark)
    }

    /// Continue a chain whose last emitted color was `previous`.
    pub fn resume(codec: Codec, previous: ColorState) -> Self {
        Self {
            codec,
            previous,
            sequence: ColorSequence::new(),
            bytes: 0,
        }
    }

    pub fn push_byte(&mut self, byte: u8) -> [ColorState; 5] {
        let out = self.codec.encode_byte(byte, self.previous);
        self.sequence.extend_from_slice(&out);
        self.previous = out[4];
        self.bytes += 1;
        out
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push_byte(b);
        }
    }

    /// Append Dark to signal end of transmission. A second call is a no-op.
    pub fn close(&mut self) {
        if self.previous != ColorState::Dark {
            self.sequence.push(ColorState::Dark);
            self.previous = ColorState::Dark;
        }
    }

    pub fn previous(&self) -> ColorState {
        self.previous
    }

    pub fn bytes_encoded(&self) -> u64 {
        self.bytes
    }

    pub fn sequence(&self) -> &ColorSequence {
        &self.sequence
    }

    pub fn finish(self) -> ColorSequence {
        self.sequence
    }
}
