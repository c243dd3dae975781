pub mod error;
pub mod validate;

pub mod codec;
pub mod profile;
pub mod signal;

pub use crate::codec::decode::{decode_byte, decode_stream, Cursor, DecodeError, DecodedByte, DecodedStream, Decoder};
pub use crate::codec::encode::{encode_byte, encode_bytes, Encoder};
pub use crate::codec::table::Codec;
pub use crate::profile::profile::Profile;
pub use crate::signal::color::ColorState;
pub use crate::signal::sequence::ColorSequence;
pub use crate::signal::transition::{next_color, offset_for, recover_symbol, Mark, Signal, Symbol};
