use thiserror::Error;

use crate::codec::decode::DecodeError;

pub type Result<T> = std::result::Result<T, RgbError>;

#[derive(Debug, Error)]
pub enum RgbError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("profile format error: {0}")]
    ProfileFormat(String),

    #[error("color text error: {0}")]
    ColorText(String),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode::decode_byte;
    use crate::codec::decode::Cursor;
    use crate::signal::color::ColorState;

    fn first_byte(seq: &[ColorState]) -> Result<u8> {
        let (byte, _) = decode_byte(seq, Cursor::start())?;
        Ok(byte.value)
    }

    #[test]
    fn decode_errors_lift_into_rgb_error() {
        let err = first_byte(&[ColorState::Green, ColorState::Dark]).unwrap_err();
        assert!(matches!(err, RgbError::Decode(DecodeError::ClosedMidByte { index: 1, symbols: 1 })));
        assert!(format!("{err}").starts_with("decode error:"));
    }
}
