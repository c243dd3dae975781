// crates/rgbsc-core/src/signal/bitpack.rs
//
// MSB-first fixed-width packing. Stored color sequences use 3 bits per color.

use crate::error::{Result, RgbError};
use crate::signal::color::ColorState;

const MAX_WIDTH: u8 = 8;

/// Bits per stored color.
pub const COLOR_BITS: u8 = 3;

/// Pack `codes`, each exactly `width` bits wide, into a byte stream.
///
/// The first bit written becomes the MSB of `out[0]`; a short final byte is
/// zero-padded on the right.
pub fn pack_codes(width: u8, codes: &[u8]) -> Result<Vec<u8>> {
    check_width(width)?;
    let mask = ((1u16 << width) - 1) as u8;

    let total_bits = codes
        .len()
        .checked_mul(width as usize)
        .ok_or_else(|| RgbError::Validation("pack_codes overflow".into()))?;
    let mut out = vec![0u8; total_bits.div_ceil(8)];

    let mut cursor = 0usize;
    for &code in codes {
        if code & !mask != 0 {
            return Err(RgbError::Validation(format!(
                "code out of range: code={code} width={width}"
            )));
        }
        for b in (0..width).rev() {
            if (code >> b) & 1 == 1 {
                out[cursor / 8] |= 0x80 >> (cursor % 8);
            }
            cursor += 1;
        }
    }

    Ok(out)
}

/// Inverse of `pack_codes` for the same `(width, count)`.
pub fn unpack_codes(width: u8, packed: &[u8], count: usize) -> Result<Vec<u8>> {
    check_width(width)?;

    let total_bits = count
        .checked_mul(width as usize)
        .ok_or_else(|| RgbError::Validation("unpack_codes overflow".into()))?;
    let need = total_bits.div_ceil(8);
    if packed.len() < need {
        return Err(RgbError::Validation(format!(
            "unpack_codes short: need {need} bytes for {count} codes ({width} bits each), got {}",
            packed.len()
        )));
    }

    let mut out = Vec::with_capacity(count);
    let mut cursor = 0usize;
    for _ in 0..count {
        let mut code = 0u8;
        for _ in 0..width {
            let bit = (packed[cursor / 8] >> (7 - cursor % 8)) & 1;
            code = (code << 1) | bit;
            cursor += 1;
        }
        out.push(code);
    }

    Ok(out)
}

pub fn pack_colors(colors: &[ColorState]) -> Result<Vec<u8>> {
    let codes: Vec<u8> = colors.iter().map(|c| c.bits()).collect();
    pack_codes(COLOR_BITS, &codes)
}

pub fn unpack_colors(packed: &[u8], count: usize) -> Result<Vec<ColorState>> {
    let codes = unpack_codes(COLOR_BITS, packed, count)?;
    Ok(codes.into_iter().map(ColorState::from_bits).collect())
}

#[inline]
fn check_width(width: u8) -> Result<()> {
    if width == 0 || width > MAX_WIDTH {
        return Err(RgbError::Validation(format!(
            "code width must be in 1..=8, got {width}"
        )));
    }
    Ok(())
}
