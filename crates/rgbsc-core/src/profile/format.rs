// crates/rgbsc-core/src/profile/format.rs

use crate::error::{Result, RgbError};
use crate::profile::checksum::{blake3_16, crc32, hex16};
use crate::profile::profile::Profile;
use crate::signal::color::ColorState;

const MAGIC: &[u8; 4] = b"RGP1";

const FLAG_STRICT: u16 = 0x0001;
const KNOWN_FLAGS: u16 = FLAG_STRICT;

/// Size of an encoded profile; the layout has no variable-length parts.
pub const ENCODED_LEN: usize = 4 + 2 + 2 + 5 + 8 + 1 + 1 + 4 + 4 + 16;

/// Binary-stable profile layout (little-endian):
/// MAGIC[4]
/// version:u16
/// flags:u16          (bit0 = strict)
/// ring:[u8;5]        (3-bit color codes)
/// offsets:[u8;8]     (indexed by previous color code)
/// end_mark:u8
/// alt_mark:u8
/// max_idle:u32
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
///
/// Encoding does not validate; `decode` checks framing and checksums only.
pub fn encode(p: &Profile) -> Vec<u8> {
    let mut b = Vec::with_capacity(ENCODED_LEN);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&p.version.to_le_bytes());

    let flags: u16 = if p.strict { FLAG_STRICT } else { 0 };
    b.extend_from_slice(&flags.to_le_bytes());

    b.extend(p.ring.iter().map(|c| c.bits()));
    b.extend_from_slice(&p.offsets);
    b.push(p.end_mark.bits());
    b.push(p.alt_mark.bits());
    b.extend_from_slice(&p.max_idle.to_le_bytes());

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());

    let h = blake3_16(&b);
    b.extend_from_slice(&h);

    b
}

pub fn decode(bytes: &[u8]) -> Result<Profile> {
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(RgbError::ProfileFormat("bad magic".into()));
    }
    let mut i = 4usize;

    let version = read_u16(bytes, &mut i)?;
    let flags = read_u16(bytes, &mut i)?;
    if flags & !KNOWN_FLAGS != 0 {
        return Err(RgbError::ProfileFormat(format!("unknown flags 0x{flags:04x}")));
    }

    let mut ring = [ColorState::Dark; 5];
    for slot in ring.iter_mut() {
        *slot = read_color(bytes, &mut i)?;
    }

    need(bytes, i, 8)?;
    let mut offsets = [0u8; 8];
    offsets.copy_from_slice(&bytes[i..i + 8]);
    i += 8;

    let end_mark = read_color(bytes, &mut i)?;
    let alt_mark = read_color(bytes, &mut i)?;
    let max_idle = read_u32(bytes, &mut i)?;

    let crc_expected = read_u32(bytes, &mut i)?;
    let crc_actual = crc32(&bytes[0..(i - 4)]);
    if crc_expected != crc_actual {
        return Err(RgbError::ProfileFormat("crc32 mismatch".into()));
    }

    if bytes.len() < i + 16 {
        return Err(RgbError::ProfileFormat("missing blake3".into()));
    }
    if bytes.len() != i + 16 {
        return Err(RgbError::ProfileFormat("trailing bytes after blake3".into()));
    }
    let mut h_expected = [0u8; 16];
    h_expected.copy_from_slice(&bytes[i..i + 16]);
    if h_expected != blake3_16(&bytes[0..i]) {
        return Err(RgbError::ProfileFormat("blake3 mismatch".into()));
    }

    Ok(Profile {
        version,
        ring,
        offsets,
        end_mark,
        alt_mark,
        max_idle,
        strict: flags & FLAG_STRICT != 0,
    })
}

/// Stable profile identifier: the trailing blake3_16 that `encode()` appends.
pub fn profile_id_16(p: &Profile) -> [u8; 16] {
    let enc = encode(p);
    let mut out = [0u8; 16];
    out.copy_from_slice(&enc[enc.len() - 16..]);
    out
}

pub fn profile_id_hex(p: &Profile) -> String {
    hex16(&profile_id_16(p))
}

/// Read the id of an encoded profile without decoding it.
pub fn profile_id_16_from_encoded(encoded: &[u8]) -> Result<[u8; 16]> {
    if encoded.len() < 16 {
        return Err(RgbError::ProfileFormat("encoded profile too small for id".into()));
    }
    let mut out = [0u8; 16];
    out.copy_from_slice(&encoded[encoded.len() - 16..]);
    Ok(out)
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(RgbError::ProfileFormat("unexpected eof".into()));
    }
    Ok(())
}

fn read_color(bytes: &[u8], i: &mut usize) -> Result<ColorState> {
    need(bytes, *i, 1)?;
    let code = bytes[*i];
    *i += 1;
    ColorState::try_from_bits(code)
        .map_err(|_| RgbError::ProfileFormat(format!("bad color code {code}")))
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    need(bytes, *i, 2)?;
    let v = u16::from_le_bytes([bytes[*i], bytes[*i + 1]]);
    *i += 2;
    Ok(v)
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    need(bytes, *i, 4)?;
    let v = u32::from_le_bytes([bytes[*i], bytes[*i + 1], bytes[*i + 2], bytes[*i + 3]]);
    *i += 4;
    Ok(v)
}
