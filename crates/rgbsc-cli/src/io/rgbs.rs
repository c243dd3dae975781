// crates/rgbsc-cli/src/io/rgbs.rs

use anyhow::Context;
use rgbsc_core::profile::checksum::hex16;
use rgbsc_core::profile::format as profile_format;
use rgbsc_core::signal::bitpack::{pack_colors, unpack_colors};
use rgbsc_core::{ColorSequence, ColorState, Profile};

const MAGIC: &[u8; 4] = b"RGS1";

const FLAG_ZSTD: u16 = 0x0001;

/// Decoded .rgbs contents plus the header facts `inspect` reports.
#[derive(Debug)]
pub struct Rgbs {
    pub profile_id: String,
    pub profile: Profile,
    pub colors: ColorSequence,
    pub compressed: bool,
    pub payload_len: usize,
    pub file_len: usize,
}

/// .rgbs layout (little-endian):
/// MAGIC[4]
/// flags:u16                  (bit0 = payload is zstd-compressed)
/// profile_len:u32
/// profile_bytes[profile_len] (RGP1 blob, carries its own crc + blake3_16)
/// color_count:u64
/// payload_len:u64
/// payload[payload_len]       (3-bit packed colors, optionally zstd)
/// crc32:u32                  (over everything before crc32)
pub fn encode_rgbs(
    profile: &Profile,
    colors: &[ColorState],
    zstd_level: Option<i32>,
) -> anyhow::Result<Vec<u8>> {
    let profile_bytes = profile_format::encode(profile);
    let packed = pack_colors(colors)?;

    let (flags, payload) = match zstd_level {
        Some(level) => (
            FLAG_ZSTD,
            zstd::encode_all(&packed[..], level).context("zstd compress payload")?,
        ),
        None => (0u16, packed),
    };

    let mut out = Vec::with_capacity(4 + 2 + 4 + profile_bytes.len() + 8 + 8 + payload.len() + 4);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&flags.to_le_bytes());
    out.extend_from_slice(&(profile_bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(&profile_bytes);
    out.extend_from_slice(&(colors.len() as u64).to_le_bytes());
    out.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    out.extend_from_slice(&payload);

    let crc = crc32(&out);
    out.extend_from_slice(&crc.to_le_bytes());
    Ok(out)
}

pub fn write_rgbs(
    path: &str,
    profile: &Profile,
    colors: &ColorSequence,
    zstd_level: Option<i32>,
) -> anyhow::Result<usize> {
    let bytes = encode_rgbs(profile, colors, zstd_level)?;
    std::fs::write(path, &bytes).with_context(|| format!("write {path}"))?;
    Ok(bytes.len())
}

pub fn read_rgbs(path: &str) -> anyhow::Result<Rgbs> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    decode_rgbs(&bytes).with_context(|| format!("decode {path}"))
}

/// Validates magic, file crc32, the embedded profile blob, and the color count.
pub fn decode_rgbs(bytes: &[u8]) -> anyhow::Result<Rgbs> {
    if bytes.len() < 4 + 2 + 4 + 8 + 8 + 4 {
        anyhow::bail!("rgbs too small");
    }
    if &bytes[0..4] != MAGIC {
        anyhow::bail!("bad rgbs magic");
    }

    let crc_off = bytes.len() - 4;
    let crc_expected = u32::from_le_bytes(read_array(bytes, crc_off)?);
    if crc_expected != crc32(&bytes[..crc_off]) {
        anyhow::bail!("rgbs crc32 mismatch");
    }

    let mut i = 4usize;
    let flags = u16::from_le_bytes(read_array(bytes, i)?);
    i += 2;
    if flags & !FLAG_ZSTD != 0 {
        anyhow::bail!("unknown rgbs flags 0x{flags:04x}");
    }

    let profile_len = u32::from_le_bytes(read_array(bytes, i)?) as usize;
    i += 4;
    let profile_end = i
        .checked_add(profile_len)
        .filter(|&end| end <= crc_off)
        .ok_or_else(|| anyhow::anyhow!("rgbs profile_len out of range"))?;
    let profile_blob = &bytes[i..profile_end];
    let profile_id = hex16(&profile_format::profile_id_16_from_encoded(profile_blob)?);
    let profile = profile_format::decode(profile_blob)?;
    i = profile_end;

    let color_count = u64::from_le_bytes(read_array(bytes, i)?) as usize;
    i += 8;
    let payload_len = u64::from_le_bytes(read_array(bytes, i)?) as usize;
    i += 8;
    if i.checked_add(payload_len) != Some(crc_off) {
        anyhow::bail!("rgbs payload_len mismatch");
    }
    let payload = &bytes[i..crc_off];

    let compressed = flags & FLAG_ZSTD != 0;
    let packed = if compressed {
        zstd::decode_all(payload).context("zstd decompress payload")?
    } else {
        payload.to_vec()
    };
    let colors = unpack_colors(&packed, color_count)?;

    Ok(Rgbs {
        profile_id,
        profile,
        colors: ColorSequence::from(colors),
        compressed,
        payload_len,
        file_len: bytes.len(),
    })
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

fn read_array<const N: usize>(bytes: &[u8], at: usize) -> anyhow::Result<[u8; N]> {
    let end = at
        .checked_add(N)
        .filter(|&end| end <= bytes.len())
        .ok_or_else(|| anyhow::anyhow!("unexpected eof"))?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[at..end]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgbsc_core::profile::defaults::standard_profile;
    use rgbsc_core::{encode_bytes, Codec};

    #[test]
    fn plain_and_zstd_payloads_roundtrip() {
        let p = standard_profile();
        let seq = encode_bytes(&Codec::standard(), b"artifact payload", true);
        for level in [None, Some(3)] {
            let bytes = encode_rgbs(&p, &seq, level).unwrap();
            let back = decode_rgbs(&bytes).unwrap();
            assert_eq!(back.colors, seq);
            assert_eq!(back.profile, p);
            assert_eq!(back.compressed, level.is_some());
            assert_eq!(back.profile_id, profile_format::profile_id_hex(&p));
        }
    }

    #[test]
    fn flipped_bit_fails_crc() {
        let seq = encode_bytes(&Codec::standard(), b"x", true);
        let mut bytes = encode_rgbs(&standard_profile(), &seq, None).unwrap();
        let n = bytes.len();
        bytes[n - 6] ^= 0x10;
        let err = decode_rgbs(&bytes).unwrap_err();
        assert!(format!("{err}").contains("crc32"));
    }
}
