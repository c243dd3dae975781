// crates/rgbsc-core/tests/profile_format.rs

use rgbsc_core::profile::defaults::standard_profile;
use rgbsc_core::profile::format::{decode, encode, profile_id_hex};
use rgbsc_core::{encode_bytes, Codec, ColorState};

#[test]
fn custom_profile_survives_storage() {
    let mut p = standard_profile();
    p.end_mark = ColorState::Yellow;
    p.alt_mark = ColorState::White;
    p.max_idle = 77;
    p.strict = true;

    let bytes = encode(&p);
    let back = decode(&bytes).expect("decode ok");
    assert_eq!(back, p);
    assert_eq!(profile_id_hex(&back), profile_id_hex(&p));
}

#[test]
fn corrupted_profile_is_rejected() {
    let mut bytes = encode(&standard_profile());
    bytes[8] ^= 0x01;
    let err = decode(&bytes).unwrap_err();
    assert!(format!("{err}").contains("crc32 mismatch"));

    let mut bytes = encode(&standard_profile());
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    assert!(format!("{}", decode(&bytes).unwrap_err()).contains("blake3"));

    assert!(decode(b"NOPE").is_err());
    let short = encode(&standard_profile());
    assert!(decode(&short[..20]).is_err());
}

#[test]
fn swapped_marks_change_the_wire_but_not_the_bytes() {
    let standard = Codec::standard();
    let mut p = standard_profile();
    p.end_mark = ColorState::Yellow;
    p.alt_mark = ColorState::White;
    let alt = Codec::new(&p).unwrap();

    let a = encode_bytes(&standard, b"mark", true);
    let b = encode_bytes(&alt, b"mark", true);
    assert_ne!(a, b);
    assert_eq!(alt.decode_stream(&b).unwrap().bytes, b"mark");

    // The standard decoder still reads the bytes; it just sees Mark2 each time.
    let out = standard.decode_stream(&b).unwrap();
    assert_eq!(out.bytes, b"mark");
    assert_eq!(out.alt_marks, 4);
}

#[test]
fn trailing_bytes_after_id_are_rejected() {
    let p = standard_profile();
    let mut bytes = encode(&p);
    bytes.extend_from_slice(&[0xAB; 16]);
    let err = decode(&bytes).unwrap_err();
    assert!(format!("{err}").contains("trailing bytes"));
}
