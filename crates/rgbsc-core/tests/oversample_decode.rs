// crates/rgbsc-core/tests/oversample_decode.rs

use rgbsc_core::profile::defaults::standard_profile;
use rgbsc_core::signal::sample::{hold_pattern, oversample};
use rgbsc_core::{encode_bytes, Codec, DecodeError};

#[test]
fn decoding_is_timing_insensitive() {
    let codec = Codec::standard();
    let msg = b"timing does not matter";
    let seq = encode_bytes(&codec, msg, true);

    for seed in [1u64, 7, 42, 0xDEAD_BEEF] {
        let holds = hold_pattern(seed, seq.len(), 6);
        let sampled = oversample(&seq, &holds);
        assert!(sampled.len() >= seq.len());

        let out = codec.decode_stream(&sampled).unwrap();
        assert_eq!(out.bytes, msg, "seed={seed}");
        assert!(out.closed);
        let expected_idle: u64 = holds.iter().map(|&h| h as u64 - 1).sum();
        // Holds on the closing Dark are never reached.
        assert!(out.idle <= expected_idle);
    }
}

#[test]
fn long_hold_trips_stall_limit() {
    let mut p = standard_profile();
    p.max_idle = 3;
    let codec = Codec::new(&p).unwrap();
    let seq = encode_bytes(&codec, b"x", true);
    let sampled = oversample(&seq, &[10]);
    match codec.decode_stream(&sampled) {
        Err(DecodeError::Stalled { idle, .. }) => assert_eq!(idle, 4),
        other => panic!("expected stall, got {other:?}"),
    }
}

#[test]
fn slow_channel_under_stall_limit_decodes() {
    let codec = Codec::standard();
    let seq = encode_bytes(&codec, b"H", true);
    // 299 repeats per color: each run stays under the cap, the byte total does not.
    let sampled = oversample(&seq, &[300]);
    let out = codec.decode_stream(&sampled).unwrap();
    assert_eq!(out.bytes, b"H");
    assert!(out.closed);
    assert!(out.idle > codec.max_idle() as u64);
}

#[test]
fn stall_counts_consecutive_holds_only() {
    let mut p = standard_profile();
    p.max_idle = 3;
    let codec = Codec::new(&p).unwrap();
    let seq = encode_bytes(&codec, b"ok", true);
    let sampled = oversample(&seq, &[4]);
    let out = codec.decode_stream(&sampled).unwrap();
    assert_eq!(out.bytes, b"ok");
}
