use std::path::Path;
use std::process::{Command, Output};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_rgbsc-cli")
}

fn run(args: &[&str]) -> Output {
    let out = Command::new(bin()).args(args).output().expect("run rgbsc-cli");
    assert!(
        out.status.success(),
        "rgbsc-cli {:?} failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        args,
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn p(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

fn roundtrip(fmt: &str, extra: &[&str]) {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.bin");
    let colors = dir.path().join("colors.out");
    let decoded = dir.path().join("out.bin");

    let payload: Vec<u8> = (0..=255u8).chain(b"Genesis: In the beginning".iter().copied()).collect();
    std::fs::write(&input, &payload).unwrap();

    let mut enc = vec!["encode", "--in", p(&input), "--out", p(&colors), "--fmt", fmt];
    enc.extend_from_slice(extra);
    let out = run(&enc);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("encode ok:"), "stderr:\n{stderr}");

    run(&["decode", "--in", p(&colors), "--out", p(&decoded), "--fmt", fmt]);
    assert_eq!(std::fs::read(&decoded).unwrap(), payload);
}

#[test]
fn rgbs_roundtrip() {
    roundtrip("rgbs", &[]);
}

#[test]
fn rgbs_zstd_roundtrip() {
    roundtrip("rgbs", &["--zstd"]);
}

#[test]
fn text_roundtrip() {
    roundtrip("text", &[]);
}

#[test]
fn text_decode_of_hand_written_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let colors = dir.path().join("h.txt");
    let decoded = dir.path().join("h.bin");
    std::fs::write(&colors, "G C B G W\nG C M G W\nD\n").unwrap();

    run(&["decode", "--in", p(&colors), "--out", p(&decoded), "--fmt", "text"]);
    assert_eq!(std::fs::read(&decoded).unwrap(), b"HE");
}

#[test]
fn mid_byte_close_fails_decode() {
    let dir = tempfile::tempdir().unwrap();
    let colors = dir.path().join("cut.txt");
    let decoded = dir.path().join("cut.bin");
    std::fs::write(&colors, "G C B G W G C D").unwrap();

    let out = Command::new(bin())
        .args(["decode", "--in", p(&colors), "--out", p(&decoded), "--fmt", "text"])
        .output()
        .expect("run rgbsc-cli");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("mid-byte"), "stderr:\n{stderr}");
}

#[test]
fn inspect_reports_profile_and_histogram() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let colors = dir.path().join("in.rgbs");
    std::fs::write(&input, b"HELLO").unwrap();
    run(&["encode", "--in", p(&input), "--out", p(&colors)]);

    let out = run(&["inspect", "--in", p(&colors)]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("colors          = 26"), "stdout:\n{stdout}");
    assert!(stdout.contains("self_clocking   = true"));
    assert!(stdout.contains("end_mark        = White"));
    assert!(stdout.contains("White    |W| count=5"));
    assert!(stdout.contains("end_marks       = 5"));
    assert!(stdout.contains("alt_marks       = 0"));
}
