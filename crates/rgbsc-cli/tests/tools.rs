use std::process::Command;

fn rgbsc(args: &[&str]) -> (bool, String, String) {
    let out = Command::new(env!("CARGO_BIN_EXE_rgbsc-cli"))
        .args(args)
        .output()
        .expect("run rgbsc-cli");
    (
        out.status.success(),
        String::from_utf8(out.stdout).expect("utf8 stdout"),
        String::from_utf8(out.stderr).expect("utf8 stderr"),
    )
}

#[test]
fn table_passes_for_standard_profile() {
    let (ok, stdout, stderr) = rgbsc(&["table"]);
    assert!(ok, "stderr:\n{stderr}");
    assert!(stderr.contains("table ok: entries=32"));
    // header + 8 section lines + 32 entries
    assert_eq!(stdout.lines().count(), 41);
    assert!(!stdout.lines().any(|l| l.starts_with('!')));
}

#[test]
fn show_prints_reference_chain_for_h() {
    let (ok, stdout, _) = rgbsc(&["show", "--text", "H"]);
    assert!(ok);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("48 'H' = 01001000 |  G  C  B  G |W|"));
    assert_eq!(lines.next(), Some("close             | _D_"));
    assert_eq!(lines.next(), Some("G C B G W D"));
}

#[test]
fn sim_is_repeatable_and_lossless() {
    let args = ["sim", "--text", "timing insensitive", "--seed", "9", "--max-hold", "5", "--dump"];
    let (ok1, out1, err1) = rgbsc(&args);
    let (ok2, out2, _) = rgbsc(&args);
    assert!(ok1, "stderr:\n{err1}");
    assert!(ok2);
    assert_eq!(out1, out2);
    assert_eq!(out1.lines().nth(1), Some("timing insensitive"));
    assert!(err1.contains("sim ok:"));
}

#[test]
fn profile_write_show_and_use() {
    let dir = tempfile::tempdir().unwrap();
    let prof = dir.path().join("yellow.rgbp");
    let prof_s = prof.to_str().unwrap();

    let (ok, _, stderr) = rgbsc(&["profile", "write", "--out", prof_s, "--end-mark", "yellow", "--max-idle", "16"]);
    assert!(ok, "stderr:\n{stderr}");
    assert!(stderr.contains("profile ok:"));

    let (ok, stdout, _) = rgbsc(&["profile", "show", "--in", prof_s]);
    assert!(ok);
    assert!(stdout.contains("end_mark   = Yellow"));
    assert!(stdout.contains("max_idle   = 16"));

    let (ok, stdout, _) = rgbsc(&["show", "--text", "H", "--profile", prof_s, "--no-close"]);
    assert!(ok);
    assert_eq!(stdout.lines().last(), Some("G C B G Y"));

    let (ok, _, _) = rgbsc(&["table", "--profile", prof_s]);
    assert!(ok);
}

#[test]
fn corrupt_profile_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let prof = dir.path().join("bad.rgbp");
    std::fs::write(&prof, b"RGP1 not really a profile").unwrap();
    let (ok, _, stderr) = rgbsc(&["table", "--profile", prof.to_str().unwrap()]);
    assert!(!ok);
    assert!(stderr.contains("decode profile"), "stderr:\n{stderr}");
}
