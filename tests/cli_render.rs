use std::process::Command;

#[test]
fn test_render_missing_template_warns_once_and_exits_zero() {
    let td = tempfile::tempdir().expect("tmpdir");
    let template = td.path().join("absent.tape.tmpl");
    let output = td.path().join("out.tape");

    let bin = env!("CARGO_BIN_EXE_wt-demos");
    let out = Command::new(bin)
        .args([
            "render",
            "--template",
            template.to_str().expect("utf8 path"),
            "--output",
            output.to_str().expect("utf8 path"),
        ])
        .env("NO_COLOR", "1")
        .output()
        .expect("run wt-demos render");

    assert!(
        out.status.success(),
        "missing template must be a soft skip, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    let warnings = stdout.matches("Warning:").count();
    assert_eq!(warnings, 1, "expected exactly one warning, got:\n{stdout}");
    assert!(
        stdout.contains("skipping VHS recording"),
        "warning must say recording is skipped, got:\n{stdout}"
    );
    assert!(!output.exists(), "skip must not create the output file");
}

#[test]
fn test_render_with_theme_and_set_pairs() {
    let td = tempfile::tempdir().expect("tmpdir");
    let template = td.path().join("demo.tape.tmpl");
    let output = td.path().join("demo.tape");
    std::fs::write(
        &template,
        "Set Theme {{THEME}}\nType \"{{CMD}}\"\ncd {{REPO_DIR}}\n",
    )
    .expect("write template");

    let bin = env!("CARGO_BIN_EXE_wt-demos");
    let out = Command::new(bin)
        .args([
            "render",
            "--template",
            template.to_str().expect("utf8 path"),
            "--output",
            output.to_str().expect("utf8 path"),
            "--theme",
            "dark",
            "--name",
            "merge",
            "--out-dir",
            td.path().to_str().expect("utf8 path"),
            "--set",
            "CMD=wt merge",
        ])
        .env("NO_COLOR", "1")
        .output()
        .expect("run wt-demos render");

    assert!(
        out.status.success(),
        "render failed: stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
    let rendered = std::fs::read_to_string(&output).expect("read rendered tape");
    // Dark background hex from the theme table, substituted via {{THEME}}
    assert!(
        rendered.contains("\"background\":\"#1c1b1a\""),
        "theme JSON missing:\n{rendered}"
    );
    assert!(rendered.contains("Type \"wt merge\""), "--set pair missing");
    let repo = td.path().join(".demo-merge").join("w").join("worktrunk");
    assert!(
        rendered.contains(&format!("cd {}", repo.display())),
        "sandbox repo path missing:\n{rendered}"
    );
    assert!(!rendered.contains("{{"), "unsubstituted tokens left:\n{rendered}");
}

#[test]
fn test_render_unknown_theme_fails() {
    let td = tempfile::tempdir().expect("tmpdir");
    let template = td.path().join("demo.tape.tmpl");
    std::fs::write(&template, "Set Theme {{THEME}}").expect("write template");

    let bin = env!("CARGO_BIN_EXE_wt-demos");
    let out = Command::new(bin)
        .args([
            "render",
            "--template",
            template.to_str().expect("utf8 path"),
            "--output",
            td.path().join("out.tape").to_str().expect("utf8 path"),
            "--theme",
            "solarized",
        ])
        .env("NO_COLOR", "1")
        .output()
        .expect("run wt-demos render");

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("unknown theme"),
        "expected unknown-theme error, got:\n{stderr}"
    );
}

#[test]
fn test_record_missing_recorder_exits_127() {
    let bin = env!("CARGO_BIN_EXE_wt-demos");
    let out = Command::new(bin)
        .args(["record", "--tape", "demo.tape"])
        .env("WT_DEMOS_VHS", "definitely-not-a-recorder-xyz")
        .env("NO_COLOR", "1")
        .output()
        .expect("run wt-demos record");
    assert_eq!(out.status.code(), Some(127));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("not found in PATH"),
        "expected NotFound message, got:\n{stderr}"
    );
}

#[test]
fn test_recorder_flag_wins_over_env() {
    let bin = env!("CARGO_BIN_EXE_wt-demos");
    let out = Command::new(bin)
        .args([
            "record",
            "--tape",
            "demo.tape",
            "--recorder",
            "missing-recorder-from-flag",
            "--verbose",
        ])
        .env("WT_DEMOS_VHS", "missing-recorder-from-env")
        .env("NO_COLOR", "1")
        .output()
        .expect("run wt-demos record");
    assert_eq!(out.status.code(), Some(127));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("missing-recorder-from-flag"),
        "flag should take precedence over WT_DEMOS_VHS, got:\n{stderr}"
    );
}

#[test]
fn test_doctor_reports_collaborators() {
    let bin = env!("CARGO_BIN_EXE_wt-demos");
    let out = Command::new(bin)
        .arg("doctor")
        .env("NO_COLOR", "1")
        .output()
        .expect("run wt-demos doctor");
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("wt-demos doctor"));
    assert!(stderr.contains("git"));
    assert!(stderr.contains("cargo"));
}
