#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Output};

/// Stands in for dirac: echoes its arguments, rejects `foo`.
const FAKE_DIRAC: &str = r#"#!/bin/sh
if [ "$2" = "foo" ]; then
    echo "Unexpected token: foo"
    echo "diag: bad token" >&2
    exit 1
fi
printf '%s\n' "$*"
"#;

fn diractex(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_diractex"))
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to run diractex")
}

// One test function: the script must not be written while another thread
// in this binary is spawning processes.
#[test]
fn test_drivers_against_fake_dirac() {
    let dir = tempfile::tempdir().unwrap();
    let bin = dir.path().join("bin");
    fs::create_dir(&bin).unwrap();
    let dirac = bin.join("dirac");
    fs::write(&dirac, FAKE_DIRAC).unwrap();
    fs::set_permissions(&dirac, fs::Permissions::from_mode(0o755)).unwrap();

    // Relative executable path, custom output name, no PDF.
    let output = diractex(&["tests", "bin/dirac", "report", "--no-typeset"], dir.path());
    assert_eq!(output.status.code(), Some(0), "{:?}", output);
    // dirac's stderr reaches the terminal but never the document.
    assert!(String::from_utf8_lossy(&output.stderr).contains("diag: bad token"));
    let tex = fs::read_to_string(dir.path().join("report.tex")).unwrap();
    assert!(!tex.contains("diag: bad token"));
    assert!(tex.starts_with("\\documentclass[aps,prd,a4paper]{revtex4-2}\n"));
    assert!(tex.ends_with("\\end{document}"));
    assert!(tex.contains(
        "Invalid input\n\\begin{equation}\nfoo = \\verb|Unexpected token: foo|\n\\end{equation}\n\n"
    ));
    assert!(tex.contains(
        "Kronecker trace\n\\begin{equation}\n\\delta_\\mu^\\mu = -e \\delta_\\mu^\\mu\n\\end{equation}\n\n"
    ));
    assert!(tex.contains("\\gamma^\\mu\\gamma^5 = -e \\gamma^\\mu\\gamma5\n"));
    assert_eq!(tex.matches("\\begin{equation}").count(), 20);
    assert_eq!(tex.matches("\\begin{split}").count(), 6);

    // `.tex` suffix is kept as given.
    let output = diractex(&["tests", "bin/dirac", "named.tex", "--no-typeset"], dir.path());
    assert!(output.status.success());
    assert!(dir.path().join("named.tex").exists());
    assert!(!dir.path().join("named.tex.tex").exists());

    // Fierz table: 275 wrapped equations, no descriptions.
    let output = diractex(&["fierz", "bin/dirac", "--no-typeset"], dir.path());
    assert!(output.status.success());
    let tex = fs::read_to_string(dir.path().join("fierz6.tex")).unwrap();
    assert_eq!(tex.matches("\\begin{split}").count(), 275);
    assert!(tex.contains(
        "\\begin{equation}\n\\begin{split}\n1*1*1*1*1 = -e 1*1*1*1*1 -l 4\n\\end{split}\n\\end{equation}\n\\begin{equation}"
    ));
    assert!(tex.contains(
        "\\gamma^5*1*\\gamma_\\mu*1*\\gamma^5\\gamma^\\mu = -e \\gamma5*1*\\gamma_\\mu*1*\\gamma5\\gamma^\\mu -l 4\n"
    ));

    // JSON cases, direct launch, output named after the cases file.
    fs::write(
        dir.path().join("sandwich.json"),
        r#"[{"description": "Quoted", "expression": "a \"b\"", "mode": "rational", "apply_symmetry": false}]"#,
    )
    .unwrap();
    let output = diractex(
        &["run", "bin/dirac", "sandwich.json", "--no-typeset", "--direct"],
        dir.path(),
    );
    assert!(output.status.success());
    let tex = fs::read_to_string(dir.path().join("sandwich.tex")).unwrap();
    assert!(tex.contains("Quoted\n\\begin{equation}\na \"b\" = -e a \"b\" -m rational -s false\n\\end{equation}"));

    // A missing typesetting engine does not change the exit status.
    let output = diractex(
        &["tests", "bin/dirac", "--engine", "definitely-not-a-tex-engine"],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("tests.tex").exists());
}
