//! Cross-process determinism test.
//!
//! Spawns the `route_fixture` binary under several environment variants and
//! asserts that all produce identical stdout, equal to the in-process
//! fixture lines. This shows that embedding, search order and hashing are
//! not influenced by process-level state (cwd, locale, env vars, hash seeds).

use std::path::Path;
use std::process::Command;

use lock_tests::canonical_routes::fixture_lines;

/// Resolve the path to the compiled `route_fixture` binary.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("route_fixture");
    if cfg!(target_os = "windows") {
        path.set_extension("exe");
    }
    path.to_string_lossy().to_string()
}

/// Resolve the workspace root.
fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run the binary with the given cwd and environment overrides.
/// Returns stdout as a string.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "route_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(
        baseline.contains("coordinate_digest=sha256:"),
        "baseline output missing coordinate_digest"
    );

    let alt_cwd = std::env::temp_dir();
    let alt_cwd = alt_cwd.to_string_lossy();
    let variant_cwd = run_variant(&alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        &root,
        &[
            ("WAYPOINT_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "output differs with spurious env vars (WAYPOINT_NOISE, TZ, HOME)"
    );
}

#[test]
fn trace_logging_does_not_touch_stdout() {
    let root = workspace_root();
    let quiet = run_variant(&root, &[]);
    let verbose = run_variant(&root, &[("RUST_LOG", "trace")]);
    assert_eq!(quiet, verbose);
}

#[test]
fn crossproc_output_matches_in_process() {
    let root = workspace_root();
    let output = run_variant(&root, &[]);
    let lines: Vec<&str> = output.lines().collect();
    let expected = fixture_lines();
    assert_eq!(lines, expected);
}
