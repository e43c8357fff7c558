use std::process::Command;

#[test]
fn cli_mode_with_config_and_dry_run_works() {
    // Get the path to the binary from Cargo
    let binary_path = env!("CARGO_BIN_EXE_guildboard-admin");

    let config_path = format!("{}/config/example.yaml", env!("CARGO_MANIFEST_DIR"));

    let output = Command::new(binary_path)
        .arg("--config")
        .arg(config_path)
        .arg("--dry-run")
        .arg("--log-level")
        .arg("error")
        .output()
        .expect("Failed to start guildboard-admin binary");

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn cli_mode_rejects_missing_config() {
    let binary_path = env!("CARGO_BIN_EXE_guildboard-admin");

    let output = Command::new(binary_path)
        .arg("--config")
        .arg("/nonexistent/guildboard.yaml")
        .arg("--dry-run")
        .output()
        .expect("Failed to start guildboard-admin binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load config"), "unexpected stderr: {}", stderr);
}

#[test]
fn cli_mode_rejects_unknown_module() {
    let binary_path = env!("CARGO_BIN_EXE_guildboard-admin");

    let output = Command::new(binary_path)
        .args(["guild", "module", "42", "stakingModule", "on"])
        .output()
        .expect("Failed to start guildboard-admin binary");

    assert!(!output.status.success());
}
