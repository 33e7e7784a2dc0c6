use assert_cmd::prelude::*;
use color_eyre::Result;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Lay out an iPXE tree, a boot file directory and a config pointing at both
fn write_fixture(root: &Path) -> Result<std::path::PathBuf> {
    let ipxe = root.join("ipxe-root");
    fs::create_dir_all(ipxe.join("ipxe/src/bin"))?;
    fs::create_dir_all(ipxe.join("ipxe/src/bin-arm64-efi"))?;
    fs::write(ipxe.join("ipxe/src/bin/undionly.kpxe"), b"undi")?;
    fs::write(ipxe.join("ipxe/src/bin-arm64-efi/snp.efi"), b"arm64 snp")?;

    let files = root.join("rpi4");
    fs::create_dir_all(&files)?;
    fs::write(files.join("config.txt"), b"arm_64bit=1\n")?;
    fs::write(files.join("bootaa64.efi"), b"static copy")?;

    let config = root.join("netboot.yaml");
    fs::write(
        &config,
        format!(
            "ipxe_dir: {}\nboot_files_dir: {}\n",
            ipxe.display(),
            files.display()
        ),
    )?;
    Ok(config)
}

fn netboot(config: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("netboot")?;
    cmd.arg("--config").arg(config).env("RUST_LOG", "off");
    Ok(cmd)
}

#[test]
fn test_resolve_provisioning_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = write_fixture(dir.path())?;

    let output = netboot(&config)?
        .args(["resolve", "aa:bb:cc:dd:ee:ff/0"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("boot loader for x86_pc (code 0): 4 bytes"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_resolve_arm64_override_and_output() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = write_fixture(dir.path())?;
    let out = dir.path().join("served.efi");

    let output = netboot(&config)?
        .args(["resolve", "efi/boot/bootaa64.efi", "--output"])
        .arg(&out)
        .output()?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    assert!(String::from_utf8_lossy(&output.stdout).contains("ARM64 boot loader"));
    assert_eq!(fs::read(&out)?, b"arm64 snp");
    Ok(())
}

#[test]
fn test_resolve_unknown_firmware_fails() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = write_fixture(dir.path())?;

    let output = netboot(&config)?
        .args(["resolve", "aa:bb:cc:dd:ee:ff/9"])
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown firmware type 9"));
    Ok(())
}

#[test]
fn test_oversized_firmware_code_is_provisioning() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = write_fixture(dir.path())?;

    let output = netboot(&config)?
        .args(["resolve", "aa:bb:cc:dd:ee:ff/4294967296"])
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown firmware type 4294967296"));

    let output = netboot(&config)?
        .args(["classify", "aa:bb:cc:dd:ee:ff/4294967296", "--failed", "unknown firmware"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["transfer"]["kind"], "provisioning");
    assert_eq!(json["transfer"]["code"], 4_294_967_296u64);
    assert!(json["event"].is_null());
    Ok(())
}

#[test]
fn test_classify_emits_event_for_provisioning() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = write_fixture(dir.path())?;

    let output = netboot(&config)?
        .args(["classify", "aa:bb:cc:dd:ee:ff/6", "--client", "10.1.2.3:3000"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["transfer"]["kind"], "provisioning");
    assert_eq!(json["event"]["mac"], "aa:bb:cc:dd:ee:ff");
    assert_eq!(json["event"]["state"], "tftp");
    assert!(json["event"]["message"]
        .as_str()
        .unwrap_or_default()
        .contains("10.1.2.3:3000"));
    Ok(())
}

#[test]
fn test_classify_anonymous_has_no_event() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = write_fixture(dir.path())?;

    let output = netboot(&config)?
        .args(["classify", "boot/config.txt", "--failed", "timeout"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["transfer"]["kind"], "anonymous");
    assert_eq!(json["transfer"]["filename"], "config.txt");
    assert!(json["event"].is_null());
    Ok(())
}

#[test]
fn test_firmware_listing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = write_fixture(dir.path())?;

    let output = netboot(&config)?.arg("firmware").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("x86_pc"));
    assert!(stdout.contains("missing"));
    assert!(stdout.contains("2 boot files"));
    Ok(())
}
