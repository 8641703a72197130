#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

pub fn fixture(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create fixture");
    file.write_all(content).expect("write fixture");
    file.flush().expect("flush fixture");
    file
}

/// Run the binary with `args`, feeding `stdin`, isolated from any user config.
pub fn seqtab(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_seqtab"))
        .args(args)
        .env(
            "SEQTAB_CONFIG",
            Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/no-such-config.toml"),
        )
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn seqtab");

    // The process may exit before reading stdin, e.g. on a usage error.
    let _ = child.stdin.take().expect("stdin").write_all(stdin);
    child.wait_with_output().expect("wait for seqtab")
}

pub fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "seqtab failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("utf-8 output")
}
