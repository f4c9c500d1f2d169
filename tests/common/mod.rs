//! Fake FFmpeg used by the integration tests.
//!
//! A single shell script is written once per test binary, before any test
//! spawns a process, so that no test execs a script another thread still has
//! open for writing. Per-test behavior lives in plain files next to the
//! reference image:
//!
//! - `stdout.txt`: printed when the filtergraph contains the `ssim` filter
//! - `stderr.txt`: printed to stderr
//! - `exit_code`: process exit code, 0 when absent
//! - `sleep`: seconds to hang before doing anything else; the hanging
//!   process writes its PID to `pid`
//!
//! The script records its argv, one per line, in `args.txt` and creates the
//! file following `-y`.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use tempfile::TempDir;
use image_diff_lib::DiffEngine;

pub const STATS_LINE: &str = "n:1 R:0.987654 G:0.991234 B:0.989000 All:0.989296 (17.4)\n";

const SCRIPT: &str = r#"#!/bin/sh
dir=$(dirname "$4")
printf '%s\n' "$@" > "$dir/args.txt"
if [ -f "$dir/sleep" ]; then
  echo $$ > "$dir/pid"
  exec sleep "$(cat "$dir/sleep")"
fi
if [ ! -f "$4" ]; then
  echo "$4: No such file or directory" >&2
  exit 1
fi
prev=""
for arg in "$@"; do
  if [ "$prev" = "-y" ]; then : > "$arg"; fi
  prev="$arg"
done
case "$8" in
  *ssim=stats_file=-*) [ -f "$dir/stdout.txt" ] && cat "$dir/stdout.txt" ;;
esac
[ -f "$dir/stderr.txt" ] && cat "$dir/stderr.txt" >&2
exit "$(cat "$dir/exit_code" 2>/dev/null || echo 0)"
"#;

lazy_static! {
    static ref SCRIPT_DIR: TempDir = {
        let dir = tempfile::tempdir().expect("create script dir");
        let path = dir.path().join("fake-ffmpeg");
        fs::write(&path, SCRIPT).expect("write fake ffmpeg");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake ffmpeg");
        dir
    };
}

pub fn fake_engine() -> DiffEngine {
    DiffEngine::with_program(SCRIPT_DIR.path().join("fake-ffmpeg"))
}

/// Working directory holding a reference and a comparison image.
pub struct Scenario {
    pub dir: TempDir,
}

impl Scenario {
    pub fn new() -> Self {
        // Force the script onto disk before any file of this test exists.
        let _ = &*SCRIPT_DIR;
        let dir = tempfile::tempdir().expect("create scenario dir");
        fs::write(dir.path().join("reference.png"), b"ref").expect("write reference");
        fs::write(dir.path().join("comparison.png"), b"cmp").expect("write comparison");
        Self { dir }
    }

    pub fn with_stdout(self, stdout: &str) -> Self {
        fs::write(self.dir.path().join("stdout.txt"), stdout).expect("write stdout");
        self
    }

    pub fn with_stderr(self, stderr: &str) -> Self {
        fs::write(self.dir.path().join("stderr.txt"), stderr).expect("write stderr");
        self
    }

    pub fn with_exit_code(self, code: i32) -> Self {
        fs::write(self.dir.path().join("exit_code"), code.to_string()).expect("write exit code");
        self
    }

    pub fn with_sleep(self, secs: u32) -> Self {
        fs::write(self.dir.path().join("sleep"), secs.to_string()).expect("write sleep");
        self
    }

    /// PID of the hanging engine, once it has started.
    pub fn recorded_pid(&self) -> Option<u32> {
        fs::read_to_string(self.dir.path().join("pid"))
            .ok()
            .and_then(|pid| pid.trim().parse().ok())
    }

    pub fn reference(&self) -> PathBuf {
        self.dir.path().join("reference.png")
    }

    pub fn comparison(&self) -> PathBuf {
        self.dir.path().join("comparison.png")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Arguments the fake engine was called with.
    pub fn recorded_args(&self) -> Vec<String> {
        read_args(self.dir.path())
    }
}

pub fn read_args(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("args.txt"))
        .expect("fake ffmpeg was not run")
        .lines()
        .map(str::to_string)
        .collect()
}
