//! Runs the scheduler binary on the instances in `tests/instances`.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) status: ExitStatus,
    pub(crate) output: String,
    pub(crate) log_file: PathBuf,
}

impl Run {
    pub(crate) fn cleanup(self) -> std::io::Result<()> {
        std::fs::remove_file(self.log_file)
    }
}

pub(crate) fn instance_dir(instance: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("instances")
        .join(instance)
}

/// Runs the scheduler on `instance`; `name` distinguishes the log files of different runs on the
/// same instance.
pub(crate) fn run_scheduler(
    instance: &str,
    name: &str,
    args: impl IntoIterator<Item = String>,
) -> Run {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let scheduler = PathBuf::from(env!("CARGO_BIN_EXE_retake-scheduler"));
    let instance_dir = instance_dir(instance);
    let log_file = instance_dir.join(format!("{name}.log"));

    let mut command = Command::new(scheduler);
    let _ = command
        .arg(instance_dir.join("availability.json"))
        .arg(instance_dir.join("roster.json"));

    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .stdout(File::create(&log_file).expect("Failed to create log file."))
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run scheduler.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("scheduler took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting scheduler: {e}"),
    };

    let output = std::fs::read_to_string(&log_file).expect("Failed to read log file.");

    Run {
        status,
        output,
        log_file,
    }
}
