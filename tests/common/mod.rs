#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HAPPY_ANSWERS: &str = "no\nyes\nexample.com\nuser@example.com\nnginx\nyes\n";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
    pub log: PathBuf,
    pub config: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");
        let log = tmp.path().join("logs/certwiz.log");
        let config = tmp.path().join("certwiz.toml");

        Self {
            _tmp: tmp,
            home,
            work,
            log,
            config,
        }
    }

    pub fn write_config(&self, package_manager: &str, certbot: &str) {
        let body = format!(
            "log_file = {:?}\n\n[linux]\npackage_manager = {:?}\n\n[certbot]\nbinary = {:?}\n",
            self.log.to_str().expect("log path utf8"),
            package_manager,
            certbot
        );
        fs::write(&self.config, body).expect("write config");
    }

    // Answers `--version` successfully, fails every other invocation.
    #[cfg(unix)]
    pub fn failing_tool(&self, name: &str, code: i32) -> PathBuf {
        self.tool_script(
            name,
            &format!("echo \"{} failed\" >&2\nexit {}\n", name, code),
        )
    }

    #[cfg(unix)]
    pub fn tool_script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.work.join(name);
        fs::write(
            &path,
            format!(
                "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then exit 0; fi\n{}",
                body
            ),
        )
        .expect("write tool script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod tool script");
        path
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("certwiz");
        cmd.env("HOME", &self.home).current_dir(&self.work);
        cmd
    }

    pub fn configured_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--config").arg(&self.config);
        cmd
    }

    pub fn log_lines(&self) -> Vec<String> {
        read_lines(&self.log)
    }
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
