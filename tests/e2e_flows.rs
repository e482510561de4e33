mod common;

use common::{read_lines, TestEnv, HAPPY_ANSWERS};
use predicates::str::contains;
use std::fs;

#[test]
fn help_answer_prints_help_and_exits_zero() {
    let env = TestEnv::new();
    env.cmd()
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(contains("Let's Encrypt Certificate Automation"))
        .stdout(contains("https://certbot.eff.org/"));
    // default log_file lands in the working directory
    assert!(env.work.join("certbot_install.log").exists());
}

#[test]
fn closed_stdin_aborts_with_zero() {
    let env = TestEnv::new();
    env.cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("aborting"));
}

#[test]
fn invalid_config_is_reported() {
    let env = TestEnv::new();
    fs::write(&env.config, "[linux]\npackage_manger = \"apt-get\"\n").unwrap();
    env.configured_cmd()
        .write_stdin(HAPPY_ANSWERS)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("parsing config"));
}

#[test]
fn config_in_home_is_picked_up() {
    let env = TestEnv::new();
    let log = env.home.join("custom.log");
    fs::create_dir_all(env.home.join(".config/certwiz")).unwrap();
    fs::write(
        env.home.join(".config/certwiz/config.toml"),
        format!("log_file = {:?}\n", log.to_str().unwrap()),
    )
    .unwrap();
    env.cmd().write_stdin("yes\n").assert().success();
    assert!(log.exists());
}

#[cfg(target_os = "linux")]
mod linux {
    use super::*;

    #[test]
    fn full_run_obtains_certificate() {
        let env = TestEnv::new();
        env.write_config("true", "true");
        env.configured_cmd()
            .write_stdin(HAPPY_ANSWERS)
            .assert()
            .success()
            .stdout(contains("Certbot installed successfully on Linux!"))
            .stdout(contains("Setup complete!"));

        let lines = env.log_lines();
        assert!(lines
            .iter()
            .any(|l| l.ends_with(" - INFO - Certbot installed successfully on Linux.")));
        assert!(lines.iter().any(|l| l.ends_with(
            " - INFO - Certificate obtained successfully for example.com using nginx mode."
        )));
        assert!(lines
            .iter()
            .all(|l| l.contains(" - INFO - ") || l.contains(" - ERROR - ")));
    }

    #[test]
    fn log_file_is_appended_across_runs() {
        let env = TestEnv::new();
        env.write_config("true", "true");
        env.configured_cmd().write_stdin(HAPPY_ANSWERS).assert().success();
        let first = env.log_lines().len();
        env.configured_cmd().write_stdin(HAPPY_ANSWERS).assert().success();
        assert_eq!(env.log_lines().len(), first * 2);
    }

    #[test]
    fn log_file_flag_overrides_config() {
        let env = TestEnv::new();
        env.write_config("true", "true");
        let override_log = env.work.join("override.log");
        env.configured_cmd()
            .arg("--log-file")
            .arg(&override_log)
            .write_stdin(HAPPY_ANSWERS)
            .assert()
            .success();
        assert!(!read_lines(&override_log).is_empty());
        assert!(env.log_lines().is_empty());
    }

    #[test]
    fn declined_install_runs_nothing_else() {
        let env = TestEnv::new();
        env.write_config("true", "false");
        env.configured_cmd()
            .write_stdin("no\nno\n")
            .assert()
            .success()
            .stdout(contains("Installation aborted by user."));
    }

    #[test]
    fn missing_package_manager_exits_one() {
        let env = TestEnv::new();
        env.write_config("/nonexistent/apt-get", "true");
        env.configured_cmd()
            .write_stdin(HAPPY_ANSWERS)
            .assert()
            .failure()
            .code(1);
        assert!(env
            .log_lines()
            .iter()
            .any(|l| l.contains(" - ERROR - required package manager")));
    }

    #[test]
    fn failed_install_exits_two() {
        let env = TestEnv::new();
        let apt = env.failing_tool("apt-get", 100);
        env.write_config(apt.to_str().unwrap(), "true");
        env.configured_cmd()
            .write_stdin(HAPPY_ANSWERS)
            .assert()
            .failure()
            .code(2)
            .stdout(contains("apt-get failed"))
            .stderr(contains("apt-get failed"));
    }

    #[test]
    fn certbot_output_reaches_the_terminal() {
        let env = TestEnv::new();
        let certbot = env.tool_script(
            "certbot",
            "echo \"Congratulations! Certificate saved\"\necho \"Saving debug log\" >&2\n",
        );
        env.write_config("true", certbot.to_str().unwrap());
        env.configured_cmd()
            .write_stdin(HAPPY_ANSWERS)
            .assert()
            .success()
            .stdout(contains("Congratulations! Certificate saved"))
            .stderr(contains("Saving debug log"));
    }

    #[test]
    fn multi_line_certbot_error_is_one_log_line() {
        let env = TestEnv::new();
        let certbot = env.tool_script(
            "certbot",
            "echo \"Certbot failed to authenticate some domains.\" >&2\necho \"Some challenges have failed.\" >&2\nexit 1\n",
        );
        env.write_config("true", certbot.to_str().unwrap());
        env.configured_cmd()
            .write_stdin(HAPPY_ANSWERS)
            .assert()
            .failure()
            .code(4);

        let lines = env.log_lines();
        assert!(!lines.is_empty());
        for line in &lines {
            let stamp = line.get(..23).unwrap_or_default().as_bytes();
            assert!(
                stamp.len() == 23 && stamp[4] == b'-' && stamp[19] == b',',
                "bad timestamp in {:?}",
                line
            );
            let rest = &line[23..];
            assert!(
                rest.starts_with(" - INFO - ") || rest.starts_with(" - ERROR - "),
                "bad level in {:?}",
                line
            );
        }
        assert!(lines.iter().any(|l| l.contains(" - ERROR - ")
            && l.contains("Certbot failed to authenticate some domains. | Some challenges have failed.")));
    }

    #[test]
    fn failed_certbot_exits_four() {
        let env = TestEnv::new();
        env.write_config("true", "false");
        env.configured_cmd()
            .write_stdin(HAPPY_ANSWERS)
            .assert()
            .failure()
            .code(4);
        assert!(env
            .log_lines()
            .iter()
            .any(|l| l.contains(" - ERROR - error obtaining certificate for example.com")));
    }

    #[test]
    fn bad_input_and_mode_are_reprompted() {
        let env = TestEnv::new();
        env.write_config("true", "true");
        env.configured_cmd()
            .write_stdin("no\nyes\n-bad-.com\nuser@example.com\nexample.com\nuser@example.com\nhttp\nstandalone\nyes\n")
            .assert()
            .success()
            .stdout(contains("Invalid domain format."))
            .stdout(contains("Invalid mode selected."))
            .stdout(contains("Setup complete!"));
    }
}
