use crate::domain::models::CommandResult;
use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

pub trait CommandRunner {
    // Err: the program could not be started at all.
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<CommandResult>;
}

// stdout goes straight to the terminal; stderr is echoed as it arrives and
// kept for the failure reason.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<CommandResult> {
        tracing::debug!("running {} {:?}", program, args);
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()?;

        let mut stderr = String::new();
        if let Some(pipe) = child.stderr.take() {
            stderr = tee_stderr(BufReader::new(pipe), &mut std::io::stderr())?;
        }
        let status = child.wait()?;
        Ok(CommandResult {
            exit_code: status.code(),
            stderr,
        })
    }
}

fn tee_stderr(mut reader: impl BufRead, echo: &mut impl Write) -> std::io::Result<String> {
    let mut kept = Vec::new();
    let mut chunk = Vec::new();
    loop {
        chunk.clear();
        if reader.read_until(b'\n', &mut chunk)? == 0 {
            break;
        }
        echo.write_all(&chunk)?;
        echo.flush()?;
        kept.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&kept).to_string())
}

// Multi-line tool output collapsed so one failure stays one log line.
pub fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn run_checked(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[String],
) -> Result<CommandResult, String> {
    match runner.run(program, args) {
        Ok(result) if result.success() => Ok(result),
        Ok(result) => {
            let stderr = single_line(&result.stderr);
            if stderr.is_empty() {
                Err(result.describe_exit())
            } else {
                Err(format!("{}: {}", result.describe_exit(), stderr))
            }
        }
        Err(e) => Err(single_line(&format!(
            "failed to start `{}`: {}",
            program, e
        ))),
    }
}
