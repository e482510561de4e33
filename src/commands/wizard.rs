use crate::domain::errors::WizardError;
use crate::domain::models::{AcquisitionMode, Platform, RunConfig, WizardConfig};
use crate::services::certificate::request_certificate;
use crate::services::deps::check_dependencies;
use crate::services::installer::install_certbot;
use crate::services::process::CommandRunner;
use crate::services::prompt::InputSource;
use crate::services::reporter::Reporter;
use crate::services::validate::check_input;

pub const TITLE: &str = "Let's Encrypt Certificate Automation";

pub const HELP_TEXT: &str = "\
Help - Let's Encrypt Certificate Automation

This wizard installs Certbot and obtains a Let's Encrypt certificate on Linux
and Windows hosts.

Usage:
- Follow the prompts to enter your domain and email address.
- Confirm actions when prompted by typing `yes`.
- Choose `nginx` to use a running nginx, or `standalone` to let Certbot
  bind its own temporary listener.
- Ensure you have administrative privileges to install packages.

For more information, visit: https://certbot.eff.org/";

const MODE_PROMPT: &str = "Choose the mode for obtaining the certificate (nginx/standalone)";

#[derive(Debug)]
pub enum WizardState {
    Start,
    HelpCheck,
    OsCheck,
    DependencyCheck(Platform),
    ConfirmInstall(Platform),
    Installing(Platform),
    InputLoop(Platform),
    ModeSelect {
        platform: Platform,
        domain: String,
        email: String,
    },
    ConfirmAcquire(RunConfig),
    Acquiring(RunConfig),
    Done,
    Aborted,
}

impl WizardState {
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::Start => "start",
            WizardState::HelpCheck => "help_check",
            WizardState::OsCheck => "os_check",
            WizardState::DependencyCheck(_) => "dependency_check",
            WizardState::ConfirmInstall(_) => "confirm_install",
            WizardState::Installing(_) => "installing",
            WizardState::InputLoop(_) => "input_loop",
            WizardState::ModeSelect { .. } => "mode_select",
            WizardState::ConfirmAcquire(_) => "confirm_acquire",
            WizardState::Acquiring(_) => "acquiring",
            WizardState::Done => "done",
            WizardState::Aborted => "aborted",
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Done,
    Aborted,
    Failed(WizardError),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Done | Outcome::Aborted => 0,
            Outcome::Failed(e) => e.exit_code(),
        }
    }
}

pub struct Wizard<'a> {
    config: &'a WizardConfig,
    platform: Platform,
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn Reporter,
    input: &'a mut dyn InputSource,
}

impl<'a> Wizard<'a> {
    pub fn new(
        config: &'a WizardConfig,
        platform: Platform,
        runner: &'a dyn CommandRunner,
        reporter: &'a dyn Reporter,
        input: &'a mut dyn InputSource,
    ) -> Self {
        Self {
            config,
            platform,
            runner,
            reporter,
            input,
        }
    }

    pub fn run(&mut self) -> Outcome {
        let mut state = WizardState::Start;
        loop {
            tracing::debug!("wizard state: {}", state.name());
            state = match self.step(state) {
                Ok(WizardState::Done) => return Outcome::Done,
                Ok(WizardState::Aborted) => return Outcome::Aborted,
                Ok(next) => next,
                Err(e) => {
                    self.reporter.display(&format!("Error: {}", e));
                    self.reporter.error(&e.to_string());
                    return Outcome::Failed(e);
                }
            };
        }
    }

    fn step(&mut self, state: WizardState) -> Result<WizardState, WizardError> {
        let next = match state {
            WizardState::Start => {
                self.reporter.display(TITLE);
                WizardState::HelpCheck
            }
            WizardState::HelpCheck => match self.answer("Do you need help? (yes/no)") {
                None => self.input_closed(),
                Some(a) if is_yes(&a) => {
                    self.reporter.display(HELP_TEXT);
                    WizardState::Done
                }
                Some(_) => WizardState::OsCheck,
            },
            WizardState::OsCheck => {
                if self.platform == Platform::Other {
                    return Err(WizardError::UnsupportedPlatform(self.platform));
                }
                self.reporter
                    .info(&format!("Detected operating system: {}.", self.platform));
                WizardState::DependencyCheck(self.platform)
            }
            WizardState::DependencyCheck(platform) => {
                check_dependencies(platform, self.config, self.runner, self.reporter)?;
                WizardState::ConfirmInstall(platform)
            }
            WizardState::ConfirmInstall(platform) => {
                match self.confirm("proceed with the installation of Certbot") {
                    None => self.input_closed(),
                    Some(true) => WizardState::Installing(platform),
                    Some(false) => self.aborted("Installation aborted by user."),
                }
            }
            WizardState::Installing(platform) => {
                install_certbot(platform, self.config, self.runner, self.reporter)?;
                WizardState::InputLoop(platform)
            }
            WizardState::InputLoop(platform) => {
                let Some(domain) = self.answer("Enter your domain name (e.g., example.com)") else {
                    return Ok(self.input_closed());
                };
                let Some(email) = self.answer("Enter your email address for notifications") else {
                    return Ok(self.input_closed());
                };
                let (domain, email) = (domain.trim().to_string(), email.trim().to_string());
                match check_input(&domain, &email) {
                    Ok(()) => WizardState::ModeSelect {
                        platform,
                        domain,
                        email,
                    },
                    Err(issue) => {
                        self.reporter.display(&issue.to_string());
                        self.reporter
                            .display("Please try entering your details again.");
                        WizardState::InputLoop(platform)
                    }
                }
            }
            WizardState::ModeSelect {
                platform,
                domain,
                email,
            } => {
                let Some(raw) = self.answer(MODE_PROMPT) else {
                    return Ok(self.input_closed());
                };
                match raw.parse::<AcquisitionMode>() {
                    Ok(mode) => WizardState::ConfirmAcquire(RunConfig {
                        platform,
                        mode,
                        domain,
                        email,
                    }),
                    Err(_) => {
                        self.reporter.display(
                            "Invalid mode selected. Please choose either 'nginx' or 'standalone'.",
                        );
                        WizardState::ModeSelect {
                            platform,
                            domain,
                            email,
                        }
                    }
                }
            }
            WizardState::ConfirmAcquire(run) => {
                let action = format!(
                    "obtain a certificate for {} using {} mode",
                    run.domain, run.mode
                );
                match self.confirm(&action) {
                    None => self.input_closed(),
                    Some(true) => WizardState::Acquiring(run),
                    Some(false) => self.aborted("Certificate request aborted by user."),
                }
            }
            WizardState::Acquiring(run) => {
                request_certificate(
                    &self.config.certbot.binary,
                    &run.domain,
                    &run.email,
                    run.mode,
                    self.runner,
                    self.reporter,
                )?;
                self.reporter
                    .display("Setup complete! Your SSL certificate is ready to use.");
                self.reporter.info(&format!(
                    "Setup complete on {}. SSL certificate for {} is ready to use.",
                    run.platform, run.domain
                ));
                WizardState::Done
            }
            terminal @ (WizardState::Done | WizardState::Aborted) => terminal,
        };
        Ok(next)
    }

    // None once input is exhausted or unreadable.
    fn answer(&mut self, question: &str) -> Option<String> {
        match self.input.ask(question) {
            Ok(answer) => answer,
            Err(e) => {
                self.reporter.error(&format!("Failed to read input: {}", e));
                None
            }
        }
    }

    fn confirm(&mut self, action: &str) -> Option<bool> {
        self.answer(&format!("Are you sure you want to {}? (yes/no)", action))
            .map(|a| is_yes(&a))
    }

    fn aborted(&self, message: &str) -> WizardState {
        self.reporter.display(message);
        self.reporter.info(message);
        WizardState::Aborted
    }

    fn input_closed(&self) -> WizardState {
        self.aborted("Input closed before the wizard finished; aborting.")
    }
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
