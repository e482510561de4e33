use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
    Other,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
            Platform::Other => "other",
        };
        f.write_str(name)
    }
}

/// How certbot proves control of the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionMode {
    /// Reuse the running nginx for the challenge.
    Nginx,
    /// Let certbot bind its own temporary listener.
    Standalone,
}

impl AcquisitionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcquisitionMode::Nginx => "nginx",
            AcquisitionMode::Standalone => "standalone",
        }
    }

    pub fn certbot_flag(&self) -> &'static str {
        match self {
            AcquisitionMode::Nginx => "--nginx",
            AcquisitionMode::Standalone => "--standalone",
        }
    }
}

impl fmt::Display for AcquisitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcquisitionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "nginx" => Ok(AcquisitionMode::Nginx),
            "standalone" => Ok(AcquisitionMode::Standalone),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub platform: Platform,
    pub mode: AcquisitionMode,
    pub domain: String,
    pub email: String,
}

/// Exit status of one external command plus the stderr it wrote. stdout is
/// passed through to the terminal and not kept.
#[derive(Debug, Clone, Default)]
pub struct CommandResult {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stderr: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn describe_exit(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// One program invocation in an install plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallStep {
    pub program: String,
    pub args: Vec<String>,
}

impl InstallStep {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for a in &self.args {
            line.push(' ');
            line.push_str(a);
        }
        line
    }
}

/// Ordered install commands for one platform. Every primary step must
/// succeed; the fallback path only runs when the primary path fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub label: String,
    pub primary: Vec<InstallStep>,
    pub fallback: Option<FallbackPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPlan {
    pub label: String,
    pub steps: Vec<InstallStep>,
}

fn default_log_file() -> String {
    "certbot_install.log".to_string()
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WizardConfig {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub linux: LinuxTools,
    #[serde(default)]
    pub windows: WindowsTools,
    #[serde(default)]
    pub certbot: CertbotTool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            linux: LinuxTools::default(),
            windows: WindowsTools::default(),
            certbot: CertbotTool::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LinuxTools {
    pub package_manager: String,
    pub packages: Vec<String>,
}

impl Default for LinuxTools {
    fn default() -> Self {
        Self {
            package_manager: "apt-get".to_string(),
            packages: vec!["certbot".to_string(), "python3-certbot-nginx".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowsTools {
    pub package_manager: String,
    pub fallback_installer: String,
    pub package: String,
}

impl Default for WindowsTools {
    fn default() -> Self {
        Self {
            package_manager: "choco".to_string(),
            fallback_installer: "pip".to_string(),
            package: "certbot".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CertbotTool {
    pub binary: String,
}

impl Default for CertbotTool {
    fn default() -> Self {
        Self {
            binary: "certbot".to_string(),
        }
    }
}
