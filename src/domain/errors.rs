use crate::domain::models::Platform;

/// Fatal wizard failures. Each one maps to its own process exit code.
#[derive(thiserror::Error, Debug)]
pub enum WizardError {
    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(Platform),
    #[error("required package manager `{program}` is not available: {reason}")]
    MissingDependency { program: String, reason: String },
    #[error("error installing Certbot (`{step}`): {reason}")]
    InstallFailure { step: String, reason: String },
    #[error("error installing Certbot via fallback installer: {reason}")]
    FallbackInstallFailure { reason: String },
    #[error("error obtaining certificate for {domain}: {reason}")]
    AcquisitionFailure { domain: String, reason: String },
}

impl WizardError {
    pub fn exit_code(&self) -> i32 {
        match self {
            WizardError::UnsupportedPlatform(_) | WizardError::MissingDependency { .. } => 1,
            WizardError::InstallFailure { .. } => 2,
            WizardError::FallbackInstallFailure { .. } => 3,
            WizardError::AcquisitionFailure { .. } => 4,
        }
    }
}

/// Operator input that failed validation. Never fatal; the wizard re-prompts.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIssue {
    #[error("Domain and email cannot be empty.")]
    Empty,
    #[error("Invalid email format. Please enter a valid email.")]
    InvalidEmail,
    #[error("Invalid domain format. Please enter a valid domain.")]
    InvalidDomain,
}
