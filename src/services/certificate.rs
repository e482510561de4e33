use crate::domain::errors::WizardError;
use crate::domain::models::AcquisitionMode;
use crate::services::process::{run_checked, CommandRunner};
use crate::services::reporter::Reporter;

pub fn certonly_args(domain: &str, email: &str, mode: AcquisitionMode) -> Vec<String> {
    [
        "certonly",
        mode.certbot_flag(),
        "-d",
        domain,
        "--email",
        email,
        "--agree-tos",
        "--non-interactive",
    ]
    .iter()
    .map(|a| a.to_string())
    .collect()
}

pub fn request_certificate(
    certbot: &str,
    domain: &str,
    email: &str,
    mode: AcquisitionMode,
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
) -> Result<(), WizardError> {
    reporter.display(&format!(
        "Obtaining certificate for {} using {} mode...",
        domain, mode
    ));
    run_checked(runner, certbot, &certonly_args(domain, email, mode)).map_err(|reason| {
        WizardError::AcquisitionFailure {
            domain: domain.to_string(),
            reason,
        }
    })?;
    reporter.display("Certificate obtained successfully!");
    reporter.info(&format!(
        "Certificate obtained successfully for {} using {} mode.",
        domain, mode
    ));
    Ok(())
}
