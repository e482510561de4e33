use crate::domain::errors::WizardError;
use crate::domain::models::{Platform, WizardConfig};
use crate::services::process::{run_checked, CommandRunner};
use crate::services::reporter::Reporter;

pub fn package_manager_for(platform: Platform, config: &WizardConfig) -> Option<&str> {
    match platform {
        Platform::Linux => Some(config.linux.package_manager.as_str()),
        Platform::Windows => Some(config.windows.package_manager.as_str()),
        Platform::Other => None,
    }
}

pub fn check_dependencies(
    platform: Platform,
    config: &WizardConfig,
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
) -> Result<(), WizardError> {
    let program =
        package_manager_for(platform, config).ok_or(WizardError::UnsupportedPlatform(platform))?;

    run_checked(runner, program, &["--version".to_string()]).map_err(|reason| {
        WizardError::MissingDependency {
            program: program.to_string(),
            reason,
        }
    })?;
    reporter.info(&format!("Package manager {} is available.", program));
    Ok(())
}
