use crate::domain::errors::WizardError;
use crate::domain::models::{FallbackPlan, InstallPlan, InstallStep, Platform, WizardConfig};
use crate::services::process::{run_checked, CommandRunner};
use crate::services::reporter::Reporter;

pub fn install_plan(platform: Platform, config: &WizardConfig) -> Option<InstallPlan> {
    match platform {
        Platform::Linux => {
            let pm = config.linux.package_manager.as_str();
            let mut install = vec!["install", "-y"];
            install.extend(config.linux.packages.iter().map(String::as_str));
            Some(InstallPlan {
                label: "Linux".to_string(),
                primary: vec![InstallStep::new(pm, &["update"]), InstallStep::new(pm, &install)],
                fallback: None,
            })
        }
        Platform::Windows => {
            let w = &config.windows;
            Some(InstallPlan {
                label: "Windows".to_string(),
                primary: vec![InstallStep::new(
                    &w.package_manager,
                    &["install", w.package.as_str(), "-y"],
                )],
                fallback: Some(FallbackPlan {
                    label: w.fallback_installer.clone(),
                    steps: vec![InstallStep::new(
                        &w.fallback_installer,
                        &["install", w.package.as_str()],
                    )],
                }),
            })
        }
        Platform::Other => None,
    }
}

fn run_steps(
    steps: &[InstallStep],
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
) -> Result<(), (String, String)> {
    for step in steps {
        reporter.display(&format!("Running `{}`...", step.command_line()));
        run_checked(runner, &step.program, &step.args)
            .map_err(|reason| (step.command_line(), reason))?;
    }
    Ok(())
}

pub fn install_certbot(
    platform: Platform,
    config: &WizardConfig,
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
) -> Result<(), WizardError> {
    let plan = install_plan(platform, config).ok_or(WizardError::UnsupportedPlatform(platform))?;
    reporter.display(&format!("Installing Certbot on {}...", plan.label));

    let (step, reason) = match run_steps(&plan.primary, runner, reporter) {
        Ok(()) => {
            reporter.display(&format!("Certbot installed successfully on {}!", plan.label));
            reporter.info(&format!("Certbot installed successfully on {}.", plan.label));
            return Ok(());
        }
        Err(failure) => failure,
    };

    let Some(fallback) = plan.fallback else {
        return Err(WizardError::InstallFailure { step, reason });
    };

    reporter.error(&format!("Error running `{}`: {}", step, reason));
    reporter.display(&format!(
        "`{}` failed. Attempting to install via {}...",
        step, fallback.label
    ));
    match run_steps(&fallback.steps, runner, reporter) {
        Ok(()) => {
            reporter.display(&format!(
                "Certbot installed successfully via {}!",
                fallback.label
            ));
            reporter.info(&format!("Certbot installed successfully via {}.", fallback.label));
            Ok(())
        }
        Err((step, reason)) => Err(WizardError::FallbackInstallFailure {
            reason: format!("`{}`: {}", step, reason),
        }),
    }
}
