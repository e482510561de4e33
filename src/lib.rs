pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;

pub use commands::{Outcome, Wizard};
pub use domain::errors::{InputIssue, WizardError};
pub use domain::models::{AcquisitionMode, CommandResult, Platform, RunConfig, WizardConfig};
pub use services::validate::{validate_domain, validate_email, validate_input};
