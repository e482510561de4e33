//! Service layer containing the wizard's building blocks and side-effect helpers.
//!
//! ## Service map
//! - `platform.rs` — host OS detection.
//! - `deps.rs` — package-manager presence check.
//! - `installer.rs` — per-OS install plans and the primary/fallback install flow.
//! - `validate.rs` — domain/email format rules.
//! - `certificate.rs` — `certbot certonly` invocation.
//! - `process.rs` — `CommandRunner` seam over external programs.
//! - `prompt.rs` — `InputSource` seam over operator answers.
//! - `reporter.rs` — `Reporter` seam over console output and the event log.
//! - `config.rs` — TOML config loading.
//! - `logging.rs` — log file subscriber and line format.
//!
//! ## Conventions
//! - Components take their runner/reporter as arguments; no globals.
//! - Components return `Result<_, WizardError>` and never exit the process.

pub mod certificate;
pub mod config;
pub mod deps;
pub mod installer;
pub mod logging;
pub mod platform;
pub mod process;
pub mod prompt;
pub mod reporter;
pub mod validate;
