//! Command handler layer.
//!
//! ## Files
//! - `wizard.rs` — the interactive install/acquire state machine.
//!
//! ## Principles
//! - Prompting, sequencing and terminal-state mapping live here.
//! - Delegate installs, validation and certbot calls to `services/*`.

pub mod wizard;

pub use wizard::{Outcome, Wizard, WizardState};
