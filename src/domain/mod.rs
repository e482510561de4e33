//! Shared data model layer (types and errors only).
//!
//! ## Files
//! - `models.rs` — platform/mode enums, run config, command results,
//!   install plans and the TOML config schema.
//! - `errors.rs` — fatal `WizardError` and non-fatal `InputIssue`.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no process or filesystem side effects.

pub mod errors;
pub mod models;
