//! First-Run Configuration Wizard
//!
//! Prompts the operator for deployment parameters, validates every answer,
//! derives secondary settings, and writes the result to an env file.

pub mod envfile;
pub mod secret;
pub mod setup;
