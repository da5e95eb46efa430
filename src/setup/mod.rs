//! Setup Module
//!
//! Interactive setup wizard, input validation, and terminal prompts for
//! first-run configuration.

pub mod email;
pub mod prompts;
pub mod validate;
pub mod wizard;
