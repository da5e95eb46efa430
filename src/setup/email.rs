//! Email Wizard
//!
//! Collects outgoing email settings: the sender address and the SMTP
//! relay's host, port, credentials, and TLS flag. Keys are written to the
//! env file only after every answer is collected, so an interrupted run
//! never leaves a half-configured email section behind.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::envfile::EnvFile;

use super::prompts::Console;
use super::validate::{validate_email, validate_hostname, validate_port, validate_yes_no};

const FROM_PROMPT: &str =
    "Enter the e-mail address your site will send messages from (eg. \"noreply@mysite.com\"): ";
const SMTP_HOST_PROMPT: &str =
    "Enter your SMTP server's hostname (eg. \"smtp.mysite.com\"): ";
const SMTP_PORT_PROMPT: &str = "Enter your SMTP server's port (eg. \"587\"): ";
const SMTP_USER_PROMPT: &str =
    "Enter the SMTP username (leave empty if the server needs no authentication): ";
const SMTP_PASSWORD_PROMPT: &str =
    "Enter the SMTP password (leave empty if the server needs no authentication): ";
const SMTP_TLS_PROMPT: &str = "Should the SMTP connection use TLS? (yes/no): ";

/// Run the email sub-wizard against the given console and env file.
pub fn run_email_wizard<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    env_file: &mut EnvFile,
) -> Result<()> {
    let from = console.prompt_until_valid(FROM_PROMPT, validate_email)?;
    let host = console.prompt_until_valid(SMTP_HOST_PROMPT, validate_hostname)?;
    let port = console.prompt_until_valid(SMTP_PORT_PROMPT, validate_port)?;

    // Credentials are optional: empty means an unauthenticated relay.
    let user = console.prompt_until_valid(SMTP_USER_PROMPT, |raw| Ok(raw.trim().to_string()))?;
    let password =
        console.prompt_until_valid(SMTP_PASSWORD_PROMPT, |raw| Ok(raw.trim().to_string()))?;
    let use_tls = console.prompt_until_valid(SMTP_TLS_PROMPT, validate_yes_no)?;

    env_file.set("EMAIL_FROM", from);
    env_file.set("SMTP_HOST", host);
    env_file.set("SMTP_PORT", port.to_string());
    env_file.set("SMTP_USER", user);
    env_file.set("SMTP_PASSWORD", password);
    env_file.set("SMTP_TLS", if use_tls { "yes" } else { "no" });

    info!("email settings configured");
    Ok(())
}
