//! Setup Wizard
//!
//! The field wizards and the orchestrator that runs them. Each field
//! wizard asks one question through the prompt-retry loop and writes its
//! keys (including derived ones) into the env file; the orchestrator runs
//! them in a fixed order, sets the defaults and the secret key, and
//! persists everything with a single save at the very end.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::envfile::EnvFile;
use crate::secret::SecretSource;

use super::email::run_email_wizard;
use super::prompts::Console;
use super::validate::{
    search_config_for, validate_hostname, validate_language, validate_timezone,
};

/// Header comment written at the top of the generated env file.
pub const FILE_HEADER: &str = "Service environment settings";

const HOSTNAME_PROMPT: &str = "Enter your site's hostname (eg. \"mysite.com\"): ";
const LANGUAGE_PROMPT: &str =
    "Enter the language code for your site's locale (eg. \"pl\" or \"en-us\"): ";
const TIMEZONE_PROMPT: &str =
    "Enter the TZ database timezone name for your site (eg. \"Europe/Warsaw\"): ";

/// Run the complete setup wizard: defaults, secret key, the interactive
/// field wizards in fixed order, then a single save of the env file.
pub fn run_setup_wizard<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    env_file: &mut EnvFile,
    secrets: &dyn SecretSource,
) -> Result<()> {
    // Debug stays off unless the operator flips it by hand afterwards.
    env_file.set("DEBUG", "no");

    env_file.set("SECRET_KEY", secrets.generate());

    run_address_wizard(console, env_file)?;
    run_language_wizard(console, env_file)?;
    run_timezone_wizard(console, env_file)?;
    run_email_wizard(console, env_file)?;

    env_file.save(FILE_HEADER)?;
    console.say(&format!(
        "Configuration has been saved to {}",
        env_file.path().display()
    ))?;
    Ok(())
}

/// Ask for the site hostname; writes `VIRTUAL_HOST` and the derived
/// `ADDRESS`.
pub fn run_address_wizard<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    env_file: &mut EnvFile,
) -> Result<()> {
    let hostname = console.prompt_until_valid(HOSTNAME_PROMPT, validate_hostname)?;

    env_file.set("VIRTUAL_HOST", hostname.clone());
    env_file.set("ADDRESS", format!("https://{}", hostname));

    info!(hostname = %hostname, "address configured");
    Ok(())
}

/// Ask for the locale's language code; writes `LANGUAGE_CODE` and the
/// derived `SEARCH_CONFIG`.
pub fn run_language_wizard<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    env_file: &mut EnvFile,
) -> Result<()> {
    let language = console.prompt_until_valid(LANGUAGE_PROMPT, validate_language)?;
    let search_config = search_config_for(&language);

    env_file.set("LANGUAGE_CODE", language.clone());
    env_file.set("SEARCH_CONFIG", search_config);

    info!(language = %language, search_config, "language configured");
    Ok(())
}

/// Ask for the TZ database timezone name; writes `TIME_ZONE`.
pub fn run_timezone_wizard<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    env_file: &mut EnvFile,
) -> Result<()> {
    let timezone = console.prompt_until_valid(TIMEZONE_PROMPT, validate_timezone)?;

    env_file.set("TIME_ZONE", timezone.clone());

    info!(timezone = %timezone, "timezone configured");
    Ok(())
}
