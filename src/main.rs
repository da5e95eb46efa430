//! Env Wizard
//!
//! Entry point for the first-run configuration wizard. Wires the
//! operator's terminal, the env file sink, and the secret key source into
//! the setup wizard and runs it to completion.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use envwizard::envfile::{resolve_path, EnvFile};
use envwizard::secret::RandomSecret;
use envwizard::setup::prompts::Console;
use envwizard::setup::wizard::run_setup_wizard;

/// First-run configuration wizard for a containerized site deployment.
#[derive(Parser, Debug)]
#[command(
    name = "envwizard",
    version,
    about = "Interactive first-run configuration wizard"
)]
struct Cli {
    /// Where to write the generated env file
    #[arg(short, long, default_value = "config/site.env")]
    output: String,
}

fn main() -> Result<()> {
    // Log to stderr so log lines never interleave with prompts on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("{}", "First-run setup. Let's configure your site.".white());
    println!();

    let mut env_file = EnvFile::new(resolve_path(&cli.output));
    let mut console = Console::stdio();
    run_setup_wizard(&mut console, &mut env_file, &RandomSecret)
}
