mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{catalog, check, contacts, find, modules, Context};
use crate::error::{exit_code_for, report_error};
use profbook_config as config;

#[derive(Debug, Parser)]
#[command(name = "profbook", version, about = "profbook CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    contacts: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search contacts by field keywords
    Find(find::FindArgs),
    /// List every contact
    List,
    /// Show contacts by one-based index
    Show(contacts::ShowArgs),
    /// Validate a single value and print its canonical form
    Check(check::CheckArgs),
    /// List known modules and how many contacts take each
    Modules,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        contacts: contacts_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }
    let registry = &app_config.registry;
    debug!(modules = registry.len(), "module registry ready");

    match command {
        Command::Check(args) => check::check_value(registry, json, args),
        command => {
            let contacts_path = config::resolve_contacts_path(contacts_path, &app_config)
                .with_context(|| "resolve contacts path")?;
            debug!(path = %contacts_path.display(), "contacts path resolved");

            let contacts = catalog::load_contacts(&contacts_path, registry)?;

            let ctx = Context {
                contacts: &contacts,
                registry,
                json,
            };

            match command {
                Command::Find(args) => find::find_contacts(&ctx, args),
                Command::List => contacts::list_contacts(&ctx),
                Command::Show(args) => contacts::show_contacts(&ctx, args),
                Command::Modules => modules::list_modules(&ctx),
                Command::Check(_) => unreachable!("check command handled before contacts load"),
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
