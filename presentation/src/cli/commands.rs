//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for shmixy
#[derive(Parser, Debug)]
#[command(name = "shmixy")]
#[command(author, version, about = "Shmixy - AI team members for sales and support")]
#[command(long_about = r#"
Shmixy renders its landing page in the terminal and captures consultation
requests from business email addresses.

Free email providers (Gmail, Outlook, Yahoo, iCloud, Proton, ...) are not
accepted. Subdomains of those providers are rejected as well.

Configuration files are loaded from (in priority order):
1. SHMIXY_* environment variables (e.g. SHMIXY_RELAY__ENDPOINT)
2. --config <path>     Explicit config file
3. ./shmixy.toml       Project-level config
4. ~/.config/shmixy/config.toml   Global config

Example:
  shmixy
  shmixy contact
  shmixy submit --name "Jane Doe" --company "Acme Inc." --email jane@acme.com
  shmixy check jane@acme.com jane@gmail.com
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The command to run, `page` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Page)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render the landing page
    Page,
    /// Fill in the consultation form interactively
    Contact,
    /// Send a consultation request without prompting
    Submit(SubmitArgs),
    /// Check whether addresses count as business emails
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SubmitArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Company
    #[arg(long)]
    pub company: String,

    /// Business email
    #[arg(long)]
    pub email: String,

    /// What can we automate or build for you?
    #[arg(long, default_value = "")]
    pub message: String,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    /// Addresses to classify
    #[arg(required = true, value_name = "EMAIL")]
    pub emails: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}
