//! CLI entrypoint for Shmixy
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use shmixy_application::ContactFormController;
use shmixy_domain::{FormField, SUBMITTING_LABEL};
use shmixy_infrastructure::{ConfigLoader, FileConfig, FileLoggingConfig, HttpLeadRelay};
use shmixy_presentation::{
    CheckArgs, CheckedEmail, Cli, Command, ConsoleFormatter, ConsoleToaster, ContactPrompt,
    LandingPage, PromptOutcome, SendingSpinner, SubmitArgs, set_color_enabled,
};
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration (unless --no-config)
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;

    if cli.no_color || !config.output.color {
        set_color_enabled(false);
    }

    let _log_guard = init_logging(cli.verbose, &config.logging)?;

    info!("Starting Shmixy");
    debug!(
        endpoint = %config.relay.endpoint,
        location = %config.page.location,
        "Configuration loaded"
    );

    match cli.command() {
        Command::Page => {
            println!("{}", LandingPage::new().render());
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(args) => Ok(run_check(&args)),
        Command::Contact => {
            let controller = build_controller(&config)?;
            println!("{}", LandingPage::contact_intro());

            let mut input = io::stdin().lock();
            let mut out = io::stdout();
            let outcome = ContactPrompt::new(&controller)
                .with_progress(!cli.quiet)
                .run(&mut input, &mut out)
                .await?;

            info!(?outcome, "Contact form closed");
            Ok(match outcome {
                PromptOutcome::Failed => ExitCode::FAILURE,
                PromptOutcome::Submitted | PromptOutcome::Abandoned => ExitCode::SUCCESS,
            })
        }
        Command::Submit(args) => {
            let controller = build_controller(&config)?;
            Ok(run_submit(&controller, args, !cli.quiet).await)
        }
    }
}

/// Initialize logging based on verbosity level, plus an optional log file
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::new(level));

    let (file_layer, guard) = match &logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// === Dependency Injection ===
fn build_controller(config: &FileConfig) -> Result<ContactFormController> {
    let environment = config.page.environment();
    let relay = HttpLeadRelay::new(&config.relay.endpoint, &config.page.client_identifier())
        .context("Failed to build HTTP client")?;

    Ok(ContactFormController::new(
        Arc::new(relay),
        Arc::new(ConsoleToaster::new()),
        Arc::new(environment),
    )
    .with_params(config.relay.submission_params()))
}

fn run_check(args: &CheckArgs) -> ExitCode {
    let results: Vec<CheckedEmail> = args.emails.iter().map(CheckedEmail::new).collect();

    let output = if args.json {
        ConsoleFormatter::format_check_json(&results)
    } else {
        ConsoleFormatter::format_check(&results)
    };
    println!("{}", output);

    if results.iter().all(CheckedEmail::is_business) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn run_submit(
    controller: &ContactFormController,
    args: SubmitArgs,
    show_progress: bool,
) -> ExitCode {
    controller.update_field(FormField::Name, args.name);
    controller.update_field(FormField::Company, args.company);
    controller.update_field(FormField::Email, args.email);
    controller.update_field(FormField::Message, args.message);

    let missing = controller.snapshot().missing_required();
    if !missing.is_empty() {
        for field in missing {
            eprintln!("{} is required.", field.label());
        }
        return ExitCode::FAILURE;
    }

    let spinner = SendingSpinner::start(SUBMITTING_LABEL, show_progress);
    let result = controller.submit().await;
    spinner.finish();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(in_flight = e.is_in_flight(), "Lead was not sent: {}", e);
            ExitCode::FAILURE
        }
    }
}
