//! Command handlers

use crate::cli::{Cli, Commands, ExportArgs};
use crate::output::output_quote;
use haulbid_app::app::{export_quote, prepare_quote, Quote, QuoteOptions};
use haulbid_app::config::Config;
use haulbid_app::job_file::load_job_file;
use haulbid_domain::model::{ClientInfo, JobSpec};
use haulbid_types::{ExportFormat, OutputFormat, PayoutMode, Result};
use std::path::PathBuf;
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Hourly { job, client, export } => {
            let spec = JobSpec::Hourly(job.into());
            let options = quote_options(cli.payout_mode, client.into());
            cmd_quote(cli.format, &spec, &options, &export)
        }

        Commands::Tonnage { job, client, export } => {
            let spec = JobSpec::Tonnage(job.into());
            let options = quote_options(cli.payout_mode, client.into());
            cmd_quote(cli.format, &spec, &options, &export)
        }

        Commands::Quote { file, export } => {
            let job_file = load_job_file(&file)?;
            // CLI flag beats the file, the file beats config
            let payout_mode = cli.payout_mode.or(job_file.payout_mode);
            let options = quote_options(payout_mode, job_file.client);
            cmd_quote(cli.format, &job_file.job, &options, &export)
        }

        Commands::Config {
            show,
            set_payout_mode,
            set_output,
            set_export_format,
            set_export_dir,
            set_company,
            reset,
        } => cmd_config(
            show,
            set_payout_mode,
            set_output,
            set_export_format,
            set_export_dir,
            set_company,
            reset,
        ),
    }
}

fn quote_options(payout_mode: Option<PayoutMode>, client: ClientInfo) -> QuoteOptions {
    let options = QuoteOptions::new().with_client(client);
    match payout_mode {
        Some(mode) => options.with_payout_mode(mode),
        None => options,
    }
}

fn cmd_quote(
    format: Option<OutputFormat>,
    spec: &JobSpec,
    options: &QuoteOptions,
    export: &ExportArgs,
) -> Result<()> {
    let config = Config::load()?;
    let output_format = format.unwrap_or(config.output_format);

    debug!(job_type = %spec.job_type(), "Preparing quote");
    let quote: Quote = prepare_quote(spec, &config, options)?;

    output_quote(output_format, &quote)?;

    if export.requested() {
        let path = export_quote(&quote, &config, export.export_format, export.output.as_deref())?;
        // Keep stdout clean for JSON consumers
        eprintln!("Bid saved to {}", path.display());
    }

    Ok(())
}

fn cmd_config(
    show: bool,
    set_payout_mode: Option<PayoutMode>,
    set_output: Option<OutputFormat>,
    set_export_format: Option<ExportFormat>,
    set_export_dir: Option<PathBuf>,
    set_company: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(mode) = set_payout_mode {
        config.payout_mode = mode;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(export_format) = set_export_format {
        config.export_format = export_format;
        modified = true;
    }

    if let Some(dir) = set_export_dir {
        config.export_dir = Some(dir);
        modified = true;
    }

    if let Some(company) = set_company {
        // Empty string clears the default
        config.company_name = Some(company).filter(|s| !s.trim().is_empty());
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
