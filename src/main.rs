//! stripe-webhook-tasks - create or delete Stripe webhook endpoints.
//!
//! Return values are printed to stdout as JSON; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use stripe_webhook_tasks::adapters::keychain::ConfigKeychain;
use stripe_webhook_tasks::application::{DeleteWebhookOutcome, TaskError, WebhookTaskRunner};
use stripe_webhook_tasks::config::{AppConfig, ConfigError, LoggingConfig};
use stripe_webhook_tasks::domain::webhook::{option_names, TaskOptions};

/// Stripe webhook endpoint tasks.
#[derive(Parser)]
#[command(name = "stripe-webhook-tasks")]
#[command(about = "Create or delete Stripe webhook endpoints")]
#[command(version)]
struct Cli {
    /// Read environment variables from this file instead of ./.env
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Use a non-default Stripe account by its alias
    #[arg(long, global = true)]
    service_alias: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a webhook endpoint and print its signing secret
    CreateWebhook {
        /// The webhook endpoint url
        #[arg(long)]
        url: String,

        /// Comma-separated Stripe events to send to the endpoint
        #[arg(long)]
        events: String,
    },

    /// Delete the webhook endpoint targeting a url
    DeleteWebhook {
        /// The endpoint target url to delete
        #[arg(long)]
        url: String,

        /// Don't fail if no endpoint targets the url (true/false)
        #[arg(long, default_value = "false")]
        ignore_missing: String,
    },
}

impl Cli {
    fn task_options(&self) -> TaskOptions {
        let mut options = TaskOptions::new();
        if let Some(alias) = &self.service_alias {
            options = options.with(option_names::SERVICE_ALIAS, alias.as_str());
        }

        match &self.command {
            Commands::CreateWebhook { url, events } => options
                .with(option_names::URL, url.as_str())
                .with(option_names::EVENTS, events.as_str()),
            Commands::DeleteWebhook { url, ignore_missing } => options
                .with(option_names::URL, url.as_str())
                .with(option_names::IGNORE_MISSING, ignore_missing.as_str()),
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    match &cli.env_file {
        Some(path) => AppConfig::load_with_env_file(path),
        None => AppConfig::load(),
    }
}

fn config_failure(error: &ConfigError) -> ExitCode {
    tracing::error!(error = %error, "Configuration failed");
    eprintln!("Error: {}", error);
    ExitCode::FAILURE
}

async fn run(cli: &Cli, config: AppConfig) -> Result<(), TaskError> {
    let keychain = Arc::new(ConfigKeychain::new(&config));
    let runner = WebhookTaskRunner::new(keychain, config.stripe);
    let options = cli.task_options();

    match &cli.command {
        Commands::CreateWebhook { .. } => {
            let result = runner.create_webhook(&options).await?;
            println!("{}", result.return_values());
        }
        Commands::DeleteWebhook { .. } => match runner.delete_webhook(&options).await? {
            DeleteWebhookOutcome::Deleted { endpoint_id } => {
                println!("{}", serde_json::json!({ "deleted": endpoint_id }));
            }
            DeleteWebhookOutcome::NotFoundIgnored => {
                println!("{}", serde_json::json!({ "deleted": null }));
            }
        },
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Validation errors are reported through the configured subscriber
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            LoggingConfig::default().init();
            return config_failure(&e);
        }
    };
    config.logging.init();

    if let Err(e) = config.validate() {
        return config_failure(&e.into());
    }

    match run(&cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind(), error = %e, "Task failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
