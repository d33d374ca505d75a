mod commands;
mod console;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use sonercore::config::{ClientConfig, ConfigOverrides};
use sonercore::render::Style;
use sonercore::HttpAnalysisClient;

#[derive(Parser)]
#[clap(
    name = "sonercore",
    author,
    version,
    about = "Cognitive load analysis for Go repositories",
    after_help = "Examples:\n  sonercore analyze https://github.com/acme/widget\n  sonercore show https://github.com/acme/widget pkg/foo.go Resolve\n  sonercore export https://github.com/acme/widget --output report.html\n  sonercore console"
)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    /// Path to sonercore.toml (default: ./sonercore.toml when present)
    #[clap(long, global = true)]
    config: Option<PathBuf>,
    /// Analysis endpoint, overriding the config file
    #[clap(long, global = true)]
    service_url: Option<String>,
    /// Disable coloured output
    #[clap(long, global = true)]
    no_color: bool,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a repository and print the per-file summary
    Analyze {
        repo_url: String,
        /// Print the raw result as JSON
        #[clap(long)]
        json: bool,
    },
    /// Analyze a repository and print one function's details
    Show {
        repo_url: String,
        file: String,
        function: String,
    },
    /// Print the source link for a line range without contacting the service
    Link {
        repo_url: String,
        file: String,
        start_line: i64,
        end_line: i64,
    },
    /// Analyze a repository and write an HTML report
    Export {
        repo_url: String,
        #[clap(short, long)]
        output: PathBuf,
    },
    /// Interactive console
    Console {
        /// Repository URL to prefill
        #[clap(long)]
        repo_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let config = ClientConfig::load(args.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(&ConfigOverrides {
            service_url: args.service_url.clone(),
            no_color: args.no_color,
        });
    let style = Style::detect(config.color);

    match args.command {
        Commands::Analyze { repo_url, json } => {
            let client = build_client(&config)?;
            commands::run_analyze(&client, &repo_url, json, style).await?;
        }
        Commands::Show {
            repo_url,
            file,
            function,
        } => {
            let client = build_client(&config)?;
            commands::run_show(&client, &repo_url, &file, &function, style).await?;
        }
        Commands::Link {
            repo_url,
            file,
            start_line,
            end_line,
        } => {
            commands::run_link(&repo_url, &file, start_line, end_line);
        }
        Commands::Export { repo_url, output } => {
            let client = build_client(&config)?;
            commands::run_export(&client, &repo_url, &output).await?;
        }
        Commands::Console { repo_url } => {
            let client = build_client(&config)?;
            repl::run_repl(Arc::new(client), repo_url, style).await?;
        }
    }

    Ok(())
}

fn build_client(config: &ClientConfig) -> Result<HttpAnalysisClient> {
    HttpAnalysisClient::new(config).context("failed to build HTTP client")
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "handlebars=off,hyper=warn,reqwest=warn,rustyline=warn,{}",
            log_level
        )))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
