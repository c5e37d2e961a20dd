//! previewlink CLI - links pull request previews to Linear tickets.

mod event;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use previewlink_core::{Config, Lookup, NotFoundReason, PreviewRecord};
use previewlink_github::GitHubClient;
use previewlink_linear::LinearClient;
use previewlink_resolver::{
    LinkOutcome, LinkRequest, PreviewLinker, PreviewProvider, PreviewResolver,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::event::CommentEvent;

#[derive(Parser)]
#[command(name = "previewlink")]
#[command(author, version, about = "Link pull request previews to Linear tickets", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the preview of a pull request and attach it to its ticket
    Link {
        #[command(flatten)]
        github: GitHubArgs,

        /// Preview provider (detected from the pull request when omitted)
        #[arg(long, env = "PREVIEWLINK_PROVIDER")]
        provider: Option<String>,

        /// Pull request number (read from the event payload when omitted)
        #[arg(long)]
        pr: Option<u64>,

        /// Pull request title, used as the attachment subtitle
        #[arg(long)]
        title: Option<String>,

        /// Path to the triggering `issue_comment` event payload
        #[arg(long, env = "GITHUB_EVENT_PATH")]
        event_path: Option<PathBuf>,

        /// Linear API key
        #[arg(long, env = "LINEAR_API_KEY", hide_env_values = true)]
        linear_api_key: String,
    },

    /// Print the preview of a pull request without touching Linear
    Resolve {
        #[command(flatten)]
        github: GitHubArgs,

        /// Preview provider (detected from the pull request when omitted)
        #[arg(long, env = "PREVIEWLINK_PROVIDER")]
        provider: Option<String>,

        /// Pull request number
        #[arg(long)]
        pr: u64,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args)]
struct GitHubArgs {
    /// Repository as `owner/name`
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repo: Option<String>,

    /// GitHub access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: String,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set a configuration value (e.g. `github.owner meteora-pro`)
    Set { key: String, value: String },

    /// Get a configuration value
    Get { key: String },

    /// Show current configuration
    Show,

    /// Print the config file location
    Path,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    match cli.command {
        Some(Commands::Link {
            github,
            provider,
            pr,
            title,
            event_path,
            linear_api_key,
        }) => {
            let config = Config::load_from(&config_path)?;
            let provider = select_provider(provider.as_deref(), &config)?;

            let (number, title) = match pr {
                Some(number) => (number, title),
                None => {
                    let path = event_path
                        .context("Either --pr or --event-path (GITHUB_EVENT_PATH) is required")?;
                    match pull_request_from_event(&path)? {
                        Some((number, event_title)) => (number, title.or(event_title)),
                        None => {
                            info!(reason = %NotFoundReason::NotAPullRequest, "Skipping");
                            return Ok(());
                        }
                    }
                }
            };

            let host = github_client(&github, &config)?;
            let tracker = linear_client(linear_api_key, &config);

            let request = LinkRequest {
                number,
                provider,
                title,
            };
            match PreviewLinker::new(&host, &tracker).link(&request).await? {
                LinkOutcome::Linked {
                    ticket, preview, ..
                } => println!("Linked {} to {}", preview.url(), ticket),
                LinkOutcome::Skipped(reason) => println!("Nothing linked: {}", reason),
            }
        }
        Some(Commands::Resolve {
            github,
            provider,
            pr,
        }) => {
            let config = Config::load_from(&config_path)?;
            let provider = select_provider(provider.as_deref(), &config)?;
            let host = github_client(&github, &config)?;

            let lookup = PreviewResolver::new(&host).resolve_preview(pr, provider).await?;
            println!("{}", render_resolution(pr, lookup)?);
        }
        Some(Commands::Config { command }) => run_config(command, &config_path)?,
        None => {
            println!("previewlink - link pull request previews to Linear tickets");
            println!("Run with --help for usage information");
        }
    }

    Ok(())
}

fn run_config(command: ConfigCommands, path: &Path) -> Result<()> {
    match command {
        ConfigCommands::Set { key, value } => {
            if key == "preview.provider" {
                value.parse::<PreviewProvider>()?;
            }
            let mut config = Config::load_from(path)?;
            config.set(&key, &value)?;
            config.save_to(path)?;
            println!("Set {} = {}", key, value);
        }
        ConfigCommands::Get { key } => {
            let config = Config::load_from(path)?;
            match config.get(&key)? {
                Some(value) => println!("{}", value),
                None => println!("{} is not set", key),
            }
        }
        ConfigCommands::Show => {
            let config = Config::load_from(path)?;
            println!("# {}", path.display());
            let contents =
                toml::to_string_pretty(&config).context("Failed to render configuration")?;
            println!("{}", contents);
        }
        ConfigCommands::Path => println!("{}", path.display()),
    }
    Ok(())
}

/// Output of `resolve`: the preview as JSON, or why there is none.
///
/// A missing preview is reported, not treated as a failure.
fn render_resolution(pr: u64, lookup: Lookup<PreviewRecord>) -> Result<String> {
    match lookup {
        Lookup::Found(preview) => Ok(serde_json::to_string_pretty(&preview)?),
        Lookup::NotFound(reason) => {
            info!(reason = %reason, "Skipping");
            Ok(format!("No preview found for PR #{}: {}", pr, reason))
        }
    }
}

/// Provider from the command line, falling back to the configured default.
///
/// `None` means the provider is detected from the pull request.
fn select_provider(arg: Option<&str>, config: &Config) -> Result<Option<PreviewProvider>> {
    let Some(name) = arg.or(config.default_provider()) else {
        return Ok(None);
    };
    Ok(Some(name.parse()?))
}

/// `(owner, repo)` from `--repo owner/name`, falling back to the config file.
fn select_repository(arg: Option<&str>, config: &Config) -> Result<(String, String)> {
    if let Some(full_name) = arg {
        return match full_name.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok((owner.to_string(), repo.to_string()))
            }
            _ => bail!("Invalid repository '{}', expected owner/name", full_name),
        };
    }

    match config.repository() {
        Some((owner, repo)) => Ok((owner.to_string(), repo.to_string())),
        None => bail!(
            "No repository given; pass --repo owner/name or set github.owner and github.repo"
        ),
    }
}

fn pull_request_from_event(path: &Path) -> Result<Option<(u64, Option<String>)>> {
    let event = CommentEvent::load(path)?;
    Ok(event
        .issue
        .filter(|issue| issue.is_pull_request())
        .map(|issue| (issue.number, issue.title)))
}

fn github_client(args: &GitHubArgs, config: &Config) -> Result<GitHubClient> {
    let (owner, repo) = select_repository(args.repo.as_deref(), config)?;
    let base_url = config
        .github
        .as_ref()
        .and_then(|github| github.base_url.clone());

    Ok(match base_url {
        Some(url) => GitHubClient::with_base_url(url, owner, repo, args.github_token.clone()),
        None => GitHubClient::new(owner, repo, args.github_token.clone()),
    })
}

fn linear_client(api_key: String, config: &Config) -> LinearClient {
    match config.linear.as_ref().and_then(|linear| linear.base_url.clone()) {
        Some(url) => LinearClient::with_base_url(url, api_key),
        None => LinearClient::new(api_key),
    }
}
