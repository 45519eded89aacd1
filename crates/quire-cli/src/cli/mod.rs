//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use quire_app::AppRuntime;
use quire_core::api::ApiClient;
use quire_core::config;
use quire_core::credentials::SessionContext;
use quire_core::models::ArticleId;

mod commands;

#[derive(Parser)]
#[command(name = "quire")]
#[command(version)]
#[command(about = "Manage articles on a quire server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the articles API (overrides QUIRE_API_URL and config)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        username: String,

        /// Read from stdin when omitted
        #[arg(short, long, env = "QUIRE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// List, create, update and delete articles
    Articles {
        #[command(subcommand)]
        command: ArticleCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ArticleCommands {
    /// Lists all articles
    List,
    /// Creates an article
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        text: String,
        /// JavaScript, React or Node
        #[arg(long)]
        topic: String,
    },
    /// Edits an existing article; omitted fields keep their current value
    Update {
        #[arg(value_name = "ID")]
        id: ArticleId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        topic: Option<String>,
    },
    /// Deletes an article
    Delete {
        #[arg(value_name = "ID")]
        id: ArticleId,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // network completions are applied one at a time on this thread
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("create tokio runtime")?;

    rt.block_on(dispatch(cli))
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, api_url } = cli;
    let api_url = api_url.as_deref();

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },

        Commands::Login { username, password } => {
            let password = match password {
                Some(password) => password,
                None => commands::auth::read_password()?,
            };
            commands::auth::login(connect(api_url)?, username, password).await
        }
        Commands::Logout => commands::auth::logout(connect(api_url)?),

        Commands::Articles { command } => {
            let runtime = connect(api_url)?;
            match command {
                ArticleCommands::List => commands::articles::list(runtime).await,
                ArticleCommands::Create { title, text, topic } => {
                    commands::articles::create(runtime, title, text, topic).await
                }
                ArticleCommands::Update {
                    id,
                    title,
                    text,
                    topic,
                } => {
                    let changes = commands::articles::Changes { title, text, topic };
                    commands::articles::update(runtime, id, changes).await
                }
                ArticleCommands::Delete { id } => commands::articles::delete(runtime, id).await,
            }
        }
    }
}

/// Builds the app runtime against the resolved base URL and the persisted
/// credential slot.
fn connect(api_url: Option<&str>) -> Result<AppRuntime> {
    let config = config::Config::load().context("load config")?;
    let base_url = config.resolve_api_url(api_url)?;
    tracing::debug!(%base_url, "using articles API");
    let client = ApiClient::new(base_url, SessionContext::from_default_path());
    Ok(AppRuntime::new(client))
}
