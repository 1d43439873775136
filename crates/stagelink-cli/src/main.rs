use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stagelink_application::AppBootstrap;
use stagelink_core::theme::ThemePreference;
use stagelink_infrastructure::{ConfigService, StagelinkPaths};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{auth, booking, catalog, theme};

/// Env var carrying the OS color-scheme hint (`light` or `dark`).
const COLOR_SCHEME_ENV: &str = "STAGELINK_COLOR_SCHEME";

#[derive(Parser)]
#[command(name = "stagelink")]
#[command(about = "StageLink - discover and book creatives", long_about = None)]
struct Cli {
    /// Base directory for config and storage (defaults to $STAGELINK_HOME, then the platform dirs)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or change the color theme
    Theme {
        #[command(subcommand)]
        action: theme::ThemeAction,
    },
    /// Log in with email and password
    Login { email: String, password: String },
    /// Create an account
    Signup(auth::SignupArgs),
    /// Log out
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Enter a view, applying the route guard
    Open { view: String },
    /// Browse creatives
    Catalog {
        #[command(subcommand)]
        action: catalog::CatalogAction,
    },
    /// Select, inspect and submit a booking
    Book {
        #[command(subcommand)]
        action: booking::BookAction,
    },
    /// List recorded bookings
    Bookings,
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn system_hint() -> Option<ThemePreference> {
    std::env::var(COLOR_SCHEME_ENV)
        .ok()
        .and_then(|raw| ThemePreference::from_str(&raw).ok())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.home {
        Some(home) => StagelinkPaths::new(Some(home)),
        None => StagelinkPaths::from_env(),
    };
    let config = ConfigService::new(&paths)?.load()?;
    init_tracing(&config.log_level);
    tracing::debug!("[CLI] config loaded, remote mode {:?}", config.remote.mode);

    let app = AppBootstrap::builder()
        .paths(paths)
        .config(config)
        .system_hint(system_hint())
        .build()
        .await?;

    match cli.command {
        Commands::Theme { action } => theme::run(&app, action).await?,
        Commands::Login { email, password } => auth::login(&app, &email, &password).await?,
        Commands::Signup(args) => auth::signup(&app, args).await?,
        Commands::Logout => auth::logout(&app).await?,
        Commands::Whoami => auth::whoami(&app).await?,
        Commands::Open { view } => auth::open(&app, &view).await?,
        Commands::Catalog { action } => catalog::run(&app, action)?,
        Commands::Book { action } => booking::run(&app, action).await?,
        Commands::Bookings => booking::history(&app).await?,
    }

    Ok(())
}
