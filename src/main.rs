//! botadmin command-line entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use botadmin::commands::{analytics, bots, subscriptions};
use botadmin::commands::bots::BotFieldArgs;
use botadmin::config::Settings;
use botadmin::models::SubscriptionFilter;
use botadmin::services::ServiceFactory;
use botadmin::utils::logging;

#[derive(Debug, Parser)]
#[command(name = "botadmin")]
#[command(about = "Administrative dashboard for chatbot configurations and analytics")]
#[command(version)]
struct App {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage bot configurations
    Bots {
        #[command(subcommand)]
        command: BotCommands,
    },
    /// List subscriptions with optional filters
    Subscriptions {
        /// Only show subscriptions with this exact status
        #[arg(long)]
        status: Option<String>,
        /// Only show subscriptions for this bot
        #[arg(long)]
        bot: Option<String>,
        /// Only show subscriptions with this plan label
        #[arg(long)]
        plan: Option<String>,
    },
    /// Show the usage analytics dashboard
    Analytics {
        /// Emit the full report as JSON instead of tables and charts
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
enum BotCommands {
    /// List all configured bots
    List,
    /// Show one bot configuration in full
    Show {
        /// Bot id
        id: i64,
    },
    /// Create a new bot; fields come from a TOML file and/or flags
    Create {
        /// TOML file with the bot fields
        #[arg(long)]
        file: Option<PathBuf>,
        #[command(flatten)]
        fields: BotFieldArgs,
    },
    /// Edit an existing bot; set fields overwrite the stored values verbatim
    Edit {
        /// Bot id
        id: i64,
        #[command(flatten)]
        fields: BotFieldArgs,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let app = App::parse();

    let settings = Settings::new()?;
    settings.validate()?;

    let _guard = logging::init_logging(&settings.logging)?;
    debug!(command = ?app.command, "Dispatching command");

    let services = ServiceFactory::new(&settings)?;

    match app.command {
        Commands::Bots { command } => match command {
            BotCommands::List => bots::list(&services.bot_service).await?,
            BotCommands::Show { id } => bots::show(&services.bot_service, id).await?,
            BotCommands::Create { file, fields } => {
                bots::create(&services.bot_service, file.as_deref(), &fields).await?
            }
            BotCommands::Edit { id, fields } => {
                bots::edit(&services.bot_service, id, &fields).await?
            }
        },
        Commands::Subscriptions { status, bot, plan } => {
            let filter = SubscriptionFilter { status, bot, plan };
            subscriptions::list(&services.subscription_service, &filter).await?
        }
        Commands::Analytics { json } => {
            analytics::dashboard(&services.interaction_service, json).await?
        }
    }

    Ok(())
}
