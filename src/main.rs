mod commands;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use session::Session;

#[derive(Parser)]
#[command(name = "pawsistente")]
#[command(about = "Plan your convention schedule: pick days, browse events, avoid conflicts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or choose the convention days you will attend
    Days {
        /// Days to attend (e.g. "viernes", "sat", "SAB")
        days: Vec<String>,

        /// Attend every day
        #[arg(long, conflicts_with_all = ["days", "clear"])]
        all: bool,

        /// Forget the chosen days
        #[arg(long, conflicts_with = "days")]
        clear: bool,
    },
    /// List the schedule
    Events {
        /// Only events whose title, description, tags or host match
        #[arg(short, long)]
        search: Option<String>,

        /// Only events on this day
        #[arg(short, long)]
        day: Option<String>,
    },
    /// Go through pending events one by one
    Browse,
    /// Add an event to your schedule
    Add {
        /// Event id as shown by `events`
        id: String,
    },
    /// Skip an event
    Skip { id: String },
    /// Remove an event from your schedule
    Remove { id: String },
    /// Show how an event collides with your schedule
    Conflicts { id: String },
    /// Show your schedule
    Schedule {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Bring skipped events back for another look
    Review,
    /// Export your schedule as an .ics calendar
    Export {
        /// Output file (defaults to <convention>-events-<date>.ics)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show saved progress
    Status,
    /// Start over
    Reset {
        /// Only go back to day selection, keep selections
        #[arg(long)]
        navigation: bool,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PAWSISTENTE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = Session::open()?;

    let result = match cli.command {
        Commands::Days { days, all, clear } => commands::days::run(&mut session, days, all, clear),
        Commands::Events { search, day } => commands::events::run(&session, search, day).await,
        Commands::Browse => commands::browse::run(&mut session).await,
        Commands::Add { id } => commands::decide::add(&mut session, &id).await,
        Commands::Skip { id } => commands::decide::skip(&mut session, &id).await,
        Commands::Remove { id } => commands::decide::remove(&mut session, &id),
        Commands::Conflicts { id } => commands::conflicts::run(&session, &id).await,
        Commands::Schedule { json } => commands::schedule::run(&mut session, json),
        Commands::Review => commands::review::run(&mut session),
        Commands::Export { output } => commands::export::run(&session, output).await,
        Commands::Status => commands::status::run(&session),
        Commands::Reset { navigation, yes } => commands::reset::run(&mut session, navigation, yes),
    };

    session.close();
    result
}
