use std::path::PathBuf;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hevysync::{Config, Renderer, Vault, WorkoutsClient};

#[derive(Parser)]
#[command(name = "hevysync")]
#[command(version)]
#[command(about = "Sync Hevy workouts into a markdown vault", long_about = None)]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch workouts in a window and write one note per workout
    Sync {
        #[command(flatten)]
        window: WindowArgs,

        /// Vault directory, overrides HEVY_VAULT_DIR
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the full markdown for workouts in a window
    Show {
        #[command(flatten)]
        window: WindowArgs,
    },
}

#[derive(Args)]
struct WindowArgs {
    /// Day to fetch (YYYY-MM-DD); defaults to today
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    date: Option<NaiveDate>,

    /// Window start (RFC 3339)
    #[arg(long, requires = "to")]
    from: Option<DateTime<Utc>>,

    /// Window end (RFC 3339)
    #[arg(long, requires = "from")]
    to: Option<DateTime<Utc>>,
}

fn resolve_window(args: &WindowArgs) -> (DateTime<Utc>, DateTime<Utc>) {
    if let (Some(from), Some(to)) = (args.from, args.to) {
        return (from, to);
    }
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());
    let start = date.and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::days(1) - Duration::milliseconds(1);
    (start, end)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose > 0 {
        "hevysync=debug"
    } else {
        "hevysync=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let client = WorkoutsClient::new(&config);

    match cli.command {
        Commands::Sync { window, out } => {
            let (start, end) = resolve_window(&window);
            tracing::info!(%start, %end, "fetching workouts for range");

            let workouts = client.fetch_for_range(start, end).await?;
            tracing::info!(count = workouts.len(), "workouts overlap the range");

            let dir = out
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| config.vault_dir.clone());
            let renderer = Renderer::new(dir.clone());
            let vault = Vault::new(&dir);

            print!("{}", renderer.workout_summaries(&workouts));
            for workout in &workouts {
                vault.write_workout(workout, &renderer.workout_note(workout))?;
            }
        }
        Commands::Show { window } => {
            let (start, end) = resolve_window(&window);
            let workouts = client.fetch_for_range(start, end).await?;

            let renderer = Renderer::new(config.vault_dir.clone());
            print!("{}", renderer.workouts_note(&workouts));
        }
    }

    Ok(())
}
