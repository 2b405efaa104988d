use clap::Parser;
use std::path::PathBuf;
use supen_core::collect::Collector;
use supen_core::config::Settings;
use supen_core::domain::returns::Horizon;
use supen_core::ingest::supen::SupenClient;
use supen_core::ingest::FetchError;
use supen_core::ranking::RankingTable;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "supen_cli",
    about = "Rank pension-fund operators by SUPEN nominal returns."
)]
struct Args {
    /// Optional path to a CSV file where the ranking will be saved.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Horizon used to order the ranking: short, medium or long.
    #[arg(long, default_value = "long")]
    sort: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let result = run(&settings, &args).await;
    if let Err(err) = &result {
        sentry_anyhow::capture_anyhow(err);
        tracing::error!(error = %err, "ranking run failed");
    }
    result
}

async fn run(settings: &Settings, args: &Args) -> anyhow::Result<()> {
    let sort_key = Horizon::parse(&args.sort)
        .ok_or_else(|| FetchError::Config(format!("unknown sort horizon: {}", args.sort)))?;

    let client = SupenClient::from_settings(settings)?;
    let records = Collector::new(client).collect().await?;

    tracing::info!(
        operators = records.len(),
        sort = sort_key.label(),
        "collected returns; building ranking"
    );

    let table = RankingTable::build(records, sort_key);
    print!("{}", supen_core::export::render_console(&table));

    if let Some(path) = &args.out {
        supen_core::export::export_csv(&table, path)?;
        println!("Results saved to {}", path.display());
    }

    Ok(())
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
