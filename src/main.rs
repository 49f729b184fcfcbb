use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dogfeed::api::{Dog, HttpDogApi, MAX_LIMIT, MIN_LIMIT};
use dogfeed::config::Config;
use dogfeed::logging;
use dogfeed::presentation::DogsListPresenter;
use dogfeed::repository::{DogRepository, RestDogRepository};
use dogfeed::shutdown::{ShutdownCoordinator, ShutdownHandle};
use dogfeed::ui;

#[derive(Debug, Parser)]
#[command(name = "dogfeed", version, about = "Random dog pictures in your terminal")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch one batch of dogs and print it
    Fetch {
        /// Number of dogs to request (defaults to presenter.batch_size)
        #[arg(
            long,
            value_parser = clap::value_parser!(u8).range(MIN_LIMIT as i64..=MAX_LIMIT as i64)
        )]
        limit: Option<u8>,

        /// Print the dogs as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    match cli.command {
        Some(Command::Fetch { limit, json }) => {
            logging::init_stderr_logging();
            run_fetch(&config, limit.unwrap_or(config.presenter.batch_size), json)
        }
        None => {
            logging::init_file_logging();
            run_tui(&config)
        }
    }
}

fn build_runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("dogfeed-worker")
        .build()
        .context("Failed to start async runtime")
}

fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn DogRepository>> {
    let api = HttpDogApi::new(&config.api)?;
    Ok(Arc::new(RestDogRepository::new(Arc::new(api))))
}

fn run_tui(config: &Config) -> anyhow::Result<()> {
    let runtime = build_runtime()?;
    let shutdown = ShutdownCoordinator::new();

    let result = {
        let _enter = runtime.enter();
        shutdown.listen_for_signals();

        let repository = build_repository(config)?;
        let presenter = DogsListPresenter::new(repository, &config.presenter);
        tracing::info!(base_url = %config.api.base_url, "Starting dogfeed");

        let result = ui::run(&config.ui, &presenter, shutdown.handle());

        // Stops the input thread.
        shutdown.signal();
        presenter.destroy();
        result
    };

    runtime.shutdown_timeout(Duration::from_secs(1));
    tracing::info!("Shutdown complete");
    result.context("Terminal UI failed")
}

fn run_fetch(config: &Config, limit: u8, json: bool) -> anyhow::Result<()> {
    let runtime = build_runtime()?;
    let shutdown = ShutdownCoordinator::new();

    let dogs = runtime.block_on(async {
        shutdown.listen_for_signals();
        fetch_dogs(config, limit, shutdown.handle()).await
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dogs)?);
    } else {
        for dog in &dogs {
            println!("{}", format_dog_line(dog));
        }
    }
    Ok(())
}

async fn fetch_dogs(config: &Config, limit: u8, shutdown: ShutdownHandle) -> anyhow::Result<Vec<Dog>> {
    let repository = build_repository(config)?;

    tokio::select! {
        result = repository.get_random_dogs(limit) => {
            result.context("Could not load dog pictures")
        }
        _ = shutdown.wait() => anyhow::bail!("Interrupted"),
    }
}

fn format_dog_line(dog: &Dog) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        dog.id,
        dog.format.to_lowercase(),
        dog.time,
        dog.url
    )
}
