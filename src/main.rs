use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use counterplusplus::config::Config;
use counterplusplus::counter::CounterStore;
use counterplusplus::logging::init_tracing;
use counterplusplus::shutdown::ShutdownHandle;
use counterplusplus::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "counterplusplus", version, about = "Counter++ with auto-increment")]
struct Cli {
    /// Config file (default: ~/.config/counterplusplus/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial auto-increment interval in seconds (1-10)
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..=10))]
    interval: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(seconds) = self.interval {
            config.counter.interval_ms = seconds * 1000;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);

    init_tracing(&config.logging).context("Failed to open log file")?;
    tracing::info!(config = %config_path.display(), interval_ms = config.counter.interval_ms, "Starting");

    let timer_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("counter-timer")
        .enable_time()
        .build()
        .context("Failed to start timer runtime")?;

    let store = CounterStore::with_interval(timer_runtime.handle().clone(), config.counter.interval_ms);
    let shutdown = ShutdownHandle::new();
    shutdown
        .register_signals()
        .context("Failed to register signal handlers")?;

    runtime::run(store, &config.ui, shutdown).context("Terminal UI failed")?;
    Ok(())
}
