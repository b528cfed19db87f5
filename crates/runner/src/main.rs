use anyhow::{Context, bail};
use clap::Parser;
use envbadge_clock::{Clock, SystemClock};
use envbadge_ports::SignalSource;
use envbadge_runner::config::{WatchConfigFile, load_config, load_default_config};
use envbadge_runner::{BadgePoller, FileSignalSource, LogBadgeSink, StaticSignalSource};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;

/// Watch environment signals and report badge changes
#[derive(Parser, Debug)]
#[command(name = "envbadge-watch", version)]
struct Cli {
    /// JSON config file (defaults to the embedded profiles)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind a lane to a file holding its signal: LANE=PATH (repeatable)
    #[arg(long = "signal-file", value_name = "LANE=PATH")]
    signal_files: Vec<String>,

    /// Pin a lane to a fixed signal: LANE=VALUE (repeatable)
    #[arg(long = "signal", value_name = "LANE=VALUE")]
    signals: Vec<String>,

    /// Override the poll interval
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Poll once and exit. Suppression windows are zeroed so the single
    /// poll reports the current environment instead of `NoChange`
    #[arg(long)]
    once: bool,
}

/// Apply command-line overrides on top of the loaded config
fn apply_overrides(cli: &Cli, config: &mut WatchConfigFile) {
    if let Some(ms) = cli.interval_ms {
        config.poll_interval_ms = ms;
    }
    if cli.once {
        config.initial_suppress_ms = 0;
        config.change_suppress_ms = 0;
    }
}

fn split_binding(binding: &str) -> anyhow::Result<(&str, &str)> {
    match binding.split_once('=') {
        Some((lane, value)) if !lane.is_empty() => Ok((lane, value)),
        _ => bail!("expected LANE=VALUE, got '{}'", binding),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => load_default_config()?,
    };
    apply_overrides(&cli, &mut config);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let chain = config.build_chain(clock.now())?;
    let mut poller = BadgePoller::new(
        chain,
        Box::new(LogBadgeSink::new()),
        clock,
        config.poll_interval(),
    );

    for binding in &cli.signal_files {
        let (lane, path) = split_binding(binding)?;
        let source: Box<dyn SignalSource> = Box::new(FileSignalSource::new(path));
        poller.bind_source(lane, source)?;
    }
    for binding in &cli.signals {
        let (lane, value) = split_binding(binding)?;
        let signal = (!value.is_empty()).then(|| value.to_string());
        poller.bind_source(lane, Box::new(StaticSignalSource::new(signal)))?;
    }

    if cli.once {
        let decision = poller.poll_once();
        log::info!("Decision: {:?}", decision);
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Ctrl-C received, stopping");
        }
        let _ = shutdown_tx.send(true);
    });

    let stats = poller.run(shutdown_rx).await;
    log::info!(
        "Polls: {}, shows: {}, hides: {}, source errors: {}",
        stats.polls,
        stats.shows,
        stats.hides,
        stats.source_errors
    );
    Ok(())
}
