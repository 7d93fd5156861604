//! Entry point for the shop front.
//!
//! - Parse command-line arguments (data directory, `--config`, `--print-config`).
//! - Load user configuration, defaulting to `conf/config.toml`.
//! - Open the document store and restore the cached display language.
//! - Launch the GUI.

mod app;
mod auth;
mod cache;
mod config;
mod content;
mod i18n;
mod image_encode;
mod navigation;
mod store;
mod theme;

use crate::app::{Launch, run_app};
use crate::auth::ConfigAuth;
use crate::cache::{CACHE_DIR, load_language};
use crate::config::{load_config, serialize_config};
use crate::store::JsonFileStore;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";

/// Set from the Ctrl+C handler; drained by the app's signal poll.
static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

pub(crate) fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::SeqCst)
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args()?;
    let mut config = load_config(&args.config_path);
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir.display().to_string();
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());
    if args.print_config {
        print!("{}", serialize_config(&config)?);
        return Ok(());
    }

    if let Err(err) = ctrlc::set_handler(|| {
        SIGINT_REQUESTED.store(true, Ordering::SeqCst);
    }) {
        warn!("Failed to install Ctrl+C signal handler: {err}");
    }

    let store = JsonFileStore::new(&config.data_dir);
    let cache_dir = PathBuf::from(CACHE_DIR);
    let language = load_language(&cache_dir).unwrap_or_default();
    info!(
        data_dir = %store.root().display(),
        config = %args.config_path.display(),
        level = %config.log_level,
        pointer = %config.pointer,
        %language,
        "Starting shop front"
    );

    let auth = ConfigAuth::from(&config);
    run_app(Launch {
        config,
        store: Arc::new(store),
        auth: Arc::new(auth),
        cache_dir,
        language,
    })
    .context("Failed to start the GUI")?;
    Ok(())
}

struct Args {
    data_dir: Option<PathBuf>,
    config_path: PathBuf,
    print_config: bool,
}

const USAGE: &str = "Usage: atelier [data-dir] [--config <path>] [--print-config]";

fn parse_args() -> Result<Args> {
    let mut data_dir = None;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut print_config = false;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or_else(|| anyhow!(USAGE))?;
                config_path = PathBuf::from(path);
            }
            "--print-config" => print_config = true,
            flag if flag.starts_with("--") => {
                return Err(anyhow!("Unknown option: {flag}"));
            }
            _ if data_dir.is_none() => data_dir = Some(PathBuf::from(&arg)),
            _ => return Err(anyhow!(USAGE)),
        }
    }
    if let Some(dir) = data_dir.as_deref() {
        if Path::new(dir).is_file() {
            return Err(anyhow!("Data directory is a file: {}", dir.display()));
        }
    }
    Ok(Args {
        data_dir,
        config_path,
        print_config,
    })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
