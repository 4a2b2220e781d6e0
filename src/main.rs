//! VidTik - TikTok video downloader (simulated)
//!
//! Paste a TikTok link, inspect the mocked video metadata and walk through a
//! simulated MP4/MP3 download. Launches the GUI unless a headless flag is given.

use anyhow::Result;
use clap::Parser;
use iced::Application;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use vidtik::database::LocalStorage;
use vidtik::gui::{AppFlags, VidtikApp};
use vidtik::history::restore_history;
use vidtik::utils::AppSettings;
use vidtik::{app, HistoryCache};

#[derive(Parser)]
#[command(name = "vidtik", version, about = "Baixe vídeos do TikTok sem marca d'água")]
struct Args {
    /// Analyze a TikTok link without opening the window
    #[arg(long)]
    url: Option<String>,

    /// Quality to download after analyzing (1080, 720, 480 or mp3)
    #[arg(long, requires = "url")]
    quality: Option<String>,

    /// Print the recent downloads history
    #[arg(long)]
    history: bool,

    /// Remove the recent downloads history
    #[arg(long)]
    clear_history: bool,

    /// Use this database file instead of the default location
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let runtime = Arc::new(tokio::runtime::Runtime::new()?);

    if args.url.is_some() || args.history || args.clear_history {
        return runtime.block_on(run_headless(args));
    }

    let flags = runtime.block_on(load_gui_state(args.db, Arc::clone(&runtime)));

    // Start the GUI application (synchronous entrypoint)
    VidtikApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(1100.0, 800.0),
            min_size: Some(iced::Size::new(480.0, 600.0)),
            ..Default::default()
        },
        antialiasing: true,
        ..iced::Settings::with_flags(flags)
    })?;

    Ok(())
}

async fn run_headless(args: Args) -> Result<()> {
    let storage = app::open_storage(args.db).await?;
    let settings = load_settings(&storage).await;

    let outcome = if args.clear_history {
        app::clear_history(&storage).await
    } else if let Some(url) = args.url {
        app::run_lookup(&storage, &settings, &url, args.quality.as_deref()).await
    } else {
        app::print_history(&storage, &settings).await
    };

    storage.close().await;
    outcome
}

/// Open storage and restore state for the window; never fails, the GUI
/// falls back to an in-memory store
async fn load_gui_state(db: Option<PathBuf>, runtime: Arc<tokio::runtime::Runtime>) -> AppFlags {
    let storage = match app::open_storage(db).await {
        Ok(storage) => Some(storage),
        Err(e) => {
            warn!("Could not open local storage, history will not be kept: {:#}", e);
            LocalStorage::open_in_memory()
                .await
                .map_err(|e| warn!("In-memory storage failed too: {:#}", e))
                .ok()
        }
    };

    let settings = match &storage {
        Some(storage) => load_settings(storage).await,
        None => AppSettings::default(),
    };

    let history = match &storage {
        Some(storage) => restore_history(storage, settings.history_limit)
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to restore history: {:#}", e);
                HistoryCache::new(settings.history_limit)
            }),
        None => HistoryCache::new(settings.history_limit),
    };

    AppFlags {
        runtime,
        storage,
        settings,
        history,
    }
}

async fn load_settings(storage: &LocalStorage) -> AppSettings {
    AppSettings::load(storage).await.unwrap_or_else(|e| {
        warn!("Failed to load settings, using defaults: {:#}", e);
        AppSettings::default()
    })
}
