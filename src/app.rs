//! Headless entry points used by the command line

use crate::database::LocalStorage;
use crate::downloader::MockDownloader;
use crate::extractor::{Extractor, MockTikTokExtractor, VideoInfo};
use crate::history::{clear_persisted_history, persist_history, restore_history, HistoryItem};
use crate::session::Session;
use crate::utils::{get_database_path, AppSettings};
use anyhow::{anyhow, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

/// Open local storage at `path`, or at the platform default
pub async fn open_storage(path: Option<PathBuf>) -> Result<LocalStorage> {
    let path = path.unwrap_or_else(get_database_path);
    LocalStorage::open(&path).await
}

/// Resolve `url`, record it in the history and optionally simulate a download
pub async fn run_lookup(
    storage: &LocalStorage,
    settings: &AppSettings,
    url: &str,
    quality_id: Option<&str>,
) -> Result<()> {
    let history = restore_history(storage, settings.history_limit).await?;
    let mut session = Session::new(history, settings.progress_step);

    let clean_url = session.submit(url)?;
    println!("Analisando {} ...", clean_url);

    let extractor = MockTikTokExtractor::new(settings.resolve_delay());
    let info = match extractor.extract_info(&clean_url).await {
        Ok(info) => info,
        Err(e) => {
            session.fail_resolution(e.to_string());
            return Err(e);
        }
    };
    session.complete_resolution(&clean_url, info.clone());

    if let Err(e) = persist_history(storage, session.history()).await {
        warn!("Failed to persist history: {}", e);
    }

    print_video(&info);

    let Some(quality_id) = quality_id else {
        return Ok(());
    };

    let quality = session.select_quality(quality_id)?;
    println!();
    println!("Preparando seu arquivo: {} ({})", quality.label, quality.resolution);

    let downloader = MockDownloader::new(settings.download_config());
    let (handle, mut events) = downloader.spawn(quality);

    while let Some(event) = events.recv().await {
        if let Some(notice) = session.apply_download_event(&event) {
            println!();
            println!("{}", notice);
            break;
        }
        if session.is_downloading() {
            let percent = session.progress().percent;
            print!("\r{} {:>3}%", render_bar(percent), percent);
            std::io::stdout().flush().ok();
        }
    }

    handle
        .wait()
        .await
        .ok_or_else(|| anyhow!("Download task was aborted"))?;
    Ok(())
}

/// Print the persisted history, newest first
pub async fn print_history(storage: &LocalStorage, settings: &AppSettings) -> Result<()> {
    let history = restore_history(storage, settings.history_limit).await?;
    if history.is_empty() {
        println!("Nenhum download recente.");
        return Ok(());
    }

    println!("ÚLTIMOS DOWNLOADS");
    for item in history.items() {
        println!("{}", format_history_line(item));
    }
    Ok(())
}

/// Remove the persisted history
pub async fn clear_history(storage: &LocalStorage) -> Result<()> {
    clear_persisted_history(storage).await?;
    println!("Histórico limpo.");
    Ok(())
}

fn print_video(info: &VideoInfo) {
    println!();
    println!("{}", info.title);
    println!("@{}  •  Duração: {}", info.creator, info.duration);
    println!("Thumbnail: {}", info.thumbnail);
    println!();
    for q in &info.qualities {
        println!("  [{:>4}] {:<14} {:<18} {}", q.id, q.label, q.resolution, q.size);
    }
}

fn format_history_line(item: &HistoryItem) -> String {
    let when = item
        .created_at()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "?".to_string());
    format!(
        "{}  @{:<14} {:<28} {}",
        when, item.data.creator, item.data.title, item.url
    )
}

/// Text progress bar, one cell per ten percent
fn render_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100) / 10);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}
