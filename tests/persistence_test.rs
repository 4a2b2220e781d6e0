use std::time::Duration;
use tempfile::tempdir;
use vidtik::database::LocalStorage;
use vidtik::extractor::{Extractor, MockTikTokExtractor};
use vidtik::history::{persist_history, restore_history, HistoryCache, HISTORY_KEY};
use vidtik::utils::AppSettings;

#[tokio::test]
async fn test_history_survives_reopen() {
    // 1. Setup temporary directory
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("vidtik.db");

    // 2. Previous session records two lookups
    let storage = LocalStorage::open(&db_path)
        .await
        .expect("Failed to open storage");
    let extractor = MockTikTokExtractor::with_seed(Duration::ZERO, 42);
    let mut cache = HistoryCache::new(10);
    for url in ["https://vm.tiktok.com/a", "https://www.tiktok.com/@x/video/2"] {
        let info = extractor.extract_info(url).await.unwrap();
        cache.record(url, info);
    }
    persist_history(&storage, &cache).await.unwrap();
    storage.close().await;

    // 3. Rehydrate in a new session
    let storage = LocalStorage::open(&db_path)
        .await
        .expect("Failed to reopen storage");
    let restored = restore_history(&storage, 10).await.unwrap();

    assert_eq!(restored.items(), cache.items());
    assert_eq!(restored.items()[0].url, "https://www.tiktok.com/@x/video/2");
}

#[tokio::test]
async fn test_stored_history_uses_camel_case_items() {
    let temp_dir = tempdir().unwrap();
    let storage = LocalStorage::open(&temp_dir.path().join("vidtik.db"))
        .await
        .unwrap();
    let extractor = MockTikTokExtractor::with_seed(Duration::ZERO, 9);

    let mut cache = HistoryCache::new(10);
    let info = extractor.extract_info("https://tiktok.com/v/1").await.unwrap();
    cache.record("https://tiktok.com/v/1", info);
    persist_history(&storage, &cache).await.unwrap();

    let raw = storage.get_item(HISTORY_KEY).await.unwrap().expect("stored");
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &json[0];

    assert!(entry["id"].is_string());
    assert!(entry["timestamp"].is_i64());
    assert_eq!(entry["url"], "https://tiktok.com/v/1");
    assert_eq!(entry["data"]["duration"], "00:30");
    assert_eq!(entry["data"]["qualities"][3]["isAudio"], true);
    assert!(entry["data"]["qualities"][0].get("isAudio").is_none());
}

#[tokio::test]
async fn test_corrupt_history_is_discarded() {
    let temp_dir = tempdir().unwrap();
    let storage = LocalStorage::open(&temp_dir.path().join("vidtik.db"))
        .await
        .unwrap();

    storage.set_item(HISTORY_KEY, "{not json").await.unwrap();

    let restored = restore_history(&storage, 10).await.expect("startup continues");
    assert!(restored.is_empty());
}

#[tokio::test]
async fn test_oversized_history_is_truncated_on_restore() {
    let storage = LocalStorage::open_in_memory().await.unwrap();
    let extractor = MockTikTokExtractor::with_seed(Duration::ZERO, 11);

    let mut cache = HistoryCache::new(20);
    for n in 0..15 {
        let url = format!("https://vm.tiktok.com/{}", n);
        let info = extractor.extract_info(&url).await.unwrap();
        cache.record(&url, info);
    }
    persist_history(&storage, &cache).await.unwrap();

    let restored = restore_history(&storage, 10).await.unwrap();
    assert_eq!(restored.len(), 10);
    assert_eq!(restored.items()[0].url, "https://vm.tiktok.com/14");
}

#[tokio::test]
async fn test_settings_overrides_round_trip_through_storage() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("vidtik.db");

    let storage = LocalStorage::open(&db_path).await.unwrap();
    assert_eq!(AppSettings::load(&storage).await.unwrap(), AppSettings::default());

    let custom = AppSettings {
        progress_step: 20,
        history_limit: 5,
        ..AppSettings::default()
    };
    custom.save(&storage).await.unwrap();
    storage.close().await;

    let storage = LocalStorage::open(&db_path).await.unwrap();
    assert_eq!(AppSettings::load(&storage).await.unwrap(), custom);

    // Partial overrides keep defaults for the rest
    storage
        .set_item("vidtik_settings", r#"{"progress_step": 0}"#)
        .await
        .unwrap();
    let loaded = AppSettings::load(&storage).await.unwrap();
    assert_eq!(loaded.progress_step, 1);
    assert_eq!(loaded.history_limit, 10);
}
