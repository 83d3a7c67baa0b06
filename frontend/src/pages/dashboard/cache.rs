//! localStorage snapshots of the last good stats and chart payloads.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    api::{ChartBucket, ChartPeriod, DashboardStats},
    utils::storage,
};

pub const STATS_CACHE_KEY: &str = "dashboard_stats_cache";
pub const CHART_CACHE_KEY: &str = "dashboard_chart_cache";
pub const CACHE_DURATION_MS: i64 = 5 * 60 * 1000;
/// Background refresh fires just before the cached entries go stale.
pub const REFRESH_INTERVAL_MS: u32 = (CACHE_DURATION_MS - 10_000) as u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<ChartPeriod>,
}

impl<T> CacheEntry<T> {
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        let age = now_ms - self.timestamp;
        (0..CACHE_DURATION_MS).contains(&age)
    }
}

fn read_entry<T: DeserializeOwned>(key: &str) -> Option<CacheEntry<T>> {
    let raw = match storage::get_item(key) {
        Ok(raw) => raw?,
        Err(err) => {
            log::warn!("dashboard cache unavailable: {}", err);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(entry) => Some(entry),
        Err(err) => {
            log::warn!("discarding unreadable cache entry {}: {}", key, err);
            let _ = storage::remove_item(key);
            None
        }
    }
}

fn write_entry<T: Serialize>(key: &str, entry: &CacheEntry<T>) {
    let result = serde_json::to_string(entry)
        .map_err(|e| e.to_string())
        .and_then(|raw| storage::set_item(key, &raw));
    if let Err(err) = result {
        log::warn!("failed to write cache entry {}: {}", key, err);
    }
}

pub fn read_stats(now_ms: i64) -> Option<DashboardStats> {
    read_entry::<DashboardStats>(STATS_CACHE_KEY)
        .filter(|entry| entry.is_fresh(now_ms))
        .map(|entry| entry.data)
}

pub fn write_stats(stats: &DashboardStats, now_ms: i64) {
    write_entry(
        STATS_CACHE_KEY,
        &CacheEntry {
            data: stats.clone(),
            timestamp: now_ms,
            period: None,
        },
    );
}

/// A fresh entry recorded for another period is a miss.
pub fn read_chart(period: ChartPeriod, now_ms: i64) -> Option<Vec<ChartBucket>> {
    read_entry::<Vec<ChartBucket>>(CHART_CACHE_KEY)
        .filter(|entry| entry.is_fresh(now_ms) && entry.period == Some(period))
        .map(|entry| entry.data)
}

pub fn write_chart(period: ChartPeriod, data: &[ChartBucket], now_ms: i64) {
    write_entry(
        CHART_CACHE_KEY,
        &CacheEntry {
            data: data.to_vec(),
            timestamp: now_ms,
            period: Some(period),
        },
    );
}

pub fn clear() {
    let _ = storage::remove_item(STATS_CACHE_KEY);
    let _ = storage::remove_item(CHART_CACHE_KEY);
}
