//! Forecast bundle cache persisted as JSON files
//!
//! Stores the paired marine and wind responses for one spot and date range
//! under an XDG-compliant cache directory (`~/.cache/surfcheck/` on Linux).
//! Entries carry an expiry timestamp; expired bundles are still returned
//! (flagged stale) so a report can be produced when Open-Meteo is down.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::engine::{MarineHourly, WindHourly};

/// The paired provider responses the bulletin is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastBundle {
    pub marine: MarineHourly,
    pub wind: WindHourly,
}

/// On-disk wrapper for a cached bundle
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    bundle: ForecastBundle,
    cached_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// Result of reading from the cache
#[derive(Debug)]
pub struct CachedBundle {
    /// The cached provider responses
    pub bundle: ForecastBundle,
    /// When the bundle was fetched
    pub cached_at: DateTime<Utc>,
    /// True when the entry is past its expiry and should be refreshed if
    /// the network allows
    pub is_stale: bool,
}

/// Reads and writes forecast bundles under the cache directory.
#[derive(Debug, Clone)]
pub struct ForecastCache {
    cache_dir: PathBuf,
}

impl ForecastCache {
    /// Creates a cache rooted at the XDG-compliant directory.
    ///
    /// Returns `None` if the platform provides no cache path (e.g. no home
    /// directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "surfcheck")?;
        Some(Self {
            cache_dir: project_dirs.cache_dir().to_path_buf(),
        })
    }

    /// Creates a cache rooted at a custom directory, for tests.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// File path for one spot and date range.
    fn entry_path(&self, spot_id: &str, start: NaiveDate, end: NaiveDate) -> PathBuf {
        self.cache_dir
            .join(format!("{}_{}_{}.json", spot_id, start, end))
    }

    /// Stores a freshly fetched bundle with the given TTL in hours.
    pub fn store(
        &self,
        spot_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        bundle: &ForecastBundle,
        ttl_hours: i64,
    ) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)?;

        let now = Utc::now();
        let entry = CacheEntry {
            bundle: bundle.clone(),
            cached_at: now,
            expires_at: now + Duration::hours(ttl_hours),
        };

        let json = serde_json::to_string_pretty(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(self.entry_path(spot_id, start, end), json)
    }

    /// Loads the bundle for a spot and date range.
    ///
    /// Returns `None` when no entry exists or it cannot be parsed; a stale
    /// entry is returned with `is_stale = true` rather than discarded.
    pub fn load(&self, spot_id: &str, start: NaiveDate, end: NaiveDate) -> Option<CachedBundle> {
        let path = self.entry_path(spot_id, start, end);
        let content = fs::read_to_string(path).ok()?;
        let entry: CacheEntry = serde_json::from_str(&content).ok()?;

        Some(CachedBundle {
            is_stale: Utc::now() > entry.expires_at,
            cached_at: entry.cached_at,
            bundle: entry.bundle,
        })
    }
}
