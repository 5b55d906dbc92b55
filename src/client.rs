//! Steam lookup client
//!
//! Resolves vanity names to Steam IDs and game names to app IDs. The app list
//! is fetched at most once per client and kept in memory afterwards.

use std::collections::HashMap;
use std::fmt;

use tracing::{error, info, warn};

use crate::config::ClientConfig;
use crate::error::{Result, SteamError};
use crate::models::{App, AppListResponse, VanityResponse};
use crate::steam_api::{HttpTransport, Transport};
use crate::utils::{build_name_index, normalize_name};

struct AppListCache {
    apps: Vec<App>,
    by_name: HashMap<String, u32>,
}

impl AppListCache {
    fn new(apps: Vec<App>) -> Self {
        let by_name = build_name_index(&apps);
        Self { apps, by_name }
    }
}

/// Client for the vanity-resolution and app-list endpoints.
///
/// Methods touching the app list cache take `&mut self`; share a client
/// between threads by wrapping it in a `Mutex`.
pub struct SteamLookupClient<T = HttpTransport> {
    api_key: String,
    config: ClientConfig,
    transport: T,
    app_list: Option<AppListCache>,
}

impl SteamLookupClient<HttpTransport> {
    /// Client talking to the public Steam endpoints with the default timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(api_key, config, transport))
    }
}

impl<T> SteamLookupClient<T> {
    pub fn with_transport(api_key: impl Into<String>, config: ClientConfig, transport: T) -> Self {
        Self {
            api_key: api_key.into(),
            config,
            transport,
            app_list: None,
        }
    }

    pub fn is_app_list_cached(&self) -> bool {
        self.app_list.is_some()
    }

    /// Forget the memoized app list; the next lookup fetches it again.
    pub fn clear_app_list_cache(&mut self) {
        self.app_list = None;
    }

    fn cached_app_id(&self, game_name: &str) -> Option<u32> {
        self.app_list
            .as_ref()
            .and_then(|cache| cache.by_name.get(&normalize_name(game_name)).copied())
    }
}

impl<T: Transport> SteamLookupClient<T> {
    /// Resolve a vanity name, keeping failures as errors.
    ///
    /// `Ok(None)` means Steam answered but knows no such vanity name.
    pub fn try_resolve_username(&self, username: &str) -> Result<Option<String>> {
        let query = [("key", self.api_key.as_str()), ("vanityurl", username)];
        let body = self.transport.get(&self.config.resolve_vanity_url, &query)?;
        let parsed: VanityResponse = serde_json::from_str(&body)?;

        Ok(parsed.response.steamid.filter(|steam_id| !steam_id.is_empty()))
    }

    /// Resolve a vanity name to a Steam ID. Failures are logged and reported
    /// as `None`.
    pub fn resolve_username(&self, username: &str) -> Option<String> {
        match self.try_resolve_username(username) {
            Ok(Some(steam_id)) => {
                info!("Retrieved Steam ID for username '{}': {}", username, steam_id);
                Some(steam_id)
            }
            Ok(None) => {
                warn!("Steam ID not found for username '{}'", username);
                None
            }
            Err(err) => {
                log_failure(&err, &format!("retrieving Steam ID for username '{}'", username));
                None
            }
        }
    }

    /// Fetch the app list unless it is already cached.
    ///
    /// An empty list is returned but not cached.
    pub fn try_fetch_app_list(&mut self) -> Result<&[App]> {
        if self.app_list.is_none() {
            let body = self.transport.get(&self.config.app_list_url, &[])?;
            let parsed: AppListResponse = serde_json::from_str(&body)?;
            let apps = parsed.applist.apps;

            if apps.is_empty() {
                warn!("Steam app list came back empty");
                return Ok(&[]);
            }

            info!("Retrieved Steam app list ({} apps)", apps.len());
            self.app_list = Some(AppListCache::new(apps));
        }

        Ok(self
            .app_list
            .as_ref()
            .map(|cache| cache.apps.as_slice())
            .unwrap_or_default())
    }

    /// Fetch the app list unless it is already cached. Failures are logged and
    /// yield an empty slice, leaving the cache unset so the next call retries.
    pub fn fetch_app_list(&mut self) -> &[App] {
        match self.try_fetch_app_list() {
            Ok(apps) => apps,
            Err(err) => {
                log_failure(&err, "retrieving Steam app list");
                &[]
            }
        }
    }

    /// Case-insensitive exact match on the app name.
    ///
    /// An empty name short-circuits to `Ok(None)` without touching the network.
    pub fn try_find_app_id(&mut self, game_name: &str) -> Result<Option<u32>> {
        if game_name.is_empty() {
            return Ok(None);
        }

        self.try_fetch_app_list()?;
        Ok(self.cached_app_id(game_name))
    }

    /// Case-insensitive exact match on the app name. On duplicate names the
    /// later entry of the app list wins.
    pub fn find_app_id(&mut self, game_name: &str) -> Option<u32> {
        if game_name.is_empty() {
            return None;
        }

        // An unavailable list was already logged as a failure, not a miss.
        if self.fetch_app_list().is_empty() {
            return None;
        }

        let app_id = self.cached_app_id(game_name);
        match app_id {
            Some(app_id) => info!("Found app ID for game '{}': {}", game_name, app_id),
            None => warn!("App ID not found for game '{}'", game_name),
        }
        app_id
    }
}

impl<T> fmt::Debug for SteamLookupClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteamLookupClient")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .field("app_list_cached", &self.is_app_list_cached())
            .finish_non_exhaustive()
    }
}

fn log_failure(err: &SteamError, context: &str) {
    if err.is_transport() {
        error!("Error {}: {}", context, err);
    } else {
        warn!("Unexpected response while {}: {}", context, err);
    }
}
