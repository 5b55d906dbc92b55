//! Client configuration
//!
//! Endpoints and request timeout used by [`crate::SteamLookupClient`].

use std::time::Duration;

pub const RESOLVE_VANITY_URL: &str = "http://api.steampowered.com/ISteamUser/ResolveVanityURL/v0001/";
pub const APP_LIST_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v2/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Vanity-name resolution endpoint
    pub resolve_vanity_url: String,
    /// Global app list endpoint
    pub app_list_url: String,
    /// Applied to every request so a stalled connection can't block forever
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_resolve_vanity_url(mut self, url: impl Into<String>) -> Self {
        self.resolve_vanity_url = url.into();
        self
    }

    pub fn with_app_list_url(mut self, url: impl Into<String>) -> Self {
        self.app_list_url = url.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            resolve_vanity_url: RESOLVE_VANITY_URL.to_string(),
            app_list_url: APP_LIST_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
