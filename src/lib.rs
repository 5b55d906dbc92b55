//! Steam Lookup - resolve Steam vanity names and game names
//!
//! Thin client over the `ResolveVanityURL` and `GetAppList` endpoints of the
//! Steam Web API, with a per-client memoized app list.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod steam_api;
mod utils;

pub use client::SteamLookupClient;
pub use config::ClientConfig;
pub use error::{Result, SteamError};
pub use models::App;
pub use steam_api::{HttpTransport, Transport};
