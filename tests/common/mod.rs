//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use steam_lookup::{ClientConfig, Result, SteamError, SteamLookupClient, Transport};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

// == Scripted transport ==

/// A request as the client issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub query: Vec<(String, String)>,
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<String>>>,
    requests: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
    pub fn with(responses: Vec<Result<String>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        self.requests.borrow_mut().push(Request {
            url: url.to_string(),
            query: query.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        });
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request #{}", self.calls()))
    }
}

pub fn unavailable() -> Result<String> {
    Err(SteamError::Status {
        status: 503,
        url: "https://api.steampowered.com/ISteamApps/GetAppList/v2/".to_string(),
    })
}

pub fn ok(body: &str) -> Result<String> {
    Ok(body.to_string())
}

pub const COUNTER_STRIKE: &str = r#"{"applist":{"apps":[{"appid":10,"name":"Counter-Strike"}]}}"#;
pub const EMPTY_LIST: &str = r#"{"applist":{"apps":[]}}"#;

pub fn client(transport: &ScriptedTransport) -> SteamLookupClient<&ScriptedTransport> {
    SteamLookupClient::with_transport("test-key", ClientConfig::default(), transport)
}

// == Log capture ==

/// Collects `(level, message)` for every event emitted by this crate.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<(Level, String)>>>);

impl CapturedLogs {
    pub fn events(&self) -> Vec<(Level, String)> {
        self.0.lock().unwrap().clone()
    }

    pub fn at(&self, level: Level) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|(event_level, _)| *event_level == level)
            .map(|(_, message)| message)
            .collect()
    }
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("steam_lookup") {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.0
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}

/// Runs `f` with a subscriber that records this crate's log events.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, CapturedLogs) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::registry().with(logs.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs)
}
