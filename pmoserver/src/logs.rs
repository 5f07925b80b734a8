//! Système de logs en mémoire
//!
//! Capture les événements `tracing` dans un buffer circulaire partagé, exposé
//! en JSON via la route `/log-dump`. Le subscriber installé ici est le puits
//! de logs de tout le processus : les crates métier se contentent d'émettre
//! via les macros `tracing`.

use std::{
    collections::VecDeque,
    fmt::Write as _,
    sync::{Arc, RwLock},
    time::SystemTime,
};

use axum::{Json, extract::State, response::IntoResponse};
use pmoconfig::get_config;
use serde::Serialize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    Layer, Registry,
    filter::LevelFilter,
    layer::{Context, SubscriberExt},
    util::SubscriberInitExt,
};

/// Représente une entrée de log
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: SystemTime,
    pub level: String,
    pub target: String,
    pub message: String,
}

/// Buffer circulaire partagé
#[derive(Clone)]
pub struct LogState {
    buffer: Arc<RwLock<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl LogState {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn push(&self, entry: LogEntry) {
        let mut buf = self.buffer.write().unwrap();
        if buf.len() == self.capacity {
            buf.pop_front();
        }
        buf.push_back(entry);
    }

    pub fn dump(&self) -> Vec<LogEntry> {
        self.buffer.read().unwrap().iter().cloned().collect()
    }
}

/// Layer `tracing` qui alimente le buffer
pub struct BufferLayer {
    state: LogState,
}

impl BufferLayer {
    pub fn new(state: LogState) -> Self {
        Self { state }
    }
}

impl<S: Subscriber> Layer<S> for BufferLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.state.push(LogEntry {
            timestamp: SystemTime::now(),
            level: event.metadata().level().to_string(),
            target: event.metadata().target().to_string(),
            message: visitor.message,
        });
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            if !self.message.is_empty() {
                self.message.push(' ');
            }
            let _ = write!(self.message, "{}={:?}", field.name(), value);
        }
    }
}

/// Handler REST (dump JSON du buffer)
pub async fn log_dump(State(state): State<LogState>) -> impl IntoResponse {
    Json(state.dump())
}

/// Options d'initialisation du système de logging
#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// Capacité du buffer circulaire (nombre d'entrées conservées)
    pub buffer_capacity: usize,
    /// Niveau minimum des événements capturés
    pub min_level: Level,
    /// Activer la sortie console
    pub enable_console: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: 500,
            min_level: Level::INFO,
            enable_console: true,
        }
    }
}

impl LoggingOptions {
    /// Charge les options depuis la configuration globale
    pub fn from_config() -> Self {
        let config = get_config();

        let min_level = match config.get_log_min_level() {
            Ok(l) => string_to_level(&l).unwrap_or(Level::INFO),
            Err(_) => Level::INFO,
        };

        Self {
            buffer_capacity: config.get_log_cache_size().unwrap_or(500),
            min_level,
            enable_console: config.get_log_enable_console().unwrap_or(true),
        }
    }
}

/// Initialise le système de logging
///
/// # Retourne
///
/// Le `LogState` qui peut être utilisé pour ajouter la route de dump au
/// serveur.
pub fn init_logging(options: LoggingOptions) -> LogState {
    let log_state = LogState::new(options.buffer_capacity);

    let filter = level_to_levelfilter(options.min_level);
    let subscriber = Registry::default()
        .with(filter)
        .with(BufferLayer::new(log_state.clone()));

    if options.enable_console {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(true),
            )
            .init();
    } else {
        subscriber.init();
    }

    log_state
}

fn string_to_level(s: &str) -> Option<Level> {
    match s.to_uppercase().as_str() {
        "ERROR" => Some(Level::ERROR),
        "WARN" => Some(Level::WARN),
        "INFO" => Some(Level::INFO),
        "DEBUG" => Some(Level::DEBUG),
        "TRACE" => Some(Level::TRACE),
        _ => None,
    }
}

fn level_to_levelfilter(level: Level) -> LevelFilter {
    match level {
        Level::ERROR => LevelFilter::ERROR,
        Level::WARN => LevelFilter::WARN,
        Level::INFO => LevelFilter::INFO,
        Level::DEBUG => LevelFilter::DEBUG,
        Level::TRACE => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: SystemTime::now(),
            level: "INFO".to_string(),
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_drops_oldest_entries() {
        let state = LogState::new(2);
        state.push(entry("one"));
        state.push(entry("two"));
        state.push(entry("three"));

        let dump = state.dump();
        assert_eq!(dump.len(), 2);
        assert_eq!(dump[0].message, "two");
        assert_eq!(dump[1].message, "three");
    }

    #[test]
    fn test_string_to_level() {
        assert_eq!(string_to_level("debug"), Some(Level::DEBUG));
        assert_eq!(string_to_level("WARN"), Some(Level::WARN));
        assert_eq!(string_to_level("verbose"), None);
    }
}
