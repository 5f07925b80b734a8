//! # pmoserver - Serveur web haut niveau basé sur Axum
//!
//! Cette crate fournit une abstraction simple et ergonomique pour créer des
//! serveurs HTTP avec Axum, spécialement conçue pour héberger des endpoints
//! SOAP et leurs routes d'appoint.
//!
//! ## Fonctionnalités
//!
//! - 🚀 **Routes JSON simples** : Ajoutez des endpoints API avec `add_route()`
//! - 🎯 **Handlers personnalisés** : Support de handlers Axum arbitraires,
//!   avec ou sans état
//! - 🔀 **Sous-routers** : Montez un router complet (l'endpoint SOAP) avec
//!   `add_router()`
//! - 📡 **Logs en mémoire** : Buffer circulaire des événements `tracing`,
//!   exposé en JSON sur `/log-dump`
//! - ⚡ **Arrêt gracieux** : Gestion propre de l'arrêt sur Ctrl+C
//!
//! ## Exemple d'utilisation
//!
//! ```rust,no_run
//! use pmoserver::{Server, logs::LoggingOptions};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut server = Server::new_configured();
//!     server.init_logging(LoggingOptions::default()).await;
//!
//!     server.add_route("/api/status", || async {
//!         serde_json::json!({"status": "ok"})
//!     }).await;
//!
//!     server.start().await;
//!     server.wait().await;
//! }
//! ```

pub mod logs;
pub mod server;

pub use logs::{LogEntry, LogState, LoggingOptions, init_logging, log_dump};
pub use server::{Server, ServerBuilder, ServerInfo};
