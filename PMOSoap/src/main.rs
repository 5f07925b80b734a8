use pmoconfig::get_config;
use pmoserver::{Server, logs::LoggingOptions};
use pmosoap::{OperationRegistry, SoapEndpoint};
use serde::Serialize;
use tracing::{info, warn};

// Document WSDL par défaut, servi si aucun fichier n'est configuré
const DEFAULT_WSDL: &str = include_str!("pmosoap.wsdl");

#[derive(Serialize)]
#[serde(rename = "GetVersionResponse")]
struct GetVersionResponse {
    #[serde(rename = "Version")]
    version: String,
}

#[derive(Serialize)]
#[serde(rename = "GetServerInfoResponse")]
struct GetServerInfoResponse {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "HttpPort")]
    http_port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = get_config();

    // ========== PHASE 1 : Infrastructure HTTP ==========

    let mut server = Server::new_configured();
    server.init_logging(LoggingOptions::from_config()).await;

    // Route d'information générale
    server
        .add_route("/info", || async {
            serde_json::json!({"version": env!("CARGO_PKG_VERSION")})
        })
        .await;

    // ========== PHASE 2 : Endpoint SOAP ==========

    info!("📡 Registering SOAP operations...");
    let mut registry = OperationRegistry::new();

    registry.register("GetVersion", |_body| GetVersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    });

    let server_info = server.info();
    registry.register("GetServerInfo", move |_body| GetServerInfoResponse {
        name: server_info.name.clone(),
        http_port: server_info.http_port,
    });

    info!("✅ {} SOAP operation(s) registered", registry.len());

    // Charger le document WSDL configuré, sinon celui embarqué
    let wsdl = match config.get_wsdl_path() {
        Ok(path) => match std::fs::read_to_string(&path) {
            Ok(content) => {
                info!(wsdl_file = %path, "Loaded WSDL document");
                content
            }
            Err(e) => {
                warn!(
                    "⚠️ Failed to read WSDL file {}: {}, using embedded document",
                    path, e
                );
                DEFAULT_WSDL.to_string()
            }
        },
        Err(_) => DEFAULT_WSDL.to_string(),
    };

    let endpoint = SoapEndpoint::new(registry, wsdl);
    let endpoint_path = config.get_soap_endpoint();
    server.add_router("/", endpoint.router(&endpoint_path)).await;
    info!("✅ SOAP endpoint available at {}", endpoint_path);

    // ========== PHASE 3 : Démarrage du serveur ==========

    info!("🌐 Starting HTTP server...");
    server.start().await;

    info!("✅ PMOSoap is ready!");
    info!("Press Ctrl+C to stop...");
    server.wait().await;

    Ok(())
}
