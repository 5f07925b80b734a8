//! Endpoint SOAP : pipeline de dispatch et document WSDL
//!
//! Une seule route HTTP, dispatchée sur la méthode :
//!
//! - `GET` avec le drapeau `?wsdl` → document WSDL servi tel quel
//! - `POST` → pipeline SOAP (lecture du corps, décodage de l'enveloppe,
//!   résolution de l'opération, invocation, encodage de la réponse)
//! - toute autre méthode → 405
//!
//! Toute étape du pipeline peut basculer en fault ; succès comme faults sont
//! renvoyés avec `Content-Type: text/xml; charset=utf-8` et un en-tête
//! `SOAPAction` vide. Les faults sortent uniformément en HTTP 500, seul le
//! `faultcode` embarqué distingue l'attribution Client/Server.

use std::sync::Arc;

use axum::{
    Router,
    body::to_bytes,
    extract::{Request, State},
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use tracing::{debug, error, info, warn};

use crate::builder::build_soap_response;
use crate::fault::{FaultCode, build_soap_fault};
use crate::parser::parse_soap_envelope;
use crate::registry::OperationRegistry;

const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";
const WSDL_CONTENT_TYPE: &str = "text/xml";

/// Endpoint SOAP partagé entre les requêtes
///
/// Porte le registre des opérations et le document WSDL, tous deux immuables
/// après construction : aucune synchronisation n'est nécessaire entre les
/// requêtes concurrentes.
#[derive(Clone)]
pub struct SoapEndpoint {
    inner: Arc<EndpointInner>,
}

struct EndpointInner {
    registry: OperationRegistry,
    wsdl: String,
}

impl SoapEndpoint {
    /// Crée un endpoint à partir d'un registre et d'un document WSDL opaque
    ///
    /// Le document WSDL est servi tel quel, jamais parsé ni validé.
    pub fn new(registry: OperationRegistry, wsdl: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(EndpointInner {
                registry,
                wsdl: wsdl.into(),
            }),
        }
    }

    /// Construit le router Axum de l'endpoint
    pub fn router(&self, path: &str) -> Router {
        Router::new()
            .route(path, any(soap_endpoint_handler))
            .with_state(self.clone())
    }

    /// Document WSDL configuré
    pub fn wsdl(&self) -> &str {
        &self.inner.wsdl
    }

    /// Registre des opérations
    pub fn registry(&self) -> &OperationRegistry {
        &self.inner.registry
    }
}

/// Handler Axum de l'endpoint SOAP
async fn soap_endpoint_handler(
    State(endpoint): State<SoapEndpoint>,
    request: Request,
) -> Response {
    if request.method() == Method::GET && wants_wsdl(request.uri().query()) {
        debug!("📄 Serving WSDL document");
        return wsdl_response(&endpoint);
    }

    if request.method() != Method::POST {
        return (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response();
    }

    // Lire le corps complet de la requête
    let bytes = match to_bytes(request.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to read request body: {}", e);
            return fault_response(FaultCode::Client, "Cannot read request body");
        }
    };

    // Décoder l'enveloppe SOAP
    let envelope = match parse_soap_envelope(&bytes) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!("Invalid SOAP envelope: {}", e);
            return fault_response(FaultCode::Client, "Invalid SOAP request format");
        }
    };

    // Résoudre l'opération depuis le contenu du corps
    let body_content = envelope.body.content;
    let Some((name, operation)) = endpoint.inner.registry.resolve(&body_content) else {
        return fault_response(FaultCode::Client, "Unknown operation");
    };
    info!("📡 Operation found: {}", name);

    // Invoquer le handler puis encoder la réponse
    let payload = match operation(body_content.trim()) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Error marshaling response for {}: {}", name, e);
            return fault_response(FaultCode::Server, "Internal server error");
        }
    };

    let response = build_soap_response(&payload);
    info!("✅ Sent SOAP response: {}", response);

    (StatusCode::OK, soap_headers(), response).into_response()
}

/// Indique si la query string porte le drapeau `wsdl`
fn wants_wsdl(query: Option<&str>) -> bool {
    query
        .map(|q| q.split('&').any(|p| p == "wsdl" || p.starts_with("wsdl=")))
        .unwrap_or(false)
}

/// En-têtes communs aux réponses SOAP, succès comme fault
fn soap_headers() -> [(HeaderName, HeaderValue); 2] {
    [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static(SOAP_CONTENT_TYPE),
        ),
        (
            HeaderName::from_static("soapaction"),
            HeaderValue::from_static(""),
        ),
    ]
}

fn fault_response(code: FaultCode, message: &str) -> Response {
    let envelope = build_soap_fault(code, message);
    warn!("❌ Sent SOAP fault: {} - {}", code, message);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        soap_headers(),
        envelope,
    )
        .into_response()
}

fn wsdl_response(endpoint: &SoapEndpoint) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, WSDL_CONTENT_TYPE)],
        endpoint.inner.wsdl.clone(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_wsdl() {
        assert!(wants_wsdl(Some("wsdl")));
        assert!(wants_wsdl(Some("wsdl=1")));
        assert!(wants_wsdl(Some("foo=bar&wsdl")));
        assert!(!wants_wsdl(Some("foo=wsdl")));
        assert!(!wants_wsdl(Some("")));
        assert!(!wants_wsdl(None));
    }
}
