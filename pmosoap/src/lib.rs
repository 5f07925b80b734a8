//! # pmosoap - Endpoint SOAP minimal
//!
//! Cette crate implémente un endpoint SOAP 1.1 minimal : réception d'une
//! enveloppe par HTTP POST, résolution de l'opération visée dans le corps du
//! message, invocation du handler enregistré et construction de la réponse
//! (ou du fault), plus le service du document WSDL statique.
//!
//! ## Fonctionnalités
//!
//! - ✅ Parsing d'enveloppes SOAP (avec ou sans préfixe de namespace)
//! - ✅ Registre d'opérations ordonné, résolution par sous-chaîne
//! - ✅ Construction de réponses SOAP
//! - ✅ Gestion des SOAP Faults (Client / Server)
//! - ✅ Service du document WSDL sur `GET ?wsdl`
//!
//! ## Architecture
//!
//! - [`SoapEnvelope`] : Enveloppe SOAP décodée
//! - [`OperationRegistry`] : Registre ordonné (nom → opération)
//! - [`SoapEndpoint`] : Pipeline de dispatch HTTP
//! - [`SoapFault`] : Erreur SOAP
//!
//! ## Example
//!
//! ```ignore
//! use pmosoap::{OperationRegistry, SoapEndpoint};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! #[serde(rename = "GetVersionResponse")]
//! struct GetVersionResponse {
//!     #[serde(rename = "Version")]
//!     version: String,
//! }
//!
//! let mut registry = OperationRegistry::new();
//! registry.register("GetVersion", |_body| GetVersionResponse {
//!     version: "1.0.3".to_string(),
//! });
//!
//! let endpoint = SoapEndpoint::new(registry, "<definitions/>");
//! let router = endpoint.router("/soap");
//! ```

mod builder;
mod endpoint;
mod envelope;
mod fault;
mod parser;
mod registry;

pub use builder::{SoapEncodeError, build_soap_response, encode_success, marshal_response};
pub use endpoint::SoapEndpoint;
pub use envelope::{SoapBody, SoapEnvelope};
pub use fault::{FaultCode, SoapFault, build_soap_fault};
pub use parser::{SoapParseError, parse_soap_envelope};
pub use registry::{OperationRegistry, SoapOperation};

/// Namespace SOAP 1.1 utilisé par les enveloppes sortantes
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
