//! SOAP Faults

use quick_xml::escape::escape;
use std::fmt;

/// Code de fault SOAP
///
/// Vocabulaire fixe : `Client` pour une requête fautive, `Server` pour une
/// erreur interne de traitement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultCode {
    /// Erreur imputable au client
    Client,
    /// Erreur imputable au serveur
    Server,
}

impl FaultCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultCode::Client => "Client",
            FaultCode::Server => "Server",
        }
    }
}

impl fmt::Display for FaultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Erreur SOAP (Fault)
#[derive(Debug, Clone)]
pub struct SoapFault {
    /// Code du fault
    pub code: FaultCode,

    /// Description de l'erreur
    pub message: String,
}

impl SoapFault {
    /// Crée un fault SOAP
    pub fn new(code: FaultCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Construit l'enveloppe de fault correspondante
    pub fn to_envelope(&self) -> String {
        build_soap_fault(self.code, &self.message)
    }
}

/// Construit une enveloppe SOAP Fault complète
///
/// Le message est échappé : un texte contenant `<`, `&` ou `>` ne peut pas
/// produire un document malformé.
pub fn build_soap_fault(code: FaultCode, message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
    <soap:Body>
        <soap:Fault>
            <faultcode>{}</faultcode>
            <faultstring>{}</faultstring>
        </soap:Fault>
    </soap:Body>
</soap:Envelope>"#,
        code.as_str(),
        escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_fault() {
        let xml = build_soap_fault(FaultCode::Client, "Unknown operation");

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("<soap:Fault>"));
        assert!(xml.contains("<faultcode>Client</faultcode>"));
        assert!(xml.contains("<faultstring>Unknown operation</faultstring>"));
    }

    #[test]
    fn test_build_server_fault() {
        let xml = build_soap_fault(FaultCode::Server, "Internal server error");

        assert!(xml.contains("<faultcode>Server</faultcode>"));
        assert!(xml.contains("<faultstring>Internal server error</faultstring>"));
    }

    #[test]
    fn test_fault_message_is_escaped() {
        let xml = build_soap_fault(FaultCode::Client, "bad value: <a> & <b>");

        assert!(xml.contains("bad value: &lt;a&gt; &amp; &lt;b&gt;"));
        assert!(!xml.contains("<a>"));
    }

    #[test]
    fn test_fault_roundtrip_helper() {
        let fault = SoapFault::new(FaultCode::Server, "boom");
        assert_eq!(fault.to_envelope(), build_soap_fault(FaultCode::Server, "boom"));
    }
}
