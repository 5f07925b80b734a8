//! Construction de réponses SOAP

use serde::Serialize;

/// Erreur de sérialisation d'une valeur de réponse
#[derive(Debug, thiserror::Error)]
pub enum SoapEncodeError {
    #[error("XML serialization error: {0}")]
    Serialize(String),
}

/// Sérialise une valeur de réponse en fragment XML
///
/// La valeur est sérialisée via serde ; les formes que XML ne sait pas
/// représenter (maps, séquences nues) produisent une `SoapEncodeError` que le
/// pipeline convertit en fault `Server` plutôt que de la propager au client.
pub fn marshal_response<T: Serialize>(value: &T) -> Result<String, SoapEncodeError> {
    quick_xml::se::to_string(value).map_err(|e| SoapEncodeError::Serialize(e.to_string()))
}

/// Enveloppe un fragment XML déjà sérialisé dans l'enveloppe de succès
pub fn build_soap_response(payload: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
    <soap:Body>
        {}
    </soap:Body>
</soap:Envelope>"#,
        payload
    )
}

/// Sérialise une valeur de réponse et construit l'enveloppe de succès complète
pub fn encode_success<T: Serialize>(value: &T) -> Result<String, SoapEncodeError> {
    Ok(build_soap_response(&marshal_response(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Serialize)]
    #[serde(rename = "GetVersionResponse")]
    struct GetVersionResponse {
        #[serde(rename = "Version")]
        version: String,
    }

    #[test]
    fn test_encode_success() {
        let response = GetVersionResponse {
            version: "1.0.3".to_string(),
        };

        let xml = encode_success(&response).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/""#));
        assert!(xml.contains("<soap:Body>"));
        assert!(xml.contains("<GetVersionResponse><Version>1.0.3</Version></GetVersionResponse>"));
    }

    #[test]
    fn test_marshal_escapes_text() {
        let response = GetVersionResponse {
            version: "1 < 2 & 3".to_string(),
        };

        let fragment = marshal_response(&response).unwrap();
        assert!(fragment.contains("1 &lt; 2 &amp; 3"));
    }

    #[test]
    fn test_marshal_unsupported_value() {
        let mut map = HashMap::new();
        map.insert("key".to_string(), "value".to_string());

        assert!(marshal_response(&map).is_err());
    }
}
