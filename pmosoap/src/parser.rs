//! Parser d'enveloppes SOAP

use crate::envelope::{SoapBody, SoapEnvelope};
use std::io::BufReader;
use xmltree::{Element, EmitterConfig, XMLNode};

/// Erreur de parsing SOAP
#[derive(Debug, thiserror::Error)]
pub enum SoapParseError {
    #[error("XML parse error: {0}")]
    XmlError(#[from] xmltree::ParseError),

    #[error("XML emit error: {0}")]
    EmitError(#[from] xmltree::Error),

    #[error("Missing SOAP Envelope")]
    MissingEnvelope,

    #[error("Missing SOAP Body")]
    MissingBody,
}

/// Parse une enveloppe SOAP complète à partir de bytes XML
///
/// Les éléments `Envelope` et `Body` sont reconnus par leur nom local, avec ou
/// sans préfixe de namespace : `<Envelope>` et `<soap:Envelope>` sont tous les
/// deux acceptés, sans exiger un namespace déclaré particulier.
pub fn parse_soap_envelope(xml: &[u8]) -> Result<SoapEnvelope, SoapParseError> {
    let reader = BufReader::new(xml);
    let root = Element::parse(reader)?;

    // Vérifier que c'est bien une Envelope
    if !root.name.ends_with("Envelope") {
        return Err(SoapParseError::MissingEnvelope);
    }

    let namespace = root.namespace.clone();

    // Extraire Body (obligatoire)
    let body_elem = root
        .get_child("Body")
        .or_else(|| {
            root.children
                .iter()
                .find_map(|n| n.as_element().filter(|e| e.name.ends_with("Body")))
        })
        .ok_or(SoapParseError::MissingBody)?;

    let body = SoapBody {
        content: inner_markup(body_elem)?,
    };

    Ok(SoapEnvelope { namespace, body })
}

/// Ré-émet le contenu du Body tel quel, noeuds texte compris
fn inner_markup(elem: &Element) -> Result<String, SoapParseError> {
    let mut content = String::new();

    for node in &elem.children {
        match node {
            XMLNode::Element(child) => {
                let mut buf = Vec::new();
                let config = EmitterConfig::new().write_document_declaration(false);
                child.write_with_config(&mut buf, config)?;
                content.push_str(&String::from_utf8_lossy(&buf));
            }
            XMLNode::Text(text) | XMLNode::CData(text) => content.push_str(text),
            _ => {}
        }
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixed_envelope() {
        let xml = r#"<?xml version="1.0"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <GetVersion/>
  </soap:Body>
</soap:Envelope>"#;

        let envelope = parse_soap_envelope(xml.as_bytes()).unwrap();
        assert_eq!(
            envelope.namespace,
            Some("http://schemas.xmlsoap.org/soap/envelope/".to_string())
        );
        assert!(envelope.body.content.contains("GetVersion"));
    }

    #[test]
    fn test_parse_unprefixed_envelope() {
        let xml = "<Envelope><Body><GetVersion/></Body></Envelope>";

        let envelope = parse_soap_envelope(xml.as_bytes()).unwrap();
        assert_eq!(envelope.namespace, None);
        assert!(envelope.body.content.contains("GetVersion"));
    }

    #[test]
    fn test_body_content_keeps_arguments() {
        let xml = r#"<Envelope>
  <Body>
    <SetVolume>
      <InstanceID>0</InstanceID>
      <DesiredVolume>42</DesiredVolume>
    </SetVolume>
  </Body>
</Envelope>"#;

        let envelope = parse_soap_envelope(xml.as_bytes()).unwrap();
        let content = &envelope.body.content;
        assert!(content.contains("SetVolume"));
        assert!(content.contains("<InstanceID>0</InstanceID>"));
        assert!(content.contains("<DesiredVolume>42</DesiredVolume>"));
    }

    #[test]
    fn test_missing_body() {
        let xml = "<Envelope><Header/></Envelope>";

        match parse_soap_envelope(xml.as_bytes()) {
            Err(SoapParseError::MissingBody) => {}
            other => panic!("expected MissingBody, got {:?}", other),
        }
    }

    #[test]
    fn test_root_is_not_an_envelope() {
        let xml = "<Message><Body><GetVersion/></Body></Message>";

        match parse_soap_envelope(xml.as_bytes()) {
            Err(SoapParseError::MissingEnvelope) => {}
            other => panic!("expected MissingEnvelope, got {:?}", other),
        }
    }

    #[test]
    fn test_not_xml_at_all() {
        let result = parse_soap_envelope(b"not xml at all");
        assert!(matches!(result, Err(SoapParseError::XmlError(_))));
    }
}
