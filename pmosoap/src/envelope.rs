//! Structures de l'enveloppe SOAP

/// Enveloppe SOAP complète
#[derive(Debug, Clone)]
pub struct SoapEnvelope {
    /// Namespace déclaré sur l'élément racine, si présent
    pub namespace: Option<String>,

    /// Corps SOAP contenant l'opération ou la réponse
    pub body: SoapBody,
}

/// Corps SOAP
///
/// Le contenu est le markup XML brut sous `<Body>`, non décodé : chaque
/// opération enregistrée est responsable d'en extraire ses propres arguments.
#[derive(Debug, Clone)]
pub struct SoapBody {
    /// Contenu XML brut du corps
    pub content: String,
}

impl SoapEnvelope {
    /// Crée une nouvelle enveloppe SOAP
    pub fn new(body: SoapBody) -> Self {
        Self {
            namespace: None,
            body,
        }
    }

    /// Crée une nouvelle enveloppe avec un namespace explicite
    pub fn with_namespace(namespace: impl Into<String>, body: SoapBody) -> Self {
        Self {
            namespace: Some(namespace.into()),
            body,
        }
    }
}

impl SoapBody {
    /// Crée un corps SOAP à partir de son markup interne
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
